use super::document::{Document, Resource, Schema};
use crate::errors::ChemcasterError;
use crate::link::{Link, NamedUri};
use crate::media::Kind;
use crate::types::ResourceUri;
use serde_json::Value;

const ITEMS_TAG: &str = "items";
const CREATE_TAG: &str = "create";
const PARENT_TAG: &str = "parent";
const NEXT_PAGE_TAG: &str = "next_page";

const INDEX: Schema = Schema {
    name: "index",
    attributes: &[],
    resources: &[ITEMS_TAG, CREATE_TAG, PARENT_TAG, NEXT_PAGE_TAG],
};

/// A listing of links to resources, plus a link for creating a new one.
#[derive(Debug, Clone)]
pub struct Index(Document);

impl Resource for Index {
    const KIND: Kind = Kind::Index;
    const SCHEMA: &'static Schema = &INDEX;

    fn from_document(document: Document) -> Self {
        Self(document)
    }

    fn document(&self) -> &Document {
        &self.0
    }

    fn into_document(self) -> Document {
        self.0
    }
}

impl Index {
    fn items(&self) -> &[Value] {
        self.0
            .resource(ITEMS_TAG)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Links to every item on this page.
    pub fn item_links(&self) -> Vec<Link> {
        self.0.links(ITEMS_TAG)
    }

    /// Names and URIs of every item on this page.
    pub fn item_names(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.items()
            .iter()
            .map(|item| {
                let field = |key: &str| {
                    item.get(key)
                        .and_then(Value::as_str)
                        .ok_or_else(|| ChemcasterError::MalformedItem(item.to_string()))
                };
                Ok(NamedUri {
                    name: field("name")?.to_string(),
                    uri: ResourceUri::new(field("uri")?.to_string()),
                })
            })
            .collect()
    }

    /// Link to the first item with the given name.
    pub fn item_named(&self, name: &str) -> Option<Link> {
        self.item_links()
            .into_iter()
            .find(|link| link.name() == Some(name))
    }

    /// Link for POSTing a new item.
    pub fn create_link(&self) -> Option<Link> {
        self.0.link(CREATE_TAG)
    }

    pub fn parent_link(&self) -> Option<Link> {
        self.0.link(PARENT_TAG)
    }

    pub fn next_page_link(&self) -> Option<Link> {
        self.0.link(NEXT_PAGE_TAG)
    }
}
