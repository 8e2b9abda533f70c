use super::document::{Document, Item, Resource, Schema, DESTROY_TAG, INDEX_TAG, UPDATE_TAG};
use crate::link::Link;
use crate::media::Kind;
use serde::Serialize;

const SERIALIZATION_TAG: &str = "serialization";
const MODE_TAG: &str = "mode";

const QUERY: Schema = Schema {
    name: "query",
    attributes: &[SERIALIZATION_TAG, MODE_TAG],
    resources: &[
        "images",
        INDEX_TAG,
        "registry",
        "executions",
        UPDATE_TAG,
        DESTROY_TAG,
    ],
};

/// A saved structure search.
#[derive(Debug, Clone)]
pub struct Query(Document);

impl Resource for Query {
    const KIND: Kind = Kind::Query;
    const SCHEMA: &'static Schema = &QUERY;

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

impl Item for Query {}

impl Query {
    pub fn serialization(&self) -> Option<&str> {
        self.0.str_attribute(SERIALIZATION_TAG)
    }

    /// Search mode, e.g. `substructure` or `exact`.
    pub fn mode(&self) -> Option<&str> {
        self.0.str_attribute(MODE_TAG)
    }

    pub fn images_link(&self) -> Option<Link> {
        self.0.link("images")
    }

    pub fn registry_link(&self) -> Option<Link> {
        self.0.link("registry")
    }

    pub fn executions_link(&self) -> Option<Link> {
        self.0.link("executions")
    }
}

/// Request body for creating a [Query].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryAttributes<'a> {
    pub mode: &'a str,
    pub serialization: &'a str,
}
