//! The generic JSON view shared by every representation.

use crate::link::{Credentials, Link};
use crate::media::Kind;
use serde_json::{Map, Value};

pub(crate) const INDEX_TAG: &str = "index";
pub(crate) const UPDATE_TAG: &str = "update";
pub(crate) const DESTROY_TAG: &str = "destroy";

/// The fixed dictionary of keys a representation recognizes.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    /// Attributes are found in an object under this key.
    pub name: &'static str,
    /// Scalar fields.
    pub attributes: &'static [&'static str],
    /// Resource blocks, i.e. outgoing links.
    pub resources: &'static [&'static str],
}

impl Schema {
    fn has_attribute(&self, key: &str) -> bool {
        self.attributes.iter().any(|k| *k == key)
    }

    fn has_resource(&self, key: &str) -> bool {
        self.resources.iter().any(|k| *k == key)
    }
}

/// A JSON object returned by the service, together with the link it came from.
///
/// Lookups only succeed for keys listed in the [Schema]. Unrecognized keys,
/// missing keys, and JSON `null` are all `None`.
#[derive(Debug, Clone)]
pub struct Document {
    link: Link,
    content: Map<String, Value>,
    schema: &'static Schema,
}

impl Document {
    pub(crate) fn new(link: Link, content: Map<String, Value>, schema: &'static Schema) -> Self {
        Self {
            link,
            content,
            schema,
        }
    }

    /// The link which produced this document.
    pub fn self_link(&self) -> &Link {
        &self.link
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.link.credentials()
    }

    pub fn content(&self) -> &Map<String, Value> {
        &self.content
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Get an attribute, which lives under the schema's name.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        if !self.schema.has_attribute(key) {
            return None;
        }
        self.content
            .get(self.schema.name)?
            .as_object()?
            .get(key)
            .filter(|v| !v.is_null())
    }

    /// Get a resource block (or array of resource blocks).
    pub fn resource(&self, key: &str) -> Option<&Value> {
        if !self.schema.has_resource(key) {
            return None;
        }
        self.content.get(key).filter(|v| !v.is_null())
    }

    /// Get the link described by a resource block.
    /// The link carries the same credentials as this document.
    pub fn link(&self, key: &str) -> Option<Link> {
        Link::from_block(self.resource(key)?, self.credentials())
    }

    /// Get the links described by an array of resource blocks.
    pub fn links(&self, key: &str) -> Vec<Link> {
        self.resource(key)
            .and_then(Value::as_array)
            .map(|blocks| {
                blocks
                    .iter()
                    .filter_map(|b| Link::from_block(b, self.credentials()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn str_attribute(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(Value::as_str)
    }

    pub fn bool_attribute(&self, key: &str) -> Option<bool> {
        self.attribute(key).and_then(Value::as_bool)
    }

    pub fn u64_attribute(&self, key: &str) -> Option<u64> {
        self.attribute(key).and_then(Value::as_u64)
    }

    pub fn f64_attribute(&self, key: &str) -> Option<f64> {
        self.attribute(key).and_then(Value::as_f64)
    }

    /// Pretty-printed JSON content.
    pub fn dump(&self) -> String {
        format!("{:#}", Value::Object(self.content.clone()))
    }
}

/// A representation which can be fetched from the service.
pub trait Resource: Sized {
    const KIND: Kind;
    const SCHEMA: &'static Schema;

    fn from_document(document: Document) -> Self;

    fn document(&self) -> &Document;

    fn into_document(self) -> Document;

    /// The link which produced this representation, e.g. to reload it.
    fn self_link(&self) -> &Link {
        self.document().self_link()
    }

    /// Link to the index which lists this resource and its siblings.
    fn index_link(&self) -> Option<Link> {
        self.document().link(INDEX_TAG)
    }

    fn dump(&self) -> String {
        self.document().dump()
    }
}

/// A resource which can be modified or deleted.
pub trait Item: Resource {
    /// Link for PUT.
    fn update_link(&self) -> Option<Link> {
        self.document().link(UPDATE_TAG)
    }

    /// Link for DELETE.
    fn destroy_link(&self) -> Option<Link> {
        self.document().link(DESTROY_TAG)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rstest::*;
    use serde_json::json;

    pub(crate) fn doc<T: Resource>(content: Value) -> T {
        let credentials = Credentials::new("alice", "s3cret");
        let link = Link::to_kind(T::KIND, "https://chemcaster.com/self", credentials);
        let content = match content {
            Value::Object(map) => map,
            _ => panic!("test content must be an object"),
        };
        T::from_document(Document::new(link, content, T::SCHEMA))
    }

    pub(crate) fn block(name: &str) -> Value {
        json!({
            "name": name,
            "uri": format!("https://chemcaster.com/{}", name),
            "media_type": "application/vnd.com.chemcaster.Index+json"
        })
    }

    const WIDGET: Schema = Schema {
        name: "widget",
        attributes: &["color", "count", "gone"],
        resources: &["parent", "missing"],
    };

    #[fixture]
    fn widget() -> Document {
        let credentials = Credentials::new("alice", "s3cret");
        let link = Link::new("x", "https://chemcaster.com/widgets/1", credentials);
        let content = json!({
            "widget": {"color": "red", "count": 3, "gone": null, "secret": "hidden"},
            "parent": block("parent"),
            "sibling": block("sibling"),
            "missing": null
        });
        Document::new(link, content.as_object().unwrap().clone(), &WIDGET)
    }

    #[rstest]
    fn test_attribute(widget: Document) {
        assert_eq!(widget.str_attribute("color"), Some("red"));
        assert_eq!(widget.u64_attribute("count"), Some(3));
        assert_eq!(widget.f64_attribute("count"), Some(3.0));
        assert_eq!(widget.str_attribute("count"), None);
    }

    #[rstest]
    fn test_null_attribute_is_absent(widget: Document) {
        assert_eq!(widget.attribute("gone"), None);
    }

    #[rstest]
    fn test_unrecognized_keys_are_absent(widget: Document) {
        assert_eq!(widget.attribute("secret"), None);
        assert_eq!(widget.attribute("parent"), None);
        assert_eq!(widget.resource("sibling"), None);
        assert!(widget.link("sibling").is_none());
    }

    #[rstest]
    fn test_link_has_document_credentials(widget: Document) {
        let parent = widget.link("parent").unwrap();
        assert_eq!(parent.name(), Some("parent"));
        assert_eq!(parent.uri().as_str(), "https://chemcaster.com/parent");
        assert_eq!(parent.credentials(), widget.credentials());
        assert!(widget.link("missing").is_none());
    }

    #[rstest]
    fn test_dump(widget: Document) {
        let dumped = widget.dump();
        let reparsed: Value = serde_json::from_str(&dumped).unwrap();
        assert_eq!(&reparsed["widget"]["color"], "red");
        assert!(dumped.contains('\n'));
    }
}
