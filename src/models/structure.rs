use super::document::{Document, Item, Resource, Schema, DESTROY_TAG, UPDATE_TAG};
use crate::link::Link;
use crate::media::Kind;

const SERIALIZATION_TAG: &str = "serialization";
const INCHI_TAG: &str = "inchi";

const STRUCTURE: Schema = Schema {
    name: "structure",
    attributes: &[SERIALIZATION_TAG, INCHI_TAG],
    resources: &["images", "registry", "components", UPDATE_TAG, DESTROY_TAG],
};

/// A unique chemical structure within a registry.
#[derive(Debug, Clone)]
pub struct Structure(Document);

impl Resource for Structure {
    const KIND: Kind = Kind::Structure;
    const SCHEMA: &'static Schema = &STRUCTURE;

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

impl Item for Structure {}

impl Structure {
    pub fn serialization(&self) -> Option<&str> {
        self.0.str_attribute(SERIALIZATION_TAG)
    }

    pub fn inchi(&self) -> Option<&str> {
        self.0.str_attribute(INCHI_TAG)
    }

    pub fn images_link(&self) -> Option<Link> {
        self.0.link("images")
    }

    pub fn registry_link(&self) -> Option<Link> {
        self.0.link("registry")
    }

    pub fn components_link(&self) -> Option<Link> {
        self.0.link("components")
    }
}
