use super::document::{Document, Item, Resource, Schema, DESTROY_TAG, INDEX_TAG, UPDATE_TAG};
use crate::link::Link;
use crate::media::Kind;

const SERIALIZATION_TAG: &str = "serialization";
const INCHI_TAG: &str = "inchi";

const SUBSTANCE: Schema = Schema {
    name: "substance",
    attributes: &[SERIALIZATION_TAG, INCHI_TAG],
    resources: &[
        "components",
        "images",
        INDEX_TAG,
        "registration",
        "registry",
        UPDATE_TAG,
        DESTROY_TAG,
    ],
};

/// A registered substance, made of one or more components.
#[derive(Debug, Clone)]
pub struct Substance(Document);

impl Resource for Substance {
    const KIND: Kind = Kind::Substance;
    const SCHEMA: &'static Schema = &SUBSTANCE;

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

impl Item for Substance {}

impl Substance {
    /// Molfile, passed through as-is.
    pub fn serialization(&self) -> Option<&str> {
        self.0.str_attribute(SERIALIZATION_TAG)
    }

    pub fn inchi(&self) -> Option<&str> {
        self.0.str_attribute(INCHI_TAG)
    }

    pub fn components_link(&self) -> Option<Link> {
        self.0.link("components")
    }

    pub fn images_link(&self) -> Option<Link> {
        self.0.link("images")
    }

    pub fn registration_link(&self) -> Option<Link> {
        self.0.link("registration")
    }

    pub fn registry_link(&self) -> Option<Link> {
        self.0.link("registry")
    }
}
