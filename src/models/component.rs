use super::document::{Document, Resource, Schema};
use crate::link::Link;
use crate::media::Kind;

const MULTIPLIER_TAG: &str = "multiplier";

const COMPONENT: Schema = Schema {
    name: "component",
    attributes: &[MULTIPLIER_TAG],
    resources: &["structure", "substance"],
};

/// A structure and how many times it appears in a substance.
#[derive(Debug, Clone)]
pub struct Component(Document);

impl Resource for Component {
    const KIND: Kind = Kind::Component;
    const SCHEMA: &'static Schema = &COMPONENT;

    fn from_document(document: Document) -> Self {
        Self(document)
    }

    fn document(&self) -> &Document {
        &self.0
    }

    fn into_document(self) -> Document {
        self.0
    }

    fn index_link(&self) -> Option<Link> {
        None
    }
}

impl Component {
    pub fn multiplier(&self) -> Option<f64> {
        self.0.f64_attribute(MULTIPLIER_TAG)
    }

    pub fn structure_link(&self) -> Option<Link> {
        self.0.link("structure")
    }

    pub fn substance_link(&self) -> Option<Link> {
        self.0.link("substance")
    }
}
