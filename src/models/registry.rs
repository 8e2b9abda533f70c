use super::document::{Document, Item, Resource, Schema, DESTROY_TAG, INDEX_TAG, UPDATE_TAG};
use crate::link::Link;
use crate::media::Kind;
use serde::Serialize;

const NAME_TAG: &str = "name";
const DELETABLE_TAG: &str = "deletable";

const REGISTRY: Schema = Schema {
    name: "registry",
    attributes: &[NAME_TAG, DELETABLE_TAG],
    resources: &[
        "service",
        "queries",
        "structures",
        "substances",
        "archives",
        "registrations",
        "logs",
        INDEX_TAG,
        UPDATE_TAG,
        DESTROY_TAG,
    ],
};

/// A named collection of substances, structures, queries, and everything else.
#[derive(Debug, Clone)]
pub struct Registry(Document);

impl Resource for Registry {
    const KIND: Kind = Kind::Registry;
    const SCHEMA: &'static Schema = &REGISTRY;

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

impl Item for Registry {}

impl Registry {
    pub fn name(&self) -> Option<&str> {
        self.0.str_attribute(NAME_TAG)
    }

    /// A registry can only be destroyed once it is marked deletable.
    pub fn is_deletable(&self) -> Option<bool> {
        self.0.bool_attribute(DELETABLE_TAG)
    }

    pub fn service_link(&self) -> Option<Link> {
        self.0.link("service")
    }

    pub fn queries_link(&self) -> Option<Link> {
        self.0.link("queries")
    }

    pub fn structures_link(&self) -> Option<Link> {
        self.0.link("structures")
    }

    pub fn substances_link(&self) -> Option<Link> {
        self.0.link("substances")
    }

    pub fn archives_link(&self) -> Option<Link> {
        self.0.link("archives")
    }

    pub fn registrations_link(&self) -> Option<Link> {
        self.0.link("registrations")
    }

    pub fn logs_link(&self) -> Option<Link> {
        self.0.link("logs")
    }
}

/// Request body for creating or updating a [Registry].
/// Absent fields are left out of the body, so the service keeps their values.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistryAttributes<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletable: Option<bool>,
}

impl<'a> RegistryAttributes<'a> {
    pub fn new(name: &'a str, deletable: bool) -> Self {
        Self {
            name: Some(name),
            deletable: Some(deletable),
        }
    }
}
