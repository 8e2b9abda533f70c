use super::dates::parse_rfc2822;
use super::document::{Document, Resource, Schema, DESTROY_TAG};
use crate::errors::InvalidDate;
use crate::link::Link;
use crate::media::Kind;
use time::OffsetDateTime;

const CREATED_AT_TAG: &str = "created_at";
const DONE_TAG: &str = "done";

const ARCHIVE: Schema = Schema {
    name: "archive",
    attributes: &[CREATED_AT_TAG, DONE_TAG],
    resources: &["zipfile", "registry", DESTROY_TAG],
};

/// A snapshot of a registry, which becomes downloadable as a zip file once done.
#[derive(Debug, Clone)]
pub struct Archive(Document);

impl Resource for Archive {
    const KIND: Kind = Kind::Archive;
    const SCHEMA: &'static Schema = &ARCHIVE;

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

impl Archive {
    pub fn created_at(&self) -> Result<Option<OffsetDateTime>, InvalidDate> {
        self.0
            .str_attribute(CREATED_AT_TAG)
            .map(parse_rfc2822)
            .transpose()
    }

    pub fn is_done(&self) -> Option<bool> {
        self.0.bool_attribute(DONE_TAG)
    }

    /// Link to the zip file. The service answers 404 (or worse) until [Archive::is_done].
    pub fn zipfile_link(&self) -> Option<Link> {
        self.0.link("zipfile")
    }

    pub fn registry_link(&self) -> Option<Link> {
        self.0.link("registry")
    }

    pub fn destroy_link(&self) -> Option<Link> {
        self.0.link(DESTROY_TAG)
    }
}
