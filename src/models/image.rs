use super::document::{Document, Item, Resource, Schema, DESTROY_TAG, UPDATE_TAG};
use crate::link::Link;
use crate::media::Kind;
use serde::Serialize;

const WIDTH_TAG: &str = "width";
const HEIGHT_TAG: &str = "height";
const DATA_TAG: &str = "data";
const FORMAT_TAG: &str = "format";
const IMAGEABLE_TAG: &str = "imageable";

const IMAGE: Schema = Schema {
    name: "image",
    attributes: &[WIDTH_TAG, HEIGHT_TAG, DATA_TAG, FORMAT_TAG],
    resources: &[IMAGEABLE_TAG, UPDATE_TAG, DESTROY_TAG],
};

/// A rendered picture of a structure, substance, or query.
#[derive(Debug, Clone)]
pub struct Image(Document);

impl Resource for Image {
    const KIND: Kind = Kind::Image;
    const SCHEMA: &'static Schema = &IMAGE;

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

impl Item for Image {}

impl Image {
    pub fn width(&self) -> Option<u64> {
        self.0.u64_attribute(WIDTH_TAG)
    }

    pub fn height(&self) -> Option<u64> {
        self.0.u64_attribute(HEIGHT_TAG)
    }

    /// Base64-encoded image bytes, not decoded here.
    pub fn data(&self) -> Option<&str> {
        self.0.str_attribute(DATA_TAG)
    }

    pub fn format(&self) -> Option<&str> {
        self.0.str_attribute(FORMAT_TAG)
    }

    /// Link to what this image depicts.
    pub fn imageable_link(&self) -> Option<Link> {
        self.0.link(IMAGEABLE_TAG)
    }

    /// What this image depicts, according to the name of [Image::imageable_link].
    pub fn imageable_kind(&self) -> Option<Kind> {
        self.imageable_link()
            .and_then(|link| link.name().and_then(Kind::from_hash_key))
    }
}

/// Request body for creating an [Image].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageAttributes<'a> {
    pub width: u32,
    pub height: u32,
    pub format: &'a str,
}
