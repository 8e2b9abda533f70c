use super::dates::parse_zoned;
use super::document::{Document, Resource, Schema, INDEX_TAG};
use crate::errors::InvalidDate;
use crate::link::Link;
use crate::media::Kind;
use serde_json::Value;
use time::OffsetDateTime;

const CREATED_AT_TAG: &str = "created_at";
const INTERVAL_TAG: &str = "interval";
const EVENTS_TAG: &str = "events";
const RESOURCE_TAG: &str = "resource";
const LOGGED_AT_TAG: &str = "logged_at";

const LOG: Schema = Schema {
    name: "log",
    attributes: &[CREATED_AT_TAG, INTERVAL_TAG],
    resources: &[EVENTS_TAG, INDEX_TAG, "registry", "logs"],
};

const EVENT: Schema = Schema {
    name: "event",
    attributes: &[],
    resources: &[RESOURCE_TAG, LOGGED_AT_TAG],
};

/// The changes made to a registry over some interval.
#[derive(Debug, Clone)]
pub struct Log(Document);

impl Resource for Log {
    const KIND: Kind = Kind::Log;
    const SCHEMA: &'static Schema = &LOG;

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

impl Log {
    pub fn created_at(&self) -> Result<Option<OffsetDateTime>, InvalidDate> {
        self.0
            .str_attribute(CREATED_AT_TAG)
            .map(parse_zoned)
            .transpose()
    }

    pub fn interval(&self) -> Option<u64> {
        self.0.u64_attribute(INTERVAL_TAG)
    }

    pub fn registry_link(&self) -> Option<Link> {
        self.0.link("registry")
    }

    pub fn logs_link(&self) -> Option<Link> {
        self.0.link("logs")
    }

    /// Every event of this log. Entries which are not objects are skipped.
    pub fn events(&self) -> Vec<Event> {
        self.0
            .resource(EVENTS_TAG)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|e| e.as_object().cloned())
            .map(|content| {
                Event(Document::new(
                    self.0.self_link().clone(),
                    content,
                    &EVENT,
                ))
            })
            .collect()
    }

    /// Events about resources of the given kind.
    pub fn events_of(&self, kind: Kind) -> Vec<Event> {
        let media_type = kind.media_type();
        self.events()
            .into_iter()
            .filter(|e| {
                e.resource_link()
                    .map(|link| link.media_type() == &media_type)
                    .unwrap_or(false)
            })
            .collect()
    }
}

/// Something which happened to a resource. Events are only found inside a [Log].
#[derive(Debug, Clone)]
pub struct Event(Document);

impl Event {
    /// Link to the resource this event is about.
    pub fn resource_link(&self) -> Option<Link> {
        self.0.link(RESOURCE_TAG)
    }

    pub fn logged_at(&self) -> Result<Option<OffsetDateTime>, InvalidDate> {
        self.0
            .resource(LOGGED_AT_TAG)
            .and_then(Value::as_str)
            .map(parse_zoned)
            .transpose()
    }

    pub fn document(&self) -> &Document {
        &self.0
    }
}
