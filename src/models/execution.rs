use super::document::{Document, Item, Resource, Schema, DESTROY_TAG, INDEX_TAG, UPDATE_TAG};
use crate::link::{Link, NamedUri};
use crate::media::Kind;
use crate::types::ResourceUri;
use serde::Serialize;
use serde_json::Value;

const CURSOR_TAG: &str = "cursor";
const REVERSE_TAG: &str = "reverse";
const NEXT_CURSOR_TAG: &str = "next_cursor";
const PREVIOUS_CURSOR_TAG: &str = "previous_cursor";
const MAXIMUM_RESULTS_TAG: &str = "maximum_results";
const SUBSTANCES_TAG: &str = "substances";

const EXECUTION: Schema = Schema {
    name: "execution",
    attributes: &[
        CURSOR_TAG,
        REVERSE_TAG,
        NEXT_CURSOR_TAG,
        PREVIOUS_CURSOR_TAG,
        MAXIMUM_RESULTS_TAG,
    ],
    resources: &[
        "executable",
        SUBSTANCES_TAG,
        INDEX_TAG,
        UPDATE_TAG,
        DESTROY_TAG,
    ],
};

/// One page of results of running a [crate::Query].
#[derive(Debug, Clone)]
pub struct Execution(Document);

impl Resource for Execution {
    const KIND: Kind = Kind::Execution;
    const SCHEMA: &'static Schema = &EXECUTION;

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

impl Item for Execution {}

impl Execution {
    pub fn cursor(&self) -> Option<&str> {
        self.0.str_attribute(CURSOR_TAG)
    }

    pub fn is_reverse(&self) -> Option<bool> {
        self.0.bool_attribute(REVERSE_TAG)
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.0.str_attribute(NEXT_CURSOR_TAG)
    }

    pub fn previous_cursor(&self) -> Option<&str> {
        self.0.str_attribute(PREVIOUS_CURSOR_TAG)
    }

    pub fn maximum_results(&self) -> Option<u64> {
        self.0.u64_attribute(MAXIMUM_RESULTS_TAG)
    }

    /// Link to the query which was executed.
    pub fn executable_link(&self) -> Option<Link> {
        self.0.link("executable")
    }

    fn groups(&self) -> impl Iterator<Item = &Vec<Value>> {
        self.0
            .resource(SUBSTANCES_TAG)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_array)
    }

    /// Each hit is a group of substance links.
    pub fn substance_links(&self) -> Vec<Vec<Link>> {
        let credentials = self.0.credentials();
        self.groups()
            .map(|group| {
                group
                    .iter()
                    .filter_map(|block| Link::from_block(block, credentials))
                    .collect()
            })
            .collect()
    }

    /// The first substance of each hit. Groups without a named first entry are skipped.
    pub fn substances(&self) -> Vec<NamedUri> {
        self.groups()
            .filter_map(|group| {
                let first = group.first()?;
                Some(NamedUri {
                    name: first.get("name")?.as_str()?.to_string(),
                    uri: ResourceUri::new(first.get("uri")?.as_str()?.to_string()),
                })
            })
            .collect()
    }
}

/// Request body for creating an [Execution].
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionAttributes<'a> {
    pub maximum_results: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
}
