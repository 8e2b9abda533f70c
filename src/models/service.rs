use super::document::{Document, Resource, Schema};
use crate::link::{Credentials, Link};
use crate::media::Kind;
use crate::types::ServiceUrl;

const VERSION_TAG: &str = "version";
const REGISTRIES_TAG: &str = "registries";

const SERVICE: Schema = Schema {
    name: "service",
    attributes: &[VERSION_TAG],
    resources: &[REGISTRIES_TAG],
};

/// The entry point of the API.
#[derive(Debug, Clone)]
pub struct Service(Document);

impl Resource for Service {
    const KIND: Kind = Kind::Service;
    const SCHEMA: &'static Schema = &SERVICE;

    fn from_document(document: Document) -> Self {
        Self(document)
    }

    fn document(&self) -> &Document {
        &self.0
    }

    fn into_document(self) -> Document {
        self.0
    }

    /// A service is not listed in any index.
    fn index_link(&self) -> Option<Link> {
        None
    }
}

impl Service {
    /// Link to the service representation at the given URL.
    pub fn service_link(url: &ServiceUrl, credentials: Credentials) -> Link {
        Link::to_kind(Kind::Service, url.as_str(), credentials)
    }

    pub fn version(&self) -> Option<&str> {
        self.0.str_attribute(VERSION_TAG)
    }

    pub fn registries_link(&self) -> Option<Link> {
        self.0.link(REGISTRIES_TAG)
    }
}
