//! HTTP client for the Chemcaster API.
mod http;
mod pagination;

pub use http::{Attributes, NO_ATTRIBUTES};

use crate::errors::ChemcasterError;
use crate::link::Credentials;
use crate::linked::Linked;
use crate::models::{Resource, Service};
use crate::types::ServiceUrl;
use std::fmt;

/// A client for the Chemcaster API.
///
/// The client holds no state besides its connection pool: every request is
/// described entirely by a [crate::Link], which carries its own credentials.
#[derive(Clone)]
pub struct ChemcasterClient {
    pub(crate) client: reqwest_middleware::ClientWithMiddleware,
}

impl fmt::Debug for ChemcasterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChemcasterClient").finish_non_exhaustive()
    }
}

pub struct ChemcasterClientBuilder {
    builder: reqwest_middleware::ClientBuilder,
}

impl ChemcasterClientBuilder {
    pub(crate) fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new().build()?;
        let builder = reqwest_middleware::ClientBuilder::new(client);
        Ok(Self { builder })
    }

    /// Add middleware to the HTTP client.
    pub fn with<M: reqwest_middleware::Middleware>(self, middleware: M) -> Self {
        Self {
            builder: self.builder.with(middleware),
        }
    }

    pub fn build(self) -> ChemcasterClient {
        ChemcasterClient {
            client: self.builder.build(),
        }
    }
}

impl ChemcasterClient {
    /// Create a client builder.
    pub fn builder() -> Result<ChemcasterClientBuilder, reqwest::Error> {
        ChemcasterClientBuilder::new()
    }

    /// Create a client without any middleware.
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self::builder()?.build())
    }

    /// Get the service representation, which is where every other resource is found.
    /// `url` defaults to [crate::DEFAULT_SERVICE_URL].
    pub async fn connect(
        &self,
        url: Option<&ServiceUrl>,
        credentials: Credentials,
    ) -> Result<Linked<Service>, ChemcasterError> {
        let default_url = ServiceUrl::default();
        let url = url.unwrap_or(&default_url);
        let link = Service::service_link(url, credentials);
        let service = self.get_as::<Service>(&link).await?;
        log::info!(
            "Connected to {} (version {})",
            service.self_link().uri(),
            service.version().unwrap_or("unknown")
        );
        Ok(Linked::new(self.clone(), service))
    }
}
