use chemcaster::reqwest::Response;
use chemcaster::types::{ServiceUrl, Username};
use chemcaster::{ChemcasterClient, Linked, Registry, Resource, ResourceUri, Service};
use color_eyre::eyre::{self, WrapErr};
use reqwest_retry::{
    policies::ExponentialBackoff, RetryTransientMiddleware, Retryable, RetryableStrategy,
};
use std::path::PathBuf;

use crate::config::ChemcastConfig;
use crate::prompt::{prompt_if_missing, prompt_if_missing_password};

/// Command-line options of `chemcast` which are relevant to connecting to the service.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub url: Option<ServiceUrl>,
    pub username: Option<Username>,
    pub password: Option<String>,
    pub retries: Option<u32>,
    /// Name of configuration file.
    ///
    /// - `None`: use default configuration file (for main use)
    /// - `Some(_)`: custom configuration file (for testing purposes only)
    pub config_path: Option<PathBuf>,
}

impl Credentials {
    /// Fill in whatever was not given on the command line from the saved
    /// configuration, then from interactive prompts.
    pub fn resolve(self) -> eyre::Result<(ServiceUrl, chemcaster::Credentials, Option<u32>)> {
        let config = ChemcastConfig::load(self.config_path.as_deref())?;
        let (url, username) = config.fill(self.url, self.username);
        let username = prompt_if_missing(username, "username")?;
        let password = prompt_if_missing_password(self.password, "password")?;
        let credentials = chemcaster::Credentials::new(username, password);
        Ok((url, credentials, self.retries))
    }

    /// Connect to the service.
    pub async fn connect(self) -> eyre::Result<Linked<Service>> {
        let (url, credentials, retries) = self.resolve()?;
        let builder = ChemcasterClient::builder()?;
        let builder = if let Some(retries) = retries {
            builder.with(retry_strategy(retries))
        } else {
            builder
        };
        builder
            .build()
            .connect(Some(&url), credentials)
            .await
            .wrap_err_with(|| format!("Could not connect to {}", url))
    }
}

/// Get a registry by URI if `given` looks like one, otherwise by name.
pub async fn find_registry(
    service: &Linked<Service>,
    given: &str,
) -> eyre::Result<Linked<Registry>> {
    if given.starts_with("http://") || given.starts_with("https://") {
        let credentials = service
            .object
            .self_link()
            .credentials()
            .cloned()
            .ok_or_else(|| eyre::eyre!("Service has no credentials"))?;
        Linked::open(service.client(), ResourceUri::from(given), credentials)
            .await
            .wrap_err_with(|| format!("Could not get registry at {}", given))
    } else {
        service
            .registry_named(given)
            .await
            .wrap_err_with(|| format!("Could not get registry named \"{}\"", given))
    }
}

fn retry_strategy(retries: u32) -> impl reqwest_middleware::Middleware {
    let policy = ExponentialBackoff::builder().build_with_max_retries(retries);
    RetryTransientMiddleware::new_with_policy_and_strategy(policy, RetryStrategy)
}

/// - Client errors are fatal
/// - Everything else can be retried
struct RetryStrategy;
impl RetryableStrategy for RetryStrategy {
    fn handle(
        &self,
        res: &std::result::Result<Response, reqwest_middleware::Error>,
    ) -> Option<Retryable> {
        match res {
            Ok(response) if response.status().is_server_error() => Some(Retryable::Transient),
            Ok(response) if response.status().is_client_error() => Some(Retryable::Fatal),
            Ok(_) => None,
            Err(_) => Some(Retryable::Transient),
        }
    }
}
