//! NewType for the URL users first connect to.

use crate::errors::InvalidServiceUrl;
use aliri_braid::braid;

/// Where the service representation lives unless told otherwise.
pub const DEFAULT_SERVICE_URL: &str = "https://chemcaster.com/rest";

/// A [ServiceUrl] is the entry point of the Chemcaster API, e.g.
/// `https://chemcaster.com/rest`
#[braid(validator, serde)]
pub struct ServiceUrl(String);

impl aliri_braid::Validator for ServiceUrl {
    type Error = InvalidServiceUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if s.is_empty() {
            Err(InvalidServiceUrl::Empty)
        } else if !(s.starts_with("http://") || s.starts_with("https://")) {
            Err(InvalidServiceUrl::Protocol(s.to_string()))
        } else {
            Ok(())
        }
    }
}

impl Default for ServiceUrl {
    fn default() -> Self {
        ServiceUrl::from_static(DEFAULT_SERVICE_URL)
    }
}
