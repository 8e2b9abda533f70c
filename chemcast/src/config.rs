use chemcaster::types::{ServiceUrl, Username};
use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

const APP_NAME: &str = "chemcast";

/// What `chemcast login` remembers. Passwords are never saved.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct ChemcastConfig {
    pub url: Option<ServiceUrl>,
    pub username: Option<Username>,
}

impl ChemcastConfig {
    /// Load config from file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => confy::load_path(p),
            None => confy::load(APP_NAME, None),
        }
        .wrap_err("Could not load config file")
    }

    /// Write config to file.
    pub fn store(&self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(p) => confy::store_path(p, self),
            None => confy::store(APP_NAME, None, self),
        }
        .wrap_err("Couldn't write config file")
    }

    /// Prefer given values over saved ones. The URL falls back to the public service.
    pub fn fill(
        &self,
        url: Option<ServiceUrl>,
        username: Option<Username>,
    ) -> (ServiceUrl, Option<Username>) {
        let url = url.or_else(|| self.url.clone()).unwrap_or_default();
        let username = username.or_else(|| self.username.clone());
        (url, username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn saved() -> ChemcastConfig {
        ChemcastConfig {
            url: Some(ServiceUrl::from_static("http://localhost:3000/rest")),
            username: Some(Username::from_static("alice")),
        }
    }

    #[rstest]
    fn test_fill_prefers_given(saved: ChemcastConfig) {
        let (url, username) = saved.fill(
            Some(ServiceUrl::from_static("https://example.org/rest")),
            Some(Username::from_static("bob")),
        );
        assert_eq!(url.as_str(), "https://example.org/rest");
        assert_eq!(username.unwrap().as_str(), "bob");
    }

    #[rstest]
    fn test_fill_from_saved(saved: ChemcastConfig) {
        let (url, username) = saved.fill(None, None);
        assert_eq!(url.as_str(), "http://localhost:3000/rest");
        assert_eq!(username.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_fill_default() {
        let (url, username) = ChemcastConfig::default().fill(None, None);
        assert_eq!(url, ServiceUrl::default());
        assert!(username.is_none());
    }

    #[rstest]
    fn test_store_and_load(saved: ChemcastConfig) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chemcast.ron");
        assert_eq!(ChemcastConfig::load(Some(&path)).unwrap(), ChemcastConfig::default());
        saved.store(Some(&path)).unwrap();
        assert_eq!(ChemcastConfig::load(Some(&path)).unwrap(), saved);
    }
}
