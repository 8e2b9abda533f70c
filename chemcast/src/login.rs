use color_eyre::eyre::Result;

use crate::config::ChemcastConfig;
use crate::credentials::Credentials;
use crate::prompt::prompt_if_missing;

/// Remember the service URL and username for next time.
pub fn login(credentials: Credentials) -> Result<()> {
    let path = credentials.config_path.as_deref();
    let saved = ChemcastConfig::load(path)?;
    let (url, username) = saved.fill(credentials.url, credentials.username);
    let config = ChemcastConfig {
        url: Some(url),
        username: Some(prompt_if_missing(username, "username")?),
    };
    config.store(path)?;
    log::info!(
        "Saved {} as the default account",
        config.username.as_ref().map(|u| u.as_str()).unwrap_or_default()
    );
    Ok(())
}
