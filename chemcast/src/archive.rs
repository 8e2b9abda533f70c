use camino::Utf8Path;
use color_eyre::eyre::{Result, WrapErr};
use std::time::Duration;
use time::format_description::well_known::Rfc3339;

use crate::credentials::{find_registry, Credentials};

/// Request an archive of a registry, wait for it to be done, then download it.
pub async fn archive(
    credentials: Credentials,
    given: &str,
    output: &Utf8Path,
    clobber: bool,
    interval: u64,
) -> Result<()> {
    let service = credentials.connect().await?;
    let registry = find_registry(&service, given).await?;
    let mut archive = registry
        .create_archive()
        .await
        .wrap_err("Could not create archive")?;
    if let Some(created_at) = archive.created_at()? {
        log::info!("Archive created at {}", created_at.format(&Rfc3339)?);
    }
    while !archive.is_done().unwrap_or(false) {
        log::info!("Waiting for {} to be done", archive.uri());
        tokio::time::sleep(Duration::from_secs(interval)).await;
        archive = archive.reload().await?;
    }
    archive
        .download(output, clobber)
        .await
        .wrap_err_with(|| format!("Could not save archive to {}", output))?;
    println!("{}", output);
    Ok(())
}
