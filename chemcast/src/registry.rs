use chemcaster::Resource;
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::credentials::{find_registry, Credentials};

pub async fn create(credentials: Credentials, name: &str, deletable: bool) -> Result<()> {
    let service = credentials.connect().await?;
    let registry = service
        .create_registry(name, deletable)
        .await
        .wrap_err_with(|| format!("Could not create registry \"{}\"", name))?;
    println!("{}", registry.uri());
    Ok(())
}

pub async fn rename(credentials: Credentials, given: &str, new_name: &str) -> Result<()> {
    let service = credentials.connect().await?;
    let registry = find_registry(&service, given).await?;
    let renamed = registry
        .rename(new_name)
        .await
        .wrap_err("Could not rename registry")?;
    println!(
        "{} -> {}",
        registry.name().unwrap_or_default(),
        renamed.name().unwrap_or_default()
    );
    Ok(())
}

/// Describe a registry. Without a name, describe the first one.
pub async fn show(credentials: Credentials, given: Option<&str>) -> Result<()> {
    let service = credentials.connect().await?;
    let registry = match given {
        Some(given) => find_registry(&service, given).await?,
        None => {
            let first = service
                .registries()
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| eyre!("There are no registries"))?;
            find_registry(&service, first.uri.as_str()).await?
        }
    };
    println!("name:          {}", registry.name().unwrap_or_default());
    println!("uri:           {}", registry.uri());
    println!(
        "deletable:     {}",
        registry.is_deletable().unwrap_or_default()
    );
    println!("structures:    {}", registry.structures().await?.len());
    println!("substances:    {}", registry.substances().await?.len());
    println!("queries:       {}", registry.queries().await?.len());
    println!("registrations: {}", registry.registrations().await?.len());
    log::debug!("{}", registry.object.dump());
    Ok(())
}

pub async fn delete(credentials: Credentials, given: &str) -> Result<()> {
    let service = credentials.connect().await?;
    let registry = find_registry(&service, given).await?;
    let deleted = registry
        .delete()
        .await
        .wrap_err("Could not delete registry")?;
    println!("Deleted {}", deleted.object.self_link().uri());
    Ok(())
}
