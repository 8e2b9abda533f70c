use color_eyre::eyre::Result;

use crate::credentials::Credentials;

/// Print the service version and every registry.
pub async fn connect(credentials: Credentials) -> Result<()> {
    let service = credentials.connect().await?;
    println!(
        "{} (version {})",
        service.uri(),
        service.version().unwrap_or("unknown")
    );
    for registry in service.registries().await? {
        println!("{}\t{}", registry.uri, registry.name);
    }
    Ok(())
}
