use super::Linked;
use crate::errors::ChemcasterError;
use crate::link::NamedUri;
use crate::models::{Registry, RegistryAttributes, Service};

impl Linked<Service> {
    pub fn version(&self) -> Option<&str> {
        self.object.version()
    }

    /// Names and URIs of every registry.
    pub async fn registries(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.registries_link(), "registries").await
    }

    pub async fn registry_named(&self, name: &str) -> Result<Linked<Registry>, ChemcasterError> {
        self.named(self.object.registries_link(), "registries", name)
            .await
    }

    pub async fn create_registry(
        &self,
        name: &str,
        deletable: bool,
    ) -> Result<Linked<Registry>, ChemcasterError> {
        let attributes = RegistryAttributes::new(name, deletable);
        let registry: Linked<Registry> = self
            .create(self.object.registries_link(), "registries", &attributes)
            .await?;
        log::info!("Created registry \"{}\" at {}", name, registry.uri());
        Ok(registry)
    }
}
