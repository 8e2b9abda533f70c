use super::Linked;
use crate::client::Attributes;
use crate::errors::ChemcasterError;
use crate::link::NamedUri;
use crate::models::*;
use crate::types::ResourceUri;

impl Linked<Registry> {
    pub fn name(&self) -> Option<&str> {
        self.object.name()
    }

    pub fn is_deletable(&self) -> Option<bool> {
        self.object.is_deletable()
    }

    async fn update_registry(
        &self,
        attributes: RegistryAttributes<'_>,
    ) -> Result<Self, ChemcasterError> {
        self.put_attributes(self.object.update_link(), &attributes).await
    }

    pub async fn rename(&self, name: &str) -> Result<Self, ChemcasterError> {
        self.update_registry(RegistryAttributes {
            name: Some(name),
            deletable: self.object.is_deletable(),
        })
        .await
    }

    pub async fn set_deletable(&self, deletable: bool) -> Result<Self, ChemcasterError> {
        self.update_registry(RegistryAttributes {
            name: self.object.name(),
            deletable: Some(deletable),
        })
        .await
    }

    /// Mark this registry as deletable, then delete it.
    pub async fn delete(&self) -> Result<Self, ChemcasterError> {
        let deletable = self.set_deletable(true).await?;
        let deleted = deletable.destroy(deletable.object.destroy_link()).await?;
        log::info!("Deleted registry {}", deleted.uri());
        Ok(deleted)
    }

    pub async fn service(&self) -> Result<Linked<Service>, ChemcasterError> {
        self.get(self.object.service_link(), "service").await
    }

    pub async fn queries(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.queries_link(), "queries").await
    }

    pub async fn query_at(
        &self,
        uri: impl Into<ResourceUri>,
    ) -> Result<Linked<Query>, ChemcasterError> {
        self.get_at(uri).await
    }

    /// Save a new structure search in this registry.
    pub async fn create_query(
        &self,
        mode: &str,
        serialization: &str,
    ) -> Result<Linked<Query>, ChemcasterError> {
        let attributes = QueryAttributes {
            mode,
            serialization,
        };
        self.create(self.object.queries_link(), "queries", &attributes)
            .await
    }

    pub async fn structures(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.structures_link(), "structures").await
    }

    pub async fn structure_at(
        &self,
        uri: impl Into<ResourceUri>,
    ) -> Result<Linked<Structure>, ChemcasterError> {
        self.get_at(uri).await
    }

    pub async fn substances(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.substances_link(), "substances").await
    }

    pub async fn substance_at(
        &self,
        uri: impl Into<ResourceUri>,
    ) -> Result<Linked<Substance>, ChemcasterError> {
        self.get_at(uri).await
    }

    pub async fn registrations(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.registrations_link(), "registrations")
            .await
    }

    pub async fn registration_at(
        &self,
        uri: impl Into<ResourceUri>,
    ) -> Result<Linked<Registration>, ChemcasterError> {
        self.get_at(uri).await
    }

    /// Register a substance made of a single component.
    pub async fn register(
        &self,
        serialization: &str,
        multiplier: f64,
    ) -> Result<Linked<Registration>, ChemcasterError> {
        let attributes = RegistrationAttributes::single(serialization, multiplier);
        self.create(self.object.registrations_link(), "registrations", &attributes)
            .await
    }

    /// Names and URIs of this registry and its siblings.
    pub async fn registries(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.index_link(), "index").await
    }

    pub async fn registry_named(&self, name: &str) -> Result<Self, ChemcasterError> {
        self.named(self.object.index_link(), "index", name).await
    }

    pub async fn logs(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.logs_link(), "logs").await
    }

    pub async fn log_at(
        &self,
        uri: impl Into<ResourceUri>,
    ) -> Result<Linked<Log>, ChemcasterError> {
        self.get_at(uri).await
    }

    /// Request a new archive of this registry. It can be downloaded once it is done.
    pub async fn create_archive(&self) -> Result<Linked<Archive>, ChemcasterError> {
        self.create(self.object.archives_link(), "archives", &Attributes::new())
            .await
    }
}
