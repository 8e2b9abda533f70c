use super::Linked;
use crate::errors::ChemcasterError;
use crate::link::NamedUri;
use crate::models::*;
use crate::types::ResourceUri;

impl Linked<Registration> {
    fn first_template(&self) -> Option<ComponentTemplate> {
        self.object.templates().into_iter().next()
    }

    /// Serialization of the first component.
    pub fn serialization(&self) -> Option<String> {
        self.first_template()?.serialization
    }

    /// Multiplier of the first component.
    pub fn multiplier(&self) -> Option<f64> {
        self.first_template()?.multiplier
    }

    /// Replace the components of this registration with a single component.
    pub async fn update(
        &self,
        serialization: &str,
        multiplier: f64,
    ) -> Result<Self, ChemcasterError> {
        let attributes = RegistrationAttributes::single(serialization, multiplier);
        self.update_with(&attributes).await
    }

    pub async fn update_with(
        &self,
        attributes: &RegistrationAttributes,
    ) -> Result<Self, ChemcasterError> {
        self.put_attributes(self.object.update_link(), attributes).await
    }

    pub async fn delete(&self) -> Result<Self, ChemcasterError> {
        self.destroy(self.object.destroy_link()).await
    }

    pub async fn registry(&self) -> Result<Linked<Registry>, ChemcasterError> {
        self.get(self.object.registry_link(), "registry").await
    }

    pub async fn substance(&self) -> Result<Linked<Substance>, ChemcasterError> {
        self.get(self.object.substance_link(), "substance").await
    }

    /// Names and URIs of this registration and its siblings.
    pub async fn registrations(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.index_link(), "index").await
    }

    pub async fn registration_at(
        &self,
        uri: impl Into<ResourceUri>,
    ) -> Result<Self, ChemcasterError> {
        self.get_at(uri).await
    }
}
