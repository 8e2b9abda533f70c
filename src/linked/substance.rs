use super::Linked;
use crate::errors::ChemcasterError;
use crate::link::NamedUri;
use crate::models::*;
use crate::types::ResourceUri;

impl Linked<Substance> {
    pub fn serialization(&self) -> Option<&str> {
        self.object.serialization()
    }

    pub fn inchi(&self) -> Option<&str> {
        self.object.inchi()
    }

    pub async fn create_image(
        &self,
        width: u32,
        height: u32,
        format: &str,
    ) -> Result<Linked<Image>, ChemcasterError> {
        self.create_image_at(self.object.images_link(), width, height, format)
            .await
    }

    /// The registration which produced this substance.
    pub async fn registration(&self) -> Result<Linked<Registration>, ChemcasterError> {
        self.get(self.object.registration_link(), "registration")
            .await
    }

    pub async fn registry(&self) -> Result<Linked<Registry>, ChemcasterError> {
        self.get(self.object.registry_link(), "registry").await
    }

    pub async fn components(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.components_link(), "components").await
    }

    pub async fn component_at(
        &self,
        uri: impl Into<ResourceUri>,
    ) -> Result<Linked<Component>, ChemcasterError> {
        self.get_at(uri).await
    }
}

impl Linked<Structure> {
    pub fn serialization(&self) -> Option<&str> {
        self.object.serialization()
    }

    pub fn inchi(&self) -> Option<&str> {
        self.object.inchi()
    }

    pub async fn create_image(
        &self,
        width: u32,
        height: u32,
        format: &str,
    ) -> Result<Linked<Image>, ChemcasterError> {
        self.create_image_at(self.object.images_link(), width, height, format)
            .await
    }

    pub async fn registry(&self) -> Result<Linked<Registry>, ChemcasterError> {
        self.get(self.object.registry_link(), "registry").await
    }

    pub async fn components(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.components_link(), "components").await
    }

    pub async fn component_at(
        &self,
        uri: impl Into<ResourceUri>,
    ) -> Result<Linked<Component>, ChemcasterError> {
        self.get_at(uri).await
    }
}

impl Linked<Component> {
    pub fn multiplier(&self) -> Option<f64> {
        self.object.multiplier()
    }

    pub async fn structure(&self) -> Result<Linked<Structure>, ChemcasterError> {
        self.get(self.object.structure_link(), "structure").await
    }

    pub async fn substance(&self) -> Result<Linked<Substance>, ChemcasterError> {
        self.get(self.object.substance_link(), "substance").await
    }
}
