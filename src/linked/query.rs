use super::Linked;
use crate::errors::ChemcasterError;
use crate::link::NamedUri;
use crate::models::*;
use crate::types::ResourceUri;

impl Linked<Query> {
    pub fn mode(&self) -> Option<&str> {
        self.object.mode()
    }

    pub fn serialization(&self) -> Option<&str> {
        self.object.serialization()
    }

    pub async fn delete(&self) -> Result<Self, ChemcasterError> {
        self.destroy(self.object.destroy_link()).await
    }

    pub async fn registry(&self) -> Result<Linked<Registry>, ChemcasterError> {
        self.get(self.object.registry_link(), "registry").await
    }

    pub async fn executions(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.executions_link(), "executions").await
    }

    pub async fn execution_at(
        &self,
        uri: impl Into<ResourceUri>,
    ) -> Result<Linked<Execution>, ChemcasterError> {
        self.get_at(uri).await
    }

    /// Run this query, getting the first page of at most `maximum_results` hits.
    pub async fn execute(
        &self,
        maximum_results: u64,
    ) -> Result<Linked<Execution>, ChemcasterError> {
        let attributes = ExecutionAttributes {
            maximum_results,
            ..Default::default()
        };
        self.create(self.object.executions_link(), "executions", &attributes)
            .await
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

    /// Names and URIs of this query and its siblings.
    pub async fn queries(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.index_link(), "index").await
    }

    pub async fn query_at(&self, uri: impl Into<ResourceUri>) -> Result<Self, ChemcasterError> {
        self.get_at(uri).await
    }
}
