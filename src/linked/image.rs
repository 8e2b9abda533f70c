use super::Linked;
use crate::errors::ChemcasterError;
use crate::media::Kind;
use crate::models::*;

impl Linked<Image> {
    pub fn width(&self) -> Option<u64> {
        self.object.width()
    }

    pub fn height(&self) -> Option<u64> {
        self.object.height()
    }

    pub fn format(&self) -> Option<&str> {
        self.object.format()
    }

    /// Base64-encoded image bytes.
    pub fn data(&self) -> Option<&str> {
        self.object.data()
    }

    /// Follow the imageable link, if it leads to a `R`.
    async fn imageable<R: Resource>(&self) -> Result<Option<Linked<R>>, ChemcasterError> {
        if self.object.imageable_kind() != Some(R::KIND) {
            return Ok(None);
        }
        self.get(self.object.imageable_link(), "imageable")
            .await
            .map(Some)
    }

    /// The structure this image depicts, or `None` if it depicts something else.
    pub async fn structure(&self) -> Result<Option<Linked<Structure>>, ChemcasterError> {
        self.imageable().await
    }

    /// The query this image depicts, or `None` if it depicts something else.
    pub async fn query(&self) -> Result<Option<Linked<Query>>, ChemcasterError> {
        self.imageable().await
    }

    /// The substance this image depicts, or `None` if it depicts something else.
    pub async fn substance(&self) -> Result<Option<Linked<Substance>>, ChemcasterError> {
        self.imageable().await
    }

    pub fn imageable_kind(&self) -> Option<Kind> {
        self.object.imageable_kind()
    }
}
