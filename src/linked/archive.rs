use super::Linked;
use crate::errors::{ChemcasterError, FileIOError, InvalidDate};
use crate::models::{create_file, Archive, Registry, Zip};
use camino::Utf8Path;
use futures::TryStreamExt;
use time::OffsetDateTime;
use tokio_util::io::StreamReader;

impl Linked<Archive> {
    pub fn is_done(&self) -> Option<bool> {
        self.object.is_done()
    }

    pub fn created_at(&self) -> Result<Option<OffsetDateTime>, InvalidDate> {
        self.object.created_at()
    }

    pub async fn delete(&self) -> Result<Self, ChemcasterError> {
        self.destroy(self.object.destroy_link()).await
    }

    /// GET the zip file into memory.
    pub async fn zipfile(&self) -> Result<Zip, ChemcasterError> {
        let link = self
            .object
            .zipfile_link()
            .ok_or(ChemcasterError::MissingLink("zipfile"))?;
        self.client.get_zip(&link).await
    }

    /// Download the zip file to `dst`. Unless `clobber` is set, an existing
    /// file at `dst` is an error.
    pub async fn download(&self, dst: &Utf8Path, clobber: bool) -> Result<(), FileIOError> {
        let link = self
            .object
            .zipfile_link()
            .ok_or(ChemcasterError::MissingLink("zipfile"))?;
        let stream = self
            .client
            .get_stream(&link)
            .await?
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::ConnectionAborted, e));
        let mut reader = StreamReader::new(stream);
        let mut file = create_file(dst, clobber).await.map_err(FileIOError::IO)?;
        tokio::io::copy(&mut reader, &mut file).await?;
        log::info!("Saved {} to {}", link.uri(), dst);
        Ok(())
    }

    pub async fn registry(&self) -> Result<Linked<Registry>, ChemcasterError> {
        self.get(self.object.registry_link(), "registry").await
    }
}
