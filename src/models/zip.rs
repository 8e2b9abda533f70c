use crate::errors::FileIOError;
use crate::link::Link;
use bytes::Bytes;
use camino::Utf8Path;
use fs_err::tokio::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// The body of an `application/zip` response, e.g. a finished [crate::Archive].
#[derive(Debug, Clone)]
pub struct Zip {
    link: Link,
    data: Bytes,
}

impl Zip {
    pub(crate) fn new(link: Link, data: Bytes) -> Self {
        Self { link, data }
    }

    pub fn self_link(&self) -> &Link {
        &self.link
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn into_data(self) -> Bytes {
        self.data
    }

    /// Write the zip file to `dst`. Unless `clobber` is set, an existing
    /// file at `dst` is an error.
    pub async fn save(&self, dst: &Utf8Path, clobber: bool) -> Result<(), FileIOError> {
        let mut file = create_file(dst, clobber).await?;
        file.write_all(&self.data).await?;
        file.flush().await?;
        Ok(())
    }
}

pub(crate) async fn create_file(dst: &Utf8Path, clobber: bool) -> std::io::Result<File> {
    if clobber {
        File::create(dst).await
    } else {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dst)
            .await
    }
}
