//! Representations paired with a client, so that they can follow their own links.
mod archive;
mod execution;
mod image;
mod log;
mod query;
mod registration;
mod registry;
mod service;
mod substance;

use crate::client::ChemcasterClient;
use crate::errors::{ChemcasterError, LinkError};
use crate::link::{Credentials, Link, NamedUri};
use crate::models::{Image, ImageAttributes, Index, Resource};
use crate::types::ResourceUri;
use serde::Serialize;

/// A client to the resources linked to by a representation.
/// In less fancy speak, [Linked] is a thing which can get, create, modify, or delete
/// other things or even itself.
#[derive(Clone, Debug)]
pub struct Linked<T: Resource> {
    pub(crate) client: ChemcasterClient,
    pub object: T,
}

impl<T: Resource> Linked<T> {
    pub(crate) fn new(client: ChemcasterClient, object: T) -> Self {
        Self { client, object }
    }

    /// GET the resource at `uri`.
    pub async fn open(
        client: &ChemcasterClient,
        uri: impl Into<ResourceUri>,
        credentials: Credentials,
    ) -> Result<Self, ChemcasterError> {
        let link = Link::to_kind(T::KIND, uri, credentials);
        let object = client.get_as(&link).await?;
        Ok(Self::new(client.clone(), object))
    }

    pub fn uri(&self) -> &ResourceUri {
        self.object.self_link().uri()
    }

    pub fn client(&self) -> &ChemcasterClient {
        &self.client
    }

    pub fn into_inner(self) -> T {
        self.object
    }

    /// GET this resource again.
    pub async fn reload(&self) -> Result<Self, ChemcasterError> {
        self.get(Some(self.object.self_link().clone()), "self").await
    }

    fn credentials(&self) -> Result<Credentials, LinkError> {
        self.object
            .self_link()
            .credentials()
            .cloned()
            .ok_or(LinkError::NoCredentials)
    }

    pub(crate) fn wrap<R: Resource>(&self, object: R) -> Linked<R> {
        Linked::new(self.client.clone(), object)
    }

    /// Follow a link found in this resource.
    pub(crate) async fn get<R: Resource>(
        &self,
        link: Option<Link>,
        tag: &'static str,
    ) -> Result<Linked<R>, ChemcasterError> {
        let link = link.ok_or(ChemcasterError::MissingLink(tag))?;
        let object = self.client.get_as(&link).await?;
        Ok(self.wrap(object))
    }

    /// GET a resource of type `R` at `uri` with the credentials of this resource.
    pub(crate) async fn get_at<R: Resource>(
        &self,
        uri: impl Into<ResourceUri>,
    ) -> Result<Linked<R>, ChemcasterError> {
        let link = Link::to_kind(R::KIND, uri, self.credentials()?);
        let object = self.client.get_as(&link).await?;
        Ok(self.wrap(object))
    }

    /// Names and URIs of the items of an index linked to by this resource.
    pub(crate) async fn names(
        &self,
        index_link: Option<Link>,
        tag: &'static str,
    ) -> Result<Vec<NamedUri>, ChemcasterError> {
        let index: Linked<Index> = self.get(index_link, tag).await?;
        index.object.item_names()
    }

    /// GET the item with the given name from an index linked to by this resource.
    pub(crate) async fn named<R: Resource>(
        &self,
        index_link: Option<Link>,
        tag: &'static str,
        name: &str,
    ) -> Result<Linked<R>, ChemcasterError> {
        let index: Linked<Index> = self.get(index_link, tag).await?;
        let link = index
            .object
            .item_named(name)
            .ok_or_else(|| ChemcasterError::NotFoundNamed(name.to_string()))?;
        let object = self.client.get_as(&link).await?;
        Ok(self.wrap(object))
    }

    /// POST a new item to an index linked to by this resource.
    pub(crate) async fn create<R: Resource, A: Serialize + ?Sized>(
        &self,
        index_link: Option<Link>,
        tag: &'static str,
        attributes: &A,
    ) -> Result<Linked<R>, ChemcasterError> {
        let index: Linked<Index> = self.get(index_link, tag).await?;
        let create = index
            .object
            .create_link()
            .ok_or(ChemcasterError::MissingLink("create"))?;
        let object = self.client.post_as(&create, Some(attributes)).await?;
        Ok(self.wrap(object))
    }

    /// PUT new attributes of this resource.
    pub(crate) async fn put_attributes<A: Serialize + ?Sized>(
        &self,
        update_link: Option<Link>,
        attributes: &A,
    ) -> Result<Self, ChemcasterError> {
        let link = update_link.ok_or(ChemcasterError::MissingLink("update"))?;
        let object = self.client.put_as(&link, Some(attributes)).await?;
        Ok(self.wrap(object))
    }

    /// DELETE this resource. The service answers with its final representation.
    pub(crate) async fn destroy(
        &self,
        destroy_link: Option<Link>,
    ) -> Result<Self, ChemcasterError> {
        let link = destroy_link.ok_or(ChemcasterError::MissingLink("destroy"))?;
        let object = self.client.delete_as(&link).await?;
        Ok(self.wrap(object))
    }

    /// Request a new image of this resource.
    pub(crate) async fn create_image_at(
        &self,
        images_link: Option<Link>,
        width: u32,
        height: u32,
        format: &str,
    ) -> Result<Linked<Image>, ChemcasterError> {
        let attributes = ImageAttributes {
            width,
            height,
            format,
        };
        self.create(images_link, "images", &attributes).await
    }
}
