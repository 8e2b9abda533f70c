use super::ChemcasterClient;
use crate::errors::{check, ChemcasterError};
use crate::link::Link;
use crate::media::{Kind, APPLICATION_ZIP};
use crate::models::{Representation, Resource, Zip};
use bytes::Bytes;
use futures::Stream;
use reqwest::header::{ACCEPT, CONTENT_TYPE, LOCATION};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

/// Attributes of a request body which is built at runtime.
pub type Attributes = Map<String, Value>;

/// Use this for a PUT or POST without a body.
pub const NO_ATTRIBUTES: Option<&Attributes> = None;

impl ChemcasterClient {
    pub async fn get(&self, link: &Link) -> Result<Representation, ChemcasterError> {
        self.send(Method::GET, link, NO_ATTRIBUTES).await
    }

    pub async fn put<A: Serialize + ?Sized>(
        &self,
        link: &Link,
        attributes: Option<&A>,
    ) -> Result<Representation, ChemcasterError> {
        self.send(Method::PUT, link, attributes).await
    }

    pub async fn post<A: Serialize + ?Sized>(
        &self,
        link: &Link,
        attributes: Option<&A>,
    ) -> Result<Representation, ChemcasterError> {
        self.send(Method::POST, link, attributes).await
    }

    pub async fn delete(&self, link: &Link) -> Result<Representation, ChemcasterError> {
        self.send(Method::DELETE, link, NO_ATTRIBUTES).await
    }

    /// GET a representation of the expected type.
    pub async fn get_as<T: Resource>(&self, link: &Link) -> Result<T, ChemcasterError> {
        self.get(link).await?.into_resource()
    }

    pub async fn put_as<T: Resource, A: Serialize + ?Sized>(
        &self,
        link: &Link,
        attributes: Option<&A>,
    ) -> Result<T, ChemcasterError> {
        self.put(link, attributes).await?.into_resource()
    }

    pub async fn post_as<T: Resource, A: Serialize + ?Sized>(
        &self,
        link: &Link,
        attributes: Option<&A>,
    ) -> Result<T, ChemcasterError> {
        self.post(link, attributes).await?.into_resource()
    }

    pub async fn delete_as<T: Resource>(&self, link: &Link) -> Result<T, ChemcasterError> {
        self.delete(link).await?.into_resource()
    }

    /// GET a zip file.
    pub async fn get_zip(&self, link: &Link) -> Result<Zip, ChemcasterError> {
        self.get(link).await?.try_into()
    }

    /// GET the body of a response as a stream of bytes, without decoding it.
    pub async fn get_stream(
        &self,
        link: &Link,
    ) -> Result<impl Stream<Item = Result<Bytes, reqwest::Error>>, ChemcasterError> {
        let res = self.request(Method::GET, link, NO_ATTRIBUTES).await?;
        Ok(res.bytes_stream())
    }

    async fn send<A: Serialize + ?Sized>(
        &self,
        method: Method,
        link: &Link,
        attributes: Option<&A>,
    ) -> Result<Representation, ChemcasterError> {
        let res = self.request(method, link, attributes).await?;
        decode(link, res).await
    }

    /// Make a request and check its status.
    async fn request<A: Serialize + ?Sized>(
        &self,
        method: Method,
        link: &Link,
        attributes: Option<&A>,
    ) -> Result<reqwest::Response, ChemcasterError> {
        link.validate()?;
        let mut req = self
            .client
            .request(method.clone(), link.uri().as_str())
            .header(ACCEPT, link.media_type().as_str());
        if let Some(credentials) = link.credentials() {
            req = req.basic_auth(credentials.username.as_str(), Some(&credentials.password));
        }
        if method == Method::PUT || method == Method::POST {
            req = req.header(CONTENT_TYPE, link.media_type().as_str());
        }
        if let Some(attributes) = attributes {
            let body = wrap(link, attributes)?;
            log::trace!("{} {} body: {}", method, link.uri(), body);
            req = req.body(body);
        }
        log::debug!("{} {} ({})", method, link.uri(), link.media_type());
        let res = req.send().await?;
        check(res).map_err(|e| {
            log::warn!("{} {} failed: {}", method, link.uri(), e);
            e
        })
    }
}

/// Serialize a request body, i.e. the attributes wrapped in an object under
/// the hash key of the link's media type.
fn wrap<A: Serialize + ?Sized>(link: &Link, attributes: &A) -> Result<String, ChemcasterError> {
    let key = link.kind()?.hash_key();
    let attributes = serde_json::to_value(attributes).map_err(ChemcasterError::Attributes)?;
    let body = Value::Object(Map::from_iter([(key.to_string(), attributes)]));
    Ok(body.to_string())
}

/// Decode a successful response according to the media type of the link which requested it.
async fn decode(link: &Link, res: reqwest::Response) -> Result<Representation, ChemcasterError> {
    let media_type = link.media_type().as_str();
    if media_type == APPLICATION_ZIP {
        let data = res.bytes().await?;
        return Ok(Representation::Zip(Zip::new(link.clone(), data)));
    }
    if !media_type.ends_with("json") {
        return Err(ChemcasterError::UnsupportedMediaType(link.media_type().clone()));
    }
    let kind = Kind::from_media_type(media_type)?;
    let self_link = match location(&res) {
        Some(uri) => link.relocate(uri),
        None => link.clone(),
    };
    let body = res.bytes().await?;
    let content: Map<String, Value> =
        serde_json::from_slice(&body).map_err(|source| ChemcasterError::Json {
            uri: link.uri().to_string(),
            source,
        })?;
    log::trace!("decoded {} from {}", kind, self_link.uri());
    Representation::from_json(kind, self_link, content)
}

/// The `Location` header of a response, resolved against the request URL.
fn location(res: &reqwest::Response) -> Option<String> {
    let value = res.headers().get(LOCATION)?.to_str().ok()?;
    res.url().join(value).ok().map(String::from)
}
