//! Hyperlinks between Chemcaster resources.

use crate::errors::{LinkError, MediaTypeError};
use crate::media::Kind;
use crate::types::{MediaType, ResourceUri, Username};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

const MEDIA_TYPE_TAG: &str = "media_type";
const URI_TAG: &str = "uri";
const NAME_TAG: &str = "name";

/// Username and password for HTTP basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: Username,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<Username>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Everything needed to make a request for a resource: where it is,
/// what media type to ask for, and who is asking.
///
/// A [Link] is never mutated after it is created. Its fields are only
/// checked (by [Link::validate]) right before a request is made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    media_type: MediaType,
    uri: ResourceUri,
    name: Option<String>,
    credentials: Option<Credentials>,
}

impl Link {
    pub fn new(
        media_type: impl Into<MediaType>,
        uri: impl Into<ResourceUri>,
        credentials: Credentials,
    ) -> Self {
        Self {
            media_type: media_type.into(),
            uri: uri.into(),
            name: None,
            credentials: Some(credentials),
        }
    }

    /// Create a link to a resource of the given kind.
    pub fn to_kind(kind: Kind, uri: impl Into<ResourceUri>, credentials: Credentials) -> Self {
        Self::new(kind.media_type(), uri, credentials)
    }

    /// Read a resource block, i.e. a JSON object `{"media_type", "uri", "name"}`.
    ///
    /// Returns `None` if the block is not an object. Fields missing from the
    /// block are left empty, which [Link::validate] will complain about.
    pub fn from_block(block: &Value, credentials: Option<&Credentials>) -> Option<Self> {
        let obj = block.as_object()?;
        let field = |key: &str| obj.get(key).and_then(Value::as_str);
        Some(Self {
            media_type: MediaType::new(field(MEDIA_TYPE_TAG).unwrap_or_default().to_string()),
            uri: ResourceUri::new(field(URI_TAG).unwrap_or_default().to_string()),
            name: field(NAME_TAG).map(|s| s.to_string()),
            credentials: credentials.cloned(),
        })
    }

    /// Create a link to the same media type at a different URI.
    pub(crate) fn relocate(&self, uri: impl Into<ResourceUri>) -> Self {
        Self {
            media_type: self.media_type.clone(),
            uri: uri.into(),
            name: None,
            credentials: self.credentials.clone(),
        }
    }

    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    pub fn uri(&self) -> &ResourceUri {
        &self.uri
    }

    /// Display name of the target. Only present for links read from a resource block.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Hostname of [Link::uri].
    pub fn host(&self) -> Result<String, LinkError> {
        let malformed = |reason: String| LinkError::MalformedUri {
            uri: self.uri.to_string(),
            reason,
        };
        let url = reqwest::Url::parse(self.uri.as_str()).map_err(|e| malformed(e.to_string()))?;
        url.host_str()
            .map(|h| h.to_string())
            .ok_or_else(|| malformed("no host".to_string()))
    }

    /// The kind of representation this link leads to.
    pub fn kind(&self) -> Result<Kind, MediaTypeError> {
        Kind::from_media_type(self.media_type.as_str())
    }

    /// Check that this link has what it needs to make a request.
    pub fn validate(&self) -> Result<(), LinkError> {
        if self.media_type.as_str().is_empty() {
            Err(LinkError::NoMediaType)
        } else if self.uri.as_str().is_empty() {
            Err(LinkError::NoUri)
        } else if self.credentials.is_none() {
            Err(LinkError::NoCredentials)
        } else {
            Ok(())
        }
    }
}

/// A display name paired with the URI it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedUri {
    pub name: String,
    pub uri: ResourceUri,
}
