//! Decoding of media type strings into the kind of representation they describe.

use crate::errors::MediaTypeError;
use crate::types::MediaType;
use std::fmt;

pub(crate) const APPLICATION_ZIP: &str = "application/zip";
const VENDOR_PREFIX: &str = "application/vnd.com.chemcaster.";
const VENDOR_SUFFIX: &str = "+json";

/// The representations a response can be decoded into.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Kind {
    Service,
    Index,
    Registry,
    Substance,
    Structure,
    Component,
    Registration,
    Query,
    Execution,
    Image,
    Archive,
    Log,
    Zip,
}

const ALL_KINDS: [Kind; 13] = [
    Kind::Service,
    Kind::Index,
    Kind::Registry,
    Kind::Substance,
    Kind::Structure,
    Kind::Component,
    Kind::Registration,
    Kind::Query,
    Kind::Execution,
    Kind::Image,
    Kind::Archive,
    Kind::Log,
    Kind::Zip,
];

impl Kind {
    /// Decode a media type string.
    ///
    /// `application/zip` is a [Kind::Zip], and `application/vnd.com.chemcaster.<Name>+json`
    /// is whichever kind is named exactly `<Name>`.
    pub fn from_media_type(media_type: &str) -> Result<Self, MediaTypeError> {
        let name = Self::type_name_of(media_type)?;
        ALL_KINDS
            .into_iter()
            .find(|k| k.type_name() == name)
            .ok_or_else(|| MediaTypeError::Unknown(media_type.to_string()))
    }

    /// The `<Name>` part of a media type string, without checking that it is known.
    pub(crate) fn type_name_of(media_type: &str) -> Result<&str, MediaTypeError> {
        if media_type == APPLICATION_ZIP {
            return Ok(Kind::Zip.type_name());
        }
        media_type
            .strip_prefix(VENDOR_PREFIX)
            .and_then(|s| s.strip_suffix(VENDOR_SUFFIX))
            .filter(|name| !name.is_empty())
            .ok_or_else(|| MediaTypeError::Format(media_type.to_string()))
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Kind::Service => "Service",
            Kind::Index => "Index",
            Kind::Registry => "Registry",
            Kind::Substance => "Substance",
            Kind::Structure => "Structure",
            Kind::Component => "Component",
            Kind::Registration => "Registration",
            Kind::Query => "Query",
            Kind::Execution => "Execution",
            Kind::Image => "Image",
            Kind::Archive => "Archive",
            Kind::Log => "Log",
            Kind::Zip => "Zip",
        }
    }

    /// Lowercased [Kind::type_name]. Request bodies are wrapped in an object
    /// under this key, and response attributes are found under it.
    pub fn hash_key(self) -> &'static str {
        match self {
            Kind::Service => "service",
            Kind::Index => "index",
            Kind::Registry => "registry",
            Kind::Substance => "substance",
            Kind::Structure => "structure",
            Kind::Component => "component",
            Kind::Registration => "registration",
            Kind::Query => "query",
            Kind::Execution => "execution",
            Kind::Image => "image",
            Kind::Archive => "archive",
            Kind::Log => "log",
            Kind::Zip => "zip",
        }
    }

    /// Inverse of [Kind::hash_key].
    pub fn from_hash_key(key: &str) -> Option<Self> {
        ALL_KINDS.into_iter().find(|k| k.hash_key() == key)
    }

    pub fn media_type(self) -> MediaType {
        match self {
            Kind::Zip => MediaType::from_static(APPLICATION_ZIP),
            _ => MediaType::new(format!(
                "{}{}{}",
                VENDOR_PREFIX,
                self.type_name(),
                VENDOR_SUFFIX
            )),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// The key a request body is wrapped in for the given media type,
/// or `None` if the media type cannot be decoded.
pub fn hash_key(media_type: &str) -> Option<&'static str> {
    Kind::from_media_type(media_type).ok().map(Kind::hash_key)
}
