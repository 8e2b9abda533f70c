//! Errors for this crate.
//! About anyhow: see https://github.com/TrueLayer/reqwest-middleware/issues/119

use crate::media::Kind;
use crate::types::MediaType;
use reqwest::{StatusCode, Version};
use std::fmt;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InvalidServiceUrl {
    #[error("Service URL is empty")]
    Empty,

    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),
}

aliri_braid::from_infallible!(InvalidServiceUrl);

/// A [crate::Link] which cannot be used to make a request.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LinkError {
    #[error("Initial media_type string is null or empty.")]
    NoMediaType,

    #[error("Initial uri string is null or empty.")]
    NoUri,

    #[error("Link has no credentials.")]
    NoCredentials,

    #[error("Malformed URI \"{uri}\": {reason}")]
    MalformedUri { uri: String, reason: String },
}

/// A media type which does not map to a representation.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MediaTypeError {
    #[error("Bad format for media type: {0}")]
    Format(String),

    #[error("No such media type exists: {0}")]
    Unknown(String),
}

/// A date attribute which could not be parsed.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Cannot convert value to a date. Value: {0}")]
pub struct InvalidDate(pub String);

/// The status line of an HTTP response, e.g. `HTTP/1.1 404 Not Found`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub version: Version,
    pub status: StatusCode,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {} {}",
            self.version,
            self.status.as_u16(),
            self.status.canonical_reason().unwrap_or("unknown reason")
        )
    }
}

/// Errors representing failed interactions with the Chemcaster service.
#[derive(thiserror::Error, Debug)]
pub enum ChemcasterError {
    #[error(transparent)]
    Link(#[from] LinkError),

    #[error(transparent)]
    MediaType(#[from] MediaTypeError),

    /// 401
    #[error("The authentication credentials included with this request are missing or invalid. {0}")]
    Unauthorized(StatusLine),

    /// 404
    #[error("The request specified a URI of a resource that does not exist. {0}")]
    NotFound(StatusLine),

    /// 405
    #[error("The HTTP verb specified in the request (DELETE, GET, HEAD, POST, PUT) is not supported for this request URI. {0}")]
    MethodNotAllowed(StatusLine),

    /// 406
    #[error("The resource identified by this request is not capable of generating a representation corresponding to one of the media types in the Accept header of the request. {0}")]
    NotAcceptable(StatusLine),

    /// 422
    #[error("The request was well-formed but was unable to be followed due to semantic errors. {0}")]
    UnprocessableEntity(StatusLine),

    /// 500
    #[error("The server encountered an unexpected condition which prevented it from fulfilling the request. {0}")]
    InternalServerError(StatusLine),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(StatusLine),

    /// The link's media type is neither JSON nor a zip file.
    #[error("Cannot decode a response of media type \"{0}\"")]
    UnsupportedMediaType(MediaType),

    #[error("Unable to create JSON object from response of {uri}: {source}")]
    Json {
        uri: String,
        source: serde_json::Error,
    },

    #[error("Unable to serialize request attributes: {0}")]
    Attributes(serde_json::Error),

    #[error("Expected a {expected} representation but got {actual}")]
    UnexpectedRepresentation { expected: Kind, actual: Kind },

    #[error("Media type ({actual}) does not match requested media type ({expected}).")]
    UnexpectedMediaType {
        expected: MediaType,
        actual: MediaType,
    },

    /// A resource block expected by a navigation method is absent.
    #[error("Representation has no \"{0}\" link")]
    MissingLink(&'static str),

    #[error("\"{0}\" not found")]
    NotFoundNamed(String),

    #[error("Unable to access index item: {0}")]
    MalformedItem(String),

    /// Error response without explanation (badness 100000).
    #[error(transparent)]
    Raw(#[from] reqwest::Error),

    /// Error from reqwest middleware function.
    #[error(transparent)]
    Middleware(anyhow::Error),
}

impl From<reqwest_middleware::Error> for ChemcasterError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(e) => ChemcasterError::Middleware(e),
            reqwest_middleware::Error::Reqwest(e) => ChemcasterError::Raw(e),
        }
    }
}

/// Map the status of a response to [ChemcasterError], or pass the response through
/// if it has a body worth decoding (200, 201, or 202).
pub(crate) fn check(res: reqwest::Response) -> Result<reqwest::Response, ChemcasterError> {
    let line = StatusLine {
        version: res.version(),
        status: res.status(),
    };
    match line.status {
        StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(res),
        StatusCode::UNAUTHORIZED => Err(ChemcasterError::Unauthorized(line)),
        StatusCode::NOT_FOUND => Err(ChemcasterError::NotFound(line)),
        StatusCode::METHOD_NOT_ALLOWED => Err(ChemcasterError::MethodNotAllowed(line)),
        StatusCode::NOT_ACCEPTABLE => Err(ChemcasterError::NotAcceptable(line)),
        StatusCode::UNPROCESSABLE_ENTITY => Err(ChemcasterError::UnprocessableEntity(line)),
        StatusCode::INTERNAL_SERVER_ERROR => Err(ChemcasterError::InternalServerError(line)),
        _ => Err(ChemcasterError::UnexpectedStatus(line)),
    }
}

/// An error which might occur while saving a zip file.
#[derive(thiserror::Error, Debug)]
pub enum FileIOError {
    #[error(transparent)]
    Chemcaster(ChemcasterError),
    #[error(transparent)]
    IO(std::io::Error),
}

impl From<ChemcasterError> for FileIOError {
    fn from(e: ChemcasterError) -> Self {
        FileIOError::Chemcaster(e)
    }
}

impl From<std::io::Error> for FileIOError {
    fn from(e: std::io::Error) -> Self {
        FileIOError::IO(e)
    }
}
