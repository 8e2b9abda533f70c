use super::document::{Document, Resource};
use super::{
    Archive, Component, Execution, Image, Index, Log, Query, Registration, Registry, Service,
    Structure, Substance, Zip,
};
use crate::errors::ChemcasterError;
use crate::link::Link;
use crate::media::Kind;
use serde_json::{Map, Value};

/// Any response body the service can send.
#[derive(Debug, Clone)]
pub enum Representation {
    Service(Service),
    Index(Index),
    Registry(Registry),
    Substance(Substance),
    Structure(Structure),
    Component(Component),
    Registration(Registration),
    Query(Query),
    Execution(Execution),
    Image(Image),
    Archive(Archive),
    Log(Log),
    Zip(Zip),
}

fn decode<T: Resource>(link: Link, content: Map<String, Value>) -> T {
    T::from_document(Document::new(link, content, T::SCHEMA))
}

impl Representation {
    /// Wrap a JSON object in the representation of the given kind.
    pub fn from_json(
        kind: Kind,
        link: Link,
        content: Map<String, Value>,
    ) -> Result<Self, ChemcasterError> {
        let representation = match kind {
            Kind::Service => Self::Service(decode(link, content)),
            Kind::Index => Self::Index(decode(link, content)),
            Kind::Registry => Self::Registry(decode(link, content)),
            Kind::Substance => Self::Substance(decode(link, content)),
            Kind::Structure => Self::Structure(decode(link, content)),
            Kind::Component => Self::Component(decode(link, content)),
            Kind::Registration => Self::Registration(decode(link, content)),
            Kind::Query => Self::Query(decode(link, content)),
            Kind::Execution => Self::Execution(decode(link, content)),
            Kind::Image => Self::Image(decode(link, content)),
            Kind::Archive => Self::Archive(decode(link, content)),
            Kind::Log => Self::Log(decode(link, content)),
            Kind::Zip => {
                return Err(ChemcasterError::UnsupportedMediaType(
                    link.media_type().clone(),
                ))
            }
        };
        Ok(representation)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::Service(_) => Kind::Service,
            Self::Index(_) => Kind::Index,
            Self::Registry(_) => Kind::Registry,
            Self::Substance(_) => Kind::Substance,
            Self::Structure(_) => Kind::Structure,
            Self::Component(_) => Kind::Component,
            Self::Registration(_) => Kind::Registration,
            Self::Query(_) => Kind::Query,
            Self::Execution(_) => Kind::Execution,
            Self::Image(_) => Kind::Image,
            Self::Archive(_) => Kind::Archive,
            Self::Log(_) => Kind::Log,
            Self::Zip(_) => Kind::Zip,
        }
    }

    /// The JSON document behind this representation, or `None` for a [Zip].
    pub fn document(&self) -> Option<&Document> {
        let document = match self {
            Self::Service(r) => r.document(),
            Self::Index(r) => r.document(),
            Self::Registry(r) => r.document(),
            Self::Substance(r) => r.document(),
            Self::Structure(r) => r.document(),
            Self::Component(r) => r.document(),
            Self::Registration(r) => r.document(),
            Self::Query(r) => r.document(),
            Self::Execution(r) => r.document(),
            Self::Image(r) => r.document(),
            Self::Archive(r) => r.document(),
            Self::Log(r) => r.document(),
            Self::Zip(_) => return None,
        };
        Some(document)
    }

    fn into_document(self) -> Result<Document, Zip> {
        let document = match self {
            Self::Service(r) => r.into_document(),
            Self::Index(r) => r.into_document(),
            Self::Registry(r) => r.into_document(),
            Self::Substance(r) => r.into_document(),
            Self::Structure(r) => r.into_document(),
            Self::Component(r) => r.into_document(),
            Self::Registration(r) => r.into_document(),
            Self::Query(r) => r.into_document(),
            Self::Execution(r) => r.into_document(),
            Self::Image(r) => r.into_document(),
            Self::Archive(r) => r.into_document(),
            Self::Log(r) => r.into_document(),
            Self::Zip(z) => return Err(z),
        };
        Ok(document)
    }

    pub fn self_link(&self) -> &Link {
        match self {
            Self::Service(r) => r.self_link(),
            Self::Index(r) => r.self_link(),
            Self::Registry(r) => r.self_link(),
            Self::Substance(r) => r.self_link(),
            Self::Structure(r) => r.self_link(),
            Self::Component(r) => r.self_link(),
            Self::Registration(r) => r.self_link(),
            Self::Query(r) => r.self_link(),
            Self::Execution(r) => r.self_link(),
            Self::Image(r) => r.self_link(),
            Self::Archive(r) => r.self_link(),
            Self::Log(r) => r.self_link(),
            Self::Zip(z) => z.self_link(),
        }
    }

    /// Unwrap the representation as the type the caller expects.
    pub fn into_resource<T: Resource>(self) -> Result<T, ChemcasterError> {
        let actual = self.kind();
        if actual != T::KIND {
            return Err(ChemcasterError::UnexpectedRepresentation {
                expected: T::KIND,
                actual,
            });
        }
        self.into_document()
            .map(T::from_document)
            .map_err(|_| ChemcasterError::UnexpectedRepresentation {
                expected: T::KIND,
                actual,
            })
    }
}

impl TryFrom<Representation> for Zip {
    type Error = ChemcasterError;

    fn try_from(value: Representation) -> Result<Self, Self::Error> {
        match value {
            Representation::Zip(zip) => Ok(zip),
            other => Err(ChemcasterError::UnexpectedRepresentation {
                expected: Kind::Zip,
                actual: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::Credentials;
    use bytes::Bytes;
    use rstest::*;
    use serde_json::json;

    fn link(kind: Kind) -> Link {
        Link::to_kind(
            kind,
            "https://chemcaster.com/thing",
            Credentials::new("alice", "s3cret"),
        )
    }

    fn content() -> Map<String, Value> {
        json!({"registry": {"name": "FIPCO Stockroom"}})
            .as_object()
            .unwrap()
            .clone()
    }

    #[rstest]
    #[case(Kind::Service)]
    #[case(Kind::Index)]
    #[case(Kind::Registry)]
    #[case(Kind::Substance)]
    #[case(Kind::Structure)]
    #[case(Kind::Component)]
    #[case(Kind::Registration)]
    #[case(Kind::Query)]
    #[case(Kind::Execution)]
    #[case(Kind::Image)]
    #[case(Kind::Archive)]
    #[case(Kind::Log)]
    fn test_from_json_kind(#[case] kind: Kind) {
        let representation = Representation::from_json(kind, link(kind), content()).unwrap();
        assert_eq!(representation.kind(), kind);
        assert_eq!(representation.self_link(), &link(kind));
        assert!(representation.document().is_some());
    }

    #[test]
    fn test_zip_is_not_json() {
        assert!(matches!(
            Representation::from_json(Kind::Zip, link(Kind::Zip), content()).unwrap_err(),
            ChemcasterError::UnsupportedMediaType(_)
        ));
    }

    #[test]
    fn test_into_resource() {
        let representation =
            Representation::from_json(Kind::Registry, link(Kind::Registry), content()).unwrap();
        let registry: Registry = representation.clone().into_resource().unwrap();
        assert_eq!(registry.name(), Some("FIPCO Stockroom"));
        let error = representation.into_resource::<Query>().unwrap_err();
        assert!(matches!(
            error,
            ChemcasterError::UnexpectedRepresentation {
                expected: Kind::Query,
                actual: Kind::Registry
            }
        ));
    }

    #[test]
    fn test_zip_try_from() {
        let zip = Representation::Zip(Zip::new(link(Kind::Zip), Bytes::from_static(b"PK")));
        assert_eq!(zip.kind(), Kind::Zip);
        assert!(zip.document().is_none());
        assert_eq!(zip.self_link().media_type().as_str(), "application/zip");
        assert!(zip.clone().into_resource::<Registry>().is_err());
        assert_eq!(Zip::try_from(zip).unwrap().data().as_ref(), b"PK");
    }
}
