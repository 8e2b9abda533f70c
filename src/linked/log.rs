use super::Linked;
use crate::errors::{ChemcasterError, InvalidDate};
use crate::link::NamedUri;
use crate::media::Kind;
use crate::models::{Event, Log, Registry, Resource};
use crate::types::ResourceUri;
use time::OffsetDateTime;

impl Linked<Log> {
    pub fn created_at(&self) -> Result<Option<OffsetDateTime>, InvalidDate> {
        self.object.created_at()
    }

    /// Length of time covered by this log, in seconds.
    pub fn interval(&self) -> Option<u64> {
        self.object.interval()
    }

    pub async fn registry(&self) -> Result<Linked<Registry>, ChemcasterError> {
        self.get(self.object.registry_link(), "registry").await
    }

    pub async fn logs(&self) -> Result<Vec<NamedUri>, ChemcasterError> {
        self.names(self.object.logs_link(), "logs").await
    }

    pub async fn log_at(&self, uri: impl Into<ResourceUri>) -> Result<Self, ChemcasterError> {
        self.get_at(uri).await
    }

    pub fn registry_events(&self) -> Vec<Event> {
        self.object.events_of(Kind::Registry)
    }

    pub fn registration_events(&self) -> Vec<Event> {
        self.object.events_of(Kind::Registration)
    }

    pub fn query_events(&self) -> Vec<Event> {
        self.object.events_of(Kind::Query)
    }

    pub fn archive_events(&self) -> Vec<Event> {
        self.object.events_of(Kind::Archive)
    }

    /// GET the resource an event is about, which must be a `R`.
    pub async fn event_resource<R: Resource>(
        &self,
        event: &Event,
    ) -> Result<Linked<R>, ChemcasterError> {
        let link = event
            .resource_link()
            .ok_or(ChemcasterError::MissingLink("resource"))?;
        let expected = R::KIND.media_type();
        if link.media_type() != &expected {
            return Err(ChemcasterError::UnexpectedMediaType {
                expected,
                actual: link.media_type().clone(),
            });
        }
        self.get(Some(link), "resource").await
    }
}
