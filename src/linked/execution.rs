use super::Linked;
use crate::errors::ChemcasterError;
use crate::link::NamedUri;
use crate::models::*;
use crate::types::ResourceUri;

impl Linked<Execution> {
    /// The query which was executed.
    pub async fn query(&self) -> Result<Linked<Query>, ChemcasterError> {
        self.get(self.object.executable_link(), "executable").await
    }

    pub fn cursor(&self) -> Option<&str> {
        self.object.cursor()
    }

    pub fn is_reverse(&self) -> Option<bool> {
        self.object.is_reverse()
    }

    pub fn maximum_results(&self) -> Option<u64> {
        self.object.maximum_results()
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.object.next_cursor()
    }

    pub fn previous_cursor(&self) -> Option<&str> {
        self.object.previous_cursor()
    }

    /// Run the query again starting from `cursor`, e.g. [Execution::next_cursor].
    pub async fn next_results(
        &self,
        cursor: &str,
        reverse: bool,
        maximum_results: u64,
    ) -> Result<Self, ChemcasterError> {
        let attributes = ExecutionAttributes {
            maximum_results,
            cursor: Some(cursor),
            reverse: Some(reverse),
        };
        self.create(self.object.index_link(), "index", &attributes)
            .await
    }

    /// The first substance of each hit.
    pub fn substances(&self) -> Vec<NamedUri> {
        self.object.substances()
    }

    pub async fn substance_at(
        &self,
        uri: impl Into<ResourceUri>,
    ) -> Result<Linked<Substance>, ChemcasterError> {
        self.get_at(uri).await
    }
}
