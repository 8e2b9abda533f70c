use super::ChemcasterClient;
use crate::errors::ChemcasterError;
use crate::link::Link;
use crate::models::Index;
use async_stream::try_stream;
use futures::Stream;

impl ChemcasterClient {
    /// Create a [futures::Stream] that yields the links of every item in an index,
    /// following `next_page` links until the last page.
    pub fn stream_items(
        &self,
        index: Index,
    ) -> impl Stream<Item = Result<Link, ChemcasterError>> + '_ {
        try_stream! {
            let mut page = Some(index);
            while let Some(current) = page.take() {
                for link in current.item_links() {
                    yield link;
                }
                if let Some(next) = current.next_page_link() {
                    page = Some(self.get_as::<Index>(&next).await?);
                }
            }
        }
    }
}
