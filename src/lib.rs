//! A client for the [Chemcaster](https://chemcaster.com) chemical registry API.
//!
//! Chemcaster is a hypermedia API: apart from the service URL, every resource is
//! found by following links embedded in other resources. Start with
//! [ChemcasterClient::connect] and navigate from there.
//!
//! ```no_run
//! use chemcaster::{ChemcasterClient, Credentials};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ChemcasterClient::new()?;
//! let service = client.connect(None, Credentials::new("alice", "s3cret")).await?;
//! for registry in service.registries().await? {
//!     println!("{}\t{}", registry.name, registry.uri);
//! }
//! let registry = service.create_registry("Reagents", true).await?;
//! let registry = registry.rename("Stockroom").await?;
//! registry.delete().await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod errors;
mod link;
mod linked;
pub mod media;
pub mod models;
pub mod types;

pub use client::{Attributes, ChemcasterClient, ChemcasterClientBuilder, NO_ATTRIBUTES};
pub use errors::ChemcasterError;
pub use link::{Credentials, Link, NamedUri};
pub use linked::Linked;
pub use media::Kind;
pub use models::*;
pub use types::*;

pub use reqwest;
