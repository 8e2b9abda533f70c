//! Typed views of the JSON documents served by Chemcaster.
mod archive;
mod component;
mod dates;
mod document;
mod execution;
mod image;
mod index;
mod log;
mod query;
mod registration;
mod registry;
mod representation;
mod service;
mod structure;
mod substance;
mod zip;

pub use archive::Archive;
pub use component::Component;
pub use document::{Document, Item, Resource, Schema};
pub use execution::{Execution, ExecutionAttributes};
pub use image::{Image, ImageAttributes};
pub use index::Index;
pub use self::log::{Event, Log};
pub use query::{Query, QueryAttributes};
pub use registration::{ComponentTemplate, Registration, RegistrationAttributes};
pub use registry::{Registry, RegistryAttributes};
pub use representation::Representation;
pub use service::Service;
pub use structure::Structure;
pub use substance::Substance;
pub use zip::Zip;
pub(crate) use zip::create_file;
