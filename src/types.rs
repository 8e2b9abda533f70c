/// Primitive Chemcaster API data types and NewType-patterns.
mod service_url;
mod strings;

pub use service_url::*;
pub use strings::*;
