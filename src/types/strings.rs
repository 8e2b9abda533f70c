use aliri_braid::braid;

/// Chemcaster account username.
#[braid(serde)]
pub struct Username;

/// A media type string, e.g. `application/vnd.com.chemcaster.Registry+json`
#[braid(serde)]
pub struct MediaType;

/// The target URI of a [crate::Link], e.g. `https://chemcaster.com/registries/42`
#[braid(serde)]
pub struct ResourceUri;
