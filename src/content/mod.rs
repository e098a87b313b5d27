//! Site content access
//!
//! [`ContentLoader`] is the single gateway for reading site content and
//! submitting forms. It combines the response cache, the primary API
//! dispatcher and the static fallback bundle.

mod api;
pub mod endpoints;
pub mod loader;
pub mod normalize;

pub use loader::{ContentLoader, Origin, Served};
pub use normalize::{Listing, MediaRefs, MediaResolver};
