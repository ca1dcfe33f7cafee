//! Data-driven ship-design content and loaders.
//!
//! This crate reads the static tables the design engine runs on:
//! - Hull templates (data-driven via RON)
//! - Component specs (data-driven via RON)
//! - Design rules (data-driven via TOML)
//!
//! [`ContentFactory`] assembles them into a validated
//! [`shipyard_core::Catalog`]. Content never appears in a saved design; designs
//! reference hulls and components by id only.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ComponentLoader, ConfigLoader, ContentFactory, HullLoader, LoadResult};
