//! Domain models for stratus-bundle
//!
//! This module contains plain domain objects: an installed [`Bundle`] and the
//! [`BundleRef`] a user names one by.

pub mod bundle;
pub mod reference;

pub use bundle::Bundle;
pub use reference::{BundleRef, validate_name};
