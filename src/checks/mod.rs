//! Checks for particular families of values
//!
//! Float checks are inherent methods on [`Validator`](crate::Validator) and
//! need no import. Text and sequence checks share method names such as
//! `is_empty` and `contains`, so they live on the [`StringChecks`] and
//! [`CollectionChecks`] extension traits.

mod collection;
mod float;
mod string;

pub use collection::{CollectionChecks, CollectionValue};
pub use float::FloatValue;
pub use string::{StringChecks, TextValue};
