//! The record layer: ledger protocol schema types.
//!
//! Every type here is an immutable value type whose wire form follows
//! mechanically from the engine's primitive rules — structs encode their
//! fields in declared order, enums encode a 4-byte discriminant, unions
//! encode a discriminant then exactly one arm. Types derive
//! `Serialize`/`Deserialize` wherever the schema's discriminants are the
//! 0-based contiguous indices serde derives assume; unions with
//! non-contiguous or negative discriminants carry short manual impls built
//! on the same tuple rules.

pub mod asset;
pub mod contract;
pub mod keys;
pub mod ledger;
pub mod result;
pub mod tx;

pub use asset::*;
pub use contract::*;
pub use keys::*;
pub use ledger::*;
pub use result::*;
pub use tx::*;

/// Uniform rejection for schema discriminants outside the known set,
/// usable from any manual `Deserialize` impl.
pub(crate) fn invalid_discriminant<E: serde::de::Error>(value: i64) -> E {
    E::custom(format_args!("invalid discriminant value: {}", value))
}

/// A union's payload element was missing after its discriminant.
pub(crate) fn missing_payload<E: serde::de::Error>() -> E {
    E::custom("union payload missing after discriminant")
}

/// A union's discriminant element was missing entirely.
pub(crate) fn missing_discriminant<E: serde::de::Error>() -> E {
    E::custom("union discriminant missing")
}
