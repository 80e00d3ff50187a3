//! # ledger-xdr
//!
//! XDR (eXternal Data Representation, RFC 4506) codec for a distributed
//! ledger protocol's wire types, built on top of the `serde` framework.
//!
//! ## Overview
//!
//! The ledger protocol encodes every message — accounts, assets, operations,
//! transactions, ledger entries, smart-contract values, results — in XDR.
//! All values are big-endian (network byte order), every item occupies a
//! multiple of 4 bytes (padded with zeroes as needed), and composite types
//! are fixed ordered tuples of primitives with 4-byte union discriminants.
//!
//! The crate splits into the codec engine ([`ser`], [`de`], [`error`],
//! [`fixed_opaque`]) and the record layer ([`types`]). The engine implements
//! the handful of primitive wire rules once; every record type in [`types`]
//! is a mechanical instantiation of them via serde derive (or a short manual
//! impl where the schema assigns non-contiguous or negative discriminants).
//!
//! ## Serde type mapping
//!
//! | Rust / serde type | XDR encoding |
//! |-------------------|--------------|
//! | `bool`            | 4-byte unsigned int: 0 (false) or 1 (true) |
//! | `i32` (`i8`, `i16` promote) | 4-byte signed int |
//! | `i64`             | 8-byte hyper integer |
//! | `u32` (`u8`, `u16` promote) | 4-byte unsigned int |
//! | `u64`             | 8-byte unsigned hyper integer |
//! | `u128` / `i128`   | 16 bytes, big-endian |
//! | `&str`, `String`  | 4-byte length + UTF-8 bytes + 0-3 zero-padding bytes |
//! | `&[u8]`, `Vec<u8>` (via `serde_bytes`) | 4-byte length + bytes + 0-3 zero-padding bytes |
//! | `[u8; N]` (via [`fixed_opaque`]) | N raw bytes + 0-3 zero-padding bytes, no prefix |
//! | `Option<T>`       | 4-byte flag (0/1) + optional encoded T |
//! | `()` / unit struct | 0 bytes (XDR void) |
//! | Unit enum variant | 4-byte unsigned discriminant (variant index) |
//! | Newtype variant   | 4-byte discriminant + encoded inner value |
//! | Tuple/struct variant | 4-byte discriminant + fields consecutively |
//! | `Vec<T>` / seq    | 4-byte count + encoded elements |
//! | Tuple / tuple struct | fields encoded consecutively (no count prefix) |
//! | Struct            | fields encoded consecutively (no count prefix) |
//!
//! Floats, chars, and maps have no place in the protocol's XDR profile and
//! are rejected with [`Error::Unsupported`].
//!
//! ## Strictness
//!
//! Decoding rejects malformed input instead of guessing: booleans and
//! optional flags must be exactly 0 or 1, and a union or enum discriminant
//! outside the known set fails with [`Error::InvalidDiscriminant`] — there
//! is no lenient "unknown arm, no payload" path anywhere. The one deliberate
//! leniency is that zero-padding bytes are skipped, not validated. Declared
//! string/array maxima from the schema are documentation only.
//!
//! ## Example
//!
//! ```rust
//! use ledger_xdr::XdrCodec;
//! use ledger_xdr::types::{Memo, Price};
//!
//! // A plain two-field record: fields back to back, no framing.
//! let price = Price { n: 5, d: 7 };
//! let bytes = price.to_xdr().unwrap();
//! assert_eq!(bytes, [0, 0, 0, 5, 0, 0, 0, 7]);
//! assert_eq!(Price::from_xdr(&bytes).unwrap(), price);
//!
//! // A union: 4-byte discriminant, then exactly one arm's payload.
//! let memo = Memo::Id(99);
//! assert_eq!(memo.to_xdr().unwrap(), [0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 99]);
//!
//! // The base64 text form wraps the same bytes.
//! let text = memo.to_base64_xdr().unwrap();
//! assert_eq!(Memo::from_base64_xdr(&text).unwrap(), memo);
//! ```

pub mod codec;
pub mod de;
pub mod error;
pub mod fixed_opaque;
pub mod ser;
pub mod types;

pub use codec::XdrCodec;
pub use de::{Deserializer, from_bytes, from_bytes_partial, from_reader};
pub use error::{Error, Result};
pub use ser::{Serializer, to_bytes, to_writer};

pub use serde::{Deserialize, Serialize};

/// Marker name used by [`fixed_opaque`] to route `[u8; N]` fields through
/// the no-length-prefix encoding.
pub(crate) const FIXED_OPAQUE_TOKEN: &str = "$ledger_xdr::fixed_opaque";
