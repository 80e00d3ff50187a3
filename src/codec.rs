//! Whole-value codec surface: binary XDR plus the base64 text form.
//!
//! Every record type exposes the same four entry points through the blanket
//! [`XdrCodec`] trait. The base64 form exists for embedding binary payloads
//! in text contexts (JSON API responses, CLI output); it is a thin wrapper
//! around the binary encode/decode, not a separate wire format.

use crate::de::from_bytes;
use crate::error::{Error, Result};
use crate::ser::to_bytes;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Binary and base64 encode/decode for any XDR record type.
///
/// Blanket-implemented for every `Serialize + DeserializeOwned` type, so all
/// schema types get it for free:
///
/// ```rust
/// use ledger_xdr::XdrCodec;
/// use ledger_xdr::types::Price;
///
/// let price = Price { n: 1, d: 4 };
/// let bytes = price.to_xdr().unwrap();
/// assert_eq!(bytes, [0, 0, 0, 1, 0, 0, 0, 4]);
///
/// let text = price.to_base64_xdr().unwrap();
/// assert_eq!(Price::from_base64_xdr(&text).unwrap(), price);
/// ```
pub trait XdrCodec: Serialize + DeserializeOwned {
    /// Encode to XDR bytes.
    fn to_xdr(&self) -> Result<Vec<u8>> {
        to_bytes(self)
    }

    /// Decode from XDR bytes.
    fn from_xdr(bytes: &[u8]) -> Result<Self> {
        from_bytes(bytes)
    }

    /// Encode to XDR, then to standard-alphabet base64 text.
    fn to_base64_xdr(&self) -> Result<String> {
        Ok(STANDARD.encode(self.to_xdr()?))
    }

    /// Decode from base64 text carrying XDR bytes.
    fn from_base64_xdr(text: &str) -> Result<Self> {
        let raw = STANDARD
            .decode(text)
            .map_err(|e| Error::InvalidBase64(e.to_string()))?;
        Self::from_xdr(&raw)
    }
}

impl<T: Serialize + DeserializeOwned> XdrCodec for T {}
