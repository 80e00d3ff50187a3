//! Assets and prices.

use super::keys::AccountId;
use serde::{Deserialize, Serialize};

/// A 4-character asset code, right-padded with zero bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCode4(#[serde(with = "crate::fixed_opaque")] pub [u8; 4]);

/// A 5–12 character asset code, right-padded with zero bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCode12(#[serde(with = "crate::fixed_opaque")] pub [u8; 12]);

/// An issued asset identified by a short code and its issuing account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphaNum4 {
    pub asset_code: AssetCode4,
    pub issuer: AccountId,
}

/// An issued asset with a long code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphaNum12 {
    pub asset_code: AssetCode12,
    pub issuer: AccountId,
}

/// Asset union.
///
/// `ASSET_TYPE_NATIVE = 0` (void arm), `ASSET_TYPE_CREDIT_ALPHANUM4 = 1`,
/// `ASSET_TYPE_CREDIT_ALPHANUM12 = 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Asset {
    Native,
    CreditAlphanum4(AlphaNum4),
    CreditAlphanum12(AlphaNum12),
}

/// A price ratio `n / d`, both parts signed 32-bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}
