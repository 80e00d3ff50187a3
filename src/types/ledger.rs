//! Ledger entries: the persisted records a validator keeps per account,
//! trustline, offer, and data item.

use super::asset::{Asset, Price};
use super::keys::{AccountId, Uint256};
use serde::{Deserialize, Serialize};

/// Signature weight thresholds: master weight, low, medium, high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds(#[serde(with = "crate::fixed_opaque")] pub [u8; 4]);

/// Key a signer can be identified by.
///
/// `SIGNER_KEY_TYPE_ED25519 = 0`, `SIGNER_KEY_TYPE_PRE_AUTH_TX = 1`,
/// `SIGNER_KEY_TYPE_HASH_X = 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignerKey {
    Ed25519(Uint256),
    PreAuthTx(Uint256),
    HashX(Uint256),
}

/// An additional signer attached to an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub key: SignerKey,
    pub weight: u32,
}

/// Reserved extension point: version 0, void payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtensionPoint {
    V0,
}

/// An account as persisted in the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntry {
    pub account_id: AccountId,
    /// Balance in stroops.
    pub balance: i64,
    pub seq_num: i64,
    pub num_sub_entries: u32,
    pub inflation_dest: Option<AccountId>,
    pub flags: u32,
    /// At most 32 bytes (documented, not enforced).
    pub home_domain: String,
    pub thresholds: Thresholds,
    /// At most 20 signers (documented, not enforced).
    pub signers: Vec<Signer>,
    pub ext: ExtensionPoint,
}

/// A trustline: one account's holding of one issued asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustLineEntry {
    pub account_id: AccountId,
    pub asset: Asset,
    pub balance: i64,
    pub limit: i64,
    pub flags: u32,
    pub ext: ExtensionPoint,
}

/// An open offer on the distributed exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferEntry {
    pub seller_id: AccountId,
    pub offer_id: i64,
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    pub flags: u32,
    pub ext: ExtensionPoint,
}

/// A named data item attached to an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEntry {
    pub account_id: AccountId,
    /// At most 64 bytes (documented, not enforced).
    pub data_name: String,
    /// At most 64 bytes (documented, not enforced).
    #[serde(with = "serde_bytes")]
    pub data_value: Vec<u8>,
    pub ext: ExtensionPoint,
}

/// Ledger entry union, keyed by entry type.
///
/// `ACCOUNT = 0`, `TRUSTLINE = 1`, `OFFER = 2`, `DATA = 3`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEntryData {
    Account(AccountEntry),
    Trustline(TrustLineEntry),
    Offer(OfferEntry),
    Data(DataEntry),
}

/// A ledger entry together with its bookkeeping envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub last_modified_ledger_seq: u32,
    pub data: LedgerEntryData,
    pub ext: ExtensionPoint,
}
