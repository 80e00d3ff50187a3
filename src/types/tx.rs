//! Transactions, operations, and envelopes.

use super::asset::{Asset, AssetCode4, AssetCode12, Price};
use super::keys::{AccountId, DecoratedSignature, MuxedAccount};
use super::ledger::{ExtensionPoint, Signer};
use super::{invalid_discriminant, missing_discriminant, missing_payload};
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_bytes::ByteBuf;
use std::fmt;

/// Transaction memo union.
///
/// `MEMO_NONE = 0`, `MEMO_TEXT = 1`, `MEMO_ID = 2`, `MEMO_HASH = 3`,
/// `MEMO_RETURN = 4`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Memo {
    None,
    /// At most 28 bytes of text (documented, not enforced).
    Text(String),
    Id(u64),
    Hash(super::keys::Hash),
    Return(super::keys::Hash),
}

/// Validity window for a transaction, as UNIX timestamps. `max_time == 0`
/// means no upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBounds {
    pub min_time: u64,
    pub max_time: u64,
}

// ── Operation payloads ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountOp {
    pub destination: AccountId,
    /// Initial balance in stroops.
    pub starting_balance: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOp {
    pub destination: MuxedAccount,
    pub asset: Asset,
    /// Amount in stroops.
    pub amount: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPaymentStrictReceiveOp {
    pub send_asset: Asset,
    pub send_max: i64,
    pub destination: MuxedAccount,
    pub dest_asset: Asset,
    pub dest_amount: i64,
    /// Intermediate hops, at most 5 (documented, not enforced).
    pub path: Vec<Asset>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    /// 0 to create a new offer, otherwise the offer to modify or delete.
    pub offer_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePassiveSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
}

/// Every field is optional; absent fields leave the account unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetOptionsOp {
    pub inflation_dest: Option<AccountId>,
    pub clear_flags: Option<u32>,
    pub set_flags: Option<u32>,
    pub master_weight: Option<u32>,
    pub low_threshold: Option<u32>,
    pub med_threshold: Option<u32>,
    pub high_threshold: Option<u32>,
    /// At most 32 bytes (documented, not enforced).
    pub home_domain: Option<String>,
    pub signer: Option<Signer>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTrustOp {
    pub line: Asset,
    pub limit: i64,
}

/// Asset restriction of [`AllowTrustOp`].
///
/// Keyed by asset type, but native (0) is excluded — the arms sit at
/// `ASSET_TYPE_CREDIT_ALPHANUM4 = 1` and `ASSET_TYPE_CREDIT_ALPHANUM12 = 2`,
/// so the union is encoded by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllowTrustAsset {
    CreditAlphanum4(AssetCode4),
    CreditAlphanum12(AssetCode12),
}

impl Serialize for AllowTrustAsset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(2)?;
        match self {
            AllowTrustAsset::CreditAlphanum4(code) => {
                t.serialize_element(&1u32)?;
                t.serialize_element(code)?;
            }
            AllowTrustAsset::CreditAlphanum12(code) => {
                t.serialize_element(&2u32)?;
                t.serialize_element(code)?;
            }
        }
        t.end()
    }
}

impl<'de> Deserialize<'de> for AllowTrustAsset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AllowTrustAssetVisitor;

        impl<'de> Visitor<'de> for AllowTrustAssetVisitor {
            type Value = AllowTrustAsset;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an allow-trust asset union")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let asset_type: u32 = seq.next_element()?.ok_or_else(missing_discriminant)?;
                match asset_type {
                    1 => Ok(AllowTrustAsset::CreditAlphanum4(
                        seq.next_element()?.ok_or_else(missing_payload)?,
                    )),
                    2 => Ok(AllowTrustAsset::CreditAlphanum12(
                        seq.next_element()?.ok_or_else(missing_payload)?,
                    )),
                    v => Err(invalid_discriminant(v as i64)),
                }
            }
        }

        deserializer.deserialize_tuple(2, AllowTrustAssetVisitor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowTrustOp {
    pub trustor: AccountId,
    pub asset: AllowTrustAsset,
    pub authorize: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageDataOp {
    /// At most 64 bytes (documented, not enforced).
    pub data_name: String,
    /// Absent deletes the data item; present sets it (at most 64 bytes).
    pub data_value: Option<ByteBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BumpSequenceOp {
    pub bump_to: i64,
}

/// Operation body union, keyed by operation type.
///
/// `CREATE_ACCOUNT = 0` through `BUMP_SEQUENCE = 11`, contiguous — serde's
/// variant indices line up with the schema discriminants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationBody {
    CreateAccount(CreateAccountOp),
    Payment(PaymentOp),
    PathPaymentStrictReceive(PathPaymentStrictReceiveOp),
    ManageSellOffer(ManageSellOfferOp),
    CreatePassiveSellOffer(CreatePassiveSellOfferOp),
    SetOptions(SetOptionsOp),
    ChangeTrust(ChangeTrustOp),
    AllowTrust(AllowTrustOp),
    /// Destination receives the merged account's whole balance.
    AccountMerge(MuxedAccount),
    Inflation,
    ManageData(ManageDataOp),
    BumpSequence(BumpSequenceOp),
}

/// One operation: an optional overriding source account plus the body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub source_account: Option<MuxedAccount>,
    pub body: OperationBody,
}

// ── Transactions and envelopes ─────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub source_account: MuxedAccount,
    /// Fee in stroops.
    pub fee: u32,
    pub seq_num: i64,
    pub time_bounds: Option<TimeBounds>,
    pub memo: Memo,
    /// At most 100 operations (documented, not enforced).
    pub operations: Vec<Operation>,
    pub ext: ExtensionPoint,
}

/// A transaction plus the signatures collected for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionV1Envelope {
    pub tx: Transaction,
    /// At most 20 signatures (documented, not enforced).
    pub signatures: Vec<DecoratedSignature>,
}

/// The inner transaction of a fee bump, wrapped in its own envelope-type
/// union with the single arm `ENVELOPE_TYPE_TX = 2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeeBumpInnerTx {
    Tx(TransactionV1Envelope),
}

impl Serialize for FeeBumpInnerTx {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let FeeBumpInnerTx::Tx(envelope) = self;
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&2u32)?;
        t.serialize_element(envelope)?;
        t.end()
    }
}

impl<'de> Deserialize<'de> for FeeBumpInnerTx {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FeeBumpInnerTxVisitor;

        impl<'de> Visitor<'de> for FeeBumpInnerTxVisitor {
            type Value = FeeBumpInnerTx;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a fee-bump inner transaction union")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let envelope_type: u32 = seq.next_element()?.ok_or_else(missing_discriminant)?;
                match envelope_type {
                    2 => Ok(FeeBumpInnerTx::Tx(
                        seq.next_element()?.ok_or_else(missing_payload)?,
                    )),
                    v => Err(invalid_discriminant(v as i64)),
                }
            }
        }

        deserializer.deserialize_tuple(2, FeeBumpInnerTxVisitor)
    }
}

/// A transaction that replaces the fee of an already-signed inner transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBumpTransaction {
    pub fee_source: MuxedAccount,
    /// Fee in stroops, covering the inner transaction as well.
    pub fee: i64,
    pub inner_tx: FeeBumpInnerTx,
    pub ext: ExtensionPoint,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBumpTransactionEnvelope {
    pub tx: FeeBumpTransaction,
    /// At most 20 signatures (documented, not enforced).
    pub signatures: Vec<DecoratedSignature>,
}

/// Top-level envelope union, keyed by envelope type.
///
/// `ENVELOPE_TYPE_TX = 2`, `ENVELOPE_TYPE_TX_FEE_BUMP = 5` — the envelope
/// type enumeration also numbers non-transaction uses, so the arms are
/// non-contiguous and the union is encoded by hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionEnvelope {
    Tx(TransactionV1Envelope),
    TxFeeBump(FeeBumpTransactionEnvelope),
}

impl Serialize for TransactionEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(2)?;
        match self {
            TransactionEnvelope::Tx(envelope) => {
                t.serialize_element(&2u32)?;
                t.serialize_element(envelope)?;
            }
            TransactionEnvelope::TxFeeBump(envelope) => {
                t.serialize_element(&5u32)?;
                t.serialize_element(envelope)?;
            }
        }
        t.end()
    }
}

impl<'de> Deserialize<'de> for TransactionEnvelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TransactionEnvelopeVisitor;

        impl<'de> Visitor<'de> for TransactionEnvelopeVisitor {
            type Value = TransactionEnvelope;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a transaction envelope union")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let envelope_type: u32 = seq.next_element()?.ok_or_else(missing_discriminant)?;
                match envelope_type {
                    2 => Ok(TransactionEnvelope::Tx(
                        seq.next_element()?.ok_or_else(missing_payload)?,
                    )),
                    5 => Ok(TransactionEnvelope::TxFeeBump(
                        seq.next_element()?.ok_or_else(missing_payload)?,
                    )),
                    v => Err(invalid_discriminant(v as i64)),
                }
            }
        }

        deserializer.deserialize_tuple(2, TransactionEnvelopeVisitor)
    }
}
