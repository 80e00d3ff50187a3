//! Transaction and operation results.
//!
//! Result unions are keyed by signed codes: success is 0 and every failure
//! is negative, so none of them can lean on serde's 0-based variant indices.
//! The void-arm unions (code only, no payload) are generated by
//! `result_code_union!`; unions with payload arms are written out.

use super::ledger::ExtensionPoint;
use super::{invalid_discriminant, missing_discriminant, missing_payload};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Defines a result union whose arms are all void: on the wire it is just
/// the signed 4-byte code.
macro_rules! result_code_union {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let code: i32 = match self {
                    $($name::$variant => $code),+
                };
                serializer.serialize_i32(code)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct CodeVisitor;

                impl<'de> Visitor<'de> for CodeVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str(concat!("a ", stringify!($name), " code"))
                    }

                    fn visit_i32<E: de::Error>(self, v: i32) -> Result<Self::Value, E> {
                        match v {
                            $($code => Ok($name::$variant),)+
                            other => Err(invalid_discriminant(other as i64)),
                        }
                    }
                }

                deserializer.deserialize_i32(CodeVisitor)
            }
        }
    };
}

result_code_union! {
    /// Top-level transaction result code.
    TransactionResultCode {
        Success = 0,
        Failed = -1,
        TooEarly = -2,
        TooLate = -3,
        MissingOperation = -4,
        BadSeq = -5,
        BadAuth = -6,
        InsufficientBalance = -7,
        NoAccount = -8,
        InsufficientFee = -9,
        BadAuthExtra = -10,
        InternalError = -11,
    }
}

result_code_union! {
    CreateAccountResult {
        Success = 0,
        Malformed = -1,
        Underfunded = -2,
        LowReserve = -3,
        AlreadyExist = -4,
    }
}

result_code_union! {
    PaymentResult {
        Success = 0,
        Malformed = -1,
        Underfunded = -2,
        SrcNoTrust = -3,
        SrcNotAuthorized = -4,
        NoDestination = -5,
        NoTrust = -6,
        NotAuthorized = -7,
        LineFull = -8,
        NoIssuer = -9,
    }
}

result_code_union! {
    PathPaymentStrictReceiveResult {
        Success = 0,
        Malformed = -1,
        Underfunded = -2,
        SrcNoTrust = -3,
        SrcNotAuthorized = -4,
        NoDestination = -5,
        NoTrust = -6,
        NotAuthorized = -7,
        LineFull = -8,
        NoIssuer = -9,
        TooFewOffers = -10,
        OfferCrossSelf = -11,
        OverSendmax = -12,
    }
}

result_code_union! {
    /// Shared by manage-sell-offer and create-passive-sell-offer.
    ManageSellOfferResult {
        Success = 0,
        Malformed = -1,
        SellNoTrust = -2,
        BuyNoTrust = -3,
        SellNotAuthorized = -4,
        BuyNotAuthorized = -5,
        LineFull = -6,
        Underfunded = -7,
        CrossSelf = -8,
        SellNoIssuer = -9,
        BuyNoIssuer = -10,
        NotFound = -11,
        LowReserve = -12,
    }
}

result_code_union! {
    SetOptionsResult {
        Success = 0,
        LowReserve = -1,
        TooManySigners = -2,
        BadFlags = -3,
        InvalidInflation = -4,
        CantChange = -5,
        UnknownFlag = -6,
        ThresholdOutOfRange = -7,
        BadSigner = -8,
        InvalidHomeDomain = -9,
    }
}

result_code_union! {
    ChangeTrustResult {
        Success = 0,
        Malformed = -1,
        NoIssuer = -2,
        InvalidLimit = -3,
        LowReserve = -4,
        SelfNotAllowed = -5,
    }
}

result_code_union! {
    AllowTrustResult {
        Success = 0,
        Malformed = -1,
        NoTrustLine = -2,
        TrustNotRequired = -3,
        CantRevoke = -4,
        SelfNotAllowed = -5,
    }
}

result_code_union! {
    InflationResult {
        Success = 0,
        NotTime = -1,
    }
}

result_code_union! {
    ManageDataResult {
        Success = 0,
        NotSupportedYet = -1,
        NameNotFound = -2,
        LowReserve = -3,
        InvalidName = -4,
    }
}

result_code_union! {
    BumpSequenceResult {
        Success = 0,
        BadSeq = -1,
    }
}

/// Account-merge result: the success arm carries the balance transferred to
/// the destination, the failure arms are void.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountMergeResult {
    /// Balance moved to the destination, in stroops.
    Success(i64),
    Malformed,
    NoAccount,
    ImmutableSet,
    HasSubEntries,
    SeqnumTooFar,
    DestFull,
}

impl Serialize for AccountMergeResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AccountMergeResult::Success(balance) => {
                let mut t = serializer.serialize_tuple(2)?;
                t.serialize_element(&0i32)?;
                t.serialize_element(balance)?;
                t.end()
            }
            AccountMergeResult::Malformed => serializer.serialize_i32(-1),
            AccountMergeResult::NoAccount => serializer.serialize_i32(-2),
            AccountMergeResult::ImmutableSet => serializer.serialize_i32(-3),
            AccountMergeResult::HasSubEntries => serializer.serialize_i32(-4),
            AccountMergeResult::SeqnumTooFar => serializer.serialize_i32(-5),
            AccountMergeResult::DestFull => serializer.serialize_i32(-6),
        }
    }
}

impl<'de> Deserialize<'de> for AccountMergeResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AccountMergeResultVisitor;

        impl<'de> Visitor<'de> for AccountMergeResultVisitor {
            type Value = AccountMergeResult;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an account-merge result union")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let code: i32 = seq.next_element()?.ok_or_else(missing_discriminant)?;
                match code {
                    0 => Ok(AccountMergeResult::Success(
                        seq.next_element()?.ok_or_else(missing_payload)?,
                    )),
                    -1 => Ok(AccountMergeResult::Malformed),
                    -2 => Ok(AccountMergeResult::NoAccount),
                    -3 => Ok(AccountMergeResult::ImmutableSet),
                    -4 => Ok(AccountMergeResult::HasSubEntries),
                    -5 => Ok(AccountMergeResult::SeqnumTooFar),
                    -6 => Ok(AccountMergeResult::DestFull),
                    v => Err(invalid_discriminant(v as i64)),
                }
            }
        }

        deserializer.deserialize_tuple(2, AccountMergeResultVisitor)
    }
}

/// The per-operation-type result union, keyed by operation type
/// (`CREATE_ACCOUNT = 0` through `BUMP_SEQUENCE = 11`, contiguous).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationResultTr {
    CreateAccount(CreateAccountResult),
    Payment(PaymentResult),
    PathPaymentStrictReceive(PathPaymentStrictReceiveResult),
    ManageSellOffer(ManageSellOfferResult),
    CreatePassiveSellOffer(ManageSellOfferResult),
    SetOptions(SetOptionsResult),
    ChangeTrust(ChangeTrustResult),
    AllowTrust(AllowTrustResult),
    AccountMerge(AccountMergeResult),
    Inflation(InflationResult),
    ManageData(ManageDataResult),
    BumpSequence(BumpSequenceResult),
}

/// Result of one operation.
///
/// `opINNER = 0` wraps the per-type result; the validation failures that
/// precede operation execution are negative void arms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationResult {
    Inner(OperationResultTr),
    BadAuth,
    NoAccount,
    NotSupported,
}

impl Serialize for OperationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OperationResult::Inner(tr) => {
                let mut t = serializer.serialize_tuple(2)?;
                t.serialize_element(&0i32)?;
                t.serialize_element(tr)?;
                t.end()
            }
            OperationResult::BadAuth => serializer.serialize_i32(-1),
            OperationResult::NoAccount => serializer.serialize_i32(-2),
            OperationResult::NotSupported => serializer.serialize_i32(-3),
        }
    }
}

impl<'de> Deserialize<'de> for OperationResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OperationResultVisitor;

        impl<'de> Visitor<'de> for OperationResultVisitor {
            type Value = OperationResult;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an operation result union")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let code: i32 = seq.next_element()?.ok_or_else(missing_discriminant)?;
                match code {
                    0 => Ok(OperationResult::Inner(
                        seq.next_element()?.ok_or_else(missing_payload)?,
                    )),
                    -1 => Ok(OperationResult::BadAuth),
                    -2 => Ok(OperationResult::NoAccount),
                    -3 => Ok(OperationResult::NotSupported),
                    v => Err(invalid_discriminant(v as i64)),
                }
            }
        }

        deserializer.deserialize_tuple(2, OperationResultVisitor)
    }
}

/// The result union inside [`TransactionResult`], keyed by
/// [`TransactionResultCode`]. Only success and failure carry the
/// per-operation results; every other code is a void arm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionResultResult {
    Success(Vec<OperationResult>),
    Failed(Vec<OperationResult>),
    TooEarly,
    TooLate,
    MissingOperation,
    BadSeq,
    BadAuth,
    InsufficientBalance,
    NoAccount,
    InsufficientFee,
    BadAuthExtra,
    InternalError,
}

impl TransactionResultResult {
    /// The code this arm is keyed by.
    pub fn code(&self) -> TransactionResultCode {
        match self {
            TransactionResultResult::Success(_) => TransactionResultCode::Success,
            TransactionResultResult::Failed(_) => TransactionResultCode::Failed,
            TransactionResultResult::TooEarly => TransactionResultCode::TooEarly,
            TransactionResultResult::TooLate => TransactionResultCode::TooLate,
            TransactionResultResult::MissingOperation => TransactionResultCode::MissingOperation,
            TransactionResultResult::BadSeq => TransactionResultCode::BadSeq,
            TransactionResultResult::BadAuth => TransactionResultCode::BadAuth,
            TransactionResultResult::InsufficientBalance => {
                TransactionResultCode::InsufficientBalance
            }
            TransactionResultResult::NoAccount => TransactionResultCode::NoAccount,
            TransactionResultResult::InsufficientFee => TransactionResultCode::InsufficientFee,
            TransactionResultResult::BadAuthExtra => TransactionResultCode::BadAuthExtra,
            TransactionResultResult::InternalError => TransactionResultCode::InternalError,
        }
    }
}

impl Serialize for TransactionResultResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TransactionResultResult::Success(results) => {
                let mut t = serializer.serialize_tuple(2)?;
                t.serialize_element(&0i32)?;
                t.serialize_element(results)?;
                t.end()
            }
            TransactionResultResult::Failed(results) => {
                let mut t = serializer.serialize_tuple(2)?;
                t.serialize_element(&-1i32)?;
                t.serialize_element(results)?;
                t.end()
            }
            other => {
                let code = other.code();
                code.serialize(serializer)
            }
        }
    }
}

impl<'de> Deserialize<'de> for TransactionResultResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TransactionResultResultVisitor;

        impl<'de> Visitor<'de> for TransactionResultResultVisitor {
            type Value = TransactionResultResult;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a transaction result union")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let code: i32 = seq.next_element()?.ok_or_else(missing_discriminant)?;
                match code {
                    0 => Ok(TransactionResultResult::Success(
                        seq.next_element()?.ok_or_else(missing_payload)?,
                    )),
                    -1 => Ok(TransactionResultResult::Failed(
                        seq.next_element()?.ok_or_else(missing_payload)?,
                    )),
                    -2 => Ok(TransactionResultResult::TooEarly),
                    -3 => Ok(TransactionResultResult::TooLate),
                    -4 => Ok(TransactionResultResult::MissingOperation),
                    -5 => Ok(TransactionResultResult::BadSeq),
                    -6 => Ok(TransactionResultResult::BadAuth),
                    -7 => Ok(TransactionResultResult::InsufficientBalance),
                    -8 => Ok(TransactionResultResult::NoAccount),
                    -9 => Ok(TransactionResultResult::InsufficientFee),
                    -10 => Ok(TransactionResultResult::BadAuthExtra),
                    -11 => Ok(TransactionResultResult::InternalError),
                    v => Err(invalid_discriminant(v as i64)),
                }
            }
        }

        deserializer.deserialize_tuple(2, TransactionResultResultVisitor)
    }
}

/// The result of applying one transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    /// Fee actually charged, in stroops.
    pub fee_charged: i64,
    pub result: TransactionResultResult,
    pub ext: ExtensionPoint,
}
