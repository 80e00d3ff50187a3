//! Smart-contract values.
//!
//! Contract values are one recursive union, [`ScVal`], whose type codes are
//! contiguous from 0 — the whole tree derives its codec. 128- and 256-bit
//! integers travel as their 64-bit big-endian constituent parts.

use serde::{Deserialize, Serialize};

/// Unsigned 128-bit value as big-endian halves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UInt128Parts {
    pub hi: u64,
    pub lo: u64,
}

impl From<u128> for UInt128Parts {
    fn from(v: u128) -> Self {
        UInt128Parts {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

impl From<UInt128Parts> for u128 {
    fn from(p: UInt128Parts) -> Self {
        (u128::from(p.hi) << 64) | u128::from(p.lo)
    }
}

/// Signed 128-bit value as big-endian halves; the high half carries the sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Int128Parts {
    pub hi: i64,
    pub lo: u64,
}

impl From<i128> for Int128Parts {
    fn from(v: i128) -> Self {
        Int128Parts {
            hi: (v >> 64) as i64,
            lo: v as u64,
        }
    }
}

impl From<Int128Parts> for i128 {
    fn from(p: Int128Parts) -> Self {
        (i128::from(p.hi) << 64) | i128::from(p.lo)
    }
}

/// Unsigned 256-bit value as big-endian quarters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UInt256Parts {
    pub hi_hi: u64,
    pub hi_lo: u64,
    pub lo_hi: u64,
    pub lo_lo: u64,
}

/// Signed 256-bit value as big-endian quarters; the topmost carries the sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Int256Parts {
    pub hi_hi: i64,
    pub hi_lo: u64,
    pub lo_hi: u64,
    pub lo_lo: u64,
}

/// What subsystem an [`ScError`] came from (`SCE_CONTRACT = 0` through
/// `SCE_AUTH = 9`, contiguous).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScErrorCode {
    ArithDomain,
    IndexBounds,
    InvalidInput,
    MissingValue,
    ExistingValue,
    ExceededLimit,
    InvalidAction,
    InternalError,
    UnexpectedType,
    UnexpectedSize,
}

/// A contract error value. The contract arm carries a user-defined code;
/// every host arm carries an [`ScErrorCode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScError {
    Contract(u32),
    WasmVm(ScErrorCode),
    Context(ScErrorCode),
    Storage(ScErrorCode),
    Object(ScErrorCode),
    Crypto(ScErrorCode),
    Events(ScErrorCode),
    Budget(ScErrorCode),
    Value(ScErrorCode),
    Auth(ScErrorCode),
}

/// Variable-length contract byte string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScBytes(#[serde(with = "serde_bytes")] pub Vec<u8>);

/// Contract string value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScString(pub String);

/// Contract symbol: at most 32 bytes of `[a-zA-Z0-9_]` (documented, not
/// enforced by the codec).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScSymbol(pub String);

/// A vector of contract values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScVec(pub Vec<ScVal>);

/// An ordered key/value list of contract values. Encoded as a plain
/// counted array of entries, not a serde map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScMap(pub Vec<ScMapEntry>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScMapEntry {
    pub key: ScVal,
    pub val: ScVal,
}

/// The contract value union, keyed by value type (`SCV_BOOL = 0` through
/// `SCV_MAP = 17`, contiguous).
///
/// Vec and map arms are optional in the schema; `None` encodes as the
/// absent optional, not as an empty collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScVal {
    Bool(bool),
    Void,
    Error(ScError),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    Timepoint(u64),
    Duration(u64),
    U128(UInt128Parts),
    I128(Int128Parts),
    U256(UInt256Parts),
    I256(Int256Parts),
    Bytes(ScBytes),
    String(ScString),
    Symbol(ScSymbol),
    Vec(Option<ScVec>),
    Map(Option<ScMap>),
}
