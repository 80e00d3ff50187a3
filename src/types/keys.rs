//! Keys, hashes, and signatures.

use super::{invalid_discriminant, missing_discriminant, missing_payload};
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 256-bit value carried as 32 big-endian bytes of fixed opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uint256(#[serde(with = "crate::fixed_opaque")] pub [u8; 32]);

/// A 32-byte hash (SHA-256 output size).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hash(#[serde(with = "crate::fixed_opaque")] pub [u8; 32]);

/// The last 4 bytes of a signer's public key, identifying which signer
/// produced a [`DecoratedSignature`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureHint(#[serde(with = "crate::fixed_opaque")] pub [u8; 4]);

/// A variable-length signature, at most 64 bytes (documented, not enforced).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(#[serde(with = "serde_bytes")] pub Vec<u8>);

/// Public key union.
///
/// `PUBLIC_KEY_TYPE_ED25519 = 0` is the only defined key type; the
/// discriminant is still encoded because the schema declares a union.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicKey {
    Ed25519(Uint256),
}

/// Account identifiers are public keys.
pub type AccountId = PublicKey;

/// Payload of the muxed arm of [`MuxedAccount`]: a 64-bit sub-account id
/// alongside the underlying ed25519 key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuxedAccountMed25519 {
    pub id: u64,
    pub ed25519: Uint256,
}

/// Account reference appearing in transactions and operations.
///
/// Key-type discriminants: `KEY_TYPE_ED25519 = 0`,
/// `KEY_TYPE_MUXED_ED25519 = 0x100`. The gap means serde's variant indices
/// cannot express the mapping, so the union is encoded by hand as a
/// discriminant/payload tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MuxedAccount {
    Ed25519(Uint256),
    MuxedEd25519(MuxedAccountMed25519),
}

impl Serialize for MuxedAccount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(2)?;
        match self {
            MuxedAccount::Ed25519(key) => {
                t.serialize_element(&0u32)?;
                t.serialize_element(key)?;
            }
            MuxedAccount::MuxedEd25519(med) => {
                t.serialize_element(&0x100u32)?;
                t.serialize_element(med)?;
            }
        }
        t.end()
    }
}

impl<'de> Deserialize<'de> for MuxedAccount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MuxedAccountVisitor;

        impl<'de> Visitor<'de> for MuxedAccountVisitor {
            type Value = MuxedAccount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a muxed account union")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let key_type: u32 = seq.next_element()?.ok_or_else(missing_discriminant)?;
                match key_type {
                    0 => Ok(MuxedAccount::Ed25519(
                        seq.next_element()?.ok_or_else(missing_payload)?,
                    )),
                    0x100 => Ok(MuxedAccount::MuxedEd25519(
                        seq.next_element()?.ok_or_else(missing_payload)?,
                    )),
                    v => Err(invalid_discriminant(v as i64)),
                }
            }
        }

        deserializer.deserialize_tuple(2, MuxedAccountVisitor)
    }
}

impl MuxedAccount {
    /// The underlying ed25519 key, ignoring any multiplexing id.
    pub fn ed25519(&self) -> &Uint256 {
        match self {
            MuxedAccount::Ed25519(key) => key,
            MuxedAccount::MuxedEd25519(med) => &med.ed25519,
        }
    }
}

impl From<AccountId> for MuxedAccount {
    fn from(id: AccountId) -> Self {
        let PublicKey::Ed25519(key) = id;
        MuxedAccount::Ed25519(key)
    }
}

/// A signature together with the hint identifying which signer made it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedSignature {
    pub hint: SignatureHint,
    pub signature: Signature,
}
