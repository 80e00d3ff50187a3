use ledger_xdr::types::*;
use ledger_xdr::{Error, XdrCodec, from_bytes, to_bytes};
use serde_bytes::ByteBuf;

fn account(fill: u8) -> AccountId {
    PublicKey::Ed25519(Uint256([fill; 32]))
}

fn muxed(fill: u8) -> MuxedAccount {
    MuxedAccount::Ed25519(Uint256([fill; 32]))
}

fn signature(fill: u8) -> DecoratedSignature {
    DecoratedSignature {
        hint: SignatureHint([fill; 4]),
        signature: Signature(vec![fill; 64]),
    }
}

// ── Keys ───────────────────────────────────────────────────────────────────

#[test]
fn public_key_wire_layout() {
    let bytes = to_bytes(&account(7)).unwrap();
    // 4-byte key-type discriminant (0) + 32 raw key bytes
    assert_eq!(bytes.len(), 36);
    assert_eq!(&bytes[..4], [0, 0, 0, 0]);
    assert_eq!(&bytes[4..], [7; 32]);
}

#[test]
fn muxed_account_ed25519_wire_layout() {
    let bytes = to_bytes(&muxed(9)).unwrap();
    assert_eq!(bytes.len(), 36);
    assert_eq!(&bytes[..4], [0, 0, 0, 0]);
    assert_eq!(muxed(9), from_bytes(&bytes).unwrap());
}

#[test]
fn muxed_account_med25519_wire_layout() {
    let acct = MuxedAccount::MuxedEd25519(MuxedAccountMed25519 {
        id: 515,
        ed25519: Uint256([3; 32]),
    });
    let bytes = to_bytes(&acct).unwrap();
    // discriminant 0x100, then 8-byte id, then 32-byte key
    assert_eq!(bytes.len(), 44);
    assert_eq!(&bytes[..4], [0, 0, 1, 0]);
    assert_eq!(&bytes[4..12], [0, 0, 0, 0, 0, 0, 2, 3]);
    assert_eq!(&bytes[12..], [3; 32]);
    assert_eq!(acct, from_bytes(&bytes).unwrap());
    assert_eq!(*acct.ed25519(), Uint256([3; 32]));
}

#[test]
fn muxed_account_unknown_key_type_rejected() {
    // Key type 3 maps to no arm; decode must fail, not skip.
    let mut bytes = vec![0, 0, 0, 3];
    bytes.extend([0u8; 32]);
    let result = from_bytes::<MuxedAccount>(&bytes);
    let err = result.unwrap_err();
    assert!(
        matches!(&err, Error::Message(m) if m.contains("invalid discriminant value: 3")),
        "unexpected error: {err:?}"
    );
}

// ── Assets ─────────────────────────────────────────────────────────────────

#[test]
fn asset_native_is_bare_discriminant() {
    let bytes = to_bytes(&Asset::Native).unwrap();
    assert_eq!(bytes, [0, 0, 0, 0]);
    assert_eq!(Asset::Native, from_bytes(&bytes).unwrap());
}

#[test]
fn asset_alphanum4_wire_layout() {
    let asset = Asset::CreditAlphanum4(AlphaNum4 {
        asset_code: AssetCode4(*b"USD\0"),
        issuer: account(1),
    });
    let bytes = to_bytes(&asset).unwrap();
    // discriminant 1 + 4-byte code + issuer (4 + 32)
    assert_eq!(bytes.len(), 44);
    assert_eq!(&bytes[..4], [0, 0, 0, 1]);
    assert_eq!(&bytes[4..8], *b"USD\0");
    assert_eq!(asset, from_bytes(&bytes).unwrap());
}

#[test]
fn asset_alphanum12_roundtrip() {
    let asset = Asset::CreditAlphanum12(AlphaNum12 {
        asset_code: AssetCode12(*b"LONGCODE\0\0\0\0"),
        issuer: account(2),
    });
    assert_eq!(asset, from_bytes(&to_bytes(&asset).unwrap()).unwrap());
}

// ── Memos ──────────────────────────────────────────────────────────────────

#[test]
fn memo_none_is_bare_discriminant() {
    assert_eq!(to_bytes(&Memo::None).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn memo_text_wire_layout() {
    let bytes = to_bytes(&Memo::Text("hello".into())).unwrap();
    assert_eq!(&bytes[..4], [0, 0, 0, 1]);
    assert_eq!(&bytes[4..8], [0, 0, 0, 5]);
    assert_eq!(&bytes[8..13], *b"hello");
    assert_eq!(&bytes[13..], [0, 0, 0]); // padding
}

#[test]
fn memo_all_arms_roundtrip() {
    for memo in [
        Memo::None,
        Memo::Text("tip".into()),
        Memo::Id(u64::MAX),
        Memo::Hash(Hash([0xAB; 32])),
        Memo::Return(Hash([0xCD; 32])),
    ] {
        assert_eq!(memo, from_bytes(&to_bytes(&memo).unwrap()).unwrap());
    }
}

// ── Ledger entries ─────────────────────────────────────────────────────────

fn sample_account_entry() -> AccountEntry {
    AccountEntry {
        account_id: account(1),
        balance: 9_999_999_999,
        seq_num: 0x0000_00AB_0000_0001,
        num_sub_entries: 2,
        inflation_dest: Some(account(2)),
        flags: 0x1,
        home_domain: "example.org".into(),
        thresholds: Thresholds([1, 0, 1, 2]),
        signers: vec![
            Signer {
                key: SignerKey::Ed25519(Uint256([5; 32])),
                weight: 1,
            },
            Signer {
                key: SignerKey::HashX(Uint256([6; 32])),
                weight: 255,
            },
        ],
        ext: ExtensionPoint::V0,
    }
}

#[test]
fn account_entry_roundtrip() {
    let entry = sample_account_entry();
    assert_eq!(entry, from_bytes(&to_bytes(&entry).unwrap()).unwrap());
}

#[test]
fn account_entry_without_inflation_dest() {
    let mut entry = sample_account_entry();
    entry.inflation_dest = None;
    entry.signers.clear();
    assert_eq!(entry, from_bytes(&to_bytes(&entry).unwrap()).unwrap());
}

#[test]
fn ledger_entry_all_arms_roundtrip() {
    let arms = vec![
        LedgerEntryData::Account(sample_account_entry()),
        LedgerEntryData::Trustline(TrustLineEntry {
            account_id: account(1),
            asset: Asset::CreditAlphanum4(AlphaNum4 {
                asset_code: AssetCode4(*b"EUR\0"),
                issuer: account(3),
            }),
            balance: 500,
            limit: i64::MAX,
            flags: 1,
            ext: ExtensionPoint::V0,
        }),
        LedgerEntryData::Offer(OfferEntry {
            seller_id: account(1),
            offer_id: 77,
            selling: Asset::Native,
            buying: Asset::CreditAlphanum4(AlphaNum4 {
                asset_code: AssetCode4(*b"BTC\0"),
                issuer: account(4),
            }),
            amount: 1_000,
            price: Price { n: 3, d: 2 },
            flags: 0,
            ext: ExtensionPoint::V0,
        }),
        LedgerEntryData::Data(DataEntry {
            account_id: account(1),
            data_name: "config".into(),
            data_value: vec![0xDE, 0xAD],
            ext: ExtensionPoint::V0,
        }),
    ];
    for data in arms {
        let entry = LedgerEntry {
            last_modified_ledger_seq: 42,
            data,
            ext: ExtensionPoint::V0,
        };
        assert_eq!(entry, from_bytes(&to_bytes(&entry).unwrap()).unwrap());
    }
}

// ── Operations and transactions ────────────────────────────────────────────

fn sample_operations() -> Vec<Operation> {
    let usd = Asset::CreditAlphanum4(AlphaNum4 {
        asset_code: AssetCode4(*b"USD\0"),
        issuer: account(9),
    });
    vec![
        Operation {
            source_account: None,
            body: OperationBody::CreateAccount(CreateAccountOp {
                destination: account(2),
                starting_balance: 20_000_000,
            }),
        },
        Operation {
            source_account: Some(muxed(3)),
            body: OperationBody::Payment(PaymentOp {
                destination: muxed(2),
                asset: usd.clone(),
                amount: 1_234_567,
            }),
        },
        Operation {
            source_account: None,
            body: OperationBody::PathPaymentStrictReceive(PathPaymentStrictReceiveOp {
                send_asset: Asset::Native,
                send_max: 100,
                destination: muxed(4),
                dest_asset: usd.clone(),
                dest_amount: 95,
                path: vec![Asset::Native, usd.clone()],
            }),
        },
        Operation {
            source_account: None,
            body: OperationBody::ManageSellOffer(ManageSellOfferOp {
                selling: Asset::Native,
                buying: usd.clone(),
                amount: 10,
                price: Price { n: 1, d: 2 },
                offer_id: 0,
            }),
        },
        Operation {
            source_account: None,
            body: OperationBody::SetOptions(SetOptionsOp {
                inflation_dest: None,
                clear_flags: None,
                set_flags: Some(1),
                master_weight: Some(255),
                low_threshold: Some(1),
                med_threshold: Some(2),
                high_threshold: Some(3),
                home_domain: Some("example.org".into()),
                signer: Some(Signer {
                    key: SignerKey::PreAuthTx(Uint256([8; 32])),
                    weight: 1,
                }),
            }),
        },
        Operation {
            source_account: None,
            body: OperationBody::AllowTrust(AllowTrustOp {
                trustor: account(5),
                asset: AllowTrustAsset::CreditAlphanum4(AssetCode4(*b"USD\0")),
                authorize: true,
            }),
        },
        Operation {
            source_account: None,
            body: OperationBody::AccountMerge(muxed(6)),
        },
        Operation {
            source_account: None,
            body: OperationBody::Inflation,
        },
        Operation {
            source_account: None,
            body: OperationBody::ManageData(ManageDataOp {
                data_name: "answer".into(),
                data_value: Some(ByteBuf::from(vec![42])),
            }),
        },
        Operation {
            source_account: None,
            body: OperationBody::ManageData(ManageDataOp {
                data_name: "remove-me".into(),
                data_value: None,
            }),
        },
        Operation {
            source_account: None,
            body: OperationBody::BumpSequence(BumpSequenceOp { bump_to: i64::MAX }),
        },
    ]
}

fn sample_transaction() -> Transaction {
    Transaction {
        source_account: muxed(1),
        fee: 100 * 12,
        seq_num: 0x0100_0000_0000_0007,
        time_bounds: Some(TimeBounds {
            min_time: 0,
            max_time: 1_800_000_000,
        }),
        memo: Memo::Text("invoice 42".into()),
        operations: sample_operations(),
        ext: ExtensionPoint::V0,
    }
}

#[test]
fn operation_body_all_arms_roundtrip() {
    for op in sample_operations() {
        assert_eq!(op, from_bytes(&to_bytes(&op).unwrap()).unwrap());
    }
}

#[test]
fn allow_trust_asset_native_rejected() {
    // Discriminant 0 (native) is not a legal allow-trust asset.
    let result = from_bytes::<AllowTrustAsset>(&[0, 0, 0, 0, 0, 0, 0, 0]);
    let err = result.unwrap_err();
    assert!(
        matches!(&err, Error::Message(m) if m.contains("invalid discriminant value: 0")),
        "unexpected error: {err:?}"
    );
}

#[test]
fn transaction_roundtrip() {
    let tx = sample_transaction();
    assert_eq!(tx, from_bytes(&to_bytes(&tx).unwrap()).unwrap());
}

#[test]
fn transaction_envelope_v1_wire_discriminant() {
    let envelope = TransactionEnvelope::Tx(TransactionV1Envelope {
        tx: sample_transaction(),
        signatures: vec![signature(1), signature(2)],
    });
    let bytes = to_bytes(&envelope).unwrap();
    assert_eq!(&bytes[..4], [0, 0, 0, 2]); // ENVELOPE_TYPE_TX
    assert_eq!(envelope, from_bytes(&bytes).unwrap());
}

#[test]
fn fee_bump_envelope_wire_discriminant() {
    let inner = TransactionV1Envelope {
        tx: sample_transaction(),
        signatures: vec![signature(1)],
    };
    let envelope = TransactionEnvelope::TxFeeBump(FeeBumpTransactionEnvelope {
        tx: FeeBumpTransaction {
            fee_source: muxed(7),
            fee: 10_000,
            inner_tx: FeeBumpInnerTx::Tx(inner),
            ext: ExtensionPoint::V0,
        },
        signatures: vec![signature(3)],
    });
    let bytes = to_bytes(&envelope).unwrap();
    assert_eq!(&bytes[..4], [0, 0, 0, 5]); // ENVELOPE_TYPE_TX_FEE_BUMP
    assert_eq!(envelope, from_bytes(&bytes).unwrap());
}

#[test]
fn transaction_envelope_unknown_type_rejected() {
    // Envelope type 4 (SCP value) is not a transaction envelope arm.
    let result = from_bytes::<TransactionEnvelope>(&[0, 0, 0, 4]);
    let err = result.unwrap_err();
    assert!(
        matches!(&err, Error::Message(m) if m.contains("invalid discriminant value: 4")),
        "unexpected error: {err:?}"
    );
}

// ── Results ────────────────────────────────────────────────────────────────

#[test]
fn transaction_result_code_negative_wire_form() {
    let bytes = to_bytes(&TransactionResultCode::Failed).unwrap();
    assert_eq!(bytes, [0xFF, 0xFF, 0xFF, 0xFF]); // -1 as i32
    assert_eq!(
        TransactionResultCode::Failed,
        from_bytes(&bytes).unwrap()
    );
}

#[test]
fn transaction_result_code_all_roundtrip() {
    for code in [
        TransactionResultCode::Success,
        TransactionResultCode::Failed,
        TransactionResultCode::TooEarly,
        TransactionResultCode::TooLate,
        TransactionResultCode::MissingOperation,
        TransactionResultCode::BadSeq,
        TransactionResultCode::BadAuth,
        TransactionResultCode::InsufficientBalance,
        TransactionResultCode::NoAccount,
        TransactionResultCode::InsufficientFee,
        TransactionResultCode::BadAuthExtra,
        TransactionResultCode::InternalError,
    ] {
        assert_eq!(code, from_bytes(&to_bytes(&code).unwrap()).unwrap());
    }
}

#[test]
fn transaction_result_code_unknown_rejected() {
    let result = from_bytes::<TransactionResultCode>(&(-99i32).to_be_bytes());
    let err = result.unwrap_err();
    assert!(
        matches!(&err, Error::Message(m) if m.contains("invalid discriminant value: -99")),
        "unexpected error: {err:?}"
    );
}

#[test]
fn operation_result_inner_wire_layout() {
    let result = OperationResult::Inner(OperationResultTr::Payment(PaymentResult::Success));
    let bytes = to_bytes(&result).unwrap();
    // opINNER (0) + operation type (1 = payment) + PAYMENT_SUCCESS (0)
    assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0]);
    assert_eq!(result, from_bytes(&bytes).unwrap());
}

#[test]
fn operation_result_void_arm_wire_layout() {
    let result = OperationResult::NoAccount;
    let bytes = to_bytes(&result).unwrap();
    assert_eq!(bytes, (-2i32).to_be_bytes());
    assert_eq!(result, from_bytes(&bytes).unwrap());
}

#[test]
fn account_merge_result_payload_arm() {
    let result = AccountMergeResult::Success(5_000_000);
    let bytes = to_bytes(&result).unwrap();
    assert_eq!(&bytes[..4], [0, 0, 0, 0]);
    assert_eq!(bytes.len(), 12); // code + 8-byte balance
    assert_eq!(result, from_bytes(&bytes).unwrap());

    let void = AccountMergeResult::HasSubEntries;
    let bytes = to_bytes(&void).unwrap();
    assert_eq!(bytes, (-4i32).to_be_bytes());
    assert_eq!(void, from_bytes(&bytes).unwrap());
}

#[test]
fn transaction_result_success_roundtrip() {
    let result = TransactionResult {
        fee_charged: 200,
        result: TransactionResultResult::Success(vec![
            OperationResult::Inner(OperationResultTr::CreateAccount(
                CreateAccountResult::Success,
            )),
            OperationResult::Inner(OperationResultTr::AccountMerge(
                AccountMergeResult::Success(123),
            )),
        ]),
        ext: ExtensionPoint::V0,
    };
    assert_eq!(result.result.code(), TransactionResultCode::Success);
    assert_eq!(result, from_bytes(&to_bytes(&result).unwrap()).unwrap());
}

#[test]
fn transaction_result_failed_roundtrip() {
    let result = TransactionResult {
        fee_charged: 100,
        result: TransactionResultResult::Failed(vec![OperationResult::Inner(
            OperationResultTr::Payment(PaymentResult::Underfunded),
        )]),
        ext: ExtensionPoint::V0,
    };
    assert_eq!(result, from_bytes(&to_bytes(&result).unwrap()).unwrap());
}

#[test]
fn transaction_result_void_arm_roundtrip() {
    let result = TransactionResult {
        fee_charged: 100,
        result: TransactionResultResult::BadSeq,
        ext: ExtensionPoint::V0,
    };
    let bytes = to_bytes(&result).unwrap();
    // 8-byte fee + 4-byte code + 4-byte ext discriminant
    assert_eq!(bytes.len(), 16);
    assert_eq!(result, from_bytes(&bytes).unwrap());
}

// ── Contract values ────────────────────────────────────────────────────────

#[test]
fn scval_bool_wire_layout() {
    let bytes = to_bytes(&ScVal::Bool(true)).unwrap();
    assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0, 1]);
}

#[test]
fn scval_u128_parts_match_native() {
    let v = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128;
    let parts = UInt128Parts::from(v);
    assert_eq!(u128::from(parts), v);
    // The parts encode as two 8-byte halves: identical bytes to the native
    // 16-byte big-endian form.
    assert_eq!(to_bytes(&parts).unwrap(), to_bytes(&v).unwrap());
}

#[test]
fn scval_i128_parts_negative() {
    let v = -170_141_183_460_469_231_731_687_303_715_884_105_727i128 + 5;
    let parts = Int128Parts::from(v);
    assert_eq!(i128::from(parts), v);
}

#[test]
fn scval_all_arms_roundtrip() {
    let vals = vec![
        ScVal::Bool(false),
        ScVal::Void,
        ScVal::Error(ScError::Contract(7)),
        ScVal::Error(ScError::Budget(ScErrorCode::ExceededLimit)),
        ScVal::U32(u32::MAX),
        ScVal::I32(i32::MIN),
        ScVal::U64(u64::MAX),
        ScVal::I64(i64::MIN),
        ScVal::Timepoint(1_700_000_000),
        ScVal::Duration(3600),
        ScVal::U128(UInt128Parts::from(u128::MAX)),
        ScVal::I128(Int128Parts::from(i128::MIN)),
        ScVal::U256(UInt256Parts {
            hi_hi: 1,
            hi_lo: 2,
            lo_hi: 3,
            lo_lo: 4,
        }),
        ScVal::I256(Int256Parts {
            hi_hi: -1,
            hi_lo: 2,
            lo_hi: 3,
            lo_lo: 4,
        }),
        ScVal::Bytes(ScBytes(vec![1, 2, 3])),
        ScVal::String(ScString("contract".into())),
        ScVal::Symbol(ScSymbol("transfer".into())),
        ScVal::Vec(None),
        ScVal::Vec(Some(ScVec(vec![ScVal::Bool(true), ScVal::Void]))),
        ScVal::Map(None),
        ScVal::Map(Some(ScMap(vec![ScMapEntry {
            key: ScVal::Symbol(ScSymbol("k".into())),
            val: ScVal::U32(1),
        }]))),
    ];
    for val in vals {
        assert_eq!(val, from_bytes(&to_bytes(&val).unwrap()).unwrap());
    }
}

#[test]
fn scval_nested_vec_roundtrip() {
    let val = ScVal::Vec(Some(ScVec(vec![
        ScVal::Vec(Some(ScVec(vec![ScVal::U32(1)]))),
        ScVal::Map(Some(ScMap(vec![ScMapEntry {
            key: ScVal::Symbol(ScSymbol("inner".into())),
            val: ScVal::Vec(None),
        }]))),
    ])));
    assert_eq!(val, from_bytes(&to_bytes(&val).unwrap()).unwrap());
}

// ── Base64 convenience form ────────────────────────────────────────────────

#[test]
fn base64_known_value() {
    let price = Price { n: 1, d: 4 };
    assert_eq!(price.to_base64_xdr().unwrap(), "AAAAAQAAAAQ=");
    assert_eq!(Price::from_base64_xdr("AAAAAQAAAAQ=").unwrap(), price);
}

#[test]
fn base64_envelope_roundtrip() {
    let envelope = TransactionEnvelope::Tx(TransactionV1Envelope {
        tx: sample_transaction(),
        signatures: vec![signature(4)],
    });
    let text = envelope.to_base64_xdr().unwrap();
    assert_eq!(TransactionEnvelope::from_base64_xdr(&text).unwrap(), envelope);
    // The text form wraps exactly the binary form.
    assert_eq!(
        TransactionEnvelope::from_xdr(&envelope.to_xdr().unwrap()).unwrap(),
        envelope
    );
}

#[test]
fn base64_invalid_text_rejected() {
    let result = Price::from_base64_xdr("!!!not base64!!!");
    assert!(matches!(result.unwrap_err(), Error::InvalidBase64(_)));
}
