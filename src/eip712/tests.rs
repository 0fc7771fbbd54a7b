//! EIP-712 Test Suite
//!
//! Fixtures against the reference vectors from the EIP-712 specification
//! and well-known on-chain constants.

use super::*;

/// The canonical Mail example from the EIP-712 specification
fn create_mail_example() -> TypedData {
    let json = r#"{
        "types": {
            "EIP712Domain": [
                {"name": "name", "type": "string"},
                {"name": "version", "type": "string"},
                {"name": "chainId", "type": "uint256"},
                {"name": "verifyingContract", "type": "address"}
            ],
            "Person": [
                {"name": "name", "type": "string"},
                {"name": "wallet", "type": "address"}
            ],
            "Mail": [
                {"name": "from", "type": "Person"},
                {"name": "to", "type": "Person"},
                {"name": "contents", "type": "string"}
            ]
        },
        "primaryType": "Mail",
        "domain": {
            "name": "Ether Mail",
            "version": "1",
            "chainId": 1,
            "verifyingContract": "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC"
        },
        "message": {
            "from": {
                "name": "Cow",
                "wallet": "0xCD2a3d9F938E13CD947Ec05AbC7FE734Df8DD826"
            },
            "to": {
                "name": "Bob",
                "wallet": "0xbBbBBBBbbBBBbbbBbbBbbbbBBbBbbbbBbBbbBBbB"
            },
            "contents": "Hello, Bob!"
        }
    }"#;

    TypedData::from_json(json).unwrap()
}

#[test]
fn test_mail_type_hash() {
    let typed_data = create_mail_example();
    let hash = type_hash("Mail", &typed_data.types).unwrap();
    assert_eq!(
        hex::encode(hash),
        "a0cedeb2dc280ba39b857546d74f5549c3a1d7bdc2dd96bf881f76108e23dac2"
    );
}

#[test]
fn test_domain_type_hash() {
    let typed_data = create_mail_example();
    let hash = type_hash("EIP712Domain", &typed_data.types).unwrap();
    assert_eq!(
        hex::encode(hash),
        "8b73c3c69bb8fe3d512ecc4cf759cc79239f7b179b0ffacaa9a75d522b39400f"
    );
}

#[test]
fn test_mail_domain_separator() {
    let typed_data = create_mail_example();
    let separator = domain_separator(&typed_data).unwrap();
    assert_eq!(
        hex::encode(separator),
        "f2cee375fa42b42143804025fc449deafd50cc031ca257e0b194a650a912090f"
    );
}

#[test]
fn test_mail_message_struct_hash() {
    let typed_data = create_mail_example();
    let hash = hash_struct("Mail", &typed_data.message, &typed_data.types).unwrap();
    assert_eq!(
        hex::encode(hash),
        "c52c0ee5d84264471806290a3f2c4cecfc5490626bf912d01f240d7a274b371e"
    );
}

#[test]
fn test_mail_final_digest() {
    let typed_data = create_mail_example();
    let hash = hash_typed_data(&typed_data).unwrap();
    assert_eq!(
        hex::encode(hash),
        "be609aee343fb3c4b28e1df9e632fca64fcfaede20f02e86244efddf30957bd2"
    );
}

/// Gnosis Safe transaction: the canonical type string and its well-known
/// on-chain type hash
#[test]
fn test_gnosis_safe_tx() {
    let json = r#"{
        "types": {
            "EIP712Domain": [
                {"name": "verifyingContract", "type": "address"}
            ],
            "SafeTx": [
                {"name": "to", "type": "address"},
                {"name": "value", "type": "uint256"},
                {"name": "data", "type": "bytes"},
                {"name": "operation", "type": "uint8"},
                {"name": "safeTxGas", "type": "uint256"},
                {"name": "baseGas", "type": "uint256"},
                {"name": "gasPrice", "type": "uint256"},
                {"name": "gasToken", "type": "address"},
                {"name": "refundReceiver", "type": "address"},
                {"name": "nonce", "type": "uint256"}
            ]
        },
        "primaryType": "SafeTx",
        "domain": {
            "verifyingContract": "0x25a6c4BBd32B2424A9c99aEB0584Ad12045382B3"
        },
        "message": {
            "to": "0x9f7dfAb2222A473284205cdDF08a677726d786A0",
            "value": "0",
            "data": "0x",
            "operation": 0,
            "safeTxGas": 0,
            "baseGas": 0,
            "gasPrice": "0",
            "gasToken": "0x0000000000000000000000000000000000000000",
            "refundReceiver": "0x0000000000000000000000000000000000000000",
            "nonce": 0
        }
    }"#;
    let typed_data = TypedData::from_json(json).unwrap();

    let type_string = encode_type("SafeTx", &typed_data.types).unwrap();
    assert_eq!(
        type_string,
        "SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,\
         uint256 baseGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)"
    );

    let safe_tx_type_hash = type_hash("SafeTx", &typed_data.types).unwrap();
    assert_eq!(
        hex::encode(safe_tx_type_hash),
        "bb8310d486368db6bd6f849402fdd73ad53d316b5a4b2644ad6efe0f941286d8"
    );

    let digest = hash_typed_data(&typed_data).unwrap();
    assert_eq!(digest.len(), 32);
}

/// GSN relay request with nested GasData and RelayData structs
#[test]
fn test_gsn_relay_request() {
    let json = r#"{
        "types": {
            "EIP712Domain": [
                {"name": "name", "type": "string"},
                {"name": "version", "type": "string"},
                {"name": "chainId", "type": "uint256"},
                {"name": "verifyingContract", "type": "address"}
            ],
            "GasData": [
                {"name": "gasLimit", "type": "uint256"},
                {"name": "gasPrice", "type": "uint256"},
                {"name": "pctRelayFee", "type": "uint256"},
                {"name": "baseRelayFee", "type": "uint256"}
            ],
            "RelayData": [
                {"name": "senderAddress", "type": "address"},
                {"name": "senderNonce", "type": "uint256"},
                {"name": "relayWorker", "type": "address"},
                {"name": "paymaster", "type": "address"}
            ],
            "RelayRequest": [
                {"name": "target", "type": "address"},
                {"name": "encodedFunction", "type": "bytes"},
                {"name": "gasData", "type": "GasData"},
                {"name": "relayData", "type": "RelayData"}
            ]
        },
        "primaryType": "RelayRequest",
        "domain": {
            "name": "GSN Relayed Transaction",
            "version": "1",
            "chainId": 42,
            "verifyingContract": "0x6453D37248Ab2C16eBd1A8f782a2CBC65860E60B"
        },
        "message": {
            "target": "0x9cf40ef3d1622efe270fe6fe720585b4be4eeeff",
            "encodedFunction": "0xa9059cbb0000000000000000000000002e0d94754b348d208d64d52d78bcd443afa9fa520000000000000000000000000000000000000000000000000000000000000007",
            "gasData": {
                "gasLimit": "39507",
                "gasPrice": "1700000000",
                "pctRelayFee": "70",
                "baseRelayFee": "0"
            },
            "relayData": {
                "senderAddress": "0x22d491bde2303f2f43325b2108d26f1eaba1e32b",
                "senderNonce": "3",
                "relayWorker": "0x3baee457ad824c94bd3953183d725847d023a2cf",
                "paymaster": "0x957F270d45e9Ceca5c5af2b49f1b5dC1Abb0421c"
            }
        }
    }"#;
    let typed_data = TypedData::from_json(json).unwrap();
    typed_data.validate().unwrap();

    // Nested struct definitions sort after the primary type
    let type_string = encode_type("RelayRequest", &typed_data.types).unwrap();
    assert_eq!(
        type_string,
        "RelayRequest(address target,bytes encodedFunction,GasData gasData,RelayData relayData)\
         GasData(uint256 gasLimit,uint256 gasPrice,uint256 pctRelayFee,uint256 baseRelayFee)\
         RelayData(address senderAddress,uint256 senderNonce,address relayWorker,address paymaster)"
    );

    let pre_image = get_pre_image(&typed_data).unwrap();
    assert_eq!(
        hex::encode(pre_image.domain_separator),
        "040763193a07703b40d14bc10cb5b69bd5283ccc6151226a9b9bf90af33c284c"
    );
    assert_eq!(
        hex::encode(pre_image.struct_hash),
        "401419776f57f5162dd05a3072f5941868ac4decfa789e501598997c48a43488"
    );

    let digest = hash_typed_data(&typed_data).unwrap();
    assert_eq!(
        hex::encode(digest),
        "b21808615920f4a43f5da837cdba41d2859694b4d197e6d33ab93e7eb1b9f10e"
    );
    assert_eq!(pre_image.final_hash, digest);
}

/// Uniswap-style Permit message
#[test]
fn test_eip712_permit() {
    let json = r#"{
        "types": {
            "EIP712Domain": [
                {"name": "name", "type": "string"},
                {"name": "version", "type": "string"},
                {"name": "chainId", "type": "uint256"},
                {"name": "verifyingContract", "type": "address"}
            ],
            "Permit": [
                {"name": "owner", "type": "address"},
                {"name": "spender", "type": "address"},
                {"name": "value", "type": "uint256"},
                {"name": "nonce", "type": "uint256"},
                {"name": "deadline", "type": "uint256"}
            ]
        },
        "primaryType": "Permit",
        "domain": {
            "name": "Uniswap V2",
            "version": "1",
            "chainId": 1,
            "verifyingContract": "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D"
        },
        "message": {
            "owner": "0x1234567890123456789012345678901234567890",
            "spender": "0x0987654321098765432109876543210987654321",
            "value": "1000000000000000000",
            "nonce": 0,
            "deadline": 1893456000
        }
    }"#;

    let typed_data = TypedData::from_json(json).unwrap();
    typed_data.validate().unwrap();

    let hash = hash_typed_data(&typed_data).unwrap();
    assert_eq!(hash.len(), 32);
}

/// Array types hash the concatenation of their element encodings
#[test]
fn test_eip712_with_arrays() {
    let json = r#"{
        "types": {
            "EIP712Domain": [
                {"name": "name", "type": "string"},
                {"name": "chainId", "type": "uint256"}
            ],
            "Order": [
                {"name": "items", "type": "uint256[]"},
                {"name": "prices", "type": "uint256[]"}
            ]
        },
        "primaryType": "Order",
        "domain": {
            "name": "Test",
            "chainId": 1
        },
        "message": {
            "items": [1, 2, 3],
            "prices": ["100", "200", "300"]
        }
    }"#;

    let typed_data = TypedData::from_json(json).unwrap();
    typed_data.validate().unwrap();

    let hash = hash_typed_data(&typed_data).unwrap();
    assert_eq!(hash.len(), 32);
}

/// Arrays of structs hash each element through hashStruct
#[test]
fn test_eip712_struct_arrays() {
    let json = r#"{
        "types": {
            "EIP712Domain": [
                {"name": "name", "type": "string"},
                {"name": "chainId", "type": "uint256"}
            ],
            "Item": [
                {"name": "id", "type": "uint256"},
                {"name": "name", "type": "string"}
            ],
            "Order": [
                {"name": "items", "type": "Item[]"},
                {"name": "buyer", "type": "address"}
            ]
        },
        "primaryType": "Order",
        "domain": {
            "name": "Marketplace",
            "chainId": 1
        },
        "message": {
            "items": [
                {"id": 1, "name": "Widget"},
                {"id": 2, "name": "Gadget"}
            ],
            "buyer": "0x1234567890123456789012345678901234567890"
        }
    }"#;

    let typed_data = TypedData::from_json(json).unwrap();
    typed_data.validate().unwrap();

    // The array field must equal the hash of the concatenated element
    // struct hashes
    let first = hash_struct(
        "Item",
        &serde_json::json!({"id": 1, "name": "Widget"}),
        &typed_data.types,
    )
    .unwrap();
    let second = hash_struct(
        "Item",
        &serde_json::json!({"id": 2, "name": "Gadget"}),
        &typed_data.types,
    )
    .unwrap();
    let mut concat = first.to_vec();
    concat.extend_from_slice(&second);

    let field = encode_field(
        "Item[]",
        &typed_data.message["items"],
        &typed_data.types,
    )
    .unwrap();
    assert_eq!(field, crate::utils::crypto::keccak256(&concat));

    let hash = hash_typed_data(&typed_data).unwrap();
    assert_eq!(hash.len(), 32);
}

#[test]
fn test_eip712_invalid_primary_type() {
    let json = r#"{
        "types": {
            "EIP712Domain": [
                {"name": "name", "type": "string"}
            ],
            "Person": [
                {"name": "name", "type": "string"}
            ]
        },
        "primaryType": "NonExistent",
        "domain": {"name": "Test"},
        "message": {}
    }"#;

    let typed_data = TypedData::from_json(json).unwrap();
    let result = typed_data.validate();

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        Eip712Error::InvalidPrimaryType(_)
    ));
}

/// chainId as a number and as a decimal string hash identically
#[test]
fn test_numeric_field_forms_agree() {
    let mut typed_data = create_mail_example();
    let digest_number = hash_typed_data(&typed_data).unwrap();

    typed_data.domain["chainId"] = serde_json::json!("1");
    let digest_string = hash_typed_data(&typed_data).unwrap();

    assert_eq!(digest_number, digest_string);
}

/// Absent optional fields contribute nothing to the digest
#[test]
fn test_missing_message_field_is_skipped() {
    let json = r#"{
        "types": {
            "EIP712Domain": [
                {"name": "name", "type": "string"}
            ],
            "Profile": [
                {"name": "handle", "type": "string"},
                {"name": "avatar", "type": "bytes32"}
            ]
        },
        "primaryType": "Profile",
        "domain": {"name": "Test"},
        "message": {"handle": "alice"}
    }"#;
    let typed_data = TypedData::from_json(json).unwrap();

    let encoded = encode_data("Profile", &typed_data.message, &typed_data.types).unwrap();
    assert_eq!(encoded.len(), 32);

    let digest = hash_typed_data(&typed_data).unwrap();
    assert_eq!(digest.len(), 32);
}

#[test]
fn test_pre_image_matches_direct_hash() {
    let typed_data = create_mail_example();
    let pre_image = get_pre_image(&typed_data).unwrap();

    assert_eq!(pre_image.domain_separator.len(), 32);
    assert_eq!(pre_image.struct_hash.len(), 32);
    assert_eq!(pre_image.final_hash, hash_typed_data(&typed_data).unwrap());
}

#[test]
fn test_malformed_values_error() {
    let mut typed_data = create_mail_example();

    // address field holding a non-address string
    typed_data.message["from"]["wallet"] = serde_json::json!("not-an-address");
    assert!(hash_typed_data(&typed_data).is_err());

    let mut typed_data = create_mail_example();
    typed_data.domain["chainId"] = serde_json::json!("12x");
    assert!(hash_typed_data(&typed_data).is_err());
}
