//! Signer Address Resolution
//!
//! Derives bech32 account addresses from the public keys declared in a
//! transaction's auth info. Signatures are not verified.
//!
//! address = bech32(prefix, RIPEMD160(SHA256(compressed_pubkey)))

use bech32::{ToBase32, Variant};
use prost_types::Any;
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ChainConfig;
use crate::proto::cosmos::crypto::multisig::LegacyAminoPubKey;
use crate::proto::cosmos::crypto::secp256k1::PubKey;
use crate::proto::cosmos::tx::v1beta1::AuthInfo;
use crate::proto::TypeUrl;

/// Length of a compressed secp256k1 public key
pub const COMPRESSED_KEY_LEN: usize = 33;

/// Errors that can occur while resolving signer addresses
#[derive(Error, Debug)]
pub enum SignerError {
    #[error("Transaction has {0} signer infos, exactly one is supported")]
    UnsupportedSignerCount(usize),

    #[error("Signer info carries no public key")]
    MissingPublicKey,

    #[error("Public key is {0} bytes, expected 33")]
    InvalidKeyLength(usize),

    #[error("Unrecognized public key type {0}")]
    UnrecognizedKeyType(String),

    #[error("Failed to decode public key {type_url}: {source}")]
    MalformedKey {
        type_url: String,
        #[source]
        source: prost::DecodeError,
    },

    #[error("Failed to encode bech32 address: {0}")]
    Bech32(#[from] bech32::Error),
}

/// Public key declared by a signer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyDescriptor {
    /// Single compressed secp256k1 key
    Secp256k1([u8; COMPRESSED_KEY_LEN]),
    /// M-of-N threshold key over secp256k1 sub-keys
    MultisigThreshold {
        threshold: u32,
        pubkeys: Vec<[u8; COMPRESSED_KEY_LEN]>,
    },
}

/// Addresses derived for the transaction's signer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerResolution {
    /// Threshold of a multisig signer, absent for single keys
    pub multisig_threshold: Option<u32>,
    /// One address per key, in declaration order
    pub addresses: Vec<String>,
}

impl PublicKeyDescriptor {
    /// Convert a packed public key into a descriptor
    ///
    /// # Arguments
    /// * `any` - The `public_key` field of a signer info
    ///
    /// # Returns
    /// The descriptor, or `UnrecognizedKeyType` for anything but secp256k1 and
    /// legacy amino multisig over secp256k1 sub-keys
    pub fn from_any(any: &Any) -> Result<Self, SignerError> {
        match any.type_url.as_str() {
            type_url if type_url == PubKey::TYPE_URL => {
                let key = decode_key::<PubKey>(any)?;
                Ok(PublicKeyDescriptor::Secp256k1(compressed_key(&key.key)?))
            }
            type_url if type_url == LegacyAminoPubKey::TYPE_URL => {
                let multisig = decode_key::<LegacyAminoPubKey>(any)?;
                let pubkeys = multisig
                    .public_keys
                    .iter()
                    .map(|sub_key| match Self::from_any(sub_key)? {
                        PublicKeyDescriptor::Secp256k1(key) => Ok(key),
                        PublicKeyDescriptor::MultisigThreshold { .. } => {
                            Err(SignerError::UnrecognizedKeyType(sub_key.type_url.clone()))
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(PublicKeyDescriptor::MultisigThreshold {
                    threshold: multisig.threshold,
                    pubkeys,
                })
            }
            other => {
                warn!("Unrecognized public key type {}", other);
                Err(SignerError::UnrecognizedKeyType(other.to_string()))
            }
        }
    }

    /// Derive addresses for every key in the descriptor
    pub fn resolve(&self, prefix: &str) -> Result<SignerResolution, SignerError> {
        match self {
            PublicKeyDescriptor::Secp256k1(key) => Ok(SignerResolution {
                multisig_threshold: None,
                addresses: vec![pubkey_to_address(key, prefix)?],
            }),
            PublicKeyDescriptor::MultisigThreshold { threshold, pubkeys } => {
                let addresses = pubkeys
                    .iter()
                    .map(|key| pubkey_to_address(key, prefix))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(SignerResolution {
                    multisig_threshold: Some(*threshold),
                    addresses,
                })
            }
        }
    }
}

/// Resolve the addresses of a transaction's single signer
///
/// # Arguments
/// * `auth_info` - Decoded auth info of the transaction
/// * `config` - Supplies the bech32 account prefix
///
/// # Returns
/// The signer's addresses, or `UnsupportedSignerCount` unless exactly one signer
/// info is present
pub fn resolve_signer(auth_info: &AuthInfo, config: &ChainConfig) -> Result<SignerResolution, SignerError> {
    let signer = match auth_info.signer_infos.as_slice() {
        [signer] => signer,
        infos => return Err(SignerError::UnsupportedSignerCount(infos.len())),
    };
    let public_key = signer.public_key.as_ref().ok_or(SignerError::MissingPublicKey)?;

    let resolution = PublicKeyDescriptor::from_any(public_key)?.resolve(&config.bech32_prefix)?;
    debug!(
        "Resolved signer {:?} (threshold {:?})",
        resolution.addresses, resolution.multisig_threshold
    );
    Ok(resolution)
}

/// Derive the bech32 account address of a compressed secp256k1 public key
///
/// # Arguments
/// * `pubkey` - 33-byte compressed public key
/// * `prefix` - Bech32 human-readable part, e.g. `"akash"`
pub fn pubkey_to_address(pubkey: &[u8], prefix: &str) -> Result<String, SignerError> {
    let key = compressed_key(pubkey)?;
    let hash = Ripemd160::digest(Sha256::digest(key));
    Ok(bech32::encode(prefix, hash.to_base32(), Variant::Bech32)?)
}

fn compressed_key(bytes: &[u8]) -> Result<[u8; COMPRESSED_KEY_LEN], SignerError> {
    bytes
        .try_into()
        .map_err(|_| SignerError::InvalidKeyLength(bytes.len()))
}

fn decode_key<T: prost::Message + Default>(any: &Any) -> Result<T, SignerError> {
    T::decode(any.value.as_slice()).map_err(|source| SignerError::MalformedKey {
        type_url: any.type_url.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::cosmos::tx::v1beta1::SignerInfo;
    use prost::Message as _;

    // Compressed encodings of k*G on secp256k1 for k = 1, 2, 3
    const KEY_1: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const KEY_2: &str = "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5";
    const KEY_3: &str = "02f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9";

    const ADDRESS_1: &str = "akash1w508d6qejxtdg4y5r3zarvary0c5xw7khx6akz";
    const ADDRESS_2: &str = "akash1q6hag67dl53wl99vzg42z8eyzfz2xlkvactm0k";
    const ADDRESS_3: &str = "akash10ht9tyks4vh7p5p904t340cr9nvahy7u2z2jll";

    fn key(hex_key: &str) -> Vec<u8> {
        hex::decode(hex_key).unwrap()
    }

    fn secp256k1_any(bytes: Vec<u8>) -> Any {
        Any {
            type_url: PubKey::TYPE_URL.to_string(),
            value: PubKey { key: bytes }.encode_to_vec(),
        }
    }

    fn multisig_any(threshold: u32, sub_keys: Vec<Any>) -> Any {
        Any {
            type_url: LegacyAminoPubKey::TYPE_URL.to_string(),
            value: LegacyAminoPubKey {
                threshold,
                public_keys: sub_keys,
            }
            .encode_to_vec(),
        }
    }

    fn auth_info(public_keys: Vec<Option<Any>>) -> AuthInfo {
        AuthInfo {
            signer_infos: public_keys
                .into_iter()
                .map(|public_key| SignerInfo {
                    public_key,
                    mode_info: None,
                    sequence: 7,
                })
                .collect(),
            fee: None,
        }
    }

    // ==================== pubkey_to_address tests ====================

    #[test]
    fn test_golden_vectors() {
        for (hex_key, expected) in [(KEY_1, ADDRESS_1), (KEY_2, ADDRESS_2), (KEY_3, ADDRESS_3)] {
            assert_eq!(pubkey_to_address(&key(hex_key), "akash").unwrap(), expected);
        }
    }

    #[test]
    fn test_golden_vector_cosmos_prefix() {
        assert_eq!(
            pubkey_to_address(&key(KEY_1), "cosmos").unwrap(),
            "cosmos1w508d6qejxtdg4y5r3zarvary0c5xw7k6ah60c"
        );
    }

    #[test]
    fn test_address_is_deterministic() {
        let first = pubkey_to_address(&key(KEY_2), "akash").unwrap();
        let second = pubkey_to_address(&key(KEY_2), "akash").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_hash_order_matters() {
        // RIPEMD160 first, then SHA-256 truncated, must not match the canonical address
        let wrong_order = &Sha256::digest(Ripemd160::digest(key(KEY_1)))[..20];
        let wrong = bech32::encode("akash", wrong_order.to_base32(), Variant::Bech32).unwrap();
        assert_ne!(wrong, ADDRESS_1);
    }

    #[test]
    fn test_short_key_rejected() {
        let result = pubkey_to_address(&[0x02; 32], "akash");
        assert!(matches!(result, Err(SignerError::InvalidKeyLength(32))));
    }

    #[test]
    fn test_uncompressed_key_rejected() {
        let result = pubkey_to_address(&[0x04; 65], "akash");
        assert!(matches!(result, Err(SignerError::InvalidKeyLength(65))));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(matches!(pubkey_to_address(&key(KEY_1), ""), Err(SignerError::Bech32(_))));
    }

    // ==================== resolve_signer tests ====================

    #[test]
    fn test_resolve_single_key() {
        let info = auth_info(vec![Some(secp256k1_any(key(KEY_1)))]);
        let resolution = resolve_signer(&info, &ChainConfig::default()).unwrap();
        assert_eq!(resolution.multisig_threshold, None);
        assert_eq!(resolution.addresses, vec![ADDRESS_1.to_string()]);
    }

    #[test]
    fn test_resolve_no_signers() {
        let result = resolve_signer(&auth_info(Vec::new()), &ChainConfig::default());
        assert!(matches!(result, Err(SignerError::UnsupportedSignerCount(0))));
    }

    #[test]
    fn test_resolve_two_signers() {
        let info = auth_info(vec![
            Some(secp256k1_any(key(KEY_1))),
            Some(secp256k1_any(key(KEY_2))),
        ]);
        let result = resolve_signer(&info, &ChainConfig::default());
        assert!(matches!(result, Err(SignerError::UnsupportedSignerCount(2))));
    }

    #[test]
    fn test_resolve_missing_public_key() {
        let result = resolve_signer(&auth_info(vec![None]), &ChainConfig::default());
        assert!(matches!(result, Err(SignerError::MissingPublicKey)));
    }

    #[test]
    fn test_resolve_unrecognized_key_type() {
        let ed25519 = Any {
            type_url: "/cosmos.crypto.ed25519.PubKey".to_string(),
            value: PubKey { key: vec![0x01; 32] }.encode_to_vec(),
        };
        match resolve_signer(&auth_info(vec![Some(ed25519)]), &ChainConfig::default()) {
            Err(SignerError::UnrecognizedKeyType(type_url)) => {
                assert_eq!(type_url, "/cosmos.crypto.ed25519.PubKey")
            }
            other => panic!("expected UnrecognizedKeyType, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_single_key_wrong_length() {
        let info = auth_info(vec![Some(secp256k1_any(vec![0x02; 20]))]);
        let result = resolve_signer(&info, &ChainConfig::default());
        assert!(matches!(result, Err(SignerError::InvalidKeyLength(20))));
    }

    #[test]
    fn test_resolve_malformed_key_bytes() {
        let any = Any {
            type_url: PubKey::TYPE_URL.to_string(),
            value: vec![0x0a, 0x21, 0x02],
        };
        let result = resolve_signer(&auth_info(vec![Some(any)]), &ChainConfig::default());
        assert!(matches!(result, Err(SignerError::MalformedKey { .. })));
    }

    #[test]
    fn test_resolve_uses_configured_prefix() {
        let info = auth_info(vec![Some(secp256k1_any(key(KEY_1)))]);
        let resolution = resolve_signer(&info, &ChainConfig::with_prefix("cosmos")).unwrap();
        assert_eq!(resolution.addresses, vec!["cosmos1w508d6qejxtdg4y5r3zarvary0c5xw7k6ah60c".to_string()]);
    }

    // ==================== multisig tests ====================

    #[test]
    fn test_resolve_multisig_two_of_three() {
        let multisig = multisig_any(
            2,
            vec![
                secp256k1_any(key(KEY_1)),
                secp256k1_any(key(KEY_2)),
                secp256k1_any(key(KEY_3)),
            ],
        );
        let resolution = resolve_signer(&auth_info(vec![Some(multisig)]), &ChainConfig::default()).unwrap();

        assert_eq!(resolution.multisig_threshold, Some(2));
        assert_eq!(
            resolution.addresses,
            vec![ADDRESS_1.to_string(), ADDRESS_2.to_string(), ADDRESS_3.to_string()]
        );
    }

    #[test]
    fn test_multisig_preserves_sub_key_order() {
        let multisig = multisig_any(1, vec![secp256k1_any(key(KEY_3)), secp256k1_any(key(KEY_1))]);
        let resolution = resolve_signer(&auth_info(vec![Some(multisig)]), &ChainConfig::default()).unwrap();
        assert_eq!(resolution.addresses, vec![ADDRESS_3.to_string(), ADDRESS_1.to_string()]);
    }

    #[test]
    fn test_multisig_sub_key_wrong_length() {
        let multisig = multisig_any(1, vec![secp256k1_any(key(KEY_1)), secp256k1_any(vec![0x03; 34])]);
        let result = resolve_signer(&auth_info(vec![Some(multisig)]), &ChainConfig::default());
        assert!(matches!(result, Err(SignerError::InvalidKeyLength(34))));
    }

    #[test]
    fn test_nested_multisig_rejected() {
        let inner = multisig_any(1, vec![secp256k1_any(key(KEY_1))]);
        let outer = multisig_any(1, vec![inner]);
        let result = resolve_signer(&auth_info(vec![Some(outer)]), &ChainConfig::default());
        assert!(matches!(
            result,
            Err(SignerError::UnrecognizedKeyType(ref url)) if url == LegacyAminoPubKey::TYPE_URL
        ));
    }

    #[test]
    fn test_descriptor_from_any() {
        let descriptor = PublicKeyDescriptor::from_any(&secp256k1_any(key(KEY_1))).unwrap();
        let mut expected = [0u8; COMPRESSED_KEY_LEN];
        expected.copy_from_slice(&key(KEY_1));
        assert_eq!(descriptor, PublicKeyDescriptor::Secp256k1(expected));
    }
}
