//! Type Registry
//!
//! Resolves `Any` type URLs to decoders for every supported message and proposal
//! content type. The registry is assembled once from two static lists, the Cosmos
//! SDK baseline and the Akash extensions, and is read-only afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use prost_types::Any;
use thiserror::Error;

use crate::proto::akash::{audit, cert, deployment, market, provider};
use crate::proto::cosmos::{bank, distribution, gov, params, slashing, staking, upgrade};
use crate::proto::TypeUrl;

/// Decode function stored per type URL
pub type DecodeFn = fn(&[u8]) -> Result<Message, prost::DecodeError>;

/// Errors that can occur during registry construction or lookup
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("No decoder registered for type URL {0}")]
    UnknownType(String),

    #[error("Type URL {0} is registered more than once")]
    DuplicateTypeUrl(&'static str),

    #[error("Failed to decode {type_url}: {source}")]
    Decode {
        type_url: String,
        #[source]
        source: prost::DecodeError,
    },
}

/// A single registry entry
#[derive(Clone, Copy)]
pub struct TypeEntry {
    /// Type URL the entry answers to
    pub type_url: &'static str,
    /// Decoder producing the matching [`Message`] variant
    pub decode: DecodeFn,
}

impl std::fmt::Debug for TypeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeEntry").field("type_url", &self.type_url).finish()
    }
}

macro_rules! define_messages {
    (
        baseline { $($b_variant:ident($b_ty:ty)),* $(,)? }
        extension { $($e_variant:ident($e_ty:ty)),* $(,)? }
    ) => {
        /// Every message and proposal content type the registry can decode
        #[derive(Debug, Clone, PartialEq)]
        pub enum Message {
            $($b_variant($b_ty),)*
            $($e_variant($e_ty),)*
        }

        impl Message {
            /// Type URL of the wrapped wire type
            pub fn type_url(&self) -> &'static str {
                match self {
                    $(Message::$b_variant(_) => <$b_ty as TypeUrl>::TYPE_URL,)*
                    $(Message::$e_variant(_) => <$e_ty as TypeUrl>::TYPE_URL,)*
                }
            }

            /// Protobuf encoding of the wrapped wire type
            pub fn encode_to_vec(&self) -> Vec<u8> {
                match self {
                    $(Message::$b_variant(msg) => ::prost::Message::encode_to_vec(msg),)*
                    $(Message::$e_variant(msg) => ::prost::Message::encode_to_vec(msg),)*
                }
            }
        }

        /// Cosmos SDK message and proposal content types
        pub static BASELINE_TYPES: &[TypeEntry] = &[
            $(TypeEntry {
                type_url: <$b_ty as TypeUrl>::TYPE_URL,
                decode: |bytes: &[u8]| <$b_ty as ::prost::Message>::decode(bytes).map(Message::$b_variant),
            },)*
        ];

        /// Akash deployment, market, certificate, provider and audit types
        pub static EXTENSION_TYPES: &[TypeEntry] = &[
            $(TypeEntry {
                type_url: <$e_ty as TypeUrl>::TYPE_URL,
                decode: |bytes: &[u8]| <$e_ty as ::prost::Message>::decode(bytes).map(Message::$e_variant),
            },)*
        ];
    };
}

define_messages! {
    baseline {
        Send(bank::v1beta1::MsgSend),
        MultiSend(bank::v1beta1::MsgMultiSend),
        Delegate(staking::v1beta1::MsgDelegate),
        Undelegate(staking::v1beta1::MsgUndelegate),
        BeginRedelegate(staking::v1beta1::MsgBeginRedelegate),
        WithdrawDelegatorReward(distribution::v1beta1::MsgWithdrawDelegatorReward),
        WithdrawValidatorCommission(distribution::v1beta1::MsgWithdrawValidatorCommission),
        SetWithdrawAddress(distribution::v1beta1::MsgSetWithdrawAddress),
        FundCommunityPool(distribution::v1beta1::MsgFundCommunityPool),
        SubmitProposal(gov::v1beta1::MsgSubmitProposal),
        Deposit(gov::v1beta1::MsgDeposit),
        Vote(gov::v1beta1::MsgVote),
        Unjail(slashing::v1beta1::MsgUnjail),
        TextProposal(gov::v1beta1::TextProposal),
        ParameterChangeProposal(params::v1beta1::ParameterChangeProposal),
        SoftwareUpgradeProposal(upgrade::v1beta1::SoftwareUpgradeProposal),
        CommunityPoolSpendProposal(distribution::v1beta1::CommunityPoolSpendProposal),
    }
    extension {
        CreateDeployment(deployment::v1beta3::MsgCreateDeployment),
        DepositDeployment(deployment::v1beta3::MsgDepositDeployment),
        UpdateDeployment(deployment::v1beta3::MsgUpdateDeployment),
        CloseDeployment(deployment::v1beta3::MsgCloseDeployment),
        CreateBid(market::v1beta4::MsgCreateBid),
        CloseBid(market::v1beta4::MsgCloseBid),
        CreateLease(market::v1beta4::MsgCreateLease),
        CloseLease(market::v1beta4::MsgCloseLease),
        WithdrawLease(market::v1beta4::MsgWithdrawLease),
        CreateCertificate(cert::v1beta3::MsgCreateCertificate),
        RevokeCertificate(cert::v1beta3::MsgRevokeCertificate),
        CreateProvider(provider::v1beta3::MsgCreateProvider),
        UpdateProvider(provider::v1beta3::MsgUpdateProvider),
        DeleteProvider(provider::v1beta3::MsgDeleteProvider),
        SignProviderAttributes(audit::v1beta3::MsgSignProviderAttributes),
        DeleteProviderAttributes(audit::v1beta3::MsgDeleteProviderAttributes),
    }
}

impl Message {
    /// Pack the message into an `Any`
    pub fn to_any(&self) -> Any {
        Any {
            type_url: self.type_url().to_string(),
            value: self.encode_to_vec(),
        }
    }
}

/// Immutable map from type URL to decoder
#[derive(Debug)]
pub struct TypeRegistry {
    decoders: HashMap<&'static str, DecodeFn>,
}

impl TypeRegistry {
    /// Build a registry from a baseline list and an extension list
    ///
    /// # Arguments
    /// * `baseline` - Chain-standard entries
    /// * `extensions` - Chain-specific entries, added alongside the baseline
    ///
    /// # Returns
    /// The registry, or `DuplicateTypeUrl` if any type URL appears twice
    pub fn build(baseline: &[TypeEntry], extensions: &[TypeEntry]) -> Result<Self, RegistryError> {
        let mut decoders = HashMap::with_capacity(baseline.len() + extensions.len());
        for entry in baseline.iter().chain(extensions) {
            if decoders.insert(entry.type_url, entry.decode).is_some() {
                return Err(RegistryError::DuplicateTypeUrl(entry.type_url));
            }
        }
        Ok(Self { decoders })
    }

    /// Look up the decoder for a type URL
    pub fn lookup(&self, type_url: &str) -> Option<DecodeFn> {
        self.decoders.get(type_url).copied()
    }

    /// Whether a decoder is registered for the type URL
    pub fn contains(&self, type_url: &str) -> bool {
        self.decoders.contains_key(type_url)
    }

    /// Number of registered type URLs
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Registered type URLs, in no particular order
    pub fn type_urls(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.decoders.keys().copied()
    }

    /// Decode raw bytes as the type named by `type_url`
    ///
    /// # Arguments
    /// * `type_url` - The wire-level type identifier
    /// * `bytes` - Protobuf-encoded message bytes
    ///
    /// # Returns
    /// The decoded [`Message`], `UnknownType` when nothing is registered for the URL,
    /// or `Decode` when the bytes do not parse
    pub fn decode(&self, type_url: &str, bytes: &[u8]) -> Result<Message, RegistryError> {
        let decode = self
            .lookup(type_url)
            .ok_or_else(|| RegistryError::UnknownType(type_url.to_string()))?;
        decode(bytes).map_err(|source| RegistryError::Decode {
            type_url: type_url.to_string(),
            source,
        })
    }

    /// Decode a packed `Any`
    pub fn decode_any(&self, any: &Any) -> Result<Message, RegistryError> {
        self.decode(&any.type_url, &any.value)
    }

    /// Pack a message into an `Any`
    pub fn encode(&self, message: &Message) -> Any {
        message.to_any()
    }
}

static DEFAULT_REGISTRY: LazyLock<TypeRegistry> = LazyLock::new(|| {
    match TypeRegistry::build(BASELINE_TYPES, EXTENSION_TYPES) {
        Ok(registry) => registry,
        Err(e) => panic!("static type lists are inconsistent: {}", e),
    }
});

/// Process-wide registry over [`BASELINE_TYPES`] and [`EXTENSION_TYPES`]
pub fn default_registry() -> &'static TypeRegistry {
    &DEFAULT_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::cosmos::base::v1beta1::Coin;

    fn msg_send() -> bank::v1beta1::MsgSend {
        bank::v1beta1::MsgSend {
            from_address: "akash1w508d6qejxtdg4y5r3zarvary0c5xw7khx6akz".to_string(),
            to_address: "akash1q6hag67dl53wl99vzg42z8eyzfz2xlkvactm0k".to_string(),
            amount: vec![Coin {
                denom: "uakt".to_string(),
                amount: "1000".to_string(),
            }],
        }
    }

    // ==================== build tests ====================

    #[test]
    fn test_static_lists_have_no_duplicates() {
        let registry = TypeRegistry::build(BASELINE_TYPES, EXTENSION_TYPES).unwrap();
        assert_eq!(registry.len(), BASELINE_TYPES.len() + EXTENSION_TYPES.len());
    }

    #[test]
    fn test_build_rejects_duplicate_across_lists() {
        let result = TypeRegistry::build(BASELINE_TYPES, &BASELINE_TYPES[..1]);
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateTypeUrl("/cosmos.bank.v1beta1.MsgSend"))
        ));
    }

    #[test]
    fn test_build_rejects_duplicate_within_list() {
        let entries = [EXTENSION_TYPES[0], EXTENSION_TYPES[0]];
        let result = TypeRegistry::build(&[], &entries);
        assert!(matches!(result, Err(RegistryError::DuplicateTypeUrl(_))));
    }

    #[test]
    fn test_build_empty() {
        let registry = TypeRegistry::build(&[], &[]).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_extension_list_is_akash_only() {
        assert!(EXTENSION_TYPES.iter().all(|e| e.type_url.starts_with("/akash.")));
        assert!(BASELINE_TYPES.iter().all(|e| e.type_url.starts_with("/cosmos.")));
    }

    // ==================== lookup tests ====================

    #[test]
    fn test_lookup_known_type() {
        let registry = default_registry();
        assert!(registry.lookup("/cosmos.gov.v1beta1.TextProposal").is_some());
        assert!(registry.contains("/akash.market.v1beta4.MsgCreateLease"));
    }

    #[test]
    fn test_lookup_unknown_type() {
        let registry = default_registry();
        assert!(registry.lookup("/cosmos.gov.v1.MsgExecLegacyContent").is_none());
    }

    // ==================== decode tests ====================

    #[test]
    fn test_decode_unknown_type_fails() {
        let result = default_registry().decode("/ibc.applications.transfer.v1.MsgTransfer", &[]);
        match result {
            Err(RegistryError::UnknownType(url)) => {
                assert_eq!(url, "/ibc.applications.transfer.v1.MsgTransfer")
            }
            other => panic!("expected UnknownType, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_malformed_bytes_fails() {
        // Field 1, length-delimited, claims 16 bytes but carries 1
        let result = default_registry().decode("/cosmos.bank.v1beta1.MsgSend", &[0x0a, 0x10, 0x61]);
        assert!(matches!(result, Err(RegistryError::Decode { .. })));
    }

    #[test]
    fn test_decode_any_msg_send() {
        let registry = default_registry();
        let any = Message::Send(msg_send()).to_any();
        assert_eq!(any.type_url, "/cosmos.bank.v1beta1.MsgSend");

        let decoded = registry.decode_any(&any).unwrap();
        assert_eq!(decoded, Message::Send(msg_send()));
    }

    #[test]
    fn test_decode_extension_message() {
        let registry = default_registry();
        let close = deployment::v1beta3::MsgCloseDeployment {
            id: Some(deployment::v1beta3::DeploymentId {
                owner: "akash1w508d6qejxtdg4y5r3zarvary0c5xw7khx6akz".to_string(),
                dseq: 12_345_678,
            }),
        };
        let any = registry.encode(&Message::CloseDeployment(close.clone()));

        match registry.decode_any(&any).unwrap() {
            Message::CloseDeployment(decoded) => assert_eq!(decoded, close),
            other => panic!("unexpected variant {:?}", other),
        }
    }

    #[test]
    fn test_every_registered_type_decodes_empty_bytes() {
        // proto3 messages with all defaults encode to zero bytes
        let registry = default_registry();
        for type_url in registry.type_urls() {
            let message = registry.decode(type_url, &[]).unwrap();
            assert_eq!(message.type_url(), type_url);
        }
    }
}
