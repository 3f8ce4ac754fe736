//! Transaction Decoder
//!
//! Decodes the signed transaction envelope (`TxRaw`) stored on chain into its body,
//! auth info and signatures. Body messages stay packed as `Any` until
//! [`DecodedTransaction::decode_messages`] runs them through the type registry.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use prost::Message as _;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

use crate::coin::{coin_amount, CoinError};
use crate::config::ChainConfig;
use crate::proto::cosmos::tx::v1beta1::{AuthInfo, TxBody, TxRaw};
use crate::registry::{Message, RegistryError, TypeRegistry};

/// Section of the envelope that failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopePart {
    /// The outer `TxRaw`
    Raw,
    /// `body_bytes`
    Body,
    /// `auth_info_bytes`
    AuthInfo,
}

impl fmt::Display for EnvelopePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EnvelopePart::Raw => "envelope",
            EnvelopePart::Body => "body",
            EnvelopePart::AuthInfo => "auth info",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during transaction decoding
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Empty transaction bytes")]
    EmptyInput,

    #[error("Invalid base64 transaction: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Malformed {part} in transaction {hash}: {source}")]
    MalformedEnvelope {
        hash: String,
        part: EnvelopePart,
        #[source]
        source: prost::DecodeError,
    },

    #[error("Transaction {hash} message {index}: {source}")]
    Message {
        hash: String,
        index: usize,
        #[source]
        source: RegistryError,
    },

    #[error("Transaction {hash} fee: {source}")]
    Fee {
        hash: String,
        #[source]
        source: CoinError,
    },

    #[error("Transaction {hash} pays its fee in {count} coins, only one is supported")]
    UnsupportedMultiFee { hash: String, count: usize },
}

/// Decoded transaction envelope
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTransaction {
    /// Uppercase hex SHA-256 of the raw envelope, as shown by block explorers
    pub hash: String,
    /// Messages, memo and timeout height
    pub body: TxBody,
    /// Signer infos and fee
    pub auth_info: AuthInfo,
    /// Raw signatures, one per signer info
    pub signatures: Vec<Vec<u8>>,
}

impl DecodedTransaction {
    /// Transaction memo
    pub fn memo(&self) -> &str {
        &self.body.memo
    }

    /// Gas limit declared in the fee, zero when no fee is present
    pub fn gas_limit(&self) -> u64 {
        self.auth_info.fee.as_ref().map_or(0, |fee| fee.gas_limit)
    }

    /// Number of body messages
    pub fn message_count(&self) -> usize {
        self.body.messages.len()
    }

    /// Type URLs of the body messages, in order
    pub fn message_type_urls(&self) -> impl Iterator<Item = &str> {
        self.body.messages.iter().map(|any| any.type_url.as_str())
    }

    /// Fee paid in base units
    ///
    /// # Returns
    /// `None` when the fee carries no coins, the amount when it carries exactly one,
    /// `UnsupportedMultiFee` otherwise
    pub fn fee_uakt(&self, config: &ChainConfig) -> Result<Option<u64>, DecodeError> {
        let coins = match &self.auth_info.fee {
            Some(fee) => &fee.amount,
            None => return Ok(None),
        };
        match coins.as_slice() {
            [] => Ok(None),
            [coin] => coin_amount(coin, config).map(Some).map_err(|source| DecodeError::Fee {
                hash: self.hash.clone(),
                source,
            }),
            _ => Err(DecodeError::UnsupportedMultiFee {
                hash: self.hash.clone(),
                count: coins.len(),
            }),
        }
    }

    /// Decode every body message through the registry, preserving order
    pub fn decode_messages(&self, registry: &TypeRegistry) -> Result<Vec<Message>, DecodeError> {
        self.body
            .messages
            .iter()
            .enumerate()
            .map(|(index, any)| {
                registry.decode_any(any).map_err(|source| DecodeError::Message {
                    hash: self.hash.clone(),
                    index,
                    source,
                })
            })
            .collect()
    }
}

/// Compute the chain transaction hash of raw envelope bytes
pub fn tx_hash(raw: &[u8]) -> String {
    hex::encode_upper(Sha256::digest(raw))
}

/// Decode a transaction from raw envelope bytes
///
/// # Arguments
/// * `raw` - The `TxRaw` protobuf bytes as stored in the block
///
/// # Returns
/// A `DecodedTransaction` with body and auth info decoded; messages remain packed
pub fn decode_transaction(raw: &[u8]) -> Result<DecodedTransaction, DecodeError> {
    if raw.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let hash = tx_hash(raw);
    let malformed = |part: EnvelopePart| {
        let hash = hash.clone();
        move |source: prost::DecodeError| DecodeError::MalformedEnvelope { hash, part, source }
    };

    let envelope = TxRaw::decode(raw).map_err(malformed(EnvelopePart::Raw))?;
    let body = TxBody::decode(envelope.body_bytes.as_slice()).map_err(malformed(EnvelopePart::Body))?;
    let auth_info =
        AuthInfo::decode(envelope.auth_info_bytes.as_slice()).map_err(malformed(EnvelopePart::AuthInfo))?;

    debug!(
        "Decoded transaction {} ({} messages, {} signer infos)",
        hash,
        body.messages.len(),
        auth_info.signer_infos.len()
    );

    Ok(DecodedTransaction {
        hash,
        body,
        auth_info,
        signatures: envelope.signatures,
    })
}

/// Decode a base64-encoded transaction, as returned by RPC and block endpoints
pub fn decode_transaction_base64(encoded: &str) -> Result<DecodedTransaction, DecodeError> {
    let raw = BASE64.decode(encoded.trim())?;
    decode_transaction(&raw)
}
