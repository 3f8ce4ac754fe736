//! AktScope Decoder Library
//!
//! This crate decodes Akash Network transactions and governance proposals into
//! typed records: transaction envelopes, signer addresses, transfer events and
//! normalized proposals ready for persistence.

pub mod coin;
pub mod config;
pub mod decoder;
pub mod genesis;
pub mod proposal;
pub mod proto;
pub mod registry;
pub mod signer;
pub mod store;
pub mod transfer;

// Re-export commonly used types
pub use config::ChainConfig;
pub use decoder::{decode_transaction, decode_transaction_base64, DecodedTransaction};
pub use genesis::{decode_genesis_proposal, decode_genesis_proposals};
pub use proposal::{decode_submitted_proposal, DecodedProposal, ProposalParameterChange, ProposalRecord};
pub use registry::{default_registry, Message, TypeRegistry};
pub use signer::{pubkey_to_address, resolve_signer, SignerResolution};
pub use store::{ingest_genesis_proposal, ingest_submitted_proposal, ProposalStore};
pub use transfer::{extract_transfers, TransferEvent};
