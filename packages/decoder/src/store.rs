//! Proposal Persistence
//!
//! Seam between the proposal decoder and the persistence layer. A [`ProposalStore`]
//! represents one transactional scope: reading the current maximum id and saving
//! the new proposal with its parameter changes all go through the same instance,
//! and the caller commits or rolls back around [`ingest_submitted_proposal`].

use prost_types::Any;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ChainConfig;
use crate::genesis::{decode_genesis_proposal, raw_proposal_id};
use crate::proposal::{
    decode_submitted_proposal, DecodedProposal, ProposalError, ProposalParameterChange, ProposalRecord,
    SubmissionContext,
};
use crate::proto::cosmos::gov::v1beta1::MsgSubmitProposal;
use crate::registry::{Message, TypeRegistry};

/// Errors reported by a store implementation
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),

    #[error("Proposal {0} already exists")]
    DuplicateProposal(u64),

    #[error("Proposal id space exhausted after {0}")]
    IdExhausted(u64),
}

/// Errors that can occur while ingesting a proposal
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Proposal {proposal_id}: {source}")]
    Decode {
        proposal_id: String,
        #[source]
        source: ProposalError,
    },
}

/// Persistence operations needed to ingest proposals
///
/// Every call on one instance belongs to the same transaction.
#[cfg_attr(test, mockall::automock)]
pub trait ProposalStore {
    /// Highest persisted proposal id, `None` when no proposal exists
    fn max_proposal_id(&mut self) -> Result<Option<u64>, StoreError>;

    fn save_proposal(&mut self, record: &ProposalRecord) -> Result<(), StoreError>;

    fn save_parameter_change(&mut self, change: &ProposalParameterChange) -> Result<(), StoreError>;
}

/// Id for the next live submission: one past the current maximum, or 1
pub fn next_proposal_id<S: ProposalStore + ?Sized>(store: &mut S) -> Result<u64, StoreError> {
    match store.max_proposal_id()? {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(StoreError::IdExhausted(max)),
    }
}

/// Save a proposal followed by its parameter changes
pub fn persist<S: ProposalStore + ?Sized>(store: &mut S, proposal: &DecodedProposal) -> Result<(), StoreError> {
    store.save_proposal(&proposal.record)?;
    for change in &proposal.parameter_changes {
        store.save_parameter_change(change)?;
    }
    Ok(())
}

/// Assign an id to a submitted proposal, decode it and save it
///
/// # Arguments
/// * `store` - The transactional scope to read the max id from and save into
/// * `registry` - Registry used to unpack the proposal content
/// * `config` - Chain denominations
/// * `msg` - The submit-proposal message
/// * `height` - Inclusion height
/// * `message_id` - Id of the message row the proposal belongs to
///
/// # Returns
/// The saved proposal. Nothing is saved when decoding fails.
pub fn ingest_submitted_proposal<S: ProposalStore + ?Sized>(
    store: &mut S,
    registry: &TypeRegistry,
    config: &ChainConfig,
    msg: &MsgSubmitProposal,
    height: u64,
    message_id: Uuid,
) -> Result<DecodedProposal, IngestError> {
    let ctx = SubmissionContext {
        proposal_id: next_proposal_id(store)?,
        height,
        message_id,
    };

    let proposal = decode_submitted_proposal(registry, msg, &ctx, config).map_err(|source| {
        warn!("Rejected proposal {} at height {}: {}", ctx.proposal_id, height, source);
        IngestError::Decode {
            proposal_id: ctx.proposal_id.to_string(),
            source,
        }
    })?;

    persist(store, &proposal)?;
    debug!(
        "Saved proposal {} with {} parameter changes",
        proposal.record.id,
        proposal.parameter_changes.len()
    );
    Ok(proposal)
}

/// Ingest a packed submit-proposal message as found in a transaction body
pub fn ingest_submitted_any<S: ProposalStore + ?Sized>(
    store: &mut S,
    registry: &TypeRegistry,
    config: &ChainConfig,
    any: &Any,
    height: u64,
    message_id: Uuid,
) -> Result<DecodedProposal, IngestError> {
    let msg = match registry.decode_any(any) {
        Ok(Message::SubmitProposal(msg)) => msg,
        Ok(other) => {
            return Err(IngestError::Decode {
                proposal_id: "<unassigned>".to_string(),
                source: ProposalError::UnsupportedProposalType(other.type_url().to_string()),
            })
        }
        Err(e) => {
            return Err(IngestError::Decode {
                proposal_id: "<unassigned>".to_string(),
                source: e.into(),
            })
        }
    };
    ingest_submitted_proposal(store, registry, config, &msg, height, message_id)
}

/// Decode a genesis proposal and save it under its snapshot id
pub fn ingest_genesis_proposal<S: ProposalStore + ?Sized>(
    store: &mut S,
    config: &ChainConfig,
    value: &Value,
) -> Result<DecodedProposal, IngestError> {
    let proposal = decode_genesis_proposal(value, config).map_err(|source| IngestError::Decode {
        proposal_id: raw_proposal_id(value),
        source,
    })?;

    persist(store, &proposal)?;
    debug!("Saved genesis proposal {}", proposal.record.id);
    Ok(proposal)
}
