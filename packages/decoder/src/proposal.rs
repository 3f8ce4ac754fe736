//! Proposal Decoder
//!
//! Normalizes governance proposal content into a flat [`ProposalRecord`] plus one
//! [`ProposalParameterChange`] per parameter change. Live submissions and genesis
//! snapshots both end up in [`build_proposal`]; see `genesis.rs` for the latter.

use prost_types::Any;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::coin::{coin_amount, CoinError};
use crate::config::ChainConfig;
use crate::proto::cosmos::base::v1beta1::Coin;
use crate::proto::cosmos::distribution::v1beta1::CommunityPoolSpendProposal;
use crate::proto::cosmos::gov::v1beta1::{MsgSubmitProposal, TextProposal};
use crate::proto::cosmos::params::v1beta1::ParameterChangeProposal;
use crate::proto::cosmos::upgrade::v1beta1::SoftwareUpgradeProposal;
use crate::proto::TypeUrl;
use crate::registry::{Message, RegistryError, TypeRegistry};

/// Errors that can occur during proposal decoding
#[derive(Error, Debug)]
pub enum ProposalError {
    #[error("Proposal carries {0} initial deposit coins, only one is supported")]
    UnsupportedMultiDeposit(usize),

    #[error("Software upgrade proposal has no plan")]
    MissingPlan,

    #[error("Community pool spend carries {0} coins, only one is supported")]
    UnsupportedMultiAmount(usize),

    #[error("Unsupported proposal type {0}")]
    UnsupportedProposalType(String),

    #[error("Submit proposal message has no content")]
    MissingContent,

    #[error("Invalid amount: {0}")]
    Coin(#[from] CoinError),

    #[error("Failed to decode proposal content: {0}")]
    Registry(#[from] RegistryError),

    #[error("Invalid genesis proposal: {0}")]
    InvalidGenesis(#[from] serde_json::Error),

    #[error("Genesis proposal {proposal_id}: {source}")]
    GenesisEntry {
        proposal_id: String,
        #[source]
        source: Box<ProposalError>,
    },
}

/// The four supported proposal content variants
#[derive(Debug, Clone, PartialEq)]
pub enum ProposalContent {
    ParameterChange(ParameterChangeProposal),
    SoftwareUpgrade(SoftwareUpgradeProposal),
    Text(TextProposal),
    CommunityPoolSpend(CommunityPoolSpendProposal),
}

impl ProposalContent {
    /// Narrow a registry message to a proposal content variant
    ///
    /// # Returns
    /// The content, or `UnsupportedProposalType` for any other message
    pub fn from_message(message: Message) -> Result<Self, ProposalError> {
        match message {
            Message::ParameterChangeProposal(content) => Ok(ProposalContent::ParameterChange(content)),
            Message::SoftwareUpgradeProposal(content) => Ok(ProposalContent::SoftwareUpgrade(content)),
            Message::TextProposal(content) => Ok(ProposalContent::Text(content)),
            Message::CommunityPoolSpendProposal(content) => Ok(ProposalContent::CommunityPoolSpend(content)),
            other => Err(ProposalError::UnsupportedProposalType(other.type_url().to_string())),
        }
    }

    /// Decode packed proposal content through the registry
    ///
    /// # Arguments
    /// * `registry` - Registry holding the proposal content decoders
    /// * `any` - The `content` field of a submit-proposal message
    ///
    /// # Returns
    /// The content, or `UnsupportedProposalType` with the raw type URL when the
    /// registry does not know it
    pub fn from_any(registry: &TypeRegistry, any: &Any) -> Result<Self, ProposalError> {
        match registry.decode_any(any) {
            Ok(message) => Self::from_message(message),
            Err(RegistryError::UnknownType(type_url)) => Err(ProposalError::UnsupportedProposalType(type_url)),
            Err(e) => Err(e.into()),
        }
    }

    /// Type URL of the content, stored as the record's `type`
    pub fn type_url(&self) -> &'static str {
        match self {
            ProposalContent::ParameterChange(_) => ParameterChangeProposal::TYPE_URL,
            ProposalContent::SoftwareUpgrade(_) => SoftwareUpgradeProposal::TYPE_URL,
            ProposalContent::Text(_) => TextProposal::TYPE_URL,
            ProposalContent::CommunityPoolSpend(_) => CommunityPoolSpendProposal::TYPE_URL,
        }
    }
}

/// Normalized governance proposal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRecord {
    pub id: u64,
    /// Message that submitted the proposal, absent for genesis proposals
    pub message_id: Option<Uuid>,
    pub proposer: Option<String>,
    /// Content type URL, e.g. `/cosmos.gov.v1beta1.TextProposal`
    #[serde(rename = "type")]
    pub proposal_type: String,
    pub submitted_height: Option<u64>,
    #[serde(rename = "initialDepositUAkt")]
    pub initial_deposit_uakt: Option<u64>,
    pub title: String,
    pub description: String,
    pub software_upgrade_name: Option<String>,
    pub software_upgrade_height: Option<i64>,
    pub software_upgrade_info: Option<String>,
    pub recipient: Option<String>,
    #[serde(rename = "amountUAkt")]
    pub amount_uakt: Option<u64>,
}

impl ProposalRecord {
    /// Serialize the record to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a record from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One entry of a parameter-change proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalParameterChange {
    pub id: Uuid,
    pub proposal_id: u64,
    pub subspace: String,
    pub key: String,
    pub value: String,
}

/// A proposal and its parameter changes, persisted together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedProposal {
    pub record: ProposalRecord,
    pub parameter_changes: Vec<ProposalParameterChange>,
}

/// Inclusion details of a live submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionContext {
    /// Id assigned to the new proposal
    pub proposal_id: u64,
    /// Block height the submission was included at
    pub height: u64,
    /// Id of the message row the proposal belongs to
    pub message_id: Uuid,
}

/// Decode a submit-proposal message into a proposal record
///
/// # Arguments
/// * `registry` - Registry used to unpack the proposal content
/// * `msg` - The submit-proposal message
/// * `ctx` - Assigned proposal id, height and message id
/// * `config` - Chain denominations
///
/// # Returns
/// The proposal and its parameter changes
pub fn decode_submitted_proposal(
    registry: &TypeRegistry,
    msg: &MsgSubmitProposal,
    ctx: &SubmissionContext,
    config: &ChainConfig,
) -> Result<DecodedProposal, ProposalError> {
    let initial_deposit_uakt = single_coin(&msg.initial_deposit, config, ProposalError::UnsupportedMultiDeposit)?;
    let content = msg.content.as_ref().ok_or(ProposalError::MissingContent)?;
    let content = ProposalContent::from_any(registry, content).inspect_err(|e| {
        if let ProposalError::UnsupportedProposalType(type_url) = e {
            warn!("Proposal {} has unsupported type {}", ctx.proposal_id, type_url);
        }
    })?;

    let mut proposal = build_proposal(ctx.proposal_id, content, config)?;
    proposal.record.message_id = Some(ctx.message_id);
    proposal.record.proposer = Some(msg.proposer.clone());
    proposal.record.submitted_height = Some(ctx.height);
    proposal.record.initial_deposit_uakt = initial_deposit_uakt;

    debug!(
        "Decoded proposal {} ({}) at height {}",
        ctx.proposal_id, proposal.record.proposal_type, ctx.height
    );
    Ok(proposal)
}

/// Normalize proposal content into a record and its parameter changes
///
/// Submission and genesis specific fields are left empty for the caller.
pub fn build_proposal(proposal_id: u64, content: ProposalContent, config: &ChainConfig) -> Result<DecodedProposal, ProposalError> {
    let mut record = ProposalRecord {
        id: proposal_id,
        proposal_type: content.type_url().to_string(),
        ..Default::default()
    };
    let mut parameter_changes = Vec::new();

    match content {
        ProposalContent::ParameterChange(proposal) => {
            record.title = proposal.title;
            record.description = proposal.description;
            parameter_changes = proposal
                .changes
                .into_iter()
                .map(|change| ProposalParameterChange {
                    id: Uuid::new_v4(),
                    proposal_id,
                    subspace: change.subspace,
                    key: change.key,
                    value: change.value,
                })
                .collect();
        }
        ProposalContent::SoftwareUpgrade(proposal) => {
            let plan = proposal.plan.ok_or(ProposalError::MissingPlan)?;
            record.title = proposal.title;
            record.description = proposal.description;
            record.software_upgrade_name = Some(plan.name);
            record.software_upgrade_height = Some(plan.height);
            record.software_upgrade_info = Some(plan.info);
        }
        ProposalContent::Text(proposal) => {
            record.title = proposal.title;
            record.description = proposal.description;
        }
        ProposalContent::CommunityPoolSpend(proposal) => {
            record.amount_uakt = single_coin(&proposal.amount, config, ProposalError::UnsupportedMultiAmount)?;
            record.title = proposal.title;
            record.description = proposal.description;
            record.recipient = Some(proposal.recipient);
        }
    }

    Ok(DecodedProposal {
        record,
        parameter_changes,
    })
}

/// Convert a list of at most one coin
fn single_coin(
    coins: &[Coin],
    config: &ChainConfig,
    too_many: fn(usize) -> ProposalError,
) -> Result<Option<u64>, ProposalError> {
    match coins {
        [] => Ok(None),
        [coin] => Ok(Some(coin_amount(coin, config)?)),
        _ => Err(too_many(coins.len())),
    }
}
