//! Genesis Proposals
//!
//! Decodes the `gov.proposals` entries of a genesis export. Content arrives as JSON
//! tagged with `@type`; it is mapped onto the wire types and normalized exactly like
//! a live submission, keeping the snapshot's proposal id.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ChainConfig;
use crate::proposal::{build_proposal, DecodedProposal, ProposalContent, ProposalError};
use crate::proto::cosmos::base::v1beta1::Coin;
use crate::proto::cosmos::distribution::v1beta1::CommunityPoolSpendProposal;
use crate::proto::cosmos::gov::v1beta1::TextProposal;
use crate::proto::cosmos::params::v1beta1::{ParamChange, ParameterChangeProposal};
use crate::proto::cosmos::upgrade::v1beta1::{Plan, SoftwareUpgradeProposal};
use crate::proto::TypeUrl;

/// A proposal as exported in genesis
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenesisProposal {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub proposal_id: u64,
    pub content: GenesisContent,
}

/// Proposal content with its `@type` tag split off
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenesisContent {
    #[serde(rename = "@type")]
    pub type_url: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct GenesisCoin {
    denom: String,
    amount: String,
}

#[derive(Debug, Deserialize)]
struct GenesisParamChange {
    subspace: String,
    key: String,
    value: String,
}

#[derive(Debug, Deserialize)]
struct GenesisPlan {
    name: String,
    #[serde(default, deserialize_with = "i64_from_string_or_number")]
    height: i64,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct GenesisParameterChange {
    title: String,
    description: String,
    #[serde(default)]
    changes: Vec<GenesisParamChange>,
}

#[derive(Debug, Deserialize)]
struct GenesisSoftwareUpgrade {
    title: String,
    description: String,
    #[serde(default)]
    plan: Option<GenesisPlan>,
}

#[derive(Debug, Deserialize)]
struct GenesisText {
    title: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct GenesisCommunityPoolSpend {
    title: String,
    description: String,
    recipient: String,
    #[serde(default)]
    amount: Vec<GenesisCoin>,
}

impl GenesisContent {
    /// Map the JSON content onto its wire type
    ///
    /// # Returns
    /// The content, or `UnsupportedProposalType` carrying the `@type` value
    pub fn into_content(self) -> Result<ProposalContent, ProposalError> {
        let fields = Value::Object(self.fields);
        let content = match self.type_url.as_str() {
            url if url == ParameterChangeProposal::TYPE_URL => {
                let p: GenesisParameterChange = serde_json::from_value(fields)?;
                ProposalContent::ParameterChange(ParameterChangeProposal {
                    title: p.title,
                    description: p.description,
                    changes: p
                        .changes
                        .into_iter()
                        .map(|c| ParamChange {
                            subspace: c.subspace,
                            key: c.key,
                            value: c.value,
                        })
                        .collect(),
                })
            }
            url if url == SoftwareUpgradeProposal::TYPE_URL => {
                let p: GenesisSoftwareUpgrade = serde_json::from_value(fields)?;
                ProposalContent::SoftwareUpgrade(SoftwareUpgradeProposal {
                    title: p.title,
                    description: p.description,
                    plan: p.plan.map(|plan| Plan {
                        name: plan.name,
                        time: None,
                        height: plan.height,
                        info: plan.info,
                    }),
                })
            }
            url if url == TextProposal::TYPE_URL => {
                let p: GenesisText = serde_json::from_value(fields)?;
                ProposalContent::Text(TextProposal {
                    title: p.title,
                    description: p.description,
                })
            }
            url if url == CommunityPoolSpendProposal::TYPE_URL => {
                let p: GenesisCommunityPoolSpend = serde_json::from_value(fields)?;
                ProposalContent::CommunityPoolSpend(CommunityPoolSpendProposal {
                    title: p.title,
                    description: p.description,
                    recipient: p.recipient,
                    amount: p
                        .amount
                        .into_iter()
                        .map(|c| Coin {
                            denom: c.denom,
                            amount: c.amount,
                        })
                        .collect(),
                })
            }
            other => return Err(ProposalError::UnsupportedProposalType(other.to_string())),
        };
        Ok(content)
    }
}

/// Decode a single genesis proposal
///
/// # Arguments
/// * `value` - One entry of the genesis `gov.proposals` array
/// * `config` - Chain denominations
///
/// # Returns
/// The proposal with its snapshot id and no submission details
pub fn decode_genesis_proposal(value: &Value, config: &ChainConfig) -> Result<DecodedProposal, ProposalError> {
    let proposal = GenesisProposal::deserialize(value)?;
    let proposal_id = proposal.proposal_id;
    let content = proposal.content.into_content().inspect_err(|e| {
        if let ProposalError::UnsupportedProposalType(type_url) = e {
            warn!("Genesis proposal {} has unsupported type {}", proposal_id, type_url);
        }
    })?;

    let decoded = build_proposal(proposal_id, content, config)?;
    debug!("Decoded genesis proposal {} ({})", proposal_id, decoded.record.proposal_type);
    Ok(decoded)
}

/// Decode every proposal of a genesis `gov.proposals` array
///
/// # Returns
/// The proposals in snapshot order, or the first failure tagged with its proposal id
pub fn decode_genesis_proposals(proposals: &[Value], config: &ChainConfig) -> Result<Vec<DecodedProposal>, ProposalError> {
    proposals
        .iter()
        .map(|value| {
            decode_genesis_proposal(value, config).map_err(|source| ProposalError::GenesisEntry {
                proposal_id: raw_proposal_id(value),
                source: Box::new(source),
            })
        })
        .collect()
}

pub(crate) fn raw_proposal_id(value: &Value) -> String {
    match value.get("proposal_id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => "<missing>".to_string(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(i64),
}

fn i64_from_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Number(n) => Ok(n),
        StringOrNumber::String(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

fn u64_from_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = i64_from_string_or_number(deserializer)?;
    u64::try_from(value).map_err(serde::de::Error::custom)
}
