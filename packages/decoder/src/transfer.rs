//! Transfer Event Extraction
//!
//! Recovers token transfers from a transaction's execution log. The log is a JSON
//! array with one entry per message; every `transfer` event lists its attributes as
//! repeating `(recipient, sender, amount)` triples.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::coin::{is_inter_chain, parse_amount, CoinError};
use crate::config::ChainConfig;

/// Event type carrying token movements
pub const TRANSFER_EVENT_TYPE: &str = "transfer";

/// Attributes per transfer record
const ATTRIBUTES_PER_TRANSFER: usize = 3;

/// Errors that can occur during transfer extraction
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Malformed execution log for transaction {hash}: {source}")]
    MalformedLog {
        hash: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Transfer event in transaction {hash} message {message_index} has {attribute_count} attributes, expected a multiple of 3")]
    MalformedTransferEvent {
        hash: String,
        message_index: usize,
        attribute_count: usize,
    },

    #[error("Transfer amount in transaction {hash} message {message_index}: {source}")]
    Amount {
        hash: String,
        message_index: usize,
        #[source]
        source: CoinError,
    },
}

/// Log entry produced by one message
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageLog {
    #[serde(default)]
    pub events: Vec<LogEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Vec<LogAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogAttribute {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// A single token transfer in base units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEvent {
    /// Position of the emitting message within the transaction
    pub message_index: usize,
    pub recipient: String,
    pub sender: String,
    #[serde(rename = "amountUAkt")]
    pub amount_uakt: u64,
}

impl TransferEvent {
    /// Serialize the event to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize an event from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Extract every native-denomination transfer from an execution log
///
/// # Arguments
/// * `raw_log` - The transaction's execution log JSON
/// * `tx_hash` - Hash used to tag errors
/// * `config` - Chain denominations
///
/// # Returns
/// Transfers in log order. Inter-chain denominations are skipped.
pub fn extract_transfers(raw_log: &str, tx_hash: &str, config: &ChainConfig) -> Result<Vec<TransferEvent>, TransferError> {
    let logs: Vec<MessageLog> = serde_json::from_str(raw_log).map_err(|source| TransferError::MalformedLog {
        hash: tx_hash.to_string(),
        source,
    })?;

    let mut transfers = Vec::new();
    for (message_index, log) in logs.iter().enumerate() {
        for event in log.events.iter().filter(|e| e.kind == TRANSFER_EVENT_TYPE) {
            collect_event(event, message_index, tx_hash, config, &mut transfers)?;
        }
    }

    debug!("Extracted {} transfers from transaction {}", transfers.len(), tx_hash);
    Ok(transfers)
}

fn collect_event(
    event: &LogEvent,
    message_index: usize,
    tx_hash: &str,
    config: &ChainConfig,
    out: &mut Vec<TransferEvent>,
) -> Result<(), TransferError> {
    if event.attributes.len() % ATTRIBUTES_PER_TRANSFER != 0 {
        return Err(TransferError::MalformedTransferEvent {
            hash: tx_hash.to_string(),
            message_index,
            attribute_count: event.attributes.len(),
        });
    }

    for triple in event.attributes.chunks_exact(ATTRIBUTES_PER_TRANSFER) {
        let [recipient, sender, amount] = triple else {
            continue;
        };
        if is_inter_chain(&amount.value, config) {
            trace!("Skipping inter-chain transfer of {} in {}", amount.value, tx_hash);
            continue;
        }

        let amount_uakt = parse_amount(&amount.value, config).map_err(|source| TransferError::Amount {
            hash: tx_hash.to_string(),
            message_index,
            source,
        })?;
        out.push(TransferEvent {
            message_index,
            recipient: recipient.value.clone(),
            sender: sender.value.clone(),
            amount_uakt,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HASH: &str = "E626F59001CC38F7318399DC5FF9005411B131BDDECCC605742E230FF81AB544";
    const ALICE: &str = "akash1w508d6qejxtdg4y5r3zarvary0c5xw7khx6akz";
    const BOB: &str = "akash1q6hag67dl53wl99vzg42z8eyzfz2xlkvactm0k";
    const IBC_ATOM: &str = "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2";

    fn transfer_attrs(triples: &[(&str, &str, &str)]) -> serde_json::Value {
        let attrs: Vec<_> = triples
            .iter()
            .flat_map(|(recipient, sender, amount)| {
                vec![
                    json!({"key": "recipient", "value": recipient}),
                    json!({"key": "sender", "value": sender}),
                    json!({"key": "amount", "value": amount}),
                ]
            })
            .collect();
        json!({"type": "transfer", "attributes": attrs})
    }

    fn extract(log: serde_json::Value) -> Result<Vec<TransferEvent>, TransferError> {
        extract_transfers(&log.to_string(), HASH, &ChainConfig::default())
    }

    // ==================== extract_transfers tests ====================

    #[test]
    fn test_single_transfer() {
        let log = json!([{"events": [
            {"type": "message", "attributes": [{"key": "action", "value": "/cosmos.bank.v1beta1.MsgSend"}]},
            transfer_attrs(&[(BOB, ALICE, "5000000uakt")]),
        ]}]);

        let transfers = extract(log).unwrap();
        assert_eq!(
            transfers,
            vec![TransferEvent {
                message_index: 0,
                recipient: BOB.to_string(),
                sender: ALICE.to_string(),
                amount_uakt: 5_000_000,
            }]
        );
    }

    #[test]
    fn test_multiple_triples_in_one_event() {
        let log = json!([{"events": [transfer_attrs(&[
            (BOB, ALICE, "1uakt"),
            (ALICE, BOB, "2akt"),
        ])]}]);

        let transfers = extract(log).unwrap();
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].amount_uakt, 1);
        assert_eq!(transfers[1].recipient, ALICE);
        assert_eq!(transfers[1].amount_uakt, 2_000_000);
    }

    #[test]
    fn test_message_index_follows_log_position() {
        let log = json!([
            {"events": [transfer_attrs(&[(BOB, ALICE, "10uakt")])]},
            {"events": [{"type": "message", "attributes": []}]},
            {"msg_index": 2, "events": [transfer_attrs(&[(ALICE, BOB, "20uakt")])]},
        ]);

        let indexes: Vec<_> = extract(log).unwrap().iter().map(|t| t.message_index).collect();
        assert_eq!(indexes, vec![0, 2]);
    }

    #[test]
    fn test_inter_chain_entries_skipped() {
        let ibc_amount = format!("12{}", IBC_ATOM);
        let log = json!([{"events": [transfer_attrs(&[
            (BOB, ALICE, "3uakt"),
            (BOB, ALICE, ibc_amount.as_str()),
            (ALICE, BOB, "4uakt"),
        ])]}]);

        let amounts: Vec<_> = extract(log).unwrap().iter().map(|t| t.amount_uakt).collect();
        assert_eq!(amounts, vec![3, 4]);
    }

    #[test]
    fn test_attribute_count_not_multiple_of_three() {
        let log = json!([{"events": [{"type": "transfer", "attributes": [
            {"key": "recipient", "value": BOB},
            {"key": "sender", "value": ALICE},
            {"key": "amount", "value": "1uakt"},
            {"key": "recipient", "value": ALICE},
        ]}]}]);

        match extract(log) {
            Err(TransferError::MalformedTransferEvent {
                hash,
                message_index,
                attribute_count,
            }) => {
                assert_eq!(hash, HASH);
                assert_eq!(message_index, 0);
                assert_eq!(attribute_count, 4);
            }
            other => panic!("expected MalformedTransferEvent, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_denom() {
        let log = json!([{"events": [transfer_attrs(&[(BOB, ALICE, "5btc")])]}]);
        assert!(matches!(
            extract(log),
            Err(TransferError::Amount {
                source: CoinError::UnrecognizedDenom(_),
                ..
            })
        ));
    }

    #[test]
    fn test_unparseable_log_carries_hash() {
        let result = extract_transfers("out of gas in location: ReadFlat", HASH, &ChainConfig::default());
        match result {
            Err(TransferError::MalformedLog { hash, .. }) => assert_eq!(hash, HASH),
            other => panic!("expected MalformedLog, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_log() {
        assert!(extract(json!([])).unwrap().is_empty());
        assert!(extract(json!([{"events": []}])).unwrap().is_empty());
    }

    #[test]
    fn test_empty_transfer_event() {
        let log = json!([{"events": [{"type": "transfer", "attributes": []}]}]);
        assert!(extract(log).unwrap().is_empty());
    }

    // ==================== TransferEvent tests ====================

    #[test]
    fn test_transfer_event_json_field_names() {
        let event = TransferEvent {
            message_index: 1,
            recipient: BOB.to_string(),
            sender: ALICE.to_string(),
            amount_uakt: 42,
        };
        let value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert_eq!(value["messageIndex"], 1);
        assert_eq!(value["amountUAkt"], 42);
        assert_eq!(TransferEvent::from_json(&event.to_json().unwrap()).unwrap(), event);
    }
}
