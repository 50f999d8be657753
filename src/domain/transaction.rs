use super::tokens::Tokens;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named return values decoded from a contract call.
pub type OutputMap = Map<String, Value>;

/// A settled transaction as reported by the network.
///
/// Only `aborted` and `exitCode` are interpreted; every other field the
/// provider sends is kept in `extra` so the record passes through untouched.
/// A `totalFees` value that is not a nano amount stays in `extra` as well.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawTransaction")]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    pub aborted: bool,
    pub exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_fees: Option<Tokens>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    #[serde(default)]
    hash: Option<String>,
    #[serde(default)]
    aborted: bool,
    #[serde(default)]
    exit_code: i32,
    #[serde(default)]
    result_code: Option<i32>,
    #[serde(default)]
    total_fees: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawTransaction> for Transaction {
    fn from(raw: RawTransaction) -> Self {
        let mut extra = raw.extra;
        let total_fees = match raw.total_fees {
            None | Some(Value::Null) => None,
            Some(value) => match Tokens::deserialize(&value) {
                Ok(fees) => Some(fees),
                Err(_) => {
                    extra.insert("totalFees".to_string(), value);
                    None
                }
            },
        };

        Self {
            hash: raw.hash,
            aborted: raw.aborted,
            exit_code: raw.exit_code,
            result_code: raw.result_code,
            total_fees,
            extra,
        }
    }
}

impl Transaction {
    pub fn succeeded() -> Self {
        Self::default()
    }

    pub fn aborted(exit_code: i32) -> Self {
        Self {
            aborted: true,
            exit_code,
            ..Self::default()
        }
    }
}

/// The result of submitting a transaction: the transaction itself plus
/// whatever the called function returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub transaction: Transaction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMap>,
}

impl TransactionResult {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            transaction,
            output: None,
        }
    }

    pub fn with_output(mut self, output: OutputMap) -> Self {
        self.output = Some(output);
        self
    }

    pub fn is_aborted(&self) -> bool {
        self.transaction.aborted
    }
}
