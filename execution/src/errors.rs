use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("unsupported transaction type: {0}")]
    UnsupportedTransactionType(String),
    #[error("missing field `{0}` for declared transaction type")]
    MissingField(&'static str),
    #[error("invalid quantity in `{field}`: {value}")]
    InvalidQuantity { field: &'static str, value: String },
    #[error("invalid bytes in `{field}`: {value}")]
    InvalidBytes { field: &'static str, value: String },
    #[error("invalid address in `{field}`: {value}")]
    InvalidAddress { field: &'static str, value: String },
    #[error("contract creation transactions are not supported")]
    ContractCreation,
}

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("block {block}: transaction {index} could not be encoded: {source}")]
    InvalidTransaction {
        block: String,
        index: usize,
        #[source]
        source: TransactionError,
    },
}
