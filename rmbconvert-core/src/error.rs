use std::convert::Infallible;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RmbError {
    // 编解码错误
    #[error("Invalid token: {0:?}")]
    InvalidToken(String),

    #[error("Invalid amount literal: {0:?}")]
    InvalidAmount(String),

    #[error("Negative amount not supported: {0}")]
    NegativeAmount(String),

    #[error("Unsupported amount {amount}: {reason}")]
    UnsupportedAmount { amount: String, reason: String },

    #[error("Arithmetic overflow while decoding: {0}")]
    Overflow(String),

    // 字符表错误
    #[error("Invalid alphabet tables: {0}")]
    InvalidTables(String),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<Infallible> for RmbError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

pub type RmbResult<T> = Result<T, RmbError>;
