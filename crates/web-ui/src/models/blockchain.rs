//! Read-only ledger models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /blockchain/stats`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BlockchainStats {
    pub total_blocks: u64,
    pub total_reservations: u64,
    pub blockchain_type: String,
    pub status: String,
    #[serde(default)]
    pub last_block_time: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Block {
    pub index: u64,
    pub timestamp: String,
    #[serde(default)]
    pub data: serde_json::Value,
    pub previous_hash: String,
    pub hash: String,
    #[serde(default)]
    pub nonce: u64,
}

/// `GET /blockchain/blocks`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct BlocksResponse {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Block {
    /// First and last characters of the hash, for table cells
    pub fn short_hash(&self) -> String {
        shorten_hash(&self.hash)
    }

    pub fn display_time(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

pub fn shorten_hash(hash: &str) -> String {
    if hash.len() <= 16 || !hash.is_ascii() {
        return hash.to_string();
    }
    format!("{}...{}", &hash[..8], &hash[hash.len() - 8..])
}

/// RFC 3339 timestamps become `YYYY-MM-DD HH:MM:SS UTC`; anything else is shown raw
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
