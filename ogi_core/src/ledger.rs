//! The development ledger - append-only record of an agent's revisions.
//!
//! Each independent agent keeps one [`Ledger`]. Entries are ordered strictly
//! by cycle and are only ever handed out by shared reference, so nothing
//! can rewrite history once an entry is in.
//!
//! # Integrity token
//!
//! Entries carry a CRC-32 of the serialized cycle result. It detects
//! accidental corruption and lets callers check an entry against a result,
//! but it is a checksum, not a signature: anyone can recompute it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ledger errors
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Out-of-order entry: expected cycle {expected}, got {actual}")]
    OutOfOrder { expected: u64, actual: u64 },
    
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Computes the integrity token for a payload: CRC-32 of its JSON form.
pub fn integrity_token<T: Serialize>(payload: &T) -> Result<u32, LedgerError> {
    let json = serde_json::to_vec(payload)?;
    Ok(crc32fast::hash(&json))
}

/// A single immutable ledger record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Cycle the recorded change happened in
    pub cycle: u64,
    
    /// Milliseconds since the Unix epoch when the entry was written
    pub timestamp_ms: u64,
    
    /// Kind of change (e.g. `framework_revision`)
    pub change_type: String,
    
    /// Whether the change passed validation
    pub validation_passed: bool,
    
    /// CRC-32 of the serialized cycle result
    pub integrity_token: u32,
}

impl LedgerEntry {
    /// Builds an entry whose token covers `payload`.
    pub fn for_payload<T: Serialize>(
        cycle: u64,
        timestamp_ms: u64,
        change_type: &str,
        validation_passed: bool,
        payload: &T,
    ) -> Result<Self, LedgerError> {
        Ok(Self {
            cycle,
            timestamp_ms,
            change_type: change_type.to_string(),
            validation_passed,
            integrity_token: integrity_token(payload)?,
        })
    }
    
    /// Returns true if `payload` hashes to this entry's token.
    pub fn matches<T: Serialize>(&self, payload: &T) -> bool {
        integrity_token(payload)
            .map(|token| token == self.integrity_token)
            .unwrap_or(false)
    }
}

/// Append-only sequence of ledger entries.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Appends an entry. Its cycle must equal the current length.
    pub fn append(&mut self, entry: LedgerEntry) -> Result<(), LedgerError> {
        let expected = self.entries.len() as u64;
        if entry.cycle != expected {
            return Err(LedgerError::OutOfOrder {
                expected,
                actual: entry.cycle,
            });
        }
        self.entries.push(entry);
        Ok(())
    }
    
    /// All entries, oldest first.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }
    
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    
    /// Most recent entry, if any.
    pub fn last(&self) -> Option<&LedgerEntry> {
        self.entries.last()
    }
}
