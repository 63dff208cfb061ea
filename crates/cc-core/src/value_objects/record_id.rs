//! Record identifiers - time-ordered 64-bit ids
//!
//! Layout:
//! - Bits 63-22: milliseconds since [`RecordId::EPOCH`]
//! - Bits 21-12: worker id (0-1023)
//! - Bits 11-0:  per-millisecond sequence (0-4095)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const SEQUENCE_BITS: i64 = 12;
const WORKER_BITS: i64 = 10;
const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;
const WORKER_LIMIT: u16 = 1 << WORKER_BITS;

/// Unique identifier shared by every persisted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RecordId(i64);

impl RecordId {
    /// 2025-01-01 00:00:00 UTC in milliseconds
    pub const EPOCH: i64 = 1_735_689_600_000;

    #[inline]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Assemble an id from its parts
    fn compose(millis_since_epoch: i64, worker_id: u16, sequence: i64) -> Self {
        Self(
            (millis_since_epoch << (WORKER_BITS + SEQUENCE_BITS))
                | (i64::from(worker_id) << SEQUENCE_BITS)
                | (sequence & SEQUENCE_MASK),
        )
    }

    /// Unix timestamp (milliseconds) the id was minted at
    pub fn timestamp_millis(&self) -> i64 {
        (self.0 >> (WORKER_BITS + SEQUENCE_BITS)) + Self::EPOCH
    }

    pub fn worker_id(&self) -> u16 {
        ((self.0 >> SEQUENCE_BITS) & i64::from(WORKER_LIMIT - 1)) as u16
    }
}

/// Error when an id cannot be parsed from text
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid record id")]
pub struct RecordIdParseError;

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .ok()
            .filter(|raw| *raw > 0)
            .map(RecordId)
            .ok_or(RecordIdParseError)
    }
}

impl From<i64> for RecordId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

// Ids exceed 2^53, so JSON carries them as strings
impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) if n > 0 => Ok(RecordId(n)),
            Raw::Number(_) => Err(serde::de::Error::custom("record id must be positive")),
            Raw::Text(s) => s
                .parse()
                .map_err(|_| serde::de::Error::custom("invalid record id string")),
        }
    }
}

/// Lock-free id generator
///
/// The last issued `(millis << 12) | sequence` pair lives in a single atomic,
/// so ids from one generator are strictly increasing even if the wall clock
/// steps backwards or the sequence overflows within a millisecond.
pub struct IdGenerator {
    worker_id: u16,
    state: AtomicI64,
}

impl IdGenerator {
    /// # Panics
    /// Panics if `worker_id` does not fit in 10 bits
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id < WORKER_LIMIT, "worker id must be < 1024");
        Self {
            worker_id,
            state: AtomicI64::new(0),
        }
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }

    /// Mint the next id
    pub fn next_id(&self) -> RecordId {
        let mut current = self.state.load(Ordering::Acquire);
        loop {
            let now = Self::millis_since_epoch();
            let last_millis = current >> SEQUENCE_BITS;

            let next = if now > last_millis {
                now << SEQUENCE_BITS
            } else if current & SEQUENCE_MASK == SEQUENCE_MASK {
                // sequence exhausted: borrow the next millisecond
                (last_millis + 1) << SEQUENCE_BITS
            } else {
                current + 1
            };

            match self
                .state
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => {
                    return RecordId::compose(
                        next >> SEQUENCE_BITS,
                        self.worker_id,
                        next & SEQUENCE_MASK,
                    )
                }
                Err(actual) => current = actual,
            }
        }
    }

    fn millis_since_epoch() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as i64)
            - RecordId::EPOCH
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator")
            .field("worker_id", &self.worker_id)
            .finish_non_exhaustive()
    }
}
