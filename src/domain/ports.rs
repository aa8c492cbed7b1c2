use super::coins::Coins;
use super::outcome::OutcomeKind;
use super::product::ProductVariant;
use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Source of customer input, one line per token.
#[async_trait]
pub trait TokenSource: Send {
    /// Next line without its terminator, or `None` once input is exhausted.
    async fn next_token(&mut self) -> Result<Option<String>>;
}

pub type TokenSourceBox = Box<dyn TokenSource>;

/// One journal row per purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub attempt: u32,
    pub product: ProductVariant,
    pub inserted: Coins,
    pub outcome: OutcomeKind,
    pub change: Option<Coins>,
    pub shortfall: Option<Coins>,
}

pub trait TransactionJournal {
    fn record(&mut self, entry: &JournalEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

pub type TransactionJournalBox = Box<dyn TransactionJournal>;
