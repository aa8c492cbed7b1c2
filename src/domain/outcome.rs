use super::coins::Coins;
use super::product::ProductVariant;
use serde::Serialize;

/// Result of one purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOutcome {
    Dispensed { change: Coins },
    InsufficientFunds { shortfall: Coins },
    OutOfStock,
}

/// Outcome tag as written to the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Dispensed,
    InsufficientFunds,
    OutOfStock,
}

impl TransactionOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            TransactionOutcome::Dispensed { .. } => OutcomeKind::Dispensed,
            TransactionOutcome::InsufficientFunds { .. } => OutcomeKind::InsufficientFunds,
            TransactionOutcome::OutOfStock => OutcomeKind::OutOfStock,
        }
    }

    pub fn change(&self) -> Option<Coins> {
        match self {
            TransactionOutcome::Dispensed { change } => Some(*change),
            _ => None,
        }
    }

    pub fn shortfall(&self) -> Option<Coins> {
        match self {
            TransactionOutcome::InsufficientFunds { shortfall } => Some(*shortfall),
            _ => None,
        }
    }

    /// Customer-facing line for this outcome.
    pub fn message(&self, variant: ProductVariant) -> String {
        match self {
            TransactionOutcome::Dispensed { change } => {
                format!("Enjoy your {variant} water! Your change is {change}.")
            }
            TransactionOutcome::InsufficientFunds { shortfall } => {
                format!("Not enough coins. You need {} more coins.", shortfall.value())
            }
            TransactionOutcome::OutOfStock => format!("Sorry, we're out of {variant} water."),
        }
    }
}
