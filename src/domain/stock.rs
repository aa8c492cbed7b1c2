use super::product::ProductVariant;
use std::collections::BTreeMap;

/// Remaining units per product.
///
/// [`StockLedger::decrement`] is the only mutator and never takes a count below zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockLedger {
    counts: BTreeMap<ProductVariant, u32>,
}

impl StockLedger {
    pub fn new(counts: BTreeMap<ProductVariant, u32>) -> Self {
        Self { counts }
    }

    /// Units left for `variant`. Variants without an entry have none.
    pub fn count(&self, variant: ProductVariant) -> u32 {
        self.counts.get(&variant).copied().unwrap_or(0)
    }

    pub fn is_available(&self, variant: ProductVariant) -> bool {
        self.count(variant) > 0
    }

    /// Removes one unit if any is left. Returns whether a unit was removed.
    pub fn decrement(&mut self, variant: ProductVariant) -> bool {
        match self.counts.get_mut(&variant) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Current count of every catalog variant, including empty ones.
    pub fn snapshot(&self) -> BTreeMap<ProductVariant, u32> {
        ProductVariant::ALL
            .into_iter()
            .map(|variant| (variant, self.count(variant)))
            .collect()
    }
}
