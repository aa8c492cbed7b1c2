use crate::config::MachineSetup;
use crate::domain::coins::Coins;
use crate::domain::outcome::TransactionOutcome;
use crate::domain::product::{PriceTable, ProductVariant};
use crate::domain::stock::StockLedger;
use tracing::info;

/// The machine itself: owns the price table and the stock ledger for the
/// lifetime of a run and decides each purchase attempt.
///
/// All stock changes go through `&mut self`, so there is exactly one writer.
#[derive(Debug, Clone)]
pub struct VendingMachine {
    prices: PriceTable,
    stock: StockLedger,
}

impl VendingMachine {
    pub fn new(prices: PriceTable, stock: StockLedger) -> Self {
        Self { prices, stock }
    }

    pub fn from_setup(setup: MachineSetup) -> Self {
        Self::new(setup.prices, setup.stock)
    }

    pub fn price(&self, variant: ProductVariant) -> Coins {
        self.prices.price(variant)
    }

    pub fn stock(&self) -> &StockLedger {
        &self.stock
    }

    /// Decides one purchase of `choice` paid with `inserted` coins.
    ///
    /// Stock is checked before payment, so an empty product reports
    /// [`TransactionOutcome::OutOfStock`] whatever was inserted. Only a dispensed
    /// outcome changes the ledger, by exactly one unit.
    pub fn process(&mut self, choice: ProductVariant, inserted: Coins) -> TransactionOutcome {
        let price = self.prices.price(choice);

        let outcome = if !self.stock.is_available(choice) {
            TransactionOutcome::OutOfStock
        } else {
            match inserted.checked_sub(price) {
                None => TransactionOutcome::InsufficientFunds {
                    shortfall: price.checked_sub(inserted).unwrap_or_default(),
                },
                Some(change) => {
                    if self.stock.decrement(choice) {
                        TransactionOutcome::Dispensed { change }
                    } else {
                        TransactionOutcome::OutOfStock
                    }
                }
            }
        };

        info!(
            product = %choice,
            price = price.value(),
            inserted = inserted.value(),
            outcome = ?outcome,
            remaining = self.stock.count(choice),
            "transaction processed"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn machine(plain: u32, fizzy: u32) -> VendingMachine {
        let prices = PriceTable::new(BTreeMap::from([
            (ProductVariant::Plain, Coins::new(30)),
            (ProductVariant::Fizzy, Coins::new(35)),
        ]))
        .unwrap();
        let stock = StockLedger::new(BTreeMap::from([
            (ProductVariant::Plain, plain),
            (ProductVariant::Fizzy, fizzy),
        ]));
        VendingMachine::new(prices, stock)
    }

    #[test]
    fn test_exact_payment_dispenses_with_zero_change() {
        let mut vm = machine(1, 0);
        let outcome = vm.process(ProductVariant::Plain, Coins::new(30));
        assert_eq!(
            outcome,
            TransactionOutcome::Dispensed {
                change: Coins::ZERO
            }
        );
        assert_eq!(vm.stock().count(ProductVariant::Plain), 0);
    }

    #[test]
    fn test_overpayment_refunds_excess() {
        let mut vm = machine(5, 5);
        let outcome = vm.process(ProductVariant::Fizzy, Coins::new(50));
        assert_eq!(
            outcome,
            TransactionOutcome::Dispensed {
                change: Coins::new(15)
            }
        );
        assert_eq!(vm.stock().count(ProductVariant::Fizzy), 4);
    }

    #[test]
    fn test_underpayment_reports_shortfall_and_keeps_stock() {
        let mut vm = machine(5, 5);
        let outcome = vm.process(ProductVariant::Fizzy, Coins::new(20));
        assert_eq!(
            outcome,
            TransactionOutcome::InsufficientFunds {
                shortfall: Coins::new(15)
            }
        );
        assert_eq!(vm.stock().count(ProductVariant::Fizzy), 5);
    }

    #[test]
    fn test_empty_product_is_out_of_stock_regardless_of_payment() {
        let mut vm = machine(0, 3);
        for inserted in [0, 10, 30, 100] {
            assert_eq!(
                vm.process(ProductVariant::Plain, Coins::new(inserted)),
                TransactionOutcome::OutOfStock
            );
        }
        assert_eq!(vm.stock().count(ProductVariant::Plain), 0);
        assert_eq!(vm.stock().count(ProductVariant::Fizzy), 3);
    }

    #[test]
    fn test_selling_out_sequence() {
        let mut vm = machine(1, 0);
        assert_eq!(
            vm.process(ProductVariant::Plain, Coins::new(30)),
            TransactionOutcome::Dispensed {
                change: Coins::ZERO
            }
        );
        assert_eq!(
            vm.process(ProductVariant::Plain, Coins::new(30)),
            TransactionOutcome::OutOfStock
        );
        assert_eq!(
            vm.process(ProductVariant::Fizzy, Coins::new(50)),
            TransactionOutcome::OutOfStock
        );
    }
}
