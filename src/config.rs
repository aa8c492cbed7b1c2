use crate::domain::coins::{Coins, DenominationSet};
use crate::domain::product::{PriceTable, ProductVariant};
use crate::domain::stock::StockLedger;
use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Machine setup as read from a JSON file.
///
/// Every field is optional; missing ones take the factory values
/// (plain 30, fizzy 35, five of each, coins 1/2/5/10).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    pub prices: BTreeMap<ProductVariant, u32>,
    pub stock: BTreeMap<ProductVariant, u32>,
    pub denominations: Vec<u32>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            prices: BTreeMap::from([(ProductVariant::Plain, 30), (ProductVariant::Fizzy, 35)]),
            stock: BTreeMap::from([(ProductVariant::Plain, 5), (ProductVariant::Fizzy, 5)]),
            denominations: vec![1, 2, 5, 10],
        }
    }
}

/// The validated pieces a machine is built from.
#[derive(Debug, Clone)]
pub struct MachineSetup {
    pub prices: PriceTable,
    pub stock: StockLedger,
    pub denominations: DenominationSet,
}

impl MachineConfig {
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Checks the configuration and turns it into domain values.
    pub fn build(&self) -> Result<MachineSetup> {
        let prices = PriceTable::new(
            self.prices
                .iter()
                .map(|(variant, price)| (*variant, Coins::new(*price)))
                .collect(),
        )?;
        let denominations = DenominationSet::new(self.denominations.iter().copied())?;
        Ok(MachineSetup {
            prices,
            stock: StockLedger::new(self.stock.clone()),
            denominations,
        })
    }
}
