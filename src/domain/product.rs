use super::coins::Coins;
use crate::error::{InputRejection, Result, VendingError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The products the machine can dispense.
///
/// Menu numbering follows the order of [`ProductVariant::ALL`], so a new product
/// only needs a member here plus its price and stock entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductVariant {
    Plain,
    Fizzy,
}

impl ProductVariant {
    pub const ALL: [ProductVariant; 2] = [ProductVariant::Plain, ProductVariant::Fizzy];

    /// Lowercase identifier used in messages, configuration, and the journal.
    pub fn name(&self) -> &'static str {
        match self {
            ProductVariant::Plain => "plain",
            ProductVariant::Fizzy => "fizzy",
        }
    }

    /// Title shown on the menu.
    pub fn label(&self) -> &'static str {
        match self {
            ProductVariant::Plain => "Plain Water",
            ProductVariant::Fizzy => "Fizzy Water",
        }
    }

    /// One-based position on the menu.
    pub fn menu_number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|variant| variant == self)
            .map_or(0, |index| index + 1)
    }

    pub fn from_menu_number(number: i64) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Parses a menu line into a product.
    ///
    /// Surrounding whitespace and a leading sign are accepted, as for any integer.
    /// A well-formed integer too large to represent is still just an unknown option.
    pub fn parse_menu_choice(token: &str) -> std::result::Result<Self, InputRejection> {
        let trimmed = token.trim();
        let unknown = || InputRejection::UnknownOption {
            choice: trimmed.to_string(),
        };
        match trimmed.parse::<i64>() {
            Ok(choice) => Self::from_menu_number(choice).ok_or_else(unknown),
            Err(_) => {
                let digits = trimmed
                    .strip_prefix(|c: char| c == '+' || c == '-')
                    .unwrap_or(trimmed);
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                    Err(unknown())
                } else {
                    Err(InputRejection::NotANumber {
                        token: trimmed.to_string(),
                    })
                }
            }
        }
    }
}

impl fmt::Display for ProductVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Price of every product, fixed when the machine is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    prices: BTreeMap<ProductVariant, Coins>,
}

impl PriceTable {
    /// Builds a table that prices every variant with a positive amount.
    pub fn new(prices: BTreeMap<ProductVariant, Coins>) -> Result<Self> {
        for variant in ProductVariant::ALL {
            match prices.get(&variant) {
                None => {
                    return Err(VendingError::InvalidConfig(format!(
                        "missing price for {variant}"
                    )));
                }
                Some(price) if *price == Coins::ZERO => {
                    return Err(VendingError::InvalidConfig(format!(
                        "price for {variant} must be positive"
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(Self { prices })
    }

    pub fn price(&self, variant: ProductVariant) -> Coins {
        // Construction guarantees an entry for every variant.
        self.prices.get(&variant).copied().unwrap_or_default()
    }
}
