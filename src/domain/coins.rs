use super::join_alternatives;
use crate::error::{Result, VendingError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, AddAssign};

/// A whole number of coin units.
///
/// Change and shortfall are plain integer differences, so there is no notion of
/// which physical coins make up a value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Coins(u32);

impl Coins {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns `self - rhs`, or `None` when `rhs` is larger.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl Add for Coins {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Coins {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} coins", self.0)
    }
}

/// The coin face values the machine accepts, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationSet {
    values: Vec<u32>,
}

impl DenominationSet {
    /// Builds a set from positive face values. Duplicates collapse.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Result<Self> {
        let set: BTreeSet<u32> = values.into_iter().collect();
        if set.is_empty() {
            return Err(VendingError::InvalidConfig(
                "at least one denomination is required".to_string(),
            ));
        }
        if set.contains(&0) {
            return Err(VendingError::InvalidConfig(
                "denominations must be positive".to_string(),
            ));
        }
        Ok(Self {
            values: set.into_iter().collect(),
        })
    }

    pub fn accepts(&self, value: u32) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Face values separated by commas, e.g. `1, 2, 5, 10`.
    pub fn list(&self) -> String {
        let items: Vec<String> = self.values.iter().map(u32::to_string).collect();
        items.join(", ")
    }

    /// Face values as a readable list, e.g. `1, 2, 5, or 10`.
    pub fn describe(&self) -> String {
        let items: Vec<String> = self.values.iter().map(u32::to_string).collect();
        join_alternatives(&items)
    }
}

impl Default for DenominationSet {
    fn default() -> Self {
        Self {
            values: vec![1, 2, 5, 10],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denomination_set_membership() {
        let set = DenominationSet::default();
        for accepted in [1, 2, 5, 10] {
            assert!(set.accepts(accepted));
        }
        assert!(!set.accepts(3));
        assert!(!set.accepts(0));
        assert_eq!(set.list(), "1, 2, 5, 10");
        assert_eq!(set.describe(), "1, 2, 5, or 10");
    }

    #[test]
    fn test_denomination_set_validation() {
        assert!(matches!(
            DenominationSet::new(Vec::<u32>::new()),
            Err(VendingError::InvalidConfig(_))
        ));
        assert!(matches!(
            DenominationSet::new([0, 5]),
            Err(VendingError::InvalidConfig(_))
        ));
        let set = DenominationSet::new([10, 5, 5]).unwrap();
        assert_eq!(set.values(), &[5, 10]);
        assert_eq!(set.describe(), "5 or 10");
    }

    #[test]
    fn test_coins_arithmetic() {
        let mut total = Coins::ZERO;
        total += Coins::new(5);
        total += Coins::new(2);
        assert_eq!(total, Coins::new(7));
        assert_eq!(Coins::new(35).checked_sub(Coins::new(20)), Some(Coins::new(15)));
        assert_eq!(Coins::new(20).checked_sub(Coins::new(35)), None);
    }

    #[test]
    fn test_coins_saturate_instead_of_overflowing() {
        assert_eq!(Coins::new(u32::MAX) + Coins::new(10), Coins::new(u32::MAX));
    }

    #[test]
    fn test_coins_display() {
        assert_eq!(Coins::ZERO.to_string(), "0 coins");
        assert_eq!(Coins::new(30).to_string(), "30 coins");
    }
}
