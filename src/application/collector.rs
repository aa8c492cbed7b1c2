use crate::domain::coins::{Coins, DenominationSet};
use crate::domain::ports::TokenSource;
use crate::error::{InputRejection, Result};
use std::io::Write;
use tracing::debug;

/// Keyword that ends coin insertion, matched case-insensitively.
pub const DONE_KEYWORD: &str = "done";

/// What a single token means during coin insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoinToken {
    Done,
    Coin(Coins),
    Rejected(InputRejection),
}

/// Coins gathered in one insertion session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinCollection {
    pub total: Coins,
    pub rejections: Vec<InputRejection>,
}

/// Accumulates inserted coins until the customer types the done keyword.
#[derive(Debug, Clone, Default)]
pub struct CoinCollector {
    denominations: DenominationSet,
}

impl CoinCollector {
    pub fn new(denominations: DenominationSet) -> Self {
        Self { denominations }
    }

    /// Classifies one token. Only plain digit strings naming an accepted
    /// denomination count as coins; surrounding whitespace makes a token invalid.
    pub fn parse_token(&self, token: &str) -> CoinToken {
        let normalized = token.to_lowercase();
        if normalized == DONE_KEYWORD {
            return CoinToken::Done;
        }

        let is_digits = !normalized.is_empty() && normalized.bytes().all(|b| b.is_ascii_digit());
        match normalized.parse::<u32>() {
            Ok(value) if is_digits && self.denominations.accepts(value) => {
                CoinToken::Coin(Coins::new(value))
            }
            _ => CoinToken::Rejected(InputRejection::InvalidCoinDenomination {
                token: token.to_string(),
            }),
        }
    }

    /// Prompts for coins until the done keyword and returns what was inserted.
    ///
    /// Returns `None` if input ends before the done keyword; the partial total is
    /// discarded in that case.
    pub async fn collect<W: Write>(
        &self,
        source: &mut dyn TokenSource,
        out: &mut W,
    ) -> Result<Option<CoinCollection>> {
        writeln!(
            out,
            "\nInsert coins (accepted: {} coins). Type '{DONE_KEYWORD}' to finish inserting coins.",
            self.denominations.list()
        )?;
        let accepted = self.denominations.describe();

        let mut collection = CoinCollection::default();
        loop {
            write!(out, "Insert coin: ")?;
            out.flush()?;

            let Some(token) = source.next_token().await? else {
                debug!(
                    total = collection.total.value(),
                    "input closed during coin insertion"
                );
                return Ok(None);
            };

            match self.parse_token(&token) {
                CoinToken::Done => break,
                CoinToken::Coin(coin) => {
                    collection.total += coin;
                    debug!(
                        coin = coin.value(),
                        total = collection.total.value(),
                        "coin accepted"
                    );
                }
                CoinToken::Rejected(rejection) => {
                    debug!(%rejection, "coin rejected");
                    writeln!(out, "Invalid coin. Please insert {accepted} coins.")?;
                    collection.rejections.push(rejection);
                }
            }
        }

        Ok(Some(collection))
    }
}
