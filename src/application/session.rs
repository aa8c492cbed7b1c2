use super::collector::CoinCollector;
use super::machine::VendingMachine;
use crate::domain::coins::Coins;
use crate::domain::join_alternatives;
use crate::domain::outcome::TransactionOutcome;
use crate::domain::ports::{JournalEntry, TokenSourceBox, TransactionJournalBox};
use crate::domain::product::ProductVariant;
use crate::error::{InputRejection, Result};
use std::collections::BTreeMap;
use std::io::Write;
use tracing::{debug, info};

/// Where the customer dialogue currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MenuPrompt,
    AwaitingChoice,
    AwaitingPayment(ProductVariant),
    TransactionComplete,
    AwaitingContinue,
    Terminated,
}

/// Totals for one run of the dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub attempts: u32,
    pub dispensed: u32,
    pub revenue: Coins,
    pub remaining_stock: BTreeMap<ProductVariant, u32>,
}

/// Drives the menu, payment, and continue prompts until the customer leaves
/// or input runs out.
pub struct Session<W: Write> {
    machine: VendingMachine,
    collector: CoinCollector,
    source: TokenSourceBox,
    out: W,
    journal: Option<TransactionJournalBox>,
    state: SessionState,
    summary: SessionSummary,
}

impl<W: Write> Session<W> {
    pub fn new(
        machine: VendingMachine,
        collector: CoinCollector,
        source: TokenSourceBox,
        out: W,
    ) -> Self {
        Self {
            machine,
            collector,
            source,
            out,
            journal: None,
            state: SessionState::MenuPrompt,
            summary: SessionSummary::default(),
        }
    }

    /// Records every purchase attempt to `journal`.
    pub fn with_journal(mut self, journal: TransactionJournalBox) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn machine(&self) -> &VendingMachine {
        &self.machine
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs the dialogue to completion.
    pub async fn run(&mut self) -> Result<SessionSummary> {
        while self.state != SessionState::Terminated {
            let next = self.step().await?;
            debug!(from = ?self.state, to = ?next, "session transition");
            self.state = next;
        }

        writeln!(self.out, "\nThank you for using the Vending Machine!")?;
        self.out.flush()?;
        if let Some(journal) = self.journal.as_mut() {
            journal.flush()?;
        }

        self.summary.remaining_stock = self.machine.stock().snapshot();
        info!(
            attempts = self.summary.attempts,
            dispensed = self.summary.dispensed,
            revenue = self.summary.revenue.value(),
            remaining = ?self.summary.remaining_stock,
            "session ended"
        );
        Ok(self.summary.clone())
    }

    async fn step(&mut self) -> Result<SessionState> {
        match self.state {
            SessionState::MenuPrompt => {
                self.show_menu()?;
                Ok(SessionState::AwaitingChoice)
            }
            SessionState::AwaitingChoice => {
                let Some(token) = self.source.next_token().await? else {
                    return Ok(SessionState::Terminated);
                };
                match ProductVariant::parse_menu_choice(&token) {
                    Ok(variant) => Ok(SessionState::AwaitingPayment(variant)),
                    Err(rejection) => {
                        debug!(%rejection, "menu choice rejected");
                        self.explain_rejected_choice(&rejection)?;
                        Ok(SessionState::MenuPrompt)
                    }
                }
            }
            SessionState::AwaitingPayment(variant) => {
                let Some(collection) = self
                    .collector
                    .collect(self.source.as_mut(), &mut self.out)
                    .await?
                else {
                    return Ok(SessionState::Terminated);
                };
                let outcome = self.machine.process(variant, collection.total);
                writeln!(self.out, "{}", outcome.message(variant))?;
                self.record(variant, collection.total, outcome)?;
                Ok(SessionState::TransactionComplete)
            }
            SessionState::TransactionComplete => {
                write!(self.out, "\nDo you want to make another purchase? (y/n): ")?;
                self.out.flush()?;
                Ok(SessionState::AwaitingContinue)
            }
            SessionState::AwaitingContinue => match self.source.next_token().await? {
                // Only a bare "y" continues; " y" ends the session.
                Some(answer) if answer.eq_ignore_ascii_case("y") => {
                    Ok(SessionState::MenuPrompt)
                }
                _ => Ok(SessionState::Terminated),
            },
            SessionState::Terminated => Ok(SessionState::Terminated),
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\nHi, Welcome!")?;
        writeln!(self.out, "\nItem Menu:")?;
        for variant in ProductVariant::ALL {
            writeln!(
                self.out,
                "{}. {}({})",
                variant.menu_number(),
                variant.label(),
                self.machine.price(variant)
            )?;
        }
        writeln!(
            self.out,
            "Please choose an option ({}):",
            Self::menu_numbers()
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn explain_rejected_choice(&mut self, rejection: &InputRejection) -> Result<()> {
        match rejection {
            InputRejection::UnknownOption { .. } => {
                let options: Vec<String> = ProductVariant::ALL
                    .iter()
                    .map(|variant| format!("{} for {}", variant.menu_number(), variant))
                    .collect();
                writeln!(
                    self.out,
                    "Invalid option. Please choose {} water.",
                    join_alternatives(&options)
                )?;
            }
            _ => {
                writeln!(
                    self.out,
                    "Invalid input. Please choose a valid option ({}).",
                    Self::menu_numbers()
                )?;
            }
        }
        Ok(())
    }

    fn record(
        &mut self,
        variant: ProductVariant,
        inserted: Coins,
        outcome: TransactionOutcome,
    ) -> Result<()> {
        self.summary.attempts += 1;
        if matches!(outcome, TransactionOutcome::Dispensed { .. }) {
            self.summary.dispensed += 1;
            self.summary.revenue += self.machine.price(variant);
        }

        if let Some(journal) = self.journal.as_mut() {
            journal.record(&JournalEntry {
                attempt: self.summary.attempts,
                product: variant,
                inserted,
                outcome: outcome.kind(),
                change: outcome.change(),
                shortfall: outcome.shortfall(),
            })?;
        }
        Ok(())
    }

    fn menu_numbers() -> String {
        let numbers: Vec<String> = ProductVariant::ALL
            .iter()
            .map(|variant| variant.menu_number().to_string())
            .collect();
        join_alternatives(&numbers)
    }
}
