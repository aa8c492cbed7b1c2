use crate::domain::ports::{JournalEntry, TokenSource, TransactionJournal};
use crate::error::Result;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A token source that replays a fixed script.
///
/// Returns `None` once the script is used up, the same way a closed stdin does.
#[derive(Debug, Default, Clone)]
pub struct ScriptedTokenSource {
    tokens: VecDeque<String>,
}

impl ScriptedTokenSource {
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

#[async_trait]
impl TokenSource for ScriptedTokenSource {
    async fn next_token(&mut self) -> Result<Option<String>> {
        Ok(self.tokens.pop_front())
    }
}

/// Keeps journal entries in memory.
///
/// Clones share the same entries, so a test can hand one clone to a session
/// and read the rows back through another.
#[derive(Debug, Default, Clone)]
pub struct InMemoryJournal {
    entries: Rc<RefCell<Vec<JournalEntry>>>,
}

impl InMemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.borrow().clone()
    }
}

impl TransactionJournal for InMemoryJournal {
    fn record(&mut self, entry: &JournalEntry) -> Result<()> {
        self.entries.borrow_mut().push(entry.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
