//! Application layer: the purchase decision and the customer dialogue around it.
//!
//! `VendingMachine` owns prices and stock and decides each attempt,
//! `CoinCollector` gathers payment, and `Session` runs the menu loop on a single
//! task, suspending only while it waits for the next line of input.

pub mod collector;
pub mod machine;
pub mod session;
