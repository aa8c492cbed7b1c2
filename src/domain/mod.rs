//! Domain model of the machine: products, prices, stock, and purchase outcomes,
//! plus the ports through which input arrives and attempts are journaled.

pub mod coins;
pub mod outcome;
pub mod ports;
pub mod product;
pub mod stock;

/// Joins choices the way a sentence lists them: `a`, `a or b`, `a, b, or c`.
pub fn join_alternatives(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
    }
}
