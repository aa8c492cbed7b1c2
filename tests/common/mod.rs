#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use vending_machine::application::collector::CoinCollector;
use vending_machine::application::machine::VendingMachine;
use vending_machine::application::session::Session;
use vending_machine::config::MachineConfig;
use vending_machine::infrastructure::in_memory::ScriptedTokenSource;

/// Joins tokens into the stdin text a customer would type.
pub fn stdin_script(tokens: &[&str]) -> String {
    let mut script = tokens.join("\n");
    script.push('\n');
    script
}

pub fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{json}").unwrap();
    file.flush().unwrap();
    file
}

pub fn scripted_session(config: MachineConfig, tokens: &[&str]) -> Session<Vec<u8>> {
    let setup = config.build().unwrap();
    let collector = CoinCollector::new(setup.denominations.clone());
    Session::new(
        VendingMachine::from_setup(setup),
        collector,
        Box::new(ScriptedTokenSource::new(tokens.iter().copied())),
        Vec::new(),
    )
}
