use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use vending_machine::application::collector::CoinCollector;
use vending_machine::application::machine::VendingMachine;
use vending_machine::application::session::Session;
use vending_machine::config::MachineConfig;
use vending_machine::domain::ports::{TokenSourceBox, TransactionJournalBox};
use vending_machine::infrastructure::line_reader::LineTokenSource;
use vending_machine::interfaces::csv::journal_writer::JournalWriter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with prices, initial stock, and accepted coins
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every purchase attempt to this CSV file
    #[arg(long)]
    journal: Option<PathBuf>,
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => MachineConfig::load(path).into_diagnostic()?,
        None => MachineConfig::default(),
    };
    let setup = config.build().into_diagnostic()?;

    let collector = CoinCollector::new(setup.denominations.clone());
    let machine = VendingMachine::from_setup(setup);
    let source: TokenSourceBox = Box::new(LineTokenSource::stdin());

    let mut session = Session::new(machine, collector, source, io::stdout());
    if let Some(path) = cli.journal {
        let journal: TransactionJournalBox =
            Box::new(JournalWriter::create(path).into_diagnostic()?);
        session = session.with_journal(journal);
    }

    session.run().await.into_diagnostic()?;

    Ok(())
}
