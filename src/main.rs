use clap::Parser;
use frontdesk::application::desk::FrontDesk;
use frontdesk::config::HotelConfig;
use frontdesk::domain::ports::{BillLedgerBox, RoomStoreBox};
use frontdesk::error::DeskError;
use frontdesk::infrastructure::in_memory::{InMemoryBillLedger, InMemoryRoomStore};
use frontdesk::interfaces::csv::bill_writer::BillWriter;
use frontdesk::interfaces::csv::command_reader::{Command, CommandReader, CommandType};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input commands CSV file
    input: PathBuf,

    /// Front desk username
    #[arg(long)]
    username: String,

    /// Front desk password
    #[arg(long)]
    password: String,

    /// Hotel configuration JSON (optional). Defaults to the built-in demo hotel.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => HotelConfig::from_file(&path).into_diagnostic()?,
        None => HotelConfig::default(),
    };

    let rooms: RoomStoreBox = Box::new(InMemoryRoomStore::new(config.catalog.rooms.clone()));
    let ledger: BillLedgerBox = Box::new(InMemoryBillLedger::new());
    let desk = FrontDesk::new(config.catalog, config.credentials, rooms, ledger);

    if !desk.login(&cli.username, &cli.password).await {
        return Err(DeskError::InvalidCredentials).into_diagnostic();
    }

    // Process commands
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command_result in reader.commands() {
        match command_result {
            Ok(command) => {
                if let Err(e) = run_command(&desk, command).await {
                    eprintln!("Error processing command: {e}");
                }
            }
            Err(e) => {
                eprintln!("Error reading command: {e}");
            }
        }
    }

    // Output the final ledger
    let bills = desk.bills().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = BillWriter::new(stdout.lock());
    writer.write_bills(bills).into_diagnostic()?;

    Ok(())
}

async fn run_command(desk: &FrontDesk, command: Command) -> frontdesk::error::Result<()> {
    match command.r#type {
        CommandType::Book => {
            let request = command.into_booking_request()?;
            desk.book(request).await?;
        }
        CommandType::Pay => {
            let bill_id = command
                .bill
                .ok_or_else(|| DeskError::Command("pay requires bill".to_string()))?;
            if !desk.mark_paid(bill_id).await? {
                eprintln!("Bill {bill_id} not paid: unknown id or already paid");
            }
        }
    }
    Ok(())
}
