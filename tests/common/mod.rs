use frontdesk::application::desk::FrontDesk;
use frontdesk::config::HotelConfig;
use frontdesk::infrastructure::in_memory::{InMemoryBillLedger, InMemoryRoomStore};
use std::io::Write;
use tempfile::NamedTempFile;

pub const COMMAND_HEADER: &str = "type, room, guest, check_in, check_out, services, bill";

/// A front desk over the built-in demo hotel, already logged in.
pub async fn logged_in_desk() -> FrontDesk {
    let config = HotelConfig::default();
    let desk = FrontDesk::new(
        config.catalog.clone(),
        config.credentials,
        Box::new(InMemoryRoomStore::new(config.catalog.rooms)),
        Box::new(InMemoryBillLedger::new()),
    );
    assert!(desk.login("admin", "admin123").await);
    desk
}

/// Writes a command CSV with the standard header for CLI tests.
pub fn command_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{COMMAND_HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}
