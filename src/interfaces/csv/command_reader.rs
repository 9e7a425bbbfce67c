use crate::domain::bill::BookingRequest;
use crate::error::{DeskError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Book,
    Pay,
}

/// One front-desk command as it appears on the wire. `book` fills the
/// room/guest/date columns; `pay` only the bill column.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub r#type: CommandType,
    pub room: Option<String>,
    pub guest: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    /// Semicolon-separated service ids, e.g. "1;3".
    pub services: Option<String>,
    pub bill: Option<u64>,
}

impl Command {
    /// Turns a `book` command into a booking request, rejecting rows with
    /// missing columns before they reach the front desk.
    pub fn into_booking_request(self) -> Result<BookingRequest> {
        let missing = |field: &str| DeskError::Command(format!("book requires {field}"));
        Ok(BookingRequest {
            room_number: self.room.ok_or_else(|| missing("room"))?,
            guest_name: self.guest.ok_or_else(|| missing("guest"))?,
            check_in: self.check_in.ok_or_else(|| missing("check_in"))?,
            check_out: self.check_out.ok_or_else(|| missing("check_out"))?,
            services: self
                .services
                .unwrap_or_default()
                .split(';')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

/// Reads commands from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<Command>`,
/// trimming whitespace and tolerating short rows so trailing empty
/// columns can be omitted.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes commands.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(DeskError::from))
    }
}
