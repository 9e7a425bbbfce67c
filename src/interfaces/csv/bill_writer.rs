use crate::domain::bill::Bill;
use crate::error::Result;
use std::io::Write;

/// Writes the final ledger as CSV, one row per bill in ledger order.
///
/// Services are written as their ids joined with `;`, matching the input
/// format of the command reader.
pub struct BillWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> BillWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_bills(&mut self, bills: Vec<Bill>) -> Result<()> {
        self.writer.write_record([
            "id",
            "guest",
            "room",
            "check_in",
            "check_out",
            "services",
            "total",
            "paid",
        ])?;

        for bill in bills {
            let services = bill
                .services
                .iter()
                .map(|s| s.id.as_str())
                .collect::<Vec<_>>()
                .join(";");
            self.writer.write_record([
                bill.id.to_string(),
                bill.guest_name,
                bill.room_number,
                bill.check_in.to_string(),
                bill.check_out.to_string(),
                services,
                bill.total.value().to_string(),
                bill.paid.to_string(),
            ])?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
