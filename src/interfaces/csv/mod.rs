pub mod bill_writer;
pub mod command_reader;
