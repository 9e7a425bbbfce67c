pub mod bill;
pub mod catalog;
pub mod ports;
pub mod session;
