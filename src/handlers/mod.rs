//! Function templates hosted by the adapter

pub mod hello;
pub mod scheduled;

pub use hello::HelloWorld;
pub use scheduled::Scheduled;
