pub mod cli;
pub mod error;
pub mod ipv4;
pub mod report;

pub use error::ParseError;
pub use ipv4::NetworkCalculator;
pub use report::Report;
