//! Plan serialization to the exchange formats.

pub mod csv;
pub mod ics;

pub use csv::to_csv;
pub use ics::to_ics;
