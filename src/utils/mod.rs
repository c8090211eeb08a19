pub mod error;

pub use error::MrzScanError;
