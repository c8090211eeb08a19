pub mod models;
pub mod parsing;
pub mod processing;
pub mod utils;
pub mod mrz_scanner;

pub use mrz_scanner::MrzScanner;
pub use parsing::{MrzParser, MrzParserConfig};
