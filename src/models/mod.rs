pub mod data;

pub use data::{MrzFields, MrzLines};
