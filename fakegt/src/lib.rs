pub mod commands;
pub mod error;
pub mod logic;
pub mod utils;

pub use commands::AddFakeGenotype;
