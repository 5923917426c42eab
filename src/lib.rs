pub mod checker;
pub mod classifier;
pub mod config;
pub mod connection;
pub mod constraints;
pub mod database;
pub mod generator;
pub mod preferences;
pub mod statistics;
pub mod types;
pub mod use_cases;

pub use checker::*;
pub use constraints::*;
pub use generator::*;
pub use types::*;
pub use use_cases::*;
