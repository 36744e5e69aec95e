pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod engine;
pub mod goal;
pub mod import;
pub mod log;
pub mod logic;
