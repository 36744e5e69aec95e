pub mod daily_aggregate;
pub mod entry_kind;
pub mod goal;
pub mod log_entry;
pub mod progress;
