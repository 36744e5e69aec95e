//! Goal qualification engine.
//!
//! Pure functions over an in-memory snapshot of the log and goal history.
//! Nothing in here touches the database or the clock: callers pass `today`.

pub mod daily;
pub mod goal_select;
pub mod progress;
pub mod qualify;

pub use daily::aggregate_daily;
pub use goal_select::latest_goal;
pub use progress::progress;
pub use qualify::{
    SAFETY_WINDOW_DAYS, best_qualifying_value, qualifying_session_details, qualifying_sessions,
};
