//! PhysioTracker main entrypoint.

use physiotracker::run;
use physiotracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
