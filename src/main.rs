//! wheelgauge main entrypoint.

use wheelgauge::run;
use wheelgauge::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
