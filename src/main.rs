//! shiftreport main entrypoint.

use shiftreport::run;
use shiftreport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
