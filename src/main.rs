//! readme-sync main entrypoint.

use readme_sync::run;
use readme_sync::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
