//! gridsq CLI entry point
//!
//! Maidenhead grid square encoder

use gridsq::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
