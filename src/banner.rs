// src/banner.rs
// =============================================================================
// The startup banner and the per-scan header line.
//
// Printed on plain runs only; suppressed in --json-stdout mode so stdout
// stays valid JSON for piping into other tools.
// =============================================================================

use crate::colors;
use chrono::Local;

/// Prints the ASCII art logo.
pub fn print_logo() {
    let logo = r#"
            _           _
  _ __ ___ | |__   ___ | |_ ___
 | '__/ _ \| '_ \ / _ \| __/ __|
 | | | (_) | |_) | (_) | |_\__ \
 |_|  \___/|_.__/ \___/ \__|___/
          w a r d e n
"#;
    println!("{}{}{}", colors::YELLOW, logo, colors::RESET);
}

/// Prints the scan header for one target host.
pub fn print_scan_header(host: &str) {
    println!(
        "Starting robots-warden v{} at {}",
        env!("CARGO_PKG_VERSION"),
        Local::now().format("%m/%d/%Y %H:%M:%S")
    );
    println!("robots-warden scan report for {}", host);
}
