// src/colors.rs
// =============================================================================
// ANSI escape codes for terminal output.
//
// We color results the classic way: green for reachable (200) paths, red for
// everything else, yellow for notices. Raw escape codes keep us dependency-free
// here; every modern terminal understands them.
// =============================================================================

pub const GREEN: &str = "\x1b[92m";
pub const RED: &str = "\x1b[91m";
pub const YELLOW: &str = "\x1b[93m";
pub const RESET: &str = "\x1b[0m";
