/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Balance color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_balance(value: f64) -> &'static str {
    if value > 0.005 {
        GREEN
    } else if value < -0.005 {
        RED
    } else {
        RESET
    }
}

/// Outstanding dues are shown in yellow, cleared ones in grey.
pub fn color_for_due(value: f64) -> &'static str {
    if value > 0.005 { YELLOW } else { GREY }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
