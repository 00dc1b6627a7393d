//! ANSI escape code constants for terminal styling
//!
//! Highlight spans and pane chrome are painted as pre-colored text blobs, so
//! the codes are kept as plain string constants rather than crossterm
//! commands.

/// Select Graphic Rendition sequence for one parameter list
macro_rules! sgr {
    ($params:literal) => {
        concat!("\x1b[", $params, "m")
    };
}

pub const RESET: &str = sgr!("0");
pub const BOLD: &str = sgr!("1");
/// Swap foreground and background
pub const REVERSE: &str = sgr!("7");

// Foreground, 30-37
pub const FG_BLACK: &str = sgr!("30");
pub const FG_RED: &str = sgr!("31");
pub const FG_GREEN: &str = sgr!("32");
pub const FG_YELLOW: &str = sgr!("33");
pub const FG_BLUE: &str = sgr!("34");
pub const FG_MAGENTA: &str = sgr!("35");
pub const FG_CYAN: &str = sgr!("36");
pub const FG_WHITE: &str = sgr!("37");

// Background, 40-47
pub const BG_BLACK: &str = sgr!("40");
pub const BG_RED: &str = sgr!("41");
pub const BG_GREEN: &str = sgr!("42");
pub const BG_YELLOW: &str = sgr!("43");
pub const BG_BLUE: &str = sgr!("44");
pub const BG_MAGENTA: &str = sgr!("45");
pub const BG_CYAN: &str = sgr!("46");
pub const BG_WHITE: &str = sgr!("47");

/// Tildes past the end of a buffer and idle borders
pub const FG_DIM_TEXT: &str = sgr!("90");
/// Redraw failures
pub const FG_ERROR: &str = FG_RED;
/// Border of the focused pane, 256-color deep sky blue
pub const FG_BORDER_FOCUSED: &str = sgr!("38;5;25");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_should_wrap_parameters() {
        assert_eq!(RESET, "\x1b[0m");
        assert_eq!(FG_RED, "\x1b[31m");
        assert_eq!(FG_BORDER_FOCUSED, "\x1b[38;5;25m");
    }
}
