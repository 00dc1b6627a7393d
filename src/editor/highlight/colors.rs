//! # Highlight Colors
//!
//! Color tags from rule files (`fg` or `fg,bg`) resolved to ANSI codes.
//! Names outside the eight base colors go through a fixed substitution
//! table first, so `brightred` paints as `red`.

use crate::editor::views::ansi_escape_codes as ansi;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color '{0}'")]
pub struct UnknownColor(pub String);

/// Fixed name substitutions applied before lookup
const COLOR_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("brightblack", "black"),
    ("brightred", "red"),
    ("brightgreen", "green"),
    ("brightyellow", "yellow"),
    ("brightblue", "blue"),
    ("brightmagenta", "magenta"),
    ("brightcyan", "cyan"),
    ("brightwhite", "white"),
    ("purple", "magenta"),
    ("orange", "yellow"),
    ("pink", "magenta"),
    ("grey", "white"),
    ("gray", "white"),
];

/// Substitute a color name with its host-compatible equivalent
pub fn substitute_color(name: &str) -> String {
    let lowered = name.trim().to_ascii_lowercase();
    COLOR_SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == lowered)
        .map_or(lowered, |(_, to)| to.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BaseColor {
    fn parse(name: &str) -> Result<Self, UnknownColor> {
        Ok(match substitute_color(name).as_str() {
            "black" => BaseColor::Black,
            "red" => BaseColor::Red,
            "green" => BaseColor::Green,
            "yellow" => BaseColor::Yellow,
            "blue" => BaseColor::Blue,
            "magenta" => BaseColor::Magenta,
            "cyan" => BaseColor::Cyan,
            "white" => BaseColor::White,
            _ => return Err(UnknownColor(name.to_string())),
        })
    }

    fn fg_code(self) -> &'static str {
        match self {
            BaseColor::Black => ansi::FG_BLACK,
            BaseColor::Red => ansi::FG_RED,
            BaseColor::Green => ansi::FG_GREEN,
            BaseColor::Yellow => ansi::FG_YELLOW,
            BaseColor::Blue => ansi::FG_BLUE,
            BaseColor::Magenta => ansi::FG_MAGENTA,
            BaseColor::Cyan => ansi::FG_CYAN,
            BaseColor::White => ansi::FG_WHITE,
        }
    }

    fn bg_code(self) -> &'static str {
        match self {
            BaseColor::Black => ansi::BG_BLACK,
            BaseColor::Red => ansi::BG_RED,
            BaseColor::Green => ansi::BG_GREEN,
            BaseColor::Yellow => ansi::BG_YELLOW,
            BaseColor::Blue => ansi::BG_BLUE,
            BaseColor::Magenta => ansi::BG_MAGENTA,
            BaseColor::Cyan => ansi::BG_CYAN,
            BaseColor::White => ansi::BG_WHITE,
        }
    }
}

/// Resolved color of a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightColor {
    tag: String,
    fg: Option<BaseColor>,
    bg: Option<BaseColor>,
}

impl HighlightColor {
    /// Parse `fg`, `fg,bg` or `,bg`; `normal` / `default` leave a side unset
    pub fn parse(tag: &str) -> Result<Self, UnknownColor> {
        let (fg_name, bg_name) = match tag.split_once(',') {
            Some((fg, bg)) => (fg, Some(bg)),
            None => (tag, None),
        };

        let side = |name: &str| -> Result<Option<BaseColor>, UnknownColor> {
            match substitute_color(name).as_str() {
                "" | "normal" | "default" => Ok(None),
                _ => BaseColor::parse(name).map(Some),
            }
        };

        let fg = side(fg_name)?;
        let bg = bg_name.map(side).transpose()?.flatten();
        if fg.is_none() && bg.is_none() {
            return Err(UnknownColor(tag.to_string()));
        }

        Ok(Self {
            tag: tag.trim().to_ascii_lowercase(),
            fg,
            bg,
        })
    }

    /// Tag as written in the rule file, lowercased
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Escape sequence that switches this color on
    pub fn start_code(&self) -> String {
        let mut code = String::new();
        if let Some(fg) = self.fg {
            code.push_str(fg.fg_code());
        }
        if let Some(bg) = self.bg {
            code.push_str(bg.bg_code());
        }
        code
    }

    pub fn end_code(&self) -> &'static str {
        ansi::RESET
    }
}
