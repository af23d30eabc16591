//! Markdown decoration applied to each title-cased line.

use crate::case::title_case;

const MAX_HEADING_LEVEL: i64 = 6;

/// Heading depth normalised to `1..=6`, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingLevel(Option<u8>);

impl HeadingLevel {
    pub const NONE: Self = Self(None);

    /// Values outside `1..=6` disable the heading prefix.
    pub fn from_raw(raw: i64) -> Self {
        if (1..=MAX_HEADING_LEVEL).contains(&raw) {
            Self(Some(raw as u8))
        } else {
            Self::NONE
        }
    }

    pub fn depth(&self) -> Option<u8> {
        self.0
    }

    pub fn prefix(&self) -> Option<String> {
        self.0.map(|depth| format!("{} ", "#".repeat(usize::from(depth))))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markup {
    pub bold: bool,
    pub heading: HeadingLevel,
}

impl Markup {
    /// Wraps in bold first, then prepends the heading prefix.
    pub fn apply(&self, line: String) -> String {
        let line = if self.bold {
            format!("**{line}**")
        } else {
            line
        };

        match self.heading.prefix() {
            Some(prefix) => prefix + &line,
            None => line,
        }
    }
}

pub fn decorate(line: &str, markup: &Markup) -> String {
    markup.apply(title_case(line))
}
