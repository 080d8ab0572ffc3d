//! Colour themes for the terminal view.
//!
//! A theme is only data: a [`Palette`] assigning an optional colour to each
//! role the view draws. Swapping themes never touches the task list itself.

use colored::Color;
use serde::{Deserialize, Serialize};

/// Colours used by the view, one per role
///
/// `None` leaves that role unstyled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// The list heading
    pub heading: Option<Color>,
    /// Text of open tasks
    pub text: Option<Color>,
    /// Text of completed tasks
    pub completed: Option<Color>,
    /// Empty-state message, summary and hints
    pub muted: Option<Color>,
    /// Checkboxes, ids and the prompt
    pub accent: Option<Color>,
    /// Whether completed task text is struck through
    pub strike_completed: bool,
}

impl Palette {
    /// Pink and rose tones
    pub const ROSE: Self = Self {
        heading: Some(Color::TrueColor { r: 157, g: 23, b: 77 }),
        text: Some(Color::TrueColor { r: 131, g: 24, b: 67 }),
        completed: Some(Color::TrueColor { r: 244, g: 114, b: 182 }),
        muted: Some(Color::TrueColor { r: 219, g: 39, b: 119 }),
        accent: Some(Color::TrueColor { r: 225, g: 29, b: 72 }),
        strike_completed: true,
    };

    /// Cool blue-grey tones
    pub const SLATE: Self = Self {
        heading: Some(Color::TrueColor { r: 30, g: 41, b: 59 }),
        text: Some(Color::TrueColor { r: 51, g: 65, b: 85 }),
        completed: Some(Color::TrueColor { r: 148, g: 163, b: 184 }),
        muted: Some(Color::TrueColor { r: 100, g: 116, b: 139 }),
        accent: Some(Color::TrueColor { r: 37, g: 99, b: 235 }),
        strike_completed: true,
    };

    /// No escape codes at all
    pub const PLAIN: Self = Self {
        heading: None,
        text: None,
        completed: None,
        muted: None,
        accent: None,
        strike_completed: false,
    };
}

/// Selectable theme names
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// [`Palette::ROSE`]
    #[default]
    Rose,
    /// [`Palette::SLATE`]
    Slate,
    /// [`Palette::PLAIN`]
    Plain,
}

impl ThemeName {
    /// Every theme, in display order
    pub const ALL: [Self; 3] = [Self::Rose, Self::Slate, Self::Plain];

    /// The palette this theme draws with
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Rose => Palette::ROSE,
            Self::Slate => Palette::SLATE,
            Self::Plain => Palette::PLAIN,
        }
    }

    /// Lowercase name as accepted by [`str::parse`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rose => "rose",
            Self::Slate => "slate",
            Self::Plain => "plain",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown theme name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected rose, slate or plain)")]
pub struct UnknownTheme(pub String);

impl std::str::FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTheme(wanted.to_string()))
    }
}
