//! Colour and icon value objects used to decorate projects and tasks.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon assigned to drafts that have not picked one yet.
pub const DEFAULT_ICON: &str = "pencil.tip";

/// Symbol identifiers offered by the icon picker.
pub const ICON_CATALOG: &[&str] = &[
    "pencil.tip",
    "book.closed",
    "graduationcap",
    "briefcase",
    "hammer",
    "paintbrush",
    "lightbulb",
    "star",
    "flag",
    "bell",
    "cart",
    "gamecontroller",
    "heart",
    "leaf",
    "music.note",
    "airplane",
    "house",
    "person.2",
    "laptopcomputer",
    "folder",
];

/// Luminance above which a background counts as light.
const LIGHT_BACKGROUND_THRESHOLD: f64 = 0.5;

/// Colour with red, green and blue channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRgb")]
pub struct Rgb {
    red: f64,
    green: f64,
    blue: f64,
}

#[derive(Deserialize)]
struct RawRgb {
    red: f64,
    green: f64,
    blue: f64,
}

impl TryFrom<RawRgb> for Rgb {
    type Error = ProjectDomainError;

    fn try_from(raw: RawRgb) -> Result<Self, Self::Error> {
        Self::new(raw.red, raw.green, raw.blue)
    }
}

impl Rgb {
    /// Creates a validated colour.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidColorComponent`] when a channel is
    /// not finite or falls outside `[0, 1]`.
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Self, ProjectDomainError> {
        check_channel("red", red)?;
        check_channel("green", green)?;
        check_channel("blue", blue)?;
        Ok(Self { red, green, blue })
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(self) -> f64 {
        self.red
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(self) -> f64 {
        self.green
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(self) -> f64 {
        self.blue
    }

    /// Perceived brightness of the colour in `[0, 1]`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "luminance is a weighted sum of the colour channels"
    )]
    pub fn luminance(self) -> f64 {
        0.299 * self.red + 0.587 * self.green + 0.114 * self.blue
    }

    /// Returns the tint that stays readable on top of this colour.
    #[must_use]
    pub fn contrasting_tint(self) -> Tint {
        if self.luminance() > LIGHT_BACKGROUND_THRESHOLD {
            Tint::Black
        } else {
            Tint::White
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Swatch::default().rgb()
    }
}

fn check_channel(channel: &'static str, value: f64) -> Result<(), ProjectDomainError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ProjectDomainError::InvalidColorComponent { channel, value });
    }
    Ok(())
}

/// Foreground tint drawn over a coloured background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    /// Dark foreground for light backgrounds.
    Black,
    /// Light foreground for dark backgrounds.
    White,
}

/// Fixed palette offered by the colour picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Swatch {
    /// System red.
    #[default]
    Red,
    /// System orange.
    Orange,
    /// System yellow.
    Yellow,
    /// System green.
    Green,
    /// System mint.
    Mint,
    /// System teal.
    Teal,
    /// System cyan.
    Cyan,
    /// System blue.
    Blue,
    /// System indigo.
    Indigo,
    /// System purple.
    Purple,
    /// System pink.
    Pink,
    /// System brown.
    Brown,
}

impl Swatch {
    /// Every swatch in picker order.
    pub const ALL: [Self; 12] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Mint,
        Self::Teal,
        Self::Cyan,
        Self::Blue,
        Self::Indigo,
        Self::Purple,
        Self::Pink,
        Self::Brown,
    ];

    /// Returns the colour channels of the swatch.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        let (red, green, blue) = match self {
            Self::Red => (1.0, 0.231, 0.188),
            Self::Orange => (1.0, 0.584, 0.0),
            Self::Yellow => (1.0, 0.8, 0.0),
            Self::Green => (0.204, 0.78, 0.349),
            Self::Mint => (0.0, 0.78, 0.745),
            Self::Teal => (0.188, 0.69, 0.78),
            Self::Cyan => (0.196, 0.678, 0.902),
            Self::Blue => (0.0, 0.478, 1.0),
            Self::Indigo => (0.345, 0.337, 0.839),
            Self::Purple => (0.686, 0.322, 0.871),
            Self::Pink => (1.0, 0.176, 0.333),
            Self::Brown => (0.635, 0.518, 0.369),
        };
        Rgb { red, green, blue }
    }
}

/// Symbol identifier of an icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IconName(String);

impl TryFrom<String> for IconName {
    type Error = ProjectDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IconName> for String {
    fn from(icon: IconName) -> Self {
        icon.0
    }
}

impl IconName {
    /// Creates an icon name from any non-blank identifier.
    ///
    /// Used when restoring stored records, whose icon may predate the
    /// current catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyIcon`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ProjectDomainError::EmptyIcon);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Selects an icon from [`ICON_CATALOG`].
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyIcon`] for a blank value and
    /// [`ProjectDomainError::UnknownIcon`] when the identifier is not in the
    /// catalog.
    pub fn from_catalog(value: &str) -> Result<Self, ProjectDomainError> {
        let icon = Self::new(value)?;
        if !ICON_CATALOG.contains(&icon.as_str()) {
            return Err(ProjectDomainError::UnknownIcon(icon.0));
        }
        Ok(icon)
    }

    /// Returns the icon identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IconName {
    fn default() -> Self {
        Self(DEFAULT_ICON.to_owned())
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
