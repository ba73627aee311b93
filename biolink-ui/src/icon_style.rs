//! How each kind of link looks.
//!
//! To support another service, add a variant to [`IconType`] and an entry
//! here.

use biolink_api_protocol::IconType;

/// Background color of a link row, normal and hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Background {
    pub base: &'static str,
    pub hover: &'static str,
}

impl Background {
    pub const NEUTRAL: Self = Self {
        base: "#374151",
        hover: "#4b5563",
    };

    /// Inline style that sets the CSS variables the link row stylesheet
    /// reads.
    pub fn css(&self) -> String {
        format!(
            "--link-background: {}; --link-background-hover: {};",
            self.base, self.hover
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconStyle {
    /// Bootstrap icon name.
    pub glyph: Option<&'static str>,
    pub background: Background,
}

impl IconStyle {
    /// Style for links we don't recognize: no glyph, neutral background.
    pub const DEFAULT: Self = Self {
        glyph: None,
        background: Background::NEUTRAL,
    };

    pub fn for_icon_type(icon_type: &IconType) -> Self {
        match icon_type {
            IconType::Facebook => {
                Self {
                    glyph: Some("facebook"),
                    background: Background::NEUTRAL,
                }
            }
            IconType::Discord => {
                Self {
                    glyph: Some("discord"),
                    background: Background {
                        base: "#5865F2",
                        hover: "#4752C4",
                    },
                }
            }
            IconType::Steam => {
                Self {
                    glyph: Some("steam"),
                    background: Background {
                        base: "#1b2838",
                        hover: "#2a475e",
                    },
                }
            }
            IconType::Github => {
                Self {
                    glyph: Some("github"),
                    background: Background {
                        base: "#1f2937",
                        hover: "#374151",
                    },
                }
            }
            IconType::Youtube => {
                Self {
                    glyph: Some("youtube"),
                    background: Background {
                        base: "#FF0000",
                        hover: "#CC0000",
                    },
                }
            }
            IconType::Other(_) => Self::DEFAULT,
        }
    }
}
