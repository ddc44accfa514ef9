/// Avatar domain type
use serde::{Deserialize, Serialize};

/// How a record's avatar is rendered.
///
/// The source of an avatar is a single user-supplied string; it is classified
/// exactly once, when the raw value enters the domain, instead of being
/// re-inferred by prefix checks at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Avatar {
    /// An HTTP(S) image URL rendered as a remote image
    Remote(String),
    /// A single glyph (emoji) rendered in a circular badge
    Glyph(String),
    /// No avatar; rendered as the bundled placeholder image
    Default,
}

impl Avatar {
    /// Fixed fallback glyph applied when a form is saved with no avatar chosen
    pub const FALLBACK_GLYPH: &'static str = "🐶";

    /// Classify a raw avatar string.
    ///
    /// Anything starting with the HTTP scheme prefix is a remote image; an
    /// empty (or whitespace-only) value means no avatar; everything else is
    /// treated as a glyph.
    pub fn classify(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Self::Default
        } else if raw.starts_with("http") {
            Self::Remote(raw.to_string())
        } else {
            Self::Glyph(raw.to_string())
        }
    }

    /// The raw string form persisted in the `avatarUrl` field
    pub fn as_raw(&self) -> &str {
        match self {
            Self::Remote(url) => url,
            Self::Glyph(glyph) => glyph,
            Self::Default => "",
        }
    }

    /// The render kind of this avatar
    pub fn kind(&self) -> AvatarKind {
        match self {
            Self::Remote(_) => AvatarKind::Remote,
            Self::Glyph(_) => AvatarKind::Glyph,
            Self::Default => AvatarKind::Default,
        }
    }
}

impl From<String> for Avatar {
    fn from(raw: String) -> Self {
        Self::classify(&raw)
    }
}

impl From<Avatar> for String {
    fn from(avatar: Avatar) -> Self {
        avatar.as_raw().to_string()
    }
}

/// Render kind of an avatar, as exposed to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarKind {
    /// Remote image URL
    Remote,
    /// Emoji glyph
    Glyph,
    /// Bundled placeholder
    Default,
}

impl AvatarKind {
    /// String form used by the frontend
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Glyph => "glyph",
            Self::Default => "default",
        }
    }
}
