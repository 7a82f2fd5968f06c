//! Movie genre tag attached to every board.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Fixed set of genres a board can be filed under.
///
/// The wire and storage representation is the SCREAMING_SNAKE name
/// (`"SF_FANTASY"`), so unknown values are rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    SfFantasy,
    DramaDocumentary,
    RomanceComedy,
    #[default]
    Etc,
}

impl Genre {
    /// All genres in declaration order
    pub const ALL: [Genre; 5] = [
        Genre::Action,
        Genre::SfFantasy,
        Genre::DramaDocumentary,
        Genre::RomanceComedy,
        Genre::Etc,
    ];

    /// Storage name of the genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "ACTION",
            Genre::SfFantasy => "SF_FANTASY",
            Genre::DramaDocumentary => "DRAMA_DOCUMENTARY",
            Genre::RomanceComedy => "ROMANCE_COMEDY",
            Genre::Etc => "ETC",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("Unknown genre: {}", s)))
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        genre.as_str().to_string()
    }
}
