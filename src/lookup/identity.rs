use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::riot::Region;

/// Separator between the game name and the tag line of a Riot ID.
pub const RIOT_ID_SEPARATOR: char = '#';

pub const GAME_NAME_LENGTH: RangeInclusive<usize> = 3..=16;
pub const TAG_LINE_LENGTH: RangeInclusive<usize> = 3..=5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("expected gameName#tagLine")]
    MissingSeparator,
    #[error("more than one '#' separator")]
    TooManySeparators,
    #[error("game name must be 3 to 16 characters long, got {0}")]
    GameNameLength(usize),
    #[error("tag line must be 3 to 5 characters long, got {0}")]
    TagLineLength(usize),
}

/// A validated Riot ID bound to the region it is looked up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountIdentity {
    game_name: String,
    tag_line: String,
    region: Region,
}

impl AccountIdentity {
    /// Split a raw `gameName#tagLine` string and validate both parts.
    pub fn parse(riot_id: &str, region: Region) -> Result<Self, IdentityError> {
        let mut parts = riot_id.split(RIOT_ID_SEPARATOR);

        let game_name = parts.next().unwrap_or_default();
        let tag_line = parts.next().ok_or(IdentityError::MissingSeparator)?;
        if parts.next().is_some() {
            return Err(IdentityError::TooManySeparators);
        }

        Self::new(game_name, tag_line, region)
    }

    pub fn new(game_name: &str, tag_line: &str, region: Region) -> Result<Self, IdentityError> {
        let game_name_len = game_name.chars().count();
        if !GAME_NAME_LENGTH.contains(&game_name_len) {
            return Err(IdentityError::GameNameLength(game_name_len));
        }

        let tag_line_len = tag_line.chars().count();
        if !TAG_LINE_LENGTH.contains(&tag_line_len) {
            return Err(IdentityError::TagLineLength(tag_line_len));
        }

        Ok(Self {
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
            region,
        })
    }

    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    pub fn tag_line(&self) -> &str {
        &self.tag_line
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

impl fmt::Display for AccountIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.game_name, RIOT_ID_SEPARATOR, self.tag_line)
    }
}
