//! Target game engines

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// A game engine that mod packages are built for.
///
/// Each variant owns one identifier space in the data store: a `GameId`
/// record belongs to an engine when its `game` field equals [`Game::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Game {
    /// Crusader Kings II with the HIP total conversion.
    Ck2Hip,
    /// Crusader Kings III.
    Ck3,
    /// Imperator: Rome.
    ImperatorRome,
}

impl Game {
    /// All supported engines, in build order.
    pub const ALL: [Game; 3] = [Game::Ck2Hip, Game::Ck3, Game::ImperatorRome];

    /// The key used for this engine in `GameId` records and output paths.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Ck2Hip => "CK2HIP",
            Self::Ck3 => "CK3",
            Self::ImperatorRome => "ImperatorRome",
        }
    }

    /// Human-readable engine name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Ck2Hip => "Crusader Kings II (HIP)",
            Self::Ck3 => "Crusader Kings III",
            Self::ImperatorRome => "Imperator: Rome",
        }
    }

    /// Game version written into descriptor files when settings give none.
    #[must_use]
    pub fn default_game_version(self) -> &'static str {
        match self {
            Self::Ck2Hip => "3.3.*",
            Self::Ck3 => "1.0.*",
            Self::ImperatorRome => "1.4.*",
        }
    }

    /// Whether `game` (a `GameId.game` value) belongs to this engine.
    #[must_use]
    pub fn matches(self, game: &str) -> bool {
        game == self.key()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Game {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ck2hip" | "ck2" => Ok(Self::Ck2Hip),
            "ck3" => Ok(Self::Ck3),
            "imperatorrome" | "imperator" | "ir" => Ok(Self::ImperatorRome),
            _ => Err(Error::UnknownGame(s.to_string())),
        }
    }
}

impl Serialize for Game {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_keys_roundtrip_through_from_str() {
        for game in Game::ALL {
            assert_eq!(game.key().parse::<Game>().unwrap(), game);
        }
    }

    #[test]
    fn test_game_from_str_is_case_insensitive() {
        assert_eq!("ck3".parse::<Game>().unwrap(), Game::Ck3);
        assert_eq!("IMPERATORROME".parse::<Game>().unwrap(), Game::ImperatorRome);
        assert!(matches!("eu4".parse::<Game>(), Err(Error::UnknownGame(_))));
    }

    #[test]
    fn test_game_matches_exact_key_only() {
        assert!(Game::Ck3.matches("CK3"));
        assert!(!Game::Ck3.matches("ck3"));
        assert!(!Game::Ck2Hip.matches("CK3"));
    }
}
