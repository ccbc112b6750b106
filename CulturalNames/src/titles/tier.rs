//! Title tiers

/// Spaces per tier of indentation in landed-titles files.
pub const SPACES_PER_TIER: usize = 4;

/// Rank of a landed title, read from the first character of its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Empire,
    Kingdom,
    Duchy,
    County,
    Barony,
}

impl Tier {
    /// Map an id prefix character to a tier.
    ///
    /// `e`, `k`, `d`, `c` and `b` map to empire through barony. Every other
    /// character maps to [`Tier::Empire`].
    ///
    /// Matching is case-sensitive: `K_france` is an empire, not a kingdom.
    #[must_use]
    pub fn from_prefix(prefix: char) -> Self {
        match prefix {
            'k' => Self::Kingdom,
            'd' => Self::Duchy,
            'c' => Self::County,
            'b' => Self::Barony,
            _ => Self::Empire,
        }
    }

    /// Tier of a title id. An empty id is an empire.
    #[must_use]
    pub fn of(id: &str) -> Self {
        id.chars().next().map_or(Self::Empire, Self::from_prefix)
    }

    /// Nesting depth, 0 for empires.
    #[must_use]
    pub fn depth(self) -> usize {
        match self {
            Self::Empire => 0,
            Self::Kingdom => 1,
            Self::Duchy => 2,
            Self::County => 3,
            Self::Barony => 4,
        }
    }

    /// Indentation width in spaces.
    #[must_use]
    pub fn indent_width(self) -> usize {
        self.depth() * SPACES_PER_TIER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_map_to_tiers() {
        assert_eq!(Tier::from_prefix('e').depth(), 0);
        assert_eq!(Tier::from_prefix('k').depth(), 1);
        assert_eq!(Tier::from_prefix('d').depth(), 2);
        assert_eq!(Tier::from_prefix('c').depth(), 3);
        assert_eq!(Tier::from_prefix('b').depth(), 4);
    }

    #[test]
    fn test_unknown_prefix_defaults_to_empire() {
        assert_eq!(Tier::from_prefix('x'), Tier::Empire);
        assert_eq!(Tier::from_prefix('B'), Tier::Empire);
        assert_eq!(Tier::from_prefix('1'), Tier::Empire);
        assert_eq!(Tier::of(""), Tier::Empire);
    }

    #[test]
    fn test_uppercase_ids_are_empires() {
        assert_eq!(Tier::of("K_france"), Tier::Empire);
        assert_eq!(Tier::of("B_louvre").indent_width(), 0);
        assert_eq!(Tier::of("k_france"), Tier::Kingdom);
    }

    #[test]
    fn test_tier_of_id_and_indent() {
        assert_eq!(Tier::of("c_paris"), Tier::County);
        assert_eq!(Tier::of("b_louvre").indent_width(), 16);
        assert_eq!(Tier::of("k_france").indent_width(), 4);
    }
}
