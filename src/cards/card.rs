//! Card ranks and card values.

use serde::{Deserialize, Serialize};

/// Card rank.
///
/// `Joker` is wild: it satisfies any table rank when a play is judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rank {
    King,
    Queen,
    Ace,
    Joker,
}

impl Rank {
    /// Returns `true` for the wild rank.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Rank::Joker)
    }

    /// Does a card of this rank honestly match the table rank?
    #[must_use]
    pub fn satisfies(self, table: TableRank) -> bool {
        self.is_wild() || self == table.rank()
    }

    /// Upper-case name, as used in card ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::King => "KING",
            Rank::Queen => "QUEEN",
            Rank::Ace => "ACE",
            Rank::Joker => "JOKER",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The rank a round is played at. Never wild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TableRank {
    King,
    Queen,
    Ace,
}

impl TableRank {
    /// Every table rank, in deck-building order.
    pub const ALL: [TableRank; 3] = [TableRank::King, TableRank::Queen, TableRank::Ace];

    /// The card rank that honestly matches this table.
    #[must_use]
    pub const fn rank(self) -> Rank {
        match self {
            TableRank::King => Rank::King,
            TableRank::Queen => Rank::Queen,
            TableRank::Ace => Rank::Ace,
        }
    }
}

impl From<TableRank> for Rank {
    fn from(table: TableRank) -> Self {
        table.rank()
    }
}

impl std::fmt::Display for TableRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.rank().name())
    }
}

/// Unique card identifier, e.g. `KING-3` or `JOKER-1`.
///
/// Only used to pick a card out of a hand by reference; it carries no
/// meaning once the card is played.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Build the id for the `ordinal`-th copy of a rank.
    #[must_use]
    pub fn new(rank: Rank, ordinal: usize) -> Self {
        Self(format!("{}-{}", rank.name(), ordinal))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub id: CardId,
}

impl Card {
    #[must_use]
    pub fn new(rank: Rank, ordinal: usize) -> Self {
        Self {
            rank,
            id: CardId::new(rank, ordinal),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
