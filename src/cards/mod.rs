//! Card system: ranks, cards, and the deck.
//!
//! ## Key Types
//!
//! - `Rank`: KING, QUEEN, ACE and the wild JOKER
//! - `TableRank`: The three ranks a round can be played at
//! - `CardId`: Stable per-instance identifier (`KING-0`, `JOKER-2`)
//! - `Card`: Immutable rank + id value
//!
//! Deck functions (`build_deck`, `shuffle`, `deal_cards`) treat decks as
//! values and never mutate their input.

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, TableRank};
pub use deck::{build_deck, count_rank, deal_cards, shuffle};
