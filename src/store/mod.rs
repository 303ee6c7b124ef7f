//! Card store: owns the card list and mirrors it to storage.
//!
//! The store is the single owner of all card records. Mutations follow a
//! replace-on-write discipline: each one builds a new `Vec<Card>` snapshot
//! and the full snapshot is what gets persisted, so a save can never
//! observe a half-applied change.

use crate::catalog::CartelaCatalog;
use crate::constants::{MAX_CARTELA_NUMBER, MIN_CARTELA_NUMBER, STORAGE_KEY};
use crate::models::Card;
use crate::storage::StorageBackend;
use chrono::Utc;

/// In-memory ordered list of cards, mirrored to durable storage on every
/// successful mutation.
///
/// Operations are synchronous and total: invalid input makes them a no-op,
/// never an error. Persistence is best-effort; failures are logged and the
/// session continues in memory.
pub struct CardStore {
    cards: Vec<Card>,
    catalog: CartelaCatalog,
    storage: Box<dyn StorageBackend>,
    /// Highest id handed out so far, to keep timestamp ids unique even
    /// when two cards are added within the same millisecond.
    last_id: i64,
}

impl CardStore {
    /// Creates a store by hydrating from storage.
    ///
    /// An absent or corrupt blob yields an empty card list. Hydration
    /// never writes back to storage, so a fresh start does not trigger a
    /// redundant save.
    pub fn load(catalog: CartelaCatalog, storage: Box<dyn StorageBackend>) -> Self {
        let cards = match storage.load(STORAGE_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Card>>(&blob) {
                Ok(cards) => cards,
                Err(e) => {
                    tracing::warn!("Ignoring corrupt saved card data: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to load saved card data: {e:#}");
                Vec::new()
            }
        };

        let last_id = cards.iter().map(|c| c.id).max().unwrap_or(0);

        Self {
            cards,
            catalog,
            storage,
            last_id,
        }
    }

    /// The current card list snapshot.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks whether the store holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Gets a card by id.
    #[must_use]
    pub fn get(&self, card_id: i64) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    /// Adds a card for the cartela number given as user input.
    ///
    /// Input that does not parse as an integer in
    /// [`MIN_CARTELA_NUMBER`]..=[`MAX_CARTELA_NUMBER`] makes this a silent
    /// no-op. Returns the new card's id on success.
    pub fn add_card(&mut self, input: &str) -> Option<i64> {
        let number: u32 = input.trim().parse().ok()?;
        if !(MIN_CARTELA_NUMBER..=MAX_CARTELA_NUMBER).contains(&number) {
            return None;
        }

        let id = self.next_card_id();
        let card = Card::new(id, number, self.catalog.resolve(number));

        let mut cards = self.cards.clone();
        cards.push(card);
        self.replace(cards);

        Some(id)
    }

    /// Removes the card with the given id. No-op if absent.
    pub fn delete_card(&mut self, card_id: i64) {
        if self.get(card_id).is_none() {
            return;
        }

        let cards = self
            .cards
            .iter()
            .filter(|c| c.id != card_id)
            .cloned()
            .collect();
        self.replace(cards);
    }

    /// Flips the marking at (row, col) on the named card.
    ///
    /// Free cells are refused here even though the UI already declines to
    /// call in for them. Out-of-range positions and unknown ids are no-ops.
    pub fn toggle_cell(&mut self, card_id: i64, row: usize, col: usize) {
        if row >= crate::models::GRID_SIZE || col >= crate::models::GRID_SIZE {
            return;
        }

        let mut cards = self.cards.clone();
        let Some(card) = cards.iter_mut().find(|c| c.id == card_id) else {
            return;
        };
        if !card.toggle_cell(row, col) {
            return;
        }
        self.replace(cards);
    }

    /// Clears every card's markings, leaving grids and ids untouched.
    pub fn reset_all_marks(&mut self) {
        if self.cards.is_empty() {
            return;
        }

        let cards = self
            .cards
            .iter()
            .map(|c| {
                let mut card = c.clone();
                card.reset_marks();
                card
            })
            .collect();
        self.replace(cards);
    }

    /// Removes the persisted blob from storage.
    ///
    /// The in-memory list is untouched; this backs the `--clear-data`
    /// launch flag, which runs before any store is populated.
    pub fn clear_saved(&self) {
        if let Err(e) = self.storage.clear(STORAGE_KEY) {
            tracing::warn!("Failed to clear saved card data: {e:#}");
        }
    }

    /// Installs a new snapshot and mirrors it to storage.
    fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.persist();
    }

    /// Best-effort full-snapshot save. Failures are logged and ignored.
    fn persist(&self) {
        let blob = match serde_json::to_string(&self.cards) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!("Failed to serialize card data: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.save(STORAGE_KEY, &blob) {
            tracing::warn!("Failed to save card data: {e:#}");
        }
    }

    /// Generates a process-unique card id.
    ///
    /// Millisecond timestamps match the historical id scheme; the bump
    /// keeps ids unique when cards are added faster than the clock ticks.
    fn next_card_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}
