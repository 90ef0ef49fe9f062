// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod cursor;
pub mod deck;
pub mod selection;
pub mod view;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::session::cursor::Cursor;
use crate::session::deck::Deck;
use crate::session::selection::Selection;
use crate::session::view::TableRow;
use crate::session::view::View;
use crate::types::category::Category;

/// A study session over a fixed list of categories. Owns the active
/// category, the selection, the deck built from them, and the cursor. All
/// events are synchronous methods; invalid events (unknown category names,
/// out-of-range indices, navigation without a deck) are no-ops.
///
/// The deck and cursor are always derived state: every change to the active
/// category or the selection rebuilds them. Only the explicit `shuffle`
/// event permutes the deck; selecting a category or closing the table view
/// rebuilds it in selection order.
pub struct Session {
    categories: Vec<Category>,
    active: Option<usize>,
    selection: Selection,
    deck: Option<Deck>,
    cursor: Cursor,
    table_open: bool,
    rng: StdRng,
}

impl Session {
    pub fn new(categories: Vec<Category>) -> Self {
        Self::with_rng(categories, StdRng::from_entropy())
    }

    /// Builds a session with a caller-supplied RNG, so tests can seed the
    /// shuffle.
    pub fn with_rng(categories: Vec<Category>, rng: StdRng) -> Self {
        Self {
            categories,
            active: None,
            selection: Selection::all(0),
            deck: None,
            cursor: Cursor::new(),
            table_open: false,
            rng,
        }
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn active_category_name(&self) -> Option<&str> {
        self.active.map(|index| self.categories[index].name.as_str())
    }

    /// Activates the category with the given name and resets the selection
    /// to every card in it. The deck is rebuilt in card order. An unknown
    /// name drops the session back to the idle state.
    pub fn select_category(&mut self, name: &str) {
        match self.categories.iter().position(|c| c.name == name) {
            Some(index) => {
                self.active = Some(index);
                self.selection = Selection::all(self.categories[index].cards.len());
                self.table_open = false;
                self.rebuild(false);
            }
            None => {
                log::debug!("Unknown category {name:?}, entering the idle state.");
                self.active = None;
                self.selection = Selection::all(0);
                self.table_open = false;
                self.deck = None;
                self.cursor = Cursor::new();
            }
        }
    }

    pub fn next(&mut self) {
        if let Some(deck) = &self.deck {
            self.cursor.next(deck.len());
        }
    }

    pub fn previous(&mut self) {
        if let Some(deck) = &self.deck {
            self.cursor.previous(deck.len());
        }
    }

    pub fn flip(&mut self) {
        if self.deck.is_some() {
            self.cursor.flip();
        }
    }

    /// Rebuilds the deck in a fresh random order. This is the only event
    /// that permutes the deck.
    pub fn shuffle(&mut self) {
        if self.active.is_some() {
            self.rebuild(true);
        }
    }

    pub fn open_table(&mut self) {
        if self.active.is_some() {
            self.table_open = true;
        }
    }

    /// Closes the table view and rebuilds the deck from the current
    /// selection, in selection order. Closing never re-shuffles: a user
    /// refining their selection mid-session keeps a deterministic order,
    /// though the position resets because the deck contents changed.
    pub fn close_table(&mut self) {
        if self.table_open {
            self.table_open = false;
            self.rebuild(false);
        }
    }

    pub fn table_open(&self) -> bool {
        self.table_open
    }

    /// Adds or removes one card from the selection. The deck is not rebuilt
    /// until the table view closes.
    pub fn toggle_row(&mut self, index: usize, checked: bool) {
        self.selection.toggle(index, checked);
    }

    pub fn select_all_rows(&mut self) {
        self.selection.select_all();
    }

    pub fn deselect_all_rows(&mut self) {
        self.selection.deselect_all();
    }

    /// The current display state of the main card area.
    pub fn view(&self) -> View {
        if self.active.is_none() {
            return View::NoCategory;
        }
        match &self.deck {
            None => View::EmptySelection,
            Some(deck) => View::Entry {
                entry: deck.entry(self.cursor.position()).clone(),
                flipped: self.cursor.flipped(),
                counter: self.cursor.counter(deck.len()),
            },
        }
    }

    /// Every card of the active category as a table row, checked according
    /// to selection membership. Empty when no category is active.
    pub fn table_rows(&self) -> Vec<TableRow> {
        match self.active {
            Some(index) => self.categories[index]
                .cards
                .iter()
                .enumerate()
                .map(|(i, card)| TableRow {
                    index: i,
                    key: card.key.clone(),
                    value: card.value.clone(),
                    checked: self.selection.contains(i),
                })
                .collect(),
            None => Vec::new(),
        }
    }

    fn rebuild(&mut self, shuffle: bool) {
        self.deck = match self.active {
            Some(index) => Deck::build(
                &self.categories[index],
                &self.selection,
                shuffle,
                &mut self.rng,
            ),
            None => None,
        };
        self.cursor = Cursor::new();
    }
}
