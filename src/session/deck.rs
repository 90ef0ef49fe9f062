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

use rand::Rng;
use rand::seq::SliceRandom;

use crate::session::selection::Selection;
use crate::types::category::Category;
use crate::types::entry::StudyEntry;

/// The ordered sequence of study entries built from a selection. Each
/// selected card contributes its forward entry followed by its inverted
/// entry, so the deck holds twice as many entries as the selection.
pub struct Deck {
    entries: Vec<StudyEntry>,
}

impl Deck {
    /// Builds a deck from the selected cards of a category, in ascending
    /// index order. Returns `None` for an empty selection: there is no deck
    /// to navigate, and consumers must render the no-cards-selected state.
    ///
    /// With `shuffle` the entries are uniformly permuted through the given
    /// RNG. The category's card list is never touched.
    pub fn build(
        category: &Category,
        selection: &Selection,
        shuffle: bool,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        if selection.is_empty() {
            return None;
        }
        let mut entries: Vec<StudyEntry> = Vec::with_capacity(2 * selection.len());
        for index in selection.indices() {
            let card = &category.cards[index];
            entries.push(StudyEntry::forward(card));
            entries.push(StudyEntry::inverted(card));
        }
        if shuffle {
            entries.shuffle(rng);
        }
        Some(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, position: usize) -> &StudyEntry {
        &self.entries[position]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::types::card::Card;

    fn category() -> Category {
        Category {
            name: "Numbers".to_string(),
            cards: vec![
                Card {
                    key: "One".to_string(),
                    value: "Ek".to_string(),
                },
                Card {
                    key: "Two".to_string(),
                    value: "Do".to_string(),
                },
                Card {
                    key: "Three".to_string(),
                    value: "Teen".to_string(),
                },
            ],
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn entries(deck: &Deck) -> Vec<StudyEntry> {
        (0..deck.len()).map(|i| deck.entry(i).clone()).collect()
    }

    #[test]
    fn test_empty_selection_yields_no_deck() {
        let category = category();
        let mut selection = Selection::all(3);
        selection.deselect_all();
        assert!(Deck::build(&category, &selection, false, &mut rng()).is_none());
    }

    #[test]
    fn test_deck_size_is_twice_the_selection() {
        let category = category();
        let mut selection = Selection::all(3);
        let deck = Deck::build(&category, &selection, false, &mut rng()).unwrap();
        assert_eq!(deck.len(), 6);
        selection.toggle(1, false);
        let deck = Deck::build(&category, &selection, false, &mut rng()).unwrap();
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn test_pairing_follows_ascending_selection_order() {
        let category = category();
        let mut selection = Selection::all(3);
        selection.toggle(1, false);
        let deck = Deck::build(&category, &selection, false, &mut rng()).unwrap();
        assert_eq!(deck.entry(0), &StudyEntry::forward(&category.cards[0]));
        assert_eq!(deck.entry(1), &StudyEntry::inverted(&category.cards[0]));
        assert_eq!(deck.entry(2), &StudyEntry::forward(&category.cards[2]));
        assert_eq!(deck.entry(3), &StudyEntry::inverted(&category.cards[2]));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let category = category();
        let selection = Selection::all(3);
        let plain = Deck::build(&category, &selection, false, &mut rng()).unwrap();
        let shuffled = Deck::build(&category, &selection, true, &mut rng()).unwrap();
        assert_eq!(shuffled.len(), plain.len());
        let mut plain = entries(&plain);
        let mut shuffled = entries(&shuffled);
        plain.sort_by(|a, b| a.key.cmp(&b.key));
        shuffled.sort_by(|a, b| a.key.cmp(&b.key));
        assert_eq!(plain, shuffled);
    }

    #[test]
    fn test_shuffle_is_reproducible_from_the_seed() {
        let category = category();
        let selection = Selection::all(3);
        let a = Deck::build(&category, &selection, true, &mut rng()).unwrap();
        let b = Deck::build(&category, &selection, true, &mut rng()).unwrap();
        assert_eq!(entries(&a), entries(&b));
    }

    #[test]
    fn test_shuffle_spreads_entries_across_positions() {
        let category = category();
        let selection = Selection::all(3);
        let mut rng = rng();
        let trials = 6000;
        let mut counts = [0usize; 6];
        for _ in 0..trials {
            let deck = Deck::build(&category, &selection, true, &mut rng).unwrap();
            let position = (0..deck.len())
                .find(|&i| deck.entry(i) == &StudyEntry::forward(&category.cards[0]))
                .unwrap();
            counts[position] += 1;
        }
        // Expect roughly 1000 per position, with a generous margin.
        for count in counts {
            assert!((800..1200).contains(&count), "skewed shuffle: {counts:?}");
        }
    }

    #[test]
    fn test_unshuffled_build_is_deterministic() {
        let category = category();
        let selection = Selection::all(3);
        let a = Deck::build(&category, &selection, false, &mut rng()).unwrap();
        let b = Deck::build(&category, &selection, false, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(entries(&a), entries(&b));
    }
}
