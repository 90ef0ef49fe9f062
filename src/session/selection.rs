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

use std::collections::BTreeSet;

/// The set of card indices chosen for study within the active category.
/// Every index is within `[0, card_count)`.
pub struct Selection {
    indices: BTreeSet<usize>,
    card_count: usize,
}

impl Selection {
    /// A selection covering every card of a category. Category changes reset
    /// the selection through this constructor.
    pub fn all(card_count: usize) -> Self {
        Self {
            indices: (0..card_count).collect(),
            card_count,
        }
    }

    /// Adds or removes a single index. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize, included: bool) {
        if index >= self.card_count {
            return;
        }
        if included {
            self.indices.insert(index);
        } else {
            self.indices.remove(&index);
        }
    }

    pub fn select_all(&mut self) {
        self.indices = (0..self.card_count).collect();
    }

    pub fn deselect_all(&mut self) {
        self.indices.clear();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// The selected indices in ascending order. The order is significant: it
    /// determines deck construction order before shuffling.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
