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

use crate::types::card::Card;

/// One directional prompt/reveal pairing derived from a card. Each card
/// yields two entries: the forward entry shows the key and reveals the
/// value, the inverted entry shows the value and reveals the key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyEntry {
    pub key: String,
    pub value: String,
}

impl StudyEntry {
    pub fn forward(card: &Card) -> Self {
        Self {
            key: card.key.clone(),
            value: card.value.clone(),
        }
    }

    pub fn inverted(card: &Card) -> Self {
        Self {
            key: card.value.clone(),
            value: card.key.clone(),
        }
    }
}
