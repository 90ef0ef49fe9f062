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

/// The current position and flip state within a deck. Navigation wraps
/// around unconditionally in both directions and always lands on the front
/// of the next card.
pub struct Cursor {
    position: usize,
    flipped: bool,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            position: 0,
            flipped: false,
        }
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.position = (self.position + 1) % len;
        self.flipped = false;
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.position = (self.position + len - 1) % len;
        self.flipped = false;
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// The 1-based progress string shown next to the card.
    pub fn counter(&self, len: usize) -> String {
        format!("{} / {}", self.position + 1, len)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
