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

use crate::types::entry::StudyEntry;

/// What the presentation layer should draw for the main card area. The core
/// never renders anything itself: it hands one of these to the renderer
/// after every event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// No active category. The renderer shows the idle prompt and hides
    /// navigation and the table view controls.
    NoCategory,
    /// A category is active but no cards are selected. Navigation is not
    /// possible until the selection is non-empty again.
    EmptySelection,
    /// The entry under the cursor, its flip state, and the 1-based progress
    /// counter.
    Entry {
        entry: StudyEntry,
        flipped: bool,
        counter: String,
    },
}

/// One row of the bulk-selection table: every card of the active category
/// appears, checked when it is part of the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub index: usize,
    pub key: String,
    pub value: String,
    pub checked: bool,
}
