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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::web::state::ServerState;

#[derive(Debug, Deserialize)]
enum Action {
    SelectCategory,
    Previous,
    Next,
    Flip,
    Shuffle,
    #[serde(rename = "View All")]
    ViewAll,
    #[serde(rename = "Close")]
    CloseTable,
    ToggleRow,
    #[serde(rename = "Select All")]
    SelectAll,
    #[serde(rename = "Deselect All")]
    DeselectAll,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    category: Option<String>,
    index: Option<usize>,
    checked: Option<bool>,
}

pub async fn post_handler(State(state): State<ServerState>, Form(form): Form<FormData>) -> Redirect {
    let mut session = state.mutable.lock().unwrap();
    match form.action {
        Action::SelectCategory => match form.category {
            Some(name) => session.select_category(&name),
            None => log::error!("Category selection without a category name."),
        },
        Action::Previous => session.previous(),
        Action::Next => session.next(),
        Action::Flip => session.flip(),
        Action::Shuffle => session.shuffle(),
        Action::ViewAll => session.open_table(),
        Action::CloseTable => session.close_table(),
        Action::ToggleRow => match (form.index, form.checked) {
            (Some(index), Some(checked)) => session.toggle_row(index, checked),
            _ => log::error!("Row toggle without an index or a state."),
        },
        Action::SelectAll => session.select_all_rows(),
        Action::DeselectAll => session.deselect_all_rows(),
    }
    Redirect::to("/")
}
