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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::markdown::markdown_to_html;
use crate::markdown::markdown_to_html_inline;
use crate::session::Session;
use crate::session::view::View;
use crate::types::entry::StudyEntry;
use crate::web::state::ServerState;
use crate::web::template::page_template;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let session = state.mutable.lock().unwrap();
    let view = session.view();
    let main = match &view {
        View::NoCategory => html! {
            div.loading {
                "Choose a category to start studying."
            }
        },
        View::EmptySelection => html! {
            div.loading {
                "No cards selected. Pick cards from the \"View All\" table."
            }
        },
        View::Entry {
            entry,
            flipped,
            counter,
        } => card(entry, *flipped, counter),
    };
    let controls = match &view {
        View::NoCategory => html! {},
        View::EmptySelection => controls_without_navigation(),
        View::Entry { .. } => controls_with_navigation(),
    };
    let modal = if session.table_open() {
        table_modal(&session)
    } else {
        html! {}
    };
    let body = html! {
        div.root {
            div.header {
                h1 { "flipcards" }
                (category_form(&session))
            }
            (main)
            (controls)
            (modal)
        }
    };
    let html = page_template(body);
    (StatusCode::OK, Html(html.into_string()))
}

fn category_form(session: &Session) -> Markup {
    let active = session.active_category_name();
    html! {
        form.category-form action="/" method="post" {
            input type="hidden" name="action" value="SelectCategory";
            select #categorySelector name="category" {
                option value="" disabled selected[active.is_none()] {
                    "Select a category"
                }
                @for name in session.category_names() {
                    option value=(name) selected[active == Some(name)] {
                        (name)
                    }
                }
            }
            noscript {
                input type="submit" value="Go";
            }
        }
    }
}

fn card(entry: &StudyEntry, flipped: bool, counter: &str) -> Markup {
    let key = markdown_to_html(&entry.key);
    let value = markdown_to_html(&entry.value);
    html! {
        div.card {
            div.content {
                div .question .rich-text {
                    (PreEscaped(key))
                }
                @if flipped {
                    div .answer .rich-text {
                        (PreEscaped(value))
                    }
                } @else {
                    div .answer .rich-text {}
                }
            }
            div.progress {
                (counter)
            }
        }
    }
}

fn controls_with_navigation() -> Markup {
    html! {
        div.controls {
            form action="/" method="post" {
                input id="previous" type="submit" name="action" value="Previous";
                input id="flip" type="submit" name="action" value="Flip";
                input id="next" type="submit" name="action" value="Next";
                div.spacer {}
                input id="shuffle" type="submit" name="action" value="Shuffle";
                input id="view-all" type="submit" name="action" value="View All";
            }
        }
    }
}

fn controls_without_navigation() -> Markup {
    html! {
        div.controls {
            form action="/" method="post" {
                input id="shuffle" type="submit" name="action" value="Shuffle";
                input id="view-all" type="submit" name="action" value="View All";
            }
        }
    }
}

fn table_modal(session: &Session) -> Markup {
    let name = session.active_category_name().unwrap_or_default();
    let rows = session.table_rows();
    html! {
        div.modal-overlay {
            div.modal {
                div.modal-header {
                    h2 {
                        "All \"" (name) "\" Cards"
                    }
                    form action="/" method="post" {
                        input id="select-all" type="submit" name="action" value="Select All";
                        input id="deselect-all" type="submit" name="action" value="Deselect All";
                        input id="close" type="submit" name="action" value="Close";
                    }
                }
                table.cards {
                    thead {
                        tr {
                            th { "Study" }
                            th { "Prompt" }
                            th { "Reveal" }
                        }
                    }
                    tbody {
                        @for row in &rows {
                            tr {
                                td {
                                    form action="/" method="post" {
                                        input type="hidden" name="action" value="ToggleRow";
                                        input type="hidden" name="index" value=(row.index);
                                        input type="hidden" name="checked" value=(!row.checked);
                                        input.card-checkbox type="checkbox" checked[row.checked];
                                        noscript {
                                            input type="submit" value="Apply";
                                        }
                                    }
                                }
                                td .rich-text {
                                    (PreEscaped(markdown_to_html_inline(&row.key)))
                                }
                                td .rich-text {
                                    (PreEscaped(markdown_to_html_inline(&row.value)))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
