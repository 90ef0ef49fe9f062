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

use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;

pub fn export_collection(directory: Option<String>) -> Fallible<()> {
    let coll: Collection = Collection::new(directory)?;
    let export: Export = get_export(&coll);
    let json: String = serde_json::to_string_pretty(&export)?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Export {
    categories: Vec<CategoryExport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryExport {
    name: String,
    card_count: usize,
    cards: Vec<CardExport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardExport {
    key: String,
    value: String,
}

fn get_export(coll: &Collection) -> Export {
    let categories = coll
        .categories
        .iter()
        .map(|category| CategoryExport {
            name: category.name.clone(),
            card_count: category.cards.len(),
            cards: category
                .cards
                .iter()
                .map(|card| CardExport {
                    key: card.key.clone(),
                    value: card.value.clone(),
                })
                .collect(),
        })
        .collect();
    Export { categories }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_test_directory() {
        let coll = Collection::new(Some("./test".to_string())).unwrap();
        let export = get_export(&coll);
        let json = serde_json::to_string_pretty(&export).unwrap();
        assert!(json.contains("\"Greetings\""));
        assert!(json.contains("\"cardCount\": 2"));
        assert!(json.contains("\"Namaste\""));
    }
}
