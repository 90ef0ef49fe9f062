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

use std::collections::HashSet;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::category::Category;

/// Parses the contents of a single deck file.
pub fn parse_category(content: &str) -> Fallible<Category> {
    let category: Category = toml::from_str(content)?;
    if category.name.trim().is_empty() {
        return fail("category name is empty.");
    }
    Ok(category)
}

/// Walks the collection directory and parses every `.toml` deck file, in
/// lexicographic path order. Category order follows file order, card order
/// follows the `[[cards]]` array order.
pub fn parse_collection(directory: &Path) -> Fallible<Vec<Category>> {
    let mut categories: Vec<Category> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for entry in WalkDir::new(directory).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            let content = std::fs::read_to_string(path)?;
            let category = parse_category(&content)
                .map_err(|e| ErrorReport::new(format!("{}: {}", path.display(), e.message())))?;
            if !seen.insert(category.name.clone()) {
                return fail(format!("duplicate category name: {}", category.name));
            }
            categories.push(category);
        }
    }
    if categories.is_empty() {
        return fail("no deck files found.");
    }
    Ok(categories)
}
