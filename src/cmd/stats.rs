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

use crate::collection::Collection;
use crate::error::Fallible;

pub fn print_stats(directory: Option<String>) -> Fallible<()> {
    let coll: Collection = Collection::new(directory)?;
    println!("collection: {}", coll.directory.display());
    let mut total = 0;
    for category in &coll.categories {
        println!("{}: {} cards", category.name, category.cards.len());
        total += category.cards.len();
    }
    println!("total: {total} cards in {} categories", coll.categories.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::print_stats;

    #[test]
    fn test_test_directory() {
        assert!(print_stats(Some("./test".to_string())).is_ok());
    }
}
