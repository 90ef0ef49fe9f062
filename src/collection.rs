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

use std::env::current_dir;
use std::path::PathBuf;
use std::time::Instant;

use crate::error::Fallible;
use crate::error::fail;
use crate::parser::parse_collection;
use crate::types::category::Category;

pub struct Collection {
    pub directory: PathBuf,
    pub categories: Vec<Category>,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let categories = {
            log::debug!("Loading collection...");
            let start = Instant::now();
            let categories = parse_collection(&directory)?;
            let end = Instant::now();
            let duration = end.duration_since(start).as_millis();
            log::debug!("Collection loaded in {duration}ms.");
            categories
        };

        Ok(Self {
            directory,
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_existent_directory() {
        let result = Collection::new(Some("./derpherp".to_string()));
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }

    #[test]
    fn test_test_directory() {
        let coll = Collection::new(Some("./test".to_string())).unwrap();
        assert_eq!(coll.categories.len(), 2);
        assert_eq!(coll.categories[0].name, "Greetings");
        assert_eq!(coll.categories[1].name, "Numbers");
    }
}
