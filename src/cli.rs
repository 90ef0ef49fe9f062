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

use clap::Parser;

use crate::cmd::check::check_collection;
use crate::cmd::export::export_collection;
use crate::cmd::stats::print_stats;
use crate::error::Fallible;
use crate::web::server::start_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Study a collection in the browser.
    Study {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// The port to serve the study session on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Check that a collection's deck files are well-formed.
    Check {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
    /// Print card counts for each category in a collection.
    Stats {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
    /// Export a collection as JSON.
    Export {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Study { directory, port } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(start_server(directory, port))
        }
        Command::Check { directory } => check_collection(directory),
        Command::Stats { directory } => print_stats(directory),
        Command::Export { directory } => export_collection(directory),
    }
}
