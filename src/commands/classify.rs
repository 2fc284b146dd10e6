//! Classify command handler - local/external classification of paths

use crate::cli::{ClassifyArgs, OutputFormat};
use crate::commands::{banner, to_json, CommandContext};
use crate::error::Result;
use crate::locality::LocalityIndex;

/// Run the classify command
pub fn run_classify(args: &ClassifyArgs, ctx: &CommandContext) -> Result<String> {
    let index = LocalityIndex::from_locations(&args.projects);

    let mut prefixes: Vec<&str> = index.prefixes().collect();
    prefixes.sort_unstable();

    let results: Vec<(&str, bool)> = args
        .paths
        .iter()
        .map(|path| (path.as_str(), index.is_local(path)))
        .collect();

    match ctx.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = results
                .iter()
                .map(|(path, local)| serde_json::json!({ "path": path, "local": local }))
                .collect();
            let value = serde_json::json!({
                "_type": "classification",
                "prefixes": prefixes,
                "results": entries,
            });
            to_json(&value)
        }
        OutputFormat::Text => {
            let mut output = banner("TABSWEEP CLASSIFY");
            if prefixes.is_empty() {
                output.push_str("prefixes: (none, every path is external)\n\n");
            } else {
                output.push_str("prefixes:\n");
                for prefix in &prefixes {
                    output.push_str(&format!("  - {}\n", prefix));
                }
                output.push('\n');
            }

            for (path, local) in &results {
                let label = if *local { "local" } else { "external" };
                output.push_str(&format!("{:<9} {}\n", label, path));
            }
            Ok(output)
        }
    }
}
