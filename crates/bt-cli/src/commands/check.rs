use std::path::Path;

use bt_core::{Policy, Table};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table as Grid};

use crate::definition::Definition;
use crate::error::CliResult;

pub fn run(file: &Path) -> CliResult<()> {
    let definition = Definition::load(file)?;
    let loot = definition.build()?;

    let mut grid = Grid::new();
    grid.set_content_arrangement(ContentArrangement::Dynamic);
    grid.set_header(vec!["#", "Policy", "Rolls", "Entries", "Total Weight", "Conditions"]);

    for (index, (pool, source)) in loot.pools().iter().zip(&definition.pools).enumerate() {
        let conditions = if source.when.is_empty() {
            "-".to_string()
        } else {
            source.when
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        // chance weights are independent probabilities; their sum means nothing
        let total_weight = match pool.policy() {
            Policy::Weighted => pool.entries().total_weight().to_string(),
            Policy::Chance => "-".to_string(),
        };
        grid.add_row(vec![
            (index + 1).to_string(),
            pool.policy().to_string(),
            pool.rolls().to_string(),
            pool.len().to_string(),
            total_weight,
            conditions,
        ]);
    }

    println!("  {} {}", "Definition".bold(), file.display());
    println!("{grid}");
    println!(
        "  All checks passed: {} pool{}.",
        loot.len(),
        if loot.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
