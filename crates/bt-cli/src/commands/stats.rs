use std::collections::BTreeMap;
use std::path::Path;

use bt_core::ConditionalSample;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::RollConfig;
use crate::context::Context;
use crate::definition::Definition;
use crate::error::CliResult;

pub fn run(file: &Path, config: &RollConfig, context: &Context) -> CliResult<()> {
    let loot = Definition::load(file)?.build()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut produced = 0u64;
    for _ in 0..config.samples {
        for value in loot.sample(&mut rng, context)? {
            *counts.entry(value).or_default() += 1;
            produced += 1;
        }
    }

    println!(
        "  {} {}",
        "Stats".bold(),
        format!("({} samples, seed={})", config.samples, config.seed).dimmed()
    );
    if !context.is_empty() {
        let pairs: Vec<String> = context.iter().map(|(k, v)| format!("{k}={v}")).collect();
        println!("  Context: {}", pairs.join(", "));
    }

    if counts.is_empty() {
        println!("  {}", "No values produced.".dimmed());
        return Ok(());
    }

    let mut rows: Vec<(String, u64)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let samples = f64::from(config.samples);
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Value", "Count", "Per Sample", "Share"]);
    for (value, count) in rows {
        let count_f = count as f64;
        table.add_row(vec![
            value,
            count.to_string(),
            format!("{:.3}", count_f / samples),
            format!("{:.1}%", count_f * 100.0 / produced as f64),
        ]);
    }
    println!("{table}");
    println!("  {produced} values produced");

    Ok(())
}
