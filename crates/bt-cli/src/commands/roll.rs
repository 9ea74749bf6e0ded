use std::path::Path;

use bt_core::ConditionalSample;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::RollConfig;
use crate::context::Context;
use crate::definition::Definition;
use crate::error::CliResult;

pub fn run(file: &Path, config: &RollConfig, context: &Context) -> CliResult<()> {
    let loot = Definition::load(file)?.build()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    tracing::debug!(
        seed = config.seed,
        times = config.times,
        context_keys = context.len(),
        "rolling"
    );

    for round in 1..=config.times {
        let values = loot.sample(&mut rng, context)?;
        if config.times > 1 {
            println!("  {}", format!("Roll {round}").bold());
        }
        if values.is_empty() {
            println!("  {}", "(nothing)".dimmed());
        }
        for value in values {
            println!("  {value}");
        }
    }

    Ok(())
}
