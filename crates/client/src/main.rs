//! Duel client binary.
//!
//! Runs one bout without a window and prints what happened.
//!
//! # Examples
//!
//! ```bash
//! # Two chasing fighters with the shipped data
//! cargo run -p duel-client
//!
//! # Scripted exchange, tank against trapper
//! DUEL_P1=tank DUEL_P2=trapper DUEL_SCRIPT=opening_exchange cargo run -p duel-client
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use duel_content::ContentFactory;
use duel_core::Slot;
use duel_client::{ClientConfig, Hud, hud};
use duel_runtime::{Bout, ChaseInputProvider, ScriptedInputProvider};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Starting duel client");
    tracing::info!("Data directory: {}", config.data_dir.display());
    tracing::info!("Matchup: {} vs {}", config.p1, config.p2);

    // 1. Load content
    let content = ContentFactory::new(&config.data_dir);
    let mut sim = content.load_config()?;
    if let Some(seed) = config.seed {
        sim = sim.with_seed(seed);
    }
    let roster = content.load_roster()?;
    let controls = content.load_controls()?;
    for slot in [Slot::One, Slot::Two] {
        tracing::debug!("{} keys: {}", slot, hud::key_legend(controls.scheme(slot)));
    }

    // 2. Assemble the bout
    let builder = Bout::builder()
        .config(sim)
        .roster(roster)
        .archetype(Slot::One, config.p1)
        .archetype(Slot::Two, config.p2)
        .max_ticks(config.max_ticks);

    let builder = match &config.script {
        Some(name) => {
            let script = Arc::new(
                content
                    .load_script(name)
                    .with_context(|| format!("failed to load script {}", name))?,
            );
            tracing::info!("Script: {} ({} ticks)", script.name, script.len_ticks());
            builder
                .provider(Slot::One, ScriptedInputProvider::new(script.clone()))
                .provider(Slot::Two, ScriptedInputProvider::new(script))
        }
        None => {
            tracing::info!("No script set, both fighters chase");
            builder
                .provider(Slot::One, ChaseInputProvider::default())
                .provider(Slot::Two, ChaseInputProvider::default())
        }
    };
    let mut bout = builder.build().context("failed to assemble bout")?;

    // 3. Run and report
    let hud = Hud::new(config.hud_every);
    let outcome = bout.run(|report| {
        for line in hud.render(report) {
            println!("{}", line);
        }
    })?;
    tracing::info!("Bout finished after {} ticks: {:?}", bout.tick(), outcome);

    if config.summary {
        println!("{}", bout.summary().to_json()?);
    }

    Ok(())
}
