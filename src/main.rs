use std::env;

use anyhow::Context;
use pellcalc::{init_tracing, Engine, EngineConfig, Values};
use tracing::info;

/// Environment variable naming an optional JSON engine config.
const CONFIG_ENV: &str = "PELLCALC_CONFIG";

fn load_config() -> anyhow::Result<EngineConfig> {
    match env::var(CONFIG_ENV) {
        Ok(path) => {
            info!(%path, "loading engine config");
            EngineConfig::from_path(&path).with_context(|| format!("reading {CONFIG_ENV}"))
        }
        Err(_) => Ok(EngineConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let engine = Engine::new(load_config()?)?;
    let defaults = engine.default_values();

    // Parameters and their current bounds at the defaults
    println!("Parameter                                  | Start       | Bounds");
    println!("-------------------------------------------|-------------|------------------");
    for p in engine.list_parameters() {
        let start = match (p.start.as_number(), p.start.as_label()) {
            (Some(n), _) => format!("{n}"),
            (_, Some(s)) => s.to_string(),
            _ => String::new(),
        };
        let bounds = match engine.bounds_of(p.id, &defaults) {
            Ok((min, max)) => format!("[{min}, {max}]"),
            Err(_) => "toggle".to_string(),
        };
        println!("{:<42} | {:>11} | {}", p.name, start, bounds);
    }

    // Every calculator at the defaults
    println!("\nCalculator                   | Grant");
    println!("-----------------------------|--------");
    for (id, grant) in engine.evaluate_all(&defaults)? {
        let name = engine.calculator(id)?.name;
        println!("{:<28} | {:>6.0}", name, grant);
    }

    // Income sweep for a family of four with two children
    println!("\n   AGI  | {}", column_headers(&engine));
    println!("--------|{}", "-".repeat(engine.list_calculators().len() * 10));
    let mut values: Values = defaults.clone();
    values.insert("fam", 4.0);
    values.insert("chi", 2.0);
    for step in 0..=12 {
        let agi = f64::from(step) * 5_000.0;
        values.insert("agi", agi);
        let row = engine
            .evaluate_all(&values)?
            .into_iter()
            .map(|(_, g)| format!("{g:>9.0}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:>7} | {}", agi, row);
    }

    Ok(())
}

fn column_headers(engine: &Engine) -> String {
    engine
        .list_calculators()
        .iter()
        .map(|c| format!("{:>9}", c.id.chars().take(9).collect::<String>()))
        .collect::<Vec<_>>()
        .join(" ")
}
