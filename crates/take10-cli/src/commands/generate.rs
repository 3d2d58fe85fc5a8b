use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use take10_mechanics::{
    AbilityClass, AbilityScores, GenerationConfig, GenerationParams, MechError, registry,
};

/// Flags for `take10 generate`, as parsed by clap.
pub struct GenerateArgs {
    pub strategy: Option<String>,
    pub seed: Option<u64>,
    pub count: u32,
    pub params: Vec<String>,
    pub config: Option<PathBuf>,
    pub json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    strategy: &'a str,
    seed: Option<u64>,
    scores: &'a [AbilityScores],
}

pub fn run(args: &GenerateArgs) -> Result<(), String> {
    if args.count == 0 {
        return Err("--count must be at least 1".into());
    }

    let config = build_config(args).map_err(|e| e.to_string())?;
    tracing::debug!(
        strategy = %config.strategy,
        seed = ?config.seed,
        params = config.params.len(),
        count = args.count,
        "resolved generation config"
    );
    let strategy = registry()
        .get(&config.strategy)
        .map_err(|e| e.to_string())?;

    let mut rng = config.rng();
    let records = (0..args.count)
        .map(|_| registry().generate(strategy.name(), &config.params, &mut rng))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    if args.json {
        let output = JsonOutput {
            strategy: strategy.name(),
            seed: config.seed,
            scores: &records,
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    println!(
        "  {} {}",
        strategy.name().bold(),
        format!("({})", strategy.description()).dimmed()
    );
    println!();
    println!("{}", score_table(&records));

    Ok(())
}

/// Config file first, then explicit flags on top.
fn build_config(args: &GenerateArgs) -> Result<GenerationConfig, MechError> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::load(path)?,
        None => GenerationConfig::default(),
    };

    if let Some(strategy) = &args.strategy {
        config.strategy = strategy.clone();
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    let overrides = args
        .params
        .iter()
        .map(|p| GenerationParams::parse_assignment(p.as_str()))
        .collect::<Result<GenerationParams, _>>()?;
    config.params.merge(overrides);

    Ok(config)
}

fn score_table(records: &[AbilityScores]) -> Table {
    let single = records.len() == 1;

    let mut header = vec!["Ability".to_string()];
    if single {
        header.push("Score".to_string());
        header.push("Mod".to_string());
    } else {
        header.extend((1..=records.len()).map(|i| format!("#{i}")));
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);

    for ability in AbilityClass::ALL {
        let mut row = vec![ability.name().to_string()];
        row.extend(records.iter().map(|r| r.get(ability).to_string()));
        if let [only] = records {
            row.push(format!("{:+}", only.modifier(ability)));
        }
        table.add_row(row);
    }

    let mut totals = vec!["Total".to_string()];
    totals.extend(records.iter().map(|r| r.total().to_string()));
    if single {
        totals.push(String::new());
    }
    table.add_row(totals);

    table
}
