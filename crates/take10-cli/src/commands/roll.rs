use colored::Colorize;

use take10_mechanics::{DiceExpr, seeded_rng};

pub fn run(expr: &str, seed: Option<u64>) -> Result<(), String> {
    let expr = expr.parse::<DiceExpr>().map_err(|e| e.to_string())?;
    let mut rng = seeded_rng(seed);

    let values = expr.roll(&mut rng).map_err(|e| e.to_string())?.into_values();
    let total: u64 = values.iter().map(|v| u64::from(*v)).sum();
    let shown: Vec<String> = values.iter().map(|v| v.to_string()).collect();

    println!(
        "  {}: [{}] = {}",
        expr.to_string().bold(),
        shown.join(", "),
        total.to_string().green().bold()
    );

    Ok(())
}
