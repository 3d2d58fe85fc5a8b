use comfy_table::{ContentArrangement, Table};

use take10_mechanics::registry;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Strategy", "Dice", "Range"]);

    for strategy in registry().iter() {
        let range = strategy.range();
        table.add_row(vec![
            strategy.name().to_string(),
            strategy.description().to_string(),
            format!("{}-{}", range.start(), range.end()),
        ]);
    }

    println!("{table}");
    Ok(())
}
