use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use take10_mechanics::{AbilityClass, SkillClass, ability_for, skills_for};

pub fn list(ability: Option<&str>) -> Result<(), String> {
    let skills = match ability {
        Some(name) => {
            let ability = name.parse::<AbilityClass>().map_err(|e| e.to_string())?;
            skills_for(ability)
        }
        None => SkillClass::ALL.to_vec(),
    };

    if skills.is_empty() {
        println!("  No skills found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Skill", "Ability"]);
    for skill in &skills {
        table.add_row(vec![skill.display_name(), ability_for(*skill).name()]);
    }

    println!("{table}");
    println!();
    println!("  {} skills", skills.len());
    Ok(())
}

pub fn show(name: &str) -> Result<(), String> {
    let skill = name.parse::<SkillClass>().map_err(|e| e.to_string())?;
    let ability = ability_for(skill);
    println!(
        "  {} is governed by {}",
        skill.display_name().bold(),
        ability.name().cyan().bold()
    );
    Ok(())
}
