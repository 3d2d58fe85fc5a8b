//! The race bonus contract.
//!
//! Being a member of a race confers starting bonuses. Usually that is a
//! fixed adjustment (+2 Dexterity, -2 Constitution), but some races let the
//! player choose (+2 to one ability of your choice). A [`Race`] therefore
//! returns every candidate bonus and the character builder picks one.

use crate::ability::{AbilityBonus, AbilityScores};
use crate::error::{MechError, MechResult};
use crate::skill::SkillSet;

/// A playable race and the starting bonuses it offers.
pub trait Race {
    /// Display name of the race.
    fn name(&self) -> &str;

    /// The mutually exclusive ability bonuses a character may start with.
    ///
    /// Must not be empty. A race with a fixed bonus returns one candidate.
    fn starting_ability_bonus(&self) -> Vec<AbilityBonus>;

    /// The mutually exclusive skill bonuses a character may start with.
    ///
    /// Must not be empty. A race with no skill bonus returns one empty set.
    fn starting_skill_bonus(&self) -> Vec<SkillSet>;
}

/// A race's candidates, checked to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusOptions {
    /// Name of the race the options came from.
    pub race: String,
    /// Ability bonus candidates.
    pub abilities: Vec<AbilityBonus>,
    /// Skill bonus candidates.
    pub skills: Vec<SkillSet>,
}

impl BonusOptions {
    /// Query a race and validate its candidates.
    pub fn from_race(race: &dyn Race) -> MechResult<Self> {
        let abilities = race.starting_ability_bonus();
        let skills = race.starting_skill_bonus();
        if abilities.is_empty() {
            return Err(invalid(race.name(), "offers no ability bonus candidates"));
        }
        if skills.is_empty() {
            return Err(invalid(race.name(), "offers no skill bonus candidates"));
        }
        Ok(Self {
            race: race.name().to_string(),
            abilities,
            skills,
        })
    }

    /// Returns true if the player has to pick between ability or skill bonuses.
    pub fn has_choice(&self) -> bool {
        self.abilities.len() > 1 || self.skills.len() > 1
    }

    /// Pick one ability candidate and one skill candidate by index.
    pub fn choose(&self, ability_index: usize, skill_index: usize) -> MechResult<RaceChoice> {
        let ability = self.abilities.get(ability_index).ok_or_else(|| {
            invalid(
                &self.race,
                &format!(
                    "ability choice {ability_index} out of range (0..{})",
                    self.abilities.len()
                ),
            )
        })?;
        let skill = self.skills.get(skill_index).ok_or_else(|| {
            invalid(
                &self.race,
                &format!(
                    "skill choice {skill_index} out of range (0..{})",
                    self.skills.len()
                ),
            )
        })?;
        Ok(RaceChoice {
            race: self.race.clone(),
            ability: ability.clone(),
            skill: skill.clone(),
        })
    }
}

/// One selected ability bonus and one selected skill bonus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceChoice {
    /// Name of the race the choice came from.
    pub race: String,
    /// The chosen ability bonus.
    pub ability: AbilityBonus,
    /// The chosen skill bonus.
    pub skill: SkillSet,
}

impl RaceChoice {
    /// Apply the chosen ability bonus to a generated record.
    ///
    /// The input is untouched; fails if any score would go negative.
    pub fn apply(&self, scores: &AbilityScores) -> MechResult<AbilityScores> {
        tracing::debug!(
            race = %self.race,
            bonus = %self.ability,
            "applying racial ability bonus"
        );
        scores.with_bonus(&self.ability)
    }
}

/// Query a race, validate it, and pick one candidate of each kind.
pub fn choose_bonus(
    race: &dyn Race,
    ability_index: usize,
    skill_index: usize,
) -> MechResult<RaceChoice> {
    BonusOptions::from_race(race)?.choose(ability_index, skill_index)
}

fn invalid(race: &str, reason: &str) -> MechError {
    MechError::InvalidRace {
        race: race.to_string(),
        reason: reason.to_string(),
    }
}
