//! The skill taxonomy and the skill → governing ability map.
//!
//! The mapping is an exhaustive `match`, so adding a skill without
//! assigning it an ability is a compile error rather than a runtime miss.

pub mod set;

pub use set::SkillSet;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ability::AbilityClass;
use crate::error::MechError;

/// The standard Pathfinder skills.
///
/// Discriminants are stable and match the serialized ordinals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum SkillClass {
    /// Tumbling, balancing and jumping.
    Acrobatics = 0,
    /// Estimating the value of goods.
    Appraise = 1,
    /// Lying and feinting.
    Bluff = 2,
    /// Scaling walls and cliffs.
    Climb = 3,
    /// Making items by hand.
    Craft = 4,
    /// Persuading and gathering information.
    Diplomacy = 5,
    /// Disarming traps and opening locks.
    DisableDevice = 6,
    /// Changing appearance.
    Disguise = 7,
    /// Slipping bonds and grapples.
    EscapeArtist = 8,
    /// Maneuvering in the air.
    Fly = 9,
    /// Training and directing animals.
    HandleAnimal = 10,
    /// Treating wounds and ailments.
    Heal = 11,
    /// Frightening others into compliance.
    Intimidate = 12,
    /// Knowledge (Arcana).
    KnowledgeArcana = 13,
    /// Knowledge (Dungeoneering).
    KnowledgeDungeoneering = 14,
    /// Knowledge (Engineering).
    KnowledgeEngineering = 15,
    /// Knowledge (Geography).
    KnowledgeGeography = 16,
    /// Knowledge (History).
    KnowledgeHistory = 17,
    /// Knowledge (Local).
    KnowledgeLocal = 18,
    /// Knowledge (Nature).
    KnowledgeNature = 19,
    /// Knowledge (Nobility).
    KnowledgeNobility = 20,
    /// Knowledge (Planes).
    KnowledgePlanes = 21,
    /// Knowledge (Religion).
    KnowledgeReligion = 22,
    /// Languages and forgeries.
    Linguistics = 23,
    /// Noticing things.
    Perception = 24,
    /// Entertaining an audience.
    Perform = 25,
    /// Earning a living at a trade.
    Profession = 26,
    /// Riding mounts.
    Ride = 27,
    /// Reading intentions and spotting lies.
    SenseMotive = 28,
    /// Palming, pickpocketing and concealing objects.
    SleightOfHand = 29,
    /// Identifying spells and magic items.
    Spellcraft = 30,
    /// Moving unseen and unheard.
    Stealth = 31,
    /// Tracking and living off the land.
    Survival = 32,
    /// Swimming.
    Swim = 33,
    /// Activating magic items one could not otherwise use.
    UseMagicDevice = 34,
}

/// Number of skills in the taxonomy.
pub const SKILL_COUNT: usize = 35;

impl SkillClass {
    /// Every skill, in ordinal order.
    pub const ALL: [SkillClass; SKILL_COUNT] = [
        Self::Acrobatics,
        Self::Appraise,
        Self::Bluff,
        Self::Climb,
        Self::Craft,
        Self::Diplomacy,
        Self::DisableDevice,
        Self::Disguise,
        Self::EscapeArtist,
        Self::Fly,
        Self::HandleAnimal,
        Self::Heal,
        Self::Intimidate,
        Self::KnowledgeArcana,
        Self::KnowledgeDungeoneering,
        Self::KnowledgeEngineering,
        Self::KnowledgeGeography,
        Self::KnowledgeHistory,
        Self::KnowledgeLocal,
        Self::KnowledgeNature,
        Self::KnowledgeNobility,
        Self::KnowledgePlanes,
        Self::KnowledgeReligion,
        Self::Linguistics,
        Self::Perception,
        Self::Perform,
        Self::Profession,
        Self::Ride,
        Self::SenseMotive,
        Self::SleightOfHand,
        Self::Spellcraft,
        Self::Stealth,
        Self::Survival,
        Self::Swim,
        Self::UseMagicDevice,
    ];

    /// Stable ordinal of this skill.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// The ability that governs this skill.
    pub fn ability(self) -> AbilityClass {
        ability_for(self)
    }

    /// Upper-case identifier, e.g. `"SLEIGHT_OF_HAND"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Acrobatics => "ACROBATICS",
            Self::Appraise => "APPRAISE",
            Self::Bluff => "BLUFF",
            Self::Climb => "CLIMB",
            Self::Craft => "CRAFT",
            Self::Diplomacy => "DIPLOMACY",
            Self::DisableDevice => "DISABLE_DEVICE",
            Self::Disguise => "DISGUISE",
            Self::EscapeArtist => "ESCAPE_ARTIST",
            Self::Fly => "FLY",
            Self::HandleAnimal => "HANDLE_ANIMAL",
            Self::Heal => "HEAL",
            Self::Intimidate => "INTIMIDATE",
            Self::KnowledgeArcana => "KNOWLEDGE_ARCANA",
            Self::KnowledgeDungeoneering => "KNOWLEDGE_DUNGEONEERING",
            Self::KnowledgeEngineering => "KNOWLEDGE_ENGINEERING",
            Self::KnowledgeGeography => "KNOWLEDGE_GEOGRAPHY",
            Self::KnowledgeHistory => "KNOWLEDGE_HISTORY",
            Self::KnowledgeLocal => "KNOWLEDGE_LOCAL",
            Self::KnowledgeNature => "KNOWLEDGE_NATURE",
            Self::KnowledgeNobility => "KNOWLEDGE_NOBILITY",
            Self::KnowledgePlanes => "KNOWLEDGE_PLANES",
            Self::KnowledgeReligion => "KNOWLEDGE_RELIGION",
            Self::Linguistics => "LINGUISTICS",
            Self::Perception => "PERCEPTION",
            Self::Perform => "PERFORM",
            Self::Profession => "PROFESSION",
            Self::Ride => "RIDE",
            Self::SenseMotive => "SENSE_MOTIVE",
            Self::SleightOfHand => "SLEIGHT_OF_HAND",
            Self::Spellcraft => "SPELLCRAFT",
            Self::Stealth => "STEALTH",
            Self::Survival => "SURVIVAL",
            Self::Swim => "SWIM",
            Self::UseMagicDevice => "USE_MAGIC_DEVICE",
        }
    }

    /// Human-readable name, e.g. `"Knowledge (Arcana)"`.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Acrobatics => "Acrobatics",
            Self::Appraise => "Appraise",
            Self::Bluff => "Bluff",
            Self::Climb => "Climb",
            Self::Craft => "Craft",
            Self::Diplomacy => "Diplomacy",
            Self::DisableDevice => "Disable Device",
            Self::Disguise => "Disguise",
            Self::EscapeArtist => "Escape Artist",
            Self::Fly => "Fly",
            Self::HandleAnimal => "Handle Animal",
            Self::Heal => "Heal",
            Self::Intimidate => "Intimidate",
            Self::KnowledgeArcana => "Knowledge (Arcana)",
            Self::KnowledgeDungeoneering => "Knowledge (Dungeoneering)",
            Self::KnowledgeEngineering => "Knowledge (Engineering)",
            Self::KnowledgeGeography => "Knowledge (Geography)",
            Self::KnowledgeHistory => "Knowledge (History)",
            Self::KnowledgeLocal => "Knowledge (Local)",
            Self::KnowledgeNature => "Knowledge (Nature)",
            Self::KnowledgeNobility => "Knowledge (Nobility)",
            Self::KnowledgePlanes => "Knowledge (Planes)",
            Self::KnowledgeReligion => "Knowledge (Religion)",
            Self::Linguistics => "Linguistics",
            Self::Perception => "Perception",
            Self::Perform => "Perform",
            Self::Profession => "Profession",
            Self::Ride => "Ride",
            Self::SenseMotive => "Sense Motive",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Spellcraft => "Spellcraft",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
            Self::Swim => "Swim",
            Self::UseMagicDevice => "Use Magic Device",
        }
    }
}

impl std::fmt::Display for SkillClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SkillClass {
    type Err = MechError;

    /// Accepts `"Sleight of Hand"`, `"sleight_of_hand"`, `"Knowledge (Arcana)"`,
    /// `"knowledge-arcana"` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|skill| skill.name() == wanted)
            .ok_or_else(|| MechError::InvalidConfig(format!("unknown skill: {}", s.trim())))
    }
}

fn normalize(s: &str) -> String {
    s.split(|c: char| c.is_whitespace() || matches!(c, '_' | '-' | '(' | ')'))
        .filter(|part| !part.is_empty())
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// The ability that governs a skill. Total over [`SkillClass`].
pub fn ability_for(skill: SkillClass) -> AbilityClass {
    use SkillClass::*;

    match skill {
        Acrobatics | DisableDevice | EscapeArtist | Fly | Ride | SleightOfHand | Stealth => {
            AbilityClass::Dexterity
        }
        Appraise | Craft | KnowledgeArcana | KnowledgeDungeoneering | KnowledgeEngineering
        | KnowledgeGeography | KnowledgeHistory | KnowledgeLocal | KnowledgeNature
        | KnowledgeNobility | KnowledgePlanes | KnowledgeReligion | Linguistics | Spellcraft => {
            AbilityClass::Intelligence
        }
        Bluff | Diplomacy | Disguise | HandleAnimal | Perform | UseMagicDevice | Intimidate => {
            AbilityClass::Charisma
        }
        Swim | Climb => AbilityClass::Strength,
        Heal | Perception | Profession | SenseMotive | Survival => AbilityClass::Wisdom,
    }
}

/// All skills governed by one ability, in ordinal order.
///
/// Constitution governs no skill, so its list is empty.
pub fn skills_for(ability: AbilityClass) -> Vec<SkillClass> {
    SkillClass::ALL
        .into_iter()
        .filter(|s| ability_for(*s) == ability)
        .collect()
}
