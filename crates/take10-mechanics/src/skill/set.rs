//! Per-skill values: ranks, bonuses, or racial adjustments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SkillClass;

/// A signed value for each skill, zero unless set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    values: BTreeMap<SkillClass, i32>,
}

impl SkillSet {
    /// An empty set (every skill at zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to one skill. Skills that end at zero are not stored.
    pub fn with(mut self, skill: SkillClass, delta: i32) -> Self {
        self.add(skill, delta);
        self
    }

    /// Add `delta` to one skill in place, saturating at the `i32` bounds.
    pub fn add(&mut self, skill: SkillClass, delta: i32) {
        let total = self.get(skill).saturating_add(delta);
        if total == 0 {
            self.values.remove(&skill);
        } else {
            self.values.insert(skill, total);
        }
    }

    /// The value for one skill.
    pub fn get(&self, skill: SkillClass) -> i32 {
        self.values.get(&skill).copied().unwrap_or(0)
    }

    /// Iterate the non-zero values in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillClass, i32)> + '_ {
        self.values.iter().map(|(s, v)| (*s, *v))
    }

    /// Returns true if every skill is at zero.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// One candidate per listed skill: "+`amount` to one of these skills".
    pub fn any_one_of(skills: &[SkillClass], amount: i32) -> Vec<Self> {
        skills
            .iter()
            .map(|s| Self::new().with(*s, amount))
            .collect()
    }
}

impl std::fmt::Display for SkillSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let parts: Vec<String> = self.iter().map(|(s, v)| format!("{v:+} {s}")).collect();
        write!(f, "{}", parts.join(", "))
    }
}
