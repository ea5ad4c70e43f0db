use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answers::Role;

/// Counts and totals of the S-AS Part-II forced choices, split by the side
/// that was selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrientationTally {
    pub goal_count: u32,
    pub anti_goal_count: u32,
    pub goal_total: f64,
    pub anti_goal_total: f64,
}

impl OrientationTally {
    pub fn total_selections(&self) -> u32 {
        self.goal_count + self.anti_goal_count
    }

    pub fn record(&mut self, role: Role, score: f64) {
        match role {
            Role::Scopo => {
                self.goal_count += 1;
                self.goal_total += score;
            }
            Role::Antiscopo => {
                self.anti_goal_count += 1;
                self.anti_goal_total += score;
            }
        }
    }

    pub fn count_for(&self, role: Role) -> u32 {
        match role {
            Role::Scopo => self.goal_count,
            Role::Antiscopo => self.anti_goal_count,
        }
    }

    /// Whole-number share of selections for `role`, 0 when nothing was
    /// selected.
    pub fn percentage(&self, role: Role) -> u32 {
        let total = self.total_selections();
        if total == 0 {
            return 0;
        }
        (self.count_for(role) as f64 / total as f64 * 100.0 + 0.5).floor() as u32
    }

    /// The side with strictly more selections, if any.
    pub fn dominant(&self) -> Option<Role> {
        use std::cmp::Ordering;
        match self.goal_count.cmp(&self.anti_goal_count) {
            Ordering::Greater => Some(Role::Scopo),
            Ordering::Less => Some(Role::Antiscopo),
            Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrientationIntensity {
    /// Dominant side above 70 % of selections.
    Strong,
    Mild,
    Balanced,
    Insufficient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrientationSummary {
    pub tally: OrientationTally,
    pub goal_percentage: u32,
    pub anti_goal_percentage: u32,
    pub dominant: Option<Role>,
    pub intensity: OrientationIntensity,
    pub narrative: String,
}
