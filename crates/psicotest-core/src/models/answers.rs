use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The instruments supported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentKind {
    /// Personality Inventory for DSM-5, 220 items rated 0–3.
    Pid5,
    /// Scopo-Antiscopo questionnaire, 20 statement pairs rated 0–4.
    Sas,
}

impl InstrumentKind {
    pub fn id(&self) -> &'static str {
        match self {
            InstrumentKind::Pid5 => "pid5",
            InstrumentKind::Sas => "sas",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InstrumentKind::Pid5 => "PID-5",
            InstrumentKind::Sas => "S-AS",
        }
    }
}

impl FromStr for InstrumentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pid5" => Ok(InstrumentKind::Pid5),
            "sas" => Ok(InstrumentKind::Sas),
            other => Err(CoreError::UnknownInstrument(other.to_string())),
        }
    }
}

/// Side of an S-AS statement pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Role {
    /// Scopo: the goal-oriented statement.
    #[serde(rename = "S")]
    Scopo,
    /// Antiscopo: the avoidance-oriented statement.
    #[serde(rename = "AS")]
    Antiscopo,
}

impl Role {
    pub fn suffix(&self) -> &'static str {
        match self {
            Role::Scopo => "S",
            Role::Antiscopo => "AS",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Scopo => "Scopi",
            Role::Antiscopo => "Antiscopi",
        }
    }
}

/// Part-I key of the S-AS questionnaire: pair number plus role suffix,
/// written `"<pair><S|AS>"` (e.g. `"5S"`, `"5AS"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey {
    pub pair: u8,
    pub role: Role,
}

impl ItemKey {
    pub const fn new(pair: u8, role: Role) -> Self {
        Self { pair, role }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pair, self.role.suffix())
    }
}

impl FromStr for ItemKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "AS" must be tried first: every "AS" key also ends in "S".
        let (digits, role) = if let Some(digits) = s.strip_suffix("AS") {
            (digits, Role::Antiscopo)
        } else if let Some(digits) = s.strip_suffix('S') {
            (digits, Role::Scopo)
        } else {
            return Err(CoreError::InvalidItemKey(s.to_string()));
        };

        // Canonical form only, so every key maps to exactly one map entry.
        if digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
            || (digits.len() > 1 && digits.starts_with('0'))
        {
            return Err(CoreError::InvalidItemKey(s.to_string()));
        }
        let pair = digits
            .parse::<u8>()
            .map_err(|_| CoreError::InvalidItemKey(s.to_string()))?;

        Ok(ItemKey { pair, role })
    }
}

/// Raw PID-5 responses keyed by item number (1..=220). Missing items are
/// allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pid5Answers(pub BTreeMap<u16, f64>);

impl Pid5Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, item: u16) -> Option<f64> {
        self.0.get(&item).copied()
    }

    pub fn insert(&mut self, item: u16, value: f64) -> Option<f64> {
        self.0.insert(item, value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<(u16, f64)> for Pid5Answers {
    fn from_iter<T: IntoIterator<Item = (u16, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn default_choice_score() -> f64 {
    1.0
}

/// A Part-II forced choice: which side of the pair was selected and the
/// score that selection carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForcedChoice {
    #[serde(rename = "type")]
    pub role: Role,
    #[serde(default = "default_choice_score")]
    pub score: f64,
}

impl ForcedChoice {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            score: default_choice_score(),
        }
    }
}

/// Raw S-AS responses.
///
/// `part1` maps `"<pair><S|AS>"` keys to a 0–4 rating; `part2` maps a pair
/// number to the forced choice made for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SasAnswers {
    #[serde(default)]
    pub part1: BTreeMap<String, f64>,
    #[serde(default)]
    pub part2: BTreeMap<u8, ForcedChoice>,
}

impl SasAnswers {
    pub fn rating(&self, key: &ItemKey) -> Option<f64> {
        self.part1.get(&key.to_string()).copied()
    }

    pub fn set_rating(&mut self, key: ItemKey, value: f64) {
        self.part1.insert(key.to_string(), value);
    }

    pub fn choose(&mut self, pair: u8, role: Role) {
        self.part2.insert(pair, ForcedChoice::new(role));
    }

    pub fn is_empty(&self) -> bool {
        self.part1.is_empty() && self.part2.is_empty()
    }
}

/// Answers for one completed test instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TestAnswers {
    Pid5(Pid5Answers),
    Sas(SasAnswers),
}

impl TestAnswers {
    pub fn instrument(&self) -> InstrumentKind {
        match self {
            TestAnswers::Pid5(_) => InstrumentKind::Pid5,
            TestAnswers::Sas(_) => InstrumentKind::Sas,
        }
    }
}
