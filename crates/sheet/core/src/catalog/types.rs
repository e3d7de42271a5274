use crate::draft::{ArenaStats, Virtue};

/// A path the character can walk, with its base arena stats.
///
/// `virtue` names the virtue tied to the path. Choosing the path raises that
/// virtue's minimum allocation to [`SheetConfig::PATH_VIRTUE_MINIMUM`].
///
/// [`SheetConfig::PATH_VIRTUE_MINIMUM`]: crate::SheetConfig::PATH_VIRTUE_MINIMUM
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathDefinition {
    pub name: String,
    pub base: ArenaStats,
    pub virtue: Option<Virtue>,
}

impl PathDefinition {
    pub fn new(name: impl Into<String>, base: ArenaStats) -> Self {
        Self {
            name: name.into(),
            base,
            virtue: None,
        }
    }

    /// Ties a virtue to this path (builder pattern).
    #[must_use]
    pub fn with_virtue(mut self, virtue: Virtue) -> Self {
        self.virtue = Some(virtue);
        self
    }
}

/// The callings available under one path.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallingList {
    pub path: String,
    pub callings: Vec<String>,
}

/// Ability entry shared by the general and calling-specific lists.
///
/// For general abilities `requirement` is a skill check (`"1F, 2C"`), `"ANY"`
/// or empty. For calling abilities it names the calling that unlocks it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: String,
    #[cfg_attr(feature = "serde", serde(rename = "req", default))]
    pub requirement: String,
    #[cfg_attr(feature = "serde", serde(rename = "exp", default))]
    pub explanation: String,
    /// Type tag such as `Active` or `Passive`.
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: Option<String>,
}

impl Ability {
    pub fn new(
        name: impl Into<String>,
        cost: impl Into<String>,
        requirement: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cost: cost.into(),
            requirement: requirement.into(),
            explanation: explanation.into(),
            kind: None,
        }
    }

    /// Attaches a type tag (builder pattern).
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// Forge of Hope item effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForgeEffect {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "proc", default))]
    pub proc_text: String,
}

impl ForgeEffect {
    pub fn new(name: impl Into<String>, proc_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            proc_text: proc_text.into(),
        }
    }
}

/// Mundus stone with its passive effect and optional arena stat bonus.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MundusEffect {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: String,
    #[cfg_attr(feature = "serde", serde(rename = "statBonus", default))]
    pub stat_bonus: Option<ArenaStats>,
}

impl MundusEffect {
    pub fn new(name: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            effect: effect.into(),
            stat_bonus: None,
        }
    }

    #[must_use]
    pub fn with_stat_bonus(mut self, bonus: ArenaStats) -> Self {
        self.stat_bonus = Some(bonus);
        self
    }
}
