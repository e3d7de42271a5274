//! Arena stats (HP, SP, MP) and the paragon bonus that feeds them.

use core::ops::Add;

/// One of the three arena stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArenaStat {
    #[cfg_attr(feature = "serde", serde(rename = "HP"))]
    Hp,
    #[cfg_attr(feature = "serde", serde(rename = "SP"))]
    Sp,
    #[cfg_attr(feature = "serde", serde(rename = "MP"))]
    Mp,
}

/// HP/SP/MP triple used for path bases, stone bonuses and final stats.
///
/// Missing keys in catalog data default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaStats {
    #[cfg_attr(feature = "serde", serde(rename = "HP", default))]
    pub hp: i32,
    #[cfg_attr(feature = "serde", serde(rename = "SP", default))]
    pub sp: i32,
    #[cfg_attr(feature = "serde", serde(rename = "MP", default))]
    pub mp: i32,
}

impl ArenaStats {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(hp: i32, sp: i32, mp: i32) -> Self {
        Self { hp, sp, mp }
    }

    pub fn get(&self, stat: ArenaStat) -> i32 {
        match stat {
            ArenaStat::Hp => self.hp,
            ArenaStat::Sp => self.sp,
            ArenaStat::Mp => self.mp,
        }
    }

    pub fn get_mut(&mut self, stat: ArenaStat) -> &mut i32 {
        match stat {
            ArenaStat::Hp => &mut self.hp,
            ArenaStat::Sp => &mut self.sp,
            ArenaStat::Mp => &mut self.mp,
        }
    }

    /// Single-stat bonus, e.g. `ArenaStats::only(ArenaStat::Hp, 1)`.
    pub fn only(stat: ArenaStat, value: i32) -> Self {
        let mut stats = Self::ZERO;
        *stats.get_mut(stat) = value;
        stats
    }
}

impl Add for ArenaStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            hp: self.hp.saturating_add(rhs.hp),
            sp: self.sp.saturating_add(rhs.sp),
            mp: self.mp.saturating_add(rhs.mp),
        }
    }
}

/// Paragon bonus choice: +1 to one arena stat, or nothing.
///
/// The string forms match the option labels (`"N/A"`, `"+1 HP"`, ...).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParagonBonus {
    #[default]
    #[strum(serialize = "N/A")]
    #[cfg_attr(feature = "serde", serde(rename = "N/A"))]
    None,
    #[strum(serialize = "+1 HP")]
    #[cfg_attr(feature = "serde", serde(rename = "+1 HP"))]
    Hp,
    #[strum(serialize = "+1 SP")]
    #[cfg_attr(feature = "serde", serde(rename = "+1 SP"))]
    Sp,
    #[strum(serialize = "+1 MP")]
    #[cfg_attr(feature = "serde", serde(rename = "+1 MP"))]
    Mp,
}

impl ParagonBonus {
    pub const POINTS: i32 = 1;

    pub fn stat(self) -> Option<ArenaStat> {
        match self {
            Self::None => None,
            Self::Hp => Some(ArenaStat::Hp),
            Self::Sp => Some(ArenaStat::Sp),
            Self::Mp => Some(ArenaStat::Mp),
        }
    }

    pub fn bonus(self) -> ArenaStats {
        self.stat()
            .map(|stat| ArenaStats::only(stat, Self::POINTS))
            .unwrap_or(ArenaStats::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn paragon_labels_round_trip() {
        assert_eq!(ParagonBonus::from_str("+1 SP").ok(), Some(ParagonBonus::Sp));
        assert_eq!(ParagonBonus::from_str("N/A").ok(), Some(ParagonBonus::None));
        assert_eq!(ParagonBonus::Mp.to_string(), "+1 MP");
        assert!(ParagonBonus::from_str("+2 HP").is_err());
    }

    #[test]
    fn paragon_bonus_targets_one_stat() {
        assert_eq!(ParagonBonus::Hp.bonus(), ArenaStats::new(1, 0, 0));
        assert_eq!(ParagonBonus::None.bonus(), ArenaStats::ZERO);
    }
}
