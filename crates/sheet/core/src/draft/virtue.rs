//! Virtues and the point allocations spent on them.

/// The three virtues. Declaration order is the clamp priority order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Virtue {
    Fortitude,
    Cunning,
    Judgement,
}

impl Virtue {
    /// Resolves the stat letter used in requirement strings (`F`, `C`, `J`).
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'f' => Some(Self::Fortitude),
            'c' => Some(Self::Cunning),
            'j' => Some(Self::Judgement),
            _ => None,
        }
    }
}

/// Points assigned to each virtue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VirtueAllocation {
    pub fortitude: u32,
    pub cunning: u32,
    pub judgement: u32,
}

impl VirtueAllocation {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(fortitude: u32, cunning: u32, judgement: u32) -> Self {
        Self {
            fortitude,
            cunning,
            judgement,
        }
    }

    pub fn get(&self, virtue: Virtue) -> u32 {
        match virtue {
            Virtue::Fortitude => self.fortitude,
            Virtue::Cunning => self.cunning,
            Virtue::Judgement => self.judgement,
        }
    }

    pub fn get_mut(&mut self, virtue: Virtue) -> &mut u32 {
        match virtue {
            Virtue::Fortitude => &mut self.fortitude,
            Virtue::Cunning => &mut self.cunning,
            Virtue::Judgement => &mut self.judgement,
        }
    }

    pub fn total(&self) -> u32 {
        self.fortitude
            .saturating_add(self.cunning)
            .saturating_add(self.judgement)
    }

    /// Sum of the two virtues other than `virtue`.
    pub fn others(&self, virtue: Virtue) -> u32 {
        self.total().saturating_sub(self.get(virtue))
    }
}

/// Lower and upper bound for each virtue's allocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtueBounds {
    pub minimum: VirtueAllocation,
    pub maximum: VirtueAllocation,
}

impl VirtueBounds {
    /// Clamps a requested value for `virtue` into its current bounds.
    pub fn clamp(&self, virtue: Virtue, value: u32) -> u32 {
        let min = self.minimum.get(virtue);
        let max = self.maximum.get(virtue).max(min);
        value.clamp(min, max)
    }
}

/// Per-virtue "GIVES" bonus flags shown next to the allocation table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VirtueGives {
    pub fortitude: bool,
    pub cunning: bool,
    pub judgement: bool,
}

impl VirtueGives {
    pub fn get(&self, virtue: Virtue) -> bool {
        match virtue {
            Virtue::Fortitude => self.fortitude,
            Virtue::Cunning => self.cunning,
            Virtue::Judgement => self.judgement,
        }
    }

    pub fn set(&mut self, virtue: Virtue, gives: bool) {
        match virtue {
            Virtue::Fortitude => self.fortitude = gives,
            Virtue::Cunning => self.cunning = gives,
            Virtue::Judgement => self.judgement = gives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn letters_resolve_case_insensitively() {
        assert_eq!(Virtue::from_letter('F'), Some(Virtue::Fortitude));
        assert_eq!(Virtue::from_letter('c'), Some(Virtue::Cunning));
        assert_eq!(Virtue::from_letter('J'), Some(Virtue::Judgement));
        assert_eq!(Virtue::from_letter('x'), None);
        assert_eq!(Virtue::from_letter(' '), None);
    }

    #[test]
    fn iteration_follows_priority_order() {
        let order: Vec<_> = Virtue::iter().collect();
        assert_eq!(order, [Virtue::Fortitude, Virtue::Cunning, Virtue::Judgement]);
    }

    #[test]
    fn others_excludes_the_named_virtue() {
        let alloc = VirtueAllocation::new(1, 2, 3);
        assert_eq!(alloc.others(Virtue::Fortitude), 5);
        assert_eq!(alloc.others(Virtue::Judgement), 3);
    }

    #[test]
    fn bounds_clamp_respects_minimum() {
        let bounds = VirtueBounds {
            minimum: VirtueAllocation::new(2, 0, 0),
            maximum: VirtueAllocation::new(3, 1, 1),
        };
        assert_eq!(bounds.clamp(Virtue::Fortitude, 0), 2);
        assert_eq!(bounds.clamp(Virtue::Fortitude, 9), 3);
        assert_eq!(bounds.clamp(Virtue::Cunning, 4), 1);
    }
}
