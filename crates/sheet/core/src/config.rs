/// Sheet configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetConfig {
    /// Number of ability rows in the arsenal table. The last row is the
    /// calling slot.
    pub ability_slots: usize,
}

impl SheetConfig {
    // ===== virtue point budget =====
    /// Points granted by choosing a real path.
    pub const REAL_PATH_POINTS: u32 = 2;
    /// Points granted by the prior checkbox.
    pub const PRIOR_POINTS: u32 = 1;
    /// Points granted by the paladin checkbox.
    pub const PALADIN_POINTS: u32 = 1;
    /// Points granted by a calling that belongs to the selected path.
    pub const CALLING_POINTS: u32 = 1;
    /// Minimum allocation of the virtue tied to the selected path.
    pub const PATH_VIRTUE_MINIMUM: u32 = 2;

    // ===== field ranges =====
    pub const MAX_LEAGUE_PASSIVE: u8 = 2;
    pub const MIN_HOLY_NUMBER: u8 = 1;
    pub const MAX_HOLY_NUMBER: u8 = 20;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ABILITY_SLOTS: usize = 3;

    pub fn new() -> Self {
        Self {
            ability_slots: Self::DEFAULT_ABILITY_SLOTS,
        }
    }

    /// Builds a config with the given slot count (at least one slot).
    pub fn with_ability_slots(ability_slots: usize) -> Self {
        Self {
            ability_slots: ability_slots.max(1),
        }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new()
    }
}
