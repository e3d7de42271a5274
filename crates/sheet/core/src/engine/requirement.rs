//! Ability requirement expressions.
//!
//! A general ability's requirement is one of:
//! - empty: always available
//! - `ANY`: always available
//! - a skill check: comma-separated `<digit><letter>` terms such as `"1F, 2C"`
//!
//! Each term reads exactly two characters after trimming: the first is the
//! minimum (a single decimal digit), the second names the virtue (`F`, `C`,
//! `J`, case-insensitive). Anything else in the term is ignored, so `"10 F"`
//! reads as minimum 1 of virtue `0` and never matches. Malformed terms are not
//! errors; they are simply never satisfied.

use crate::draft::{Virtue, VirtueAllocation};

/// Requirement literal that admits every character.
pub const ANY_REQUIREMENT: &str = "ANY";

/// One term of a skill check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillTerm {
    Minimum { virtue: Virtue, value: u32 },
    /// Unreadable term; never satisfied.
    Malformed,
}

impl SkillTerm {
    pub fn parse(raw: &str) -> Self {
        let mut chars = raw.trim().chars();
        let value = chars.next().and_then(|c| c.to_digit(10));
        let virtue = chars.next().and_then(Virtue::from_letter);

        match (value, virtue) {
            (Some(value), Some(virtue)) => Self::Minimum { virtue, value },
            _ => Self::Malformed,
        }
    }

    pub fn is_met(&self, virtues: &VirtueAllocation) -> bool {
        match *self {
            Self::Minimum { virtue, value } => virtues.get(virtue) >= value,
            Self::Malformed => false,
        }
    }
}

/// Parsed skill check: every term must be met.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillCheck {
    terms: Vec<SkillTerm>,
}

impl SkillCheck {
    pub fn parse(raw: &str) -> Self {
        Self {
            terms: raw.split(',').map(SkillTerm::parse).collect(),
        }
    }

    pub fn terms(&self) -> &[SkillTerm] {
        &self.terms
    }

    pub fn is_met(&self, virtues: &VirtueAllocation) -> bool {
        self.terms.iter().all(|term| term.is_met(virtues))
    }
}

/// Whether a general ability with `requirement` is open to `virtues`.
pub fn requirement_satisfied(requirement: &str, virtues: &VirtueAllocation) -> bool {
    let requirement = requirement.trim();
    requirement.is_empty()
        || requirement == ANY_REQUIREMENT
        || SkillCheck::parse(requirement).is_met(virtues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digit_and_letter() {
        assert_eq!(
            SkillTerm::parse(" 2f "),
            SkillTerm::Minimum {
                virtue: Virtue::Fortitude,
                value: 2
            }
        );
        assert_eq!(SkillTerm::parse("2X"), SkillTerm::Malformed);
        assert_eq!(SkillTerm::parse("F2"), SkillTerm::Malformed);
        assert_eq!(SkillTerm::parse(""), SkillTerm::Malformed);
    }

    #[test]
    fn multi_digit_minimums_are_not_read() {
        assert_eq!(SkillTerm::parse("10 Fortitude"), SkillTerm::Malformed);
        assert!(!requirement_satisfied(
            "10 Fortitude",
            &VirtueAllocation::new(10, 0, 0)
        ));
    }

    #[test]
    fn trailing_text_after_letter_is_ignored() {
        assert_eq!(
            SkillTerm::parse("3Judgement"),
            SkillTerm::Minimum {
                virtue: Virtue::Judgement,
                value: 3
            }
        );
    }

    #[test]
    fn every_term_must_be_met() {
        let check = SkillCheck::parse("2F, 1C");
        assert_eq!(check.terms().len(), 2);
        assert!(check.is_met(&VirtueAllocation::new(2, 1, 0)));
        assert!(!check.is_met(&VirtueAllocation::new(1, 1, 0)));
        assert!(!check.is_met(&VirtueAllocation::new(2, 0, 5)));
    }

    #[test]
    fn empty_and_any_always_pass() {
        let none = VirtueAllocation::ZERO;
        assert!(requirement_satisfied("", &none));
        assert!(requirement_satisfied("   ", &none));
        assert!(requirement_satisfied("ANY", &none));
        assert!(!requirement_satisfied("any", &none));
    }

    #[test]
    fn trailing_comma_leaves_an_unmet_term() {
        assert!(!requirement_satisfied("1F,", &VirtueAllocation::new(5, 5, 5)));
    }
}
