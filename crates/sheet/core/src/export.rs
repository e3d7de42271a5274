//! Markdown export of a finished draft.
//!
//! Every text value is trimmed and a number followed by a stat unit
//! (`+1 HP`) is joined with a non-breaking space. The quote is wrapped in
//! double quotes unless it already starts with one, and the character name
//! starts with a capital letter.

use std::sync::LazyLock;

use regex::Regex;
use strum::IntoEnumIterator;

use crate::draft::{CharacterDraft, NO_CALLING, NO_SELECTION, Virtue};

const NON_BREAKING_SPACE: &str = "\u{00A0}";

const SPACER: &str = "&#10;\n&#10;";

static STAT_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)[ \t]+(HP|SP|MP)\b").expect("valid regex"));

/// Trims `value` and glues numbers to the stat unit that follows them.
pub fn clean_text(value: &str) -> String {
    STAT_UNIT
        .replace_all(value.trim(), format!("${{1}}{NON_BREAKING_SPACE}${{2}}"))
        .into_owned()
}

/// Wraps a cleaned quote in double quotes unless it already opens with one.
pub fn quoted(quote: &str) -> String {
    let quote = clean_text(quote);
    if quote.starts_with('"') {
        quote
    } else {
        format!("\"{quote}\"")
    }
}

/// Uppercases the first character of a cleaned name.
pub fn capitalized(name: &str) -> String {
    let name = clean_text(name);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}

fn choice(value: Option<&str>, placeholder: &str) -> String {
    clean_text(value.unwrap_or(placeholder))
}

fn gives(flag: bool) -> u8 {
    u8::from(flag)
}

/// One `|Label:| +G   | P    |` row per virtue, in priority order.
fn virtue_rows(draft: &CharacterDraft) -> String {
    Virtue::iter()
        .map(|virtue| {
            format!(
                "|{:<10}| +{}   | {}    |",
                format!("{virtue}:"),
                gives(draft.gives.get(virtue)),
                draft.virtues.get(virtue),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the character sheet document.
pub fn render_markdown(draft: &CharacterDraft) -> String {
    let stats = draft.derived.arena;

    let arsenal = draft
        .abilities
        .iter()
        .map(|slot| {
            format!(
                "|{}|{}|{}|{}|",
                choice(slot.selection.as_deref(), NO_SELECTION),
                clean_text(&slot.details.explanation),
                clean_text(&slot.details.cost),
                clean_text(&slot.details.requirement),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let holy_cell = format!(
        "{}{}",
        draft
            .forge
            .holy_number
            .map(|holy| holy.to_string())
            .unwrap_or_default(),
        clean_text(&draft.forge.proc_text),
    );

    format!(
        "# ● D.E.R.P. Character Sheet ●

{SPACER}

# {name}

## _{quote}_

{SPACER}

## {path}

{SPACER}

## {writ}

{SPACER}

# ARENA STATS ──────────
| HP: {hp} | SP: {sp} | MP: {mp} | 
|----------|----------|----------|
| Calling: {calling} | Paragon: {paragon}   | Participation: +{league} |

{SPACER}

# VIRTUE POINTS ──────────
Points Earned = {vp}

|VIRTUE     |GIVES|Points|
|-----------|-----|------|
{virtue_rows}

{SPACER}

# ARSENAL ──────────
|NAME|EXPLANATION|COST|REQ|
|---|---|---|---|
{arsenal}

{SPACER}

# FORGE OF HOPE ITEM ──────────
|ITEM|NAME|EFFECT|HOLY NUM|
|---|---|---|---|
|{item}|{item_name}|{effect}|{holy_cell}|

{SPACER}

# MUNDUS STONE ──────────
|NAME|PASSIVE EFFECT|OVERSEER |DATE|
|---|---|---|---|
|{stone}|{stone_effect}|{overseer}|{date}|",
        name = capitalized(&draft.name),
        quote = quoted(&draft.quote),
        path = choice(draft.path.as_deref(), NO_SELECTION),
        writ = clean_text(&draft.writ),
        hp = stats.hp,
        sp = stats.sp,
        mp = stats.mp,
        calling = choice(draft.calling.as_deref(), NO_CALLING),
        paragon = clean_text(&draft.paragon.to_string()),
        league = draft.league,
        vp = draft.derived.virtue_points,
        virtue_rows = virtue_rows(draft),
        item = clean_text(&draft.forge.item_type),
        item_name = clean_text(&draft.forge.custom_name),
        effect = choice(draft.forge.effect.as_deref(), ""),
        stone = choice(draft.mundus.name.as_deref(), ""),
        stone_effect = clean_text(&draft.mundus.passive_effect),
        overseer = clean_text(&draft.mundus.overseer),
        date = clean_text(&draft.mundus.date),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{ArenaStats, ParagonBonus, VirtueAllocation};

    #[test]
    fn name_and_quote_are_dressed_up() {
        let mut draft = CharacterDraft::default();
        draft.name = "rogan".into();
        draft.quote = "hello".into();

        let sheet = render_markdown(&draft);
        assert!(sheet.contains("# Rogan\n"));
        assert!(sheet.contains("_\"hello\"_"));
    }

    #[test]
    fn already_quoted_quote_is_kept() {
        assert_eq!(quoted("  \"fear me\" "), "\"fear me\"");
        assert_eq!(quoted(""), "\"\"");
    }

    #[test]
    fn capitalization_handles_unicode_and_empty() {
        assert_eq!(capitalized("  éowyn"), "Éowyn");
        assert_eq!(capitalized(""), "");
    }

    #[test]
    fn numbers_bind_to_stat_units() {
        assert_eq!(clean_text(" +1 HP and 2  MP "), "+1\u{a0}HP and 2\u{a0}MP");
        assert_eq!(clean_text("HP 3"), "HP 3");
        assert_eq!(clean_text("1 HPX"), "1 HPX");
    }

    #[test]
    fn sheet_embeds_every_section() {
        let mut draft = CharacterDraft::with_slots(2);
        draft.path = Some("WARRIOR".into());
        draft.paragon = ParagonBonus::Hp;
        draft.league = 1;
        draft.virtues = VirtueAllocation::new(2, 1, 0);
        draft.gives.cunning = true;
        draft.derived.virtue_points = 3;
        draft.derived.arena = ArenaStats::new(7, 0, 0);
        draft.abilities[0].selection = Some("Cleave".into());
        draft.abilities[0].details.explanation = "[Active] Wide swing".into();
        draft.abilities[0].details.cost = "2 SP".into();
        draft.abilities[0].details.requirement = "2F".into();
        draft.forge.item_type = " Sword ".into();
        draft.forge.custom_name = "Dawnbreaker".into();
        draft.forge.effect = Some("Ember".into());
        draft.forge.holy_number = Some(12);
        draft.forge.proc_text = "Burns on a 6".into();
        draft.mundus.name = Some("The Steed".into());
        draft.mundus.passive_effect = "+1 HP".into();
        draft.mundus.overseer = "Vex".into();
        draft.mundus.date = "2026-10-15".into();

        let sheet = render_markdown(&draft);
        assert!(sheet.starts_with("# ● D.E.R.P. Character Sheet ●\n"));
        assert!(sheet.contains("## WARRIOR\n"));
        assert!(sheet.contains("| HP: 7 | SP: 0 | MP: 0 | \n"));
        assert!(sheet.contains(
            "| Calling: NO CALLING | Paragon: +1\u{a0}HP   | Participation: +1 |"
        ));
        assert!(sheet.contains("Points Earned = 3\n"));
        assert!(sheet.contains("|Fortitude:| +0   | 2    |"));
        assert!(sheet.contains("|Cunning:  | +1   | 1    |"));
        assert!(sheet.contains("|Judgement:| +0   | 0    |\n"));
        assert!(sheet.contains("|Cleave|[Active] Wide swing|2\u{a0}SP|2F|\n|N/A||||"));
        assert!(sheet.contains("|Sword|Dawnbreaker|Ember|12Burns on a 6|"));
        assert!(sheet.ends_with("|The Steed|+1\u{a0}HP|Vex|2026-10-15|"));
    }

    #[test]
    fn holy_cell_runs_number_into_proc_text() {
        let mut draft = CharacterDraft::default();
        draft.forge.holy_number = Some(7);
        assert!(render_markdown(&draft).contains("||||7|"));

        draft.forge.proc_text = " Heals on a 3 ".into();
        assert!(render_markdown(&draft).contains("||||7Heals on a 3|"));

        draft.forge.holy_number = None;
        assert!(render_markdown(&draft).contains("||||Heals on a 3|"));
    }

    #[test]
    fn empty_draft_renders_placeholders() {
        let sheet = render_markdown(&CharacterDraft::default());
        assert!(sheet.contains("## N/A\n"));
        assert!(sheet.contains("## _\"\"_"));
        assert!(sheet.contains("|N/A||||\n|N/A||||\n|N/A||||"));
        assert!(sheet.contains("|||||\n"));
    }
}
