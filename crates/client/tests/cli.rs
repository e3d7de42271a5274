//! Building sheets from files on disk.

use std::io::Write;

use sheet_cli::{CliConfig, OutputFormat, SheetApp};
use tempfile::NamedTempFile;

const CATALOG: &str = r#"{
    "paths": {
        "WARRIOR": { "HP": 6, "virtue": "fortitude" },
        "SAGE": { "HP": 4, "MP": 2, "virtue": "judgement" }
    },
    "callings": { "WARRIOR": ["Berserker"] },
    "generalAbilities": [
        { "name": "Jab", "cost": "1 SP", "req": "", "exp": "Quick hit" },
        { "name": "Cleave", "cost": "2 SP", "req": "2F", "exp": "Wide swing" }
    ],
    "callingAbilities": [
        { "name": "Frenzy", "cost": "3 SP", "req": "Berserker", "exp": "Rage" }
    ]
}"#;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[tokio::test]
async fn blank_sheet_from_catalog() {
    let catalog = write_temp(CATALOG);
    let app = SheetApp::builder(CliConfig::default())
        .catalog(catalog.path())
        .build()
        .await
        .expect("app builds");

    let sheet = app.render(OutputFormat::Markdown).expect("renders");
    assert!(sheet.contains("## N/A\n"));
    assert!(sheet.contains("| HP: 0 | SP: 0 | MP: 0 |"));
}

#[tokio::test]
async fn rejected_selection_is_skipped() {
    let catalog = write_temp(CATALOG);
    let selections = write_temp(
        r#"{
            "name": "rogan",
            "path": "WARRIOR",
            "calling": "Berserker",
            "abilities": ["Cleave", "Jab", "Frenzy", "Jab"]
        }"#,
    );

    let app = SheetApp::builder(CliConfig::default())
        .catalog(catalog.path())
        .selections(selections.path())
        .build()
        .await
        .expect("app builds");

    let draft = app.session().draft();
    assert_eq!(draft.slot_count(), 3);
    assert_eq!(draft.slot(3).and_then(|s| s.selection.as_deref()), Some("Frenzy"));

    let sheet = app.render(OutputFormat::Markdown).expect("renders");
    assert!(sheet.contains("|Frenzy|Rage|3\u{a0}SP|Berserker|"));
    assert!(sheet.contains("| Calling: Berserker |"));
}

#[tokio::test]
async fn slot_count_and_draft_output() {
    let catalog = write_temp(CATALOG);
    let config = CliConfig {
        ability_slots: Some(1),
        ..Default::default()
    };
    let app = SheetApp::builder(config)
        .catalog(catalog.path())
        .build()
        .await
        .expect("app builds");

    let json = app.render(OutputFormat::Draft).expect("renders");
    let draft: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(draft["abilities"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn missing_catalog_is_an_error() {
    let err = SheetApp::builder(CliConfig::default())
        .build()
        .await
        .expect_err("no catalog");
    assert!(err.to_string().contains("No catalog given"));
}

#[tokio::test]
async fn writes_to_output_file() {
    let catalog = write_temp(CATALOG);
    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("sheet.md");

    let app = SheetApp::builder(CliConfig::default())
        .catalog(catalog.path())
        .build()
        .await
        .expect("app builds");
    app.write(OutputFormat::Markdown, Some(&output))
        .expect("written");

    let written = std::fs::read_to_string(&output).expect("output exists");
    assert!(written.starts_with("# ● D.E.R.P. Character Sheet ●"));
}
