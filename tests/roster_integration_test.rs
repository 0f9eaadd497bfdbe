use candy_calc::{
    CalcError, CsvRoster, ProgressEngine, PromptRoster, TomlConfig, LUCKY_EGG_TARGET,
};
use std::io::{Cursor, Write};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_csv_roster_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("roster.csv");
    std::fs::write(
        &path,
        "name,owned,currency,currency_per_evolution\n\
         Pidgey,13,144,12\n\
         Weedle,30,5,12\n\
         Caterpie,25,191,12\n",
    )
    .unwrap();

    let outcome = ProgressEngine::new(CsvRoster::new(&path)).run().unwrap();

    assert_eq!(outcome.report.target, LUCKY_EGG_TARGET);
    assert_eq!(outcome.report.total_evolutions, 32);
    assert_eq!(outcome.report.remaining, 28);
    assert!(outcome
        .report
        .to_string()
        .contains("Caterpie:\n\tTransfer 0 for a total of 17 evolutions."));
}

#[test]
fn test_toml_roster_with_target_and_apply() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
[progress]
target = 15

[[holdings]]
name = "Pidgey"
owned = 13
currency = 144
currency_per_evolution = 12

[[holdings]]
name = "Weedle"
owned = 30
currency = 5
currency_per_evolution = 12
"#,
    )
    .unwrap();

    let config = TomlConfig::from_file(file.path()).unwrap();
    let outcome = ProgressEngine::new(config).with_apply(true).run().unwrap();

    assert!(outcome.report.is_complete());
    assert!(outcome
        .report
        .to_string()
        .ends_with("No more creatures needed! Get to evolving!"));

    let evolved = outcome.evolved.unwrap();
    assert_eq!(evolved[0].to_string(), "Pidgey 0 1");
    assert_eq!(evolved[1].to_string(), "Weedle 10 1");
}

#[test]
fn test_prompt_session_end_to_end() {
    let session = "Pidgey\n13\n144\n12\nRattata\n1\n25\n25\n\n";
    let roster = PromptRoster::new(Cursor::new(session), Vec::new());

    let mut engine = ProgressEngine::new(roster).with_target(Some(20));
    let outcome = engine.run().unwrap();

    assert_eq!(
        outcome.report.to_string(),
        "Pidgey:\n\tTransfer 0 for a total of 13 evolutions.\n\
         Rattata:\n\tTransfer 0 for a total of 1 evolution.\n\
         You need 6 more evolutions."
    );
}

#[test]
fn test_invalid_csv_row_aborts_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("roster.csv");
    std::fs::write(
        &path,
        "name,owned,currency,currency_per_evolution\nMagikarp,4,400,1\n",
    )
    .unwrap();

    let result = ProgressEngine::new(CsvRoster::new(&path)).run();
    assert!(matches!(result, Err(CalcError::InvalidInput { .. })));
}

#[test]
fn test_missing_csv_file_is_io_error() {
    let result = ProgressEngine::new(CsvRoster::new("/nonexistent/roster.csv")).run();
    match result {
        Err(e @ CalcError::IoError(_)) => assert_eq!(e.exit_code(), 3),
        other => panic!("unexpected result: {:?}", other.map(|o| o.report)),
    }
}

#[test]
fn test_report_serializes_to_json() {
    let data = "name,owned,currency,currency_per_evolution\nWeedle,30,5,12\n";
    let holdings = CsvRoster::read_from(data.as_bytes()).unwrap();
    let report = candy_calc::report_progress(&holdings, 60).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total_evolutions"], 2);
    assert_eq!(json["remaining"], 58);
    assert_eq!(json["lines"][0]["transfers"], 18);
}
