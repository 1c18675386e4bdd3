use predicates::prelude::*;

mod common;
use common::home::*;

#[test]
fn test_export_includes_export_date() -> anyhow::Result<()> {
    let home = setup_test_home()?;
    let exported = home.export_json()?;

    assert!(exported["exportDate"].is_string());
    assert_eq!(exported["preferences"]["targetLang"], "Spanish");
    assert_eq!(exported["stats"]["totalMessages"], 0);
    Ok(())
}

#[test]
fn test_export_import_round_trip() -> anyhow::Result<()> {
    let source = setup_test_home()?;
    source.run(&["lang", "English", "Japanese"])?;
    source.run(&["pref", "set", "theme", "dark"])?;
    source.run(&["chat", "add", "konnichiwa", "こんにちは"])?;

    let export_file = source.temp_dir.path().join("export.json");
    source.run(&["export", "--output", export_file.to_str().expect("utf-8 path")])?;

    let target = setup_test_home()?;
    target
        .cmd()?
        .arg("import")
        .arg(&export_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported state"));

    let original = source.export_json()?;
    let imported = target.export_json()?;
    assert_eq!(imported["preferences"], original["preferences"]);
    assert_eq!(imported["chatHistory"], original["chatHistory"]);
    Ok(())
}

#[test]
fn test_import_rejects_non_object() -> anyhow::Result<()> {
    let home = setup_test_home()?;
    home.run(&["pref", "set", "theme", "dark"])?;

    let file = home.temp_dir.path().join("array.json");
    std::fs::write(&file, "[1, 2, 3]")?;

    home.cmd()?
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a JSON object"));

    let exported = home.export_json()?;
    assert_eq!(exported["preferences"]["theme"], "dark");
    Ok(())
}

#[test]
fn test_import_reports_file_that_is_not_json() -> anyhow::Result<()> {
    let home = setup_test_home()?;
    let file = home.temp_dir.path().join("notes.txt");
    std::fs::write(&file, "this is not an export")?;

    home.cmd()?
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid JSON"))
        .stderr(predicate::str::contains("invalid fields").not());
    Ok(())
}

#[test]
fn test_corrupt_stored_state_falls_back_to_defaults() -> anyhow::Result<()> {
    let home = setup_test_home()?;
    home.run(&["pref", "set", "theme", "dark"])?;

    // Overwrite every stored entry except the config with garbage
    for entry in std::fs::read_dir(home.path())? {
        let path = entry?.path();
        if path.file_name().and_then(|n| n.to_str()) != Some("config.json") {
            std::fs::write(&path, "not json")?;
        }
    }

    home.cmd()?
        .args(["pref", "get", "theme"])
        .assert()
        .success()
        .stdout(predicate::str::diff("light\n"));
    Ok(())
}

#[test]
fn test_reset_clears_everything() -> anyhow::Result<()> {
    let home = setup_test_home()?;
    home.run(&["user", "login", "ana", "ana@example.com"])?;
    home.run(&["chat", "add", "hola", "¡Hola!"])?;

    home.cmd()?
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All local data cleared"));

    let exported = home.export_json()?;
    assert!(exported["user"]["username"].is_null());
    assert_eq!(exported["stats"]["totalMessages"], 0);

    home.cmd()?
        .args(["user", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No user logged in"));
    Ok(())
}

#[test]
fn test_reset_declined_keeps_data() -> anyhow::Result<()> {
    let home = setup_test_home()?;
    home.run(&["chat", "add", "hola", "¡Hola!"])?;

    home.cmd()?
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset canceled"));

    let exported = home.export_json()?;
    assert_eq!(exported["stats"]["totalMessages"], 1);
    Ok(())
}
