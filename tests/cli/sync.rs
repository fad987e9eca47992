use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, SOURCE_FTL, run};

const DE_FTL: &str = "common/locales/de/main.ftl";
const FR_FTL: &str = "common/locales/fr/main.ftl";

fn setup_locales(source: &str, de: &str) -> Result<CliTest> {
    let test = CliTest::with_file(SOURCE_FTL, source)?;
    test.write_file(DE_FTL, de)?;
    Ok(test)
}

#[test]
fn test_sync_appends_missing_keys_in_source_order() -> Result<()> {
    let test = setup_locales("a = A\nb = B\nc = C\n", "a = A-de\nc = C-de\n")?;

    let output = run(test.sync_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(test.read_file(DE_FTL)?, "a = A-de\nc = C-de\nb = B\n");
    assert_snapshot!(output.stdout, @r"
    Added 1 missing key(s) to ./common/locales/de/main.ftl:
      - b
    ");

    Ok(())
}

#[test]
fn test_sync_second_run_changes_nothing() -> Result<()> {
    let test = setup_locales("a = A\nb = B\n", "a = A-de\n")?;
    test.write_file(FR_FTL, "b = B-fr\n")?;

    run(test.sync_command())?;
    let de_after_first = test.read_file(DE_FTL)?;
    let fr_after_first = test.read_file(FR_FTL)?;
    assert_eq!(fr_after_first, "b = B-fr\na = A\n");

    let output = run(test.sync_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(test.read_file(DE_FTL)?, de_after_first);
    assert_eq!(test.read_file(FR_FTL)?, fr_after_first);
    assert!(
        output
            .stdout
            .contains("2 target file(s) in sync with ./common/locales/en-US/main.ftl")
    );

    Ok(())
}

#[test]
fn test_sync_check_reports_without_writing() -> Result<()> {
    let test = setup_locales("a = A\nb = B\nc = C\n", "a = A-de\n")?;

    let mut cmd = test.sync_command();
    cmd.arg("--check");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert_eq!(test.read_file(DE_FTL)?, "a = A-de\n");
    assert_snapshot!(output.stdout, @r"
    Would add 2 key(s) in ./common/locales/de/main.ftl:
      - b
      - c
    ✘ 2 missing key(s) in 1 file(s).
    Run without --check to add these keys.
    ");

    Ok(())
}

#[test]
fn test_sync_check_passes_when_in_sync() -> Result<()> {
    let test = setup_locales("a = A\n", "a = A-de\n")?;

    let mut cmd = test.sync_command();
    cmd.arg("--check");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));

    Ok(())
}

#[test]
fn test_sync_explicit_source_and_targets() -> Result<()> {
    let source = "\
# Buttons
login-button = Log in
    .title = Sign in to your account

welcome =
    Hello,
    friend.
";
    let test = CliTest::with_file("i18n/en.ftl", source)?;
    test.write_file("i18n/de.ftl", "# Deutsch\r\nlogin-button = Anmelden")?;

    let mut cmd = test.sync_command();
    cmd.args(["--source", "i18n/en.ftl", "--targets", "i18n/de.ftl"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        test.read_file("i18n/de.ftl")?,
        "# Deutsch\r\nlogin-button = Anmelden\r\nwelcome =\r\n    Hello,\r\n    friend.\r\n"
    );

    Ok(())
}

#[test]
fn test_sync_leaves_attribute_drift_alone() -> Result<()> {
    let test = setup_locales(
        "login = Log in\n    .title = Sign in\n    .aria-label = Log in\n",
        "login = Anmelden\n",
    )?;

    let output = run(test.sync_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(test.read_file(DE_FTL)?, "login = Anmelden\n");

    Ok(())
}

#[test]
fn test_sync_keeps_junk_and_warns() -> Result<()> {
    let test = setup_locales("a = A\nb = B\n", "a = A-de\n!! kaputt\n")?;

    let output = run(test.sync_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(test.read_file(DE_FTL)?, "a = A-de\n!! kaputt\nb = B\n");
    assert!(
        output
            .stderr
            .contains("warning: 1 line(s) could not be parsed and were kept as-is")
    );

    Ok(())
}

#[test]
fn test_sync_verbose_shows_parse_errors() -> Result<()> {
    let test = setup_locales("a = A\n", "    .orphan = x\na = A-de\n")?;

    let mut cmd = test.sync_command();
    cmd.arg("-v");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("\"attribute without a message\""));
    assert!(output.stderr.contains("--> ./common/locales/de/main.ftl:1:1"));

    Ok(())
}

#[test]
fn test_sync_uses_configured_locales() -> Result<()> {
    let test = CliTest::with_file(
        ".ftlsyncrc.json",
        r#"{
            "localesRoot": "./locales",
            "sourceLocale": "en",
            "targetLocales": ["fr"]
        }"#,
    )?;
    test.write_file("locales/en/main.ftl", "a = A\n")?;
    test.write_file("locales/fr/main.ftl", "")?;
    test.write_file("locales/de/main.ftl", "")?;

    let output = run(test.sync_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(test.read_file("locales/fr/main.ftl")?, "a = A\n");
    assert_eq!(test.read_file("locales/de/main.ftl")?, "");

    Ok(())
}

#[test]
fn test_sync_missing_target_is_error() -> Result<()> {
    let test = CliTest::with_file(SOURCE_FTL, "a = A\n")?;

    let mut cmd = test.sync_command();
    cmd.args(["--targets", "missing.ftl"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(
        output
            .stderr
            .starts_with("Error: Failed to read FTL file: missing.ftl")
    );

    Ok(())
}

#[test]
fn test_sync_without_locales_dir_is_error() -> Result<()> {
    let test = CliTest::with_file("en.ftl", "a = A\n")?;

    let mut cmd = test.sync_command();
    cmd.args(["--source", "en.ftl"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Locales directory not found"));

    Ok(())
}
