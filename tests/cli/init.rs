use anyhow::{Context, Result};
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @"✓ Created .ftlsyncrc.json");
    assert!(test.root().join(".ftlsyncrc.json").exists());

    let content = test.read_file(".ftlsyncrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["localesRoot"], "./common/locales");
    assert_eq!(parsed["sourceLocale"], "en-US");
    assert_eq!(parsed["resourceFile"], "main.ftl");
    assert_eq!(parsed["ignores"], serde_json::json!(["target"]));
    assert_eq!(parsed["excludeKeyPrefixes"], serde_json::json!(["toast_actions"]));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".ftlsyncrc.json", "{}")?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(2));
    assert_snapshot!(output.stderr, @"Error: .ftlsyncrc.json already exists");
    assert_eq!(test.read_file(".ftlsyncrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_created_config_is_loaded() -> Result<()> {
    let test = CliTest::new()?;
    run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;
    test.write_file("common/locales/en-US/main.ftl", "a = A\n")?;
    test.write_file("common/locales/de/main.ftl", "")?;

    let output = run(test.sync_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(test.read_file("common/locales/de/main.ftl")?, "a = A\n");

    Ok(())
}
