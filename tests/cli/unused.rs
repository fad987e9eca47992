use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, SOURCE_FTL, run};

const RESOURCE: &str = "\
# Buttons
login-button = Log in
    .title = Sign in
toast_actions = Toasts
    .ok = OK

stale-banner =
    Old news,
    still here.
";

fn setup_project() -> Result<CliTest> {
    let test = CliTest::with_file(SOURCE_FTL, RESOURCE)?;
    test.write_file(
        "src/main.rs",
        "fn main() {\n    let label = fl!(\"login-button\");\n    let tip = fl!(\"login-button.title\");\n}\n",
    )?;
    Ok(test)
}

#[test]
fn test_unused_lists_keys_one_per_line() -> Result<()> {
    let test = setup_project()?;

    let output = run(test.unused_command())?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @r"
    toast_actions
    toast_actions.ok
    stale-banner
    ");
    assert!(output.stderr.contains(
        "3 unused key(s) in ./common/locales/en-US/main.ftl (checked 1 corpus file(s))."
    ));
    assert_eq!(test.read_file(SOURCE_FTL)?, RESOURCE);

    Ok(())
}

#[test]
fn test_unused_exclude_prefix_hides_runtime_keys() -> Result<()> {
    let test = setup_project()?;

    let mut cmd = test.unused_command();
    cmd.args(["--exclude-prefix", "toast_actions"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "stale-banner\n");

    Ok(())
}

#[test]
fn test_unused_exclusion_from_config() -> Result<()> {
    let test = setup_project()?;
    test.write_file(
        ".ftlsyncrc.json",
        r#"{ "excludeKeyPrefixes": ["toast_actions", "stale-"] }"#,
    )?;

    let output = run(test.unused_command())?;

    assert_eq!(output.stdout, "");
    assert!(output.stderr.contains("Checked 1 corpus file(s) - no unused keys"));

    Ok(())
}

#[test]
fn test_unused_ignores_build_output() -> Result<()> {
    let test = setup_project()?;
    test.write_file(
        "target/debug/build/out.rs",
        "toast_actions toast_actions.ok stale-banner",
    )?;

    let output = run(test.unused_command())?;

    assert_eq!(output.stdout, "toast_actions\ntoast_actions.ok\nstale-banner\n");

    Ok(())
}

#[test]
fn test_unused_more_corpus_never_adds_keys() -> Result<()> {
    let test = setup_project()?;
    let before = run(test.unused_command())?;

    test.write_file("src/toasts.rs", "show(\"toast_actions.ok\");\n")?;
    let after = run(test.unused_command())?;

    assert_eq!(before.stdout, "toast_actions\ntoast_actions.ok\nstale-banner\n");
    assert_eq!(after.stdout, "stale-banner\n");

    Ok(())
}

#[test]
fn test_unused_extension_and_corpus_root_flags() -> Result<()> {
    let test = setup_project()?;
    test.write_file("scripts/notify.py", "t(\"toast_actions.ok\")\n")?;

    let mut cmd = test.unused_command();
    cmd.args(["--corpus-root", "scripts", "--extension", "py"]);
    let output = run(cmd)?;

    assert_eq!(output.stdout, "login-button\nlogin-button.title\nstale-banner\n");

    Ok(())
}

#[test]
fn test_unused_prune_removes_key_lines() -> Result<()> {
    let test = setup_project()?;

    let mut cmd = test.unused_command();
    cmd.args(["--exclude-prefix", "toast_actions", "--prune"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "stale-banner\n");
    assert_eq!(
        test.read_file(SOURCE_FTL)?,
        "\
# Buttons
login-button = Log in
    .title = Sign in
toast_actions = Toasts
    .ok = OK

"
    );
    assert!(output.stderr.contains(
        "Removed 3 line(s) of 1 unused key(s) from ./common/locales/en-US/main.ftl."
    ));

    let again = run(test.unused_command())?;
    assert_eq!(again.stdout, "toast_actions\ntoast_actions.ok\n");

    Ok(())
}

#[test]
fn test_unused_prune_keeps_message_of_excluded_attribute() -> Result<()> {
    let test = CliTest::with_file(
        SOURCE_FTL,
        "greeting = Hi\nmenu = Menu\n    .dynamic = D\n    .label = L\n",
    )?;
    test.write_file("src/lib.rs", "fl!(\"greeting\")")?;

    let mut cmd = test.unused_command();
    cmd.args(["--exclude-prefix", "menu.dynamic", "--prune"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "menu\nmenu.label\n");
    assert_eq!(
        test.read_file(SOURCE_FTL)?,
        "greeting = Hi\nmenu = Menu\n    .dynamic = D\n"
    );

    Ok(())
}

#[test]
fn test_unused_prune_with_nothing_unused_keeps_file() -> Result<()> {
    let test = CliTest::with_file(SOURCE_FTL, "used = U\r\n")?;
    test.write_file("src/lib.rs", "\"used\"")?;

    let mut cmd = test.unused_command();
    cmd.arg("--prune");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "");
    assert_eq!(test.read_file(SOURCE_FTL)?, "used = U\r\n");

    Ok(())
}

#[test]
fn test_unused_explicit_source() -> Result<()> {
    let test = CliTest::with_file("i18n/en.ftl", "known = K\nforgotten = F\n")?;
    test.write_file("src/lib.rs", "\"known\"")?;

    let mut cmd = test.unused_command();
    cmd.args(["--source", "i18n/en.ftl"]);
    let output = run(cmd)?;

    assert_eq!(output.stdout, "forgotten\n");

    Ok(())
}

#[test]
fn test_unused_missing_resource_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.unused_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with(
        "Error: Failed to read FTL file: ./common/locales/en-US/main.ftl"
    ));

    Ok(())
}
