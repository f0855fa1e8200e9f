use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_config_src_path() -> Result<()> {
    let test = CliTest::with_files(&[
        ("ucd-config.json", r#"{ "srcPath": "app" }"#),
        ("app/Widget.tsx", "export const Widget = () => null;"),
        ("src/Ignored.tsx", "export const Ignored = () => null;"),
    ])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("- Widget (app/Widget.tsx)"));
    assert!(!output.stdout.contains("Ignored"));

    Ok(())
}

#[test]
fn test_config_ignore_and_extensions() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "ucd-config.json",
            r#"{ "ignore": ["generated", "**/*.stories.tsx"], "extensions": [".tsx"] }"#,
        ),
        ("src/Button.tsx", "export const Button = () => null;"),
        ("src/Button.stories.tsx", "export const Primary = () => <Button />;"),
        ("src/generated/Icon.tsx", "export const Icon = () => null;"),
        ("src/Legacy.jsx", "export const Legacy = () => null;"),
    ])?;

    let output = test.run(&[])?;

    assert_eq!(
        output.stdout,
        "\nUnused components found:\n- Button (src/Button.tsx)\n\n1 unused component out of 1 declared\n"
    );

    Ok(())
}

#[test]
fn test_cli_flags_override_config() -> Result<()> {
    let test = CliTest::with_files(&[
        ("ucd-config.json", r#"{ "extensions": [".jsx"] }"#),
        ("src/Modern.tsx", "export const Modern = () => null;"),
        ("src/Legacy.jsx", "export const Legacy = () => null;"),
    ])?;

    let from_config = test.run(&[])?;
    assert!(from_config.stdout.contains("- Legacy (src/Legacy.jsx)"));
    assert!(!from_config.stdout.contains("Modern"));

    let overridden = test.run(&["--extensions", "tsx"])?;
    assert!(overridden.stdout.contains("- Modern (src/Modern.tsx)"));
    assert!(!overridden.stdout.contains("Legacy"));

    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let test = CliTest::with_files(&[
        ("ucd-config.json", "{ \"srcPath\": "),
        ("src/App.tsx", "export const App = () => null;"),
    ])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("Error parsing"));
    assert!(output.stderr.contains("ucd-config.json"));

    Ok(())
}

#[test]
fn test_invalid_ignore_pattern_in_config() -> Result<()> {
    let test = CliTest::with_files(&[
        ("ucd-config.json", r#"{ "ignore": ["**/[oops"] }"#),
        ("src/App.tsx", "export const App = () => null;"),
    ])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Invalid glob pattern in 'ignore'"));

    Ok(())
}

#[test]
fn test_config_in_parent_directory() -> Result<()> {
    let test = CliTest::with_files(&[
        ("ucd-config.json", r#"{ "srcPath": "web/src" }"#),
        ("web/src/Page.tsx", "export default function Page() { return null; }"),
    ])?;
    test.create_dir("tools")?;

    let output = test
        .command()
        .current_dir(test.root().join("tools"))
        .output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("- Page ("));
    assert!(stdout.contains("web/src/Page.tsx"));

    Ok(())
}
