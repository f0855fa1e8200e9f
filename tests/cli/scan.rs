use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_reports_unused_components() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/A.tsx", "export default function Foo() { return null; }"),
        ("src/B.tsx", "function Bar() { return null; }"),
        ("src/C.tsx", "import Foo from './A'; const C = () => <Foo/>;"),
    ])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\nUnused components found:\n- Bar (src/B.tsx)\n- C (src/C.tsx)\n\n2 unused components out of 3 declared\n"
    );

    Ok(())
}

#[test]
fn test_no_unused_components() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "src/App.tsx",
            r#"
            import { Header } from "./Header";
            export default function App() {
                return <Header title="Home" />;
            }
            "#,
        ),
        ("src/Header.tsx", "export const Header = ({ title }) => <h1>{title}</h1>;"),
        ("src/index.tsx", "import App from './App'; render(<App />);"),
    ])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @"✓ No unused components found!");

    Ok(())
}

#[test]
fn test_falls_back_to_source_directory() -> Result<()> {
    let test = CliTest::with_files(&[("source/Lonely.jsx", "export const Lonely = () => <p />;")])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("- Lonely (source/Lonely.jsx)"));

    Ok(())
}

#[test]
fn test_missing_source_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("README.md", "# no sources")?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("No source directory found"));

    Ok(())
}

#[test]
fn test_src_path_must_exist() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--src-path", "web"])?;

    assert_eq!(output.code, Some(1));
    assert_snapshot!(
        output.stderr.trim_end(),
        @r#"Error: Directory "web" does not exist or wasn't found."#
    );

    Ok(())
}

#[test]
fn test_empty_source_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("src")?;
    test.write_file("src/styles.css", "body {}")?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @"✓ No unused components found!");
    assert!(output.stderr.contains("No files found to scan"));

    Ok(())
}

#[test]
fn test_malformed_file_does_not_stop_scan() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/Broken.tsx", "export function Broken( {"),
        ("src/Orphan.tsx", "export function Orphan() { return null; }"),
    ])?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("- Orphan (src/Orphan.tsx)"));
    assert!(!output.stdout.contains("Broken"));
    assert!(
        output
            .stderr
            .contains("1 file(s) could not be parsed (use -v for details)")
    );

    let verbose = test.run(&["-v"])?;
    assert!(verbose.stderr.contains("Failed to parse"));
    assert!(verbose.stderr.contains("Broken.tsx"));

    Ok(())
}

#[test]
fn test_ignore_and_extension_flags() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/Card.tsx", "export const Card = () => null;"),
        ("src/Panel.jsx", "export const Panel = () => null;"),
        ("src/legacy/Old.tsx", "export const Old = () => null;"),
    ])?;

    let output = test.run(&["-i", "legacy", "-e", ".tsx"])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\nUnused components found:\n- Card (src/Card.tsx)\n\n1 unused component out of 1 declared\n"
    );

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/List.tsx", "export const List = () => <Item />;"),
        ("src/Item.tsx", "export function Item() { return <li />; }"),
    ])?;

    let output = test.run(&["--format", "json"])?;
    assert_eq!(output.code, Some(0));

    let report: serde_json::Value = serde_json::from_str(&output.stdout)?;
    let components: Vec<_> = report["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| (c["name"].as_str().unwrap(), c["isUsed"].as_bool().unwrap()))
        .collect();

    assert_eq!(components, vec![("Item", true), ("List", false)]);
    assert_eq!(report["unused"][0]["filePath"], "src/List.tsx");

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--help"])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Detect unused React components"));
    assert!(output.stdout.contains("--extensions"));

    Ok(())
}
