//! Tests for loading animation configs from disk.

use hanoi_console::{AnimationConfig, Colour, Peg, RenderMode, Silent, solve};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_and_solve_from_file() {
    let file = write_config(
        r#"
        colours = ["yellow", "cyan", "white"]
        source = "C"
        target = "A"
        delay_ms = 0
        mode = "plain"
        "#,
    );

    let config = AnimationConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(*config.mode(), RenderMode::Plain);

    let mut tower = config.tower();
    assert_eq!(tower.cylinder(0).map(|c| c.colour()), Some(Colour::Yellow));
    assert_eq!(solve(&mut tower, *config.target(), &mut Silent), Ok(7));
    assert_eq!(tower.shared_peg(), Some(Peg::A));
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config("cylinders = 2\n");
    let config = AnimationConfig::from_file(file.path()).unwrap();
    assert_eq!(config.cylinder_count(), 2);
    assert_eq!(*config.source(), Peg::A);
    assert_eq!(*config.target(), Peg::C);
    assert_eq!(*config.mode(), RenderMode::Inline);
}

#[test]
fn test_cli_style_overrides_win() {
    let file = write_config("cylinders = 2\ntarget = \"B\"\n");
    let config = AnimationConfig::from_file(file.path())
        .unwrap()
        .with_cylinders(5)
        .with_target(Peg::C);
    assert_eq!(config.cylinder_count(), 5);
    assert_eq!(*config.target(), Peg::C);
}

#[test]
fn test_bad_files_are_reported() {
    let err = AnimationConfig::from_file("/nonexistent/hanoi.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));

    let file = write_config("colours = [\"mauve\"]\n");
    let err = AnimationConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_colours_override_file_cylinder_count() {
    let file = write_config(
        r#"
        cylinders = 4
        colours = ["red", "green", "blue"]
        "#,
    );
    let config = AnimationConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.cylinder_count(), 3);
    assert_eq!(config.tower().len(), 3);
}

#[test]
fn test_cli_count_replaces_file_colours() {
    let file = write_config("colours = [\"red\", \"green\", \"blue\"]\n");
    let config = AnimationConfig::from_file(file.path())
        .unwrap()
        .with_cylinders(5);
    assert!(config.validate().is_ok());
    assert_eq!(config.cylinder_count(), 5);
    assert_eq!(config.tower().len(), 5);
}
