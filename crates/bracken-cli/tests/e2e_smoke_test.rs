//! End-to-end smoke tests for the CLI pipeline.
//!
//! These drive `bracken_cli::run` on real files in a temporary directory,
//! covering the file-to-file path, configuration loading, and the strict
//! mode failure path.

use std::fs;

use tempfile::tempdir;

use bracken_cli::Args;

/// Builds Args for an input/output pair with everything else defaulted.
fn args_for(input: &str, output: Option<&str>) -> Args {
    Args {
        input: input.to_string(),
        output: output.map(str::to_string),
        config: None,
        strict: false,
        strip_spaces: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_renders_expression_to_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("expr.txt");
    let output_path = temp_dir.path().join("expr.out");
    fs::write(&input_path, "(a+(b+c))").expect("Failed to write input");

    let args = args_for(
        &input_path.to_string_lossy(),
        Some(&output_path.to_string_lossy()),
    );
    bracken_cli::run(&args).expect("Pipeline failed on valid input");

    let outline = fs::read_to_string(&output_path).expect("Failed to read output");
    assert_eq!(outline, "  a\n  +\n    b\n    +\n    c\n");
}

#[test]
fn e2e_strip_spaces_flag() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("expr.txt");
    let output_path = temp_dir.path().join("expr.out");
    fs::write(&input_path, "(a + b)").expect("Failed to write input");

    let mut args = args_for(
        &input_path.to_string_lossy(),
        Some(&output_path.to_string_lossy()),
    );
    args.strip_spaces = true;
    bracken_cli::run(&args).expect("Pipeline failed on valid input");

    let outline = fs::read_to_string(&output_path).expect("Failed to read output");
    assert_eq!(outline, "  a\n  +\n  b\n");
}

#[test]
fn e2e_unbalanced_input_passes_by_default() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("unbalanced.txt");
    let output_path = temp_dir.path().join("unbalanced.out");
    fs::write(&input_path, "(ab").expect("Failed to write input");

    let args = args_for(
        &input_path.to_string_lossy(),
        Some(&output_path.to_string_lossy()),
    );
    bracken_cli::run(&args).expect("Permissive mode must accept unbalanced input");

    let outline = fs::read_to_string(&output_path).expect("Failed to read output");
    assert_eq!(outline, "  a\n  b\n");
}

#[test]
fn e2e_strict_flag_rejects_unbalanced_input() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("unbalanced.txt");
    fs::write(&input_path, "(ab").expect("Failed to write input");

    let mut args = args_for(&input_path.to_string_lossy(), None);
    args.strict = true;

    assert!(
        bracken_cli::run(&args).is_err(),
        "Strict mode must reject unbalanced input"
    );
}

#[test]
fn e2e_config_file_controls_rendering() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("expr.txt");
    let output_path = temp_dir.path().join("expr.out");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&input_path, "(x)").expect("Failed to write input");
    fs::write(
        &config_path,
        "[render]\nindent_style = \"tabs\"\nindent_width = 1\n",
    )
    .expect("Failed to write config");

    let mut args = args_for(
        &input_path.to_string_lossy(),
        Some(&output_path.to_string_lossy()),
    );
    args.config = Some(config_path.to_string_lossy().to_string());
    bracken_cli::run(&args).expect("Pipeline failed on valid input");

    let outline = fs::read_to_string(&output_path).expect("Failed to read output");
    assert_eq!(outline, "\tx\n");
}

#[test]
fn e2e_missing_input_file_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("does-not-exist.txt");

    let args = args_for(&missing.to_string_lossy(), None);
    assert!(bracken_cli::run(&args).is_err());
}
