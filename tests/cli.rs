use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn minilang() -> Command {
    Command::new(env!("CARGO_BIN_EXE_minilang"))
}

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("minilang_cli_{}_{}", std::process::id(), name));
    fs::write(&path, contents).expect("Failed to write temp file");
    path
}

#[test]
fn run_prints_program_output() {
    let program = write_temp("print.ml", "x = 2; print x * 21; print 7 / 2;");

    let output = minilang().arg("run").arg(&program).output().expect("Failed to execute minilang");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "42\n3.5\n");
}

#[test]
fn run_seeds_variables_and_dumps_them() {
    let program = write_temp(
        "factorial.ml",
        "result = 1; i = 1; while (i < fact + 1) { result = result * i; i = i + 1; }",
    );

    let output = minilang()
        .arg("run")
        .arg(&program)
        .args(["--var", "fact=5", "--dump-vars"])
        .output()
        .expect("Failed to execute minilang");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "fact = 5\ni = 6\nresult = 120\n");
}

#[test]
fn config_vars_are_overridden_by_command_line() {
    let program = write_temp("seeded.ml", "print a; print b;");
    let config = write_temp("seeded.toml", "[vars]\na = 1\nb = 2\n");

    let output = minilang()
        .arg("--config")
        .arg(&config)
        .arg("run")
        .arg(&program)
        .args(["--var", "b=3"])
        .output()
        .expect("Failed to execute minilang");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1\n3\n");
}

#[test]
fn parse_errors_fail_with_message() {
    let program = write_temp("broken.ml", "x = ;");

    let output = minilang().arg("run").arg(&program).output().expect("Failed to execute minilang");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("Parser error").count(), 1, "stderr: {}", stderr);
}

#[test]
fn verbose_run_reports_a_parse_error_once() {
    let program = write_temp("broken_verbose.ml", "print 1 +;");

    let output = minilang().arg("-v").arg("run").arg(&program).output().expect("Failed to execute minilang");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("Parser error").count(), 1, "stderr: {}", stderr);
}

#[test]
fn malformed_var_is_rejected() {
    let program = write_temp("noop.ml", "print 1;");

    let output = minilang()
        .arg("run")
        .arg(&program)
        .args(["--var", "fact"])
        .output()
        .expect("Failed to execute minilang");

    assert!(!output.status.success());
}

#[test]
fn ast_prints_json_tree() {
    let program = write_temp("ast.ml", "print 10 - 3 - 2;");

    let output = minilang()
        .arg("ast")
        .arg(&program)
        .arg("--compact")
        .output()
        .expect("Failed to execute minilang");

    assert!(output.status.success());
    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let print = &tree["Print"];
    assert_eq!(print["Arithmetic"]["op"], "Sub");
    assert_eq!(print["Arithmetic"]["left"]["NumericLiteral"], 10.0);
    assert_eq!(print["Arithmetic"]["right"]["Arithmetic"]["op"], "Sub");
}

#[test]
fn demo_runs_both_examples() {
    let output = minilang().arg("demo").output().expect("Failed to execute minilang");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Factorial of 5:");
    assert_eq!(lines[1], "120");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "Loop example:");
    assert_eq!(lines[4..].len(), 21);
    assert_eq!(lines[14], "10");
    assert_eq!(lines.last(), Some(&"0"));
}
