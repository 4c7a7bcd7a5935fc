//! CLI smoke tests for the leads-server binary.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;

fn run_leads_server(args: &[&str]) -> std::process::Output {
    run_leads_server_with_env(args, &[])
}

fn run_leads_server_with_env(args: &[&str], env: &[(&str, &str)]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_leads-server"));
    cmd.args(args)
        .env_remove("ADMIN_EMAIL")
        .env_remove("ADMIN_PASSWORD")
        .env_remove("ADMIN_SESSION_SECRET")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (k, v) in env {
        cmd.env(k, v);
    }
    cmd.output().expect("Failed to execute leads-server")
}

/// Config whose home_dir (and so logs and sqlite files) lives in `dir`.
fn write_config(dir: &Path, extra: &str) -> String {
    let path = dir.join("config.yaml");
    let content = format!(
        r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 0
{extra}"#,
        dir.join("home").to_string_lossy().replace('\\', "/")
    );
    std::fs::write(&path, content).expect("Failed to write config file");
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help_command() {
    let output = run_leads_server(&["--help"]);
    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("leads-server"), "Should contain binary name");
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--mock"), "Should mention mock option");
}

#[test]
fn test_cli_version_command() {
    let output = run_leads_server(&["--version"]);
    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("leads-server"));
    assert!(stdout.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_leads_server(&["invalid-command"]);
    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("unrecognized"),
        "Should contain error message about invalid command"
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_leads_server(&["--config", "/nonexistent/config.yaml", "check"]);
    assert!(!output.status.success(), "Should fail with missing config");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config file not found"),
        "Should mention config file issue: {}",
        stderr
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("invalid.yaml");
    std::fs::write(&config_path, "invalid: yaml: content: [unclosed")
        .expect("Failed to write file");

    let output = run_leads_server(&["--config", config_path.to_str().unwrap(), "check"]);
    assert!(!output.status.success(), "Should fail with invalid YAML");
}

#[test]
fn test_cli_check_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        temp_dir.path(),
        r#"
database:
  url: "sqlite://database/leads.db"

logging:
  default:
    console_level: info
    file: "logs/leads-server.log"
    file_level: info
    max_backups: 3
    max_size_mb: 10
"#,
    );

    let output = run_leads_server(&["--config", &config_path, "check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "Should succeed with valid config\nSTDOUT: {stdout}\nSTDERR: {stderr}"
    );
    assert!(stdout.contains("Configuration check passed"));
    assert!(stdout.contains("Sqlite"));
}

#[test]
fn test_cli_check_production_requires_admin_credentials() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(temp_dir.path(), "  profile: production\n");

    let output = run_leads_server(&["--config", &config_path, "check"]);
    assert!(
        !output.status.success(),
        "Production without admin credentials must fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("admin"), "Should name the admin setting: {stderr}");

    let output = run_leads_server_with_env(
        &["--config", &config_path, "check"],
        &[
            ("ADMIN_EMAIL", "owner@marine.test"),
            ("ADMIN_PASSWORD", "s3cret-pass"),
            ("ADMIN_SESSION_SECRET", "long-random-signing-key"),
        ],
    );
    assert!(
        output.status.success(),
        "Env credentials satisfy production: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_cli_mock_flag_ignores_database_url() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        temp_dir.path(),
        r#"
database:
  url: "postgresql://localhost/nonexistent"
"#,
    );

    let output = run_leads_server(&["--config", &config_path, "--mock", "check"]);
    assert!(
        output.status.success(),
        "Should succeed with mock database: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_cli_unsupported_database_scheme() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        temp_dir.path(),
        r#"
database:
  url: "mysql://localhost/leads"
"#,
    );

    let output = run_leads_server(&["--config", &config_path, "check"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported database type"), "{stderr}");
}

#[test]
fn test_cli_invalid_bind_address() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(
        &path,
        format!(
            "server:\n  home_dir: \"{}\"\n  host: \"not an address\"\n  port: 8087\n",
            temp_dir.path().join("home").to_string_lossy().replace('\\', "/")
        ),
    )
    .unwrap();

    let output = run_leads_server(&["--config", path.to_str().unwrap(), "check"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid bind address"), "{stderr}");
}

#[test]
fn test_cli_print_config_applies_port_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(temp_dir.path(), "");

    let output = run_leads_server(&["--config", &config_path, "--port", "9191", "--print-config"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 9191"), "{stdout}");
}

#[tokio::test]
async fn test_cli_run_command_with_mock_database() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(temp_dir.path(), "");

    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_leads-server"));
    cmd.args(["--config", &config_path, "--mock", "run"])
        .env_remove("ADMIN_EMAIL")
        .env_remove("ADMIN_PASSWORD")
        .env_remove("ADMIN_SESSION_SECRET")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    // A running server does not exit by itself; the timeout is the success path.
    let result = tokio::time::timeout(Duration::from_secs(5), cmd.output()).await;
    match result {
        Err(_elapsed) => {}
        Ok(output) => {
            let output = output.expect("process output");
            panic!(
                "Server exited early\nSTDOUT: {}\nSTDERR: {}",
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
    }
}
