//! Basic CLI E2E tests.
//!
//! Each test gets its own data directory so store and config writes never
//! leak between tests or into the user's home.

use std::process::Command;

struct Cli {
    data_dir: tempfile::TempDir,
}

impl Cli {
    fn new() -> Self {
        Self {
            data_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Run a CLI command and return (exit code, stdout, stderr).
    fn run(&self, args: &[&str]) -> (i32, String, String) {
        let output = Command::new(env!("CARGO_BIN_EXE_intervalo"))
            .args(args)
            .env("INTERVALO_DATA_DIR", self.data_dir.path())
            .env_remove("INTERVALO_LOG")
            .output()
            .expect("Failed to execute CLI command");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);

        (code, stdout, stderr)
    }

    fn success(&self, args: &[&str]) -> String {
        let (code, stdout, stderr) = self.run(args);
        assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
        stdout
    }
}

#[test]
fn test_help() {
    let stdout = Cli::new().success(&["--help"]);
    assert!(stdout.contains("run"));
    assert!(stdout.contains("settings"));
}

#[test]
fn test_plan_json_defaults() {
    let stdout = Cli::new().success(&["plan", "--json"]);
    let plan: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(plan["set_count"], 8);
    assert_eq!(plan["total_secs"], 240);
    let phases = plan["phases"].as_array().unwrap();
    assert_eq!(phases.len(), 17);
    assert_eq!(phases[0]["kind"], "ready");
    assert_eq!(phases[0]["duration_secs"], 5);
    assert_eq!(phases[16]["kind"], "interval");
}

#[test]
fn test_settings_show_defaults() {
    let stdout = Cli::new().success(&["settings", "show", "--json"]);
    let settings: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(settings["activityTime"], 20);
    assert_eq!(settings["intervalTime"], 10);
    assert_eq!(settings["setNumber"], 8);
    assert_eq!(settings["hasLastInterval"], true);
    assert_eq!(settings["useSound"], true);
}

#[test]
fn test_settings_set_persists() {
    let cli = Cli::new();
    cli.success(&[
        "settings",
        "set",
        "--activity",
        "1:35",
        "--interval",
        "0:05",
        "--sets",
        "3",
        "--last-interval",
        "false",
    ]);

    let stdout = cli.success(&["settings", "show", "--json"]);
    let settings: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(settings["activityTime"], 95);
    assert_eq!(settings["intervalTime"], 5);
    assert_eq!(settings["setNumber"], 3);
    assert_eq!(settings["hasLastInterval"], false);

    let store = std::fs::read_to_string(cli.data_dir.path().join("store.json")).unwrap();
    let store: serde_json::Value = serde_json::from_str(&store).unwrap();
    assert_eq!(store["activityTime"], 95);
}

#[test]
fn test_settings_zero_activity_becomes_one_second() {
    let cli = Cli::new();
    cli.success(&["settings", "set", "--activity", "0:00"]);
    let stdout = cli.success(&["settings", "show", "--json"]);
    let settings: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(settings["activityTime"], 1);
}

#[test]
fn test_settings_out_of_range_fails() {
    let cli = Cli::new();
    let (code, _stdout, stderr) = cli.run(&["settings", "set", "--activity", "45:00"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("out of range"), "{stderr}");

    let (code, _stdout, _stderr) = cli.run(&["settings", "set", "--sets", "0"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_get_set() {
    let cli = Cli::new();
    assert_eq!(cli.success(&["config", "get", "timer.ready_secs"]).trim(), "5");
    cli.success(&["config", "set", "timer.ready_secs", "3"]);
    assert_eq!(cli.success(&["config", "get", "timer.ready_secs"]).trim(), "3");
    assert!(cli.data_dir.path().join("config.toml").exists());

    let (code, _stdout, stderr) = cli.run(&["config", "get", "timer.nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown configuration key"), "{stderr}");
}

#[test]
fn test_run_json_short_workout() {
    let cli = Cli::new();
    cli.success(&["config", "set", "timer.ready_secs", "0"]);
    cli.success(&[
        "settings", "set", "--activity", "1", "--interval", "0", "--sets", "1", "--sound", "false",
    ]);

    let stdout = cli.success(&["run", "--json"]);
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert!(events
        .iter()
        .any(|e| e["type"] == "cue_played" && e["cue"] == "finish"));
    assert!(events
        .iter()
        .any(|e| e["type"] == "set_updated" && e["current"] == 1));

    let last = events.last().unwrap();
    assert_eq!(last["type"], "state_snapshot");
    assert_eq!(last["state"], "finished");
    assert_eq!(last["total_remaining_secs"], 0);
}
