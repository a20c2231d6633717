//! End-to-end tests for the `pulse` binary.
//!
//! These spawn the real executable against transcript files on disk
//! and check output, exit codes, and flag handling.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "\
1/1/24, 9:15 AM - Alice: Good morning everyone
1/1/24, 9:20 AM - Bob: morning!
1/2/24, 10:00 AM - Alice: anyone up for lunch?
1/2/24, 10:05 AM - Carol joined using this group's invite link
";

/// Write a transcript into a fresh temp dir and return both.
fn sample_file(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("chat.txt");
    fs::write(&path, content).expect("write transcript");
    (dir, path)
}

/// A `pulse` command rooted in the given directory.
///
/// Running from a temp dir keeps project config files out of the
/// picture.
fn pulse(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pulse").expect("binary builds");
    cmd.current_dir(dir.path());
    cmd
}

mod text_output {
    use super::*;

    #[test]
    fn test_default_report_sections() {
        let (dir, path) = sample_file(SAMPLE);

        pulse(&dir)
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Group Activity Report"))
            .stdout(predicate::str::contains("Date Range: Dec 27 to Jan 2"))
            .stdout(predicate::str::contains("Total Users:        2"))
            .stdout(predicate::str::contains("New Joins (7 days): 1"))
            .stdout(predicate::str::contains("Daily Activity"))
            .stdout(predicate::str::contains("Consistent Participants"));
    }

    #[test]
    fn test_no_chart_drops_the_bars() {
        let (dir, path) = sample_file(SAMPLE);

        pulse(&dir)
            .arg(&path)
            .arg("--no-chart")
            .assert()
            .success()
            .stdout(predicate::str::contains("█").not())
            .stdout(predicate::str::contains("#").not());
    }

    #[test]
    fn test_ascii_mode_swaps_the_glyphs() {
        let (dir, path) = sample_file(SAMPLE);

        pulse(&dir)
            .arg(&path)
            .arg("--ascii")
            .assert()
            .success()
            .stdout(predicate::str::contains("|"))
            .stdout(predicate::str::contains("│").not())
            .stdout(predicate::str::contains("█").not());
    }

    #[test]
    fn test_piped_output_carries_no_ansi_codes() {
        let (dir, path) = sample_file(SAMPLE);

        pulse(&dir)
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("\x1b[").not());
    }
}

mod json_output {
    use super::*;

    #[test]
    fn test_json_flag_emits_parseable_json() {
        let (dir, path) = sample_file(SAMPLE);

        let output = pulse(&dir)
            .arg(&path)
            .arg("--json")
            .output()
            .expect("run binary");

        assert!(output.status.success());
        let value: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("stdout is JSON");
        assert_eq!(value["total_users"], 2);
        assert_eq!(value["total_messages"], 3);
        assert_eq!(value["total_joins"], 1);
        assert_eq!(value["days"].as_array().map(Vec::len), Some(7));
        assert_eq!(value["date_range"]["end"], "Jan 2");
    }

    #[test]
    fn test_output_flag_matches_json_shorthand() {
        let (dir, path) = sample_file(SAMPLE);

        let via_flag = pulse(&dir)
            .arg(&path)
            .args(["-o", "json"])
            .output()
            .expect("run binary");
        let via_shorthand = pulse(&dir)
            .arg(&path)
            .arg("--json")
            .output()
            .expect("run binary");

        assert_eq!(via_flag.stdout, via_shorthand.stdout);
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let (dir, path) = sample_file(SAMPLE);

        pulse(&dir)
            .arg(&path)
            .arg("--json")
            .arg("--pretty")
            .assert()
            .success()
            .stdout(predicate::str::contains("  \"total_users\": 2"));
    }

    #[test]
    fn test_output_env_var_selects_json() {
        let (dir, path) = sample_file(SAMPLE);

        let output = pulse(&dir)
            .arg(&path)
            .env("PULSE_OUTPUT", "json")
            .output()
            .expect("run binary");

        assert!(output.status.success());
        serde_json::from_slice::<serde_json::Value>(&output.stdout).expect("stdout is JSON");
    }
}

mod tsv_output {
    use super::*;

    #[test]
    fn test_tsv_sections() {
        let (dir, path) = sample_file(SAMPLE);

        let output = pulse(&dir)
            .arg(&path)
            .args(["-o", "tsv"])
            .output()
            .expect("run binary");

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).expect("utf8 output");
        let lines: Vec<&str> = stdout.lines().collect();

        assert_eq!(lines[0], "date\tday\tactive_users\tnew_users\tmessages");
        assert_eq!(lines[1], "2023-12-27\tDec 27\t0\t0\t0");
        assert_eq!(lines[7], "2024-01-02\tJan 2\t1\t1\t1");
        assert!(stdout.contains("total_messages\t3"));
        assert!(stdout.contains("user\tactive_days\tdays"));
    }
}

mod stdin_input {
    use super::*;

    #[test]
    fn test_dash_reads_from_stdin() {
        let dir = TempDir::new().expect("create temp dir");

        pulse(&dir)
            .arg("-")
            .write_stdin(SAMPLE)
            .assert()
            .success()
            .stdout(predicate::str::contains("Total Users:        2"))
            .stdout(predicate::str::contains("Date Range: Dec 27 to Jan 2"));
    }
}

mod failure_modes {
    use super::*;

    #[test]
    fn test_missing_file_exits_3() {
        let dir = TempDir::new().expect("create temp dir");

        pulse(&dir)
            .arg("no-such-file.txt")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("File not found"));
    }

    #[test]
    fn test_dateless_input_exits_65() {
        let (dir, path) = sample_file("just some notes\nnothing dated\n");

        pulse(&dir)
            .arg(&path)
            .assert()
            .code(65)
            .stderr(predicate::str::contains("No valid messages"));
    }

    #[test]
    fn test_broken_explicit_config_exits_5() {
        let (dir, path) = sample_file(SAMPLE);
        let config_path = dir.path().join("broken.toml");
        fs::write(&config_path, "not [valid toml").expect("write config");

        pulse(&dir)
            .arg(&path)
            .arg("--config")
            .arg(&config_path)
            .assert()
            .code(5)
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn test_no_file_argument_is_a_usage_error() {
        let dir = TempDir::new().expect("create temp dir");

        pulse(&dir).assert().failure();
    }
}

mod config_file {
    use super::*;

    #[test]
    fn test_project_config_is_picked_up() {
        let (dir, path) = sample_file(SAMPLE);
        fs::write(
            dir.path().join(".chat-pulse.toml"),
            "[report]\nchart = false\n",
        )
        .expect("write project config");

        pulse(&dir)
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("█").not());
    }

    #[test]
    fn test_project_config_can_turn_on_pretty_json() {
        let (dir, path) = sample_file(SAMPLE);
        fs::write(
            dir.path().join(".chat-pulse.toml"),
            "[report]\npretty_json = true\n",
        )
        .expect("write project config");

        let output = pulse(&dir)
            .arg(&path)
            .arg("--json")
            .output()
            .expect("run binary");

        let stdout = String::from_utf8(output.stdout).expect("utf8 output");
        assert!(stdout.contains("  \"total_users\""));
    }
}

mod completions {
    use super::*;

    #[test]
    fn test_bash_completions_generate() {
        let dir = TempDir::new().expect("create temp dir");

        pulse(&dir)
            .args(["--completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("pulse"));
    }
}
