use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_technique"))
}

/// Command for the binary in `cwd` with an isolated config home and piped stdio.
fn technique(cwd: &Path, args: &[&str]) -> Command {
    let config_home = cwd.join("config-home");
    std::fs::create_dir_all(&config_home).expect("create config home");

    let mut command = Command::new(bin());
    command
        .args(args)
        .current_dir(cwd)
        .env("XDG_CONFIG_HOME", &config_home)
        .env_remove("TECHNIQUE_CONFIG")
        .env_remove("TECHNIQUE_OUTPUT_DIR")
        .env_remove("TECHNIQUE_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    command
}

/// Spawn `command`, pipe `input` to stdin, and wait for it to exit.
fn run(mut command: Command, input: &str) -> Output {
    let mut child = command.spawn().expect("spawn technique");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for technique")
}

fn run_with_input(cwd: &Path, args: &[&str], input: &str) -> Output {
    run(technique(cwd, args), input)
}

/// Names of record and temp files left in `dir`.
fn written_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json") || name.starts_with(".tmp"))
        .collect();
    names.sort();
    names
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Answers for a record with the given id and every list left empty.
fn minimal_answers(id: &str) -> String {
    format!("{}\nTest\nCat\nLine1\n\n\n{}\n\n", id, "\n\n".repeat(6))
}

fn read_json(path: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(path).expect("read record file");
    serde_json::from_str(&contents).expect("parse record json")
}

#[test]
fn test_cli_minimal_record_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = format!("{}n\n", minimal_answers("T1"));
    let output = run_with_input(dir.path(), &[], &input);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let expected = serde_json::json!({
        "technique_id": "T1",
        "title": "Test",
        "category": "Cat",
        "description": "Line1",
        "requirements": [],
        "enumeration_steps": [],
        "exploitation_steps": {"technique_id": "T1", "steps": []},
        "validation": [],
        "detection": {"tools": []},
        "references": [],
        "last_updated": today(),
        "author": "Nico"
    });
    assert_eq!(read_json(&dir.path().join("T1.json")), expected);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Technique JSON Data Entry ==="));
    assert!(stdout.contains("--- Current JSON Data ---"));
    assert!(stdout.contains("JSON data saved to T1.json"));
}

#[test]
fn test_cli_file_is_four_space_indented() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = format!("{}n\n", minimal_answers("T2"));
    let output = run_with_input(dir.path(), &[], &input);
    assert!(output.status.success());

    let contents = std::fs::read_to_string(dir.path().join("T2.json")).expect("read");
    assert!(contents.starts_with("{\n    \"technique_id\": \"T2\",\n"));
}

#[test]
fn test_cli_edit_during_review() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = format!(
        "{}y\nrequirements\nadmin\nnetwork access\n\n\ny\nbogus\nn\n",
        minimal_answers("T3")
    );
    let output = run_with_input(dir.path(), &[], &input);
    assert!(output.status.success());

    let value = read_json(&dir.path().join("T3.json"));
    assert_eq!(
        value["requirements"],
        serde_json::json!(["admin", "network access"])
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Field not found in data. Please check the field name."));
}

#[test]
fn test_cli_renamed_id_names_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = format!("{}y\ntechnique_id\nT4b\nn\n", minimal_answers("T4"));
    let output = run_with_input(dir.path(), &[], &input);
    assert!(output.status.success());

    assert!(!dir.path().join("T4.json").exists());
    let value = read_json(&dir.path().join("T4b.json"));
    assert_eq!(value["technique_id"], "T4b");
    assert_eq!(value["exploitation_steps"]["technique_id"], "T4");
}

#[test]
fn test_cli_empty_id_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = format!("{}n\n", minimal_answers(""));
    let output = run_with_input(dir.path(), &[], &input);

    assert_eq!(output.status.code(), Some(4));
    assert!(written_files(dir.path()).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("technique_id is required"));
}

#[test]
fn test_cli_empty_id_can_be_fixed_before_saving() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = format!("{}n\nT8\nn\n", minimal_answers(""));
    let output = run_with_input(dir.path(), &[], &input);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(written_files(dir.path()), vec!["T8.json"]);
    let value = read_json(&dir.path().join("T8.json"));
    assert_eq!(value["technique_id"], "T8");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Validation error: technique_id is required"));
    assert!(stdout.contains("Enter technique_id (required to save): "));
}

#[test]
fn test_cli_author_flag_and_output_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = format!("{}n\n", minimal_answers("T5"));
    let output = run_with_input(
        dir.path(),
        &["--author", "Alice", "--output-dir", "records", "--quiet"],
        &input,
    );
    assert!(output.status.success());

    let value = read_json(&dir.path().join("records").join("T5.json"));
    assert_eq!(value["author"], "Alice");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("JSON data saved to"));
}

#[test]
fn test_cli_config_file_default_author() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_dir = dir.path().join("config-home").join("technique");
    std::fs::create_dir_all(&config_dir).expect("create config dir");
    std::fs::write(
        config_dir.join("config.toml"),
        "[record]\ndefault_author = \"Red Team\"\n",
    )
    .expect("write config");

    let input = format!("{}n\n", minimal_answers("T6"));
    let output = run_with_input(dir.path(), &[], &input);
    assert!(output.status.success());

    let value = read_json(&dir.path().join("T6.json"));
    assert_eq!(value["author"], "Red Team");
}

#[test]
fn test_cli_overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("T7.json"), "stale").expect("write stale");

    let input = format!("{}n\n", minimal_answers("T7"));
    let output = run_with_input(dir.path(), &[], &input);
    assert!(output.status.success());

    let value = read_json(&dir.path().join("T7.json"));
    assert_eq!(value["title"], "Test");
}

#[test]
fn test_cli_runs_without_home() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut command = technique(dir.path(), &[]);
    command.env_remove("HOME").env_remove("XDG_CONFIG_HOME");

    let output = run(command, &format!("{}n\n", minimal_answers("T9")));
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(read_json(&dir.path().join("T9.json"))["author"], "Nico");
}

#[cfg(unix)]
#[test]
fn test_cli_interrupt_writes_nothing() {
    use std::io::Read;

    let dir = tempfile::tempdir().expect("tempdir");
    let mut child = technique(dir.path(), &[]).spawn().expect("spawn technique");
    let mut stdin = child.stdin.take().expect("stdin");
    stdin.write_all(b"T1\nTest\n").expect("write stdin");

    // Wait until the process is blocked on the third prompt.
    let mut stdout = child.stdout.take().expect("stdout");
    let mut seen = Vec::new();
    let mut buf = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains("Enter category: ") {
        let n = stdout.read(&mut buf).expect("read stdout");
        assert!(n > 0, "stdout closed early: {}", String::from_utf8_lossy(&seen));
        seen.extend_from_slice(&buf[..n]);
    }

    // SAFETY: signals a child process this test owns
    let rc = unsafe { libc::kill(child.id() as libc::pid_t, libc::SIGINT) };
    assert_eq!(rc, 0);

    let output = child.wait_with_output().expect("wait for technique");
    drop(stdin);

    assert_eq!(output.status.code(), Some(130));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error=Aborted; nothing was written."), "stderr: {}", stderr);
    assert!(written_files(dir.path()).is_empty());
}

#[test]
fn test_cli_invalid_args_exit_code() {
    let output = Command::new(bin())
        .arg("--no-such-flag")
        .output()
        .expect("run technique");
    assert_eq!(output.status.code(), Some(2));
}
