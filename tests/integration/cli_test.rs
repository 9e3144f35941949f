use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_candyrun"))
}

/// Write `content` to a per-test input file and return its path
fn write_input(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "candyrun-cli-{}-{}.txt",
        name,
        std::process::id()
    ));
    fs::write(&path, content).expect("Failed to write test input");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .output()
        .expect("Failed to execute candyrun")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn test_solve_reports_one_based_houses() {
    let input = write_input("basic", "5\n10\n3\n4\n2\n5\n9\n");
    let output = run(&["solve", input.to_str().unwrap()]);
    let _ = fs::remove_file(&input);

    assert_success(&output);
    assert_eq!(
        stdout_of(&output).trim(),
        "Start at home 1 and go to home 3 getting 9 pieces of candy."
    );
}

#[test]
fn test_solve_serial_and_parallel_agree() {
    let input = write_input("agree", "3\n5\n6\n1\n1\n");
    let path = input.to_str().unwrap();

    let serial = run(&["solve", path, "--algorithm", "serial"]);
    let parallel = run(&["solve", path, "--algorithm", "parallel", "-j", "4"]);
    let _ = fs::remove_file(&input);

    assert_success(&serial);
    assert_success(&parallel);
    assert_eq!(stdout_of(&serial), stdout_of(&parallel));
    assert_eq!(
        stdout_of(&serial).trim(),
        "Start at home 2 and go to home 3 getting 2 pieces of candy."
    );
}

#[test]
fn test_solve_no_solution() {
    let input = write_input("none", "3\n5\n6\n7\n8\n");
    let output = run(&["solve", input.to_str().unwrap()]);
    let _ = fs::remove_file(&input);

    assert_success(&output);
    assert_eq!(stdout_of(&output).trim(), "There are no solutions.");
}

#[test]
fn test_solve_compare_and_stats() {
    let input = write_input("compare", "6\n5\n9\n2\n3\n1\n4\n5\n");
    let output = run(&["solve", input.to_str().unwrap(), "--compare", "--stats"]);
    let _ = fs::remove_file(&input);

    assert_success(&output);
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Start at home 2 and go to home 3 getting 5 pieces of candy."));
    assert!(stdout.contains("Algorithm: parallel"));
    assert!(stdout.contains("Stopped early"));
    assert!(stdout.contains("parallel and serial searches agree."));
}

#[test]
fn test_solve_missing_file_fails() {
    let output = run(&["solve", "definitely-missing-candyrun-input.txt"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not found"),
        "Unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_solve_malformed_input_fails() {
    let input = write_input("malformed", "3\n10\n1\nx\n2\n");
    let output = run(&["solve", input.to_str().unwrap()]);
    let _ = fs::remove_file(&input);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 4"), "Unexpected stderr: {}", stderr);
}

#[test]
fn test_solve_header_only_fails() {
    let input = write_input("header", "3\n");
    let output = run(&["solve", input.to_str().unwrap()]);
    let _ = fs::remove_file(&input);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not enough data"));
}

#[test]
fn test_generate_then_solve() {
    let path = std::env::temp_dir().join(format!(
        "candyrun-cli-generated-{}.txt",
        std::process::id()
    ));
    let path_str = path.to_str().unwrap();

    let generated = run(&[
        "generate",
        path_str,
        "--homes",
        "500",
        "--max",
        "200",
        "--max-piece",
        "60",
        "--seed",
        "42",
    ]);
    assert_success(&generated);
    assert!(stdout_of(&generated).contains("Wrote 500 homes"));

    let solved = run(&["solve", path_str, "--compare", "-j", "3"]);
    let content = fs::read_to_string(&path).unwrap_or_default();
    let _ = fs::remove_file(&path);

    assert_success(&solved);
    assert_eq!(content.lines().next(), Some("500"));
    assert!(stdout_of(&solved).contains("searches agree."));
}

#[test]
fn test_bare_invocation_reads_input_txt() {
    let dir = std::env::temp_dir().join(format!("candyrun-cli-default-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create test directory");
    fs::write(dir.join("input.txt"), "5\n10\n3\n4\n2\n5\n9\n").expect("Failed to write input.txt");

    let output = Command::new(get_binary_path())
        .current_dir(&dir)
        .output()
        .expect("Failed to execute candyrun");
    let _ = fs::remove_dir_all(&dir);

    assert_success(&output);
    assert_eq!(
        stdout_of(&output).trim(),
        "Start at home 1 and go to home 3 getting 9 pieces of candy."
    );
}

#[test]
fn test_file_without_subcommand() {
    let input = write_input("positional", "3\n5\n6\n1\n1\n");
    let output = run(&[input.to_str().unwrap(), "-j", "2"]);
    let _ = fs::remove_file(&input);

    assert_success(&output);
    assert_eq!(
        stdout_of(&output).trim(),
        "Start at home 2 and go to home 3 getting 2 pieces of candy."
    );
}

#[test]
fn test_plain_run_keeps_stderr_quiet() {
    let input = write_input("quiet", "5\n10\n3\n4\n2\n5\n9\n");
    let output = run(&["solve", input.to_str().unwrap()]);
    let _ = fs::remove_file(&input);

    assert_success(&output);
    assert!(
        output.stderr.is_empty(),
        "Unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_verbose_logging_has_no_colour_codes_when_redirected() {
    let input = write_input("verbose", "5\n10\n3\n4\n2\n5\n9\n");
    let output = run(&["solve", input.to_str().unwrap(), "-v"]);
    let _ = fs::remove_file(&input);

    assert_success(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Searching"), "Unexpected stderr: {}", stderr);
    assert!(!stderr.contains('\x1b'), "Colour codes in stderr: {:?}", stderr);
}
