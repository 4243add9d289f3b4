//! End-to-end tests for the `nodal` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

fn nodal(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nodal"))
        .args(args)
        .output()
        .expect("failed to spawn nodal")
}

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_separation_prints_judge_output() {
    let file = input_file(
        "4 4\nAlice Bob Bob Carol\nCarol Dave Dave Alice\n\
         5 4\nAlice Bob Bob Carol\nCarol Dave Dave Alice\n0 0\n",
    );
    let output = nodal(&["--quiet", "separation", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Network 1: 2\n\nNetwork 2: DISCONNECTED\n\n"
    );
}

#[test]
fn test_babel_reads_standard_input() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_nodal"))
        .args(["--quiet", "babel"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn nodal");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"2\na c\na b xx\nb c yyy\n1\na b\na c zz\n0\n")
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait for nodal");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "5\nimpossivel\n");
}

#[test]
fn test_babel_json_output() {
    let file = input_file("1\na b\na b word\n0\n");
    let output = nodal(&["--quiet", "--format", "json", "babel", file.path().to_str().unwrap()]);
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed[0]["cost"], 4);
    assert_eq!(parsed[0]["start"], "a");
}

#[test]
fn test_run_dijkstra_json_on_both_storages() {
    let file = input_file("directed weighted\nu v 0\nv s 5\ns v4 7\nv4 v5 3\n");
    for repr in ["list", "matrix"] {
        let output = nodal(&[
            "--format",
            "json",
            "run",
            "dijkstra",
            file.path().to_str().unwrap(),
            "--repr",
            repr,
        ]);
        assert!(output.status.success());

        let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(parsed["source"], "u");
        let distances: Vec<f64> = parsed["distances"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["distance"].as_f64().unwrap())
            .collect();
        assert_eq!(distances, vec![0.0, 0.0, 5.0, 12.0, 15.0]);
        assert_eq!(
            parsed["distances"][4]["path"],
            serde_json::json!(["u", "v", "s", "v4", "v5"])
        );
    }
}

#[test]
fn test_run_kruskal_json() {
    let file = input_file("undirected weighted\nu v 0\nv s -5\ns v4 7\nv4 v5 -3\n");
    let output = nodal(&["--format", "json", "run", "kruskal", file.path().to_str().unwrap()]);
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let weights: Vec<f64> = parsed["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["weight"].as_f64().unwrap())
        .collect();
    assert_eq!(weights, vec![-5.0, -3.0, 0.0, 7.0]);
    assert_eq!(parsed["spanning"], true);
}

#[test]
fn test_run_bfs_with_source() {
    let file = input_file("directed unweighted\na b\nb c\nc a\n");
    let output = nodal(&[
        "--format",
        "json",
        "run",
        "bfs",
        file.path().to_str().unwrap(),
        "--source",
        "b",
    ]);
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["order"], serde_json::json!(["b", "c", "a"]));
}

#[test]
fn test_run_table_output_mentions_vertices() {
    let file = input_file("undirected weighted\na b 2\nb c 3\n");
    let output = nodal(&["--quiet", "run", "floyd-warshall", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains('a'));
    assert!(text.contains('5'));
}

#[test]
fn test_run_reports_library_errors() {
    let file = input_file("directed unweighted\na b\n");
    let output = nodal(&["run", "dijkstra", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: dijkstra requires a weighted graph"));
}

#[test]
fn test_run_reports_unknown_source() {
    let file = input_file("undirected weighted\na b 1\n");
    let output = nodal(&["run", "prim", file.path().to_str().unwrap(), "--source", "zz"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("vertex not found"));
}

#[test]
fn test_missing_file_is_an_error() {
    let output = nodal(&["separation", "/definitely/not/here.txt"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"));
}
