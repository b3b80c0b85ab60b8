use std::io::Write;
use std::process::{Command, Stdio};

use move_validator::protocol::{run, Session};
use move_validator::protocol::command::parse_command;

fn run_binary(input: &[u8]) -> String {
    let exe = env!("CARGO_BIN_EXE_move_validator");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn validator binary");

    child.stdin.as_mut().unwrap().write_all(input).unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn run_in_memory(input: &str) -> String {
    let mut out = Vec::new();
    run(input.as_bytes(), &mut out).expect("in-memory io cannot fail");
    String::from_utf8(out).unwrap()
}

#[test]
fn protocol_smoke_test_checks_moves() {
    let stdout = run_binary(
        b"isready\ncheck rook a1 a7\ncheck B d3 h8\ncheck pawn e2 e4\ncheck WHITE_KNIGHT c3 c3\nquit\n",
    );
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["readyok", "legal", "illegal", "legal", "illegal"]);
}

#[test]
fn protocol_lists_knight_destinations() {
    let stdout = run_binary(b"moves knight c3\nquit\n");
    assert_eq!(stdout.trim(), "moves a2 a4 b1 b5 d1 d5 e2 e4");
}

#[test]
fn protocol_reports_errors_and_continues() {
    let stdout = run_in_memory("check rook a1\ncheck dragon a1 a2\ncheck rook i1 a1\nfoo\nisready\n");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "error Missing required parts in check command");
    assert_eq!(lines[1], "error Invalid piece name 'dragon'");
    assert_eq!(lines[2], "error Rank 'i' out of bounds (must be a-h)");
    assert_eq!(lines[3], "error Unknown command 'foo'");
    assert_eq!(lines[4], "readyok");
}

#[test]
fn protocol_stops_at_quit() {
    let stdout = run_in_memory("isready\nquit\nisready\n");
    assert_eq!(stdout, "readyok\n");
}

#[test]
fn protocol_prints_tables() {
    let stdout = run_in_memory("coordinates\npieces\n");
    let mut lines = stdout.lines();

    let coordinates = lines.next().unwrap();
    let squares: Vec<&str> = coordinates.split_whitespace().skip(1).collect();
    assert_eq!(squares.len(), 64);
    assert_eq!(squares[0], "a1");
    assert_eq!(squares[63], "h8");

    let pieces: Vec<&str> = lines.collect();
    assert_eq!(pieces.len(), 12);
    assert_eq!(pieces[0], "piece WHITE_KING K");
    assert_eq!(pieces[11], "piece BLACK_PAWN p");
}

#[test]
fn protocol_reports_options_and_handles_setoption() {
    let stdout = run_in_memory(
        "options\nsetoption name Verbose value true\nsetoption name Separator value comma\nmoves king a1\ncheck king a1 b2\nsetoption name Hash value 64\n",
    );

    assert!(stdout.contains("option name Verbose type check default false"));
    assert!(stdout.contains("option name Separator"));
    assert!(stdout.contains("moves a2,b1,b2"));
    assert!(stdout.contains("info string king a1 -> b2 rank_distance 1 file_distance 1\nlegal"));
    assert!(stdout.contains("error Unknown option 'Hash'"));
}

#[test]
fn session_keeps_options_between_commands() {
    let mut session = Session::new();
    let mut out = Vec::new();

    let command = parse_command("setoption name Verbose value 1").unwrap();
    session.execute(command, &mut out).unwrap();
    assert!(session.options.verbose);
    assert!(out.is_empty());
}
