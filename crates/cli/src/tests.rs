use std::io::Write as _;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use test_support::{AceBuilder, AclBuilder, SecurityDescriptorBuilder};

use super::*;

struct Outcome {
    code: i32,
    stdout: String,
    stderr: String,
}

fn run_on(args: &[&str], input: &[u8]) -> Outcome {
    let mut stdin = input;
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run_with_input(args.iter().copied(), &mut stdin, &mut stdout, &mut stderr);
    Outcome {
        code,
        stdout: String::from_utf8(stdout).expect("utf-8 stdout"),
        stderr: String::from_utf8(stderr).expect("utf-8 stderr"),
    }
}

fn sample_dacl() -> Vec<u8> {
    AclBuilder::new()
        .ace(AceBuilder::new(0, "S-1-5-18").mask(0x000F_01FF).build())
        .ace(AceBuilder::new(0, "S-1-5-11").mask(0x8000_0000).flags(0x12).build())
        .build()
}

fn sample_descriptor() -> Vec<u8> {
    SecurityDescriptorBuilder::new()
        .owner("S-1-5-32-544")
        .group("S-1-5-18")
        .dacl(sample_dacl())
        .build()
}

#[test]
fn help_goes_to_stdout() {
    let outcome = run_on(&["adsec", "--help"], b"");
    assert_eq!(outcome.code, EXIT_OK);
    assert!(outcome.stdout.contains("--check-acl-size"));
    assert!(outcome.stderr.is_empty());
}

#[test]
fn missing_input_is_a_usage_error() {
    let outcome = run_on(&["adsec"], b"");
    assert_eq!(outcome.code, EXIT_USAGE);
    assert!(outcome.stdout.is_empty());
    assert!(!outcome.stderr.is_empty());
}

#[test]
fn unknown_kind_is_a_usage_error() {
    let outcome = run_on(&["adsec", "--kind", "sid", "-"], b"");
    assert_eq!(outcome.code, EXIT_USAGE);
}

#[test]
fn descriptor_from_stdin_renders_text() {
    let outcome = run_on(&["adsec", "-"], &sample_descriptor());
    assert_eq!(outcome.code, EXIT_OK, "stderr: {}", outcome.stderr);

    let lines: Vec<_> = outcome.stdout.lines().collect();
    assert_eq!(lines[0], "revision: 1");
    assert!(lines[1].starts_with("control: 0x8004 ("));
    assert_eq!(lines[2], "owner: S-1-5-32-544");
    assert_eq!(lines[3], "group: S-1-5-18");
    assert_eq!(lines[4], "sacl: none");
    assert!(lines[5].starts_with("dacl: ACL_REVISION_DS"));
    assert!(lines[6].contains("trustee=S-1-5-18"));
    assert!(lines[7].contains("flags=CONTAINER_INHERIT | INHERITED"));
    assert_eq!(lines.len(), 8);
}

#[test]
fn descriptor_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(&sample_descriptor()).expect("write sample");
    let path = file.path().to_str().expect("utf-8 path");

    let outcome = run_on(&["adsec", path], b"");
    assert_eq!(outcome.code, EXIT_OK);
    assert!(outcome.stdout.contains("owner: S-1-5-32-544"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.bin");

    let outcome = run_on(&["adsec", path.to_str().expect("utf-8 path")], b"");
    assert_eq!(outcome.code, EXIT_IO);
    assert!(outcome.stderr.starts_with("adsec: failed to read "));
}

#[test]
fn acl_kind_renders_entries() {
    let outcome = run_on(&["adsec", "-k", "acl", "-"], &sample_dacl());
    assert_eq!(outcome.code, EXIT_OK);
    assert!(outcome.stdout.starts_with("acl: ACL_REVISION_DS size=48 entries=2\n"));
}

#[test]
fn ace_kind_renders_single_line() {
    let entry = AceBuilder::new(1, "S-1-1-0").mask(0x0001_0000).build();
    let outcome = run_on(&["adsec", "--kind", "ace", "-"], &entry);
    assert_eq!(outcome.code, EXIT_OK);
    assert_eq!(
        outcome.stdout,
        "  [0] ACCESS_DENIED flags=- mask=0x00010000 rights=DELETE trustee=S-1-1-0\n"
    );
}

#[test]
fn json_output_names_fields() {
    let outcome = run_on(&["adsec", "--json", "-"], &sample_descriptor());
    assert_eq!(outcome.code, EXIT_OK);

    let value: serde_json::Value = serde_json::from_str(&outcome.stdout).expect("valid JSON");
    assert_eq!(value["owner"], "S-1-5-32-544");
    assert!(value["sacl"].is_null());
    let aces = value["dacl"]["aces"].as_array().expect("aces array");
    assert_eq!(aces.len(), 2);
    assert_eq!(aces[0]["type"], "ACCESS_ALLOWED");
    assert_eq!(aces[1]["trustee"], "S-1-5-11");
}

#[test]
fn base64_input_tolerates_line_folds() {
    let encoded = STANDARD.encode(sample_descriptor());
    let (head, tail) = encoded.split_at(20);
    let folded = format!("{head}\n {tail}\n");

    let outcome = run_on(&["adsec", "--base64", "-"], folded.as_bytes());
    assert_eq!(outcome.code, EXIT_OK, "stderr: {}", outcome.stderr);
    assert!(outcome.stdout.contains("group: S-1-5-18"));
}

#[test]
fn invalid_base64_is_a_decode_error() {
    let outcome = run_on(&["adsec", "--base64", "-"], b"!!not base64!!");
    assert_eq!(outcome.code, EXIT_DECODE);
    assert!(outcome.stderr.starts_with("adsec: invalid base64 input"));
}

#[test]
fn malformed_structure_is_a_decode_error() {
    let mut entry = AceBuilder::new(0, "S-1-5-18").build();
    entry[0] = 99;

    let outcome = run_on(&["adsec", "-k", "ace", "-"], &entry);
    assert_eq!(outcome.code, EXIT_DECODE);
    assert_eq!(outcome.stderr, "adsec: unknown ACE type 99\n");
    assert!(outcome.stdout.is_empty());
}

#[test]
fn strict_flag_rejects_slack() {
    let entry = AceBuilder::new(0, "S-1-5-18").trailing(&[0, 0, 0, 0]).build();

    let lenient = run_on(&["adsec", "-k", "ace", "-"], &entry);
    assert_eq!(lenient.code, EXIT_OK);

    let strict = run_on(&["adsec", "-k", "ace", "--strict", "-"], &entry);
    assert_eq!(strict.code, EXIT_DECODE);
    assert!(strict.stderr.contains("does not match"));
}

#[test]
fn acl_size_check_is_opt_in() {
    let bytes = AclBuilder::new()
        .ace(AceBuilder::new(0, "S-1-5-18").build())
        .declared_size(8)
        .build();

    assert_eq!(run_on(&["adsec", "-k", "acl", "-"], &bytes).code, EXIT_OK);
    let checked = run_on(&["adsec", "-k", "acl", "--check-acl-size", "-"], &bytes);
    assert_eq!(checked.code, EXIT_DECODE);
}

#[test]
fn exit_codes_are_clamped() {
    assert_eq!(exit_code_from(EXIT_DECODE), std::process::ExitCode::from(3));
    assert_eq!(exit_code_from(-1), std::process::ExitCode::from(0));
    assert_eq!(exit_code_from(1000), std::process::ExitCode::from(255));
}
