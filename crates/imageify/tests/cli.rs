#![cfg(feature = "cli")]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "imageify-cli-{tag}-{}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn imageify(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imageify"))
        .current_dir(dir)
        .env_remove("IMAGEIFY_OUTPUT")
        .env_remove("IMAGEIFY_LOG_FORMAT")
        .env_remove("IMAGEIFY_LOG_LEVEL")
        .args(["--log-level", "error"])
        .args(args)
        .output()
        .expect("imageify should start")
}

fn binary_payload(len: usize) -> Vec<u8> {
    let mut seed = 0x2545_F491_4F6C_DD1Du64;
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            (seed >> 32) as u8
        })
        .collect()
}

/// A valid 2x1 RGBA PNG whose frame header claims 0xFFFFFFFF payload bytes.
fn corrupt_header_png() -> Vec<u8> {
    use imageify::frame::pack;
    use imageify::raster::{PngCodec, RasterCodec};

    let grid = pack(&[0xFF; 8], 2, 1).expect("2x1 grid");
    let mut out = Vec::new();
    PngCodec::new().encode(&grid, &mut out).expect("png encode");
    out
}

#[test]
fn binary_file_roundtrips() {
    let dir = unique_temp_dir("roundtrip");
    let payload = binary_payload(10_000);
    fs::write(dir.join("data.bin"), &payload).unwrap();

    let out = imageify(&dir, &["-e", "data.bin", "-o", "data.png", "--format", "json"]);
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    let image = fs::read(dir.join("data.png")).unwrap();
    assert_eq!(&image[..8], b"\x89PNG\r\n\x1a\n");

    let out = imageify(&dir, &["-d", "data.png", "-o", "restored.bin", "--format", "json"]);
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.join("restored.bin")).unwrap(), payload);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn empty_file_roundtrips() {
    let dir = unique_temp_dir("empty");
    fs::write(dir.join("empty.bin"), b"").unwrap();

    let out = imageify(&dir, &["-e", "empty.bin", "-o", "empty.png"]);
    assert_eq!(out.status.code(), Some(0));
    let out = imageify(&dir, &["-d", "empty.png", "-o", "empty.out"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(fs::read(dir.join("empty.out")).unwrap().is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn default_file_names_are_used() {
    let dir = unique_temp_dir("defaults");
    fs::write(dir.join("testFile.txt"), b"default names").unwrap();

    let out = imageify(&dir, &["-e"]);
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(dir.join("outputImage.png").exists());

    let out = imageify(&dir, &["-d"]);
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.join("outputText.txt")).unwrap(), b"default names");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn output_can_come_from_env() {
    let dir = unique_temp_dir("env-output");
    fs::write(dir.join("in.txt"), b"env").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_imageify"))
        .current_dir(&dir)
        .env("IMAGEIFY_OUTPUT", "from-env.png")
        .env_remove("IMAGEIFY_LOG_FORMAT")
        .env_remove("IMAGEIFY_LOG_LEVEL")
        .args(["--log-level", "error", "-e", "in.txt"])
        .output()
        .expect("imageify should start");
    assert_eq!(out.status.code(), Some(0));
    assert!(dir.join("from-env.png").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn help_exits_zero() {
    let dir = unique_temp_dir("help");
    let out = imageify(&dir, &["--help"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--encode"));
    assert!(stdout.contains("--decode"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn usage_errors_exit_64() {
    let dir = unique_temp_dir("usage");
    let cases: [&[&str]; 3] = [&[], &["--bogus"], &["-e", "a", "-d", "b"]];
    for args in cases {
        let out = imageify(&dir, args);
        assert_eq!(out.status.code(), Some(64), "args {args:?}");
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_exits_not_found_without_output() {
    let dir = unique_temp_dir("missing");
    let out = imageify(&dir, &["-e", "absent.txt", "-o", "out.png"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("File Not Found"));
    assert!(!dir.join("out.png").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_header_exits_data_invalid_without_output() {
    let dir = unique_temp_dir("corrupt");
    fs::write(dir.join("bad.png"), corrupt_header_png()).unwrap();

    let out = imageify(&dir, &["-d", "bad.png", "-o", "out.txt"]);
    assert_eq!(out.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Decoding Error"));
    assert!(!dir.join("out.txt").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn non_png_input_exits_data_invalid() {
    let dir = unique_temp_dir("not-png");
    fs::write(dir.join("plain.txt"), b"hello there").unwrap();

    let out = imageify(&dir, &["-d", "plain.txt", "-o", "out.txt"]);
    assert_eq!(out.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid File Format"));
    assert!(!dir.join("out.txt").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn show_prints_decoded_payload() {
    let dir = unique_temp_dir("show");
    fs::write(dir.join("note.txt"), b"shown on stdout").unwrap();

    let out = imageify(&dir, &["-e", "note.txt", "-o", "note.png"]);
    assert_eq!(out.status.code(), Some(0));
    let out = imageify(&dir, &["-d", "note.png", "-o", "note.out", "-s"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"shown on stdout");
    assert_eq!(fs::read(dir.join("note.out")).unwrap(), b"shown on stdout");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn json_report_describes_the_grid() {
    let dir = unique_temp_dir("report");
    fs::write(dir.join("twelve.bin"), [7u8; 12]).unwrap();

    let out = imageify(&dir, &["-e", "twelve.bin", "-o", "twelve.png", "--format", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json report");
    assert_eq!(report["direction"], "encode");
    assert_eq!(report["payload_bytes"], 12);
    assert_eq!(report["width"], 2);
    assert_eq!(report["height"], 2);
    assert_eq!(report["padding_bytes"], 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn failed_decode_keeps_existing_output() {
    let dir = unique_temp_dir("keep-output");
    fs::write(dir.join("bad.png"), corrupt_header_png()).unwrap();
    fs::write(dir.join("out.txt"), b"earlier result").unwrap();

    let out = imageify(&dir, &["-d", "bad.png", "-o", "out.txt"]);
    assert_eq!(out.status.code(), Some(60));
    assert_eq!(fs::read(dir.join("out.txt")).unwrap(), b"earlier result");
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn json_logs_go_to_stderr() {
    let dir = unique_temp_dir("json-logs");
    fs::write(dir.join("in.txt"), b"logged").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_imageify"))
        .current_dir(&dir)
        .env_remove("IMAGEIFY_OUTPUT")
        .env_remove("IMAGEIFY_LOG_FORMAT")
        .env_remove("IMAGEIFY_LOG_LEVEL")
        .args(["--log-format", "json", "--log-level", "info"])
        .args(["-e", "in.txt", "-o", "in.png", "--format", "json"])
        .output()
        .expect("imageify should start");
    assert_eq!(out.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&out.stderr);
    let event: serde_json::Value = stderr
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .find(|event: &serde_json::Value| event["message"] == "encoded file")
        .expect("completion event should be logged");
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["payload_bytes"], 6);

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json report");
    assert_eq!(report["payload_bytes"], 6);

    let _ = fs::remove_dir_all(&dir);
}
