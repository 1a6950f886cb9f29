#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the `mary` binary starts correctly, responds to
//! commands that need no server, and reports unreachable servers with the
//! right exit code. Each test points `XDG_CONFIG_HOME` at an empty directory
//! so a developer's own config file cannot leak in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn mary(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mary").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    mary(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MaryTTS"))
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("phonemes"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    mary(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_types_lists_all_sets_without_server() {
    let home = TempDir::new().unwrap();
    mary(&home)
        .args(["types", "--port", &closed_port().to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Input types"))
        .stdout(predicate::str::contains("simplephonemes"))
        .stdout(predicate::str::contains("praat_textgrid"))
        .stdout(predicate::str::contains("wave_file"))
        .stdout(predicate::str::contains("aiff_file"));
}

#[test]
fn test_process_help() {
    let home = TempDir::new().unwrap();
    mary(&home)
        .args(["process", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--output-type"))
        .stdout(predicate::str::contains("--voice"))
        .stdout(predicate::str::contains("--locale"))
        .stdout(predicate::str::contains("--base64"));
}

#[test]
fn test_phonemes_requires_words() {
    let home = TempDir::new().unwrap();
    mary(&home)
        .arg("phonemes")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("<WORDS>"));
}

#[test]
fn test_process_rejects_empty_input() {
    let home = TempDir::new().unwrap();
    mary(&home)
        .args(["process", "--text", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input is empty"));
}

#[test]
fn test_voices_unreachable_server() {
    let home = TempDir::new().unwrap();
    let port = closed_port().to_string();
    mary(&home)
        .args(["voices", "--host", "127.0.0.1", "--port", &port])
        .assert()
        .failure()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains("Failed to reach MaryTTS server"));
}

#[test]
fn test_process_unreachable_server() {
    let home = TempDir::new().unwrap();
    let port = closed_port().to_string();
    mary(&home)
        .args(["process", "--text", "Hello World", "--port", &port, "--host", "127.0.0.1"])
        .assert()
        .failure()
        .code(exitcode::UNAVAILABLE);
}

#[test]
fn test_invalid_host_is_config_error() {
    let home = TempDir::new().unwrap();
    mary(&home)
        .args(["locales", "--host", "not a host"])
        .assert()
        .failure()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Invalid server address"));
}

#[test]
fn test_locales_against_mock_server() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/locales")
        .with_status(200)
        .with_body("en_US\nde\n\nfr\n")
        .create();
    let addr = server.socket_address();

    let home = TempDir::new().unwrap();
    mary(&home)
        .args(["locales", "--host", &addr.ip().to_string()])
        .args(["--port", &addr.port().to_string()])
        .assert()
        .success()
        .stdout("en_US\nde\nfr\n");
}

#[test]
fn test_process_writes_audio_file() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/process")
        .match_body(mockito::Matcher::UrlEncoded(
            "OUTPUT_TYPE".to_string(),
            "AUDIO".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "audio/x-wav")
        .with_body(b"RIFF....WAVE")
        .create();
    let addr = server.socket_address();

    let home = TempDir::new().unwrap();
    let out = home.path().join("hello.wav");
    mary(&home)
        .args(["-q", "process", "--text", "Hello World"])
        .args(["--host", &addr.ip().to_string()])
        .args(["--port", &addr.port().to_string()])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(std::fs::read(&out).unwrap(), b"RIFF....WAVE");
}

#[test]
fn test_unreachable_server_is_reported_once() {
    let home = TempDir::new().unwrap();
    let port = closed_port().to_string();
    mary(&home)
        .args(["voices", "--host", "127.0.0.1", "--port", &port])
        .assert()
        .failure()
        .stderr(predicate::function(|stderr: &str| {
            stderr.lines().filter(|l| !l.trim().is_empty()).count() == 1
        }));
}

#[test]
fn test_unknown_audio_is_reported_once() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/process")
        .match_body(mockito::Matcher::UrlEncoded(
            "AUDIO".to_string(),
            "WAVE_FILE".to_string(),
        ))
        .with_status(200)
        .with_body(b"RIFF....WAVE")
        .create();
    let addr = server.socket_address();

    let home = TempDir::new().unwrap();
    let out = home.path().join("hello.wav");
    mary(&home)
        .args(["-q", "process", "--text", "Hello World", "--audio", "mp3"])
        .args(["--host", &addr.ip().to_string()])
        .args(["--port", &addr.port().to_string()])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown audio 'mp3'"))
        .stderr(predicate::function(|stderr: &str| {
            stderr.matches("mp3").count() == 1
        }));
}

#[test]
fn test_no_base64_overrides_config_default() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/process")
        .with_status(200)
        .with_header("content-type", "audio/x-wav")
        .with_body(b"RIFF....WAVE")
        .expect(2)
        .create();
    let addr = server.socket_address();

    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join("mary")).unwrap();
    std::fs::write(
        home.path().join("mary").join("config.toml"),
        "[defaults]\nbase64 = true\n",
    )
    .unwrap();
    let host = addr.ip().to_string();
    let port = addr.port().to_string();

    let encoded = home.path().join("encoded.txt");
    mary(&home)
        .args(["-q", "process", "--text", "Hello World"])
        .args(["--host", &host, "--port", &port])
        .args(["-o", encoded.to_str().unwrap()])
        .assert()
        .success();
    assert!(
        std::fs::read_to_string(&encoded)
            .unwrap()
            .starts_with("data:audio/x-wav;base64,")
    );

    let raw = home.path().join("raw.wav");
    mary(&home)
        .args(["-q", "process", "--text", "Hello World", "--no-base64"])
        .args(["--host", &host, "--port", &port])
        .args(["-o", raw.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(std::fs::read(&raw).unwrap(), b"RIFF....WAVE");
}
