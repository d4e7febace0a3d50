//! CLI Integration Tests
//!
//! Run the `masoori` binary end-to-end against a one-shot local HTTP server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use assert_cmd::Command;
use predicates::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("masoori").expect("Failed to find masoori binary")
}

/// Serve exactly one request with the given status line and body, returning
/// the base URL and a handle yielding the request line.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).unwrap();

        let request = String::from_utf8_lossy(&request).to_string();
        request.lines().next().unwrap_or_default().to_string()
    });

    (format!("http://{}", addr), handle)
}

/// A local URL nothing is listening on
fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

const FOOL: &str = r#"{"card":{"id":4,"name":"The Fool","description":"You spent a lot on coffee.","imagePath":"","cardType":"BASIC"},"basicList":[{"id":1,"keyword":"coffee"},{"id":2,"keyword":"taxi"}]}"#;

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_lists_commands() {
    cli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("card"))
        .stdout(predicate::str::contains("recent"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_missing_command_fails() {
    cli_cmd().assert().failure();
}

// ============================================================================
// Card Command Tests
// ============================================================================

#[test]
fn test_card_prints_summary() {
    let (base, server) = serve_once("200 OK", FOOL);

    cli_cmd()
        .args(["--api-url", &base, "card", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card: The Fool"))
        .stdout(predicate::str::contains("Tags: #coffee #taxi"))
        .stdout(predicate::str::contains("You spent a lot on coffee."));

    assert_eq!(server.join().unwrap(), "GET /api/card/basic/4 HTTP/1.1");
}

#[test]
fn test_card_json_output() {
    let (base, _server) = serve_once("200 OK", FOOL);

    cli_cmd()
        .args(["--api-url", &base, "card", "4", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"basicList\""))
        .stdout(predicate::str::contains("\"name\": \"The Fool\""));
}

#[test]
fn test_card_not_found() {
    let (base, _server) = serve_once("404 Not Found", "");

    cli_cmd()
        .args(["--api-url", &base, "card", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load card for consume 99"));
}

#[test]
fn test_card_connection_refused() {
    cli_cmd()
        .args(["--api-url", &dead_url(), "card", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_invalid_api_url() {
    cli_cmd()
        .args(["--api-url", "ftp://example.com", "card", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid API settings"));
}

// ============================================================================
// Recent Command Tests
// ============================================================================

#[test]
fn test_recent_with_card() {
    let (base, server) = serve_once("200 OK", FOOL);

    cli_cmd()
        .args(["--api-url", &base, "recent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card: The Fool"));

    assert_eq!(server.join().unwrap(), "GET /api/card/basic/recent HTTP/1.1");
}

#[test]
fn test_recent_without_card() {
    let (base, _server) = serve_once("204 No Content", "");

    cli_cmd()
        .args(["--api-url", &base, "recent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No card this week"));
}
