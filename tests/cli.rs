mod common;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use common::Docs;
use predicates::str::contains;

/// The binary with its backend pointed at a port nothing listens on.
fn cmd() -> Command {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let mut cmd = cargo_bin_cmd!("pdf-quiz");
    cmd.env("PDF_QUIZ_API_URL", format!("http://127.0.0.1:{}/api", port))
        .env("PDF_QUIZ_LOG", "-")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("analyze"))
        .stdout(contains("generate"))
        .stdout(contains("--api-url"));
}

#[test]
fn analyze_rejects_non_pdf_before_any_request() {
    let docs = Docs::new();
    let path = docs.file("notes.txt", b"not a pdf");

    cmd()
        .arg("analyze")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Error: Please select a PDF file."));
}

#[test]
fn generate_rejects_out_of_range_type() {
    let docs = Docs::new();
    let path = docs.pdf("notes.pdf");

    cmd()
        .args(["generate", "--type", "essay"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("unknown quiz type"));
}

#[test]
fn generate_reports_unreachable_backend() {
    let docs = Docs::new();
    let path = docs.pdf("notes.pdf");

    cmd()
        .arg("generate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Could not reach the server"));
}

#[test]
fn invalid_api_url_is_a_config_error() {
    let docs = Docs::new();
    let path = docs.pdf("notes.pdf");

    cmd()
        .args(["--api-url", "ftp://example.com"])
        .arg("analyze")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"));
}
