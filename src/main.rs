use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde_json::json;

use content_audit::{run_audit, AuditError, AuditRequest, PhrasingAuditor, QualityAuditor};

#[derive(Parser)]
#[command(
    name = "content-audit",
    about = "Score long-form content against E-E-A-T and lazy-writing checks",
    version
)]
struct Cli {
    /// JSON request files ({"title", "content", "html"?}); reads one request
    /// from stdin if none provided
    files: Vec<String>,
}

fn audit_one(raw: &str, quality: &QualityAuditor, phrasing: &PhrasingAuditor) -> bool {
    let envelope = match serde_json::from_str::<AuditRequest>(raw) {
        Ok(request) => json!({
            "ok": true,
            "results": run_audit(&request, quality, phrasing),
        }),
        Err(e) => {
            let err = AuditError::InvalidInput(format!("request JSON: {e}"));
            json!({ "ok": false, "error": err.to_string() })
        }
    };
    let ok = envelope["ok"].as_bool().unwrap_or(false);
    match serde_json::to_string_pretty(&envelope) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("failed to serialize report: {e}");
            return false;
        }
    }
    ok
}

fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();
    let quality = QualityAuditor::new();
    let phrasing = PhrasingAuditor::new();

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("reading request from stdin")?;
        return Ok(audit_one(&input, &quality, &phrasing));
    }

    let mut all_ok = true;
    for path in &cli.files {
        let raw =
            std::fs::read_to_string(path).with_context(|| format!("reading request {path}"))?;
        all_ok &= audit_one(&raw, &quality, &phrasing);
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
