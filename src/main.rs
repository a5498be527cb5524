//! wafpro CLI
//!
//! Thin boundary layer around the classification engine: reads payloads from
//! arguments or stdin, classifies each one, optionally persists the resulting
//! events to a log file, and prints one JSON verdict per payload.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tracing::info;

use wafpro::store::{top_attack_payloads, FileLogStore, LogStore, LogSummary};
use wafpro::{ClassificationEvent, WafConfig, WafEngine};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wafpro", version)]
#[command(about = "Classify text payloads as web attacks or safe")]
struct Args {
    /// Payloads to classify; reads stdin lines when omitted
    payload: Vec<String>,

    /// Append classification events to this log file
    #[arg(long, env = "WAFPRO_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Print a summary of the log file (counts and top attack payloads) and exit
    #[arg(long, requires = "log_file")]
    summary: bool,

    /// Clear the log file and exit
    #[arg(long, requires = "log_file")]
    clear_log: bool,

    /// Enable SQL injection signatures
    #[arg(long, default_value = "true", env = "WAFPRO_SQLI")]
    sqli: bool,

    /// Enable XSS signatures
    #[arg(long, default_value = "true", env = "WAFPRO_XSS")]
    xss: bool,

    /// Enable command injection signatures
    #[arg(long, default_value = "true", env = "WAFPRO_COMMAND_INJECTION")]
    command_injection: bool,

    /// Enable path traversal signatures
    #[arg(long, default_value = "true", env = "WAFPRO_PATH_TRAVERSAL")]
    path_traversal: bool,

    /// Enable embedded-URL (RFI/SSRF) signatures
    #[arg(long, default_value = "true", env = "WAFPRO_REMOTE_INCLUSION")]
    remote_inclusion: bool,

    /// Enable XXE signatures
    #[arg(long, default_value = "true", env = "WAFPRO_XXE")]
    xxe: bool,

    /// Enable OS admin command signatures
    #[arg(long, default_value = "true", env = "WAFPRO_ADMIN_COMMAND")]
    admin_command: bool,

    /// Enable verbose logging
    #[arg(short, long, env = "WAFPRO_VERBOSE")]
    verbose: bool,
}

impl Args {
    fn to_config(&self) -> WafConfig {
        WafConfig {
            sqli_enabled: self.sqli,
            xss_enabled: self.xss,
            command_injection_enabled: self.command_injection,
            path_traversal_enabled: self.path_traversal,
            remote_inclusion_enabled: self.remote_inclusion,
            xxe_enabled: self.xxe,
            admin_command_enabled: self.admin_command,
        }
    }
}

fn print_summary(store: &FileLogStore) -> Result<()> {
    let events = store.load()?;
    let summary = LogSummary::from_events(&events);
    let top = top_attack_payloads(&events, 5);

    let out = json!({
        "attack_count": summary.attack_count,
        "safe_count": summary.safe_count,
        "top_attack_payloads": top
            .into_iter()
            .map(|(payload, count)| json!({"payload": payload, "count": count}))
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn classify_and_log(
    engine: &WafEngine,
    store: &mut Option<FileLogStore>,
    payload: &str,
) -> Result<()> {
    let verdict = engine.classify(payload);

    if let Some(store) = store {
        store.append(ClassificationEvent::now(payload, &verdict))?;
    }

    let message = if verdict.is_attack {
        "Attack detected!"
    } else {
        "Data safe."
    };
    println!(
        "{}",
        json!({
            "message": message,
            "status": verdict.status(),
            "matched_signature_id": verdict.matched_signature_id,
        })
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("{}={}", env!("CARGO_CRATE_NAME"), log_level))
        .with_writer(io::stderr)
        .init();

    info!(version = VERSION, "starting wafpro");

    let mut store = args.log_file.as_ref().map(FileLogStore::new);

    if args.clear_log {
        let store = store.as_mut().expect("clap enforces --log-file");
        store.clear()?;
        info!(path = ?store.path(), "log file cleared");
        return Ok(());
    }

    if args.summary {
        let store = store.as_ref().expect("clap enforces --log-file");
        return print_summary(store);
    }

    let engine = WafEngine::new(args.to_config())?;

    if args.payload.is_empty() {
        for line in io::stdin().lock().lines() {
            classify_and_log(&engine, &mut store, &line?)?;
        }
    } else {
        for payload in &args.payload {
            classify_and_log(&engine, &mut store, payload)?;
        }
    }

    Ok(())
}
