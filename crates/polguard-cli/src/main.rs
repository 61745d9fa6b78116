//! CLI entry point for polguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `polguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use polguard_app::{
    ExplainOutput, ScanInput, format_explanation, format_not_found, gate_exit_code,
    parse_report_json, render_csv, render_markdown, render_text, run_explain, run_scan,
    serialize_report, write_text_file,
};
use polguard_settings::Overrides;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG: &str = "polguard.toml";
const DEFAULT_CSV: &str = "iam_audit_report.csv";
const LOG_ENV: &str = "POLGUARD_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "polguard",
    version,
    about = "Risk auditor for statement-based access-policy documents"
)]
struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit every policy group and write report artifacts.
    Scan(ScanArgs),

    /// Re-export a saved JSON report without scanning again.
    Export {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        #[command(flatten)]
        targets: ExportTargets,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "policy.full_access") or code (e.g., "wildcard_action") to explain.
        identifier: String,
    },
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Directory that group paths are resolved against.
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Path to polguard config TOML (default: polguard.toml under the root, if present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Group to scan as LABEL=PATH (repeatable; replaces configured groups).
    #[arg(long = "group", value_name = "LABEL=PATH", value_parser = parse_group)]
    groups: Vec<(String, String)>,

    /// File name glob selecting candidate documents (repeatable; default *.json).
    #[arg(long, value_name = "GLOB")]
    include: Vec<String>,

    /// Where to write the CSV export (default: iam_audit_report.csv under the root).
    #[arg(long)]
    csv_out: Option<Utf8PathBuf>,

    /// Where to write the JSON report.
    #[arg(long)]
    json_out: Option<Utf8PathBuf>,

    /// Where to write a Markdown summary.
    #[arg(long)]
    markdown_out: Option<Utf8PathBuf>,

    /// Do not print the per-document console report.
    #[arg(long)]
    quiet: bool,

    /// Exit with code 2 when the gate trips (never|error|low|moderate|high).
    #[arg(long, value_name = "LEVEL")]
    fail_on: Option<String>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = true)]
struct ExportTargets {
    /// Write the rows as CSV.
    #[arg(long)]
    csv: Option<Utf8PathBuf>,

    /// Write a Markdown summary.
    #[arg(long)]
    markdown: Option<Utf8PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.cmd {
        Commands::Scan(args) => cmd_scan(args),
        Commands::Export { report, targets } => cmd_export(&report, targets).map(|()| 0),
        Commands::Explain { identifier } => Ok(cmd_explain(&identifier)),
    };

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("polguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn parse_group(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((label, path)) if !label.is_empty() && !path.is_empty() => {
            Ok((label.to_string(), path.to_string()))
        }
        Some(_) => Err(format!("expected LABEL=PATH, got `{raw}`")),
        None if raw.is_empty() => Err("group must not be empty".to_string()),
        None => Ok((raw.to_string(), raw.to_string())),
    }
}

fn cmd_scan(args: ScanArgs) -> anyhow::Result<i32> {
    let root = args.root;
    if !root.is_dir() {
        anyhow::bail!("root directory does not exist: {}", root);
    }

    let config_text = read_config(&root, args.config.as_deref())?;
    tracing::debug!(root = %root, config_bytes = config_text.len(), "loaded configuration");
    let overrides = Overrides {
        groups: args.groups,
        include: args.include,
        fail_on: args.fail_on,
    };

    let output = run_scan(ScanInput {
        root: &root,
        config_text: &config_text,
        overrides,
    })?;
    let report = &output.report;

    if !args.quiet {
        let groups: Vec<&str> = output
            .resolved_config
            .groups
            .iter()
            .map(|group| group.label.as_str())
            .collect();
        print!("{}", render_text(report, &groups));
    }

    let csv_out = args.csv_out.unwrap_or_else(|| root.join(DEFAULT_CSV));
    write_text_file(&csv_out, render_csv(report)).context("write csv export")?;

    if let Some(path) = &args.json_out {
        let data = serialize_report(report)?;
        write_text_file(path, data).context("write report json")?;
    }
    if let Some(path) = &args.markdown_out {
        write_text_file(path, render_markdown(report)).context("write markdown")?;
    }

    println!("\nResults exported to {}", csv_out);

    Ok(gate_exit_code(output.resolved_config.fail_on, report))
}

/// An explicit config path must exist; the implicit one is optional.
fn read_config(root: &Utf8Path, explicit: Option<&Utf8Path>) -> anyhow::Result<String> {
    match explicit {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
        }
        None => {
            let path = root.join(DEFAULT_CONFIG);
            if path.is_file() {
                std::fs::read_to_string(&path).with_context(|| format!("read config: {}", path))
            } else {
                Ok(String::new())
            }
        }
    }
}

fn cmd_export(report_path: &Utf8Path, targets: ExportTargets) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    if let Some(path) = &targets.csv {
        write_text_file(path, render_csv(&report)).context("write csv export")?;
        println!("Results exported to {}", path);
    }
    if let Some(path) = &targets.markdown {
        write_text_file(path, render_markdown(&report)).context("write markdown")?;
        println!("Markdown written to {}", path);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            1
        }
    }
}
