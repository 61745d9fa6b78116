//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use polguard_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(PathBuf::from)
            .context("xtask has no parent directory")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(polguard_types::PolguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(polguard_settings::PolguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "polguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "polguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json).with_context(|| format!("write schema {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Check that committed schemas match what the types generate.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    for name in &missing {
        eprintln!("missing schema: {}", name);
    }
    for name in &mismatched {
        eprintln!("schema out of date: {}", name);
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("schema validation failed")
}

/// Validate every golden report under tests/fixtures against the report schema.
///
/// Goldens must also be stored already normalized, so comparisons never depend on the run.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema()).context("schema to json")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("compile report schema: {}", e))?;

    let mut checked = 0usize;
    let mut errors = Vec::new();

    let root = fixtures_dir()?;
    for entry in fs::read_dir(&root).with_context(|| format!("read {}", root.display()))? {
        let golden = entry?.path().join("expected.report.json");
        if !golden.is_file() {
            continue;
        }

        let text =
            fs::read_to_string(&golden).with_context(|| format!("read {}", golden.display()))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("parse {}", golden.display()))?;

        for err in validator.iter_errors(&value) {
            errors.push(format!("{}: {}", golden.display(), err));
        }
        if normalize_nondeterministic(value.clone()) != value {
            errors.push(format!("{}: not normalized", golden.display()));
        }

        checked += 1;
        println!("  checked {}", golden.display());
    }

    if checked == 0 {
        bail!("no expected.report.json files found under {}", root.display());
    }
    if !errors.is_empty() {
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("conformance failed with {} errors", errors.len());
    }

    println!("{} golden reports conform.", checked);
    Ok(())
}

/// Every check ID and code must have a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    use polguard_types::explain;

    let mut errors = Vec::new();
    for id in explain::all_check_ids().iter().chain(explain::all_codes()) {
        match explain::lookup_explanation(id) {
            Some(exp) => {
                for (field, text) in [
                    ("title", exp.title),
                    ("description", exp.description),
                    ("remediation", exp.remediation),
                ] {
                    if text.is_empty() {
                        errors.push(format!("'{}' has empty {}", id, field));
                    }
                }
            }
            None => errors.push(format!("'{}' has no explanation", id)),
        }
    }

    if errors.is_empty() {
        println!(
            "{} check IDs and {} codes have explanations.",
            explain::all_check_ids().len(),
            explain::all_codes().len()
        );
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("explain coverage failed with {} errors", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate golden reports in tests/fixtures against the schema");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
