//! Command implementations: the thin I/O shell around the engine.
//!
//! All file reading and writing happens here; the engine crates only see
//! already-decoded text and in-memory tables.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tidytab_clean::clean;
use tidytab_ingest::parse;
use tidytab_model::{CleaningRules, DataProfile, Table};
use tidytab_output::serialize;
use tidytab_profile::profile;

use crate::cli::{CleanArgs, ProfileArgs};
use crate::types::{CleanOutcome, ProfileReport};

pub fn run_clean(args: &CleanArgs) -> Result<CleanOutcome> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();

    let rules = resolve_rules(args)?;
    let table = load_table(&args.input)?;
    let start = Instant::now();
    let before = profile(&table);
    let cleaned = clean(&table, &rules);
    let after = profile(&cleaned);
    info!(
        rows_in = before.row_count,
        rows_out = after.row_count,
        duration_ms = start.elapsed().as_millis() as u64,
        "clean complete"
    );

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    if !args.dry_run {
        let text = serialize(&cleaned).context("serialize cleaned table")?;
        fs::write(&output, text).with_context(|| format!("write {}", output.display()))?;
        if let Some(path) = &args.profile_json {
            write_profile_report(path, &before, &after)?;
        }
    }

    Ok(CleanOutcome {
        input: args.input.clone(),
        output,
        written: !args.dry_run,
        rules,
        before,
        after,
    })
}

pub fn run_profile(args: &ProfileArgs) -> Result<DataProfile> {
    let span = info_span!("profile", input = %args.input.display());
    let _guard = span.enter();

    let table = load_table(&args.input)?;
    let snapshot = profile(&table);
    info!(
        rows = snapshot.row_count,
        columns = snapshot.column_count,
        "profile complete"
    );
    Ok(snapshot)
}

/// Rules come from the optional JSON document first; explicit flags then
/// override individual fields.
pub fn resolve_rules(args: &CleanArgs) -> Result<CleaningRules> {
    let mut rules = match &args.rules {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read rules file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse rules file {}", path.display()))?
        }
        None => CleaningRules::default(),
    };
    if args.remove_duplicates {
        rules.remove_duplicates = true;
    }
    if args.remove_empty_rows {
        rules.remove_empty_rows = true;
    }
    if args.trim_whitespace {
        rules.trim_whitespace = true;
    }
    if let Some(policy) = args.missing {
        rules.handle_missing = policy.into();
    }
    Ok(rules)
}

/// Default output path next to the input: `<stem>-cleaned.<ext>`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("output");
    let extension = input
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("csv");
    input.with_file_name(format!("{stem}-cleaned.{extension}"))
}

fn load_table(path: &Path) -> Result<Table> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse(&text).with_context(|| format!("parse {}", path.display()))
}

fn write_profile_report(
    path: &Path,
    before: &DataProfile,
    after: &DataProfile,
) -> Result<()> {
    let report = ProfileReport {
        original_profile: before.clone(),
        cleaned_profile: after.clone(),
    };
    let json = serde_json::to_string_pretty(&report).context("serialize profile report")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))
}
