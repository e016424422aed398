use anyhow::{Context, Result};
use chrono::Utc;
use std::env;
use std::fs;
use std::path::Path;

// Use library instead of local modules
use tin_validator::{
    bulk_validate, classify, export_history, normalize, random_tin, ClassificationOutcome,
    HistoryEntry, SessionTracker,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("bulk") => run_bulk(&args[2..])?,
        Some("demo") => run_demo(&args[2..])?,
        Some(_) => run_validate(&args[1..])?,
        None => print_usage(),
    }

    Ok(())
}

fn print_usage() {
    println!("🇲🇾 Malaysia TIN Validator v{}", tin_validator::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Usage:");
    println!("  tin-validator <TIN> [TIN...]        Validate one or more numbers");
    println!("  tin-validator bulk <file> [out]     Validate every line of a file;");
    println!("                                      write history to out (.csv or .json)");
    println!("  tin-validator demo [count]          Generate and validate sample TINs");
}

fn run_validate(candidates: &[String]) -> Result<()> {
    let mut tracker = SessionTracker::new();

    for raw in candidates {
        let tin = normalize(raw);
        if tin.is_empty() {
            println!("⚠️  Please enter a TIN or NIRC number.");
            continue;
        }

        let outcome = classify(&tin);
        print_outcome(&tin, &outcome);
        tracker.record(HistoryEntry::new(tin, outcome.is_valid(), Utc::now()));
    }

    print_session(&tracker);
    Ok(())
}

fn run_bulk(args: &[String]) -> Result<()> {
    let input_path = args
        .first()
        .context("Usage: tin-validator bulk <file> [out]")?;

    let input = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read input file: {}", input_path))?;

    println!("📦 Bulk validation: {}", input_path);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut tracker = SessionTracker::new();
    let report = bulk_validate(&input, &mut tracker, Utc::now());

    for result in &report.results {
        print_outcome(&result.tin, &result.outcome);
    }

    println!("\n✓ {}", report.summary());
    print_session(&tracker);

    if let Some(out_path) = args.get(1) {
        write_snapshot(&tracker, Path::new(out_path))?;
    }

    Ok(())
}

fn run_demo(args: &[String]) -> Result<()> {
    let count: usize = match args.first() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid sample count: {}", raw))?,
        None => 5,
    };

    println!("🎲 Generating {} sample TINs...", count);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut rng = rand::thread_rng();
    let mut tracker = SessionTracker::new();

    for _ in 0..count {
        let tin = random_tin(&mut rng);
        let outcome = classify(&tin);
        print_outcome(&tin, &outcome);
        tracker.record(HistoryEntry::new(tin, outcome.is_valid(), Utc::now()));
    }

    print_session(&tracker);
    Ok(())
}

fn print_outcome(tin: &str, outcome: &ClassificationOutcome) {
    match outcome {
        ClassificationOutcome::Valid { tin_type, category } => {
            println!("✅ {}: Valid TIN/NIRC number!", tin);
            println!("   Type: {}", tin_type.as_str());
            println!("   Category: {}", category.as_str());
        }
        ClassificationOutcome::Invalid => {
            println!("❌ {}: Invalid TIN/NIRC number.", tin);
        }
    }
}

fn print_session(tracker: &SessionTracker) {
    let snapshot = tracker.snapshot();
    if snapshot.entries.is_empty() {
        return;
    }

    println!("\n📊 Statistics");
    println!("   Total Validations: {}", snapshot.stats.total());
    println!(
        "   Valid: {} ({:.2}%)",
        snapshot.stats.valid,
        tracker.percentage(snapshot.stats.valid)
    );
    println!(
        "   Invalid: {} ({:.2}%)",
        snapshot.stats.invalid,
        tracker.percentage(snapshot.stats.invalid)
    );

    println!("\n🕘 History (most recent first)");
    for entry in &snapshot.entries {
        println!(
            "   {} [{}] {}",
            entry.tin,
            if entry.is_valid { "Valid" } else { "Invalid" },
            entry.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

/// Write the session history to `path`: JSON snapshot for .json, CSV otherwise.
fn write_snapshot(tracker: &SessionTracker, path: &Path) -> Result<()> {
    let snapshot = tracker.snapshot();

    if path.extension().is_some_and(|ext| ext == "json") {
        let json = serde_json::to_string_pretty(&snapshot)
            .context("Failed to serialize session snapshot")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot JSON: {:?}", path))?;
    } else {
        export_history(&snapshot.entries, path)?;
    }

    println!("\n💾 History written to {:?}", path);
    Ok(())
}
