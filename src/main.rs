use anyhow::{bail, Context, Result};
use political_compass::questions::QuestionBank;
use political_compass::settings::settings;
use political_compass::submission::Submission;
use political_compass::utils::{log_bank_loaded, log_error, log_submission_loaded, ProfileReport};
use std::io::Read;
use std::{env, fs, io, process};
use tracing::subscriber::set_global_default;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn print_usage() {
    eprintln!("Usage: political-compass <results.json|-> [--json]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <results.json>  Saved test results (scores, answers, optional tallies)");
    eprintln!("  -               Read the results from stdin");
    eprintln!("  --json          Print the classification as JSON instead of a report");
}

fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read results from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(source).with_context(|| format!("failed to read results from {source}"))
    }
}

fn run(source: &str, as_json: bool) -> Result<()> {
    let settings = settings();
    let bank_path = settings.bank_path();
    let bank = QuestionBank::load(&bank_path)
        .with_context(|| format!("failed to load question bank {bank_path}"))?;

    let raw = read_source(source)?;
    let submission: Submission =
        serde_json::from_str(&raw).with_context(|| format!("malformed results in {source}"))?;
    submission
        .validate()
        .with_context(|| format!("invalid answers in {source}"))?;

    let unmatched = submission.unmatched_answers(&bank);
    if !unmatched.is_empty() {
        warn!(?unmatched, "answers without a matching question were ignored");
    }

    let classification = submission.classify(&bank);

    if as_json {
        let output = if settings.report.pretty_json {
            serde_json::to_string_pretty(&classification)?
        } else {
            serde_json::to_string(&classification)?
        };
        println!("{output}");
        return Ok(());
    }

    log_bank_loaded(&bank_path, bank.len());
    log_submission_loaded(
        source,
        submission.answers.len() - unmatched.len(),
        submission.category_tallies.is_some(),
    );
    println!();
    ProfileReport::new(&classification, &settings.report).print();

    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("political_compass=info".parse()?))
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        );
    set_global_default(subscriber).context("failed to set tracing subscriber")?;

    let args: Vec<String> = env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let inputs: Vec<&String> = args.iter().filter(|a| *a != "--json").collect();

    let source = match inputs.as_slice() {
        [source] => source.as_str(),
        [] => {
            print_usage();
            process::exit(1);
        }
        _ => bail!("expected a single results file, got {}", inputs.len()),
    };

    if let Err(e) = run(source, as_json) {
        log_error("[ERROR]", &format!("{e:#}"));
        process::exit(1);
    }

    Ok(())
}
