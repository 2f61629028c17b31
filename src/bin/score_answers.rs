use anyhow::{bail, Context, Result};
use political_compass::questions::QuestionBank;
use political_compass::scoring::AnswerSheet;
use political_compass::settings::settings;
use political_compass::submission::Submission;
use political_compass::utils::{log_bank_loaded, log_error, ProfileReport};
use regex::Regex;
use std::sync::LazyLock;
use std::{env, io, process};
use tracing::subscriber::set_global_default;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INDEXED_ANSWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)[=:](\d+)$").unwrap());
static BARE_ANSWER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

fn print_usage() {
    eprintln!("Usage: score-answers <answers...> [--json]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <idx=level>  Answer question idx with level 0..=4 (idx:level also works)");
    eprintln!("  <level>      Answer the next question in order");
    eprintln!("  --json       Print the classification as JSON instead of a report");
    eprintln!();
    eprintln!("Levels: 0 strongly disagree, 1 disagree, 2 neutral, 3 agree, 4 strongly agree");
}

/// Bare levels continue after the last explicit index.
fn parse_answers<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<AnswerSheet> {
    let mut answers = AnswerSheet::new();
    let mut next = 0usize;

    for token in tokens {
        let (index, level) = if let Some(caps) = INDEXED_ANSWER.captures(token) {
            let index = caps[1].parse::<usize>()?;
            (index, caps.get(2).map_or("", |m| m.as_str()))
        } else if BARE_ANSWER.is_match(token) {
            (next, token)
        } else {
            bail!("unrecognised answer {token:?}");
        };
        let level: u8 = level
            .parse()
            .with_context(|| format!("level in {token:?} is not a small integer"))?;
        answers.insert(index, level);
        next = index
            .checked_add(1)
            .with_context(|| format!("answer index in {token:?} is too large"))?;
    }

    Ok(answers)
}

fn run(tokens: &[&str], as_json: bool) -> Result<()> {
    let settings = settings();
    let bank_path = settings.bank_path();
    let bank = QuestionBank::load(&bank_path)
        .with_context(|| format!("failed to load question bank {bank_path}"))?;

    let answers = parse_answers(tokens.iter().copied())?;
    let submission = Submission::from_answers(answers, &bank);
    submission.validate()?;

    let unmatched = submission.unmatched_answers(&bank);
    if !unmatched.is_empty() {
        bail!(
            "bank has {} questions, no question for answers {:?}",
            bank.len(),
            unmatched
        );
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
                .compact(),
        );
    set_global_default(subscriber).context("failed to set tracing subscriber")?;

    let args: Vec<String> = env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let tokens: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--json")
        .collect();

    if tokens.is_empty() {
        print_usage();
        process::exit(1);
    }

    if let Err(e) = run(&tokens, as_json) {
        log_error("[ERROR]", &format!("{e:#}"));
        process::exit(1);
    }

    Ok(())
}
