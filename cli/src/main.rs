use std::path::PathBuf;
use std::sync::Once;

use anyhow::Result;
use clap::Parser;
use tokred_core::{
    eval::{self, RunSummary, ScenarioResult, SkipPolicy, SkippedScenario},
    export, report, scenario,
    tokenize::TiktokenCounter,
};


static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "tokred_core=debug,tokred_cli=info";

#[derive(Debug, Parser)]
#[command(
    name = "tokred",
    author,
    version,
    about = "Token reduction benchmark runner",
    long_about = None
)]
struct CliArgs {
    /// Directory containing scenario descriptor files (*.json)
    #[arg(value_name = "SCENARIOS_DIR", default_value = "benchmarks/scenarios")]
    scenarios_dir: PathBuf,

    /// Path of the JSON results artifact
    #[arg(long, value_name = "FILE", default_value = "benchmarks/results.json")]
    output: PathBuf,

    /// Tokenizer model used to count tokens
    #[arg(long, value_name = "NAME", default_value = "gpt-4")]
    model: String,

    /// Treat skipped scenarios as failures when deciding the exit status
    #[arg(long)]
    skipped_as_failures: bool,
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn maybe_init_tracing() {
    let raw = match std::env::var("TOKRED_TRACE") {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

struct RunOutcome {
    results: Vec<ScenarioResult>,
    skipped: Vec<SkippedScenario>,
}

fn run(args: &CliArgs) -> Result<RunOutcome> {
    let counter = TiktokenCounter::for_model(&args.model)?;
    let scenario_files = scenario::discover_scenarios(&args.scenarios_dir)?;
    println!("Found {} benchmark scenarios", scenario_files.len());

    let mut results = Vec::new();
    let mut skipped = Vec::new();
    for path in &scenario_files {
        let outcome = scenario::load_scenario(path).and_then(|s| eval::evaluate_scenario(&s, &counter));
        match outcome {
            Ok(result) => results.push(result),
            Err(error) => {
                eprintln!("Error running scenario {}: {:#}", path.display(), error);
                skipped.push(SkippedScenario {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    let summary = RunSummary::from_results(&results);
    print!("{}", report::render_report(&results, &summary));

    export::write_results(&args.output, &results, &summary)?;
    println!("Results exported to: {}", args.output.display());

    Ok(RunOutcome { results, skipped })
}

fn main() {
    maybe_init_tracing();

    let args = CliArgs::parse();
    let policy = if args.skipped_as_failures {
        SkipPolicy::TreatAsFailure
    } else {
        SkipPolicy::Exclude
    };

    match run(&args) {
        Ok(outcome) => {
            if !eval::overall_pass(&outcome.results, outcome.skipped.len(), policy) {
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
