use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::scenario::Scenario;
use crate::tokenize::{TokenCounter, count_file};

/// Outcome of one evaluated scenario. Immutable once computed; serialized
/// verbatim into the export artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario: String,
    pub description: String,
    pub baseline_tokens: u64,
    pub skill_tokens: u64,
    pub reduction_percentage: f64,
    pub expected_reduction: f64,
    pub meets_expectation: bool,
}

/// Relative decrease in token count, as a percentage of the baseline.
/// Defined as `0.0` for an empty baseline so a scenario with no baseline
/// files still evaluates instead of dividing by zero.
pub fn reduction_percentage(baseline_tokens: u64, skill_tokens: u64) -> f64 {
    if baseline_tokens == 0 {
        return 0.0;
    }
    (baseline_tokens as f64 - skill_tokens as f64) / baseline_tokens as f64 * 100.0
}

/// Evaluates one scenario: sums token counts over both file sets and judges
/// the reduction against the expected threshold.
///
/// Any unreadable or untokenizable file fails the whole scenario; the caller
/// records the skip and continues with the remaining scenarios.
pub fn evaluate_scenario(scenario: &Scenario, counter: &dyn TokenCounter) -> Result<ScenarioResult> {
    let mut baseline_tokens = 0u64;
    for path in &scenario.baseline.files {
        baseline_tokens += count_file(counter, path)?;
    }

    let mut skill_tokens = 0u64;
    for path in &scenario.skills.files {
        skill_tokens += count_file(counter, path)?;
    }

    let reduction = reduction_percentage(baseline_tokens, skill_tokens);
    tracing::debug!(
        scenario = %scenario.name,
        baseline_tokens,
        skill_tokens,
        reduction,
        "evaluated scenario"
    );

    Ok(ScenarioResult {
        scenario: scenario.name.clone(),
        description: scenario.description.clone(),
        baseline_tokens,
        skill_tokens,
        reduction_percentage: reduction,
        expected_reduction: scenario.expected_reduction,
        meets_expectation: reduction >= scenario.expected_reduction,
    })
}

/// Identity of a scenario that failed to evaluate and was excluded from the
/// run.
#[derive(Debug)]
pub struct SkippedScenario {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// Aggregate over every evaluated (non-skipped) scenario.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total_scenarios: usize,
    pub passed: usize,
    pub average_reduction: f64,
}

impl RunSummary {
    pub fn from_results(results: &[ScenarioResult]) -> Self {
        let passed = results.iter().filter(|r| r.meets_expectation).count();
        let average_reduction = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.reduction_percentage).sum::<f64>() / results.len() as f64
        };
        Self {
            total_scenarios: results.len(),
            passed,
            average_reduction,
        }
    }
}

/// How skipped scenarios weigh on the overall verdict. They are excluded
/// from results and averages under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipPolicy {
    /// Skips are diagnosed but do not affect the exit status.
    #[default]
    Exclude,
    /// Any skipped scenario fails the run.
    TreatAsFailure,
}

/// Overall verdict for the run: requires a non-empty evaluated set in which
/// every scenario met its expectation, and no skips under
/// [`SkipPolicy::TreatAsFailure`].
pub fn overall_pass(results: &[ScenarioResult], skipped: usize, policy: SkipPolicy) -> bool {
    if results.is_empty() {
        return false;
    }
    if policy == SkipPolicy::TreatAsFailure && skipped > 0 {
        return false;
    }
    results.iter().all(|r| r.meets_expectation)
}
