use crate::eval::{RunSummary, ScenarioResult};

const BANNER_WIDTH: usize = 100;

/// Formats an integer with thousands separators: `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders the console report: one block per scenario in discovery order,
/// followed by the summary block. The caller prints it to stdout.
pub fn render_report(results: &[ScenarioResult], summary: &RunSummary) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();

    out.push('\n');
    out.push_str(&banner);
    out.push('\n');
    out.push_str("TOKEN REDUCTION BENCHMARK RESULTS\n");
    out.push_str(&banner);
    out.push('\n');

    for result in results {
        out.push('\n');
        out.push_str(&result.scenario);
        out.push('\n');
        out.push_str(&format!("  Description: {}\n", result.description));
        out.push_str(&format!(
            "  Baseline:    {} tokens\n",
            group_thousands(result.baseline_tokens)
        ));
        out.push_str(&format!(
            "  Skills:      {} tokens\n",
            group_thousands(result.skill_tokens)
        ));
        out.push_str(&format!("  Reduction:   {:.1}%\n", result.reduction_percentage));
        out.push_str(&format!("  Expected:    {:.1}%\n", result.expected_reduction));
        let status = if result.meets_expectation { "✓ PASS" } else { "✗ FAIL" };
        out.push_str(&format!("  Status:      {}\n", status));
    }

    out.push('\n');
    out.push_str(&banner);
    out.push('\n');
    out.push_str("SUMMARY\n");
    out.push_str(&banner);
    out.push('\n');
    out.push_str(&format!("  Total Scenarios:    {}\n", summary.total_scenarios));
    out.push_str(&format!(
        "  Passed:             {}/{}\n",
        summary.passed, summary.total_scenarios
    ));
    out.push_str(&format!("  Average Reduction:  {:.1}%\n", summary.average_reduction));
    let overall = if summary.total_scenarios > 0 && summary.passed == summary.total_scenarios {
        "✓ ALL PASS"
    } else {
        "✗ SOME FAILED"
    };
    out.push_str(&format!("  Overall Status:     {}\n", overall));
    out.push_str(&banner);
    out.push('\n');

    out
}
