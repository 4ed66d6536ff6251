#[cfg(test)]
mod tests {
    use std::fs;

    use crate::eval::{RunSummary, ScenarioResult};
    use crate::export::write_results;

    fn sample_results() -> Vec<ScenarioResult> {
        vec![
            ScenarioResult {
                scenario: "doc-slimming".to_string(),
                description: "Trim the full corpus down to skills".to_string(),
                baseline_tokens: 1000,
                skill_tokens: 400,
                reduction_percentage: 60.0,
                expected_reduction: 50.0,
                meets_expectation: true,
            },
            ScenarioResult {
                scenario: "no-gain".to_string(),
                description: "Identical corpora".to_string(),
                baseline_tokens: 500,
                skill_tokens: 500,
                reduction_percentage: 0.0,
                expected_reduction: 10.0,
                meets_expectation: false,
            },
        ]
    }

    #[test]
    fn test_export_round_trips_with_expected_field_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out").join("results.json");
        let results = sample_results();
        let summary = RunSummary::from_results(&results);

        write_results(&path, &results, &summary).expect("export should succeed");

        let data = fs::read_to_string(&path).expect("read artifact");
        let value: serde_json::Value = serde_json::from_str(&data).expect("artifact should be valid JSON");

        let exported = value["results"].as_array().expect("results array");
        assert_eq!(exported.len(), 2);
        assert_eq!(exported[0]["scenario"], "doc-slimming");
        assert_eq!(exported[0]["baseline_tokens"], 1000);
        assert_eq!(exported[0]["skill_tokens"], 400);
        assert_eq!(exported[0]["reduction_percentage"], 60.0);
        assert_eq!(exported[0]["expected_reduction"], 50.0);
        assert_eq!(exported[0]["meets_expectation"], true);

        assert_eq!(value["summary"]["total_scenarios"], 2);
        assert_eq!(value["summary"]["passed"], 1);
        assert_eq!(value["summary"]["average_reduction"], 30.0);
    }

    #[test]
    fn test_export_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("results.json");
        fs::write(&path, "stale content from an earlier run").expect("write stale artifact");

        let results = sample_results();
        let summary = RunSummary::from_results(&results);
        write_results(&path, &results, &summary).expect("export should succeed");

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read artifact")).expect("parse artifact");
        assert_eq!(value["summary"]["total_scenarios"], 2);
    }

    #[test]
    fn test_export_empty_run() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("results.json");
        let summary = RunSummary::from_results(&[]);

        write_results(&path, &[], &summary).expect("export should succeed");

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read artifact")).expect("parse artifact");
        assert_eq!(value["results"].as_array().map(|a| a.len()), Some(0));
        assert_eq!(value["summary"]["average_reduction"], 0.0);
    }
}
