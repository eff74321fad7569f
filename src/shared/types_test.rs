//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // Bindings are written to bindings/tools.ts for the web front end
        ConvertUnitsRequest::export().expect("Failed to export ConvertUnitsRequest");
        ConvertUnitsResponse::export().expect("Failed to export ConvertUnitsResponse");
        DecisionOption::export().expect("Failed to export DecisionOption");
        DecisionSet::export().expect("Failed to export DecisionSet");
        ColorValue::export().expect("Failed to export ColorValue");
        PatternTestResult::export().expect("Failed to export PatternTestResult");
    }

    #[test]
    fn decision_method_serializes_lowercase() {
        let json = serde_json::to_string(&DecisionMethod::Wheel).unwrap();
        assert_eq!(json, "\"wheel\"");
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
