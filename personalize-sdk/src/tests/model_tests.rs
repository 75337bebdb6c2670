//! Tests for the service model
//!
//! These tests exercise the generated records the way callers use them:
//! building requests, rendering them, comparing them and checking their
//! constraints.

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use typed_record_rs::{FieldKind, Record, RecordError, StructuralHash, Timestamp, ValidationError};

    use crate::model::*;

    const RECIPE_ARN: &str = "arn:aws:personalize:::recipe/aws-user-personalization";
    const DATASET_GROUP_ARN: &str = "arn:aws:personalize:us-east-1:123456789012:dataset-group/movies";

    fn hpo_solution() -> CreateSolutionRequest {
        let objective = HPOObjective::new()
            .with_objective_type("Maximize")
            .with_metric_name("precision_at_25");

        let ranges = HyperParameterRanges::new().append_integer_hyper_parameter_ranges(
            IntegerHyperParameterRange::new()
                .with_name("bptt")
                .with_min_value(20)
                .with_max_value(40),
        );

        CreateSolutionRequest::new()
            .with_name("movies-hpo")
            .with_perform_hpo(true)
            .with_recipe_arn(RECIPE_ARN)
            .with_dataset_group_arn(DATASET_GROUP_ARN)
            .with_solution_config(
                SolutionConfig::new().with_hpo_config(
                    HPOConfig::new()
                        .with_hpo_objective(objective)
                        .with_algorithm_hyper_parameter_ranges(ranges),
                ),
            )
    }

    #[test]
    fn test_describe_nested_request() {
        assert_eq!(
            hpo_solution().describe(),
            format!(
                "{{name: movies-hpo,performHPO: true,recipeArn: {},datasetGroupArn: {},\
                 solutionConfig: {{hpoConfig: {{hpoObjective: {{type: Maximize,metricName: precision_at_25}},\
                 algorithmHyperParameterRanges: {{integerHyperParameterRanges: [{{name: bptt,minValue: 20,maxValue: 40}}]}}}}}}}}",
                RECIPE_ARN, DATASET_GROUP_ARN
            )
        );
    }

    #[test]
    fn test_describe_only_set_fields() {
        let request = CreateDatasetGroupRequest::new().with_name("x");
        assert_eq!(request.describe(), "{name: x}");
        assert_eq!(CreateDatasetGroupRequest::new().describe(), "{}");
    }

    #[test]
    fn test_wire_form_of_nested_request() {
        let value: Value = serde_json::from_str(&hpo_solution().to_json().unwrap()).unwrap();

        assert_eq!(
            value["solutionConfig"]["hpoConfig"]["hpoObjective"],
            json!({"type": "Maximize", "metricName": "precision_at_25"})
        );
        assert_eq!(value["performHPO"], json!(true));
        // Absent members are omitted, never null
        assert!(value.get("eventType").is_none());
        assert!(value["solutionConfig"].get("autoMLConfig").is_none());
    }

    #[test]
    fn test_equality_and_hash() {
        let a = hpo_solution();
        let b = hpo_solution();
        assert_eq!(a, b);
        assert!(a.structural_equals(&b));
        assert_eq!(a.structural_hash(), b.structural_hash());

        let c = hpo_solution().with_event_type("click");
        assert_ne!(a, c);

        let std_hash = |r: &CreateSolutionRequest| {
            let mut hasher = DefaultHasher::new();
            r.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(std_hash(&a), std_hash(&b));
        assert_ne!(a.structural_hash(), c.structural_hash());
    }

    #[test]
    fn test_absent_is_not_empty() {
        let absent = ListCampaignsRequest::new();
        let empty_token = ListCampaignsRequest::new().with_next_token("");
        assert_ne!(absent, empty_token);
        assert_eq!(empty_token.present_fields(), vec!["nextToken"]);
    }

    #[test]
    fn test_recipe_list_append_then_replace() {
        let config = AutoMLConfig::new()
            .append_recipe_list("arn:aws:personalize:::recipe/aws-hrnn")
            .append_recipe_list("arn:aws:personalize:::recipe/aws-hrnn-metadata");
        assert_eq!(config.recipe_list().map(<[String]>::len), Some(2));

        let config = config.with_recipe_list(["arn:aws:personalize:::recipe/aws-sims"]);
        assert_eq!(
            config.recipe_list(),
            Some(&["arn:aws:personalize:::recipe/aws-sims".to_string()][..])
        );
    }

    #[test]
    fn test_duplicate_hyper_parameter_is_rejected() {
        let mut config = SolutionConfig::new();
        config
            .add_algorithm_hyper_parameters_entry("hidden_dimension", "100")
            .unwrap()
            .add_algorithm_hyper_parameters_entry("bptt", "32")
            .unwrap();

        let err = config
            .add_algorithm_hyper_parameters_entry("hidden_dimension", "200")
            .unwrap_err();
        assert!(matches!(err, RecordError::DuplicateKey { .. }));
        assert_eq!(
            err.to_string(),
            "Duplicated keys (hidden_dimension) are provided for SolutionConfig.algorithmHyperParameters"
        );
        assert_eq!(
            config.algorithm_hyper_parameters().map(|m| m["hidden_dimension"].as_str()),
            Some("100")
        );
    }

    #[test]
    fn test_campaign_config_map_replace() {
        let config = CampaignConfig::new()
            .with_item_exploration_config([("explorationWeight", "0.3"), ("explorationItemAgeCutOff", "30")]);

        assert_eq!(
            config.describe(),
            "{itemExplorationConfig: {explorationItemAgeCutOff=30, explorationWeight=0.3}}"
        );
    }

    #[test]
    fn test_validation_reports_nested_paths() {
        let request = hpo_solution()
            .with_name("movies hpo")
            .with_solution_config(
                SolutionConfig::new()
                    .with_hpo_config(
                        HPOConfig::new().with_hpo_objective(
                            HPOObjective::new().with_metric_name("m".repeat(300)),
                        ),
                    )
                    .with_auto_ml_config(
                        AutoMLConfig::new()
                            .append_recipe_list(RECIPE_ARN)
                            .append_recipe_list("recipe/aws-hrnn"),
                    ),
            );

        let err = request.validate().unwrap_err();
        let messages: Vec<String> = err.leaves().iter().map(|e| e.to_string()).collect();

        assert_eq!(err.count(), 3, "{:?}", messages);
        assert!(messages.iter().any(|m| m.contains("name: ")));
        assert!(messages
            .iter()
            .any(|m| m.contains("solutionConfig.hpoConfig.hpoObjective.metricName")));
        assert!(messages.iter().any(|m| m.contains("solutionConfig.autoMLConfig.recipeList[1]")));

        assert!(hpo_solution().validated().is_ok());
    }

    #[test]
    fn test_numeric_and_enum_constraints() {
        let page = ListSolutionsRequest::new().with_max_results(101);
        assert!(matches!(page.validate(), Err(ValidationError::OutOfRange(_))));
        assert!(ListSolutionsRequest::new().with_max_results(100).validate().is_ok());

        let campaign = CreateCampaignRequest::new().with_min_provisioned_tps(0);
        assert!(campaign.validate().is_err());

        // Unknown enum values decode, but do not validate
        let version = CreateSolutionVersionRequest::new().with_training_mode("PARTIAL");
        assert_eq!(version.training_mode().map(TrainingMode::as_str), Some("PARTIAL"));
        assert!(matches!(version.validate(), Err(ValidationError::NotAllowed(_))));
        assert!(CreateSolutionVersionRequest::new()
            .with_training_mode(TrainingMode::Update)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_dynamic_access() {
        let mut campaign = Campaign::new();
        campaign.set_field("minProvisionedTPS", json!(5)).unwrap();
        campaign
            .set_field("campaignConfig", json!({"itemExplorationConfig": {"explorationWeight": "0.1"}}))
            .unwrap();

        assert_eq!(campaign.min_provisioned_tps(), Some(&5));
        assert_eq!(campaign.get_field("min_provisioned_tps").unwrap(), Some(json!(5)));
        assert_eq!(campaign.present_fields(), vec!["minProvisionedTPS", "campaignConfig"]);

        campaign.clear_field("campaignConfig").unwrap();
        assert!(campaign.campaign_config().is_none());
        assert!(campaign.get_field("tags").is_err());
    }

    #[test]
    fn test_descriptor_tables() {
        let wire: Vec<&str> = CreateCampaignRequest::fields().iter().map(|d| d.wire_name).collect();
        assert_eq!(wire, ["name", "solutionVersionArn", "minProvisionedTPS", "campaignConfig"]);

        let objective = HPOObjective::descriptor("objective_type").unwrap();
        assert_eq!(objective.wire_name, "type");

        let metrics = GetSolutionMetricsResult::descriptor("metrics").unwrap();
        assert_eq!(metrics.kind, FieldKind::Map(Box::new(FieldKind::Double)));

        let mode = SolutionVersion::descriptor("trainingMode").unwrap();
        assert_eq!(mode.kind, FieldKind::Enum(&["FULL", "UPDATE"]));

        assert_eq!(ListFiltersResult::descriptor("filters").map(|d| d.wire_name), Some("Filters"));
        assert!(EmptyResult::fields().is_empty());
    }

    #[test]
    fn test_timestamps_on_the_wire() {
        let created = Timestamp::from_millis(1_590_000_000_250).unwrap();
        let summary = CampaignSummary::new()
            .with_name("movies")
            .with_creation_date_time(created);

        let value: Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(value["creationDateTime"], json!(1_590_000_000.25));
        assert_eq!(
            summary.describe(),
            "{name: movies,creationDateTime: 2020-05-20T18:40:00.250Z}"
        );

        let back = CampaignSummary::from_json(&summary.to_json().unwrap()).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_sub_millisecond_timestamps_are_stable() {
        let precise = Utc.timestamp_nanos(1_590_000_000_250_999_999);
        let mut summary = CampaignSummary::new().with_creation_date_time(precise);

        let back = CampaignSummary::from_json(&summary.to_json().unwrap()).unwrap();
        assert_eq!(back, summary);
        assert_eq!(back.structural_hash(), summary.structural_hash());

        summary.set_field("status", json!("ACTIVE")).unwrap();
        assert_eq!(
            summary.creation_date_time(),
            Timestamp::from_millis(1_590_000_000_250).as_ref()
        );
    }

    #[test]
    fn test_non_finite_metric_is_kept_but_not_sent() {
        let mut result = GetSolutionMetricsResult::new()
            .with_metrics([("coverage", 0.31), ("precision_at_25", f64::NAN)]);

        result
            .set_field("solutionVersionArn", json!("arn:aws:personalize:::solution/v1"))
            .unwrap();
        assert_eq!(result.present_fields(), vec!["solutionVersionArn", "metrics"]);
        assert!(result
            .metrics()
            .and_then(|m| m.get("precision_at_25"))
            .map_or(false, |v| v.is_nan()));

        let err = result.to_json().unwrap_err();
        assert!(matches!(err, RecordError::NonFinite { ref path, .. } if path == "metrics.precision_at_25"));
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_batch_inference_job_shapes() {
        let request = CreateBatchInferenceJobRequest::new()
            .with_job_name("nightly")
            .with_num_results(25)
            .with_job_input(
                BatchInferenceJobInput::new()
                    .with_s3_data_source(S3DataConfig::new().with_path("s3://bucket/in/users.json")),
            )
            .with_job_output(
                BatchInferenceJobOutput::new()
                    .with_s3_data_destination(S3DataConfig::new().with_path("ftp://bucket/out/")),
            );

        let err = request.validate().unwrap_err();
        assert_eq!(err.count(), 1);
        assert!(err.to_string().contains("jobOutput.s3DataDestination.path"));
    }
}
