//! Solutions, solution versions and their training configuration
//!
//! A solution binds a recipe to a dataset group. Each training run produces a
//! solution version, optionally after hyper-parameter optimization (HPO) or
//! AutoML recipe selection.

use typed_record_rs::{record, string_enum, Timestamp};

use super::constraints::*;

string_enum! {
    /// Scope of a training run
    pub enum TrainingMode {
        /// Train from scratch
        Full = "FULL",
        /// Refresh with new items only
        Update = "UPDATE",
    }
}

record! {
    /// Recipes AutoML chooses between and the metric it optimizes
    pub struct AutoMLConfig {
        metric_name: String = "metricName" [SHORT_TEXT],
        recipe_list: [String] = "recipeList" [ARN_LIST],
    }
}

record! {
    pub struct AutoMLResult {
        best_recipe_arn: String = "bestRecipeArn" [ARN],
    }
}

record! {
    /// Metric HPO optimizes
    pub struct HPOObjective {
        /// `Maximize` or `Minimize`
        objective_type: String = "type" [SHORT_TEXT],
        metric_name: String = "metricName" [SHORT_TEXT],
        metric_regex: String = "metricRegex" [SHORT_TEXT],
    }
}

record! {
    /// Upper bounds on the training jobs HPO may start
    pub struct HPOResourceConfig {
        max_number_of_training_jobs: String = "maxNumberOfTrainingJobs" [SHORT_TEXT],
        max_parallel_training_jobs: String = "maxParallelTrainingJobs" [SHORT_TEXT],
    }
}

record! {
    pub struct CategoricalHyperParameterRange {
        name: String = "name" [SHORT_TEXT],
        values: [String] = "values" [CATEGORICAL_VALUES],
    }
}

record! {
    pub struct ContinuousHyperParameterRange {
        name: String = "name" [SHORT_TEXT],
        min_value: f64 = "minValue" [CONTINUOUS_VALUE],
        max_value: f64 = "maxValue" [CONTINUOUS_VALUE],
    }
}

record! {
    pub struct IntegerHyperParameterRange {
        name: String = "name" [SHORT_TEXT],
        min_value: i32 = "minValue" [INTEGER_MIN_VALUE],
        max_value: i32 = "maxValue" [INTEGER_MAX_VALUE],
    }
}

record! {
    /// Hyper-parameters HPO is allowed to tune
    pub struct HyperParameterRanges {
        integer_hyper_parameter_ranges: [IntegerHyperParameterRange] = "integerHyperParameterRanges" [RANGE_LIST],
        continuous_hyper_parameter_ranges: [ContinuousHyperParameterRange] = "continuousHyperParameterRanges" [RANGE_LIST],
        categorical_hyper_parameter_ranges: [CategoricalHyperParameterRange] = "categoricalHyperParameterRanges" [RANGE_LIST],
    }
}

record! {
    pub struct HPOConfig {
        hpo_objective: HPOObjective = "hpoObjective",
        hpo_resource_config: HPOResourceConfig = "hpoResourceConfig",
        algorithm_hyper_parameter_ranges: HyperParameterRanges = "algorithmHyperParameterRanges",
    }
}

record! {
    /// Training configuration of a solution
    pub struct SolutionConfig {
        /// Only events with a value at or above this threshold are used
        event_value_threshold: String = "eventValueThreshold" [SHORT_TEXT],
        hpo_config: HPOConfig = "hpoConfig",
        algorithm_hyper_parameters: {String} = "algorithmHyperParameters" [PARAMETER_MAP],
        feature_transformation_parameters: {String} = "featureTransformationParameters" [PARAMETER_MAP],
        auto_ml_config: AutoMLConfig = "autoMLConfig",
    }
}

record! {
    pub struct SolutionVersionSummary {
        solution_version_arn: String = "solutionVersionArn" [ARN],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
        failure_reason: String = "failureReason",
    }
}

record! {
    pub struct Solution {
        name: String = "name" [NAME],
        solution_arn: String = "solutionArn" [ARN],
        perform_hpo: bool = "performHPO",
        perform_auto_ml: bool = "performAutoML",
        recipe_arn: String = "recipeArn" [ARN],
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        event_type: String = "eventType" [SHORT_TEXT],
        solution_config: SolutionConfig = "solutionConfig",
        auto_ml_result: AutoMLResult = "autoMLResult",
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
        latest_solution_version: SolutionVersionSummary = "latestSolutionVersion",
    }
}

record! {
    pub struct SolutionSummary {
        name: String = "name" [NAME],
        solution_arn: String = "solutionArn" [ARN],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    /// Hyper-parameter values chosen by the best HPO training job
    pub struct TunedHPOParams {
        algorithm_hyper_parameters: {String} = "algorithmHyperParameters" [PARAMETER_MAP],
    }
}

record! {
    /// One trained model of a solution
    pub struct SolutionVersion {
        solution_version_arn: String = "solutionVersionArn" [ARN],
        solution_arn: String = "solutionArn" [ARN],
        perform_hpo: bool = "performHPO",
        perform_auto_ml: bool = "performAutoML",
        recipe_arn: String = "recipeArn" [ARN],
        event_type: String = "eventType" [SHORT_TEXT],
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        solution_config: SolutionConfig = "solutionConfig",
        training_hours: f64 = "trainingHours" [NON_NEGATIVE],
        training_mode: TrainingMode = "trainingMode",
        tuned_hpo_params: TunedHPOParams = "tunedHPOParams",
        status: String = "status" [SHORT_TEXT],
        failure_reason: String = "failureReason",
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    pub struct CreateSolutionRequest {
        name: String = "name" [NAME],
        perform_hpo: bool = "performHPO",
        perform_auto_ml: bool = "performAutoML",
        recipe_arn: String = "recipeArn" [ARN],
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        event_type: String = "eventType" [SHORT_TEXT],
        solution_config: SolutionConfig = "solutionConfig",
    }
}

record! {
    pub struct CreateSolutionResult {
        solution_arn: String = "solutionArn" [ARN],
    }
}

record! {
    pub struct CreateSolutionVersionRequest {
        solution_arn: String = "solutionArn" [ARN],
        training_mode: TrainingMode = "trainingMode",
    }
}

record! {
    pub struct CreateSolutionVersionResult {
        solution_version_arn: String = "solutionVersionArn" [ARN],
    }
}

record! {
    pub struct DeleteSolutionRequest {
        solution_arn: String = "solutionArn" [ARN],
    }
}

record! {
    pub struct DescribeSolutionRequest {
        solution_arn: String = "solutionArn" [ARN],
    }
}

record! {
    pub struct DescribeSolutionResult {
        solution: Solution = "solution",
    }
}

record! {
    pub struct DescribeSolutionVersionRequest {
        solution_version_arn: String = "solutionVersionArn" [ARN],
    }
}

record! {
    pub struct DescribeSolutionVersionResult {
        solution_version: SolutionVersion = "solutionVersion",
    }
}

record! {
    pub struct GetSolutionMetricsRequest {
        solution_version_arn: String = "solutionVersionArn" [ARN],
    }
}

record! {
    pub struct GetSolutionMetricsResult {
        solution_version_arn: String = "solutionVersionArn" [ARN],
        /// Offline evaluation metrics keyed by metric name
        metrics: {f64} = "metrics" [Constraints::new().max_length(100)],
    }
}

record! {
    pub struct ListSolutionVersionsRequest {
        solution_arn: String = "solutionArn" [ARN],
        next_token: String = "nextToken" [NEXT_TOKEN],
        max_results: i32 = "maxResults" [MAX_RESULTS],
    }
}

record! {
    pub struct ListSolutionVersionsResult {
        solution_versions: [SolutionVersionSummary] = "solutionVersions" [PAGE],
        next_token: String = "nextToken" [NEXT_TOKEN],
    }
}

record! {
    pub struct ListSolutionsRequest {
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        next_token: String = "nextToken" [NEXT_TOKEN],
        max_results: i32 = "maxResults" [MAX_RESULTS],
    }
}

record! {
    pub struct ListSolutionsResult {
        solutions: [SolutionSummary] = "solutions" [PAGE],
        next_token: String = "nextToken" [NEXT_TOKEN],
    }
}
