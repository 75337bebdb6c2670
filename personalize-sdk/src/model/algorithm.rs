//! Algorithms and their default hyper-parameter ranges

use typed_record_rs::{record, Timestamp};

use super::constraints::*;

record! {
    /// Container image of an algorithm
    pub struct AlgorithmImage {
        name: String = "name" [Constraints::new().length(1, 256)],
        docker_uri: String = "dockerURI" [SHORT_TEXT],
    }
}

record! {
    /// A categorical hyper-parameter and its default values
    pub struct DefaultCategoricalHyperParameterRange {
        name: String = "name" [SHORT_TEXT],
        values: [String] = "values" [CATEGORICAL_VALUES],
        is_tunable: bool = "isTunable",
    }
}

record! {
    /// A continuous hyper-parameter and its default range
    pub struct DefaultContinuousHyperParameterRange {
        name: String = "name" [SHORT_TEXT],
        min_value: f64 = "minValue" [CONTINUOUS_VALUE],
        max_value: f64 = "maxValue" [CONTINUOUS_VALUE],
        is_tunable: bool = "isTunable",
    }
}

record! {
    /// An integer hyper-parameter and its default range
    pub struct DefaultIntegerHyperParameterRange {
        name: String = "name" [SHORT_TEXT],
        min_value: i32 = "minValue" [INTEGER_MIN_VALUE],
        max_value: i32 = "maxValue" [INTEGER_MAX_VALUE],
        is_tunable: bool = "isTunable",
    }
}

record! {
    /// Default ranges of every tunable hyper-parameter of an algorithm
    pub struct DefaultHyperParameterRanges {
        integer_hyper_parameter_ranges: [DefaultIntegerHyperParameterRange] = "integerHyperParameterRanges" [RANGE_LIST],
        continuous_hyper_parameter_ranges: [DefaultContinuousHyperParameterRange] = "continuousHyperParameterRanges" [RANGE_LIST],
        categorical_hyper_parameter_ranges: [DefaultCategoricalHyperParameterRange] = "categoricalHyperParameterRanges" [RANGE_LIST],
    }
}

record! {
    /// A training algorithm provided by the service
    pub struct Algorithm {
        name: String = "name" [NAME],
        algorithm_arn: String = "algorithmArn" [ARN],
        algorithm_image: AlgorithmImage = "algorithmImage",
        default_hyper_parameters: {String} = "defaultHyperParameters" [PARAMETER_MAP],
        default_hyper_parameter_ranges: DefaultHyperParameterRanges = "defaultHyperParameterRanges",
        default_resource_config: {String} = "defaultResourceConfig" [PARAMETER_MAP],
        training_input_mode: String = "trainingInputMode" [SHORT_TEXT],
        role_arn: String = "roleArn" [ARN],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    pub struct DescribeAlgorithmRequest {
        algorithm_arn: String = "algorithmArn" [ARN],
    }
}

record! {
    pub struct DescribeAlgorithmResult {
        algorithm: Algorithm = "algorithm",
    }
}
