//! Field constraints shared across the model

pub use typed_record_rs::Constraints;

/// Resource names
pub const NAME: Constraints = Constraints::new()
    .length(1, 63)
    .pattern(r"[a-zA-Z0-9][a-zA-Z0-9\-_]*");

/// Personalize resource ARNs
pub const ARN: Constraints = Constraints::new()
    .max_length(256)
    .pattern(r"arn:([a-z\d-]+):personalize:.*:.*:.+");

/// IAM role ARNs
pub const ROLE_ARN: Constraints = Constraints::new()
    .max_length(256)
    .pattern(r"arn:([a-z\d-]+):iam::\d{12}:role/?[a-zA-Z_0-9+=,.@\-_/]+");

/// KMS key ARNs
pub const KMS_KEY_ARN: Constraints = Constraints::new().pattern(r"arn:aws.*:kms:.*:[0-9]{12}:key/.*");

/// S3 (or HTTP) data locations
pub const S3_LOCATION: Constraints = Constraints::new()
    .max_length(256)
    .pattern(r"(s3|http|https)://.+");

/// Free-form short strings: status, dataset type, metric names and the like
pub const SHORT_TEXT: Constraints = Constraints::new().max_length(256);

/// Pagination tokens
pub const NEXT_TOKEN: Constraints = Constraints::new().max_length(1300);

/// Page sizes
pub const MAX_RESULTS: Constraints = Constraints::new().range(1.0, 100.0);

/// Campaign throughput
pub const TRANSACTIONS_PER_SECOND: Constraints = Constraints::new().min(1.0);

/// Filter expressions
pub const FILTER_EXPRESSION: Constraints = Constraints::new().length(1, 2500);

/// Avro schema documents
pub const AVRO_SCHEMA: Constraints = Constraints::new().max_length(10000);

/// Values of parameter maps
pub const PARAMETER_VALUE: Constraints = Constraints::new().max_length(1000);

/// String-keyed parameter maps: hyper-parameters, resource configs,
/// featurization and exploration parameters
pub const PARAMETER_MAP: Constraints = Constraints::new().max_length(100).each(&PARAMETER_VALUE);

/// Candidate values of a categorical hyper-parameter
pub const CATEGORICAL_VALUES: Constraints =
    Constraints::new().max_length(100).each(&PARAMETER_VALUE);

/// Lists of hyper-parameter ranges
pub const RANGE_LIST: Constraints = Constraints::new().max_length(100);

/// Lower bound of an integer hyper-parameter
pub const INTEGER_MIN_VALUE: Constraints = Constraints::new().min(-1_000_000.0);

/// Upper bound of an integer hyper-parameter
pub const INTEGER_MAX_VALUE: Constraints = Constraints::new().max(1_000_000.0);

/// Bounds of a continuous hyper-parameter
pub const CONTINUOUS_VALUE: Constraints = Constraints::new().min(-1_000_000.0);

/// Lists of recipe ARNs
pub const ARN_LIST: Constraints = Constraints::new().max_length(100).each(&ARN);

/// Summaries returned by one page of a list call
pub const PAGE: Constraints = Constraints::new().max_length(100);

/// Non-negative amounts such as training hours
pub const NON_NEGATIVE: Constraints = Constraints::new().min(0.0);
