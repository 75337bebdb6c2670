//! Recommendation filters

use typed_record_rs::{record, Timestamp};

use super::constraints::*;

record! {
    /// A filter expression applied to recommendations of a dataset group
    pub struct Filter {
        name: String = "name" [NAME],
        filter_arn: String = "filterArn" [ARN],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        failure_reason: String = "failureReason",
        filter_expression: String = "filterExpression" [FILTER_EXPRESSION],
        status: String = "status" [SHORT_TEXT],
    }
}

record! {
    pub struct FilterSummary {
        name: String = "name" [NAME],
        filter_arn: String = "filterArn" [ARN],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        failure_reason: String = "failureReason",
        status: String = "status" [SHORT_TEXT],
    }
}

record! {
    pub struct CreateFilterRequest {
        name: String = "name" [NAME],
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        filter_expression: String = "filterExpression" [FILTER_EXPRESSION],
    }
}

record! {
    pub struct CreateFilterResult {
        filter_arn: String = "filterArn" [ARN],
    }
}

record! {
    pub struct DeleteFilterRequest {
        filter_arn: String = "filterArn" [ARN],
    }
}

record! {
    pub struct DescribeFilterRequest {
        filter_arn: String = "filterArn" [ARN],
    }
}

record! {
    pub struct DescribeFilterResult {
        filter: Filter = "filter",
    }
}

record! {
    pub struct ListFiltersRequest {
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        next_token: String = "nextToken" [NEXT_TOKEN],
        max_results: i32 = "maxResults" [MAX_RESULTS],
    }
}

record! {
    pub struct ListFiltersResult {
        // The service capitalizes this member
        filters: [FilterSummary] = "Filters" [PAGE],
        next_token: String = "nextToken" [NEXT_TOKEN],
    }
}
