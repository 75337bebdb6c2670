//! Batch inference jobs
//!
//! A batch inference job reads users or items from S3, scores them with a
//! solution version and writes the recommendations back to S3.

use typed_record_rs::{record, Timestamp};

use super::constraints::*;

record! {
    /// S3 location and optional KMS key for job input or output
    pub struct S3DataConfig {
        path: String = "path" [S3_LOCATION],
        kms_key_arn: String = "kmsKeyArn" [KMS_KEY_ARN],
    }
}

record! {
    pub struct BatchInferenceJobInput {
        s3_data_source: S3DataConfig = "s3DataSource",
    }
}

record! {
    pub struct BatchInferenceJobOutput {
        s3_data_destination: S3DataConfig = "s3DataDestination",
    }
}

record! {
    /// Exploration settings for User-Personalization recipes
    pub struct BatchInferenceJobConfig {
        item_exploration_config: {String} = "itemExplorationConfig" [PARAMETER_MAP],
    }
}

record! {
    pub struct BatchInferenceJob {
        job_name: String = "jobName" [NAME],
        batch_inference_job_arn: String = "batchInferenceJobArn" [ARN],
        filter_arn: String = "filterArn" [ARN],
        failure_reason: String = "failureReason",
        solution_version_arn: String = "solutionVersionArn" [ARN],
        num_results: i32 = "numResults",
        job_input: BatchInferenceJobInput = "jobInput",
        job_output: BatchInferenceJobOutput = "jobOutput",
        batch_inference_job_config: BatchInferenceJobConfig = "batchInferenceJobConfig",
        role_arn: String = "roleArn" [ROLE_ARN],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    pub struct BatchInferenceJobSummary {
        batch_inference_job_arn: String = "batchInferenceJobArn" [ARN],
        job_name: String = "jobName" [NAME],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
        failure_reason: String = "failureReason",
        solution_version_arn: String = "solutionVersionArn" [ARN],
    }
}

record! {
    pub struct CreateBatchInferenceJobRequest {
        job_name: String = "jobName" [NAME],
        solution_version_arn: String = "solutionVersionArn" [ARN],
        filter_arn: String = "filterArn" [ARN],
        num_results: i32 = "numResults",
        job_input: BatchInferenceJobInput = "jobInput",
        job_output: BatchInferenceJobOutput = "jobOutput",
        role_arn: String = "roleArn" [ROLE_ARN],
        batch_inference_job_config: BatchInferenceJobConfig = "batchInferenceJobConfig",
    }
}

record! {
    pub struct CreateBatchInferenceJobResult {
        batch_inference_job_arn: String = "batchInferenceJobArn" [ARN],
    }
}

record! {
    pub struct DescribeBatchInferenceJobRequest {
        batch_inference_job_arn: String = "batchInferenceJobArn" [ARN],
    }
}

record! {
    pub struct DescribeBatchInferenceJobResult {
        batch_inference_job: BatchInferenceJob = "batchInferenceJob",
    }
}

record! {
    pub struct ListBatchInferenceJobsRequest {
        solution_version_arn: String = "solutionVersionArn" [ARN],
        next_token: String = "nextToken" [NEXT_TOKEN],
        max_results: i32 = "maxResults" [MAX_RESULTS],
    }
}

record! {
    pub struct ListBatchInferenceJobsResult {
        batch_inference_jobs: [BatchInferenceJobSummary] = "batchInferenceJobs" [PAGE],
        next_token: String = "nextToken" [NEXT_TOKEN],
    }
}
