//! Datasets, dataset groups, import jobs and schemas

use typed_record_rs::{record, Timestamp};

use super::constraints::*;

record! {
    /// Where an import job reads its data from
    pub struct DataSource {
        data_location: String = "dataLocation" [S3_LOCATION],
    }
}

record! {
    pub struct Dataset {
        name: String = "name" [NAME],
        dataset_arn: String = "datasetArn" [ARN],
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        /// `Interactions`, `Items` or `Users`
        dataset_type: String = "datasetType" [SHORT_TEXT],
        schema_arn: String = "schemaArn" [ARN],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    pub struct DatasetSummary {
        name: String = "name" [NAME],
        dataset_arn: String = "datasetArn" [ARN],
        dataset_type: String = "datasetType" [SHORT_TEXT],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    /// A container for the datasets and resources of one domain
    pub struct DatasetGroup {
        name: String = "name" [NAME],
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        status: String = "status" [SHORT_TEXT],
        role_arn: String = "roleArn" [ROLE_ARN],
        kms_key_arn: String = "kmsKeyArn" [KMS_KEY_ARN],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
        failure_reason: String = "failureReason",
    }
}

record! {
    pub struct DatasetGroupSummary {
        name: String = "name" [NAME],
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
        failure_reason: String = "failureReason",
    }
}

record! {
    /// A job copying training data from S3 into a dataset
    pub struct DatasetImportJob {
        job_name: String = "jobName" [NAME],
        dataset_import_job_arn: String = "datasetImportJobArn" [ARN],
        dataset_arn: String = "datasetArn" [ARN],
        data_source: DataSource = "dataSource",
        role_arn: String = "roleArn" [ARN],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
        failure_reason: String = "failureReason",
    }
}

record! {
    pub struct DatasetImportJobSummary {
        dataset_import_job_arn: String = "datasetImportJobArn" [ARN],
        job_name: String = "jobName" [NAME],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
        failure_reason: String = "failureReason",
    }
}

record! {
    /// An Avro schema describing the columns of a dataset
    pub struct DatasetSchema {
        name: String = "name" [NAME],
        schema_arn: String = "schemaArn" [ARN],
        schema: String = "schema" [AVRO_SCHEMA],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    pub struct DatasetSchemaSummary {
        name: String = "name" [NAME],
        schema_arn: String = "schemaArn" [ARN],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    pub struct CreateDatasetRequest {
        name: String = "name" [NAME],
        schema_arn: String = "schemaArn" [ARN],
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        dataset_type: String = "datasetType" [SHORT_TEXT],
    }
}

record! {
    pub struct CreateDatasetResult {
        dataset_arn: String = "datasetArn" [ARN],
    }
}

record! {
    pub struct CreateDatasetGroupRequest {
        name: String = "name" [NAME],
        role_arn: String = "roleArn" [ROLE_ARN],
        kms_key_arn: String = "kmsKeyArn" [KMS_KEY_ARN],
    }
}

record! {
    pub struct CreateDatasetGroupResult {
        dataset_group_arn: String = "datasetGroupArn" [ARN],
    }
}

record! {
    pub struct CreateDatasetImportJobRequest {
        job_name: String = "jobName" [NAME],
        dataset_arn: String = "datasetArn" [ARN],
        data_source: DataSource = "dataSource",
        role_arn: String = "roleArn" [ROLE_ARN],
    }
}

record! {
    pub struct CreateDatasetImportJobResult {
        dataset_import_job_arn: String = "datasetImportJobArn" [ARN],
    }
}

record! {
    pub struct CreateSchemaRequest {
        name: String = "name" [NAME],
        schema: String = "schema" [AVRO_SCHEMA],
    }
}

record! {
    pub struct CreateSchemaResult {
        schema_arn: String = "schemaArn" [ARN],
    }
}

record! {
    pub struct DeleteDatasetRequest {
        dataset_arn: String = "datasetArn" [ARN],
    }
}

record! {
    pub struct DeleteDatasetGroupRequest {
        dataset_group_arn: String = "datasetGroupArn" [ARN],
    }
}

record! {
    pub struct DeleteSchemaRequest {
        schema_arn: String = "schemaArn" [ARN],
    }
}

record! {
    pub struct DescribeDatasetRequest {
        dataset_arn: String = "datasetArn" [ARN],
    }
}

record! {
    pub struct DescribeDatasetResult {
        dataset: Dataset = "dataset",
    }
}

record! {
    pub struct DescribeDatasetGroupRequest {
        dataset_group_arn: String = "datasetGroupArn" [ARN],
    }
}

record! {
    pub struct DescribeDatasetGroupResult {
        dataset_group: DatasetGroup = "datasetGroup",
    }
}

record! {
    pub struct DescribeDatasetImportJobRequest {
        dataset_import_job_arn: String = "datasetImportJobArn" [ARN],
    }
}

record! {
    pub struct DescribeDatasetImportJobResult {
        dataset_import_job: DatasetImportJob = "datasetImportJob",
    }
}

record! {
    pub struct DescribeSchemaRequest {
        schema_arn: String = "schemaArn" [ARN],
    }
}

record! {
    pub struct DescribeSchemaResult {
        schema: DatasetSchema = "schema",
    }
}

record! {
    pub struct ListDatasetGroupsRequest {
        next_token: String = "nextToken" [NEXT_TOKEN],
        max_results: i32 = "maxResults" [MAX_RESULTS],
    }
}

record! {
    pub struct ListDatasetGroupsResult {
        dataset_groups: [DatasetGroupSummary] = "datasetGroups" [PAGE],
        next_token: String = "nextToken" [NEXT_TOKEN],
    }
}

record! {
    pub struct ListDatasetImportJobsRequest {
        dataset_arn: String = "datasetArn" [ARN],
        next_token: String = "nextToken" [NEXT_TOKEN],
        max_results: i32 = "maxResults" [MAX_RESULTS],
    }
}

record! {
    pub struct ListDatasetImportJobsResult {
        dataset_import_jobs: [DatasetImportJobSummary] = "datasetImportJobs" [PAGE],
        next_token: String = "nextToken" [NEXT_TOKEN],
    }
}

record! {
    pub struct ListDatasetsRequest {
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        next_token: String = "nextToken" [NEXT_TOKEN],
        max_results: i32 = "maxResults" [MAX_RESULTS],
    }
}

record! {
    pub struct ListDatasetsResult {
        datasets: [DatasetSummary] = "datasets" [PAGE],
        next_token: String = "nextToken" [NEXT_TOKEN],
    }
}

record! {
    pub struct ListSchemasRequest {
        next_token: String = "nextToken" [NEXT_TOKEN],
        max_results: i32 = "maxResults" [MAX_RESULTS],
    }
}

record! {
    pub struct ListSchemasResult {
        schemas: [DatasetSchemaSummary] = "schemas" [PAGE],
        next_token: String = "nextToken" [NEXT_TOKEN],
    }
}
