//! Operations of the control-plane API
//!
//! Every operation is listed once in [`with_operations!`], which feeds the
//! [`Operation`] enum, the request-to-output bindings below and the typed
//! methods of [`PersonalizeClient`](crate::PersonalizeClient).

use std::fmt;

use typed_record_rs::Record;

use crate::model::*;

/// Prefix of the `X-Amz-Target` header value
pub const TARGET_PREFIX: &str = "AmazonPersonalize";

/// Invokes `$m!` with the full `Operation => Request -> Output` table
macro_rules! with_operations {
    ($m:ident) => {
        $m! {
            CreateBatchInferenceJob => CreateBatchInferenceJobRequest -> CreateBatchInferenceJobResult,
            CreateCampaign => CreateCampaignRequest -> CreateCampaignResult,
            CreateDataset => CreateDatasetRequest -> CreateDatasetResult,
            CreateDatasetGroup => CreateDatasetGroupRequest -> CreateDatasetGroupResult,
            CreateDatasetImportJob => CreateDatasetImportJobRequest -> CreateDatasetImportJobResult,
            CreateEventTracker => CreateEventTrackerRequest -> CreateEventTrackerResult,
            CreateFilter => CreateFilterRequest -> CreateFilterResult,
            CreateSchema => CreateSchemaRequest -> CreateSchemaResult,
            CreateSolution => CreateSolutionRequest -> CreateSolutionResult,
            CreateSolutionVersion => CreateSolutionVersionRequest -> CreateSolutionVersionResult,
            DeleteCampaign => DeleteCampaignRequest -> EmptyResult,
            DeleteDataset => DeleteDatasetRequest -> EmptyResult,
            DeleteDatasetGroup => DeleteDatasetGroupRequest -> EmptyResult,
            DeleteEventTracker => DeleteEventTrackerRequest -> EmptyResult,
            DeleteFilter => DeleteFilterRequest -> EmptyResult,
            DeleteSchema => DeleteSchemaRequest -> EmptyResult,
            DeleteSolution => DeleteSolutionRequest -> EmptyResult,
            DescribeAlgorithm => DescribeAlgorithmRequest -> DescribeAlgorithmResult,
            DescribeBatchInferenceJob => DescribeBatchInferenceJobRequest -> DescribeBatchInferenceJobResult,
            DescribeCampaign => DescribeCampaignRequest -> DescribeCampaignResult,
            DescribeDataset => DescribeDatasetRequest -> DescribeDatasetResult,
            DescribeDatasetGroup => DescribeDatasetGroupRequest -> DescribeDatasetGroupResult,
            DescribeDatasetImportJob => DescribeDatasetImportJobRequest -> DescribeDatasetImportJobResult,
            DescribeEventTracker => DescribeEventTrackerRequest -> DescribeEventTrackerResult,
            DescribeFeatureTransformation => DescribeFeatureTransformationRequest -> DescribeFeatureTransformationResult,
            DescribeFilter => DescribeFilterRequest -> DescribeFilterResult,
            DescribeRecipe => DescribeRecipeRequest -> DescribeRecipeResult,
            DescribeSchema => DescribeSchemaRequest -> DescribeSchemaResult,
            DescribeSolution => DescribeSolutionRequest -> DescribeSolutionResult,
            DescribeSolutionVersion => DescribeSolutionVersionRequest -> DescribeSolutionVersionResult,
            GetSolutionMetrics => GetSolutionMetricsRequest -> GetSolutionMetricsResult,
            ListBatchInferenceJobs => ListBatchInferenceJobsRequest -> ListBatchInferenceJobsResult,
            ListCampaigns => ListCampaignsRequest -> ListCampaignsResult,
            ListDatasetGroups => ListDatasetGroupsRequest -> ListDatasetGroupsResult,
            ListDatasetImportJobs => ListDatasetImportJobsRequest -> ListDatasetImportJobsResult,
            ListDatasets => ListDatasetsRequest -> ListDatasetsResult,
            ListEventTrackers => ListEventTrackersRequest -> ListEventTrackersResult,
            ListFilters => ListFiltersRequest -> ListFiltersResult,
            ListRecipes => ListRecipesRequest -> ListRecipesResult,
            ListSchemas => ListSchemasRequest -> ListSchemasResult,
            ListSolutionVersions => ListSolutionVersionsRequest -> ListSolutionVersionsResult,
            ListSolutions => ListSolutionsRequest -> ListSolutionsResult,
            UpdateCampaign => UpdateCampaignRequest -> UpdateCampaignResult,
        }
    };
}

pub(crate) use with_operations;

/// A request record that can be sent as one operation
pub trait OperationRequest: Record + Send + Sync {
    /// Record the service answers with
    type Output: Record + Send;

    /// Operation this request belongs to
    const OPERATION: Operation;
}

macro_rules! define_operations {
    ($($op:ident => $req:ident -> $out:ident,)+) => {
        /// An operation of the control-plane API
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Operation {
            $($op,)+
        }

        impl Operation {
            /// Every operation, in alphabetical order
            pub const ALL: &'static [Operation] = &[$(Operation::$op,)+];

            /// Operation name as used in the target header
            pub fn name(&self) -> &'static str {
                match self {
                    $(Operation::$op => stringify!($op),)+
                }
            }

            /// Look an operation up by name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($op) => Some(Operation::$op),)+
                    _ => None,
                }
            }
        }

        $(
            impl OperationRequest for $req {
                type Output = $out;
                const OPERATION: Operation = Operation::$op;
            }
        )+
    };
}

with_operations!(define_operations);

impl Operation {
    /// Value of the `X-Amz-Target` header
    pub fn target(&self) -> String {
        format!("{}.{}", TARGET_PREFIX, self.name())
    }

    /// Whether the operation only reads state
    pub fn is_read_only(&self) -> bool {
        let name = self.name();
        name.starts_with("Describe") || name.starts_with("List") || name.starts_with("Get")
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn operation_of<R: OperationRequest>(_: &R) -> Operation {
        R::OPERATION
    }

    #[test]
    fn test_operation_table() {
        assert_eq!(Operation::ALL.len(), 43);

        let mut sorted = Operation::ALL.to_vec();
        sorted.sort_by_key(|op| op.name());
        assert_eq!(sorted, Operation::ALL);

        for op in Operation::ALL {
            assert_eq!(Operation::from_name(op.name()), Some(*op));
        }
        assert_eq!(Operation::from_name("PutEvents"), None);
    }

    #[test_case(Operation::CreateCampaign, "AmazonPersonalize.CreateCampaign" ; "create")]
    #[test_case(Operation::GetSolutionMetrics, "AmazonPersonalize.GetSolutionMetrics" ; "get")]
    #[test_case(Operation::ListFilters, "AmazonPersonalize.ListFilters" ; "list")]
    fn test_target_header(op: Operation, expected: &str) {
        assert_eq!(op.target(), expected);
        assert_eq!(op.to_string(), &expected[TARGET_PREFIX.len() + 1..]);
    }

    #[test]
    fn test_request_bindings() {
        assert_eq!(operation_of(&CreateCampaignRequest::new()), Operation::CreateCampaign);
        assert_eq!(operation_of(&DeleteSchemaRequest::new()), Operation::DeleteSchema);
        assert_eq!(operation_of(&ListRecipesRequest::new()), Operation::ListRecipes);
    }

    #[test]
    fn test_read_only_operations() {
        assert!(Operation::DescribeAlgorithm.is_read_only());
        assert!(Operation::ListSolutions.is_read_only());
        assert!(Operation::GetSolutionMetrics.is_read_only());
        assert!(!Operation::UpdateCampaign.is_read_only());
        assert_eq!(Operation::ALL.iter().filter(|op| op.name().starts_with("Delete")).count(), 7);
    }
}
