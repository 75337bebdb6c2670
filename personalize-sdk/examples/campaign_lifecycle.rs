//! Campaign Lifecycle Demo
//!
//! Walks through creating a solution, training a version and deploying it
//! as a campaign. The transport is an in-process executor that answers
//! with canned responses, so the demo runs without AWS credentials.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use personalize_sdk::{
    init_logging,
    model::*,
    LoggingConfig, PersonalizeClient, PersonalizeError, Record, RequestExecutor, ServiceRequest,
    ServiceResponse,
};

const DATASET_GROUP_ARN: &str = "arn:aws:personalize:us-east-1:123456789012:dataset-group/movies";
const RECIPE_ARN: &str = "arn:aws:personalize:::recipe/aws-user-personalization";

/// Answers each operation with a canned body
#[derive(Default)]
struct CannedExecutor {
    calls: AtomicUsize,
}

#[async_trait]
impl RequestExecutor for CannedExecutor {
    async fn execute(&self, request: ServiceRequest) -> personalize_sdk::Result<ServiceResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let response = match request.target.as_str() {
            "AmazonPersonalize.CreateSolution" => ServiceResponse::ok(
                r#"{"solutionArn":"arn:aws:personalize:us-east-1:123456789012:solution/movies"}"#,
            ),
            "AmazonPersonalize.CreateSolutionVersion" => ServiceResponse::ok(
                r#"{"solutionVersionArn":"arn:aws:personalize:us-east-1:123456789012:solution/movies/1a2b3c"}"#,
            ),
            "AmazonPersonalize.GetSolutionMetrics" => ServiceResponse::ok(
                r#"{"metrics":{"coverage":0.31,"normalized_discounted_cumulative_gain_at_10":0.24}}"#,
            ),
            "AmazonPersonalize.CreateCampaign" => ServiceResponse::ok(
                r#"{"campaignArn":"arn:aws:personalize:us-east-1:123456789012:campaign/movies"}"#,
            ),
            _ => ServiceResponse::error(
                400,
                r#"{"__type":"ResourceNotFoundException","message":"No such resource"}"#,
            )
            .with_request_id("demo-request"),
        };

        Ok(response)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(Some(LoggingConfig {
        level: "debug".to_string(),
        ..LoggingConfig::default()
    }))?;

    println!("Campaign Lifecycle Demo");
    println!("=======================\n");

    let client = PersonalizeClient::builder()
        .region("us-east-1")
        .validate_requests(true)
        .build(CannedExecutor::default())?;

    // Step 1: a solution with AutoML choosing between two recipes
    let mut solution_config = SolutionConfig::new().with_auto_ml_config(
        AutoMLConfig::new()
            .with_metric_name("precision_at_25")
            .append_recipe_list(RECIPE_ARN)
            .append_recipe_list("arn:aws:personalize:::recipe/aws-hrnn"),
    );
    solution_config.add_algorithm_hyper_parameters_entry("hidden_dimension", "100")?;

    let request = CreateSolutionRequest::new()
        .with_name("movies")
        .with_perform_auto_ml(true)
        .with_dataset_group_arn(DATASET_GROUP_ARN)
        .with_solution_config(solution_config)
        .validated()?;

    println!("Creating solution: {}", request);
    let solution = client.create_solution(&request).await?;
    let solution_arn = solution.solution_arn().cloned().unwrap_or_default();
    println!("Solution ARN: {}\n", solution_arn);

    // Step 2: train a version
    let version = client
        .create_solution_version(
            &CreateSolutionVersionRequest::new()
                .with_solution_arn(solution_arn)
                .with_training_mode(TrainingMode::Full),
        )
        .await?;
    let version_arn = version.solution_version_arn().cloned().unwrap_or_default();
    println!("Solution version ARN: {}", version_arn);

    let metrics = client
        .get_solution_metrics(&GetSolutionMetricsRequest::new().with_solution_version_arn(version_arn.clone()))
        .await?;
    println!("Offline metrics: {}\n", metrics);

    // Step 3: deploy the version
    let campaign = client
        .create_campaign(
            &CreateCampaignRequest::new()
                .with_name("movies-campaign")
                .with_solution_version_arn(version_arn)
                .with_min_provisioned_tps(1)
                .with_campaign_config(
                    CampaignConfig::new().with_item_exploration_config([("explorationWeight", "0.3")]),
                ),
        )
        .await?;
    println!("Campaign: {}\n", campaign);

    // Step 4: service faults come back as typed errors
    let lookup = DescribeCampaignRequest::new()
        .with_campaign_arn("arn:aws:personalize:us-east-1:123456789012:campaign/unknown");
    match client.describe_campaign(&lookup).await {
        Ok(result) => println!("Unexpected campaign: {}", result),
        Err(e) => match e.root() {
            PersonalizeError::ResourceNotFound(message) => {
                println!("Lookup failed as expected: {} (operation {:?})", message, e.operation())
            }
            other => anyhow::bail!("unexpected error: {}", other),
        },
    }

    // Local validation catches bad input before anything is sent
    let invalid = CreateCampaignRequest::new().with_name("no spaces allowed");
    if let Err(e) = client.create_campaign(&invalid).await {
        println!("Rejected locally: {}", e);
    }

    println!("\nExecutor calls: {}", client.executor().calls.load(Ordering::SeqCst));
    Ok(())
}
