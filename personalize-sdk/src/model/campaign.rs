//! Campaigns: deployed solution versions serving real-time recommendations

use typed_record_rs::{record, Timestamp};

use super::constraints::*;

record! {
    /// Configuration details of a campaign
    pub struct CampaignConfig {
        /// Exploration weight and item age cut-off for User-Personalization
        item_exploration_config: {String} = "itemExplorationConfig" [PARAMETER_MAP],
    }
}

record! {
    /// State of the most recent update to a campaign
    pub struct CampaignUpdateSummary {
        solution_version_arn: String = "solutionVersionArn" [ARN],
        min_provisioned_tps: i32 = "minProvisionedTPS" [TRANSACTIONS_PER_SECOND],
        campaign_config: CampaignConfig = "campaignConfig",
        status: String = "status" [SHORT_TEXT],
        failure_reason: String = "failureReason",
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    pub struct Campaign {
        name: String = "name" [NAME],
        campaign_arn: String = "campaignArn" [ARN],
        solution_version_arn: String = "solutionVersionArn" [ARN],
        min_provisioned_tps: i32 = "minProvisionedTPS" [TRANSACTIONS_PER_SECOND],
        campaign_config: CampaignConfig = "campaignConfig",
        status: String = "status" [SHORT_TEXT],
        failure_reason: String = "failureReason",
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
        latest_campaign_update: CampaignUpdateSummary = "latestCampaignUpdate",
    }
}

record! {
    pub struct CampaignSummary {
        name: String = "name" [NAME],
        campaign_arn: String = "campaignArn" [ARN],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
        failure_reason: String = "failureReason",
    }
}

record! {
    pub struct CreateCampaignRequest {
        name: String = "name" [NAME],
        solution_version_arn: String = "solutionVersionArn" [ARN],
        min_provisioned_tps: i32 = "minProvisionedTPS" [TRANSACTIONS_PER_SECOND],
        campaign_config: CampaignConfig = "campaignConfig",
    }
}

record! {
    pub struct CreateCampaignResult {
        campaign_arn: String = "campaignArn" [ARN],
    }
}

record! {
    pub struct DeleteCampaignRequest {
        campaign_arn: String = "campaignArn" [ARN],
    }
}

record! {
    pub struct DescribeCampaignRequest {
        campaign_arn: String = "campaignArn" [ARN],
    }
}

record! {
    pub struct DescribeCampaignResult {
        campaign: Campaign = "campaign",
    }
}

record! {
    pub struct ListCampaignsRequest {
        solution_arn: String = "solutionArn" [ARN],
        next_token: String = "nextToken" [NEXT_TOKEN],
        max_results: i32 = "maxResults" [MAX_RESULTS],
    }
}

record! {
    pub struct ListCampaignsResult {
        campaigns: [CampaignSummary] = "campaigns" [PAGE],
        next_token: String = "nextToken" [NEXT_TOKEN],
    }
}

record! {
    /// Changes the solution version or throughput of a campaign
    pub struct UpdateCampaignRequest {
        campaign_arn: String = "campaignArn" [ARN],
        solution_version_arn: String = "solutionVersionArn" [ARN],
        min_provisioned_tps: i32 = "minProvisionedTPS" [TRANSACTIONS_PER_SECOND],
        campaign_config: CampaignConfig = "campaignConfig",
    }
}

record! {
    pub struct UpdateCampaignResult {
        campaign_arn: String = "campaignArn" [ARN],
    }
}
