//! Event trackers for real-time interaction ingestion

use typed_record_rs::{record, Timestamp};

use super::constraints::*;

record! {
    pub struct EventTracker {
        name: String = "name" [NAME],
        event_tracker_arn: String = "eventTrackerArn" [ARN],
        account_id: String = "accountId" [SHORT_TEXT],
        /// Identifier passed to `PutEvents`
        tracking_id: String = "trackingId" [SHORT_TEXT],
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    pub struct EventTrackerSummary {
        name: String = "name" [NAME],
        event_tracker_arn: String = "eventTrackerArn" [ARN],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    pub struct CreateEventTrackerRequest {
        name: String = "name" [NAME],
        dataset_group_arn: String = "datasetGroupArn" [ARN],
    }
}

record! {
    pub struct CreateEventTrackerResult {
        event_tracker_arn: String = "eventTrackerArn" [ARN],
        tracking_id: String = "trackingId" [SHORT_TEXT],
    }
}

record! {
    pub struct DeleteEventTrackerRequest {
        event_tracker_arn: String = "eventTrackerArn" [ARN],
    }
}

record! {
    pub struct DescribeEventTrackerRequest {
        event_tracker_arn: String = "eventTrackerArn" [ARN],
    }
}

record! {
    pub struct DescribeEventTrackerResult {
        event_tracker: EventTracker = "eventTracker",
    }
}

record! {
    pub struct ListEventTrackersRequest {
        dataset_group_arn: String = "datasetGroupArn" [ARN],
        next_token: String = "nextToken" [NEXT_TOKEN],
        max_results: i32 = "maxResults" [MAX_RESULTS],
    }
}

record! {
    pub struct ListEventTrackersResult {
        event_trackers: [EventTrackerSummary] = "eventTrackers" [PAGE],
        next_token: String = "nextToken" [NEXT_TOKEN],
    }
}
