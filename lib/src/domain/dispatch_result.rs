use crate::scatter_gather::GatherSummary;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SmsPhaseStatus {
    Disabled,
    Completed,
    RosterUnavailable,
}

/// Outcome of one dispatch. Only lives for the duration of the invocation.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
    pub announcement_id: String,
    pub push_delivered: bool,
    pub sms_status: SmsPhaseStatus,
    pub sms_attempted: usize,
    pub sms_succeeded: usize,
    pub sms_failed: usize,
}

impl DispatchResult {
    pub fn new(
        announcement_id: &str,
        push_delivered: bool,
        sms_status: SmsPhaseStatus,
        sms_summary: GatherSummary,
    ) -> Self {
        Self {
            announcement_id: announcement_id.to_string(),
            push_delivered,
            sms_status,
            sms_attempted: sms_summary.attempted,
            sms_succeeded: sms_summary.succeeded,
            sms_failed: sms_summary.failed,
        }
    }
}
