use crate::announcement::AnnouncementRecord;
use crate::dispatch_result::{DispatchResult, SmsPhaseStatus};
use crate::dispatcher_resources::DispatcherResources;
use crate::push_job::PushJob;
use crate::scatter_gather::{scatter_gather, GatherSummary, JobOutcome};
use crate::sms_job::SmsJob;
use tracing::instrument;
use tracing::log::{error, info};

pub struct AnnouncementDispatcher {
    resources: DispatcherResources,
}

struct SmsPhase {
    status: SmsPhaseStatus,
    summary: GatherSummary,
}

impl SmsPhase {
    fn skipped(status: SmsPhaseStatus) -> Self {
        Self {
            status,
            summary: GatherSummary::default(),
        }
    }
}

impl AnnouncementDispatcher {
    pub fn new(resources: DispatcherResources) -> Self {
        Self { resources }
    }

    /// Fans one announcement out to the push topic and, when enabled, to every
    /// registered phone number.
    ///
    /// Never fails: channel errors are logged and only show up in the returned counts.
    #[instrument(skip_all, name = "dispatch_announcement", fields(announcement_id = %record.id))]
    pub async fn dispatch(
        &self,
        record: &AnnouncementRecord,
    ) -> DispatchResult {
        let push_job = PushJob::from_announcement(record);

        let (push_delivered, sms_phase) = tokio::join!(self.send_push(&push_job), self.send_sms(record));

        let result = DispatchResult::new(&record.id, push_delivered, sms_phase.status, sms_phase.summary);

        info!(
            "Announcement {} dispatched: push_delivered={}, sms_status={:?}, sms_attempted={}, sms_succeeded={}, sms_failed={}",
            result.announcement_id, result.push_delivered, result.sms_status, result.sms_attempted, result.sms_succeeded, result.sms_failed
        );

        result
    }

    async fn send_push(
        &self,
        push_job: &PushJob,
    ) -> bool {
        match self.resources.push_backend.publish(push_job).await {
            Ok(()) => {
                info!("Push notification sent to {} topic", push_job.topic);
                true
            },
            Err(error) => {
                error!("Error sending push notification: {}", error.describe());
                false
            },
        }
    }

    async fn send_sms(
        &self,
        record: &AnnouncementRecord,
    ) -> SmsPhase {
        let Some(sms_backend) = &self.resources.sms_backend else {
            info!("Sms sending skipped: sms credentials not provided");
            return SmsPhase::skipped(SmsPhaseStatus::Disabled);
        };

        let recipients = match self.resources.user_store.list_users().await {
            Ok(recipients) => recipients,
            Err(error) => {
                error!("Error sending sms notifications: {}", error.describe());
                return SmsPhase::skipped(SmsPhaseStatus::RosterUnavailable);
            },
        };

        let sms_jobs = SmsJob::for_recipients(record, &recipients);

        let outcomes = scatter_gather(sms_jobs.into_iter().map(|sms_job| async move {
            let result = sms_backend.send(&sms_job).await;
            (sms_job, result)
        }))
        .await;

        for outcome in &outcomes {
            if let JobOutcome::Failed(sms_job, error) = outcome {
                error!("Failed sms to {} (user {}): {}", sms_job.to, sms_job.user_id, error.describe());
            }
        }

        let summary = GatherSummary::from_outcomes(&outcomes);
        info!("Sent sms notifications to {} of {} users", summary.succeeded, summary.attempted);

        SmsPhase {
            status: SmsPhaseStatus::Completed,
            summary,
        }
    }
}
