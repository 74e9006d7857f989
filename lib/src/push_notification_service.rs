use crate::aws::SnsClient;
use crate::error::DispatcherError;
use crate::push_job::PushJob;
use async_trait::async_trait;
use aws_sdk_sns::error::ProvideErrorMetadata;
use tracing::instrument;
use tracing::log::debug;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushBackend: Send + Sync {
    async fn publish(
        &self,
        push_job: &PushJob,
    ) -> Result<(), DispatcherError>;
}

/// Publishes push jobs to SNS topics, which relay them to the subscribed FCM and APNs endpoints.
pub struct SnsPushBackend {
    sns_client: SnsClient,
}

impl SnsPushBackend {
    pub fn new(sns_client: SnsClient) -> Self {
        Self { sns_client }
    }
}

#[async_trait]
impl PushBackend for SnsPushBackend {
    #[instrument(skip_all, name = "publish_push_notification")]
    async fn publish(
        &self,
        push_job: &PushJob,
    ) -> Result<(), DispatcherError> {
        let topic_arn = self.sns_client.topic_arn(&push_job.topic);
        let message = push_job.sns_message()?;

        let output = self
            .sns_client
            .client
            .publish()
            .topic_arn(&topic_arn)
            .message_structure("json")
            .message(message)
            .send()
            .await
            .map_err(|error| {
                let body = error
                    .raw_response()
                    .map(|rr| rr.body())
                    .map(|body| {
                        if let Some(bytes) = body.bytes() {
                            String::from_utf8(bytes.to_vec()).ok().unwrap_or(String::from("Unknown: Failed to convert bytes to string"))
                        } else {
                            String::from("Unknown: None bytes")
                        }
                    })
                    .unwrap_or(String::from("Unknown"));

                DispatcherError::new(
                    &body,
                    &format!("{} (topic {topic_arn})", error.message().unwrap_or("Failed to publish push notification")),
                )
            })?;

        debug!("Push notification published to {topic_arn} with message id {}", output.message_id().unwrap_or("unknown"));

        Ok(())
    }
}
