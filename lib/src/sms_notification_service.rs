use crate::error::DispatcherError;
use crate::http_gateway::HttpGateway;
use crate::sms_job::SmsJob;
use crate::sms_settings::SmsCredentials;
use async_trait::async_trait;
use tracing::instrument;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SmsBackend: Send + Sync {
    async fn send(
        &self,
        sms_job: &SmsJob,
    ) -> Result<(), DispatcherError>;
}

/// Sends each SMS through the Twilio Messages REST API.
pub struct TwilioSmsBackend {
    http_gateway: HttpGateway,
    credentials: SmsCredentials,
}

impl TwilioSmsBackend {
    pub fn new(
        http_gateway: HttpGateway,
        credentials: SmsCredentials,
    ) -> Self {
        Self { http_gateway, credentials }
    }

    fn messages_url(&self) -> String {
        format!("{}/2010-04-01/Accounts/{}/Messages.json", self.credentials.base_url, self.credentials.account_sid)
    }
}

#[async_trait]
impl SmsBackend for TwilioSmsBackend {
    #[instrument(skip_all, name = "send_sms")]
    async fn send(
        &self,
        sms_job: &SmsJob,
    ) -> Result<(), DispatcherError> {
        let form = [
            ("To", sms_job.to.as_str()),
            ("From", self.credentials.from_number.as_str()),
            ("Body", sms_job.body.as_str()),
        ];

        let response = self
            .http_gateway
            .client
            .post(self.messages_url())
            .basic_auth(&self.credentials.account_sid, Some(&self.credentials.auth_token))
            .form(&form)
            .send()
            .await
            .map_err(|error| DispatcherError::new(&error.to_string(), &format!("Failed to send sms to {}", sms_job.to)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or("unknown".to_string());

        Err(DispatcherError::with_status(
            status.as_u16(),
            &body,
            &format!("Sms provider rejected message to {} with status {}", sms_job.to, status),
        ))
    }
}
