use crate::environment::Environment;
use crate::error::DispatcherError;
use std::fmt;
use tracing::log::info;

pub const DEFAULT_TWILIO_BASE_URL: &str = "https://api.twilio.com";

#[derive(Clone, PartialEq)]
pub struct SmsCredentials {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub base_url: String,
}

impl fmt::Debug for SmsCredentials {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("SmsCredentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"***")
            .field("from_number", &self.from_number)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Whether the SMS channel takes part in dispatches, decided once at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum SmsSettings {
    Disabled,
    Enabled(SmsCredentials),
}

impl SmsSettings {
    pub fn from_env() -> Result<Self, DispatcherError> {
        let settings = Self::resolve(
            &Environment::string("TWILIO_ACCOUNT_SID", ""),
            &Environment::string("TWILIO_AUTH_TOKEN", ""),
            &Environment::string("TWILIO_FROM_NUMBER", ""),
        )?;

        Ok(settings.with_base_url(&Environment::string("TWILIO_BASE_URL", DEFAULT_TWILIO_BASE_URL)))
    }

    /// Missing account sid or auth token disables SMS. Both present without a
    /// sender number is rejected, the provider would refuse every message.
    pub fn resolve(
        account_sid: &str,
        auth_token: &str,
        from_number: &str,
    ) -> Result<Self, DispatcherError> {
        if account_sid.is_empty() || auth_token.is_empty() {
            info!("Sms sending disabled: sms credentials not provided");
            return Ok(SmsSettings::Disabled);
        }

        if from_number.is_empty() {
            return Err(DispatcherError::new(
                "TWILIO_FROM_NUMBER is empty",
                "Sms credentials are configured without a sender phone number",
            ));
        }

        Ok(SmsSettings::Enabled(SmsCredentials {
            account_sid: account_sid.to_string(),
            auth_token: auth_token.to_string(),
            from_number: from_number.to_string(),
            base_url: DEFAULT_TWILIO_BASE_URL.to_string(),
        }))
    }

    pub fn with_base_url(
        self,
        base_url: &str,
    ) -> Self {
        match self {
            SmsSettings::Disabled => SmsSettings::Disabled,
            SmsSettings::Enabled(credentials) => SmsSettings::Enabled(SmsCredentials {
                base_url: base_url.trim_end_matches('/').to_string(),
                ..credentials
            }),
        }
    }

    pub fn credentials(&self) -> Option<&SmsCredentials> {
        match self {
            SmsSettings::Disabled => None,
            SmsSettings::Enabled(credentials) => Some(credentials),
        }
    }
}
