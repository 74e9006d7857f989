use crate::http_gateway::HttpGateway;
use crate::push_notification_service::PushBackend;
use crate::sms_notification_service::{SmsBackend, TwilioSmsBackend};
use crate::sms_settings::SmsSettings;
use crate::user_repository::UserStore;
use std::sync::Arc;

/// Channel handles created once at startup and shared read-only by every dispatch.
///
/// `sms_backend` is `None` when SMS is disabled.
#[derive(Clone)]
pub struct DispatcherResources {
    pub push_backend: Arc<dyn PushBackend>,
    pub user_store: Arc<dyn UserStore>,
    pub sms_backend: Option<Arc<dyn SmsBackend>>,
}

impl DispatcherResources {
    pub fn new(
        push_backend: Arc<dyn PushBackend>,
        user_store: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            push_backend,
            user_store,
            sms_backend: None,
        }
    }

    pub fn with_sms_backend(
        self,
        sms_backend: Arc<dyn SmsBackend>,
    ) -> Self {
        Self {
            push_backend: self.push_backend,
            user_store: self.user_store,
            sms_backend: Some(sms_backend),
        }
    }

    pub fn with_sms_settings(
        self,
        sms_settings: &SmsSettings,
        http_gateway: HttpGateway,
    ) -> Self {
        match sms_settings.credentials() {
            Some(credentials) => self.with_sms_backend(Arc::new(TwilioSmsBackend::new(http_gateway, credentials.clone()))),
            None => Self {
                push_backend: self.push_backend,
                user_store: self.user_store,
                sms_backend: None,
            },
        }
    }

    pub fn sms_enabled(&self) -> bool {
        self.sms_backend.is_some()
    }
}
