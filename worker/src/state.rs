use crate::infra::database::Database;
use crate::infra::error::AppError;
use announcement_dispatcher::aws::SnsClient;
use announcement_dispatcher::dispatcher::AnnouncementDispatcher;
use announcement_dispatcher::dispatcher_resources::DispatcherResources;
use announcement_dispatcher::environment::Environment;
use announcement_dispatcher::http_gateway::HttpGateway;
use announcement_dispatcher::push_notification_service::SnsPushBackend;
use announcement_dispatcher::sms_settings::SmsSettings;
use announcement_dispatcher::user_repository::PostgresUserStore;
use aws_config::BehaviorVersion;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<AnnouncementDispatcher>,
}

impl AppState {
    pub async fn new() -> Result<Self, AppError> {
        let postgres_pool = Database::from_env().create_lazy_db_pool();

        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let sns_client = SnsClient::new(&aws_config, &Environment::string("PUSH_TOPIC_ARN_PREFIX", "")).await;

        let sms_settings = SmsSettings::from_env()?;
        let http_gateway = HttpGateway::new(Environment::u64("HTTP_TIMEOUT_IN_MILLIS", 3000))?;

        let resources = DispatcherResources::new(Arc::new(SnsPushBackend::new(sns_client)), Arc::new(PostgresUserStore::new(postgres_pool)))
            .with_sms_settings(&sms_settings, http_gateway);

        info!("Dispatcher ready (sms enabled: {})", resources.sms_enabled());

        Ok(Self::from_resources(resources))
    }

    pub fn from_resources(resources: DispatcherResources) -> Self {
        Self {
            dispatcher: Arc::new(AnnouncementDispatcher::new(resources)),
        }
    }
}
