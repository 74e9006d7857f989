pub mod aws;
pub mod dispatcher;
pub mod dispatcher_resources;
pub mod environment;
pub mod error;
pub mod http_gateway;
pub mod push_notification_service;
pub mod scatter_gather;
pub mod shutdown;
pub mod sms_notification_service;
pub mod sms_settings;
pub mod user_repository;

mod domain;

pub use domain::{announcement, dispatch_result, push_job, recipient, sms_job};
