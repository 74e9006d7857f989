
#[cfg(test)]
mod test {
    use crate::commons::{RecordingPushBackend, SmsProviderMock, StaticUserStore, TestContext, FROM_NUMBER};
    use announcement_dispatcher::announcement::AnnouncementRecord;
    use announcement_dispatcher::dispatch_result::SmsPhaseStatus;
    use announcement_dispatcher::dispatcher::AnnouncementDispatcher;
    use announcement_dispatcher::dispatcher_resources::DispatcherResources;
    use announcement_dispatcher::http_gateway::HttpGateway;
    use announcement_dispatcher::recipient::Recipient;
    use announcement_dispatcher::sms_settings::SmsSettings;
    use std::sync::Arc;
    use test_context::test_context;

    fn exam_notice() -> AnnouncementRecord {
        AnnouncementRecord::new("exam-notice").with_title("Exam Notice").with_body("Exams start Monday").with_sender_name("Registrar")
    }

    #[test_context(TestContext)]
    #[tokio::test]
    async fn should_fan_out_exam_notice(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SmsProviderMock::accept_all(ctx).await;

        let user_store = StaticUserStore::Users(vec![
            Recipient::new("user-1", Some("+15550001111")),
            Recipient::new("user-2", Some("+15550002222")),
            Recipient::new("user-3", Some("")),
        ]);

        let result = ctx.dispatcher(user_store, &ctx.sms_settings()).dispatch(&exam_notice()).await;

        assert!(result.push_delivered);
        assert_eq!(SmsPhaseStatus::Completed, result.sms_status);
        assert_eq!(2, result.sms_attempted);
        assert_eq!(2, result.sms_succeeded);
        assert_eq!(0, result.sms_failed);

        let published = ctx.push_backend.published();
        assert_eq!(1, published.len());
        assert_eq!("announcements", published[0].topic);
        assert_eq!(Some("announcement"), published[0].data.get("type").map(String::as_str));
        assert_eq!(Some("Registrar"), published[0].data.get("senderName").map(String::as_str));
        assert_eq!(Some("exam-notice"), published[0].data.get("announcementId").map(String::as_str));

        let requests = ctx.sms_requests().await;
        assert_eq!(2, requests.len());
        assert!(requests.iter().all(|body| body.contains("Body=%5BUMAT+Announcement%5D+Exam+Notice%3A+Exams+start+Monday")));
        assert!(requests.iter().all(|body| body.contains(&format!("From={}", FROM_NUMBER.replace('+', "%2B")))));
        assert!(requests.iter().any(|body| body.contains("To=%2B15550001111")));
        assert!(requests.iter().any(|body| body.contains("To=%2B15550002222")));

        Ok(())
    }

    #[test_context(TestContext)]
    #[tokio::test]
    async fn should_use_defaults_for_empty_announcement(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SmsProviderMock::accept_all(ctx).await;

        let result = ctx
            .dispatcher(StaticUserStore::with_phone_numbers(&["+15550001111"]), &ctx.sms_settings())
            .dispatch(&AnnouncementRecord::new("empty"))
            .await;

        assert_eq!(1, result.sms_succeeded);

        let published = ctx.push_backend.published();
        assert_eq!("New Announcement", published[0].notification.title);
        assert_eq!("", published[0].notification.body);
        assert_eq!(Some("Admin"), published[0].data.get("senderName").map(String::as_str));

        let requests = ctx.sms_requests().await;
        assert!(requests[0].contains("Body=%5BUMAT+Announcement%5D+New+Announcement%3A+"));

        Ok(())
    }

    #[test_context(TestContext)]
    #[tokio::test]
    async fn should_skip_sms_without_credentials(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SmsProviderMock::accept_all(ctx).await;

        let sms_settings = SmsSettings::resolve("", "", "")?;
        let user_store = StaticUserStore::with_phone_numbers(&["+15550001111", "+15550002222", "+15550003333"]);

        let result = ctx.dispatcher(user_store, &sms_settings).dispatch(&exam_notice()).await;

        assert!(result.push_delivered);
        assert_eq!(SmsPhaseStatus::Disabled, result.sms_status);
        assert_eq!((0, 0, 0), (result.sms_attempted, result.sms_succeeded, result.sms_failed));
        assert_eq!(1, ctx.push_backend.published().len());
        assert!(ctx.sms_requests().await.is_empty());

        Ok(())
    }

    #[test_context(TestContext)]
    #[tokio::test]
    async fn should_count_rejected_sms_and_deliver_the_rest(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SmsProviderMock::reject_number(ctx, "%2B15550002222").await;
        SmsProviderMock::accept_all(ctx).await;

        let user_store = StaticUserStore::with_phone_numbers(&["+15550001111", "+15550002222", "+15550003333", "+15550004444"]);

        let result = ctx.dispatcher(user_store, &ctx.sms_settings()).dispatch(&exam_notice()).await;

        assert_eq!(SmsPhaseStatus::Completed, result.sms_status);
        assert_eq!(4, result.sms_attempted);
        assert_eq!(3, result.sms_succeeded);
        assert_eq!(1, result.sms_failed);
        assert_eq!(4, ctx.sms_requests().await.len());

        Ok(())
    }

    #[test_context(TestContext)]
    #[tokio::test]
    async fn should_send_sms_when_push_fails(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SmsProviderMock::accept_all(ctx).await;

        let push_backend = Arc::new(RecordingPushBackend::failing());
        let resources = DispatcherResources::new(push_backend.clone(), Arc::new(StaticUserStore::with_phone_numbers(&["+15550001111", "+15550002222"])))
            .with_sms_settings(&ctx.sms_settings(), HttpGateway::new(2000)?);

        let result = AnnouncementDispatcher::new(resources).dispatch(&exam_notice()).await;

        assert!(!result.push_delivered);
        assert_eq!(1, push_backend.published().len());
        assert_eq!(2, result.sms_succeeded);

        Ok(())
    }

    #[test_context(TestContext)]
    #[tokio::test]
    async fn should_report_unavailable_roster(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SmsProviderMock::accept_all(ctx).await;

        let result = ctx.dispatcher(StaticUserStore::Unavailable, &ctx.sms_settings()).dispatch(&exam_notice()).await;

        assert!(result.push_delivered);
        assert_eq!(SmsPhaseStatus::RosterUnavailable, result.sms_status);
        assert_eq!(0, result.sms_attempted);
        assert!(ctx.sms_requests().await.is_empty());

        Ok(())
    }

    #[test_context(TestContext)]
    #[tokio::test]
    async fn should_text_duplicate_numbers_once_per_user(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SmsProviderMock::accept_all(ctx).await;

        let user_store = StaticUserStore::with_phone_numbers(&["+15550001111", "+15550001111"]);

        let result = ctx.dispatcher(user_store, &ctx.sms_settings()).dispatch(&exam_notice()).await;

        assert_eq!(2, result.sms_attempted);
        assert_eq!(2, ctx.sms_requests().await.len());

        Ok(())
    }
}
