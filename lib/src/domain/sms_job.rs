use crate::announcement::AnnouncementRecord;
use crate::recipient::Recipient;
use serde::Serialize;

pub const SMS_PREFIX: &str = "[UMAT Announcement]";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SmsJob {
    pub user_id: String,
    pub to: String,
    pub body: String,
}

impl SmsJob {
    pub fn message_body(record: &AnnouncementRecord) -> String {
        format!("{SMS_PREFIX} {}: {}", record.title(), record.body())
    }

    /// One job per recipient with a phone number. Repeated numbers are kept.
    pub fn for_recipients(
        record: &AnnouncementRecord,
        recipients: &[Recipient],
    ) -> Vec<SmsJob> {
        let body = Self::message_body(record);

        recipients
            .iter()
            .filter_map(|recipient| {
                recipient.sms_address().map(|to| SmsJob {
                    user_id: recipient.user_id.clone(),
                    to: to.to_string(),
                    body: body.clone(),
                })
            })
            .collect()
    }
}
