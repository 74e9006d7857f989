use crate::announcement::AnnouncementRecord;
use crate::error::DispatcherError;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

pub const ANNOUNCEMENTS_TOPIC: &str = "announcements";
pub const ANNOUNCEMENT_TYPE: &str = "announcement";
pub const CLICK_ACTION: &str = "FLUTTER_NOTIFICATION_CLICK";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PushNotification {
    pub title: String,
    pub body: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AndroidConfig {
    pub priority: String,
    pub notification: AndroidNotification,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AndroidNotification {
    pub channel_id: String,
    pub notification_priority: String,
    pub default_sound: bool,
    pub default_vibrate_timings: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApnsPayload {
    pub aps: Aps,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Aps {
    #[serde(rename = "content-available")]
    pub content_available: u8,
    pub sound: String,
    pub badge: u32,
}

/// The single broadcast notification derived from an announcement.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PushJob {
    #[serde(skip)]
    pub topic: String,
    pub notification: PushNotification,
    pub android: AndroidConfig,
    #[serde(skip)]
    pub apns: ApnsPayload,
    pub data: BTreeMap<String, String>,
}

impl PushJob {
    pub fn from_announcement(record: &AnnouncementRecord) -> Self {
        let data = BTreeMap::from([
            ("type".to_string(), ANNOUNCEMENT_TYPE.to_string()),
            ("announcementId".to_string(), record.id.clone()),
            ("senderName".to_string(), record.sender_name().to_string()),
            ("click_action".to_string(), CLICK_ACTION.to_string()),
        ]);

        Self {
            topic: ANNOUNCEMENTS_TOPIC.to_string(),
            notification: PushNotification {
                title: record.title().to_string(),
                body: record.body().to_string(),
            },
            android: AndroidConfig {
                priority: "high".to_string(),
                notification: AndroidNotification {
                    channel_id: ANNOUNCEMENTS_TOPIC.to_string(),
                    notification_priority: "PRIORITY_HIGH".to_string(),
                    default_sound: true,
                    default_vibrate_timings: true,
                },
            },
            apns: ApnsPayload {
                aps: Aps {
                    content_available: 1,
                    sound: "default".to_string(),
                    badge: 1,
                },
            },
            data,
        }
    }

    /// Per-platform message for an SNS publish with `MessageStructure=json`.
    ///
    /// `GCM` carries an FCM v1 message, `APNS`/`APNS_SANDBOX` carry the alert and
    /// the data fields as custom keys, `default` is the plain body (or the title when the body is empty) for every other protocol.
    pub fn sns_message(&self) -> Result<String, DispatcherError> {
        let message = serde_json::to_value(self).map_err(|error| DispatcherError::new(&error.to_string(), "Failed to serialize push notification message"))?;
        let fcm_message = json!({ "fcmV1Message": { "message": message } });

        let mut apns_message = json!({
            "aps": {
                "alert": { "title": self.notification.title, "body": self.notification.body },
                "content-available": self.apns.aps.content_available,
                "sound": self.apns.aps.sound,
                "badge": self.apns.aps.badge,
            }
        });
        if let Some(apns_object) = apns_message.as_object_mut() {
            for (key, value) in &self.data {
                apns_object.insert(key.clone(), json!(value));
            }
        }

        let fcm = to_json_string(&fcm_message)?;
        let apns = to_json_string(&apns_message)?;

        to_json_string(&json!({
            "default": self.default_text(),
            "GCM": fcm,
            "APNS": apns,
            "APNS_SANDBOX": apns,
        }))
    }

    fn default_text(&self) -> &str {
        if self.notification.body.is_empty() {
            &self.notification.title
        } else {
            &self.notification.body
        }
    }
}

fn to_json_string(value: &serde_json::Value) -> Result<String, DispatcherError> {
    serde_json::to_string(value).map_err(|error| DispatcherError::new(&error.to_string(), "Failed to serialize push notification message"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn should_build_push_job_from_announcement() {
        let record = AnnouncementRecord::new("a-1").with_title("Exam Notice").with_body("Exams start Monday").with_sender_name("Registrar");

        let push_job = PushJob::from_announcement(&record);

        assert_eq!("announcements", push_job.topic);
        assert_eq!("Exam Notice", push_job.notification.title);
        assert_eq!("Exams start Monday", push_job.notification.body);
        assert_eq!(Some(&"announcement".to_string()), push_job.data.get("type"));
        assert_eq!(Some(&"a-1".to_string()), push_job.data.get("announcementId"));
        assert_eq!(Some(&"Registrar".to_string()), push_job.data.get("senderName"));
        assert_eq!(Some(&"FLUTTER_NOTIFICATION_CLICK".to_string()), push_job.data.get("click_action"));
    }

    #[test]
    fn should_use_default_notification_when_fields_are_omitted() {
        let push_job = PushJob::from_announcement(&AnnouncementRecord::new("a-2"));

        assert_eq!(
            PushNotification {
                title: "New Announcement".to_string(),
                body: "".to_string(),
            },
            push_job.notification
        );
        assert_eq!(Some(&"Admin".to_string()), push_job.data.get("senderName"));
    }

    #[test]
    fn should_render_per_platform_sns_message() {
        let record = AnnouncementRecord::new("a-3").with_title("Exam Notice").with_body("Exams start Monday");
        let push_job = PushJob::from_announcement(&record);

        let message: Value = serde_json::from_str(&push_job.sns_message().unwrap()).unwrap();

        assert_eq!("Exams start Monday", message["default"]);

        let fcm: Value = serde_json::from_str(message["GCM"].as_str().unwrap()).unwrap();
        let fcm_message = &fcm["fcmV1Message"]["message"];
        assert_eq!("Exam Notice", fcm_message["notification"]["title"]);
        assert_eq!("high", fcm_message["android"]["priority"]);
        assert_eq!("announcements", fcm_message["android"]["notification"]["channel_id"]);
        assert_eq!("a-3", fcm_message["data"]["announcementId"]);
        assert!(fcm_message.get("topic").is_none());

        let apns: Value = serde_json::from_str(message["APNS"].as_str().unwrap()).unwrap();
        assert_eq!(1, apns["aps"]["content-available"]);
        assert_eq!("default", apns["aps"]["sound"]);
        assert_eq!(1, apns["aps"]["badge"]);
        assert_eq!("announcement", apns["type"]);
        assert_eq!(message["APNS"], message["APNS_SANDBOX"]);
    }

    #[test]
    fn should_fall_back_to_title_for_default_message_when_body_is_empty() {
        let push_job = PushJob::from_announcement(&AnnouncementRecord::new("a-4"));

        let message: Value = serde_json::from_str(&push_job.sns_message().unwrap()).unwrap();

        assert_eq!("New Announcement", message["default"]);
    }
}
