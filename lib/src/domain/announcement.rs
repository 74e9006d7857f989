use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "New Announcement";
pub const DEFAULT_BODY: &str = "";
pub const DEFAULT_SENDER_NAME: &str = "Admin";

/// A freshly created announcement as handed over by the trigger.
///
/// Absent and empty fields fall back to the defaults above through the accessors.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementRecord {
    #[serde(default)]
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub sender_name: Option<String>,
}

impl AnnouncementRecord {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_title(
        self,
        title: &str,
    ) -> Self {
        Self {
            title: Some(title.to_string()),
            ..self
        }
    }

    pub fn with_body(
        self,
        body: &str,
    ) -> Self {
        Self {
            body: Some(body.to_string()),
            ..self
        }
    }

    pub fn with_sender_name(
        self,
        sender_name: &str,
    ) -> Self {
        Self {
            sender_name: Some(sender_name.to_string()),
            ..self
        }
    }

    pub fn title(&self) -> &str {
        or_default(&self.title, DEFAULT_TITLE)
    }

    pub fn body(&self) -> &str {
        or_default(&self.body, DEFAULT_BODY)
    }

    pub fn sender_name(&self) -> &str {
        or_default(&self.sender_name, DEFAULT_SENDER_NAME)
    }
}

fn or_default<'a>(
    value: &'a Option<String>,
    default: &'a str,
) -> &'a str {
    value.as_deref().filter(|it| !it.is_empty()).unwrap_or(default)
}
