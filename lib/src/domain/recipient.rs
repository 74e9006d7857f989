use sqlx::FromRow;

#[derive(Debug, FromRow, Clone, PartialEq)]
pub struct Recipient {
    pub user_id: String,
    pub phone_number: Option<String>,
}

impl Recipient {
    pub fn new(
        user_id: &str,
        phone_number: Option<&str>,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            phone_number: phone_number.map(str::to_string),
        }
    }

    /// The number to text, if the user registered a non-empty one.
    pub fn sms_address(&self) -> Option<&str> {
        self.phone_number.as_deref().filter(|it| !it.is_empty())
    }
}
