use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_serializes_as_camel_case() {
        let contact = Contact {
            id: 7,
            user_id: 1,
            name: "A".into(),
            email: "a@x.com".into(),
            phone: "1234567".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["userId"], 1);
        assert!(value.get("user_id").is_none());
    }
}
