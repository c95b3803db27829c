use sqlx::PgPool;

use super::models::contact::Contact;
use super::DatabaseError;
use crate::validation::contact::{ContactDraft, ContactFields};

const CONTACT_COLUMNS: &str = "id, user_id, name, email, phone, created_at, updated_at";

/// Store handle for the contacts table.
#[derive(Clone)]
pub struct ContactStore {
    pool: PgPool,
}

impl ContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<Contact>, DatabaseError> {
        let contacts = sqlx::query_as::<_, Contact>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Contact>, DatabaseError> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    /// Inserting with an unknown owner surfaces the foreign-key violation
    /// from the statement itself; there is no existence pre-check.
    pub async fn create(&self, draft: ContactDraft) -> Result<Contact, DatabaseError> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            "INSERT INTO contacts (user_id, name, email, phone) VALUES ($1, $2, $3, $4)
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(draft.user_id)
        .bind(draft.name)
        .bind(draft.email)
        .bind(draft.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(contact)
    }

    /// Full replacement of the mutable fields. The owning user_id is never
    /// touched by updates.
    pub async fn update(&self, id: i32, fields: ContactFields) -> Result<Contact, DatabaseError> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            "UPDATE contacts
             SET name = $2, email = $3, phone = $4, updated_at = NOW()
             WHERE id = $1
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(id)
        .bind(fields.name)
        .bind(fields.email)
        .bind(fields.phone)
        .fetch_optional(&self.pool)
        .await?;

        contact.ok_or_else(|| DatabaseError::NotFound(format!("contact {id} not found")))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("contact {id} not found")));
        }
        Ok(())
    }
}
