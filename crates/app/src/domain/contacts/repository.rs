//! Contacts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::contacts::models::{Contact, NewContact};

const INSERT_CONTACT_SQL: &str = include_str!("sql/insert_contact.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgContactsRepository;

impl PgContactsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_contact(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        contact: &NewContact,
    ) -> Result<Contact, sqlx::Error> {
        query_as::<Postgres, Contact>(INSERT_CONTACT_SQL)
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.subject)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Contact {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            subject: row.try_get("subject")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
