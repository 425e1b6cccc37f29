use crate::error::DeduciaError;
use crate::repository::user_repository::UserRepository;
use crate::repository::SharedSqliteConnection;
use crate::types::{Role, User};
use rusqlite::params;

pub struct SqliteUserRepository {
    connection: SharedSqliteConnection,
}

/// SQL statement to create the `users` table.
///
/// The unique index on `phone` is the correctness boundary for concurrent
/// signups; the handler-level existence check is only a fast path.
const CREATE_USERS_TABLE_SQL: &str = r"
CREATE TABLE IF NOT EXISTS users (
    id integer primary key autoincrement not null,
    phone varchar(32) not null unique,
    full_name varchar(512) not null,
    role varchar(16) not null default 'student'
);
";

/// Creates the `users` table in the database.
pub(crate) fn create_users_table(connection: &SharedSqliteConnection) -> Result<(), DeduciaError> {
    let conn = connection.lock().map_err(|_| DeduciaError::LockPoisoned)?;
    conn.execute(CREATE_USERS_TABLE_SQL, [])
        .map_err(|e| DeduciaError::DatabaseError(e.to_string()))?;
    Ok(())
}

impl SqliteUserRepository {
    pub(crate) fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

impl UserRepository for SqliteUserRepository {
    fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        let mut stmt =
            conn.prepare("SELECT id, phone, full_name, role FROM users WHERE phone = ?1")?;
        let mut user_iter = stmt.query_map(params![phone], |row| {
            Ok(User {
                id: row.get(0)?,
                phone: row.get(1)?,
                full_name: row.get(2)?,
                role: row.get(3)?,
            })
        })?;

        Ok(user_iter.next().transpose()?)
    }

    fn create_user(
        &self,
        phone: &str,
        full_name: &str,
        role: Role,
    ) -> Result<Option<User>, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO users (phone, full_name, role) VALUES (?1, ?2, ?3)",
                params![phone, full_name, role],
            )
            .map_err(|e| DeduciaError::Sql(format!("Unable to insert user {phone}: {e}")))?;

        if inserted == 0 {
            // The unique index rejected the phone number: somebody beat us to it.
            return Ok(None);
        }

        Ok(Some(User {
            id: conn.last_insert_rowid(),
            phone: phone.to_string(),
            full_name: full_name.to_string(),
            role,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::sqlite::tests::test_database_manager;

    #[test]
    fn create_and_find_by_phone() -> Result<(), DeduciaError> {
        let db_manager = test_database_manager()?;
        let user_repo = db_manager.create_user_repository();

        let created = user_repo
            .create_user("9990001", "Asha", Role::Student)?
            .expect("expected a fresh phone number to be accepted");
        assert!(created.id > 0);
        assert_eq!(created.role, Role::Student);

        let found = user_repo.find_by_phone("9990001")?;
        assert_eq!(found, Some(created));
        Ok(())
    }

    #[test]
    fn unknown_phone_yields_none() -> Result<(), DeduciaError> {
        let db_manager = test_database_manager()?;
        let user_repo = db_manager.create_user_repository();
        assert_eq!(user_repo.find_by_phone("0000000")?, None);
        Ok(())
    }

    #[test]
    fn duplicate_phone_is_rejected_by_the_unique_index() -> Result<(), DeduciaError> {
        let db_manager = test_database_manager()?;
        let user_repo = db_manager.create_user_repository();

        let first = user_repo.create_user("5551234", "Ravi", Role::Student)?;
        assert!(first.is_some());

        let second = user_repo.create_user("5551234", "Ravi Again", Role::Student)?;
        assert!(second.is_none());

        // The original registration is untouched.
        let stored = user_repo.find_by_phone("5551234")?.unwrap();
        assert_eq!(stored.full_name, "Ravi");
        Ok(())
    }
}
