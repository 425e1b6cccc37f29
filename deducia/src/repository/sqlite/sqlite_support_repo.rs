use crate::error::DeduciaError;
use crate::repository::support_repository::SupportRepository;
use crate::repository::SharedSqliteConnection;
use crate::types::{MentorRequestDetails, NewMentorRequest, NewSupportMessage};
use chrono::{DateTime, Utc};
use rusqlite::params;

pub struct SqliteSupportRepository {
    connection: SharedSqliteConnection,
}

/// SQL statement to create the `mentor_requests` table.
const CREATE_MENTOR_REQUESTS_TABLE_SQL: &str = r"
CREATE TABLE IF NOT EXISTS mentor_requests (
    id integer primary key autoincrement not null,
    student_id integer not null,
    subject varchar(512) not null,
    issue varchar(2048) not null,
    preferred_time varchar(128) not null,
    request_date datetime not null
);
";

/// SQL statement to create the `support_messages` table.
const CREATE_SUPPORT_MESSAGES_TABLE_SQL: &str = r"
CREATE TABLE IF NOT EXISTS support_messages (
    id integer primary key autoincrement not null,
    name varchar(512) not null,
    phone varchar(32) not null,
    message varchar(2048) not null
);
";

/// Creates the `mentor_requests` table in the database.
pub(crate) fn create_mentor_requests_table(
    connection: &SharedSqliteConnection,
) -> Result<(), DeduciaError> {
    let conn = connection.lock().map_err(|_| DeduciaError::LockPoisoned)?;
    conn.execute(CREATE_MENTOR_REQUESTS_TABLE_SQL, [])
        .map_err(|e| DeduciaError::DatabaseError(e.to_string()))?;
    Ok(())
}

/// Creates the `support_messages` table in the database.
pub(crate) fn create_support_messages_table(
    connection: &SharedSqliteConnection,
) -> Result<(), DeduciaError> {
    let conn = connection.lock().map_err(|_| DeduciaError::LockPoisoned)?;
    conn.execute(CREATE_SUPPORT_MESSAGES_TABLE_SQL, [])
        .map_err(|e| DeduciaError::DatabaseError(e.to_string()))?;
    Ok(())
}

impl SqliteSupportRepository {
    pub(crate) fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

impl SupportRepository for SqliteSupportRepository {
    fn add_mentor_request(
        &self,
        request: &NewMentorRequest,
        request_date: DateTime<Utc>,
    ) -> Result<(), DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        conn.execute(
            "INSERT INTO mentor_requests (student_id, subject, issue, preferred_time, request_date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                request.student_id,
                request.subject,
                request.issue,
                request.preferred_time,
                request_date.to_rfc3339()
            ],
        )
        .map_err(|e| DeduciaError::Sql(format!("Unable to insert mentor request: {e}")))?;
        Ok(())
    }

    fn list_mentor_requests(&self) -> Result<Vec<MentorRequestDetails>, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        let mut stmt = conn.prepare(
            "SELECT mr.id, mr.student_id, mr.subject, mr.issue, mr.preferred_time,
                    mr.request_date, u.full_name, u.phone
             FROM mentor_requests mr
             JOIN users u ON u.id = mr.student_id
             ORDER BY mr.request_date DESC",
        )?;
        let requests = stmt
            .query_map([], |row| {
                Ok(MentorRequestDetails {
                    id: row.get(0)?,
                    student_id: row.get(1)?,
                    subject: row.get(2)?,
                    issue: row.get(3)?,
                    preferred_time: row.get(4)?,
                    request_date: row.get(5)?,
                    full_name: row.get(6)?,
                    phone: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(requests)
    }

    fn add_support_message(&self, message: &NewSupportMessage) -> Result<i64, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        conn.execute(
            "INSERT INTO support_messages (name, phone, message) VALUES (?1, ?2, ?3)",
            params![message.name, message.phone, message.message],
        )
        .map_err(|e| DeduciaError::Sql(format!("Unable to insert support message: {e}")))?;
        Ok(conn.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::sqlite::tests::test_database_manager;
    use crate::repository::user_repository::UserRepository;
    use crate::types::Role;
    use chrono::TimeZone;

    #[test]
    fn mentor_requests_are_listed_newest_first() -> Result<(), DeduciaError> {
        let db_manager = test_database_manager()?;
        let user_repo = db_manager.create_user_repository();
        let support_repo = db_manager.create_support_repository();

        let student = user_repo
            .create_user("9990001", "Asha", Role::Student)?
            .unwrap();

        let earlier = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 3, 2, 18, 30, 0).unwrap();

        support_repo.add_mentor_request(
            &NewMentorRequest {
                student_id: student.id,
                subject: "Maths".to_string(),
                issue: "Stuck on factorisation".to_string(),
                preferred_time: "Evenings".to_string(),
            },
            earlier,
        )?;
        support_repo.add_mentor_request(
            &NewMentorRequest {
                student_id: student.id,
                subject: "Physics".to_string(),
                issue: "Units of momentum".to_string(),
                preferred_time: "Weekends".to_string(),
            },
            later,
        )?;

        let requests = support_repo.list_mentor_requests()?;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].subject, "Physics");
        assert_eq!(requests[0].request_date, later);
        assert_eq!(requests[1].subject, "Maths");

        // Identity comes along via the join.
        assert_eq!(requests[0].full_name, "Asha");
        assert_eq!(requests[0].phone, "9990001");
        Ok(())
    }

    #[test]
    fn support_messages_get_sequential_ticket_ids() -> Result<(), DeduciaError> {
        let db_manager = test_database_manager()?;
        let support_repo = db_manager.create_support_repository();

        let first = support_repo.add_support_message(&NewSupportMessage {
            name: "Asha".to_string(),
            phone: "9990001".to_string(),
            message: "The video for lesson 3 does not load".to_string(),
        })?;
        let second = support_repo.add_support_message(&NewSupportMessage {
            name: "Ravi".to_string(),
            phone: "5551234".to_string(),
            message: "Please add a Hindi track".to_string(),
        })?;

        assert!(first > 0);
        assert_eq!(second, first + 1);
        Ok(())
    }
}
