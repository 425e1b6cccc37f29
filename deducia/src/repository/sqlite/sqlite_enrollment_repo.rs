use crate::error::DeduciaError;
use crate::repository::enrollment_repository::EnrollmentRepository;
use crate::repository::sqlite::sqlite_course_repo::course_from_row;
use crate::repository::SharedSqliteConnection;
use crate::types::{Course, TestResult};
use rusqlite::{params, OptionalExtension};

pub struct SqliteEnrollmentRepository {
    connection: SharedSqliteConnection,
}

/// SQL statement to create the `enrollments` table.
///
/// The unique pair constraint is the correctness boundary for concurrent
/// enroll requests; the handler-level existence check is only a fast path.
const CREATE_ENROLLMENTS_TABLE_SQL: &str = r"
CREATE TABLE IF NOT EXISTS enrollments (
    id integer primary key autoincrement not null,
    student_id integer not null,
    course_id integer not null,
    UNIQUE (student_id, course_id)
);
";

/// SQL statement to create the `results` table. Rows are written by the
/// external grading pipeline; this backend only reads them.
const CREATE_RESULTS_TABLE_SQL: &str = r"
CREATE TABLE IF NOT EXISTS results (
    id integer primary key autoincrement not null,
    student_id integer not null,
    test_id integer not null,
    score integer not null,
    total_marks integer not null
);
";

/// Creates the `enrollments` table in the database.
pub(crate) fn create_enrollments_table(
    connection: &SharedSqliteConnection,
) -> Result<(), DeduciaError> {
    let conn = connection.lock().map_err(|_| DeduciaError::LockPoisoned)?;
    conn.execute(CREATE_ENROLLMENTS_TABLE_SQL, [])
        .map_err(|e| DeduciaError::DatabaseError(e.to_string()))?;
    Ok(())
}

/// Creates the `results` table in the database.
pub(crate) fn create_results_table(connection: &SharedSqliteConnection) -> Result<(), DeduciaError> {
    let conn = connection.lock().map_err(|_| DeduciaError::LockPoisoned)?;
    conn.execute(CREATE_RESULTS_TABLE_SQL, [])
        .map_err(|e| DeduciaError::DatabaseError(e.to_string()))?;
    Ok(())
}

impl SqliteEnrollmentRepository {
    pub(crate) fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

impl EnrollmentRepository for SqliteEnrollmentRepository {
    fn exists(&self, student_id: i64, course_id: i64) -> Result<bool, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM enrollments WHERE student_id = ?1 AND course_id = ?2",
                params![student_id, course_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn insert(&self, student_id: i64, course_id: i64) -> Result<bool, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO enrollments (student_id, course_id) VALUES (?1, ?2)",
                params![student_id, course_id],
            )
            .map_err(|e| {
                DeduciaError::Sql(format!(
                    "Unable to enroll student {student_id} in course {course_id}: {e}"
                ))
            })?;
        Ok(inserted == 1)
    }

    fn courses_for_student(&self, student_id: i64) -> Result<Vec<Course>, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        let mut stmt = conn.prepare(
            "SELECT c.id, c.title, c.description, c.thumbnail_url, c.video_url, c.notes_url, c.teacher_id
             FROM courses c
             JOIN enrollments e ON e.course_id = c.id
             WHERE e.student_id = ?1",
        )?;
        let courses = stmt
            .query_map(params![student_id], |row| course_from_row(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(courses)
    }

    fn results_for_student(&self, student_id: i64) -> Result<Vec<TestResult>, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        let mut stmt = conn.prepare(
            "SELECT t.title, r.score, r.total_marks, r.test_id
             FROM results r
             JOIN tests t ON t.id = r.test_id
             WHERE r.student_id = ?1",
        )?;
        let results = stmt
            .query_map(params![student_id], |row| {
                Ok(TestResult {
                    title: row.get(0)?,
                    score: row.get(1)?,
                    total_marks: row.get(2)?,
                    test_id: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(results)
    }
}
