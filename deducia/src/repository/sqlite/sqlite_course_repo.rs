use crate::error::DeduciaError;
use crate::repository::course_repository::CourseRepository;
use crate::repository::SharedSqliteConnection;
use crate::types::{Course, NewCourse};
use rusqlite::{params, Row};

pub struct SqliteCourseRepository {
    connection: SharedSqliteConnection,
}

/// SQL statement to create the `courses` table.
const CREATE_COURSES_TABLE_SQL: &str = r"
CREATE TABLE IF NOT EXISTS courses (
    id integer primary key autoincrement not null,
    title varchar(512) not null,
    description varchar(2048) not null,
    thumbnail_url varchar(1024) not null,
    video_url varchar(1024) not null,
    notes_url varchar(1024),
    teacher_id integer
);
";

const SELECT_COURSE_COLUMNS: &str =
    "SELECT id, title, description, thumbnail_url, video_url, notes_url, teacher_id FROM courses";

/// Creates the `courses` table in the database.
pub(crate) fn create_courses_table(connection: &SharedSqliteConnection) -> Result<(), DeduciaError> {
    let conn = connection.lock().map_err(|_| DeduciaError::LockPoisoned)?;
    conn.execute(CREATE_COURSES_TABLE_SQL, [])
        .map_err(|e| DeduciaError::DatabaseError(e.to_string()))?;
    Ok(())
}

/// Maps a `courses` row (in `SELECT_COURSE_COLUMNS` order) to a `Course`.
pub(crate) fn course_from_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        thumbnail_url: row.get(3)?,
        video_url: row.get(4)?,
        notes_url: row.get(5)?,
        teacher_id: row.get(6)?,
    })
}

impl SqliteCourseRepository {
    pub(crate) fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

impl CourseRepository for SqliteCourseRepository {
    fn add_course(&self, course: &NewCourse) -> Result<i64, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        conn.execute(
            "INSERT INTO courses (title, description, thumbnail_url, video_url, notes_url, teacher_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                course.title,
                course.description,
                course.thumbnail_url,
                course.video_url,
                course.notes_url,
                course.teacher_id
            ],
        )
        .map_err(|e| DeduciaError::Sql(format!("Unable to insert course: {e}")))?;
        Ok(conn.last_insert_rowid())
    }

    fn find_all(&self) -> Result<Vec<Course>, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        let mut stmt = conn.prepare(SELECT_COURSE_COLUMNS)?;
        let courses = stmt
            .query_map([], |row| course_from_row(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(courses)
    }

    fn find_by_teacher(&self, teacher_id: i64) -> Result<Vec<Course>, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        let sql = format!("{SELECT_COURSE_COLUMNS} WHERE teacher_id = ?1");
        let mut stmt = conn.prepare(&sql)?;
        let courses = stmt
            .query_map(params![teacher_id], |row| course_from_row(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(courses)
    }

    fn delete_by_id(&self, id: i64) -> Result<(), DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        // Zero affected rows is fine: deleting an absent id stays idempotent.
        conn.execute("DELETE FROM courses WHERE id = ?1", params![id])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::sqlite::tests::test_database_manager;

    fn sample_course(title: &str, teacher_id: Option<i64>) -> NewCourse {
        NewCourse {
            title: title.to_string(),
            description: "desc".to_string(),
            thumbnail_url: "https://cdn.example.com/thumb.png".to_string(),
            video_url: "https://cdn.example.com/video.mp4".to_string(),
            notes_url: None,
            teacher_id,
        }
    }

    #[test]
    fn filter_by_teacher_returns_only_their_courses() -> Result<(), DeduciaError> {
        let db_manager = test_database_manager()?;
        let course_repo = db_manager.create_course_repository();

        course_repo.add_course(&sample_course("Algebra I", Some(7)))?;
        course_repo.add_course(&sample_course("Botany", Some(8)))?;
        course_repo.add_course(&sample_course("Chemistry", None))?;

        let all = course_repo.find_all()?;
        assert_eq!(all.len(), 3);

        let mine = course_repo.find_by_teacher(7)?;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "Algebra I");
        Ok(())
    }

    #[test]
    fn optional_fields_round_trip_as_null() -> Result<(), DeduciaError> {
        let db_manager = test_database_manager()?;
        let course_repo = db_manager.create_course_repository();

        let id = course_repo.add_course(&sample_course("History", None))?;
        let stored = course_repo
            .find_all()?
            .into_iter()
            .find(|c| c.id == id)
            .unwrap();
        assert!(stored.notes_url.is_none());
        assert!(stored.teacher_id.is_none());
        Ok(())
    }

    #[test]
    fn deleting_an_absent_course_is_not_an_error() -> Result<(), DeduciaError> {
        let db_manager = test_database_manager()?;
        let course_repo = db_manager.create_course_repository();

        course_repo.delete_by_id(9999)?;

        let id = course_repo.add_course(&sample_course("Physics", Some(3)))?;
        course_repo.delete_by_id(id)?;
        course_repo.delete_by_id(id)?;
        assert!(course_repo.find_all()?.is_empty());
        Ok(())
    }
}
