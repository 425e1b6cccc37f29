use crate::error::DeduciaError;
use crate::repository::assessment_repository::AssessmentRepository;
use crate::repository::SharedSqliteConnection;
use crate::types::{NewQuestion, NewTest, Question, Test};
use rusqlite::params;

pub struct SqliteAssessmentRepository {
    connection: SharedSqliteConnection,
}

/// SQL statement to create the `tests` table.
const CREATE_TESTS_TABLE_SQL: &str = r"
CREATE TABLE IF NOT EXISTS tests (
    id integer primary key autoincrement not null,
    title varchar(512) not null,
    duration_minutes integer not null,
    teacher_id integer not null
);
";

/// SQL statement to create the `questions` table. `test_id` is a weak
/// reference: rows are accepted even for tests this backend has never seen.
const CREATE_QUESTIONS_TABLE_SQL: &str = r"
CREATE TABLE IF NOT EXISTS questions (
    id integer primary key autoincrement not null,
    test_id integer not null,
    question_text varchar(2048) not null,
    option_a varchar(512) not null,
    option_b varchar(512) not null,
    option_c varchar(512) not null,
    option_d varchar(512) not null,
    correct_option varchar(8) not null
);
";

/// Creates the `tests` table in the database.
pub(crate) fn create_tests_table(connection: &SharedSqliteConnection) -> Result<(), DeduciaError> {
    let conn = connection.lock().map_err(|_| DeduciaError::LockPoisoned)?;
    conn.execute(CREATE_TESTS_TABLE_SQL, [])
        .map_err(|e| DeduciaError::DatabaseError(e.to_string()))?;
    Ok(())
}

/// Creates the `questions` table in the database.
pub(crate) fn create_questions_table(
    connection: &SharedSqliteConnection,
) -> Result<(), DeduciaError> {
    let conn = connection.lock().map_err(|_| DeduciaError::LockPoisoned)?;
    conn.execute(CREATE_QUESTIONS_TABLE_SQL, [])
        .map_err(|e| DeduciaError::DatabaseError(e.to_string()))?;
    Ok(())
}

impl SqliteAssessmentRepository {
    pub(crate) fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

impl AssessmentRepository for SqliteAssessmentRepository {
    fn add_test(&self, test: &NewTest) -> Result<i64, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        conn.execute(
            "INSERT INTO tests (title, duration_minutes, teacher_id) VALUES (?1, ?2, ?3)",
            params![test.title, test.duration_minutes, test.teacher_id],
        )
        .map_err(|e| DeduciaError::Sql(format!("Unable to insert test: {e}")))?;
        Ok(conn.last_insert_rowid())
    }

    fn find_all_tests(&self) -> Result<Vec<Test>, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        let mut stmt =
            conn.prepare("SELECT id, title, duration_minutes, teacher_id FROM tests")?;
        let tests = stmt
            .query_map([], |row| {
                Ok(Test {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    duration_minutes: row.get(2)?,
                    teacher_id: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tests)
    }

    fn add_question(&self, question: &NewQuestion) -> Result<(), DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        conn.execute(
            "INSERT INTO questions
                (test_id, question_text, option_a, option_b, option_c, option_d, correct_option)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                question.test_id,
                question.question_text,
                question.option_a,
                question.option_b,
                question.option_c,
                question.option_d,
                question.correct_option
            ],
        )
        .map_err(|e| DeduciaError::Sql(format!("Unable to insert question: {e}")))?;
        Ok(())
    }

    fn questions_for_test(&self, test_id: i64) -> Result<Vec<Question>, DeduciaError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeduciaError::LockPoisoned)?;
        let mut stmt = conn.prepare(
            "SELECT id, test_id, question_text, option_a, option_b, option_c, option_d, correct_option
             FROM questions WHERE test_id = ?1",
        )?;
        let questions = stmt
            .query_map(params![test_id], |row| {
                Ok(Question {
                    id: row.get(0)?,
                    test_id: row.get(1)?,
                    question_text: row.get(2)?,
                    option_a: row.get(3)?,
                    option_b: row.get(4)?,
                    option_c: row.get(5)?,
                    option_d: row.get(6)?,
                    correct_option: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::sqlite::tests::test_database_manager;

    #[test]
    fn test_and_questions_round_trip() -> Result<(), DeduciaError> {
        let db_manager = test_database_manager()?;
        let assessment_repo = db_manager.create_assessment_repository();

        let test_id = assessment_repo.add_test(&NewTest {
            title: "Algebra I".to_string(),
            duration_minutes: 45,
            teacher_id: 3,
        })?;

        assessment_repo.add_question(&NewQuestion {
            test_id,
            question_text: "2 + 2 = ?".to_string(),
            option_a: "3".to_string(),
            option_b: "4".to_string(),
            option_c: "5".to_string(),
            option_d: "22".to_string(),
            correct_option: "B".to_string(),
        })?;

        let tests = assessment_repo.find_all_tests()?;
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].duration_minutes, 45);

        let questions = assessment_repo.questions_for_test(test_id)?;
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_option, "B");
        Ok(())
    }

    #[test]
    fn questions_are_scoped_to_their_test() -> Result<(), DeduciaError> {
        let db_manager = test_database_manager()?;
        let assessment_repo = db_manager.create_assessment_repository();

        let first = assessment_repo.add_test(&NewTest {
            title: "Geometry".to_string(),
            duration_minutes: 30,
            teacher_id: 1,
        })?;
        let second = assessment_repo.add_test(&NewTest {
            title: "Trigonometry".to_string(),
            duration_minutes: 60,
            teacher_id: 1,
        })?;

        for (test_id, text) in [(first, "What is a chord?"), (second, "sin(0) = ?")] {
            assessment_repo.add_question(&NewQuestion {
                test_id,
                question_text: text.to_string(),
                option_a: "a".to_string(),
                option_b: "b".to_string(),
                option_c: "c".to_string(),
                option_d: "d".to_string(),
                correct_option: "A".to_string(),
            })?;
        }

        let questions = assessment_repo.questions_for_test(second)?;
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question_text, "sin(0) = ?");
        Ok(())
    }
}
