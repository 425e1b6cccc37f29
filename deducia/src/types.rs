use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access level of a registered account. Signup always creates students;
/// teachers and admins are provisioned out of band.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl ToSql for Role {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Role {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Role::from_str(text).map_err(|e| FromSqlError::Other(e.into()))
    }
}

/// A registered account, keyed by phone number.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct User {
    pub id: i64,
    pub phone: String,
    pub full_name: String,
    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub notes_url: Option<String>,
    pub teacher_id: Option<i64>,
}

/// Payload for creating a course. `notes_url` and `teacher_id` are optional;
/// older dashboard clients never send them.
#[derive(Debug, Serialize, Deserialize, Default, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub notes_url: Option<String>,
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Test {
    pub id: i64,
    pub title: String,
    pub duration_minutes: i64,
    pub teacher_id: i64,
}

#[derive(Debug, Serialize, Deserialize, Default, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct NewTest {
    pub title: String,
    pub duration_minutes: i64,
    pub teacher_id: i64,
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Question {
    pub id: i64,
    pub test_id: i64,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: String,
}

#[derive(Debug, Serialize, Deserialize, Default, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct NewQuestion {
    pub test_id: i64,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: String,
}

/// A graded attempt, projected together with the test it belongs to.
/// Result rows are written by the grading pipeline; this backend only reads them.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct TestResult {
    pub title: String,
    pub score: i64,
    pub total_marks: i64,
    pub test_id: i64,
}

#[derive(Debug, Serialize, Deserialize, Default, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct NewMentorRequest {
    pub student_id: i64,
    pub subject: String,
    pub issue: String,
    pub preferred_time: String,
}

/// A mentor request joined with the identity of the student who filed it,
/// as shown on the teacher dashboard.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct MentorRequestDetails {
    pub id: i64,
    pub student_id: i64,
    pub subject: String,
    pub issue: String,
    pub preferred_time: String,
    pub request_date: DateTime<Utc>,
    pub full_name: String,
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, Default, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct NewSupportMessage {
    pub name: String,
    pub phone: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_text() {
        for role in [Role::Student, Role::Teacher, Role::Admin] {
            assert_eq!(Role::from_str(role.as_str()), Ok(role));
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::from_str("headmaster").is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
    }

    #[test]
    fn new_course_defaults_optional_fields() {
        let course: NewCourse = serde_json::from_str(r#"{"title": "Algebra I"}"#).unwrap();
        assert_eq!(course.title, "Algebra I");
        assert!(course.notes_url.is_none());
        assert!(course.teacher_id.is_none());
        assert_eq!(course.description, "");
    }
}
