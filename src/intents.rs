//! User actions expressed as data. The portal never writes anything itself:
//! every action becomes a validated [`Intent`] handed to an [`IntentSink`],
//! which decides what executing it means.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::IntentError;
use crate::models::{ApprovalStatus, ContentType, Course, Dataset};
use crate::views::cross_reference_lookup;

/// Longest programme the add-programme form accepts, in years.
pub const MAX_PROGRAMME_DURATION: u32 = 6;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome an admin can give a submission. `Pending` is not a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewVerdict {
    Approved,
    Rejected,
    NeedsRevision,
}

impl ReviewVerdict {
    pub const ALL: [ReviewVerdict; 3] = [
        ReviewVerdict::Approved,
        ReviewVerdict::Rejected,
        ReviewVerdict::NeedsRevision,
    ];

    pub fn status(self) -> ApprovalStatus {
        match self {
            ReviewVerdict::Approved => ApprovalStatus::Approved,
            ReviewVerdict::Rejected => ApprovalStatus::Rejected,
            ReviewVerdict::NeedsRevision => ApprovalStatus::NeedsRevision,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Intent {
    AssignFaculty {
        course_id: String,
        faculty_id: String,
    },
    RemoveFaculty {
        course_id: String,
    },
    BulkAssign {
        faculty_id: String,
        course_ids: Vec<String>,
    },
    ReviewContent {
        content_id: String,
        status: ReviewVerdict,
        comments: String,
        reviewed_by: String,
        reviewed_at: String,
    },
    SubmitContent {
        title: String,
        description: String,
        #[serde(rename = "type")]
        content_type: ContentType,
        course_id: String,
        faculty_id: String,
        submitted_at: String,
        approval_status: ApprovalStatus,
    },
    AddProgramme {
        name: String,
        department: String,
        duration: u32,
    },
}

fn require(value: &str, field: &'static str) -> Result<String, IntentError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(IntentError::MissingField(field));
    }
    Ok(value.to_string())
}

fn find_course<'a>(data: &'a Dataset, course_id: &str) -> Result<&'a Course, IntentError> {
    cross_reference_lookup(&data.courses, |c| c.id.as_str(), course_id).ok_or_else(|| {
        IntentError::UnknownReference {
            kind: "course",
            id: course_id.to_string(),
        }
    })
}

fn check_faculty(data: &Dataset, faculty_id: &str) -> Result<(), IntentError> {
    match cross_reference_lookup(&data.faculties, |f| f.id.as_str(), faculty_id) {
        Some(_) => Ok(()),
        None => Err(IntentError::UnknownReference {
            kind: "faculty",
            id: faculty_id.to_string(),
        }),
    }
}

impl Intent {
    pub fn assign_faculty(
        data: &Dataset,
        course_id: &str,
        faculty_id: &str,
    ) -> Result<Self, IntentError> {
        let faculty_id = require(faculty_id, "Faculty")?;
        let course = find_course(data, course_id)?;
        check_faculty(data, &faculty_id)?;
        Ok(Intent::AssignFaculty {
            course_id: course.id.clone(),
            faculty_id,
        })
    }

    pub fn remove_faculty(data: &Dataset, course_id: &str) -> Result<Self, IntentError> {
        let course = find_course(data, course_id)?;
        if !course.is_assigned() {
            return Err(IntentError::Invalid(format!("{} has no faculty assigned.", course.code)));
        }
        Ok(Intent::RemoveFaculty {
            course_id: course.id.clone(),
        })
    }

    pub fn bulk_assign(
        data: &Dataset,
        faculty_id: &str,
        course_ids: &[String],
    ) -> Result<Self, IntentError> {
        let faculty_id = require(faculty_id, "Faculty")?;
        check_faculty(data, &faculty_id)?;
        if course_ids.is_empty() {
            return Err(IntentError::MissingField("Course selection"));
        }
        let course_ids = course_ids
            .iter()
            .map(|id| find_course(data, id).map(|c| c.id.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Intent::BulkAssign { faculty_id, course_ids })
    }

    pub fn review_content(
        data: &Dataset,
        content_id: &str,
        verdict: ReviewVerdict,
        comments: &str,
        reviewed_by: &str,
        today: NaiveDate,
    ) -> Result<Self, IntentError> {
        let content = cross_reference_lookup(&data.academic_content, |c| c.id.as_str(), content_id)
            .ok_or_else(|| IntentError::UnknownReference {
                kind: "content",
                id: content_id.to_string(),
            })?;
        Ok(Intent::ReviewContent {
            content_id: content.id.clone(),
            status: verdict,
            comments: comments.trim().to_string(),
            reviewed_by: require(reviewed_by, "Reviewer")?,
            reviewed_at: today.format(DATE_FORMAT).to_string(),
        })
    }

    /// New submissions always enter the queue as pending.
    pub fn submit_content(
        data: &Dataset,
        faculty_id: &str,
        title: &str,
        description: &str,
        content_type: ContentType,
        course_id: &str,
        today: NaiveDate,
    ) -> Result<Self, IntentError> {
        let title = require(title, "Title")?;
        let course_id = require(course_id, "Course")?;
        let course = find_course(data, &course_id)?;
        if course.faculty_id.as_deref() != Some(faculty_id) {
            return Err(IntentError::Invalid(format!("You do not teach {}.", course.code)));
        }
        Ok(Intent::SubmitContent {
            title,
            description: description.trim().to_string(),
            content_type,
            course_id,
            faculty_id: faculty_id.to_string(),
            submitted_at: today.format(DATE_FORMAT).to_string(),
            approval_status: ApprovalStatus::Pending,
        })
    }

    pub fn add_programme(name: &str, department: &str, duration: u32) -> Result<Self, IntentError> {
        let name = require(name, "Programme name")?;
        let department = require(department, "Department")?;
        if !(1..=MAX_PROGRAMME_DURATION).contains(&duration) {
            return Err(IntentError::Invalid(format!(
                "Duration must be between 1 and {MAX_PROGRAMME_DURATION} years."
            )));
        }
        Ok(Intent::AddProgramme {
            name,
            department,
            duration,
        })
    }

    /// One-line description for the status bar.
    pub fn summary(&self) -> String {
        match self {
            Intent::AssignFaculty { course_id, faculty_id } => {
                format!("Assign faculty {faculty_id} to course {course_id}")
            }
            Intent::RemoveFaculty { course_id } => {
                format!("Remove faculty from course {course_id}")
            }
            Intent::BulkAssign { faculty_id, course_ids } => {
                format!("Assign {} course(s) to faculty {faculty_id}", course_ids.len())
            }
            Intent::ReviewContent { content_id, status, .. } => {
                format!("Review content {content_id} as {}", status.status())
            }
            Intent::SubmitContent { title, .. } => format!("Submit \"{title}\" for review"),
            Intent::AddProgramme { name, .. } => format!("Add programme {name}"),
        }
    }

    /// Apply an assignment change to a working copy of the courses. Returns
    /// how many courses changed; intents that do not touch assignments
    /// change nothing.
    pub fn apply_assignment(&self, courses: &mut [Course]) -> usize {
        let mut changed = 0;
        let mut set = |course_id: &str, faculty_id: Option<&str>| {
            if let Some(course) = courses.iter_mut().find(|c| c.id == course_id) {
                if course.faculty_id.as_deref() != faculty_id {
                    course.faculty_id = faculty_id.map(str::to_string);
                    changed += 1;
                }
            }
        };
        match self {
            Intent::AssignFaculty { course_id, faculty_id } => set(course_id, Some(faculty_id)),
            Intent::RemoveFaculty { course_id } => set(course_id, None),
            Intent::BulkAssign { faculty_id, course_ids } => {
                for course_id in course_ids {
                    set(course_id, Some(faculty_id));
                }
            }
            _ => {}
        }
        changed
    }
}

/// Whoever executes intents on behalf of the portal.
pub trait IntentSink {
    fn dispatch(&mut self, intent: Intent) -> Result<()>;
}

/// Sink that records every intent and writes it to the log as JSON.
#[derive(Debug, Default)]
pub struct IntentLog {
    history: Vec<Intent>,
}

impl IntentLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Intent] {
        &self.history
    }
}

impl IntentSink for IntentLog {
    fn dispatch(&mut self, intent: Intent) -> Result<()> {
        let body = serde_json::to_string(&intent).context("failed to encode intent")?;
        log::info!("intent dispatched: {body}");
        self.history.push(intent);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_dataset;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn assign_requires_known_faculty() {
        let data = builtin_dataset();
        assert_eq!(
            Intent::assign_faculty(&data, "8", " "),
            Err(IntentError::MissingField("Faculty"))
        );
        assert_eq!(
            Intent::assign_faculty(&data, "8", "9"),
            Err(IntentError::UnknownReference {
                kind: "faculty",
                id: "9".into()
            })
        );
        assert!(Intent::assign_faculty(&data, "8", "1").is_ok());
    }

    #[test]
    fn remove_needs_an_assigned_course() {
        let data = builtin_dataset();
        assert!(matches!(Intent::remove_faculty(&data, "8"), Err(IntentError::Invalid(_))));
        assert_eq!(
            Intent::remove_faculty(&data, "1"),
            Ok(Intent::RemoveFaculty { course_id: "1".into() })
        );
    }

    #[test]
    fn assignment_changes_apply_to_working_copy() {
        let mut data = builtin_dataset();
        let bulk = Intent::bulk_assign(&data, "3", &["8".to_string(), "5".to_string()]).unwrap();
        assert_eq!(bulk.apply_assignment(&mut data.courses), 1);
        assert_eq!(data.courses[7].faculty_id.as_deref(), Some("3"));

        let remove = Intent::remove_faculty(&data, "8").unwrap();
        assert_eq!(remove.apply_assignment(&mut data.courses), 1);
        assert!(!data.courses[7].is_assigned());

        let programme = Intent::add_programme("Physics", "Science", 3).unwrap();
        assert_eq!(programme.apply_assignment(&mut data.courses), 0);
    }

    #[test]
    fn submission_is_pending_and_dated() {
        let data = builtin_dataset();
        let intent =
            Intent::submit_content(&data, "1", "Week 3 notes", "", ContentType::Notes, "2", day())
                .unwrap();
        match intent {
            Intent::SubmitContent {
                submitted_at,
                approval_status,
                ..
            } => {
                assert_eq!(submitted_at, "2024-03-01");
                assert_eq!(approval_status, ApprovalStatus::Pending);
            }
            other => panic!("unexpected intent {other:?}"),
        }
        assert!(matches!(
            Intent::submit_content(&data, "1", "Notes", "", ContentType::Notes, "4", day()),
            Err(IntentError::Invalid(_))
        ));
    }

    #[test]
    fn log_sink_keeps_history() {
        let data = builtin_dataset();
        let mut sink = IntentLog::new();
        let review = Intent::review_content(
            &data,
            "2",
            ReviewVerdict::NeedsRevision,
            " add diagrams ",
            "admin1",
            day(),
        )
        .unwrap();
        sink.dispatch(review).unwrap();
        assert_eq!(sink.history().len(), 1);
        assert_eq!(sink.history()[0].summary(), "Review content 2 as Needs Revision");
    }
}
