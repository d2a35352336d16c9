//! Consistency checks over a loaded dataset. The views tolerate every one of
//! these problems, so findings are reported as warnings and never block
//! startup.

use std::collections::HashSet;
use std::fmt;

use crate::models::{ApprovalStatus, Dataset};
use crate::views::scheduling_conflicts;

/// One inconsistency found in the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    UnknownCourseFaculty { course_id: String, faculty_id: String },
    UnknownSlotFaculty { slot_id: String, faculty_id: String },
    UnknownCourseProgramme { course_id: String, programme: String },
    SemesterOutOfRange { course_id: String, semester: u32, max: u32 },
    UnknownStudentProgramme { student_id: String, programme: String },
    TimetableCollision { slot_ids: Vec<String> },
    PublishedWithoutApproval { content_id: String, status: ApprovalStatus },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::UnknownCourseFaculty { course_id, faculty_id } => {
                write!(f, "course {course_id} is assigned to unknown faculty {faculty_id}")
            }
            Finding::UnknownSlotFaculty { slot_id, faculty_id } => {
                write!(f, "time slot {slot_id} references unknown faculty {faculty_id}")
            }
            Finding::UnknownCourseProgramme { course_id, programme } => {
                write!(f, "course {course_id} belongs to unknown programme \"{programme}\"")
            }
            Finding::SemesterOutOfRange { course_id, semester, max } => {
                write!(f, "course {course_id} is in semester {semester}, programme ends at {max}")
            }
            Finding::UnknownStudentProgramme { student_id, programme } => {
                write!(f, "student {student_id} is enrolled in unknown programme \"{programme}\"")
            }
            Finding::TimetableCollision { slot_ids } => {
                write!(f, "time slots {} share one timetable cell", slot_ids.join(", "))
            }
            Finding::PublishedWithoutApproval { content_id, status } => {
                write!(f, "content {content_id} is published while {status}")
            }
        }
    }
}

pub fn audit(data: &Dataset) -> Vec<Finding> {
    let faculty_ids: HashSet<&str> = data.faculties.iter().map(|f| f.id.as_str()).collect();
    let mut findings = Vec::new();

    for course in &data.courses {
        if let Some(faculty_id) = course.faculty_id.as_deref() {
            if !faculty_ids.contains(faculty_id) {
                findings.push(Finding::UnknownCourseFaculty {
                    course_id: course.id.clone(),
                    faculty_id: faculty_id.to_string(),
                });
            }
        }
        match data.programmes.iter().find(|p| p.name == course.programme) {
            None => findings.push(Finding::UnknownCourseProgramme {
                course_id: course.id.clone(),
                programme: course.programme.clone(),
            }),
            Some(programme)
                if course.semester == 0 || course.semester > programme.max_semester() =>
            {
                findings.push(Finding::SemesterOutOfRange {
                    course_id: course.id.clone(),
                    semester: course.semester,
                    max: programme.max_semester(),
                })
            }
            Some(_) => {}
        }
    }

    for slot in &data.time_slots {
        if !faculty_ids.contains(slot.faculty_id.as_str()) {
            findings.push(Finding::UnknownSlotFaculty {
                slot_id: slot.id.clone(),
                faculty_id: slot.faculty_id.clone(),
            });
        }
    }

    for student in &data.students {
        if !data.programmes.iter().any(|p| p.name == student.programme) {
            findings.push(Finding::UnknownStudentProgramme {
                student_id: student.id.clone(),
                programme: student.programme.clone(),
            });
        }
    }

    findings.extend(scheduling_conflicts(&data.time_slots).into_iter().map(|group| {
        Finding::TimetableCollision {
            slot_ids: group.iter().map(|s| s.id.clone()).collect(),
        }
    }));

    findings.extend(
        data.academic_content
            .iter()
            .filter(|c| c.is_published && c.approval_status != ApprovalStatus::Approved)
            .map(|c| Finding::PublishedWithoutApproval {
                content_id: c.id.clone(),
                status: c.approval_status,
            }),
    );

    findings
}
