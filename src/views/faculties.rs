//! Teaching assignments and workload, seen from either side: per programme
//! (which course has which teacher) or per faculty member.

use std::fmt;

use crate::models::{Course, Faculty, Programme};

use super::programmes::courses_for_programme;
use super::query::{aggregate_sum, cross_reference_lookup, distinct_values, filter_by_field, Filter};

pub const UNASSIGNED: &str = "Unassigned";

/// Who teaches a course, resolved from its `faculty_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacultyLabel<'a> {
    Assigned(&'a Faculty),
    /// No faculty id, or an id that matches nobody.
    Unassigned,
}

impl FacultyLabel<'_> {
    pub fn name(&self) -> &str {
        match self {
            FacultyLabel::Assigned(faculty) => &faculty.name,
            FacultyLabel::Unassigned => UNASSIGNED,
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, FacultyLabel::Assigned(_))
    }
}

impl fmt::Display for FacultyLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn faculty_for_course<'a>(faculties: &'a [Faculty], course: &Course) -> FacultyLabel<'a> {
    course
        .faculty_id
        .as_deref()
        .and_then(|id| cross_reference_lookup(faculties, |f| f.id.as_str(), id))
        .map_or(FacultyLabel::Unassigned, FacultyLabel::Assigned)
}

/// A course of a programme together with whoever teaches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<'a> {
    pub course: &'a Course,
    pub faculty: FacultyLabel<'a>,
}

pub fn assignments_for_programme<'a>(
    courses: &'a [Course],
    faculties: &'a [Faculty],
    programme_name: &str,
) -> Vec<Assignment<'a>> {
    courses_for_programme(courses, programme_name)
        .into_iter()
        .map(|course| Assignment {
            course,
            faculty: faculty_for_course(faculties, course),
        })
        .collect()
}

pub fn courses_for_faculty<'a>(courses: &'a [Course], faculty_id: &str) -> Vec<&'a Course> {
    filter_by_field(courses, |c| c.faculty_id.as_deref(), &Filter::Only(Some(faculty_id)))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacultyStats {
    pub total_courses: usize,
    pub total_credits: u32,
    pub programmes: usize,
}

pub fn faculty_stats(courses: &[Course], faculty_id: &str) -> FacultyStats {
    let teaching = courses_for_faculty(courses, faculty_id);
    FacultyStats {
        total_courses: teaching.len(),
        total_credits: aggregate_sum(teaching.iter().copied(), |c| c.credits),
        programmes: distinct_values(teaching.iter().copied(), |c| c.programme.as_str()).len(),
    }
}

/// Courses offered to a faculty member in the bulk-assign dialog: unassigned
/// ones, ones already theirs, and any course of a programme in their own
/// department.
pub fn courses_available_for_faculty<'a>(
    courses: &'a [Course],
    programmes: &[Programme],
    faculty: &Faculty,
) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|course| match course.faculty_id.as_deref() {
            None => true,
            Some(id) if id == faculty.id => true,
            Some(_) => programmes
                .iter()
                .find(|p| p.name == course.programme)
                .is_some_and(|p| p.department == faculty.department),
        })
        .collect()
}
