//! Landing-page summaries for each role.

use crate::models::{AcademicContent, ApprovalStatus, Course, Dataset, Faculty, Programme, Student};

use super::content::published_count;
use super::faculties::{courses_for_faculty, faculty_for_course, FacultyLabel};
use super::programmes::courses_for_programme;
use super::query::{
    aggregate_sum, compute_approval_counts, compute_assignment_rate, cross_reference_lookup,
    filter_by_field, ApprovalCounts, Filter,
};
use super::semester::{student_semester, SemesterPolicy};
use super::timetable::{active_days, student_slots};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminOverview {
    pub programmes: usize,
    pub faculties: usize,
    pub students: usize,
    pub courses: usize,
    pub total_credits: u32,
    pub assigned_courses: usize,
    pub unassigned_courses: usize,
    pub assignment_rate: u32,
    pub published_content: usize,
    pub pending_reviews: usize,
}

pub fn admin_overview(data: &Dataset) -> AdminOverview {
    let assigned = data.courses.iter().filter(|c| c.is_assigned()).count();
    AdminOverview {
        programmes: data.programmes.len(),
        faculties: data.faculties.len(),
        students: data.students.len(),
        courses: data.courses.len(),
        total_credits: aggregate_sum(&data.courses, |c| c.credits),
        assigned_courses: assigned,
        unassigned_courses: data.courses.len() - assigned,
        assignment_rate: compute_assignment_rate(&data.courses),
        published_content: published_count(&data.academic_content),
        pending_reviews: filter_by_field(
            &data.academic_content,
            |c| c.approval_status,
            &Filter::Only(ApprovalStatus::Pending),
        )
        .len(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacultyOverview<'a> {
    pub faculty: &'a Faculty,
    pub courses: Vec<&'a Course>,
    pub total_credits: u32,
    pub content: ApprovalCounts,
    pub published_content: usize,
}

/// `None` when the faculty id matches nobody.
pub fn faculty_overview<'a>(data: &'a Dataset, faculty_id: &str) -> Option<FacultyOverview<'a>> {
    let faculty = cross_reference_lookup(&data.faculties, |f| f.id.as_str(), faculty_id)?;
    let courses = courses_for_faculty(&data.courses, faculty_id);
    let own: Vec<&AcademicContent> = filter_by_field(
        &data.academic_content,
        |c| c.faculty_id.as_str(),
        &Filter::Only(faculty_id),
    );
    Some(FacultyOverview {
        faculty,
        total_credits: aggregate_sum(courses.iter().copied(), |c| c.credits),
        courses,
        content: compute_approval_counts(own.iter().copied()),
        published_content: published_count(own.iter().copied()),
    })
}

/// A course on the student dashboard with its teacher resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentCourse<'a> {
    pub course: &'a Course,
    pub faculty: FacultyLabel<'a>,
}

impl StudentCourse<'_> {
    /// Students see "TBA" rather than "Unassigned".
    pub fn teacher(&self) -> &str {
        match self.faculty {
            FacultyLabel::Assigned(faculty) => &faculty.name,
            FacultyLabel::Unassigned => "TBA",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentOverview<'a> {
    pub student: &'a Student,
    pub programme: Option<&'a Programme>,
    pub courses: Vec<StudentCourse<'a>>,
    pub total_credits: u32,
    pub current_semester: u32,
    pub active_days: usize,
}

/// `None` when the student id matches nobody.
pub fn student_overview<'a>(
    data: &'a Dataset,
    student_id: &str,
    policy: SemesterPolicy,
) -> Option<StudentOverview<'a>> {
    let student = cross_reference_lookup(&data.students, |s| s.id.as_str(), student_id)?;
    let courses = courses_for_programme(&data.courses, &student.programme);
    let slots = student_slots(&data.time_slots, &data.programmes, student);
    Some(StudentOverview {
        student,
        programme: data.programmes.iter().find(|p| p.name == student.programme),
        total_credits: aggregate_sum(courses.iter().copied(), |c| c.credits),
        courses: courses
            .into_iter()
            .map(|course| StudentCourse {
                course,
                faculty: faculty_for_course(&data.faculties, course),
            })
            .collect(),
        current_semester: student_semester(student, policy),
        active_days: active_days(&slots),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_dataset;

    #[test]
    fn admin_numbers() {
        let data = builtin_dataset();
        let overview = admin_overview(&data);
        assert_eq!(overview.programmes, 4);
        assert_eq!(overview.courses, 8);
        assert_eq!(overview.total_credits, 29);
        assert_eq!(overview.assigned_courses, 7);
        assert_eq!(overview.unassigned_courses, 1);
        assert_eq!(overview.assignment_rate, 88);
        assert_eq!(overview.published_content, 1);
        assert_eq!(overview.pending_reviews, 1);
    }

    #[test]
    fn faculty_numbers() {
        let data = builtin_dataset();
        let overview = faculty_overview(&data, "1").unwrap();
        assert_eq!(overview.courses.len(), 3);
        assert_eq!(overview.total_credits, 11);
        assert_eq!(overview.content.total(), 4);
        assert_eq!(overview.content.needs_revision, 1);
        assert_eq!(overview.published_content, 1);
        assert!(faculty_overview(&data, "42").is_none());
    }

    #[test]
    fn student_numbers() {
        let data = builtin_dataset();
        let overview = student_overview(&data, "1", SemesterPolicy::IdParity).unwrap();
        assert_eq!(overview.courses.len(), 4);
        assert_eq!(overview.total_credits, 15);
        assert_eq!(overview.current_semester, 6);
        assert_eq!(overview.active_days, 1);
        let os = overview.courses.iter().find(|c| c.course.code == "CS501").unwrap();
        assert_eq!(os.teacher(), "TBA");
        assert!(student_overview(&data, "missing", SemesterPolicy::IdParity).is_none());
    }
}
