//! Programme-level projections: the course catalogue per semester, who teaches
//! in a programme, and the headline numbers shown on each programme card.

use std::collections::HashSet;

use crate::intents::MAX_PROGRAMME_DURATION;
use crate::models::{Course, Faculty, Programme};

use super::query::{
    aggregate_sum, compute_assignment_rate, cross_reference_lookup, filter_by_field, group_by,
    Filter,
};
use super::semester::semester_range;

pub fn courses_for_programme<'a>(courses: &'a [Course], programme_name: &str) -> Vec<&'a Course> {
    filter_by_field(courses, |c| c.programme.as_str(), &Filter::Only(programme_name))
}

/// One faculty member's share of a programme.
#[derive(Debug, Clone, PartialEq)]
pub struct FacultyLoad<'a> {
    pub faculty: &'a Faculty,
    pub courses: Vec<&'a Course>,
    pub total_credits: u32,
}

/// Faculty teaching at least one course of the programme, in order of first
/// appearance. Course assignments pointing at unknown faculty are skipped.
pub fn faculties_for_programme<'a>(
    courses: &'a [Course],
    faculties: &'a [Faculty],
    programme_name: &str,
) -> Vec<FacultyLoad<'a>> {
    let programme_courses = courses_for_programme(courses, programme_name);
    let mut seen = HashSet::new();

    programme_courses
        .iter()
        .filter_map(|course| course.faculty_id.as_deref())
        .filter(|id| seen.insert(*id))
        .filter_map(|id| {
            let faculty = cross_reference_lookup(faculties, |f| f.id.as_str(), id)?;
            let assigned: Vec<&Course> = programme_courses
                .iter()
                .copied()
                .filter(|c| c.faculty_id.as_deref() == Some(id))
                .collect();
            let total_credits = aggregate_sum(assigned.iter().copied(), |c| c.credits);
            Some(FacultyLoad {
                faculty,
                courses: assigned,
                total_credits,
            })
        })
        .collect()
}

/// Courses grouped by semester for every semester the programme spans, empty
/// semesters included, in ascending order.
///
/// A duration beyond what a programme can be created with only lists empty
/// semesters up to the last one a course actually uses.
pub fn courses_by_semester<'a>(
    programme: &Programme,
    courses: &'a [Course],
) -> Vec<(u32, Vec<&'a Course>)> {
    let mut grouped = group_by(courses_for_programme(courses, &programme.name), |c| c.semester);
    let highest_used = grouped.keys().copied().max().unwrap_or(0);
    let last = (*semester_range(programme).end()).min(highest_used.max(MAX_PROGRAMME_DURATION * 2));
    (1..=last)
        .map(|semester| (semester, grouped.remove(&semester).unwrap_or_default()))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgrammeStats {
    pub total_courses: usize,
    pub assigned_courses: usize,
    pub unassigned_courses: usize,
    pub total_credits: u32,
    pub total_faculties: usize,
    pub assignment_rate: u32,
}

pub fn programme_stats(
    courses: &[Course],
    faculties: &[Faculty],
    programme_name: &str,
) -> ProgrammeStats {
    let programme_courses = courses_for_programme(courses, programme_name);
    let assigned = programme_courses.iter().filter(|c| c.is_assigned()).count();
    ProgrammeStats {
        total_courses: programme_courses.len(),
        assigned_courses: assigned,
        unassigned_courses: programme_courses.len() - assigned,
        total_credits: aggregate_sum(programme_courses.iter().copied(), |c| c.credits),
        total_faculties: faculties_for_programme(courses, faculties, programme_name).len(),
        assignment_rate: compute_assignment_rate(programme_courses.iter().copied()),
    }
}

/// Programmes whose name contains `search` (case-insensitive) and whose
/// department passes `department`.
pub fn filter_programmes<'a>(
    programmes: &'a [Programme],
    search: &str,
    department: &Filter<&str>,
) -> Vec<&'a Programme> {
    let needle = search.to_lowercase();
    filter_by_field(programmes, |p| p.department.as_str(), department)
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Distinct departments in first-seen order.
pub fn departments(programmes: &[Programme]) -> Vec<&str> {
    let mut seen = HashSet::new();
    programmes
        .iter()
        .map(|p| p.department.as_str())
        .filter(|d| seen.insert(*d))
        .collect()
}

/// Totals across a filtered set of programmes, as shown above the programme
/// grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgrammeSummary {
    pub programmes: usize,
    pub courses: usize,
    pub faculties: usize,
    pub assigned_courses: usize,
    pub unassigned_courses: usize,
}

pub fn programme_summary(
    programmes: &[&Programme],
    courses: &[Course],
    faculties: &[Faculty],
) -> ProgrammeSummary {
    programmes.iter().fold(
        ProgrammeSummary {
            programmes: programmes.len(),
            ..ProgrammeSummary::default()
        },
        |mut acc, programme| {
            let stats = programme_stats(courses, faculties, &programme.name);
            acc.courses += stats.total_courses;
            acc.faculties += stats.total_faculties;
            acc.assigned_courses += stats.assigned_courses;
            acc.unassigned_courses += stats.unassigned_courses;
            acc
        },
    )
}
