//! Weekly timetable projections. Every role sees the same grid shape
//! (days × time options); only the scoping of the slots differs, so scoping and
//! placement are kept as separate steps.

use crate::models::{Course, Faculty, Programme, Room, Student, TimeSlot, TimeSlotOption, Weekday};

use super::query::{
    build_grid, cross_reference_lookup, distinct_values, filter_by_field, group_by, Filter, Grid,
};

/// The admin timetable selection. Nothing is shown until both a programme and
/// a semester are picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimetableScope<'s> {
    pub programme_id: Option<&'s str>,
    pub semester: Option<u32>,
    pub section: &'s str,
}

impl Default for TimetableScope<'_> {
    fn default() -> Self {
        Self {
            programme_id: None,
            semester: None,
            section: "A",
        }
    }
}

/// Slots of one programme, semester and section. Slots without a section are
/// never part of a sectioned view.
pub fn scoped_slots<'a>(slots: &'a [TimeSlot], scope: &TimetableScope<'_>) -> Vec<&'a TimeSlot> {
    let (Some(programme_id), Some(semester)) = (scope.programme_id, scope.semester) else {
        return Vec::new();
    };
    slots
        .iter()
        .filter(|slot| {
            slot.programme_id == programme_id
                && slot.semester == semester
                && slot.section.as_deref() == Some(scope.section)
        })
        .collect()
}

pub fn faculty_slots<'a>(slots: &'a [TimeSlot], faculty_id: &str) -> Vec<&'a TimeSlot> {
    filter_by_field(slots, |s| s.faculty_id.as_str(), &Filter::Only(faculty_id))
}

/// Slots of the student's programme up to the last semester of their current
/// year. Empty when the student's programme is unknown.
pub fn student_slots<'a>(
    slots: &'a [TimeSlot],
    programmes: &[Programme],
    student: &Student,
) -> Vec<&'a TimeSlot> {
    let Some(programme) = programmes.iter().find(|p| p.name == student.programme) else {
        return Vec::new();
    };
    let last_semester = student.year.saturating_mul(2);
    slots
        .iter()
        .filter(|slot| slot.programme_id == programme.id && slot.semester <= last_semester)
        .collect()
}

/// Place already-scoped slots on the weekly grid, keyed `"{day}-{start}"`.
pub fn timetable_grid<'a>(
    options: &[TimeSlotOption],
    days: &[Weekday],
    slots: &[&'a TimeSlot],
) -> Grid<'a, TimeSlot> {
    build_grid(options, days, slots, |slot, day, option| {
        slot.day == *day && slot.start_time == option.start
    })
}

/// Everything a grid cell shows about a slot. Missing references stay `None`
/// and the renderer prints a fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotDetails<'a> {
    pub course: Option<&'a Course>,
    pub faculty: Option<&'a Faculty>,
    pub room: Option<&'a Room>,
}

pub fn slot_details<'a>(
    slot: &TimeSlot,
    courses: &'a [Course],
    faculties: &'a [Faculty],
    rooms: &'a [Room],
) -> SlotDetails<'a> {
    SlotDetails {
        course: cross_reference_lookup(courses, |c| c.id.as_str(), &slot.course_id),
        faculty: cross_reference_lookup(faculties, |f| f.id.as_str(), &slot.faculty_id),
        room: cross_reference_lookup(rooms, |r| r.name.as_str(), &slot.room),
    }
}

/// Courses that can be scheduled for a programme (by id) and semester.
pub fn schedulable_courses<'a>(
    programmes: &[Programme],
    courses: &'a [Course],
    programme_id: &str,
    semester: u32,
) -> Vec<&'a Course> {
    let Some(programme) = programmes.iter().find(|p| p.id == programme_id) else {
        return Vec::new();
    };
    courses
        .iter()
        .filter(|c| c.programme == programme.name && c.semester == semester)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeeklyStats {
    pub total_classes: usize,
    pub total_hours: f64,
    pub active_days: usize,
    pub courses: usize,
}

pub fn weekly_stats(slots: &[&TimeSlot], course_count: usize, hours_per_class: f64) -> WeeklyStats {
    WeeklyStats {
        total_classes: slots.len(),
        total_hours: slots.len() as f64 * hours_per_class,
        active_days: active_days(slots),
        courses: course_count,
    }
}

pub fn active_days(slots: &[&TimeSlot]) -> usize {
    distinct_values(slots.iter().copied(), |s| s.day).len()
}

pub fn classes_per_week(slots: &[&TimeSlot], course_id: &str) -> usize {
    slots.iter().filter(|s| s.course_id == course_id).count()
}

/// Groups of slots that claim the same cell of the same programme, semester
/// and section timetable. A consistent dataset has none.
pub fn scheduling_conflicts(slots: &[TimeSlot]) -> Vec<Vec<&TimeSlot>> {
    group_by(slots, |s| {
        (
            s.programme_id.as_str(),
            s.semester,
            s.section.as_deref(),
            s.day,
            s.start_time.as_str(),
        )
    })
    .into_values()
    .filter(|group| group.len() > 1)
    .collect()
}
