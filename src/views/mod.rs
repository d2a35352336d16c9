//! Pure projections from the flat dataset to the shapes each page renders.
//!
//! Nothing in here mutates, logs or fails: every function borrows its inputs
//! and answers an unmatched lookup with an empty or neutral value.

mod content;
mod dashboard;
mod faculties;
mod programmes;
mod query;
mod semester;
mod students;
mod timetable;

pub use content::{
    course_name, faculty_content, faculty_name, published_count, review_queue, ContentQuery,
    UNKNOWN_COURSE, UNKNOWN_FACULTY,
};
pub use dashboard::{
    admin_overview, faculty_overview, student_overview, AdminOverview, FacultyOverview,
    StudentCourse, StudentOverview,
};
pub use faculties::{
    assignments_for_programme, courses_available_for_faculty, courses_for_faculty,
    faculty_for_course, faculty_stats, Assignment, FacultyLabel, FacultyStats, UNASSIGNED,
};
pub use programmes::{
    courses_by_semester, courses_for_programme, departments, faculties_for_programme,
    filter_programmes, programme_stats, programme_summary, FacultyLoad, ProgrammeStats,
    ProgrammeSummary,
};
pub use query::{
    aggregate_sum, build_grid, compute_approval_counts, compute_assignment_rate,
    cross_reference_lookup, distinct_values, filter_by_field, group_by, parse_date,
    sort_by_date_descending, ApprovalCounts, Filter, Grid,
};
pub use semester::{
    available_semesters, semester_range, student_semester, year_to_semesters, SemesterPolicy,
};
pub use students::{
    student_stats, students_by_semester, students_by_year, students_for_programme, StudentStats,
};
pub use timetable::{
    active_days, classes_per_week, faculty_slots, schedulable_courses, scheduling_conflicts,
    scoped_slots, slot_details, student_slots, timetable_grid, weekly_stats, SlotDetails,
    TimetableScope, WeeklyStats,
};
