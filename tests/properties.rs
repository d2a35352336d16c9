use std::collections::HashSet;

use proptest::prelude::*;
use university_portal::builtin_dataset;
use university_portal::models::{AcademicContent, ApprovalStatus, Course, Student, TimeSlot};
use university_portal::views::{
    aggregate_sum, compute_approval_counts, compute_assignment_rate, filter_by_field,
    students_by_semester, timetable_grid, year_to_semesters, Filter, SemesterPolicy,
};

fn course_strategy() -> impl Strategy<Value = Course> {
    (1u32..=6, 1u32..=8, proptest::option::of("[1-3]")).prop_map(
        |(credits, semester, faculty_id)| Course {
            id: format!("c{credits}{semester}"),
            name: "Generated".into(),
            code: "GEN100".into(),
            credits,
            semester,
            programme: "Computer Science Engineering".into(),
            faculty_id,
        },
    )
}

fn status_strategy() -> impl Strategy<Value = ApprovalStatus> {
    proptest::sample::select(ApprovalStatus::ALL.to_vec())
}

fn content_strategy() -> impl Strategy<Value = AcademicContent> {
    let template = builtin_dataset().academic_content[0].clone();
    status_strategy().prop_map(move |status| AcademicContent {
        approval_status: status,
        ..template.clone()
    })
}

fn policy_strategy() -> impl Strategy<Value = SemesterPolicy> {
    proptest::sample::select(vec![
        SemesterPolicy::IdParity,
        SemesterPolicy::OddTerm,
        SemesterPolicy::EvenTerm,
    ])
}

/// Slots scattered over the fixture's grid axes, several per cell at times.
fn slots_strategy() -> impl Strategy<Value = Vec<TimeSlot>> {
    let data = builtin_dataset();
    let template = data.time_slots[0].clone();
    let days = data.days_of_week.clone();
    let starts: Vec<String> = data.time_slot_options.iter().map(|o| o.start.clone()).collect();
    proptest::collection::vec(
        (proptest::sample::select(days), proptest::sample::select(starts)),
        0..40,
    )
    .prop_map(move |cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(index, (day, start))| TimeSlot {
                id: index.to_string(),
                day,
                start_time: start,
                ..template.clone()
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn all_filter_keeps_everything(courses in proptest::collection::vec(course_strategy(), 0..30)) {
        let kept = filter_by_field(&courses, |c| c.semester, &Filter::All);
        let expected: Vec<&Course> = courses.iter().collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn credit_sum_matches_loop(courses in proptest::collection::vec(course_strategy(), 0..30)) {
        let mut expected = 0u32;
        for course in &courses {
            expected += course.credits;
        }
        prop_assert_eq!(aggregate_sum(&courses, |c| c.credits), expected);
    }

    #[test]
    fn approval_counts_add_up(items in proptest::collection::vec(content_strategy(), 0..30)) {
        let counts = compute_approval_counts(&items);
        prop_assert_eq!(counts.iter().count(), 4);
        prop_assert_eq!(counts.total(), items.len());
    }

    #[test]
    fn assignment_rate_bounds(courses in proptest::collection::vec(course_strategy(), 0..30)) {
        let rate = compute_assignment_rate(&courses);
        prop_assert!(rate <= 100);

        let assigned: Vec<Course> = courses
            .iter()
            .cloned()
            .map(|mut c| { c.faculty_id = Some("1".into()); c })
            .collect();
        let unassigned: Vec<Course> = courses
            .iter()
            .cloned()
            .map(|mut c| { c.faculty_id = None; c })
            .collect();
        let full = if courses.is_empty() { 0 } else { 100 };
        prop_assert_eq!(compute_assignment_rate(&assigned), full);
        prop_assert_eq!(compute_assignment_rate(&unassigned), 0);
    }

    #[test]
    fn grid_holds_one_slot_per_cell(slots in slots_strategy()) {
        let data = builtin_dataset();
        let refs: Vec<&TimeSlot> = slots.iter().collect();
        let grid = timetable_grid(&data.time_slot_options, &data.days_of_week, &refs);

        let distinct: HashSet<(String, String)> = slots
            .iter()
            .map(|s| (s.day.to_string(), s.start_time.clone()))
            .collect();
        prop_assert_eq!(grid.len(), data.days_of_week.len() * data.time_slot_options.len());
        prop_assert_eq!(grid.occupied(), distinct.len());
        for day in &data.days_of_week {
            for option in &data.time_slot_options {
                if let Some(slot) = grid.cell(day, option) {
                    prop_assert_eq!(slot.day, *day);
                    prop_assert_eq!(&slot.start_time, &option.start);
                }
            }
        }
    }

    #[test]
    fn third_years_group_into_semesters_five_and_six(
        ids in proptest::collection::vec("\\PC{0,6}", 0..20),
        policy in policy_strategy(),
    ) {
        let students: Vec<Student> = ids
            .into_iter()
            .map(|id| Student {
                id,
                name: "Generated".into(),
                roll_number: "GEN0001".into(),
                programme: "Computer Science Engineering".into(),
                year: 3,
                email: "generated@student.university.edu".into(),
            })
            .collect();
        let refs: Vec<&Student> = students.iter().collect();

        let grouped = students_by_semester(&refs, policy, None);
        prop_assert!(grouped.keys().all(|semester| *semester == 5 || *semester == 6));
        prop_assert_eq!(grouped.values().map(Vec::len).sum::<usize>(), students.len());
    }

    #[test]
    fn year_maps_to_consecutive_semesters(year in 1u32..=10) {
        let [odd, even] = year_to_semesters(year);
        prop_assert_eq!(odd, (year - 1) * 2 + 1);
        prop_assert_eq!(even, odd + 1);
    }
}
