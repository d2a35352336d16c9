use university_portal::builtin_dataset;
use university_portal::models::{AcademicContent, ApprovalStatus, ContentType, Course, Dataset};
use university_portal::views::{
    admin_overview, assignments_for_programme, compute_approval_counts, compute_assignment_rate,
    courses_by_semester, faculty_content, faculty_overview, filter_programmes, programme_stats,
    review_queue, scoped_slots, sort_by_date_descending, student_overview, student_stats,
    timetable_grid, weekly_stats, ContentQuery, Filter, SemesterPolicy, TimetableScope,
};

const CSE: &str = "Computer Science Engineering";

fn content_with(status: ApprovalStatus, submitted_at: &str) -> AcademicContent {
    let mut item = builtin_dataset().academic_content[0].clone();
    item.approval_status = status;
    item.submitted_at = submitted_at.to_string();
    item
}

#[test]
fn single_unassigned_course_has_zero_rate() {
    let course = Course {
        id: "1".into(),
        name: "Data Structures".into(),
        code: "CS301".into(),
        credits: 4,
        semester: 5,
        programme: CSE.into(),
        faculty_id: None,
    };
    assert_eq!(compute_assignment_rate([&course]), 0);
}

#[test]
fn approval_counts_cover_every_status() {
    let items: Vec<AcademicContent> = [
        ApprovalStatus::Pending,
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
        ApprovalStatus::NeedsRevision,
    ]
    .into_iter()
    .map(|status| content_with(status, "2024-01-15"))
    .collect();

    let counts = compute_approval_counts(&items);
    assert_eq!(counts.pending, 2);
    assert_eq!(counts.approved, 1);
    assert_eq!(counts.rejected, 1);
    assert_eq!(counts.needs_revision, 1);
    assert_eq!(counts.total(), items.len());
}

#[test]
fn submissions_sort_newest_first() {
    let items: Vec<AcademicContent> = ["2024-01-14", "2024-02-08", "2024-01-20"]
        .into_iter()
        .map(|date| content_with(ApprovalStatus::Pending, date))
        .collect();

    let sorted: Vec<&str> = sort_by_date_descending(&items, |c| c.submitted_at.as_str())
        .into_iter()
        .map(|c| c.submitted_at.as_str())
        .collect();
    assert_eq!(sorted, ["2024-02-08", "2024-01-20", "2024-01-14"]);
}

#[test]
fn builtin_fixture_matches_sample_data() {
    let data = builtin_dataset();
    assert_eq!(data.programmes.len(), 4);
    assert_eq!(data.faculties.len(), 3);
    assert_eq!(data.students.len(), 4);
    assert_eq!(data.courses.len(), 8);
    assert_eq!(data.time_slots.len(), 4);
    assert_eq!(data.rooms.len(), 6);
    assert_eq!(data.time_slot_options.len(), 5);
    assert_eq!(data.days_of_week.len(), 6);
    assert_eq!(data.academic_content.len(), 4);
}

#[test]
fn admin_overview_of_fixture() {
    let overview = admin_overview(&builtin_dataset());
    assert_eq!(overview.courses, 8);
    assert_eq!(overview.total_credits, 29);
    assert_eq!(overview.assigned_courses, 7);
    assert_eq!(overview.unassigned_courses, 1);
    assert_eq!(overview.assignment_rate, 88);
    assert_eq!(overview.published_content, 1);
    assert_eq!(overview.pending_reviews, 1);
}

#[test]
fn cse_programme_page() {
    let data = builtin_dataset();
    let cse = &data.programmes[0];

    let stats = programme_stats(&data.courses, &data.faculties, CSE);
    assert_eq!(stats.total_courses, 4);
    assert_eq!(stats.assigned_courses, 3);
    assert_eq!(stats.total_faculties, 1);
    assert_eq!(stats.assignment_rate, 75);

    let semesters = courses_by_semester(cse, &data.courses);
    assert_eq!(semesters.len(), 8);
    assert!(semesters[0].1.is_empty());
    let fifth: Vec<&str> = semesters[4].1.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(fifth, ["CS301", "CS302"]);

    let labels: Vec<String> = assignments_for_programme(&data.courses, &data.faculties, CSE)
        .iter()
        .map(|a| a.faculty.to_string())
        .collect();
    assert_eq!(labels, ["Dr. John Smith", "Dr. John Smith", "Dr. John Smith", "Unassigned"]);
}

#[test]
fn programme_search_and_department() {
    let data = builtin_dataset();
    let found = filter_programmes(&data.programmes, "ENG", &Filter::All);
    assert_eq!(found.len(), 3);
    let arts = filter_programmes(&data.programmes, "", &Filter::Only("Arts"));
    assert_eq!(arts.len(), 1);
    assert_eq!(arts[0].name, "English Literature");
    assert!(filter_programmes(&data.programmes, "physics", &Filter::All).is_empty());
}

#[test]
fn unknown_programme_yields_empty_views() {
    let data = builtin_dataset();
    let stats = student_stats(&data.students, "Astrophysics", SemesterPolicy::OddTerm);
    assert_eq!(stats.total_students, 0);
    assert!(stats.year_distribution.is_empty());
    assert_eq!(programme_stats(&data.courses, &data.faculties, "Astrophysics").assignment_rate, 0);
}

#[test]
fn admin_timetable_scope_and_grid() {
    let data = builtin_dataset();
    let scope = TimetableScope {
        programme_id: Some("1"),
        semester: Some(5),
        section: "A",
    };
    let slots = scoped_slots(&data.time_slots, &scope);
    assert_eq!(slots.len(), 2);

    let grid = timetable_grid(&data.time_slot_options, &data.days_of_week, &slots);
    assert_eq!(grid.len(), 30);
    assert_eq!(grid.occupied(), 2);
    assert_eq!(grid.get("Monday-09:00").map(|s| s.course_id.as_str()), Some("1"));
    assert_eq!(grid.get("Monday-10:45").map(|s| s.course_id.as_str()), Some("2"));
    assert!(grid.get("Tuesday-09:00").is_none());

    let unscoped = scoped_slots(&data.time_slots, &TimetableScope::default());
    assert!(unscoped.is_empty());
}

#[test]
fn faculty_and_student_dashboards() {
    let data = builtin_dataset();

    let faculty = faculty_overview(&data, "1").unwrap();
    assert_eq!(faculty.courses.len(), 3);
    assert_eq!(faculty.total_credits, 11);
    assert_eq!(faculty.content.total(), 4);
    assert!(faculty_overview(&data, "42").is_none());

    let student = student_overview(&data, "1", SemesterPolicy::OddTerm).unwrap();
    assert_eq!(student.current_semester, 5);
    assert_eq!(student.total_credits, 15);
    assert_eq!(student.active_days, 1);
    let teachers: Vec<&str> = student.courses.iter().map(|c| c.teacher()).collect();
    assert_eq!(teachers, ["Dr. John Smith", "Dr. John Smith", "Dr. John Smith", "TBA"]);
}

#[test]
fn faculty_library_filters() {
    let data = builtin_dataset();
    let all = faculty_content(&data.academic_content, "1", &ContentQuery::default());
    let dates: Vec<&str> = all.iter().map(|c| c.submitted_at.as_str()).collect();
    let mut expected = dates.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, expected);

    let handbooks = ContentQuery {
        content_type: Filter::Only(ContentType::Handbook),
        ..ContentQuery::default()
    };
    assert_eq!(faculty_content(&data.academic_content, "1", &handbooks).len(), 1);

    let search = ContentQuery {
        search: "ALGORITHM".into(),
        ..ContentQuery::default()
    };
    assert_eq!(faculty_content(&data.academic_content, "1", &search).len(), 1);
    assert!(faculty_content(&data.academic_content, "3", &ContentQuery::default()).is_empty());
}

#[test]
fn review_queue_defaults_to_pending() {
    let data = builtin_dataset();
    let pending = review_queue(&data.academic_content, &Filter::Only(ApprovalStatus::Pending));
    assert_eq!(pending.len(), 1);
    assert_eq!(review_queue(&data.academic_content, &Filter::All).len(), 4);
}

#[test]
fn personal_week_stats() {
    let data = builtin_dataset();
    let slots: Vec<_> = data.time_slots.iter().filter(|s| s.faculty_id == "1").collect();
    let stats = weekly_stats(&slots, 3, 1.5);
    assert_eq!(stats.total_classes, 2);
    assert_eq!(stats.total_hours, 3.0);
    assert_eq!(stats.active_days, 1);
}

#[test]
fn empty_dataset_is_neutral() {
    let data = Dataset::default();
    let overview = admin_overview(&data);
    assert_eq!(overview.assignment_rate, 0);
    assert_eq!(overview.total_credits, 0);
    assert!(student_overview(&data, "1", SemesterPolicy::IdParity).is_none());
}
