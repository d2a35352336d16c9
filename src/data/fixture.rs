//! The built-in dataset the portal ships with. It is what every page shows
//! until a `dataset.json` is dropped into the data directory.

use crate::models::{
    AcademicContent, ApprovalStatus, ContentType, Course, Dataset, Faculty, Programme, Room,
    RoomKind, Student, TimeSlot, TimeSlotOption, Weekday,
};

pub fn builtin_dataset() -> Dataset {
    Dataset {
        programmes: programmes(),
        faculties: faculties(),
        students: students(),
        courses: courses(),
        time_slots: time_slots(),
        rooms: rooms(),
        time_slot_options: time_slot_options(),
        days_of_week: vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
        ],
        academic_content: academic_content(),
    }
}

fn programme(
    id: &str,
    name: &str,
    department: &str,
    duration: u32,
    total_students: u32,
) -> Programme {
    Programme {
        id: id.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        duration,
        total_students,
    }
}

fn programmes() -> Vec<Programme> {
    vec![
        programme("1", "Computer Science Engineering", "Engineering", 4, 120),
        programme("2", "Mechanical Engineering", "Engineering", 4, 95),
        programme("3", "Business Administration", "Management", 3, 80),
        programme("4", "English Literature", "Arts", 3, 60),
    ]
}

fn faculty(
    id: &str,
    name: &str,
    employee_id: &str,
    department: &str,
    email: &str,
    courses: &[&str],
) -> Faculty {
    Faculty {
        id: id.to_string(),
        name: name.to_string(),
        employee_id: employee_id.to_string(),
        department: department.to_string(),
        email: email.to_string(),
        courses: courses.iter().map(|c| c.to_string()).collect(),
    }
}

fn faculties() -> Vec<Faculty> {
    vec![
        faculty(
            "1",
            "Dr. John Smith",
            "FAC001",
            "Engineering",
            "john.smith@university.edu",
            &["Data Structures", "Algorithms", "Database Systems"],
        ),
        faculty(
            "2",
            "Prof. Sarah Johnson",
            "FAC002",
            "Engineering",
            "sarah.johnson@university.edu",
            &["Thermodynamics", "Fluid Mechanics"],
        ),
        faculty(
            "3",
            "Dr. Michael Brown",
            "FAC003",
            "Management",
            "michael.brown@university.edu",
            &["Marketing", "Finance"],
        ),
    ]
}

fn student(
    id: &str,
    name: &str,
    roll_number: &str,
    programme: &str,
    year: u32,
    email: &str,
) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        roll_number: roll_number.to_string(),
        programme: programme.to_string(),
        year,
        email: email.to_string(),
    }
}

fn students() -> Vec<Student> {
    vec![
        student(
            "1",
            "Alice Wilson",
            "CS2021001",
            "Computer Science Engineering",
            3,
            "alice@student.university.edu",
        ),
        student(
            "2",
            "Bob Davis",
            "CS2021002",
            "Computer Science Engineering",
            3,
            "bob@student.university.edu",
        ),
        student(
            "3",
            "Charlie Miller",
            "ME2022001",
            "Mechanical Engineering",
            2,
            "charlie@student.university.edu",
        ),
        student(
            "4",
            "Diana Garcia",
            "BA2020001",
            "Business Administration",
            4,
            "diana@student.university.edu",
        ),
    ]
}

fn course(
    id: &str,
    name: &str,
    code: &str,
    credits: u32,
    semester: u32,
    programme: &str,
    faculty_id: Option<&str>,
) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        credits,
        semester,
        programme: programme.to_string(),
        faculty_id: faculty_id.map(str::to_string),
    }
}

fn courses() -> Vec<Course> {
    const CSE: &str = "Computer Science Engineering";
    const ME: &str = "Mechanical Engineering";
    const BA: &str = "Business Administration";
    vec![
        course("1", "Data Structures", "CS301", 4, 5, CSE, Some("1")),
        course("2", "Algorithms", "CS302", 4, 5, CSE, Some("1")),
        course("3", "Database Systems", "CS401", 3, 7, CSE, Some("1")),
        course("4", "Thermodynamics", "ME201", 4, 3, ME, Some("2")),
        course("5", "Marketing", "BA301", 3, 5, BA, Some("3")),
        course("6", "Fluid Mechanics", "ME301", 4, 5, ME, Some("2")),
        course("7", "Finance", "BA201", 3, 3, BA, Some("3")),
        course("8", "Operating Systems", "CS501", 4, 9, CSE, None),
    ]
}

#[allow(clippy::too_many_arguments)]
fn slot(
    id: &str,
    day: Weekday,
    (start, end): (&str, &str),
    course_id: &str,
    faculty_id: &str,
    room: &str,
    programme_id: &str,
    semester: u32,
) -> TimeSlot {
    TimeSlot {
        id: id.to_string(),
        day,
        start_time: start.to_string(),
        end_time: end.to_string(),
        course_id: course_id.to_string(),
        faculty_id: faculty_id.to_string(),
        room: room.to_string(),
        programme_id: programme_id.to_string(),
        semester,
        section: Some("A".to_string()),
    }
}

fn time_slots() -> Vec<TimeSlot> {
    vec![
        slot("1", Weekday::Monday, ("09:00", "10:30"), "1", "1", "LH-101", "1", 5),
        slot("2", Weekday::Monday, ("10:45", "12:15"), "2", "1", "LH-102", "1", 5),
        slot("3", Weekday::Tuesday, ("09:00", "10:30"), "4", "2", "LH-201", "2", 3),
        slot("4", Weekday::Wednesday, ("14:00", "15:30"), "5", "3", "SR-301", "3", 5),
    ]
}

fn room(id: &str, name: &str, capacity: u32, kind: RoomKind, building: &str) -> Room {
    Room {
        id: id.to_string(),
        name: name.to_string(),
        capacity,
        kind,
        building: building.to_string(),
    }
}

fn rooms() -> Vec<Room> {
    vec![
        room("1", "LH-101", 120, RoomKind::LectureHall, "Main Block"),
        room("2", "LH-102", 120, RoomKind::LectureHall, "Main Block"),
        room("3", "LH-201", 80, RoomKind::LectureHall, "Engineering Block"),
        room("4", "LAB-301", 40, RoomKind::Lab, "Engineering Block"),
        room("5", "SR-301", 50, RoomKind::SeminarRoom, "Management Block"),
        room("6", "TR-401", 30, RoomKind::TutorialRoom, "Arts Block"),
    ]
}

fn time_slot_options() -> Vec<TimeSlotOption> {
    [
        ("09:00", "10:30"),
        ("10:45", "12:15"),
        ("13:00", "14:30"),
        ("14:45", "16:15"),
        ("16:30", "18:00"),
    ]
    .into_iter()
    .map(|(start, end)| TimeSlotOption {
        start: start.to_string(),
        end: end.to_string(),
    })
    .collect()
}

fn academic_content() -> Vec<AcademicContent> {
    vec![
        AcademicContent {
            id: "1".into(),
            title: "Introduction to Data Structures".into(),
            description: "Basic concepts and fundamentals of data structures".into(),
            content_type: ContentType::Ppt,
            course_id: "1".into(),
            faculty_id: "1".into(),
            file_url: "/content/ds-intro.pptx".into(),
            file_name: "DS_Introduction.pptx".into(),
            file_size: "2.5 MB".into(),
            uploaded_at: "2024-01-15".into(),
            submitted_at: "2024-01-14".into(),
            is_published: true,
            download_count: 45,
            approval_status: ApprovalStatus::Approved,
            reviewed_by: Some("admin1".into()),
            reviewed_at: Some("2024-01-15".into()),
            review_comments: Some("Good content, approved for publication".into()),
        },
        AcademicContent {
            id: "2".into(),
            title: "Assignment 1: Arrays and Linked Lists".into(),
            description: "Programming assignment on basic data structures".into(),
            content_type: ContentType::Assignment,
            course_id: "1".into(),
            faculty_id: "1".into(),
            file_url: "/content/assignment1.pdf".into(),
            file_name: "Assignment_1.pdf".into(),
            file_size: "1.2 MB".into(),
            uploaded_at: "2024-01-20".into(),
            submitted_at: "2024-01-20".into(),
            is_published: false,
            download_count: 0,
            approval_status: ApprovalStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
            review_comments: None,
        },
        AcademicContent {
            id: "3".into(),
            title: "Advanced Algorithms Presentation".into(),
            description: "Complex algorithms and their implementations".into(),
            content_type: ContentType::Ppt,
            course_id: "2".into(),
            faculty_id: "1".into(),
            file_url: "/content/advanced-algo.pptx".into(),
            file_name: "Advanced_Algorithms.pptx".into(),
            file_size: "3.8 MB".into(),
            uploaded_at: String::new(),
            submitted_at: "2024-02-05".into(),
            is_published: false,
            download_count: 0,
            approval_status: ApprovalStatus::Rejected,
            reviewed_by: Some("admin1".into()),
            reviewed_at: Some("2024-02-06".into()),
            review_comments: Some(
                "Please include more practical examples and reduce theoretical content".into(),
            ),
        },
        AcademicContent {
            id: "4".into(),
            title: "Database Design Handbook".into(),
            description: "Comprehensive guide to database design principles".into(),
            content_type: ContentType::Handbook,
            course_id: "3".into(),
            faculty_id: "1".into(),
            file_url: "/content/db-handbook.pdf".into(),
            file_name: "DB_Handbook.pdf".into(),
            file_size: "4.2 MB".into(),
            uploaded_at: String::new(),
            submitted_at: "2024-02-08".into(),
            is_published: false,
            download_count: 0,
            approval_status: ApprovalStatus::NeedsRevision,
            reviewed_by: Some("admin1".into()),
            reviewed_at: Some("2024-02-09".into()),
            review_comments: Some(
                "Good content but needs formatting improvements and more diagrams".into(),
            ),
        },
    ]
}
