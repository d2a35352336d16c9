//! Domain models for the university dataset. These types are plain data
//! holders deserialized straight from the fixture (or a `dataset.json`
//! override) and then only ever borrowed by the projection layer, so nothing
//! here carries behaviour beyond display helpers and lookup-table metadata.
//!
//! Field names follow the camelCase JSON the dataset is authored in.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A degree programme. Courses and students point at it by `name`, time slots
/// by `id`, which is why both keys are kept.
pub struct Programme {
    pub id: String,
    pub name: String,
    pub department: String,
    /// Length of the programme in years. Two semesters are derived per year.
    pub duration: u32,
    pub total_students: u32,
}

impl Programme {
    /// Highest semester number the programme can have.
    pub fn max_semester(&self) -> u32 {
        self.duration.saturating_mul(2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub id: String,
    pub name: String,
    pub employee_id: String,
    pub department: String,
    pub email: String,
    /// Subject names the faculty member is qualified to teach. Informational
    /// only; assignments live on `Course::faculty_id`.
    #[serde(default)]
    pub courses: Vec<String>,
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.department)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub roll_number: String,
    /// Programme name, matched against `Programme::name`.
    pub programme: String,
    /// Year of study, starting at 1.
    pub year: u32,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A course offered in one semester of one programme. The teaching faculty is
/// referenced only by id; display names are looked up when rendering so a
/// reassignment can never leave a stale name behind.
pub struct Course {
    pub id: String,
    pub name: String,
    pub code: String,
    pub credits: u32,
    pub semester: u32,
    /// Programme name, matched against `Programme::name`.
    pub programme: String,
    /// `None` while the course is unassigned.
    #[serde(default)]
    pub faculty_id: Option<String>,
}

impl Course {
    pub fn is_assigned(&self) -> bool {
        self.faculty_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub day: Weekday,
    /// `HH:MM`, matched against `TimeSlotOption::start`.
    pub start_time: String,
    pub end_time: String,
    pub course_id: String,
    pub faculty_id: String,
    /// Room name, matched against `Room::name`.
    pub room: String,
    pub programme_id: String,
    pub semester: u32,
    #[serde(default)]
    pub section: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Teaching days. Ordering follows the week so grids and distinct-day counts
/// come out Monday first.
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Three letter form used for narrow grid headers.
    pub fn short(self) -> &'static str {
        &self.as_str()[..3]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    #[serde(rename = "type")]
    pub kind: RoomKind,
    pub building: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    #[serde(rename = "Lecture Hall")]
    LectureHall,
    #[serde(rename = "Lab")]
    Lab,
    #[serde(rename = "Tutorial Room")]
    TutorialRoom,
    #[serde(rename = "Seminar Room")]
    SeminarRoom,
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoomKind::LectureHall => "Lecture Hall",
            RoomKind::Lab => "Lab",
            RoomKind::TutorialRoom => "Tutorial Room",
            RoomKind::SeminarRoom => "Seminar Room",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One row of the weekly grid, e.g. `09:00`–`10:30`.
pub struct TimeSlotOption {
    pub start: String,
    pub end: String,
}

impl fmt::Display for TimeSlotOption {
    /// Grid keys are built from the start time alone.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Kind of uploaded material. Unrecognised values fall back to `Other`.
pub enum ContentType {
    Assignment,
    Ppt,
    Handbook,
    QuestionPaper,
    Notes,
    Video,
    #[serde(other)]
    Other,
}

impl ContentType {
    pub const ALL: [ContentType; 7] = [
        ContentType::Assignment,
        ContentType::Ppt,
        ContentType::Handbook,
        ContentType::QuestionPaper,
        ContentType::Notes,
        ContentType::Video,
        ContentType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContentType::Assignment => "Assignment",
            ContentType::Ppt => "Presentation",
            ContentType::Handbook => "Course Handbook",
            ContentType::QuestionPaper => "Question Paper",
            ContentType::Notes => "Lecture Notes",
            ContentType::Video => "Video Content",
            ContentType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Review state of a content submission. Unrecognised values are read as
/// `Pending` so they land in the review queue instead of disappearing.
pub enum ApprovalStatus {
    Approved,
    Rejected,
    NeedsRevision,
    #[serde(other)]
    Pending,
}

impl ApprovalStatus {
    pub const ALL: [ApprovalStatus; 4] = [
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
        ApprovalStatus::NeedsRevision,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending Review",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
            ApprovalStatus::NeedsRevision => "Needs Revision",
        }
    }

    /// Wire value, as used in the dataset and in intents.
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
            ApprovalStatus::NeedsRevision => "needs_revision",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicContent {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub course_id: String,
    pub faculty_id: String,
    pub file_url: String,
    pub file_name: String,
    pub file_size: String,
    /// Empty until the item has been published.
    #[serde(default)]
    pub uploaded_at: String,
    pub submitted_at: String,
    pub is_published: bool,
    pub download_count: u32,
    pub approval_status: ApprovalStatus,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    #[serde(default)]
    pub review_comments: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// The read-only snapshot every view is computed from. Collections missing
/// from a `dataset.json` are read as empty.
pub struct Dataset {
    pub programmes: Vec<Programme>,
    pub faculties: Vec<Faculty>,
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
    pub time_slots: Vec<TimeSlot>,
    pub rooms: Vec<Room>,
    pub time_slot_options: Vec<TimeSlotOption>,
    pub days_of_week: Vec<Weekday>,
    pub academic_content: Vec<AcademicContent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Portal the user is browsing as.
pub enum Role {
    Admin,
    Faculty,
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Faculty, Role::Student];

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Faculty => "Faculty",
            Role::Student => "Student",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_enum_values_fall_back() {
        let status: ApprovalStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, ApprovalStatus::Pending);
        let status: ApprovalStatus = serde_json::from_str("\"needs_revision\"").unwrap();
        assert_eq!(status, ApprovalStatus::NeedsRevision);
        assert_eq!(serde_json::to_string(&ApprovalStatus::Pending).unwrap(), "\"pending\"");
        let kind: ContentType = serde_json::from_str("\"podcast\"").unwrap();
        assert_eq!(kind, ContentType::Other);
    }

    #[test]
    fn max_semester_saturates() {
        let programme = Programme {
            id: "1".into(),
            name: "Eternity".into(),
            department: "Science".into(),
            duration: 3_000_000_000,
            total_students: 0,
        };
        assert_eq!(programme.max_semester(), u32::MAX);
    }

    #[test]
    fn course_ignores_denormalized_faculty_name() {
        let json = r#"{
            "id": "8", "name": "Operating Systems", "code": "CS501", "credits": 4,
            "semester": 9, "programme": "Computer Science Engineering",
            "faculty": "Unassigned", "facultyId": null
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert!(!course.is_assigned());
        assert_eq!(course.code, "CS501");
    }

    #[test]
    fn time_option_displays_start() {
        let option = TimeSlotOption {
            start: "09:00".into(),
            end: "10:30".into(),
        };
        assert_eq!(option.to_string(), "09:00");
        assert_eq!(Weekday::Wednesday.short(), "Wed");
    }
}
