use crate::models::{
    AcademicContent, ApprovalStatus, ContentType, Course, Dataset, Programme, Role, Student,
};
use crate::views::{
    departments, faculty_content, filter_programmes, review_queue, students_by_semester,
    students_for_programme, ContentQuery, Filter, SemesterPolicy,
};

/// Sections the admin timetable can switch between.
pub(crate) const SECTIONS: [&str; 3] = ["A", "B", "C"];

/// Step a selection through `0..len` and then back to "none".
pub(crate) fn cycle_index(current: Option<usize>, len: usize) -> Option<usize> {
    match current {
        None if len > 0 => Some(0),
        Some(index) if index + 1 < len => Some(index + 1),
        _ => None,
    }
}

/// Step through a closed list of options, wrapping at the end.
pub(crate) fn cycle_filter<T: Copy + PartialEq>(current: Filter<T>, options: &[T]) -> Filter<T> {
    let position = match current {
        Filter::All => None,
        Filter::Only(value) => options.iter().position(|option| *option == value),
    };
    cycle_index(position, options.len()).map_or(Filter::All, |index| Filter::Only(options[index]))
}

/// Selection within a list whose length is only known while drawing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListCursor {
    pub(crate) selected: usize,
}

impl ListCursor {
    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let last = len as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, last) as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    pub(crate) fn ensure_in_bounds(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub(crate) fn pick<'a, T>(&self, items: &[&'a T]) -> Option<&'a T> {
        items.get(self.selected).copied()
    }
}

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageKind {
    Dashboard,
    Programmes,
    Faculties,
    Students,
    Courses,
    Timetable,
    ContentReview,
    MyCourses,
    Content,
    MyTimetable,
}

const ADMIN_PAGES: [PageKind; 7] = [
    PageKind::Dashboard,
    PageKind::Programmes,
    PageKind::Faculties,
    PageKind::Students,
    PageKind::Courses,
    PageKind::Timetable,
    PageKind::ContentReview,
];
const FACULTY_PAGES: [PageKind; 4] = [
    PageKind::Dashboard,
    PageKind::MyCourses,
    PageKind::Content,
    PageKind::MyTimetable,
];
const STUDENT_PAGES: [PageKind; 3] =
    [PageKind::Dashboard, PageKind::MyCourses, PageKind::MyTimetable];

impl PageKind {
    pub(crate) fn for_role(role: Role) -> &'static [PageKind] {
        match role {
            Role::Admin => &ADMIN_PAGES,
            Role::Faculty => &FACULTY_PAGES,
            Role::Student => &STUDENT_PAGES,
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            PageKind::Dashboard => "Dashboard",
            PageKind::Programmes => "Programmes",
            PageKind::Faculties => "Faculties",
            PageKind::Students => "Students",
            PageKind::Courses => "Courses",
            PageKind::Timetable => "Timetable",
            PageKind::ContentReview => "Content Review",
            PageKind::MyCourses => "My Courses",
            PageKind::Content => "Content",
            PageKind::MyTimetable => "My Timetable",
        }
    }
}

/// Role picker shown at startup.
#[derive(Debug, Default)]
pub(crate) struct HomeScreen {
    pub(crate) cursor: ListCursor,
}

impl HomeScreen {
    pub(crate) fn current_role(&self) -> Role {
        Role::ALL[self.cursor.selected.min(Role::ALL.len() - 1)]
    }
}

/// One role's portal: which sidebar page is open and that page's filters.
pub(crate) struct PortalScreen {
    pub(crate) role: Role,
    pub(crate) page: usize,
    pub(crate) state: PageState,
}

impl PortalScreen {
    pub(crate) fn new(role: Role) -> Self {
        Self {
            role,
            page: 0,
            state: PageState::for_kind(PageKind::Dashboard),
        }
    }

    pub(crate) fn pages(&self) -> &'static [PageKind] {
        PageKind::for_role(self.role)
    }

    pub(crate) fn kind(&self) -> PageKind {
        self.pages()[self.page.min(self.pages().len() - 1)]
    }

    /// Move to a neighbouring sidebar page, wrapping around. Page filters are
    /// reset on every switch.
    pub(crate) fn switch_page(&mut self, offset: isize) {
        let len = self.pages().len() as isize;
        self.page = (self.page as isize + offset).rem_euclid(len) as usize;
        self.state = PageState::for_kind(self.kind());
    }
}

pub(crate) enum PageState {
    Dashboard,
    Programmes(ProgrammesPage),
    Faculties(ListCursor),
    Students(StudentsPage),
    Courses(CoursesPage),
    Timetable(TimetablePage),
    ContentReview(ReviewPage),
    MyCourses(ListCursor),
    Content(LibraryPage),
    MyTimetable,
}

impl PageState {
    pub(crate) fn for_kind(kind: PageKind) -> Self {
        match kind {
            PageKind::Dashboard => PageState::Dashboard,
            PageKind::Programmes => PageState::Programmes(ProgrammesPage::default()),
            PageKind::Faculties => PageState::Faculties(ListCursor::default()),
            PageKind::Students => PageState::Students(StudentsPage::default()),
            PageKind::Courses => PageState::Courses(CoursesPage::default()),
            PageKind::Timetable => PageState::Timetable(TimetablePage::default()),
            PageKind::ContentReview => PageState::ContentReview(ReviewPage::default()),
            PageKind::MyCourses => PageState::MyCourses(ListCursor::default()),
            PageKind::Content => PageState::Content(LibraryPage::default()),
            PageKind::MyTimetable => PageState::MyTimetable,
        }
    }
}

/// Programme catalogue with a name search and a department filter.
#[derive(Debug, Default)]
pub(crate) struct ProgrammesPage {
    pub(crate) search: String,
    pub(crate) department: Option<usize>,
    pub(crate) cursor: ListCursor,
}

impl ProgrammesPage {
    pub(crate) fn department<'a>(&self, data: &'a Dataset) -> Option<&'a str> {
        self.department
            .and_then(|index| departments(&data.programmes).get(index).copied())
    }

    pub(crate) fn cycle_department(&mut self, data: &Dataset) {
        self.department = cycle_index(self.department, departments(&data.programmes).len());
        self.cursor.select_first();
    }

    pub(crate) fn visible<'a>(&self, data: &'a Dataset) -> Vec<&'a Programme> {
        filter_programmes(&data.programmes, &self.search, &Filter::from(self.department(data)))
    }
}

/// Student roll, optionally narrowed to one programme and one semester.
#[derive(Debug, Default)]
pub(crate) struct StudentsPage {
    pub(crate) programme: Option<usize>,
    pub(crate) semester: Option<u32>,
    pub(crate) cursor: ListCursor,
}

impl StudentsPage {
    pub(crate) fn programme<'a>(&self, data: &'a Dataset) -> Option<&'a Programme> {
        self.programme.and_then(|index| data.programmes.get(index))
    }

    pub(crate) fn cycle_programme(&mut self, data: &Dataset) {
        self.programme = cycle_index(self.programme, data.programmes.len());
        self.semester = None;
        self.cursor.select_first();
    }

    /// Semester filter only applies once a programme is chosen.
    pub(crate) fn cycle_semester(&mut self, data: &Dataset) {
        let Some(programme) = self.programme(data) else {
            self.semester = None;
            return;
        };
        self.semester = match self.semester {
            None => Some(1),
            Some(current) if current < programme.max_semester() => Some(current + 1),
            Some(_) => None,
        };
        self.cursor.select_first();
    }

    /// Students in display order: grouped by current semester when a
    /// programme is chosen, otherwise the whole roll as stored.
    pub(crate) fn visible<'a>(
        &self,
        data: &'a Dataset,
        policy: SemesterPolicy,
    ) -> Vec<&'a Student> {
        match self.programme(data) {
            None => data.students.iter().collect(),
            Some(programme) => {
                let enrolled = students_for_programme(&data.students, &programme.name);
                students_by_semester(&enrolled, policy, self.semester)
                    .into_values()
                    .flatten()
                    .collect()
            }
        }
    }
}

/// Course assignments of one programme.
#[derive(Debug, Default)]
pub(crate) struct CoursesPage {
    pub(crate) programme: usize,
    pub(crate) cursor: ListCursor,
}

impl CoursesPage {
    pub(crate) fn programme<'a>(&self, data: &'a Dataset) -> Option<&'a Programme> {
        data.programmes.get(self.programme)
    }

    pub(crate) fn cycle_programme(&mut self, data: &Dataset) {
        if !data.programmes.is_empty() {
            self.programme = (self.programme + 1) % data.programmes.len();
        }
        self.cursor.select_first();
    }
}

/// Admin timetable selection. The grid stays empty until a programme and a
/// semester are both picked.
#[derive(Debug, Default)]
pub(crate) struct TimetablePage {
    pub(crate) programme: Option<usize>,
    pub(crate) semester: Option<u32>,
    pub(crate) section: usize,
}

impl TimetablePage {
    pub(crate) fn programme<'a>(&self, data: &'a Dataset) -> Option<&'a Programme> {
        self.programme.and_then(|index| data.programmes.get(index))
    }

    pub(crate) fn cycle_programme(&mut self, data: &Dataset) {
        self.programme = cycle_index(self.programme, data.programmes.len());
        self.semester = None;
    }

    pub(crate) fn cycle_semester(&mut self, data: &Dataset) {
        let max = self.programme(data).map_or(0, Programme::max_semester);
        self.semester = match self.semester {
            None if max > 0 => Some(1),
            Some(current) if current < max => Some(current + 1),
            _ => None,
        };
    }

    pub(crate) fn cycle_section(&mut self) {
        self.section = (self.section + 1) % SECTIONS.len();
    }

    pub(crate) fn section(&self) -> &'static str {
        SECTIONS[self.section % SECTIONS.len()]
    }
}

/// Admin review queue; opens on pending submissions.
#[derive(Debug)]
pub(crate) struct ReviewPage {
    pub(crate) status: Filter<ApprovalStatus>,
    pub(crate) cursor: ListCursor,
}

impl Default for ReviewPage {
    fn default() -> Self {
        Self {
            status: Filter::Only(ApprovalStatus::Pending),
            cursor: ListCursor::default(),
        }
    }
}

impl ReviewPage {
    pub(crate) fn cycle_status(&mut self) {
        self.status = cycle_filter(self.status, &ApprovalStatus::ALL);
        self.cursor.select_first();
    }

    pub(crate) fn visible<'a>(&self, data: &'a Dataset) -> Vec<&'a AcademicContent> {
        review_queue(&data.academic_content, &self.status)
    }
}

/// A faculty member's own uploads with the library filters.
#[derive(Debug, Default)]
pub(crate) struct LibraryPage {
    pub(crate) query: ContentQuery,
    pub(crate) course: Option<usize>,
    pub(crate) cursor: ListCursor,
}

impl LibraryPage {
    pub(crate) fn cycle_course(&mut self, own_courses: &[&Course]) {
        self.course = cycle_index(self.course, own_courses.len());
        self.query.course_id = self
            .course
            .and_then(|index| own_courses.get(index))
            .map(|course| course.id.clone());
        self.cursor.select_first();
    }

    pub(crate) fn cycle_type(&mut self) {
        self.query.content_type = cycle_filter(self.query.content_type, &ContentType::ALL);
        self.cursor.select_first();
    }

    pub(crate) fn cycle_status(&mut self) {
        self.query.status = cycle_filter(self.query.status, &ApprovalStatus::ALL);
        self.cursor.select_first();
    }

    pub(crate) fn set_search(&mut self, search: String) {
        self.query.search = search;
        self.cursor.select_first();
    }

    pub(crate) fn visible<'a>(
        &self,
        data: &'a Dataset,
        faculty_id: &str,
    ) -> Vec<&'a AcademicContent> {
        faculty_content(&data.academic_content, faculty_id, &self.query)
    }
}
