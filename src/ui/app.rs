use std::mem;

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::event::KeyCode;
use open::that as open_path;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::Config;
use crate::data::Source;
use crate::intents::{Intent, IntentSink};
use crate::models::{AcademicContent, ApprovalStatus, Dataset, Faculty, Role, Student, TimeSlot};
use crate::views::{
    admin_overview, assignments_for_programme, available_semesters, classes_per_week,
    compute_approval_counts, course_name, courses_by_semester, courses_for_faculty,
    courses_for_programme, cross_reference_lookup, faculties_for_programme, faculty_content,
    faculty_for_course, faculty_name, faculty_overview, faculty_slots, faculty_stats,
    programme_stats, programme_summary, review_queue, schedulable_courses, scoped_slots,
    slot_details, student_overview, student_semester, student_slots, student_stats, timetable_grid,
    weekly_stats, ContentQuery, Filter, StudentOverview, TimetableScope,
};

use super::forms::{
    AssignFacultyForm, BulkAssignState, ConfirmRemoveFaculty, ProgrammeField, ProgrammeForm,
    ReviewField, ReviewForm, SubmitContentForm, SubmitField,
};
use super::helpers::{
    centered_rect, filter_label, fit, heading, key_hints, labelled, status_style, surface_error,
};
use super::screens::{
    CoursesPage, HomeScreen, LibraryPage, ListCursor, PageState, PortalScreen, ProgrammesPage,
    ReviewPage, StudentsPage, TimetablePage,
};

/// Space reserved for the title bar.
const HEADER_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Width of the page sidebar inside a portal.
const SIDEBAR_WIDTH: u16 = 22;
/// Rows skipped by PageUp / PageDown.
const PAGE_STEP: isize = 5;
/// Width of the time column in timetable grids, e.g. `09:00-10:30 `.
const TIME_COLUMN_WIDTH: usize = 12;
/// Footer of the review and submission dialogs.
const SUBMIT_HINT: &str = "Enter to submit • Tab to switch • Esc to cancel";

/// High-level navigation states.
enum Screen {
    Home(HomeScreen),
    Portal(PortalScreen),
}

/// Dialogs layered over the current screen.
enum Mode {
    Normal,
    Searching(SearchState),
    AssigningFaculty(AssignFacultyForm),
    ConfirmRemoveFaculty(ConfirmRemoveFaculty),
    BulkAssigning(BulkAssignState),
    Reviewing(ReviewForm),
    SubmittingContent(SubmitContentForm),
    AddingProgramme(ProgrammeForm),
}

/// Which page filter the search bar edits.
#[derive(Clone, Copy)]
enum SearchTarget {
    Programmes,
    Content,
}

/// State for an active inline search.
struct SearchState {
    target: SearchTarget,
    query: String,
}

/// What a key press on a page asks the app to do.
enum PageAction {
    None,
    Open(Mode),
    /// The key did nothing; the text says why.
    Refused(String),
    OpenFile(String),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. `data` is a working copy
/// of the loaded dataset: assignment intents are applied to it after they have
/// been dispatched, everything else only goes to the sink.
pub struct App {
    data: Dataset,
    config: Config,
    source: Source,
    sink: Box<dyn IntentSink>,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

/// Apply a navigation key to a list cursor. Returns `false` for other keys.
fn navigate(cursor: &mut ListCursor, code: KeyCode, len: usize) -> bool {
    match code {
        KeyCode::Up => cursor.move_selection(-1, len),
        KeyCode::Down => cursor.move_selection(1, len),
        KeyCode::PageUp => cursor.move_selection(-PAGE_STEP, len),
        KeyCode::PageDown => cursor.move_selection(PAGE_STEP, len),
        KeyCode::Home => cursor.select_first(),
        KeyCode::End => cursor.select_last(len),
        _ => return false,
    }
    true
}

fn find_faculty<'a>(data: &'a Dataset, id: &str) -> Option<&'a Faculty> {
    cross_reference_lookup(&data.faculties, |f| f.id.as_str(), id)
}

fn find_student<'a>(data: &'a Dataset, id: &str) -> Option<&'a Student> {
    cross_reference_lookup(&data.students, |s| s.id.as_str(), id)
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

impl App {
    pub fn new(data: Dataset, config: Config, source: Source, sink: Box<dyn IntentSink>) -> Self {
        Self {
            data,
            config,
            source,
            sink,
            screen: Screen::Home(HomeScreen::default()),
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::Searching(state) => self.handle_search(code, state),
            Mode::AssigningFaculty(form) => self.handle_assign_faculty(code, form),
            Mode::ConfirmRemoveFaculty(confirm) => self.handle_confirm_remove(code, confirm),
            Mode::BulkAssigning(state) => self.handle_bulk_assign(code, state),
            Mode::Reviewing(form) => self.handle_review(code, form),
            Mode::SubmittingContent(form) => self.handle_submit_content(code, form),
            Mode::AddingProgramme(form) => self.handle_add_programme(code, form),
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match &mut self.screen {
            Screen::Home(home) => {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => *exit = true,
                    KeyCode::Enter => {
                        let role = home.current_role();
                        self.open_portal(role);
                    }
                    other => {
                        navigate(&mut home.cursor, other, Role::ALL.len());
                    }
                }
                Mode::Normal
            }
            Screen::Portal(portal) => match code {
                KeyCode::Char('q') => {
                    *exit = true;
                    Mode::Normal
                }
                KeyCode::Esc => {
                    self.screen = Screen::Home(HomeScreen::default());
                    self.clear_status();
                    Mode::Normal
                }
                KeyCode::Tab => {
                    portal.switch_page(1);
                    self.clear_status();
                    Mode::Normal
                }
                KeyCode::BackTab => {
                    portal.switch_page(-1);
                    self.clear_status();
                    Mode::Normal
                }
                other => {
                    let action = Self::page_action(other, portal, &self.data, &self.config);
                    self.perform(action)
                }
            },
        }
    }

    /// Page specific keys. Runs without `self` so the page state can be
    /// borrowed mutably next to the dataset.
    fn page_action(
        code: KeyCode,
        portal: &mut PortalScreen,
        data: &Dataset,
        config: &Config,
    ) -> PageAction {
        let role = portal.role;
        match &mut portal.state {
            PageState::Dashboard | PageState::MyTimetable => PageAction::None,
            PageState::Programmes(page) => {
                let len = page.visible(data).len();
                if navigate(&mut page.cursor, code, len) {
                    return PageAction::None;
                }
                match code {
                    KeyCode::Char('f') => PageAction::Open(Mode::Searching(SearchState {
                        target: SearchTarget::Programmes,
                        query: page.search.clone(),
                    })),
                    KeyCode::Char('d') => {
                        page.cycle_department(data);
                        PageAction::None
                    }
                    KeyCode::Char('+') => {
                        PageAction::Open(Mode::AddingProgramme(ProgrammeForm::default()))
                    }
                    _ => PageAction::None,
                }
            }
            PageState::Faculties(cursor) => {
                if navigate(cursor, code, data.faculties.len()) {
                    return PageAction::None;
                }
                match code {
                    KeyCode::Char('b') | KeyCode::Enter => {
                        match data.faculties.get(cursor.selected) {
                            Some(faculty) => PageAction::Open(Mode::BulkAssigning(
                                BulkAssignState::for_faculty(data, faculty),
                            )),
                            None => PageAction::Refused("No faculty selected.".to_string()),
                        }
                    }
                    _ => PageAction::None,
                }
            }
            PageState::Students(page) => {
                let len = page.visible(data, config.semester_policy).len();
                if navigate(&mut page.cursor, code, len) {
                    return PageAction::None;
                }
                match code {
                    KeyCode::Char('p') => {
                        page.cycle_programme(data);
                        PageAction::None
                    }
                    KeyCode::Char('s') if page.programme(data).is_none() => {
                        PageAction::Refused("Pick a programme first.".to_string())
                    }
                    KeyCode::Char('s') => {
                        page.cycle_semester(data);
                        PageAction::None
                    }
                    _ => PageAction::None,
                }
            }
            PageState::Courses(page) => {
                let courses = page
                    .programme(data)
                    .map(|programme| courses_for_programme(&data.courses, &programme.name))
                    .unwrap_or_default();
                if navigate(&mut page.cursor, code, courses.len()) {
                    return PageAction::None;
                }
                let selected = page.cursor.pick(&courses);
                match (code, selected) {
                    (KeyCode::Char('p'), _) => {
                        page.cycle_programme(data);
                        PageAction::None
                    }
                    (KeyCode::Char('a') | KeyCode::Enter, Some(course)) => {
                        let form = AssignFacultyForm::for_course(course, &data.faculties);
                        PageAction::Open(Mode::AssigningFaculty(form))
                    }
                    (KeyCode::Char('-'), Some(course)) if course.is_assigned() => {
                        let confirm = ConfirmRemoveFaculty::from(course, &data.faculties);
                        PageAction::Open(Mode::ConfirmRemoveFaculty(confirm))
                    }
                    (KeyCode::Char('-'), Some(course)) => {
                        PageAction::Refused(format!("{} has no faculty assigned.", course.code))
                    }
                    (KeyCode::Char('a') | KeyCode::Enter | KeyCode::Char('-'), None) => {
                        PageAction::Refused("No course selected.".to_string())
                    }
                    _ => PageAction::None,
                }
            }
            PageState::Timetable(page) => {
                match code {
                    KeyCode::Char('p') => page.cycle_programme(data),
                    KeyCode::Char('s') => page.cycle_semester(data),
                    KeyCode::Char('c') => page.cycle_section(),
                    _ => {}
                }
                PageAction::None
            }
            PageState::ContentReview(page) => {
                let queue = page.visible(data);
                if navigate(&mut page.cursor, code, queue.len()) {
                    return PageAction::None;
                }
                let selected = page.cursor.pick(&queue);
                match (code, selected) {
                    (KeyCode::Char('t'), _) => {
                        page.cycle_status();
                        PageAction::None
                    }
                    (KeyCode::Char('r') | KeyCode::Enter, Some(content)) => {
                        PageAction::Open(Mode::Reviewing(ReviewForm::for_content(content)))
                    }
                    (KeyCode::Char('o'), Some(content)) => {
                        PageAction::OpenFile(content.file_url.clone())
                    }
                    (KeyCode::Char('r') | KeyCode::Enter | KeyCode::Char('o'), None) => {
                        PageAction::Refused("No content selected.".to_string())
                    }
                    _ => PageAction::None,
                }
            }
            PageState::MyCourses(cursor) => {
                let len = match role {
                    Role::Faculty => {
                        courses_for_faculty(&data.courses, &config.current_faculty_id).len()
                    }
                    Role::Student => {
                        student_overview(data, &config.current_student_id, config.semester_policy)
                            .map_or(0, |overview| overview.courses.len())
                    }
                    Role::Admin => 0,
                };
                navigate(cursor, code, len);
                PageAction::None
            }
            PageState::Content(page) => {
                let faculty_id = config.current_faculty_id.as_str();
                let items = page.visible(data, faculty_id);
                if navigate(&mut page.cursor, code, items.len()) {
                    return PageAction::None;
                }
                let own = courses_for_faculty(&data.courses, faculty_id);
                match code {
                    KeyCode::Char('f') => PageAction::Open(Mode::Searching(SearchState {
                        target: SearchTarget::Content,
                        query: page.query.search.clone(),
                    })),
                    KeyCode::Char('c') => {
                        page.cycle_course(&own);
                        PageAction::None
                    }
                    KeyCode::Char('t') => {
                        page.cycle_type();
                        PageAction::None
                    }
                    KeyCode::Char('s') => {
                        page.cycle_status();
                        PageAction::None
                    }
                    KeyCode::Char('+') if own.is_empty() => {
                        let text = "You have no courses to submit content for.";
                        PageAction::Refused(text.to_string())
                    }
                    KeyCode::Char('+') => {
                        let form = SubmitContentForm::for_courses(&own);
                        PageAction::Open(Mode::SubmittingContent(form))
                    }
                    KeyCode::Char('o') => match page.cursor.pick(&items) {
                        Some(content) => PageAction::OpenFile(content.file_url.clone()),
                        None => PageAction::Refused("No content selected.".to_string()),
                    },
                    _ => PageAction::None,
                }
            }
        }
    }

    fn perform(&mut self, action: PageAction) -> Mode {
        match action {
            PageAction::None => Mode::Normal,
            PageAction::Open(mode) => {
                self.clear_status();
                mode
            }
            PageAction::Refused(text) => {
                self.set_status(text, StatusKind::Error);
                Mode::Normal
            }
            PageAction::OpenFile(file_url) => {
                self.open_content_file(&file_url);
                Mode::Normal
            }
        }
    }

    fn handle_search(&mut self, code: KeyCode, mut state: SearchState) -> Mode {
        match code {
            KeyCode::Esc => {
                self.apply_search(state.target, String::new());
                Mode::Normal
            }
            KeyCode::Enter => Mode::Normal,
            KeyCode::Backspace => {
                state.query.pop();
                self.apply_search(state.target, state.query.clone());
                Mode::Searching(state)
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                state.query.push(ch);
                self.apply_search(state.target, state.query.clone());
                Mode::Searching(state)
            }
            _ => Mode::Searching(state),
        }
    }

    fn apply_search(&mut self, target: SearchTarget, query: String) {
        let Screen::Portal(portal) = &mut self.screen else {
            return;
        };
        match (target, &mut portal.state) {
            (SearchTarget::Programmes, PageState::Programmes(page)) => {
                page.search = query;
                page.cursor.select_first();
            }
            (SearchTarget::Content, PageState::Content(page)) => page.set_search(query),
            _ => {}
        }
    }

    fn handle_assign_faculty(&mut self, code: KeyCode, mut form: AssignFacultyForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Assignment cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Up | KeyCode::Left | KeyCode::BackTab => {
                form.cycle(false);
                Mode::AssigningFaculty(form)
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
                form.cycle(true);
                Mode::AssigningFaculty(form)
            }
            KeyCode::Enter => match self.submit(form.to_intent(&self.data)) {
                Ok(()) => Mode::Normal,
                Err(message) => {
                    form.error = Some(message);
                    Mode::AssigningFaculty(form)
                }
            },
            _ => Mode::AssigningFaculty(form),
        }
    }

    fn handle_confirm_remove(&mut self, code: KeyCode, confirm: ConfirmRemoveFaculty) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Removal cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                let intent = Intent::remove_faculty(&self.data, &confirm.course_id)
                    .map_err(anyhow::Error::from);
                match self.submit(intent) {
                    Ok(()) => Mode::Normal,
                    Err(_) => Mode::ConfirmRemoveFaculty(confirm),
                }
            }
            _ => Mode::ConfirmRemoveFaculty(confirm),
        }
    }

    fn handle_bulk_assign(&mut self, code: KeyCode, mut state: BulkAssignState) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Bulk assignment cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Up => state.move_selection(-1),
            KeyCode::Down => state.move_selection(1),
            KeyCode::PageUp => state.move_selection(-PAGE_STEP),
            KeyCode::PageDown => state.move_selection(PAGE_STEP),
            KeyCode::Home => state.selected = 0,
            KeyCode::End => state.selected = state.items.len().saturating_sub(1),
            KeyCode::Char(' ') => state.toggle_current_selection(),
            KeyCode::Enter => match self.submit(state.to_intent(&self.data)) {
                Ok(()) => return Mode::Normal,
                Err(message) => state.error = Some(message),
            },
            _ => {}
        }
        Mode::BulkAssigning(state)
    }

    fn handle_review(&mut self, code: KeyCode, mut form: ReviewForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Review cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Left => form.cycle(false),
            KeyCode::Right => form.cycle(true),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                let intent = form.to_intent(&self.data, &self.config.reviewer_id, today());
                match self.submit(intent) {
                    Ok(()) => return Mode::Normal,
                    Err(message) => form.error = Some(message),
                }
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::Reviewing(form)
    }

    fn handle_submit_content(&mut self, code: KeyCode, mut form: SubmitContentForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Submission cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab => form.toggle_field(true),
            KeyCode::BackTab => form.toggle_field(false),
            KeyCode::Left => form.cycle(false),
            KeyCode::Right => form.cycle(true),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                let intent = form.to_intent(&self.data, &self.config.current_faculty_id, today());
                match self.submit(intent) {
                    Ok(()) => return Mode::Normal,
                    Err(message) => form.error = Some(message),
                }
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::SubmittingContent(form)
    }

    fn handle_add_programme(&mut self, code: KeyCode, mut form: ProgrammeForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Add programme cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab => form.toggle_field(true),
            KeyCode::BackTab => form.toggle_field(false),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.submit(form.to_intent()) {
                Ok(()) => return Mode::Normal,
                Err(message) => form.error = Some(message),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::AddingProgramme(form)
    }

    /// Dispatch a validated intent. Failures are logged, shown in the footer,
    /// and handed back to the dialog as text.
    fn submit(&mut self, intent: Result<Intent>) -> std::result::Result<(), String> {
        match intent.and_then(|intent| self.dispatch(intent)) {
            Ok(()) => Ok(()),
            Err(err) => {
                log::warn!("action rejected: {err:#}");
                let message = surface_error(&err);
                self.set_status(message.clone(), StatusKind::Error);
                Err(message)
            }
        }
    }

    fn dispatch(&mut self, intent: Intent) -> Result<()> {
        let summary = intent.summary();
        self.sink
            .dispatch(intent.clone())
            .context("failed to dispatch action")?;
        let changed = intent.apply_assignment(&mut self.data.courses);
        if changed > 0 {
            log::debug!("{changed} course assignment(s) updated locally");
        }
        self.clamp_cursors();
        self.set_status(format!("{summary}."), StatusKind::Info);
        Ok(())
    }

    fn open_portal(&mut self, role: Role) {
        log::info!("opening {} portal", role.label());
        self.screen = Screen::Portal(PortalScreen::new(role));
        self.clear_status();
        let (faculty_id, student_id) =
            (&self.config.current_faculty_id, &self.config.current_student_id);
        let missing = match role {
            Role::Faculty if find_faculty(&self.data, faculty_id).is_none() => {
                Some(format!("No faculty with id {faculty_id}."))
            }
            Role::Student if find_student(&self.data, student_id).is_none() => {
                Some(format!("No student with id {student_id}."))
            }
            _ => None,
        };
        if let Some(text) = missing {
            self.set_status(text, StatusKind::Error);
        }
    }

    fn open_content_file(&mut self, file_url: &str) {
        let Some(path) = self.config.content_path(file_url) else {
            self.set_status(
                "Set contentRoot in config.json to open content files.",
                StatusKind::Error,
            );
            return;
        };
        if !path.exists() {
            self.set_status(format!("{} does not exist.", path.display()), StatusKind::Error);
            return;
        }
        match open_path(&path) {
            Ok(()) => self.set_status(format!("Opened {}.", path.display()), StatusKind::Info),
            Err(err) => {
                log::warn!("failed to open {}: {err}", path.display());
                self.set_status(format!("Failed to open file: {err}"), StatusKind::Error);
            }
        }
    }

    /// Lists can shrink after an intent is applied; keep selections valid.
    fn clamp_cursors(&mut self) {
        let Screen::Portal(portal) = &mut self.screen else {
            return;
        };
        if let PageState::Courses(page) = &mut portal.state {
            let len = page.programme(&self.data).map_or(0, |programme| {
                courses_for_programme(&self.data.courses, &programme.name).len()
            });
            page.cursor.ensure_in_bounds(len);
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        let has_chrome = area.height > HEADER_HEIGHT + FOOTER_HEIGHT;
        let (header_area, content_area, footer_area) = if has_chrome {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(HEADER_HEIGHT),
                    Constraint::Min(0),
                    Constraint::Length(FOOTER_HEIGHT),
                ])
                .split(area);
            (Some(chunks[0]), chunks[1], Some(chunks[2]))
        } else {
            (None, area, None)
        };

        if let Some(header_area) = header_area {
            self.draw_header(frame, header_area);
        }

        match &self.screen {
            Screen::Home(home) => self.draw_home(frame, content_area, home),
            Screen::Portal(portal) => self.draw_portal(frame, content_area, portal),
        }

        if let Some(footer_area) = footer_area {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::Normal => {}
            Mode::Searching(state) => self.draw_search_bar(frame, area, state),
            Mode::AssigningFaculty(form) => self.draw_assign_form(frame, area, form),
            Mode::ConfirmRemoveFaculty(confirm) => self.draw_confirm_remove(frame, area, confirm),
            Mode::BulkAssigning(state) => self.draw_bulk_assign(frame, area, state),
            Mode::Reviewing(form) => self.draw_review_form(frame, area, form),
            Mode::SubmittingContent(form) => self.draw_submit_form(frame, area, form),
            Mode::AddingProgramme(form) => self.draw_programme_form(frame, area, form),
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let location = match &self.screen {
            Screen::Home(_) => "Choose a portal".to_string(),
            Screen::Portal(portal) => {
                format!("{} Portal • {}", portal.role.label(), portal.kind().title())
            }
        };
        let line = Line::from(vec![
            Span::styled("University Portal", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  •  {location}")),
            Span::styled(
                format!("  ({})", self.source.describe()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(paragraph, area);
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect, home: &HomeScreen) {
        let popup_area = centered_rect(50, 60, area);
        let block = Block::default().title("Sign in as").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(Role::ALL.len() as u16 + 1), Constraint::Min(0)])
            .split(inner);

        let items: Vec<ListItem> = Role::ALL
            .iter()
            .map(|role| {
                let who = match role {
                    Role::Admin => "programmes, assignments, timetables, reviews".to_string(),
                    Role::Faculty => find_faculty(&self.data, &self.config.current_faculty_id)
                        .map_or_else(|| "unknown faculty".to_string(), |f| f.name.clone()),
                    Role::Student => find_student(&self.data, &self.config.current_student_id)
                        .map_or_else(|| "unknown student".to_string(), |s| s.name.clone()),
                };
                ListItem::new(format!("{:<8} {who}", role.label()))
            })
            .collect();
        self.render_list(frame, chunks[0], items, home.cursor.selected, Block::default());

        let overview = admin_overview(&self.data);
        let summary = Paragraph::new(vec![
            Line::from(""),
            Line::from(format!(
                "{} programmes • {} faculty • {} students • {} courses",
                overview.programmes, overview.faculties, overview.students, overview.courses
            )),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
        frame.render_widget(summary, chunks[1]);
    }

    fn draw_portal(&self, frame: &mut Frame, area: Rect, portal: &PortalScreen) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);

        let items: Vec<ListItem> = portal
            .pages()
            .iter()
            .map(|page| ListItem::new(page.title()))
            .collect();
        let sidebar = Block::default()
            .title(format!("{} Portal", portal.role.label()))
            .borders(Borders::ALL);
        self.render_list(frame, chunks[0], items, portal.page, sidebar);

        let body = chunks[1];
        match (&portal.state, portal.role) {
            (PageState::Dashboard, Role::Admin) => self.draw_admin_dashboard(frame, body),
            (PageState::Dashboard, Role::Faculty) => self.draw_faculty_dashboard(frame, body),
            (PageState::Dashboard, Role::Student) => self.draw_student_dashboard(frame, body),
            (PageState::Programmes(page), _) => self.draw_programmes(frame, body, page),
            (PageState::Faculties(cursor), _) => self.draw_faculties(frame, body, cursor),
            (PageState::Students(page), _) => self.draw_students(frame, body, page),
            (PageState::Courses(page), _) => self.draw_courses(frame, body, page),
            (PageState::Timetable(page), _) => self.draw_admin_timetable(frame, body, page),
            (PageState::ContentReview(page), _) => self.draw_content_review(frame, body, page),
            (PageState::MyCourses(cursor), Role::Student) => {
                self.draw_student_courses(frame, body, cursor)
            }
            (PageState::MyCourses(cursor), _) => self.draw_faculty_courses(frame, body, cursor),
            (PageState::Content(page), _) => self.draw_library(frame, body, page),
            (PageState::MyTimetable, Role::Student) => self.draw_student_timetable(frame, body),
            (PageState::MyTimetable, _) => self.draw_faculty_timetable(frame, body),
        }
    }

    fn draw_admin_dashboard(&self, frame: &mut Frame, area: Rect) {
        let overview = admin_overview(&self.data);
        let mut lines = vec![
            labelled("Programmes", overview.programmes.to_string()),
            labelled("Faculty", overview.faculties.to_string()),
            labelled("Students", overview.students.to_string()),
            labelled(
                "Courses",
                format!("{} ({} credits)", overview.courses, overview.total_credits),
            ),
            labelled(
                "Assignment rate",
                format!(
                    "{}% ({} assigned, {} unassigned)",
                    overview.assignment_rate, overview.assigned_courses, overview.unassigned_courses
                ),
            ),
            labelled("Published content", overview.published_content.to_string()),
            labelled("Pending reviews", overview.pending_reviews.to_string()),
            Line::from(""),
            heading("Courses without a teacher"),
        ];
        let unassigned: Vec<Line> = self
            .data
            .courses
            .iter()
            .filter(|course| !course.is_assigned())
            .map(|course| {
                Line::from(format!("  {} {} ({})", course.code, course.name, course.programme))
            })
            .collect();
        if unassigned.is_empty() {
            lines.push(Line::from("  Every course has a teacher."));
        } else {
            lines.extend(unassigned);
        }

        lines.push(Line::from(""));
        lines.push(heading("Awaiting review"));
        let pending =
            review_queue(&self.data.academic_content, &Filter::Only(ApprovalStatus::Pending));
        if pending.is_empty() {
            lines.push(Line::from("  Nothing to review."));
        }
        for content in pending {
            lines.push(Line::from(format!(
                "  {} by {} (submitted {})",
                content.title,
                faculty_name(&self.data.faculties, &content.faculty_id),
                content.submitted_at
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Overview").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn draw_faculty_dashboard(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Overview").borders(Borders::ALL);
        let Some(overview) = faculty_overview(&self.data, &self.config.current_faculty_id) else {
            self.draw_message(frame, area, block, "No faculty profile for the configured id.");
            return;
        };
        let slots = faculty_slots(&self.data.time_slots, &overview.faculty.id);
        let mut lines = vec![
            heading(overview.faculty.name.clone()),
            labelled("Employee id", overview.faculty.employee_id.clone()),
            labelled("Department", overview.faculty.department.clone()),
            labelled("Email", overview.faculty.email.clone()),
            labelled(
                "Teaching",
                format!("{} courses, {} credits", overview.courses.len(), overview.total_credits),
            ),
            labelled("Classes this week", slots.len().to_string()),
            labelled("Published content", overview.published_content.to_string()),
            Line::from(""),
            heading("Submissions"),
        ];
        for (status, count) in overview.content.iter() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:<16}", status.label()), status_style(status)),
                Span::raw(count.to_string()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(heading("Courses"));
        for course in &overview.courses {
            lines.push(Line::from(format!(
                "  {} {} • semester {} • {} class(es)/week",
                course.code,
                course.name,
                course.semester,
                classes_per_week(&slots, &course.id)
            )));
        }

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn current_student_overview(&self) -> Option<StudentOverview<'_>> {
        student_overview(&self.data, &self.config.current_student_id, self.config.semester_policy)
    }

    fn draw_student_dashboard(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Overview").borders(Borders::ALL);
        let Some(overview) = self.current_student_overview() else {
            self.draw_message(frame, area, block, "No student profile for the configured id.");
            return;
        };
        let student = overview.student;
        let mut lines = vec![
            heading(student.name.clone()),
            labelled("Roll number", student.roll_number.clone()),
            labelled("Programme", student.programme.clone()),
            labelled(
                "Year",
                format!("{} (semester {})", student.year, overview.current_semester),
            ),
            labelled("Total credits", overview.total_credits.to_string()),
            labelled("Days with classes", overview.active_days.to_string()),
            Line::from(""),
            heading("Courses"),
        ];
        if overview.courses.is_empty() {
            lines.push(Line::from("  No courses found for this programme."));
        }
        for entry in &overview.courses {
            lines.push(Line::from(format!(
                "  {} {} • {} credits • {}",
                entry.course.code,
                entry.course.name,
                entry.course.credits,
                entry.teacher()
            )));
        }

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn draw_programmes(&self, frame: &mut Frame, area: Rect, page: &ProgrammesPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let visible = page.visible(&self.data);
        let summary = programme_summary(&visible, &self.data.courses, &self.data.faculties);
        let search = if page.search.is_empty() { "-" } else { page.search.as_str() };
        let filters = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Search: ", Style::default().fg(Color::Gray)),
                Span::raw(search.to_string()),
                Span::styled("   Department: ", Style::default().fg(Color::Gray)),
                Span::raw(page.department(&self.data).unwrap_or("All").to_string()),
            ]),
            Line::from(format!(
                "{} programmes • {} courses ({} assigned, {} unassigned) • {} faculty",
                summary.programmes,
                summary.courses,
                summary.assigned_courses,
                summary.unassigned_courses,
                summary.faculties
            )),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(filters, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        let block = Block::default().title("Programmes").borders(Borders::ALL);
        if visible.is_empty() {
            self.draw_message(frame, columns[0], block, "No programmes match the current filters.");
        } else {
            let items: Vec<ListItem> = visible
                .iter()
                .map(|programme| {
                    ListItem::new(format!(
                        "{} • {} • {} yrs",
                        programme.name, programme.department, programme.duration
                    ))
                })
                .collect();
            self.render_list(frame, columns[0], items, page.cursor.selected, block);
        }

        let detail_block = Block::default().title("Details").borders(Borders::ALL);
        let Some(programme) = page.cursor.pick(&visible) else {
            frame.render_widget(detail_block, columns[1]);
            return;
        };
        let stats = programme_stats(&self.data.courses, &self.data.faculties, &programme.name);
        let mut lines = vec![
            heading(programme.name.clone()),
            labelled("Students", programme.total_students.to_string()),
            labelled(
                "Courses",
                format!(
                    "{} ({} credits, {}% assigned)",
                    stats.total_courses, stats.total_credits, stats.assignment_rate
                ),
            ),
            Line::from(""),
        ];
        for (semester, courses) in courses_by_semester(programme, &self.data.courses) {
            let listing = if courses.is_empty() {
                "-".to_string()
            } else {
                courses
                    .iter()
                    .map(|course| {
                        let teacher = faculty_for_course(&self.data.faculties, course);
                        format!("{} ({teacher})", course.code)
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            lines.push(labelled(&format!("Semester {semester}"), listing));
        }
        lines.push(Line::from(""));
        lines.push(heading("Faculty"));
        let loads =
            faculties_for_programme(&self.data.courses, &self.data.faculties, &programme.name);
        for load in loads {
            lines.push(Line::from(format!(
                "  {} • {} course(s) • {} credits",
                load.faculty.name,
                load.courses.len(),
                load.total_credits
            )));
        }

        let paragraph = Paragraph::new(lines).block(detail_block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, columns[1]);
    }

    fn draw_faculties(&self, frame: &mut Frame, area: Rect, cursor: &ListCursor) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let items: Vec<ListItem> = self
            .data
            .faculties
            .iter()
            .map(|faculty| {
                let stats = faculty_stats(&self.data.courses, &faculty.id);
                ListItem::new(format!(
                    "{} • {} • {} course(s), {} credits",
                    faculty.name, faculty.department, stats.total_courses, stats.total_credits
                ))
            })
            .collect();
        self.render_list(
            frame,
            columns[0],
            items,
            cursor.selected,
            Block::default().title("Faculty").borders(Borders::ALL),
        );

        let detail_block = Block::default().title("Teaching").borders(Borders::ALL);
        let Some(faculty) = self.data.faculties.get(cursor.selected) else {
            self.draw_message(frame, columns[1], detail_block, "No faculty yet.");
            return;
        };
        let stats = faculty_stats(&self.data.courses, &faculty.id);
        let mut lines = vec![
            heading(faculty.to_string()),
            labelled("Employee id", faculty.employee_id.clone()),
            labelled("Email", faculty.email.clone()),
            labelled("Qualified for", faculty.courses.join(", ")),
            labelled("Programmes", stats.programmes.to_string()),
            Line::from(""),
        ];
        let courses = courses_for_faculty(&self.data.courses, &faculty.id);
        if courses.is_empty() {
            lines.push(Line::from("No courses assigned."));
        }
        for course in courses {
            lines.push(Line::from(format!(
                "  {} {} • {} • semester {}",
                course.code, course.name, course.programme, course.semester
            )));
        }
        let paragraph = Paragraph::new(lines).block(detail_block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, columns[1]);
    }

    fn draw_students(&self, frame: &mut Frame, area: Rect, page: &StudentsPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let policy = self.config.semester_policy;
        let programme = page.programme(&self.data);
        let mut header = vec![Line::from(vec![
            Span::styled("Programme: ", Style::default().fg(Color::Gray)),
            Span::raw(programme.map_or("All".to_string(), |p| p.name.clone())),
            Span::styled("   Semester: ", Style::default().fg(Color::Gray)),
            Span::raw(page.semester.map_or("All".to_string(), |s| s.to_string())),
        ])];
        if let Some(programme) = programme {
            let stats = student_stats(&self.data.students, &programme.name, policy);
            let years = stats
                .year_distribution
                .iter()
                .map(|(year, count)| format!("Y{year}: {count}"))
                .collect::<Vec<_>>()
                .join("  ");
            header.push(Line::from(format!("{} enrolled • {years}", stats.total_students)));
        }
        frame.render_widget(
            Paragraph::new(header).block(Block::default().borders(Borders::ALL)),
            chunks[0],
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        let visible = page.visible(&self.data, policy);
        let block = Block::default().title("Students").borders(Borders::ALL);
        if visible.is_empty() {
            self.draw_message(frame, columns[0], block, "No students match the current filters.");
        } else {
            let items: Vec<ListItem> = visible
                .iter()
                .map(|student| {
                    ListItem::new(format!(
                        "{:<10} {} • Y{} S{}",
                        student.roll_number,
                        student.name,
                        student.year,
                        student_semester(student, policy)
                    ))
                })
                .collect();
            self.render_list(frame, columns[0], items, page.cursor.selected, block);
        }

        let detail_block = Block::default().title("Details").borders(Borders::ALL);
        let Some(student) = page.cursor.pick(&visible) else {
            frame.render_widget(detail_block, columns[1]);
            return;
        };
        let semesters = available_semesters(&self.data.programmes, &student.programme, student.year)
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>();
        let lines = vec![
            heading(student.name.clone()),
            labelled("Email", student.email.clone()),
            labelled("Programme", student.programme.clone()),
            labelled(
                "Semesters this year",
                if semesters.is_empty() {
                    "unknown programme".to_string()
                } else {
                    semesters.join(", ")
                },
            ),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(detail_block).wrap(Wrap { trim: false }),
            columns[1],
        );
    }

    fn draw_courses(&self, frame: &mut Frame, area: Rect, page: &CoursesPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let Some(programme) = page.programme(&self.data) else {
            let block = Block::default().borders(Borders::ALL);
            self.draw_message(frame, area, block, "No programmes yet.");
            return;
        };
        let stats = programme_stats(&self.data.courses, &self.data.faculties, &programme.name);
        let header = Paragraph::new(vec![
            labelled("Programme", programme.name.clone()),
            Line::from(format!(
                "{} courses • {} assigned • {} unassigned • {}% assignment rate",
                stats.total_courses,
                stats.assigned_courses,
                stats.unassigned_courses,
                stats.assignment_rate
            )),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let block = Block::default().title("Course Assignments").borders(Borders::ALL);
        let assignments =
            assignments_for_programme(&self.data.courses, &self.data.faculties, &programme.name);
        if assignments.is_empty() {
            self.draw_message(frame, chunks[1], block, "This programme has no courses.");
            return;
        }
        let items: Vec<ListItem> = assignments
            .iter()
            .map(|assignment| {
                let course = assignment.course;
                let faculty_style = if assignment.faculty.is_assigned() {
                    Style::default()
                } else {
                    Style::default().fg(Color::Red)
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!(
                        "{}{}{}",
                        fit(&course.code, 8),
                        fit(&course.name, 24),
                        fit(&format!("S{} • {} cr", course.semester, course.credits), 14)
                    )),
                    Span::styled(assignment.faculty.to_string(), faculty_style),
                ]))
            })
            .collect();
        self.render_list(frame, chunks[1], items, page.cursor.selected, block);
    }

    fn draw_admin_timetable(&self, frame: &mut Frame, area: Rect, page: &TimetablePage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let programme = page.programme(&self.data);
        let scope = TimetableScope {
            programme_id: programme.map(|p| p.id.as_str()),
            semester: page.semester,
            section: page.section(),
        };
        let slots = scoped_slots(&self.data.time_slots, &scope);

        let mut header = vec![Line::from(vec![
            Span::styled("Programme: ", Style::default().fg(Color::Gray)),
            Span::raw(programme.map_or("-".to_string(), |p| p.name.clone())),
            Span::styled("   Semester: ", Style::default().fg(Color::Gray)),
            Span::raw(page.semester.map_or("-".to_string(), |s| s.to_string())),
            Span::styled("   Section: ", Style::default().fg(Color::Gray)),
            Span::raw(page.section()),
        ])];
        if let (Some(programme), Some(semester)) = (programme, page.semester) {
            let courses = schedulable_courses(
                &self.data.programmes,
                &self.data.courses,
                &programme.id,
                semester,
            );
            let listing = courses
                .iter()
                .map(|course| format!("{} ×{}", course.code, classes_per_week(&slots, &course.id)))
                .collect::<Vec<_>>()
                .join("  ");
            let listing = if listing.is_empty() { "none".to_string() } else { listing };
            header.push(labelled("Courses", listing));
        }
        frame.render_widget(
            Paragraph::new(header).block(Block::default().borders(Borders::ALL)),
            chunks[0],
        );

        if scope.programme_id.is_none() || scope.semester.is_none() {
            self.draw_message(
                frame,
                chunks[1],
                Block::default().title("Weekly Timetable").borders(Borders::ALL),
                "Pick a programme (p) and a semester (s) to see the timetable.",
            );
            return;
        }
        self.draw_timetable_grid(frame, chunks[1], "Weekly Timetable", &slots);
    }

    fn draw_content_review(&self, frame: &mut Frame, area: Rect, page: &ReviewPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let counts = compute_approval_counts(&self.data.academic_content);
        let mut header = vec![
            Span::styled("Status: ", Style::default().fg(Color::Gray)),
            Span::raw(filter_label(&page.status, |status| status.label().to_string())),
            Span::raw("   "),
        ];
        for (status, count) in counts.iter() {
            let label = format!("{}: {count}  ", status.label());
            header.push(Span::styled(label, status_style(status)));
        }
        frame.render_widget(
            Paragraph::new(Line::from(header)).block(Block::default().borders(Borders::ALL)),
            chunks[0],
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let queue = page.visible(&self.data);
        let block = Block::default().title("Submissions").borders(Borders::ALL);
        if queue.is_empty() {
            self.draw_message(frame, columns[0], block, "No content in this state.");
        } else {
            let items: Vec<ListItem> =
                queue.iter().map(|content| self.content_item(content)).collect();
            self.render_list(frame, columns[0], items, page.cursor.selected, block);
        }

        let detail_block = Block::default().title("Details").borders(Borders::ALL);
        match page.cursor.pick(&queue) {
            Some(content) => {
                let paragraph = Paragraph::new(self.content_details(content))
                    .block(detail_block)
                    .wrap(Wrap { trim: false });
                frame.render_widget(paragraph, columns[1]);
            }
            None => frame.render_widget(detail_block, columns[1]),
        }
    }

    fn draw_faculty_courses(&self, frame: &mut Frame, area: Rect, cursor: &ListCursor) {
        let block = Block::default().title("My Courses").borders(Borders::ALL);
        let faculty_id = &self.config.current_faculty_id;
        let courses = courses_for_faculty(&self.data.courses, faculty_id);
        if courses.is_empty() {
            self.draw_message(frame, area, block, "No courses assigned to you.");
            return;
        }
        let slots = faculty_slots(&self.data.time_slots, faculty_id);
        let items: Vec<ListItem> = courses
            .iter()
            .map(|course| {
                ListItem::new(format!(
                    "{}{}{}{} class(es)/week",
                    fit(&course.code, 8),
                    fit(&course.name, 24),
                    fit(&format!("{} S{}", course.programme, course.semester), 36),
                    classes_per_week(&slots, &course.id)
                ))
            })
            .collect();
        self.render_list(frame, area, items, cursor.selected, block);
    }

    fn draw_student_courses(&self, frame: &mut Frame, area: Rect, cursor: &ListCursor) {
        let block = Block::default().title("My Courses").borders(Borders::ALL);
        let Some(overview) = self.current_student_overview() else {
            self.draw_message(frame, area, block, "No student profile for the configured id.");
            return;
        };
        if overview.courses.is_empty() {
            self.draw_message(frame, area, block, "No courses found for your programme.");
            return;
        }
        let items: Vec<ListItem> = overview
            .courses
            .iter()
            .map(|entry| {
                ListItem::new(format!(
                    "{}{}{}{}",
                    fit(&entry.course.code, 8),
                    fit(&entry.course.name, 24),
                    fit(&format!("S{} • {} cr", entry.course.semester, entry.course.credits), 14),
                    entry.teacher()
                ))
            })
            .collect();
        self.render_list(frame, area, items, cursor.selected, block);
    }

    fn draw_library(&self, frame: &mut Frame, area: Rect, page: &LibraryPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let faculty_id = self.config.current_faculty_id.as_str();
        let course = page
            .query
            .course_id
            .as_deref()
            .map_or("All".to_string(), |id| course_name(&self.data.courses, id).to_string());
        let search = if page.query.search.is_empty() { "-" } else { page.query.search.as_str() };
        let own =
            faculty_content(&self.data.academic_content, faculty_id, &ContentQuery::default());
        let counts = compute_approval_counts(own.iter().copied());
        let mut count_spans = Vec::new();
        for (status, count) in counts.iter() {
            let label = format!("{}: {count}  ", status.label());
            count_spans.push(Span::styled(label, status_style(status)));
        }
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Course: ", Style::default().fg(Color::Gray)),
                Span::raw(course),
                Span::styled("   Type: ", Style::default().fg(Color::Gray)),
                Span::raw(filter_label(&page.query.content_type, |kind| kind.label().to_string())),
                Span::styled("   Status: ", Style::default().fg(Color::Gray)),
                Span::raw(filter_label(&page.query.status, |status| status.label().to_string())),
                Span::styled("   Search: ", Style::default().fg(Color::Gray)),
                Span::raw(search.to_string()),
            ]),
            Line::from(count_spans),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let items = page.visible(&self.data, faculty_id);
        let block = Block::default().title("My Content").borders(Borders::ALL);
        if items.is_empty() {
            self.draw_message(frame, columns[0], block, "No content matches the current filters.");
        } else {
            let list: Vec<ListItem> =
                items.iter().map(|content| self.content_item(content)).collect();
            self.render_list(frame, columns[0], list, page.cursor.selected, block);
        }

        let detail_block = Block::default().title("Details").borders(Borders::ALL);
        match page.cursor.pick(&items) {
            Some(content) => {
                let paragraph = Paragraph::new(self.content_details(content))
                    .block(detail_block)
                    .wrap(Wrap { trim: false });
                frame.render_widget(paragraph, columns[1]);
            }
            None => frame.render_widget(detail_block, columns[1]),
        }
    }

    fn draw_faculty_timetable(&self, frame: &mut Frame, area: Rect) {
        let faculty_id = &self.config.current_faculty_id;
        let slots = faculty_slots(&self.data.time_slots, faculty_id);
        let course_count = courses_for_faculty(&self.data.courses, faculty_id).len();
        self.draw_week(frame, area, &slots, course_count);
    }

    fn draw_student_timetable(&self, frame: &mut Frame, area: Rect) {
        let Some(student) = find_student(&self.data, &self.config.current_student_id) else {
            self.draw_message(
                frame,
                area,
                Block::default().title("My Timetable").borders(Borders::ALL),
                "No student profile for the configured id.",
            );
            return;
        };
        let slots = student_slots(&self.data.time_slots, &self.data.programmes, student);
        let course_count = courses_for_programme(&self.data.courses, &student.programme).len();
        self.draw_week(frame, area, &slots, course_count);
    }

    /// Weekly numbers above a personal timetable grid.
    fn draw_week(&self, frame: &mut Frame, area: Rect, slots: &[&TimeSlot], course_count: usize) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        let stats = weekly_stats(slots, course_count, self.config.hours_per_class);
        let summary = Paragraph::new(Line::from(format!(
            "{} classes • {:.1} hours • {} active days • {} courses",
            stats.total_classes, stats.total_hours, stats.active_days, stats.courses
        )))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(summary, chunks[0]);
        self.draw_timetable_grid(frame, chunks[1], "My Timetable", slots);
    }

    fn draw_timetable_grid(&self, frame: &mut Frame, area: Rect, title: &str, slots: &[&TimeSlot]) {
        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        let inner = block.inner(area);
        let days = &self.data.days_of_week;
        let options = &self.data.time_slot_options;
        let grid = timetable_grid(options, days, slots);

        let cell_width = (inner.width as usize)
            .saturating_sub(TIME_COLUMN_WIDTH)
            .checked_div(days.len())
            .unwrap_or(0)
            .max(6);
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let mut header = vec![Span::styled(fit("Time", TIME_COLUMN_WIDTH), bold)];
        for day in days {
            let name = if cell_width > 10 { day.as_str() } else { day.short() };
            header.push(Span::styled(fit(name, cell_width), bold));
        }
        let mut lines = vec![Line::from(header)];

        for option in options {
            let time = format!("{}-{}", option.start, option.end);
            let mut course_row = vec![Span::raw(fit(&time, TIME_COLUMN_WIDTH))];
            let mut detail_row = vec![Span::raw(fit("", TIME_COLUMN_WIDTH))];
            for day in days {
                match grid.cell(day, option) {
                    Some(slot) => {
                        let (course, teacher) = self.grid_cell(slot, cell_width);
                        course_row.push(course);
                        detail_row.push(teacher);
                    }
                    None => {
                        let empty = fit("·", cell_width);
                        course_row.push(Span::styled(empty, Style::default().fg(Color::DarkGray)));
                        detail_row.push(Span::raw(fit("", cell_width)));
                    }
                }
            }
            lines.push(Line::from(course_row));
            lines.push(Line::from(detail_row));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// The two rows of an occupied cell: course and room, then the teacher.
    fn grid_cell(&self, slot: &TimeSlot, width: usize) -> (Span<'static>, Span<'static>) {
        let data = &self.data;
        let details = slot_details(slot, &data.courses, &data.faculties, &data.rooms);
        let code = details.course.map_or(slot.course_id.as_str(), |c| c.code.as_str());
        let room = details.room.map_or(slot.room.as_str(), |r| r.name.as_str());
        let teacher = details.faculty.map_or("?", |f| f.name.as_str());
        (
            Span::styled(fit(&format!("{code} {room}"), width), Style::default().fg(Color::Green)),
            Span::styled(fit(teacher, width), Style::default().fg(Color::Gray)),
        )
    }

    fn content_item(&self, content: &AcademicContent) -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            Span::styled(
                fit(content.approval_status.label(), 16),
                status_style(content.approval_status),
            ),
            Span::raw(format!(
                "{} • {}",
                content.title,
                course_name(&self.data.courses, &content.course_id)
            )),
        ]))
    }

    fn content_details(&self, content: &AcademicContent) -> Vec<Line<'static>> {
        let mut lines = vec![
            heading(content.title.clone()),
            Line::from(content.description.clone()),
            Line::from(""),
            labelled("Type", content.content_type.label()),
            labelled("Course", course_name(&self.data.courses, &content.course_id)),
            labelled("Faculty", faculty_name(&self.data.faculties, &content.faculty_id)),
            labelled("File", format!("{} ({})", content.file_name, content.file_size)),
            labelled("Submitted", content.submitted_at.clone()),
            labelled(
                "Published",
                if content.is_published {
                    format!("yes, {} downloads", content.download_count)
                } else {
                    "no".to_string()
                },
            ),
            Line::from(vec![
                Span::styled("Status: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    content.approval_status.label(),
                    status_style(content.approval_status),
                ),
            ]),
        ];
        if let (Some(by), Some(at)) = (&content.reviewed_by, &content.reviewed_at) {
            lines.push(labelled("Reviewed", format!("by {by} on {at}")));
        }
        if let Some(comments) = &content.review_comments {
            lines.push(Line::from(""));
            let title = Span::styled("Review comments", Style::default().fg(Color::Gray));
            lines.push(Line::from(title));
            lines.push(Line::from(comments.clone()));
        }
        lines
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        match (&self.screen, &self.mode) {
            (_, Mode::Searching(_)) => key_hints(&[("Enter", "Keep"), ("Esc", "Clear")]),
            (_, Mode::AssigningFaculty(_)) => {
                key_hints(&[("←→", "Choose Faculty"), ("Enter", "Assign"), ("Esc", "Cancel")])
            }
            (_, Mode::ConfirmRemoveFaculty(_)) => key_hints(&[("y", "Remove"), ("n", "Keep")]),
            (_, Mode::BulkAssigning(_)) => key_hints(&[
                ("↑↓", "Navigate"),
                ("Space", "Toggle"),
                ("Enter", "Assign Selected"),
                ("Esc", "Cancel"),
            ]),
            (_, Mode::Reviewing(_)) => key_hints(&[
                ("Tab", "Switch Field"),
                ("←→", "Change Verdict"),
                ("Enter", "Submit Review"),
                ("Esc", "Cancel"),
            ]),
            (_, Mode::SubmittingContent(_)) => key_hints(&[
                ("Tab", "Next Field"),
                ("←→", "Change Choice"),
                ("Enter", "Submit"),
                ("Esc", "Cancel"),
            ]),
            (_, Mode::AddingProgramme(_)) => {
                key_hints(&[("Tab", "Next Field"), ("Enter", "Add"), ("Esc", "Cancel")])
            }
            (Screen::Home(_), Mode::Normal) => {
                key_hints(&[("↑↓", "Select"), ("Enter", "Open Portal"), ("q", "Quit")])
            }
            (Screen::Portal(portal), Mode::Normal) => {
                let mut hints: Vec<(&str, &str)> = vec![("Tab", "Next Page")];
                match &portal.state {
                    PageState::Dashboard | PageState::MyTimetable => {}
                    PageState::Programmes(_) => hints.extend([
                        ("↑↓", "Select"),
                        ("f", "Search"),
                        ("d", "Department"),
                        ("+", "Add Programme"),
                    ]),
                    PageState::Faculties(_) => {
                        hints.extend([("↑↓", "Select"), ("b", "Bulk Assign")])
                    }
                    PageState::Students(_) => {
                        hints.extend([("↑↓", "Select"), ("p", "Programme"), ("s", "Semester")])
                    }
                    PageState::Courses(_) => hints.extend([
                        ("↑↓", "Select"),
                        ("p", "Programme"),
                        ("a", "Assign"),
                        ("-", "Remove Faculty"),
                    ]),
                    PageState::Timetable(_) => {
                        hints.extend([("p", "Programme"), ("s", "Semester"), ("c", "Section")])
                    }
                    PageState::ContentReview(_) => hints.extend([
                        ("↑↓", "Select"),
                        ("t", "Status"),
                        ("r", "Review"),
                        ("o", "Open File"),
                    ]),
                    PageState::MyCourses(_) => hints.push(("↑↓", "Select")),
                    PageState::Content(_) => hints.extend([
                        ("↑↓", "Select"),
                        ("f", "Search"),
                        ("c", "Course"),
                        ("t", "Type"),
                        ("s", "Status"),
                        ("+", "Submit"),
                        ("o", "Open File"),
                    ]),
                }
                hints.extend([("Esc", "Switch Role"), ("q", "Quit")]);
                key_hints(&hints)
            }
        }
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, state: &SearchState) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title("Search");
        let paragraph = Paragraph::new(Span::raw(format!("Search: {}", state.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + "Search: ".len() as u16 + state.query.chars().count() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_assign_form(&self, frame: &mut Frame, area: Rect, form: &AssignFacultyForm) {
        let popup_area = centered_rect(60, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Assign Faculty").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1), Constraint::Length(1)])
            .split(inner);
        let course = labelled("Course", form.course_label.clone());
        frame.render_widget(Paragraph::new(course), chunks[0]);

        let items: Vec<ListItem> = form
            .options
            .iter()
            .map(|option| ListItem::new(option.label.clone()))
            .collect();
        self.render_list(frame, chunks[1], items, form.selected, Block::default());
        let hint = "Enter to assign • Esc to cancel";
        self.draw_form_hint(frame, chunks[2], form.error.as_deref(), hint);
    }

    fn draw_confirm_remove(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmRemoveFaculty) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Confirm Removal").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!("Remove {} from {}?", confirm.faculty_name, confirm.course_label)),
            Line::from("The course will show as unassigned."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_bulk_assign(&self, frame: &mut Frame, area: Rect, state: &BulkAssignState) {
        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!("Assign Courses to {}", state.faculty_name))
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        if state.items.is_empty() {
            let empty = Paragraph::new("No courses available for this faculty member.");
            frame.render_widget(empty, chunks[0]);
        } else {
            let items: Vec<ListItem> = state
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let checkbox = if state.is_checked(index) { "[x]" } else { "[ ]" };
                    ListItem::new(format!("{checkbox} {}", item.label))
                })
                .collect();
            self.render_list(frame, chunks[0], items, state.selected, Block::default());
        }
        let hint = format!("{} selected • Space to toggle • Enter to assign", state.checked.len());
        self.draw_form_hint(frame, chunks[1], state.error.as_deref(), &hint);
    }

    fn draw_review_form(&self, frame: &mut Frame, area: Rect, form: &ReviewForm) {
        let popup_area = centered_rect(70, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Review Content").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            labelled("Content", form.title.clone()),
            Line::from(""),
            form.build_line("Verdict", ReviewField::Verdict),
            form.build_line("Comments", ReviewField::Comments),
            Line::from(""),
        ];
        lines.push(self.form_hint_line(form.error.as_deref(), SUBMIT_HINT));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        if form.active == ReviewField::Comments {
            let prefix = "Comments: ".len() as u16;
            frame.set_cursor_position((inner.x + prefix + form.value_len() as u16, inner.y + 3));
        }
    }

    fn draw_submit_form(&self, frame: &mut Frame, area: Rect, form: &SubmitContentForm) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Submit Content for Review").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let fields = [
            ("Title", SubmitField::Title),
            ("Description", SubmitField::Description),
            ("Type", SubmitField::Type),
            ("Course", SubmitField::Course),
        ];
        let mut lines: Vec<Line> = fields
            .iter()
            .map(|(name, field)| form.build_line(name, *field))
            .collect();
        lines.push(Line::from(""));
        lines.push(self.form_hint_line(form.error.as_deref(), SUBMIT_HINT));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        if let Some(row) = fields.iter().position(|(_, field)| *field == form.active) {
            if matches!(form.active, SubmitField::Title | SubmitField::Description) {
                let prefix = format!("{}: ", fields[row].0).len() as u16;
                let column = inner.x + prefix + form.value_len(form.active) as u16;
                frame.set_cursor_position((column, inner.y + row as u16));
            }
        }
    }

    fn draw_programme_form(&self, frame: &mut Frame, area: Rect, form: &ProgrammeForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Add Programme").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let fields = [
            ("Name", ProgrammeField::Name),
            ("Department", ProgrammeField::Department),
            ("Duration (years)", ProgrammeField::Duration),
        ];
        let mut lines: Vec<Line> = fields
            .iter()
            .map(|(name, field)| form.build_line(name, *field))
            .collect();
        lines.push(Line::from(""));
        let hint = "Enter to add • Tab to switch • Esc to cancel";
        lines.push(self.form_hint_line(form.error.as_deref(), hint));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        if let Some(row) = fields.iter().position(|(_, field)| *field == form.active) {
            let prefix = format!("{}: ", fields[row].0).len() as u16;
            let column = inner.x + prefix + form.value_len(form.active) as u16;
            frame.set_cursor_position((column, inner.y + row as u16));
        }
    }

    fn form_hint_line(&self, error: Option<&str>, hint: &str) -> Line<'static> {
        match error {
            Some(error) => {
                Line::from(Span::styled(error.to_string(), Style::default().fg(Color::Red)))
            }
            None => Line::from(Span::styled(hint.to_string(), Style::default().fg(Color::Gray))),
        }
    }

    fn draw_form_hint(&self, frame: &mut Frame, area: Rect, error: Option<&str>, hint: &str) {
        frame.render_widget(Paragraph::new(self.form_hint_line(error, hint)), area);
    }

    fn draw_message(&self, frame: &mut Frame, area: Rect, block: Block, message: &str) {
        let paragraph = Paragraph::new(message.to_string())
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        items: Vec<ListItem>,
        selected: usize,
        block: Block,
    ) {
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::data::builtin_dataset;

    /// Sink that shares its history with the test.
    struct Recorder(Rc<RefCell<Vec<Intent>>>);

    impl IntentSink for Recorder {
        fn dispatch(&mut self, intent: Intent) -> Result<()> {
            self.0.borrow_mut().push(intent);
            Ok(())
        }
    }

    fn app() -> (App, Rc<RefCell<Vec<Intent>>>) {
        let history = Rc::new(RefCell::new(Vec::new()));
        let app = App::new(
            builtin_dataset(),
            Config::default(),
            Source::Builtin,
            Box::new(Recorder(Rc::clone(&history))),
        );
        (app, history)
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert!(!app.handle_key(*key).unwrap());
        }
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn assign_and_remove_faculty_from_courses_page() {
        let (mut app, history) = app();
        // Admin portal, fourth page after the dashboard is Courses.
        press(&mut app, &[KeyCode::Enter, KeyCode::Tab, KeyCode::Tab, KeyCode::Tab, KeyCode::Tab]);
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Down]);

        press(&mut app, &[KeyCode::Char('-')]);
        assert!(matches!(app.mode, Mode::Normal));
        assert!(app.status.as_ref().is_some_and(|s| s.text.contains("CS501")));

        press(&mut app, &[KeyCode::Char('a'), KeyCode::Enter]);
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.data.courses[7].faculty_id.as_deref(), Some("1"));

        press(&mut app, &[KeyCode::Char('-'), KeyCode::Char('y')]);
        assert!(!app.data.courses[7].is_assigned());
        assert_eq!(history.borrow().len(), 2);
    }

    #[test]
    fn bulk_assign_needs_a_selection() {
        let (mut app, history) = app();
        press(
            &mut app,
            &[KeyCode::Enter, KeyCode::Tab, KeyCode::Tab, KeyCode::Down, KeyCode::Down],
        );
        press(&mut app, &[KeyCode::Char('b'), KeyCode::Enter]);
        assert!(matches!(app.mode, Mode::BulkAssigning(_)));
        assert!(history.borrow().is_empty());

        // CS501 is the last course Michael Brown can take.
        press(&mut app, &[KeyCode::End, KeyCode::Char(' '), KeyCode::Enter]);
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.data.courses[7].faculty_id.as_deref(), Some("3"));
    }

    #[test]
    fn review_goes_to_the_sink_only() {
        let (mut app, history) = app();
        // Admin portal, Content Review is the last page.
        press(&mut app, &[KeyCode::Enter, KeyCode::BackTab, KeyCode::Char('r')]);
        assert!(matches!(app.mode, Mode::Reviewing(_)));
        press(&mut app, &[KeyCode::Right, KeyCode::Tab, KeyCode::Char('n'), KeyCode::Enter]);
        assert!(matches!(app.mode, Mode::Normal));

        let history = history.borrow();
        match &history[..] {
            [Intent::ReviewContent {
                content_id,
                comments,
                reviewed_by,
                ..
            }] => {
                assert_eq!(content_id, "2");
                assert_eq!(comments, "n");
                assert_eq!(reviewed_by, "admin1");
            }
            other => panic!("unexpected intents {other:?}"),
        }
        assert_eq!(app.data, builtin_dataset());
    }

    #[test]
    fn programme_search_filters_live() {
        let (mut app, _) = app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Tab, KeyCode::Char('f')]);
        press(
            &mut app,
            &[KeyCode::Char('m'), KeyCode::Char('e'), KeyCode::Char('c'), KeyCode::Enter],
        );
        let Screen::Portal(portal) = &app.screen else {
            panic!("expected portal");
        };
        let PageState::Programmes(page) = &portal.state else {
            panic!("expected programmes page");
        };
        assert_eq!(page.visible(&app.data).len(), 1);
        assert!(render(&app).contains("Mechanical Engineering"));
    }

    #[test]
    fn every_page_renders() {
        for (index, role) in Role::ALL.iter().enumerate() {
            let (mut app, _) = app();
            for _ in 0..index {
                press(&mut app, &[KeyCode::Down]);
            }
            press(&mut app, &[KeyCode::Enter]);
            for page in PortalScreen::new(*role).pages() {
                let screen = render(&app);
                assert!(
                    screen.contains(page.title()),
                    "{} missing for {}",
                    page.title(),
                    role.label()
                );
                press(&mut app, &[KeyCode::Tab]);
            }
        }
    }

    #[test]
    fn timetable_shows_scoped_slots() {
        let (mut app, _) = app();
        press(&mut app, &[KeyCode::Enter]);
        for _ in 0..5 {
            press(&mut app, &[KeyCode::Tab]);
        }
        press(&mut app, &[KeyCode::Char('p')]);
        for _ in 0..5 {
            press(&mut app, &[KeyCode::Char('s')]);
        }
        let screen = render(&app);
        assert!(screen.contains("CS301 LH-101"));
        assert!(screen.contains("CS302 LH-102"));
    }

    #[test]
    fn quitting_from_home() {
        let (mut app, _) = app();
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());
    }
}
