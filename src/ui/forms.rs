use std::collections::HashSet;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::intents::{Intent, ReviewVerdict};
use crate::models::{AcademicContent, ContentType, Course, Dataset, Faculty};
use crate::views::{courses_available_for_faculty, faculty_for_course};

/// An entry of a pick list: the id sent with the intent and what is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Choice {
    pub(crate) id: String,
    pub(crate) label: String,
}

fn course_choice(course: &Course) -> Choice {
    Choice {
        id: course.id.clone(),
        label: format!("{} {}", course.code, course.name),
    }
}

/// Render a free-text field as `Name: value`.
fn text_line(field_name: &str, value: &str, is_active: bool, required: bool) -> Line<'static> {
    let display = if !value.is_empty() {
        value.to_string()
    } else if required {
        "<required>".to_string()
    } else {
        "<optional>".to_string()
    };

    let style = if is_active {
        Style::default().fg(Color::Yellow)
    } else if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    Line::from(vec![Span::raw(format!("{field_name}: ")), Span::styled(display, style)])
}

/// Render a pick field as `Name: < value >`.
fn choice_line(field_name: &str, value: &str, is_active: bool) -> Line<'static> {
    let style = if is_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(format!("{field_name}: ")),
        Span::styled(format!("< {value} >"), style),
    ])
}

fn step(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

/// Pick a teacher for one course.
#[derive(Clone)]
pub(crate) struct AssignFacultyForm {
    pub(crate) course_id: String,
    pub(crate) course_label: String,
    pub(crate) options: Vec<Choice>,
    pub(crate) selected: usize,
    pub(crate) error: Option<String>,
}

impl AssignFacultyForm {
    /// Options list every faculty member; the current teacher, if any, starts
    /// selected.
    pub(crate) fn for_course(course: &Course, faculties: &[Faculty]) -> Self {
        let options: Vec<Choice> = faculties
            .iter()
            .map(|faculty| Choice {
                id: faculty.id.clone(),
                label: faculty.to_string(),
            })
            .collect();
        let selected = course
            .faculty_id
            .as_deref()
            .and_then(|id| options.iter().position(|option| option.id == id))
            .unwrap_or(0);
        Self {
            course_id: course.id.clone(),
            course_label: format!("{} {}", course.code, course.name),
            options,
            selected,
            error: None,
        }
    }

    pub(crate) fn cycle(&mut self, forward: bool) {
        self.selected = step(self.selected, self.options.len(), forward);
        self.error = None;
    }

    pub(crate) fn to_intent(&self, data: &Dataset) -> Result<Intent> {
        let faculty_id = self.options.get(self.selected).map_or("", |option| option.id.as_str());
        Ok(Intent::assign_faculty(data, &self.course_id, faculty_id)?)
    }
}

#[derive(Clone)]
pub(crate) struct ConfirmRemoveFaculty {
    pub(crate) course_id: String,
    pub(crate) course_label: String,
    pub(crate) faculty_name: String,
}

impl ConfirmRemoveFaculty {
    pub(crate) fn from(course: &Course, faculties: &[Faculty]) -> Self {
        Self {
            course_id: course.id.clone(),
            course_label: format!("{} {}", course.code, course.name),
            faculty_name: faculty_for_course(faculties, course).name().to_string(),
        }
    }
}

/// Multi-select of courses to hand to one faculty member.
pub(crate) struct BulkAssignState {
    pub(crate) faculty_id: String,
    pub(crate) faculty_name: String,
    pub(crate) items: Vec<Choice>,
    pub(crate) selected: usize,
    pub(crate) checked: HashSet<String>,
    pub(crate) error: Option<String>,
}

impl BulkAssignState {
    pub(crate) fn for_faculty(data: &Dataset, faculty: &Faculty) -> Self {
        let items = courses_available_for_faculty(&data.courses, &data.programmes, faculty)
            .into_iter()
            .map(|course| {
                let mut choice = course_choice(course);
                let owner = faculty_for_course(&data.faculties, course);
                choice.label = format!("{} ({owner})", choice.label);
                choice
            })
            .collect();
        Self {
            faculty_id: faculty.id.clone(),
            faculty_name: faculty.name.clone(),
            items,
            selected: 0,
            checked: HashSet::new(),
            error: None,
        }
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, last) as usize;
    }

    pub(crate) fn is_checked(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(|item| self.checked.contains(&item.id))
    }

    pub(crate) fn toggle_current_selection(&mut self) {
        if let Some(item) = self.items.get(self.selected) {
            if !self.checked.remove(&item.id) {
                self.checked.insert(item.id.clone());
            }
            self.error = None;
        }
    }

    /// Checked course ids in list order.
    pub(crate) fn checked_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| self.checked.contains(&item.id))
            .map(|item| item.id.clone())
            .collect()
    }

    pub(crate) fn to_intent(&self, data: &Dataset) -> Result<Intent> {
        Ok(Intent::bulk_assign(data, &self.faculty_id, &self.checked_ids())?)
    }
}

/// Fields of the review dialog.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum ReviewField {
    #[default]
    Verdict,
    Comments,
}

#[derive(Clone)]
pub(crate) struct ReviewForm {
    pub(crate) content_id: String,
    pub(crate) title: String,
    pub(crate) verdict: usize,
    pub(crate) comments: String,
    pub(crate) active: ReviewField,
    pub(crate) error: Option<String>,
}

impl ReviewForm {
    /// Every review starts from "approved" with no comments.
    pub(crate) fn for_content(content: &AcademicContent) -> Self {
        Self {
            content_id: content.id.clone(),
            title: content.title.clone(),
            verdict: 0,
            comments: String::new(),
            active: ReviewField::Verdict,
            error: None,
        }
    }

    pub(crate) fn verdict(&self) -> ReviewVerdict {
        ReviewVerdict::ALL[self.verdict % ReviewVerdict::ALL.len()]
    }

    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            ReviewField::Verdict => ReviewField::Comments,
            ReviewField::Comments => ReviewField::Verdict,
        };
    }

    pub(crate) fn cycle(&mut self, forward: bool) {
        if self.active == ReviewField::Verdict {
            self.verdict = step(self.verdict, ReviewVerdict::ALL.len(), forward);
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if self.active == ReviewField::Comments && !ch.is_control() {
            self.comments.push(ch);
            true
        } else {
            false
        }
    }

    pub(crate) fn backspace(&mut self) {
        if self.active == ReviewField::Comments {
            self.comments.pop();
        }
    }

    pub(crate) fn build_line(&self, field_name: &str, field: ReviewField) -> Line<'static> {
        match field {
            ReviewField::Verdict => choice_line(
                field_name,
                self.verdict().status().label(),
                self.active == ReviewField::Verdict,
            ),
            ReviewField::Comments => {
                text_line(field_name, &self.comments, self.active == ReviewField::Comments, false)
            }
        }
    }

    pub(crate) fn value_len(&self) -> usize {
        self.comments.chars().count()
    }

    pub(crate) fn to_intent(
        &self,
        data: &Dataset,
        reviewer: &str,
        today: NaiveDate,
    ) -> Result<Intent> {
        Ok(Intent::review_content(
            data,
            &self.content_id,
            self.verdict(),
            &self.comments,
            reviewer,
            today,
        )?)
    }
}

/// Fields of the content submission dialog.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum SubmitField {
    #[default]
    Title,
    Description,
    Type,
    Course,
}

#[derive(Clone)]
pub(crate) struct SubmitContentForm {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) content_type: usize,
    pub(crate) course: usize,
    pub(crate) courses: Vec<Choice>,
    pub(crate) active: SubmitField,
    pub(crate) error: Option<String>,
}

impl SubmitContentForm {
    /// Course choices are limited to what the faculty member teaches.
    pub(crate) fn for_courses(courses: &[&Course]) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            content_type: 0,
            course: 0,
            courses: courses.iter().map(|course| course_choice(course)).collect(),
            active: SubmitField::Title,
            error: None,
        }
    }

    pub(crate) fn content_type(&self) -> ContentType {
        ContentType::ALL[self.content_type % ContentType::ALL.len()]
    }

    pub(crate) fn toggle_field(&mut self, forward: bool) {
        const ORDER: [SubmitField; 4] = [
            SubmitField::Title,
            SubmitField::Description,
            SubmitField::Type,
            SubmitField::Course,
        ];
        let current = ORDER.iter().position(|field| *field == self.active).unwrap_or(0);
        self.active = ORDER[step(current, ORDER.len(), forward)];
    }

    pub(crate) fn cycle(&mut self, forward: bool) {
        match self.active {
            SubmitField::Type => {
                self.content_type = step(self.content_type, ContentType::ALL.len(), forward)
            }
            SubmitField::Course => self.course = step(self.course, self.courses.len(), forward),
            SubmitField::Title | SubmitField::Description => {}
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            SubmitField::Title => self.title.push(ch),
            SubmitField::Description => self.description.push(ch),
            SubmitField::Type | SubmitField::Course => return false,
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            SubmitField::Title => {
                self.title.pop();
            }
            SubmitField::Description => {
                self.description.pop();
            }
            SubmitField::Type | SubmitField::Course => {}
        }
    }

    pub(crate) fn build_line(&self, field_name: &str, field: SubmitField) -> Line<'static> {
        let is_active = self.active == field;
        match field {
            SubmitField::Title => text_line(field_name, &self.title, is_active, true),
            SubmitField::Description => text_line(field_name, &self.description, is_active, false),
            SubmitField::Type => choice_line(field_name, self.content_type().label(), is_active),
            SubmitField::Course => {
                let label = self
                    .courses
                    .get(self.course)
                    .map_or("No courses assigned", |choice| choice.label.as_str());
                choice_line(field_name, label, is_active)
            }
        }
    }

    pub(crate) fn value_len(&self, field: SubmitField) -> usize {
        match field {
            SubmitField::Title => self.title.chars().count(),
            SubmitField::Description => self.description.chars().count(),
            SubmitField::Type | SubmitField::Course => 0,
        }
    }

    pub(crate) fn to_intent(
        &self,
        data: &Dataset,
        faculty_id: &str,
        today: NaiveDate,
    ) -> Result<Intent> {
        let course_id = self.courses.get(self.course).map_or("", |choice| choice.id.as_str());
        Ok(Intent::submit_content(
            data,
            faculty_id,
            &self.title,
            &self.description,
            self.content_type(),
            course_id,
            today,
        )?)
    }
}

/// Fields of the add programme dialog.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum ProgrammeField {
    #[default]
    Name,
    Department,
    Duration,
}

#[derive(Clone)]
pub(crate) struct ProgrammeForm {
    pub(crate) name: String,
    pub(crate) department: String,
    pub(crate) duration: String,
    pub(crate) active: ProgrammeField,
    pub(crate) error: Option<String>,
}

impl Default for ProgrammeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            department: String::new(),
            duration: "3".to_string(),
            active: ProgrammeField::Name,
            error: None,
        }
    }
}

impl ProgrammeForm {
    pub(crate) fn toggle_field(&mut self, forward: bool) {
        const ORDER: [ProgrammeField; 3] = [
            ProgrammeField::Name,
            ProgrammeField::Department,
            ProgrammeField::Duration,
        ];
        let current = ORDER.iter().position(|field| *field == self.active).unwrap_or(0);
        self.active = ORDER[step(current, ORDER.len(), forward)];
    }

    /// Append a character to the active field; duration only takes digits.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            ProgrammeField::Name if !ch.is_control() => self.name.push(ch),
            ProgrammeField::Department if !ch.is_control() => self.department.push(ch),
            ProgrammeField::Duration if ch.is_ascii_digit() => self.duration.push(ch),
            _ => return false,
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            ProgrammeField::Name => {
                self.name.pop();
            }
            ProgrammeField::Department => {
                self.department.pop();
            }
            ProgrammeField::Duration => {
                self.duration.pop();
            }
        }
    }

    pub(crate) fn build_line(&self, field_name: &str, field: ProgrammeField) -> Line<'static> {
        let value = match field {
            ProgrammeField::Name => &self.name,
            ProgrammeField::Department => &self.department,
            ProgrammeField::Duration => &self.duration,
        };
        text_line(field_name, value, self.active == field, true)
    }

    pub(crate) fn value_len(&self, field: ProgrammeField) -> usize {
        match field {
            ProgrammeField::Name => self.name.chars().count(),
            ProgrammeField::Department => self.department.chars().count(),
            ProgrammeField::Duration => self.duration.chars().count(),
        }
    }

    pub(crate) fn to_intent(&self) -> Result<Intent> {
        let raw = self.duration.trim();
        if raw.is_empty() {
            return Err(anyhow!("Duration is required."));
        }
        let duration = raw
            .parse::<u32>()
            .context("Duration must be a whole number of years.")?;
        Ok(Intent::add_programme(&self.name, &self.department, duration)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_dataset;
    use crate::error::IntentError;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()
    }

    #[test]
    fn assign_form_starts_on_current_teacher() {
        let data = builtin_dataset();
        let form = AssignFacultyForm::for_course(&data.courses[3], &data.faculties);
        assert_eq!(form.options[form.selected].id, "2");

        let mut unassigned = AssignFacultyForm::for_course(&data.courses[7], &data.faculties);
        assert_eq!(unassigned.selected, 0);
        unassigned.cycle(false);
        assert_eq!(unassigned.selected, 2);
        assert_eq!(
            unassigned.to_intent(&data).unwrap(),
            Intent::AssignFaculty {
                course_id: "8".into(),
                faculty_id: "3".into()
            }
        );
    }

    #[test]
    fn bulk_assign_keeps_list_order() {
        let data = builtin_dataset();
        let mut state = BulkAssignState::for_faculty(&data, &data.faculties[2]);
        assert!(state.to_intent(&data).is_err());

        state.move_selection(2);
        state.toggle_current_selection();
        state.move_selection(-2);
        state.toggle_current_selection();
        assert_eq!(state.checked_ids(), ["5", "8"]);
        assert!(state.is_checked(0));
        assert!(!state.is_checked(1));
    }

    #[test]
    fn review_form_only_types_into_comments() {
        let data = builtin_dataset();
        let mut form = ReviewForm::for_content(&data.academic_content[1]);
        assert!(!form.push_char('x'));
        form.cycle(true);
        assert_eq!(form.verdict(), ReviewVerdict::Rejected);
        form.toggle_field();
        assert!(form.push_char('o'));
        assert!(form.push_char('k'));
        form.cycle(true);
        assert_eq!(form.verdict(), ReviewVerdict::Rejected);
        assert_eq!(form.value_len(), 2);
        assert!(form.to_intent(&data, "admin1", day()).is_ok());
    }

    #[test]
    fn submit_form_requires_title() {
        let data = builtin_dataset();
        let courses: Vec<&Course> = data
            .courses
            .iter()
            .filter(|c| c.faculty_id.as_deref() == Some("1"))
            .collect();
        let mut form = SubmitContentForm::for_courses(&courses);
        let err = form.to_intent(&data, "1", day()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<IntentError>(),
            Some(&IntentError::MissingField("Title"))
        );

        for ch in "Quiz".chars() {
            form.push_char(ch);
        }
        form.toggle_field(true);
        form.toggle_field(true);
        form.cycle(true);
        assert_eq!(form.content_type(), ContentType::Ppt);
        assert!(!form.push_char('z'));
        assert!(form.to_intent(&data, "1", day()).is_ok());
    }

    #[test]
    fn programme_form_validates_duration() {
        let mut form = ProgrammeForm::default();
        for ch in "Physics".chars() {
            form.push_char(ch);
        }
        form.toggle_field(true);
        for ch in "Science".chars() {
            form.push_char(ch);
        }
        form.toggle_field(true);
        assert!(!form.push_char('y'));
        form.push_char('0');
        assert_eq!(form.duration, "30");
        assert!(form.to_intent().is_err());

        form.backspace();
        assert!(form.to_intent().is_ok());
        form.duration.clear();
        assert_eq!(form.to_intent().unwrap_err().to_string(), "Duration is required.");
    }
}
