//! Academic content submissions: the admin review queue and each faculty
//! member's own library.

use crate::models::{AcademicContent, ApprovalStatus, ContentType, Course, Faculty};

use super::query::{cross_reference_lookup, filter_by_field, sort_by_date_descending, Filter};

pub const UNKNOWN_COURSE: &str = "Unknown Course";
pub const UNKNOWN_FACULTY: &str = "Unknown Faculty";

/// Admin review queue: items in `status`, most recently submitted first.
pub fn review_queue<'a>(
    content: &'a [AcademicContent],
    status: &Filter<ApprovalStatus>,
) -> Vec<&'a AcademicContent> {
    sort_by_date_descending(
        filter_by_field(content, |c| c.approval_status, status),
        |c| c.submitted_at.as_str(),
    )
}

/// Filters of the faculty content library. The default shows everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentQuery {
    pub course_id: Option<String>,
    pub content_type: Filter<ContentType>,
    pub status: Filter<ApprovalStatus>,
    /// Case-insensitive match on title or description, taken as typed; empty
    /// matches all.
    pub search: String,
}

impl ContentQuery {
    pub fn matches(&self, item: &AcademicContent) -> bool {
        if let Some(course_id) = &self.course_id {
            if &item.course_id != course_id {
                return false;
            }
        }
        if !self.content_type.matches(&item.content_type)
            || !self.status.matches(&item.approval_status)
        {
            return false;
        }
        let needle = self.search.to_lowercase();
        needle.is_empty()
            || item.title.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle)
    }
}

/// A faculty member's own submissions passing `query`, newest first.
pub fn faculty_content<'a>(
    content: &'a [AcademicContent],
    faculty_id: &str,
    query: &ContentQuery,
) -> Vec<&'a AcademicContent> {
    let own = filter_by_field(content, |c| c.faculty_id.as_str(), &Filter::Only(faculty_id));
    sort_by_date_descending(
        own.into_iter().filter(|item| query.matches(item)),
        |c| c.submitted_at.as_str(),
    )
}

pub fn published_count<'a, I>(content: I) -> usize
where
    I: IntoIterator<Item = &'a AcademicContent>,
{
    content.into_iter().filter(|c| c.is_published).count()
}

pub fn course_name<'a>(courses: &'a [Course], course_id: &str) -> &'a str {
    cross_reference_lookup(courses, |c| c.id.as_str(), course_id)
        .map_or(UNKNOWN_COURSE, |c| c.name.as_str())
}

pub fn faculty_name<'a>(faculties: &'a [Faculty], faculty_id: &str) -> &'a str {
    cross_reference_lookup(faculties, |f| f.id.as_str(), faculty_id)
        .map_or(UNKNOWN_FACULTY, |f| f.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_dataset;

    fn ids(items: &[&AcademicContent]) -> Vec<String> {
        items.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn review_queue_defaults_and_ordering() {
        let data = builtin_dataset();
        let pending = review_queue(&data.academic_content, &Filter::Only(ApprovalStatus::Pending));
        assert_eq!(ids(&pending), ["2"]);

        let all = review_queue(&data.academic_content, &Filter::All);
        assert_eq!(ids(&all), ["4", "3", "2", "1"]);
    }

    #[test]
    fn faculty_library_filters() {
        let data = builtin_dataset();
        let mut query = ContentQuery::default();
        assert_eq!(faculty_content(&data.academic_content, "1", &query).len(), 4);

        query.content_type = Filter::Only(ContentType::Ppt);
        assert_eq!(ids(&faculty_content(&data.academic_content, "1", &query)), ["3", "1"]);

        query.content_type = Filter::All;
        query.course_id = Some("1".to_string());
        query.search = "ARRAYS".to_string();
        assert_eq!(ids(&faculty_content(&data.academic_content, "1", &query)), ["2"]);

        assert!(faculty_content(&data.academic_content, "3", &ContentQuery::default()).is_empty());
    }

    #[test]
    fn search_term_is_matched_as_typed() {
        let data = builtin_dataset();
        let mut query = ContentQuery {
            search: "introduction".to_string(),
            ..ContentQuery::default()
        };
        assert_eq!(ids(&faculty_content(&data.academic_content, "1", &query)), ["1"]);

        // The title starts with the word, so a leading space no longer matches.
        query.search = " introduction".to_string();
        assert!(faculty_content(&data.academic_content, "1", &query).is_empty());

        query.search = "arrays ".to_string();
        assert_eq!(ids(&faculty_content(&data.academic_content, "1", &query)), ["2"]);
    }

    #[test]
    fn name_fallbacks() {
        let data = builtin_dataset();
        assert_eq!(course_name(&data.courses, "3"), "Database Systems");
        assert_eq!(course_name(&data.courses, "x"), UNKNOWN_COURSE);
        assert_eq!(faculty_name(&data.faculties, "x"), UNKNOWN_FACULTY);
        assert_eq!(published_count(&data.academic_content), 1);
    }
}
