//! Student roll projections: who is enrolled where, grouped by year or by
//! current semester.

use std::collections::BTreeMap;

use crate::models::Student;

use super::query::{filter_by_field, group_by, Filter};
use super::semester::{student_semester, SemesterPolicy};

pub fn students_for_programme<'a>(
    students: &'a [Student],
    programme_name: &str,
) -> Vec<&'a Student> {
    filter_by_field(students, |s| s.programme.as_str(), &Filter::Only(programme_name))
}

pub fn students_by_year<'a>(students: &[&'a Student]) -> BTreeMap<u32, Vec<&'a Student>> {
    group_by(students.iter().copied(), |s| s.year)
}

/// Students keyed by their current semester. With a selected semester only
/// that group is kept, and nothing at all if no student is in it.
pub fn students_by_semester<'a>(
    students: &[&'a Student],
    policy: SemesterPolicy,
    selected: Option<u32>,
) -> BTreeMap<u32, Vec<&'a Student>> {
    let mut grouped = group_by(students.iter().copied(), |s| student_semester(s, policy));
    match selected {
        None => grouped,
        Some(semester) => grouped
            .remove_entry(&semester)
            .into_iter()
            .collect(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentStats {
    pub total_students: usize,
    pub year_distribution: BTreeMap<u32, usize>,
    pub semester_distribution: BTreeMap<u32, usize>,
}

pub fn student_stats(
    students: &[Student],
    programme_name: &str,
    policy: SemesterPolicy,
) -> StudentStats {
    let enrolled = students_for_programme(students, programme_name);
    StudentStats {
        total_students: enrolled.len(),
        year_distribution: counts(students_by_year(&enrolled)),
        semester_distribution: counts(students_by_semester(&enrolled, policy, None)),
    }
}

fn counts(groups: BTreeMap<u32, Vec<&Student>>) -> BTreeMap<u32, usize> {
    groups
        .into_iter()
        .map(|(key, members)| (key, members.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_dataset;

    #[test]
    fn cse_roll() {
        let data = builtin_dataset();
        let cse = students_for_programme(&data.students, "Computer Science Engineering");
        let names: Vec<_> = cse.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Alice Wilson", "Bob Davis"]);

        let by_year = students_by_year(&cse);
        assert_eq!(by_year.keys().copied().collect::<Vec<_>>(), [3]);
    }

    #[test]
    fn semester_grouping_with_selection() {
        let data = builtin_dataset();
        let cse = students_for_programme(&data.students, "Computer Science Engineering");

        let all = students_by_semester(&cse, SemesterPolicy::IdParity, None);
        assert_eq!(all[&6][0].name, "Alice Wilson");
        assert_eq!(all[&5][0].name, "Bob Davis");

        let only_five = students_by_semester(&cse, SemesterPolicy::IdParity, Some(5));
        assert_eq!(only_five.len(), 1);
        assert!(students_by_semester(&cse, SemesterPolicy::IdParity, Some(1)).is_empty());
    }

    #[test]
    fn distributions() {
        let data = builtin_dataset();
        let stats =
            student_stats(&data.students, "Computer Science Engineering", SemesterPolicy::OddTerm);
        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.year_distribution.get(&3), Some(&2));
        assert_eq!(stats.semester_distribution.get(&5), Some(&2));

        let empty = student_stats(&data.students, "Astronomy", SemesterPolicy::IdParity);
        assert_eq!(empty, StudentStats::default());
    }
}
