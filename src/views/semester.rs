//! Year/semester arithmetic shared by the admin and student views. Two
//! semesters per year: year `y` covers semesters `(y-1)*2 + 1` and `(y-1)*2 + 2`.

use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::models::{Programme, Student};

/// How a student's two semesters for the year collapse to one "current" one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemesterPolicy {
    /// Parity of the first character of the student id picks the semester.
    /// Matches the placement the admin student pages have always shown.
    #[default]
    IdParity,
    /// Everyone is in the first (odd) semester of their year.
    OddTerm,
    /// Everyone is in the second (even) semester of their year.
    EvenTerm,
}

pub fn year_to_semesters(year: u32) -> [u32; 2] {
    let base = year.saturating_sub(1).saturating_mul(2);
    [base.saturating_add(1), base.saturating_add(2)]
}

/// Semesters a programme spans, `1..=duration*2`.
pub fn semester_range(programme: &Programme) -> RangeInclusive<u32> {
    1..=programme.max_semester()
}

pub fn student_semester(student: &Student, policy: SemesterPolicy) -> u32 {
    let [odd, even] = year_to_semesters(student.year);
    match policy {
        SemesterPolicy::OddTerm => odd,
        SemesterPolicy::EvenTerm => even,
        SemesterPolicy::IdParity => match student.id.chars().next() {
            Some(first) if u32::from(first) % 2 == 1 => even,
            _ => odd,
        },
    }
}

/// Semesters a new student in `year` of `programme_name` could join; empty
/// when the programme is unknown or no year is chosen.
pub fn available_semesters(programmes: &[Programme], programme_name: &str, year: u32) -> Vec<u32> {
    if year == 0 || !programmes.iter().any(|p| p.name == programme_name) {
        return Vec::new();
    }
    year_to_semesters(year).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, year: u32) -> Student {
        Student {
            id: id.to_string(),
            name: "Test".to_string(),
            roll_number: "T001".to_string(),
            programme: "Computer Science Engineering".to_string(),
            year,
            email: "t@student.university.edu".to_string(),
        }
    }

    #[test]
    fn year_mapping() {
        assert_eq!(year_to_semesters(1), [1, 2]);
        assert_eq!(year_to_semesters(3), [5, 6]);
        assert_eq!(year_to_semesters(4), [7, 8]);
    }

    #[test]
    fn huge_years_saturate() {
        assert_eq!(year_to_semesters(3_000_000_000), [u32::MAX, u32::MAX]);
        assert_eq!(year_to_semesters(u32::MAX), [u32::MAX, u32::MAX]);
        let s = student("1", u32::MAX);
        assert_eq!(student_semester(&s, SemesterPolicy::IdParity), u32::MAX);
        assert_eq!(student_semester(&s, SemesterPolicy::OddTerm), u32::MAX);
    }

    #[test]
    fn id_parity_matches_char_code() {
        // '1' is 49, odd, so the second semester of the year.
        assert_eq!(student_semester(&student("1", 3), SemesterPolicy::IdParity), 6);
        // '2' is 50, even.
        assert_eq!(student_semester(&student("2", 3), SemesterPolicy::IdParity), 5);
        assert_eq!(student_semester(&student("", 2), SemesterPolicy::IdParity), 3);
    }

    #[test]
    fn fixed_term_policies() {
        let s = student("1", 2);
        assert_eq!(student_semester(&s, SemesterPolicy::OddTerm), 3);
        assert_eq!(student_semester(&s, SemesterPolicy::EvenTerm), 4);
    }

    #[test]
    fn available_semesters_need_a_known_programme() {
        let programmes = vec![Programme {
            id: "1".into(),
            name: "Computer Science Engineering".into(),
            department: "Engineering".into(),
            duration: 4,
            total_students: 120,
        }];
        assert_eq!(
            available_semesters(&programmes, "Computer Science Engineering", 2),
            [3, 4]
        );
        assert!(available_semesters(&programmes, "Astrology", 2).is_empty());
        assert!(available_semesters(&programmes, "Computer Science Engineering", 0).is_empty());
        assert_eq!(semester_range(&programmes[0]), 1..=8);
    }
}
