//! Matriculation exam grades and the admission points they are worth.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseGradeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    L,
    E,
    M,
    C,
    B,
    A,
    I,
}

impl Grade {
    pub const ALL: [Grade; 7] = [
        Grade::L,
        Grade::E,
        Grade::M,
        Grade::C,
        Grade::B,
        Grade::A,
        Grade::I,
    ];

    pub fn points(self) -> u32 {
        match self {
            Grade::L => 7,
            Grade::E => 6,
            Grade::M => 5,
            Grade::C => 4,
            Grade::B => 3,
            Grade::A => 2,
            Grade::I => 0,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::L => "L",
            Grade::E => "E",
            Grade::M => "M",
            Grade::C => "C",
            Grade::B => "B",
            Grade::A => "A",
            Grade::I => "I",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|g| g.letter().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseGradeError(s.to_string()))
    }
}

/// Subjects offered in the grade form, in display order.
pub const SUBJECTS: [&str; 5] = [
    "Mother tongue",
    "Mathematics",
    "Foreign language",
    "Science",
    "Humanities",
];

/// Sum of points over the entered grades. Blank entries count as zero.
pub fn total_points(grades: &[Option<Grade>]) -> u32 {
    grades.iter().flatten().map(|g| g.points()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_scale() {
        let points: Vec<u32> = Grade::ALL.iter().map(|g| g.points()).collect();
        assert_eq!(points, vec![7, 6, 5, 4, 3, 2, 0]);
    }

    #[test]
    fn test_parse_letters() {
        assert_eq!("l".parse::<Grade>(), Ok(Grade::L));
        assert_eq!(" C ".parse::<Grade>(), Ok(Grade::C));
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = "X".parse::<Grade>().unwrap_err();
        assert_eq!(err, ParseGradeError("X".to_string()));
        assert_eq!(err.to_string(), "Unknown grade: \"X\"");
    }

    #[test]
    fn test_total_skips_blanks() {
        let grades = [Some(Grade::L), None, Some(Grade::M), Some(Grade::I), None];
        assert_eq!(total_points(&grades), 12);
    }

    #[test]
    fn test_total_of_nothing_is_zero() {
        assert_eq!(total_points(&[None; SUBJECTS.len()]), 0);
    }
}
