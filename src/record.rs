//! Records - the entities held by a [`RecordList`](crate::RecordList).
//!
//! A record only needs to expose three capabilities: a `name` to search and
//! sort by, an `age` to sort by, and a numeric `id` to look up. Everything
//! else on the type is opaque to the collection.
//!
//! ## Example
//!
//! ```ignore
//! use roster::{Record, RecordList};
//!
//! #[derive(Clone, PartialEq, Record)]
//! struct Member {
//!     pub name: String,
//!     pub age: u32,
//!     pub id: i64,
//!     pub team: String,
//! }
//! ```

use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::collection::Listing;

/// Capabilities a type needs to live in a [`RecordList`](crate::RecordList).
pub trait Record {
    /// Name used by substring search and `sort_by_name`.
    fn name(&self) -> &str;

    /// Age used by `sort_by_age`.
    fn age(&self) -> u32;

    /// Identifier used by numeric search. Not required to be unique.
    fn id(&self) -> i64;
}

/// A student entry: the record type managed by the `roster` binary.
///
/// The roll number is fixed at construction; name, age and grade can be
/// patched with [`StudentPatch`](crate::StudentPatch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, crate::Record)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub age: u32,
    #[record(id)]
    roll_number: i32,
    pub grade: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        roll_number: i32,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            roll_number,
            grade: grade.into(),
        }
    }

    pub fn roll_number(&self) -> i32 {
        self.roll_number
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Roll Number: {}", self.roll_number)?;
        writeln!(f, "Grade: {}", self.grade)
    }
}

impl Listing for Student {
    const HEADING: &'static str = "\t\t\tSTUDENTS";
    const EMPTY: &'static str = "No student to display.";
}

/// Keys accepted when reading a persisted student, compared ignoring ASCII case.
enum StudentField {
    Name,
    Age,
    RollNumber,
    Grade,
    Unknown,
}

impl StudentField {
    fn from_key(key: &str) -> Self {
        if key.eq_ignore_ascii_case("name") {
            StudentField::Name
        } else if key.eq_ignore_ascii_case("age") {
            StudentField::Age
        } else if key.eq_ignore_ascii_case("rollNumber") || key.eq_ignore_ascii_case("id") {
            StudentField::RollNumber
        } else if key.eq_ignore_ascii_case("grade") || key.eq_ignore_ascii_case("category") {
            StudentField::Grade
        } else {
            StudentField::Unknown
        }
    }
}

/// Reads a student object. When a field appears more than once, under any
/// casing or alias, the last value wins.
struct StudentVisitor;

impl<'de> Visitor<'de> for StudentVisitor {
    type Value = Student;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a student object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Student, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut name: Option<String> = None;
        let mut age: Option<u32> = None;
        let mut roll_number: Option<i32> = None;
        let mut grade: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match StudentField::from_key(&key) {
                StudentField::Name => {
                    name = Some(map.next_value()?);
                }
                StudentField::Age => {
                    age = Some(map.next_value()?);
                }
                StudentField::RollNumber => {
                    roll_number = Some(map.next_value()?);
                }
                StudentField::Grade => {
                    grade = Some(map.next_value()?);
                }
                StudentField::Unknown => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(Student {
            name: name.unwrap_or_default(),
            age: age.unwrap_or_default(),
            roll_number: roll_number.unwrap_or_default(),
            grade: grade.unwrap_or_default(),
        })
    }
}

impl<'de> Deserialize<'de> for Student {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StudentVisitor)
    }
}
