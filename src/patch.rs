//! Patches - in-place, field-by-field record updates.

use crate::record::Student;

/// A set of optional field changes applicable to a record of type `T`.
pub trait Patch<T> {
    /// Apply the provided fields to `record`. Returns true if any field changed.
    fn apply_to(self, record: &mut T) -> bool;
}

impl<T, F> Patch<T> for F
where
    F: FnOnce(&mut T),
{
    fn apply_to(self, record: &mut T) -> bool {
        self(record);
        true
    }
}

/// Field updates for a [`Student`]. `None` and empty strings leave the
/// field untouched. The roll number is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub grade: Option<String>,
}

impl StudentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        provided(&self.name).is_none() && self.age.is_none() && provided(&self.grade).is_none()
    }
}

fn provided(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|v| !v.is_empty())
}

impl Patch<Student> for StudentPatch {
    fn apply_to(self, record: &mut Student) -> bool {
        let mut changed = false;

        if let Some(name) = provided(&self.name) {
            changed |= record.name != *name;
            record.name.clone_from(name);
        }
        if let Some(age) = self.age {
            changed |= record.age != age;
            record.age = age;
        }
        if let Some(grade) = provided(&self.grade) {
            changed |= record.grade != *grade;
            record.grade.clone_from(grade);
        }

        changed
    }
}
