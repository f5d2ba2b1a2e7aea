//! RecordList - an ordered, owned, in-memory collection of records.
//!
//! Insertion order is kept until one of the sorts runs; the sorted order then
//! sticks until the next sort. Both sorts are stable.
//!
//! ## Example
//!
//! ```ignore
//! use roster::{RecordList, Student};
//!
//! let mut students = RecordList::new();
//! students.add(Student::new("Abel", 20, 1, "A"));
//! students.add(Student::new("Bea", 19, 2, "B"));
//!
//! students.sort_by_age();
//! let found: Vec<_> = students.search("ea").collect();
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::patch::Patch;
use crate::record::Record;
use crate::search::{Query, Search};

/// Text a record type uses when a [`RecordList`] of it is displayed.
pub trait Listing: fmt::Display {
    /// Heading written before the records.
    const HEADING: &'static str;

    /// Line written instead of the records when the list is empty.
    const EMPTY: &'static str;
}

/// An ordered collection of records of type `T`.
///
/// Serializes as a plain JSON array in current order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordList<T> {
    records: Vec<T>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordList<T> {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record. Duplicate ids are allowed.
    pub fn add(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn into_vec(self) -> Vec<T> {
        self.records
    }

    /// Apply `patch` to the record at `index`. Returns false if out of range.
    pub fn update_at<P: Patch<T>>(&mut self, index: usize, patch: P) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                patch.apply_to(record);
                true
            }
            None => false,
        }
    }
}

impl<T: PartialEq> RecordList<T> {
    /// Remove the first record equal to `record`. Returns whether one was removed.
    pub fn remove(&mut self, record: &T) -> bool {
        match self.position(record) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Apply `patch` to the first record equal to `target`. Returns whether
    /// one was found.
    pub fn update<P: Patch<T>>(&mut self, target: &T, patch: P) -> bool {
        match self.position(target) {
            Some(index) => self.update_at(index, patch),
            None => false,
        }
    }

    pub fn contains(&self, record: &T) -> bool {
        self.records.contains(record)
    }

    fn position(&self, record: &T) -> Option<usize> {
        self.records.iter().position(|r| r == record)
    }
}

impl<T: Record> RecordList<T> {
    /// Stable ascending sort by age.
    pub fn sort_by_age(&mut self) {
        self.records.sort_by_key(|r| r.age());
    }

    /// Stable ascending sort by name. Names compare ignoring case first; names
    /// differing only in case put the lowercase spelling first.
    pub fn sort_by_name(&mut self) {
        self.records.sort_by(|a, b| compare_names(a.name(), b.name()));
    }

    /// Records whose id equals `query` when it is an integer and such a record
    /// exists; otherwise records whose name contains `query`.
    pub fn search<'a, 'q>(&'a self, query: &'q str) -> Search<'a, 'q, T> {
        Search::new(&self.records, Query::parse(query))
    }

    /// Like [`search`](Self::search) with an already parsed query.
    pub fn search_query<'a, 'q>(&'a self, query: Query<'q>) -> Search<'a, 'q, T> {
        Search::new(&self.records, query)
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

impl<T: Listing> RecordList<T> {
    /// Write every record to `out` in current order, or [`Listing::EMPTY`]
    /// when there is nothing to show.
    pub fn display_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.records.is_empty() {
            writeln!(out, "{}", T::EMPTY)?;
            return Ok(());
        }

        writeln!(out, "{}", T::HEADING)?;
        for record in &self.records {
            writeln!(out, "{}", record)?;
        }
        Ok(())
    }
}

impl<T> From<Vec<T>> for RecordList<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T> FromIterator<T> for RecordList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for RecordList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<T> IntoIterator for RecordList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Student, StudentPatch};

    fn abel() -> Student {
        Student::new("Abel", 20, 1, "A")
    }

    fn bea() -> Student {
        Student::new("Bea", 19, 2, "B")
    }

    fn names(list: &RecordList<Student>) -> Vec<&str> {
        list.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut list = RecordList::new();
        list.add(bea());
        list.add(abel());
        list.add(bea());
        assert_eq!(names(&list), vec!["Bea", "Abel", "Bea"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn sort_by_age_is_stable() {
        let mut list: RecordList<Student> = vec![
            Student::new("Cy", 20, 3, "C"),
            abel(),
            bea(),
            Student::new("Dee", 19, 4, "D"),
        ]
        .into();

        list.sort_by_age();
        assert_eq!(names(&list), vec!["Bea", "Dee", "Cy", "Abel"]);
    }

    #[test]
    fn sort_by_name_ignores_case_and_is_stable() {
        let mut list: RecordList<Student> = vec![
            Student::new("Bea", 40, 6, "Y"),
            Student::new("bea", 30, 5, "Z"),
            abel(),
            Student::new("Bea", 19, 7, "X"),
        ]
        .into();

        list.sort_by_name();
        let ids: Vec<i32> = list.iter().map(|s| s.roll_number()).collect();
        assert_eq!(ids, vec![1, 5, 6, 7]);
    }

    #[test]
    fn sort_by_name_interleaves_lowercase_names() {
        let mut list: RecordList<Student> = vec![
            Student::new("bob", 30, 1, "B"),
            Student::new("Zed", 31, 2, "Z"),
            Student::new("Alice", 32, 3, "A"),
        ]
        .into();

        list.sort_by_name();
        assert_eq!(names(&list), vec!["Alice", "bob", "Zed"]);
    }

    #[test]
    fn sorted_order_persists_until_next_sort() {
        let mut list: RecordList<Student> = vec![abel(), bea()].into();
        list.sort_by_age();
        list.add(Student::new("Ann", 5, 3, "K"));
        assert_eq!(names(&list), vec!["Bea", "Abel", "Ann"]);
    }

    #[test]
    fn remove_takes_first_structural_match() {
        let mut list: RecordList<Student> = vec![abel(), bea(), abel()].into();

        assert!(list.remove(&abel()));
        assert_eq!(names(&list), vec!["Bea", "Abel"]);
    }

    #[test]
    fn remove_absent_is_a_no_op() {
        let mut list: RecordList<Student> = vec![abel()].into();
        let lookalike = Student::new("Abel", 20, 1, "B");

        assert!(!list.remove(&lookalike));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn update_changes_only_the_first_match() {
        let mut list: RecordList<Student> = vec![abel(), abel()].into();

        assert!(list.update(&abel(), StudentPatch::new().grade("A+")));
        assert_eq!(list.get(0).map(|s| s.grade.as_str()), Some("A+"));
        assert_eq!(list.get(1).map(|s| s.grade.as_str()), Some("A"));
    }

    #[test]
    fn update_missing_target_returns_false() {
        let mut list: RecordList<Student> = vec![abel()].into();
        assert!(!list.update(&bea(), StudentPatch::new().age(1)));
        assert!(!list.update_at(5, StudentPatch::new().age(1)));
    }

    #[test]
    fn display_all_empty() {
        let list: RecordList<Student> = RecordList::new();
        let mut out = Vec::new();
        list.display_all(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No student to display.\n");
    }

    #[test]
    fn display_all_in_current_order() {
        let list: RecordList<Student> = vec![bea(), abel()].into();
        let mut out = Vec::new();
        list.display_all(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\t\t\tSTUDENTS\n"));
        let bea_at = text.find("Name: Bea").unwrap();
        let abel_at = text.find("Name: Abel").unwrap();
        assert!(bea_at < abel_at);
    }

    #[test]
    fn serializes_as_plain_array() {
        let list: RecordList<Student> = vec![abel()].into();
        let value = serde_json::to_value(&list).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["name"], "Abel");
    }
}
