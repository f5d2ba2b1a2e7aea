//! Search - id-or-name lookup over a record slice.

use std::iter::FusedIterator;

use crate::record::Record;

/// A parsed search query.
///
/// Text that parses as an integer is tried as an id first. An id query that
/// matches nothing falls back to a name match over the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'q> {
    Id { id: i64, raw: &'q str },
    Name(&'q str),
}

impl<'q> Query<'q> {
    pub fn parse(raw: &'q str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(id) => Query::Id { id, raw },
            Err(_) => Query::Name(raw),
        }
    }

    /// The text as given by the caller.
    pub fn raw(&self) -> &'q str {
        match self {
            Query::Id { raw, .. } => raw,
            Query::Name(raw) => raw,
        }
    }

    /// Resolve against `records`, deciding whether the id branch applies.
    fn resolve<T: Record>(self, records: &[T]) -> Matcher<'q> {
        match self {
            Query::Id { id, raw } => {
                if records.iter().any(|r| r.id() == id) {
                    Matcher::Id(id)
                } else {
                    Matcher::Name(raw)
                }
            }
            Query::Name(raw) => Matcher::Name(raw),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Matcher<'q> {
    Id(i64),
    Name(&'q str),
}

impl Matcher<'_> {
    fn matches<T: Record>(&self, record: &T) -> bool {
        match self {
            Matcher::Id(id) => record.id() == *id,
            Matcher::Name(needle) => record.name().contains(needle),
        }
    }
}

/// Lazy iterator over the records matching a [`Query`].
///
/// Cloning yields an independent iterator that starts where the original
/// currently is; [`Search::restart`] rewinds to the first record.
#[derive(Debug)]
pub struct Search<'a, 'q, T> {
    records: &'a [T],
    matcher: Matcher<'q>,
    pos: usize,
}

impl<T> Clone for Search<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records,
            matcher: self.matcher,
            pos: self.pos,
        }
    }
}

impl<'a, 'q, T: Record> Search<'a, 'q, T> {
    pub(crate) fn new(records: &'a [T], query: Query<'q>) -> Self {
        Self {
            records,
            matcher: query.resolve(records),
            pos: 0,
        }
    }

    /// True when the id branch was taken.
    pub fn is_id_match(&self) -> bool {
        matches!(self.matcher, Matcher::Id(_))
    }

    /// A fresh iterator over the same matches.
    pub fn restart(&self) -> Self {
        Self {
            records: self.records,
            matcher: self.matcher,
            pos: 0,
        }
    }
}

impl<'a, T: Record> Iterator for Search<'a, '_, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(record) = self.records.get(self.pos) {
            self.pos += 1;
            if self.matcher.matches(record) {
                return Some(record);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.records.len().saturating_sub(self.pos)))
    }
}

impl<T: Record> FusedIterator for Search<'_, '_, T> {}
