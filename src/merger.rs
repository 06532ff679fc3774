// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean merges over sorted posting streams.
//!
//! Each merge is a lazy iterator doing the classic two-pointer walk: compare
//! the heads, advance whichever lags, emit on a match. Inputs must be sorted
//! ascending by document id with no duplicate ids; outputs keep that order.
//! Time is linear in the combined input length, space is O(1).
//!
//! When both inputs contain a document, the term frequency of the emitted
//! posting is the minimum of the two for `intersection` and the maximum for
//! `union`. `difference` passes left-hand postings through unchanged.

use std::cmp::Ordering;
use std::iter::Peekable;

use crate::types::Posting;

/// Documents present in both inputs (AND).
pub fn intersection<A, B>(p1: A, p2: B) -> Intersection<A::IntoIter, B::IntoIter>
where
    A: IntoIterator<Item = Posting>,
    B: IntoIterator<Item = Posting>,
{
    Intersection {
        left: p1.into_iter(),
        right: p2.into_iter(),
    }
}

/// Documents present in either input (OR).
pub fn union<A, B>(p1: A, p2: B) -> Union<A::IntoIter, B::IntoIter>
where
    A: IntoIterator<Item = Posting>,
    B: IntoIterator<Item = Posting>,
{
    Union {
        left: p1.into_iter().peekable(),
        right: p2.into_iter().peekable(),
    }
}

/// Documents present in `p1` but not in `p2` (AND NOT).
pub fn difference<A, B>(p1: A, p2: B) -> Difference<A::IntoIter, B::IntoIter>
where
    A: IntoIterator<Item = Posting>,
    B: IntoIterator<Item = Posting>,
{
    Difference {
        left: p1.into_iter(),
        right: p2.into_iter().peekable(),
    }
}

#[derive(Debug, Clone)]
pub struct Intersection<A, B> {
    left: A,
    right: B,
}

impl<A, B> Iterator for Intersection<A, B>
where
    A: Iterator<Item = Posting>,
    B: Iterator<Item = Posting>,
{
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        let mut a = self.left.next()?;
        let mut b = self.right.next()?;
        loop {
            match a.document_id.cmp(&b.document_id) {
                Ordering::Equal => {
                    return Some(Posting {
                        document_id: a.document_id,
                        term_frequency: a.term_frequency.min(b.term_frequency),
                    });
                }
                Ordering::Less => a = self.left.next()?,
                Ordering::Greater => b = self.right.next()?,
            }
        }
    }
}

pub struct Union<A: Iterator, B: Iterator> {
    left: Peekable<A>,
    right: Peekable<B>,
}

impl<A, B> Iterator for Union<A, B>
where
    A: Iterator<Item = Posting>,
    B: Iterator<Item = Posting>,
{
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        match (self.left.peek().copied(), self.right.peek().copied()) {
            (Some(a), Some(b)) => match a.document_id.cmp(&b.document_id) {
                Ordering::Less => self.left.next(),
                Ordering::Greater => self.right.next(),
                Ordering::Equal => {
                    self.left.next();
                    self.right.next();
                    Some(Posting {
                        document_id: a.document_id,
                        term_frequency: a.term_frequency.max(b.term_frequency),
                    })
                }
            },
            (Some(_), None) => self.left.next(),
            (None, Some(_)) => self.right.next(),
            (None, None) => None,
        }
    }
}

pub struct Difference<A, B: Iterator> {
    left: A,
    right: Peekable<B>,
}

impl<A, B> Iterator for Difference<A, B>
where
    A: Iterator<Item = Posting>,
    B: Iterator<Item = Posting>,
{
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        'left: loop {
            let a = self.left.next()?;
            while let Some(b) = self.right.peek() {
                match b.document_id.cmp(&a.document_id) {
                    Ordering::Less => {
                        self.right.next();
                    }
                    Ordering::Equal => continue 'left,
                    Ordering::Greater => break,
                }
            }
            return Some(a);
        }
    }
}
