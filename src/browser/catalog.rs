extern crate serde;

use crate::{
    index::SubmissionIndex,
    types::Problem,
    verdict::{classify, VerdictClass},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    None,
    RatingAsc,
    RatingDesc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::RatingAsc => SortOrder::RatingDesc,
            _ => SortOrder::RatingAsc,
        }
    }
}

// Unrated problems order after every rated one, in both directions.
fn rating_order(a: &Problem, b: &Problem, descending: bool) -> Ordering {
    match (a.rating, b.rating) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
    }
}

/// A rating-ordered view of the catalog. `SortOrder::None` keeps the
/// catalog order; ties and unrated runs keep their relative order.
pub fn sorted(problems: &[Problem], order: SortOrder) -> Vec<&Problem> {
    let mut view: Vec<&Problem> = problems.iter().collect();
    match order {
        SortOrder::None => {}
        SortOrder::RatingAsc => view.sort_by(|a, b| rating_order(a, b, false)),
        SortOrder::RatingDesc => view.sort_by(|a, b| rating_order(a, b, true)),
    }
    view
}

pub struct Partition<'a> {
    pub passed: Vec<&'a Problem>,
    pub failed: Vec<&'a Problem>,
    pub never_submitted: Vec<&'a Problem>,
}

impl<'a> Partition<'a> {
    pub fn len(&self) -> usize {
        self.passed.len() + self.failed.len() + self.never_submitted.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits problems by their latest verdict, keeping input order within
/// each group. Partial results land in `failed`; the display layer
/// distinguishes them by icon.
pub fn partition<'a, I>(problems: I, index: &SubmissionIndex) -> Partition<'a>
where
    I: IntoIterator<Item = &'a Problem>,
{
    let mut ret = Partition {
        passed: Vec::new(),
        failed: Vec::new(),
        never_submitted: Vec::new(),
    };
    for problem in problems {
        match classify(index.latest_verdict(&problem.key())) {
            VerdictClass::Accepted => ret.passed.push(problem),
            VerdictClass::Partial | VerdictClass::Negative => ret.failed.push(problem),
            VerdictClass::Unattempted => ret.never_submitted.push(problem),
        }
    }
    ret
}
