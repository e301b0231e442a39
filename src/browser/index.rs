extern crate log;

use crate::{
    types::{ProblemKey, Submission},
    verdict::Verdict,
};
use log::debug;
use std::collections::HashMap;

/// Per-problem submission buckets, newest first. The upstream feed is
/// delivered newest first and that order is trusted as-is; an index
/// built with `with_order_check` re-sorts by creation time before
/// bucketing in case the feed ever violates that guarantee.
pub struct SubmissionIndex {
    check_order: bool,
    map: HashMap<ProblemKey, Vec<Submission>>,
}

impl SubmissionIndex {
    pub fn new() -> Self {
        Self::with_order_check(false)
    }
    pub fn with_order_check(check_order: bool) -> Self {
        SubmissionIndex {
            check_order,
            map: HashMap::new(),
        }
    }

    /// Replaces the whole index with a fresh feed.
    pub fn set_submissions(&mut self, mut submissions: Vec<Submission>) {
        if self.check_order {
            submissions.sort_by(|a, b| b.creation_time_seconds.cmp(&a.creation_time_seconds));
        }
        self.map.clear();
        for submission in submissions {
            self.map
                .entry(submission.key())
                .or_insert_with(Vec::new)
                .push(submission);
        }
        debug!("indexed submissions for {} problems", self.map.len());
    }

    pub fn submissions(&self, key: &ProblemKey) -> &[Submission] {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `None` means the problem was never attempted.
    pub fn latest_verdict(&self, key: &ProblemKey) -> Option<Verdict> {
        self.map.get(key)?.first().map(Submission::current_verdict)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for SubmissionIndex {
    fn default() -> Self {
        Self::new()
    }
}
