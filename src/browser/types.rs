extern crate serde;

use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The (contestId, index) pair that identifies a problem across the
/// catalog and the submission feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemKey {
    pub contest: u32,
    pub index: String,
}
impl fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.contest, self.index)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(default)]
    pub contest_id: u32,
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
}
impl PartialEq for Problem {
    fn eq(&self, other: &Self) -> bool {
        self.contest_id == other.contest_id && self.index == other.index
    }
}
impl Problem {
    pub fn key(&self) -> ProblemKey {
        ProblemKey {
            contest: self.contest_id,
            index: self.index.clone(),
        }
    }
    pub fn url(&self) -> String {
        format!(
            "https://codeforces.com/contest/{}/problem/{}",
            self.contest_id, self.index
        )
    }
    pub fn submit_url(&self) -> String {
        format!(
            "https://codeforces.com/problemset/submit?submittedProblemCode={}-{}",
            self.contest_id, self.index
        )
    }
}
impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {}", self.contest_id, self.index, self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: u64,
    #[serde(default)]
    pub creation_time_seconds: u64,
    pub problem: Problem,
    #[serde(default)]
    pub programming_language: String,
    #[serde(default)]
    pub verdict: Option<Verdict>,
}
impl Submission {
    pub fn key(&self) -> ProblemKey {
        self.problem.key()
    }
    /// The judge leaves `verdict` unset until testing starts.
    pub fn current_verdict(&self) -> Verdict {
        self.verdict.unwrap_or(Verdict::Testing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_from_api_json() {
        let p: Problem = serde_json::from_str(
            r#"{"contestId":1000,"index":"A","name":"Theatre Square",
                "type":"PROGRAMMING","rating":1000,"tags":["math"]}"#,
        )
        .unwrap();
        assert_eq!(p.key().to_string(), "1000-A");
        assert_eq!(p.rating, Some(1000));
        assert_eq!(p.tags, vec!["math".to_string()]);
    }

    #[test]
    fn problem_without_rating() {
        let p: Problem = serde_json::from_str(
            r#"{"contestId":1200,"index":"B","name":"x","type":"PROGRAMMING","tags":[]}"#,
        )
        .unwrap();
        assert_eq!(p.rating, None);
    }

    #[test]
    fn submission_from_api_json() {
        let s: Submission = serde_json::from_str(
            r#"{"id":7,"contestId":1000,"creationTimeSeconds":1600000000,
                "problem":{"contestId":1000,"index":"A","name":"x","type":"PROGRAMMING","tags":[]},
                "programmingLanguage":"GNU C++17","verdict":"OK"}"#,
        )
        .unwrap();
        assert_eq!(s.current_verdict(), Verdict::Ok);
        assert_eq!(s.key().to_string(), "1000-A");
    }

    #[test]
    fn submission_still_in_queue_reads_testing() {
        let s: Submission = serde_json::from_str(
            r#"{"id":8,"creationTimeSeconds":1600000001,
                "problem":{"contestId":1000,"index":"A","name":"x","type":"PROGRAMMING","tags":[]}}"#,
        )
        .unwrap();
        assert_eq!(s.current_verdict(), Verdict::Testing);
    }
}
