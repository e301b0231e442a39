extern crate log;

use super::{retry::async_retry, Session};
use crate::types::Problem;
use log::warn;

pub const PLACEHOLDER: &str = "Problem description not found";

impl Session {
    /// Best-effort extraction of the statement markup from the problem
    /// page; any failure yields the placeholder text instead of an
    /// error.
    pub async fn get_problem_statement(&self, problem: &Problem) -> String {
        let url = problem.url();
        let target = url.as_str();
        let body = match async_retry(|| async move {
            self.client
                .get(target)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await
        })
        .await
        {
            Ok(v) => v,
            Err(e) => {
                warn!("fetch statement {}: {}", url, e);
                return PLACEHOLDER.to_string();
            }
        };
        match self.regex.statement.captures(&body) {
            Some(c) => c.get(1).unwrap().as_str().to_string(),
            None => PLACEHOLDER.to_string(),
        }
    }
}
