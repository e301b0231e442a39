extern crate log;
extern crate serde;

use super::{
    error::{Error, Result},
    Session,
};
use crate::types::Problem;
use log::debug;
use serde::Deserialize;

#[derive(Deserialize)]
struct ProblemsetResult {
    problems: Vec<Problem>,
}

impl Session {
    /// One snapshot of the full problem catalog (`problemset.problems`).
    pub async fn get_all_problems(&self) -> Result<Vec<Problem>> {
        let problems = self
            .api_call::<ProblemsetResult>("problemset.problems", &[])
            .await?
            .into_result(|comment| Error::Api { comment })?
            .problems;
        debug!("fetched {} problems from the problemset", problems.len());
        Ok(problems)
    }
}
