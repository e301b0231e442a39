extern crate log;

use super::{
    error::{Error, Result},
    Session,
};
use crate::types::Submission;
use log::debug;

impl Session {
    /// The user's submission feed (`user.status`), newest first as
    /// delivered by the judge. A non-OK envelope reads as an invalid
    /// handle, keeping the judge's comment as the detail.
    pub async fn fetch_user_submissions(&self, handle: &str) -> Result<Vec<Submission>> {
        let submissions = self
            .api_call::<Vec<Submission>>("user.status", &[("handle", handle)])
            .await?
            .into_result(|comment| Error::InvalidHandle { comment })?;
        debug!("fetched {} submissions for {}", submissions.len(), handle);
        Ok(submissions)
    }
}
