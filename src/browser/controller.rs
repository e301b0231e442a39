extern crate dirs;
extern crate futures;
extern crate log;

use crate::{
    catalog::{partition, sorted, Partition, SortOrder},
    config::state::{RECENT_FILE, SETTINGS_FILE, STATE_DIR},
    error::Result,
    group::{group_by_rating, group_by_tag, RatingGroup, TagGroup},
    index::SubmissionIndex,
    judge::Session,
    recent::RecentProblems,
    scaffold::{self, Language},
    settings::Settings,
    types::{Problem, Submission},
};
use futures::join;
use log::warn;
use std::path::{Path, PathBuf};

pub fn default_state_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STATE_DIR)
}

/// The single owner of the catalog snapshot, the submission index and
/// the persisted state. Views borrow from it; refreshes replace its
/// snapshots wholesale.
pub struct Browser {
    session: Session,
    settings: Settings,
    settings_path: PathBuf,
    recent_path: PathBuf,
    catalog: Vec<Problem>,
    index: SubmissionIndex,
    recent: RecentProblems,
    handle_ok: bool,
    refresh_seq: u64,
    index_seq: u64,
}

impl Browser {
    pub fn new(state_dir: &Path) -> Result<Self> {
        let settings_path = state_dir.join(SETTINGS_FILE);
        let recent_path = state_dir.join(RECENT_FILE);
        let settings = Settings::load_or_default(&settings_path)?;
        let recent = RecentProblems::load_or_default(&recent_path)?;
        let index = SubmissionIndex::with_order_check(settings.verify_feed_order);
        Ok(Browser {
            session: Session::new()?,
            settings,
            settings_path,
            recent_path,
            catalog: Vec::new(),
            index,
            recent,
            handle_ok: false,
            refresh_seq: 0,
            index_seq: 0,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn handle_set(&self) -> bool {
        self.handle_ok
    }
    pub fn catalog(&self) -> &[Problem] {
        &self.catalog
    }
    pub fn recent(&self) -> &[Problem] {
        self.recent.list()
    }
    pub fn index(&self) -> &SubmissionIndex {
        &self.index
    }

    pub async fn ensure_catalog(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            self.refresh_catalog().await?;
        }
        Ok(())
    }

    pub async fn refresh_catalog(&mut self) -> Result<usize> {
        self.catalog = self.session.get_all_problems().await?;
        Ok(self.catalog.len())
    }

    /// Validates `handle` against the judge. On success the handle is
    /// persisted and its submissions replace the index; an invalid
    /// handle clears the handle-set state so gated views hide.
    pub async fn change_handle(&mut self, handle: &str) -> Result<usize> {
        let seq = self.next_seq();
        match self.session.fetch_user_submissions(handle).await {
            Ok(submissions) => {
                let count = submissions.len();
                self.install_submissions(seq, submissions);
                self.handle_ok = true;
                if self.settings.user_handle != handle {
                    self.settings.user_handle = handle.to_string();
                    self.settings.save(&self.settings_path)?;
                }
                Ok(count)
            }
            Err(e) => {
                self.handle_ok = false;
                Err(e.into())
            }
        }
    }

    /// Startup sign-in from the persisted handle. `Ok(None)` when no
    /// handle is configured.
    pub async fn startup(&mut self) -> Result<Option<usize>> {
        let handle = self.settings.user_handle.trim().to_string();
        if handle.is_empty() {
            return Ok(None);
        }
        self.change_handle(&handle).await.map(Some)
    }

    /// Refreshes the catalog and the current handle's submissions, both
    /// fetches in flight at once.
    pub async fn refresh(&mut self) -> Result<(usize, usize)> {
        let handle = self.settings.user_handle.clone();
        let seq = self.next_seq();
        let (problems, submissions) = join!(
            self.session.get_all_problems(),
            self.session.fetch_user_submissions(&handle)
        );
        self.catalog = problems?;
        let submissions = match submissions {
            Ok(v) => v,
            Err(e) => {
                if e.is_invalid_handle() {
                    self.handle_ok = false;
                }
                return Err(e.into());
            }
        };
        let count = submissions.len();
        self.install_submissions(seq, submissions);
        self.handle_ok = true;
        Ok((self.catalog.len(), count))
    }

    fn next_seq(&mut self) -> u64 {
        self.refresh_seq += 1;
        self.refresh_seq
    }

    // Last-started-wins: a fetch that outlived a later one must not
    // clobber the later one's result.
    fn install_submissions(&mut self, seq: u64, submissions: Vec<Submission>) {
        if seq < self.index_seq {
            warn!(
                "discarding stale submission refresh #{} (#{} already installed)",
                seq, self.index_seq
            );
            return;
        }
        self.index_seq = seq;
        self.index.set_submissions(submissions);
    }

    /// The Passed / Failed / Never Submitted view, ordered by the
    /// persisted sort order.
    pub fn partitioned(&self) -> Partition<'_> {
        partition(sorted(&self.catalog, self.settings.sort_order), &self.index)
    }

    pub fn rating_groups(&self) -> Vec<RatingGroup<'_>> {
        group_by_rating(&self.catalog, self.settings.difficulty_sort_order)
    }

    pub fn tag_groups(&self) -> Vec<TagGroup<'_>> {
        group_by_tag(&self.catalog)
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> Result<()> {
        self.settings.sort_order = order;
        self.settings.save(&self.settings_path)?;
        Ok(())
    }

    pub fn toggle_difficulty_order(&mut self) -> Result<SortOrder> {
        self.settings.difficulty_sort_order = self.settings.difficulty_sort_order.toggled();
        self.settings.save(&self.settings_path)?;
        Ok(self.settings.difficulty_sort_order)
    }

    pub fn add_recent(&mut self, problem: &Problem) -> Result<()> {
        self.recent.add(problem);
        self.recent.save(&self.recent_path)?;
        Ok(())
    }

    pub async fn statement(&self, problem: &Problem) -> String {
        self.session.get_problem_statement(problem).await
    }

    /// Scaffolds the solution file under the configured solutions
    /// folder (home directory when unset) and records the problem as
    /// recently coded.
    pub fn create_solution(
        &mut self,
        problem: &Problem,
        language: &'static Language,
    ) -> Result<(PathBuf, bool)> {
        let root = if self.settings.default_solutions_folder_path.trim().is_empty() {
            dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
        } else {
            PathBuf::from(&self.settings.default_solutions_folder_path)
        };
        let created = scaffold::create_solution_file(
            &root,
            problem,
            language,
            &self.settings.solution_template,
        )?;
        self.add_recent(problem)?;
        Ok(created)
    }

    pub fn disable_template_notify(&mut self) -> Result<()> {
        self.settings.notify_solution_template = false;
        self.settings.save(&self.settings_path)?;
        Ok(())
    }
    pub fn disable_language_notify(&mut self) -> Result<()> {
        self.settings.notify_preferred_language = false;
        self.settings.save(&self.settings_path)?;
        Ok(())
    }
}
