pub mod api {
    pub const BASE_URL: &str = "https://codeforces.com/api/";
}
pub mod retry {
    use std::time::Duration;
    pub const RETRY_COUNT: u32 = 5;
    pub const RETRY_DELAY: Duration = Duration::from_millis(200);
    pub const FORBIDDEN_DELAY: Duration = Duration::from_secs(120);
}
pub mod recent {
    pub const LIMIT: usize = 10;
}
pub mod scaffold {
    pub const SOLUTIONS_DIR: &str = "cf-browser-solutions";
}
pub mod state {
    pub const STATE_DIR: &str = ".cf-browser";
    pub const SETTINGS_FILE: &str = "settings.yaml";
    pub const RECENT_FILE: &str = "recent.yaml";
}
pub mod view {
    pub const MAX_LIST: usize = 30;
}
