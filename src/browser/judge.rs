extern crate regex;

pub mod error;
pub mod problems;
mod retry;
pub mod session;
pub mod statement;
pub mod status;

pub use error::{Error, Result};
pub use session::Session;

use regex::Regex;

struct UtilityRegex {
    statement: Regex,
}
impl UtilityRegex {
    fn new() -> Self {
        Self {
            statement: Regex::new(
                r#"(?s)<div class="problem-statement">(.*?)(?:<div class="pagination">|</body>)"#,
            )
            .unwrap(),
        }
    }
}
