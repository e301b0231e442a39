extern crate termcolor;

use crate::read::read_line;
use cf_browser::controller::Browser;
use std::io::Write;
use termcolor::{StandardStream, WriteColor};

#[allow(unused_must_use)]
pub async fn enter_handle(stdout: &mut StandardStream, browser: &mut Browser) {
    let handle = read_line(stdout, b"Codeforces handle: ");
    let handle = handle.trim();
    if handle.is_empty() {
        write_error!(stdout, "Error", "Handle must not be empty.");
        return;
    }
    write_info!(stdout, "Info", "Validating handle [{}]...", handle);
    stdout.reset();
    match browser.change_handle(handle).await {
        Ok(count) => write_ok!(
            stdout,
            "Success",
            "Signed in as [{}] ({} submissions)",
            handle,
            count
        ),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}
