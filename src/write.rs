extern crate regex;
extern crate termcolor;

use cf_browser::{types::Problem, verdict::VerdictClass};
use regex::Regex;
use std::{fmt::Display, io::Write};
use termcolor::{Color, StandardStream};

#[allow(unused_must_use)]
pub fn write_result<T, E: Display>(
    stdout: &mut StandardStream,
    result: Result<T, E>,
    success: &str,
) {
    match result {
        Ok(_) => write_ok!(stdout, "Success", "{}", success),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}

/// One catalog line: verdict icon, rating, key, name.
#[allow(unused_must_use)]
pub fn write_problem(stdout: &mut StandardStream, problem: &Problem, class: VerdictClass) {
    let (icon, color) = match class {
        VerdictClass::Accepted => ("+", Some(Color::Green)),
        VerdictClass::Negative => ("x", Some(Color::Red)),
        VerdictClass::Partial => ("~", Some(Color::Cyan)),
        VerdictClass::Unattempted => (" ", None),
    };
    if let Some(c) = color {
        crate::color::set_fg(stdout, c);
    }
    write!(stdout, " {} ", icon);
    crate::color::reset_fg(stdout);
    match problem.rating {
        Some(r) => writeln!(
            stdout,
            "[{}] [{}-{}] {}",
            r, problem.contest_id, problem.index, problem.name
        ),
        None => writeln!(
            stdout,
            "[unrated] [{}-{}] {}",
            problem.contest_id, problem.index, problem.name
        ),
    }
    .expect("Failed to write output");
}

/// Terminal rendering of the statement markup: tags stripped, common
/// entities decoded, blank runs collapsed.
#[allow(unused_must_use)]
pub fn write_statement(stdout: &mut StandardStream, html: &str) {
    let tags = Regex::new(r"<[^>]+>").unwrap();
    let text = tags
        .replace_all(html, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&");
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        writeln!(stdout, "{}", line);
    }
}
