extern crate termcolor;

use cf_browser::types::Problem;
use std::io::{stdin, Write};
use termcolor::{StandardStream, WriteColor};

#[allow(unused_must_use)]
pub fn read_line(stdout: &mut StandardStream, prompt: &[u8]) -> String {
    let mut ret = String::new();
    loop {
        stdout.write(prompt);
        stdout.flush();
        match stdin().read_line(&mut ret) {
            Ok(_) => {
                ret.truncate(ret.trim_end().len());
                return ret;
            }
            Err(e) => write_error!(stdout, "Error", "Read: {}", e.to_string()),
        }
        ret.clear();
        stdout.reset();
    }
}

#[allow(unused_must_use)]
pub fn read_usize(stdout: &mut StandardStream, prompt: &[u8], min: usize, max: usize) -> usize {
    loop {
        match read_line(stdout, prompt).trim().parse::<usize>() {
            Ok(v) if v >= min && v < max => return v,
            Ok(v) => write_error!(
                stdout,
                "Error",
                "parse: Value {} out of range. Expected value in [{}, {})",
                v,
                min,
                max
            ),
            Err(e) => write_error!(stdout, "Error", "parse: {}", e.to_string()),
        }
        stdout.reset();
    }
}

/// Picks a problem from the catalog snapshot by contest id and index.
/// An empty contest aborts the selection.
#[allow(unused_must_use)]
pub fn read_problem<'a>(
    stdout: &mut StandardStream,
    catalog: &'a [Problem],
) -> Option<&'a Problem> {
    loop {
        let contest = read_line(stdout, b"Contest (empty to abort): ");
        let contest = contest.trim();
        if contest.is_empty() {
            return None;
        }
        let index = read_line(stdout, b"Problem index: ");
        let index = index.trim();
        match contest.parse::<u32>() {
            Ok(id) => {
                match catalog
                    .iter()
                    .find(|p| p.contest_id == id && p.index.eq_ignore_ascii_case(index))
                {
                    Some(p) => return Some(p),
                    None => write_error!(stdout, "Error", "No such problem in the catalog."),
                }
            }
            Err(e) => write_error!(stdout, "Error", "parse contest: {}", e.to_string()),
        }
        stdout.reset();
    }
}
