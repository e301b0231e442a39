extern crate termcolor;

use crate::{
    read::{read_line, read_problem, read_usize},
    write::{write_problem, write_result, write_statement},
};
use cf_browser::{
    catalog::SortOrder,
    config::view::MAX_LIST,
    controller::Browser,
    group::{problems_by_rating, problems_by_tag},
    index::SubmissionIndex,
    scaffold::{find_language, Language, LANGUAGES},
    types::Problem,
    verdict::classify,
};
use std::io::Write;
use termcolor::{StandardStream, WriteColor};

#[allow(unused_must_use)]
fn gated(stdout: &mut StandardStream, browser: &Browser) -> bool {
    if browser.handle_set() {
        return true;
    }
    write_error!(stdout, "Error", r#"No handle set. Run "handle" first."#);
    false
}

#[allow(unused_must_use)]
async fn load_catalog(stdout: &mut StandardStream, browser: &mut Browser) -> bool {
    match browser.ensure_catalog().await {
        Ok(_) => true,
        Err(e) => {
            write_error!(stdout, "Error", "fetch problems: {}", e);
            false
        }
    }
}

#[allow(unused_must_use)]
pub async fn refresh(stdout: &mut StandardStream, browser: &mut Browser) {
    write_info!(stdout, "Info", "Refreshing...");
    stdout.reset();
    if browser.handle_set() {
        match browser.refresh().await {
            Ok((problems, submissions)) => write_ok!(
                stdout,
                "Success",
                "Refreshed {} problems, {} submissions",
                problems,
                submissions
            ),
            Err(e) => write_error!(stdout, "Error", "refresh: {}", e),
        }
    } else {
        match browser.refresh_catalog().await {
            Ok(problems) => write_ok!(stdout, "Success", "Refreshed {} problems", problems),
            Err(e) => write_error!(stdout, "Error", "refresh: {}", e),
        }
    }
}

#[allow(unused_must_use)]
fn write_listing(stdout: &mut StandardStream, problems: &[&Problem], index: &SubmissionIndex) {
    for problem in problems.iter().take(MAX_LIST) {
        write_problem(stdout, problem, classify(index.latest_verdict(&problem.key())));
    }
    if problems.len() > MAX_LIST {
        write_info!(stdout, "Info", "... and {} more", problems.len() - MAX_LIST);
    }
}

#[allow(unused_must_use)]
fn write_section(
    stdout: &mut StandardStream,
    title: &str,
    problems: &[&Problem],
    index: &SubmissionIndex,
) {
    write_info!(stdout, "Group", "{} ({})", title, problems.len());
    write_listing(stdout, problems, index);
}

#[allow(unused_must_use)]
pub async fn partition_view(stdout: &mut StandardStream, browser: &mut Browser) {
    if !gated(stdout, browser) || !load_catalog(stdout, browser).await {
        return;
    }
    let split = browser.partitioned();
    write_section(stdout, "Passed", &split.passed, browser.index());
    write_section(stdout, "Failed", &split.failed, browser.index());
    write_section(
        stdout,
        "Never Submitted",
        &split.never_submitted,
        browser.index(),
    );
}

#[allow(unused_must_use)]
pub async fn difficulty_view(stdout: &mut StandardStream, browser: &mut Browser) {
    if !gated(stdout, browser) || !load_catalog(stdout, browser).await {
        return;
    }
    for group in browser.rating_groups() {
        match group.rating {
            Some(r) => write_info!(stdout, "Group", "Rating: {} ({})", r, group.problems.len()),
            None => write_info!(stdout, "Group", "Rating: unrated ({})", group.problems.len()),
        }
    }
    stdout.reset();
    let choice = read_line(stdout, b"Rating to expand (empty to skip): ");
    let choice = choice.trim();
    if choice.is_empty() {
        return;
    }
    let rating = if choice == "unrated" {
        None
    } else {
        match choice.parse::<u32>() {
            Ok(v) => Some(v),
            Err(e) => {
                write_error!(stdout, "Error", "parse rating: {}", e);
                return;
            }
        }
    };
    write_listing(
        stdout,
        &problems_by_rating(browser.catalog(), rating),
        browser.index(),
    );
}

#[allow(unused_must_use)]
pub async fn tags_view(stdout: &mut StandardStream, browser: &mut Browser) {
    if !gated(stdout, browser) || !load_catalog(stdout, browser).await {
        return;
    }
    for group in browser.tag_groups() {
        write_info!(stdout, "Group", "Tag: {} ({})", group.tag, group.problems.len());
    }
    stdout.reset();
    let choice = read_line(stdout, b"Tag to expand (empty to skip): ");
    let choice = choice.trim();
    if choice.is_empty() {
        return;
    }
    write_listing(
        stdout,
        &problems_by_tag(browser.catalog(), choice),
        browser.index(),
    );
}

#[allow(unused_must_use)]
pub fn recent_view(stdout: &mut StandardStream, browser: &Browser) {
    if !gated(stdout, browser) {
        return;
    }
    if browser.recent().is_empty() {
        write_info!(stdout, "Info", "No recent problems.");
        return;
    }
    for problem in browser.recent() {
        write_problem(
            stdout,
            problem,
            classify(browser.index().latest_verdict(&problem.key())),
        );
    }
}

#[allow(unused_must_use)]
pub fn sort_menu(stdout: &mut StandardStream, browser: &mut Browser) {
    write_info!(
        stdout,
        "Sort",
        "0: no sorting  1: rating ascending  2: rating descending"
    );
    stdout.reset();
    let order = match read_usize(stdout, b"Order: ", 0, 3) {
        0 => SortOrder::None,
        1 => SortOrder::RatingAsc,
        _ => SortOrder::RatingDesc,
    };
    write_result(stdout, browser.set_sort_order(order), "Sort order saved");
}

#[allow(unused_must_use)]
pub fn toggle_difficulty(stdout: &mut StandardStream, browser: &mut Browser) {
    match browser.toggle_difficulty_order() {
        Ok(order) => write_ok!(stdout, "Success", "Difficulty order is now {:?}", order),
        Err(e) => write_error!(stdout, "Error", "save settings: {}", e),
    }
}

#[allow(unused_must_use)]
pub async fn problem_loop(stdout: &mut StandardStream, browser: &mut Browser) {
    if !gated(stdout, browser) || !load_catalog(stdout, browser).await {
        return;
    }
    let problem = match read_problem(stdout, browser.catalog()) {
        Some(p) => p.clone(),
        None => return,
    };
    write_info!(stdout, "Info", "Selected problem {}", problem);
    stdout.reset();
    let prompt = format!("cf-browser [{}-{}]> ", problem.contest_id, problem.index);
    loop {
        match read_line(stdout, prompt.as_bytes()).trim() {
            "show" => show_statement(stdout, browser, &problem).await,
            "code" => code(stdout, browser, &problem),
            "submit" => submit(stdout, browser, &problem),
            "unselect" => {
                write_info!(stdout, "Info", "Unselected problem");
                break;
            }
            "" => {}
            unknown => write_error!(stdout, "Error", "problem: Unknown command {}", unknown),
        }
        stdout.reset();
    }
    stdout.reset();
}

#[allow(unused_must_use)]
async fn show_statement(stdout: &mut StandardStream, browser: &Browser, problem: &Problem) {
    write_info!(stdout, "Info", "Fetching the problem...");
    stdout.reset();
    let statement = browser.statement(problem).await;
    write_info!(stdout, "Problem", "{} ({})", problem.name, problem.url());
    match problem.rating {
        Some(r) => write_info!(stdout, "Rating", "{}", r),
        None => write_info!(stdout, "Rating", "unrated"),
    }
    write_info!(stdout, "Tags", "{}", problem.tags.join(", "));
    stdout.reset();
    write_statement(stdout, &statement);
}

fn language_names() -> String {
    LANGUAGES
        .iter()
        .map(|l| l.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[allow(unused_must_use)]
fn confirm(stdout: &mut StandardStream, prompt: &[u8]) -> bool {
    read_line(stdout, prompt).trim().eq_ignore_ascii_case("y")
}

#[allow(unused_must_use)]
fn pick_language(stdout: &mut StandardStream, browser: &mut Browser) -> Option<&'static Language> {
    let preferred = browser.settings().preferred_coding_language.clone();
    if !preferred.is_empty() {
        match find_language(&preferred) {
            Some(l) => return Some(l),
            None => write_error!(stdout, "Error", "Unknown preferred language {}", preferred),
        }
        stdout.reset();
    }
    let picked = loop {
        let name = read_line(stdout, b"Language (empty to abort): ");
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        match find_language(name) {
            Some(l) => break l,
            None => write_error!(
                stdout,
                "Error",
                "Unknown language {}. Known: {}",
                name,
                language_names()
            ),
        }
        stdout.reset();
    };
    if preferred.is_empty() && browser.settings().notify_preferred_language {
        write_info!(
            stdout,
            "Hint",
            "Set preferredCodingLanguage in settings.yaml to skip this prompt."
        );
        if confirm(stdout, b"Stop reminding? (y/N): ") {
            write_result(
                stdout,
                browser.disable_language_notify(),
                "Reminder disabled",
            );
        }
    }
    Some(picked)
}

#[allow(unused_must_use)]
fn code(stdout: &mut StandardStream, browser: &mut Browser, problem: &Problem) {
    let language = match pick_language(stdout, browser) {
        Some(l) => l,
        None => return,
    };
    match browser.create_solution(problem, language) {
        Ok((path, true)) => write_ok!(stdout, "Success", "Created {}", path.display()),
        Ok((path, false)) => write_info!(stdout, "Info", "Already exists: {}", path.display()),
        Err(e) => {
            write_error!(stdout, "Error", "create solution: {}", e);
            return;
        }
    }
    if browser.settings().solution_template.is_empty()
        && browser.settings().notify_solution_template
    {
        write_info!(
            stdout,
            "Hint",
            "Set solutionTemplate in settings.yaml to seed new files."
        );
        if confirm(stdout, b"Stop reminding? (y/N): ") {
            write_result(
                stdout,
                browser.disable_template_notify(),
                "Reminder disabled",
            );
        }
    }
}

#[allow(unused_must_use)]
fn submit(stdout: &mut StandardStream, browser: &mut Browser, problem: &Problem) {
    if let Err(e) = browser.add_recent(problem) {
        write_error!(stdout, "Error", "save recent list: {}", e);
        stdout.reset();
    }
    write_info!(stdout, "Submit", "{}", problem.submit_url());
}
