// Unit tests for solution-file scaffolding: naming, template rendering
// and never-overwrite behavior.

use cf_browser::config::scaffold::SOLUTIONS_DIR;
use cf_browser::scaffold::{create_solution_file, find_language, render_template, LANGUAGES};
use cf_browser::types::Problem;
use std::fs;

fn make_problem() -> Problem {
    Problem {
        contest_id: 1000,
        index: "A".to_string(),
        name: "Theatre Square".to_string(),
        rating: Some(1000),
        tags: vec!["math".to_string()],
        kind: "PROGRAMMING".to_string(),
    }
}

#[test]
fn language_table_lookup() {
    assert_eq!(find_language("Rust").unwrap().extension, "rs");
    assert_eq!(find_language("C++").unwrap().extension, "cpp");
    assert!(find_language("Brainfuck").is_none());
    assert_eq!(LANGUAGES.len(), 17);
}

#[test]
fn template_variables() {
    let rendered = render_template(
        "// {{name}} ({{contest}}-{{index}}) in {{language}}\n",
        &make_problem(),
        find_language("Rust").unwrap(),
    )
    .unwrap();
    assert_eq!(rendered, "// Theatre Square (1000-A) in Rust\n");
}

#[test]
fn creates_named_file_under_solutions_dir() {
    let dir = tempfile::tempdir().unwrap();
    let (path, created) = create_solution_file(
        dir.path(),
        &make_problem(),
        find_language("Rust").unwrap(),
        "fn main() {}\n",
    )
    .unwrap();
    assert!(created);
    assert_eq!(path, dir.path().join(SOLUTIONS_DIR).join("1000-A.rs"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "fn main() {}\n");
}

#[test]
fn empty_template_seeds_an_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let (path, created) =
        create_solution_file(dir.path(), &make_problem(), find_language("C").unwrap(), "")
            .unwrap();
    assert!(created);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn never_overwrites_an_existing_solution() {
    let dir = tempfile::tempdir().unwrap();
    let language = find_language("Python3").unwrap();
    let (path, created) =
        create_solution_file(dir.path(), &make_problem(), language, "print(1)\n").unwrap();
    assert!(created);
    let (again, created_again) =
        create_solution_file(dir.path(), &make_problem(), language, "print(2)\n").unwrap();
    assert!(!created_again);
    assert_eq!(path, again);
    assert_eq!(fs::read_to_string(&path).unwrap(), "print(1)\n");
}

#[test]
fn bad_template_reports_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = create_solution_file(
        dir.path(),
        &make_problem(),
        find_language("Rust").unwrap(),
        "{{#if}}broken",
    );
    assert!(result.is_err());
}
