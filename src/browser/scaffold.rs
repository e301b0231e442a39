extern crate handlebars;
extern crate serde;

use crate::{config::scaffold::SOLUTIONS_DIR, types::Problem};
use handlebars::Handlebars;
use serde::Serialize;
use std::{
    error::Error as StdError,
    fmt, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

pub struct Language {
    pub name: &'static str,
    pub extension: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language { name: "C", extension: "c" },
    Language { name: "C#", extension: "cs" },
    Language { name: "C++", extension: "cpp" },
    Language { name: "D", extension: "d" },
    Language { name: "Go", extension: "go" },
    Language { name: "Haskell", extension: "hs" },
    Language { name: "Java", extension: "java" },
    Language { name: "JavaScript", extension: "js" },
    Language { name: "Kotlin", extension: "kt" },
    Language { name: "OCaml", extension: "ml" },
    Language { name: "Pascal", extension: "pas" },
    Language { name: "Perl", extension: "pl" },
    Language { name: "PHP", extension: "php" },
    Language { name: "Python3", extension: "py" },
    Language { name: "Ruby", extension: "rb" },
    Language { name: "Rust", extension: "rs" },
    Language { name: "Scala", extension: "scala" },
];

pub fn find_language(name: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.name == name)
}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Template(handlebars::TemplateError),
    Render(handlebars::RenderError),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Error creating solution file: {}", e),
            Self::Template(e) => write!(f, "Error in solution template: {}", e),
            Self::Render(e) => write!(f, "Error rendering solution template: {}", e),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Template(e) => Some(e),
            Self::Render(e) => Some(e),
        }
    }
}

#[derive(Serialize)]
struct TemplateParam<'a> {
    contest: u32,
    index: &'a str,
    name: &'a str,
    rating: Option<u32>,
    tags: &'a [String],
    language: &'a str,
}

pub fn render_template(
    template: &str,
    problem: &Problem,
    language: &Language,
) -> Result<String, Error> {
    let mut engine = Handlebars::new();
    engine
        .register_template_string("solution", template)
        .map_err(Error::Template)?;
    engine
        .render(
            "solution",
            &TemplateParam {
                contest: problem.contest_id,
                index: &problem.index,
                name: &problem.name,
                rating: problem.rating,
                tags: &problem.tags,
                language: language.name,
            },
        )
        .map_err(Error::Render)
}

pub fn solution_file_name(problem: &Problem, language: &Language) -> String {
    format!(
        "{}-{}.{}",
        problem.contest_id, problem.index, language.extension
    )
}

/// Creates `<root>/<solutions dir>/<contest>-<index>.<ext>` seeded from
/// the rendered template. Never overwrites: the returned flag tells
/// whether the file was created by this call.
pub fn create_solution_file(
    root: &Path,
    problem: &Problem,
    language: &Language,
    template: &str,
) -> Result<(PathBuf, bool), Error> {
    let dir = root.join(SOLUTIONS_DIR);
    fs::create_dir_all(&dir).map_err(Error::Io)?;
    let path = dir.join(solution_file_name(problem, language));
    if path.exists() {
        return Ok((path, false));
    }
    let content = if template.is_empty() {
        String::new()
    } else {
        render_template(template, problem, language)?
    };
    fs::File::create(&path)
        .and_then(|mut f| f.write_all(content.as_bytes()))
        .map_err(Error::Io)?;
    Ok((path, true))
}
