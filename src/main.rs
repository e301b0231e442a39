extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use cf_browser::controller::{default_state_dir, Browser};
use clap::{crate_description, crate_name, App, Arg};
use pretty_env_logger::init_timed;
use std::{io::Write, path::PathBuf, process::exit};
use termcolor::{ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod catalog;
    pub mod handle;
}
mod read;
mod write;

use command::{
    catalog::{
        difficulty_view, partition_view, problem_loop, recent_view, refresh, sort_menu,
        tags_view, toggle_difficulty,
    },
    handle::enter_handle,
};
use read::read_line;

#[allow(unused_must_use)]
fn help(stdout: &mut StandardStream) {
    write_info!(stdout, "Info", "handle      set the codeforces handle");
    write_info!(stdout, "Info", "refresh     refetch problems and submissions");
    write_info!(stdout, "Info", "all         problems split by verdict");
    write_info!(stdout, "Info", "difficulty  problems grouped by rating");
    write_info!(stdout, "Info", "tags        problems grouped by tag");
    write_info!(stdout, "Info", "recent      recently coded problems");
    write_info!(stdout, "Info", "sort        choose the rating sort order");
    write_info!(stdout, "Info", "toggle      flip the difficulty group order");
    write_info!(stdout, "Info", "select      pick a problem (show/code/submit)");
    write_info!(stdout, "Info", "exit        quit");
}

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = App::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("state-dir")
                .long("state-dir")
                .help("Directory holding settings.yaml and recent.yaml")
                .takes_value(true),
        )
        .get_matches();
    let state_dir = app
        .value_of("state-dir")
        .map(PathBuf::from)
        .unwrap_or_else(default_state_dir);
    let mut browser = match Browser::new(&state_dir) {
        Ok(v) => v,
        Err(e) => {
            write_error!(&mut stdout, "Error", "startup: {}", e);
            stdout.reset();
            exit(1);
        }
    };
    match browser.startup().await {
        Ok(Some(count)) => write_ok!(
            &mut stdout,
            "Success",
            "Signed in as [{}] ({} submissions)",
            browser.settings().user_handle,
            count
        ),
        Ok(None) => write_info!(
            &mut stdout,
            "Info",
            r#"No handle configured. Run "handle" to sign in."#
        ),
        Err(e) => write_error!(&mut stdout, "Error", "{}", e),
    }
    stdout.reset();
    loop {
        match read_line(&mut stdout, b"cf-browser> ").trim() {
            "handle" => enter_handle(&mut stdout, &mut browser).await,
            "refresh" => refresh(&mut stdout, &mut browser).await,
            "all" => partition_view(&mut stdout, &mut browser).await,
            "difficulty" => difficulty_view(&mut stdout, &mut browser).await,
            "tags" => tags_view(&mut stdout, &mut browser).await,
            "recent" => recent_view(&mut stdout, &browser),
            "sort" => sort_menu(&mut stdout, &mut browser),
            "toggle" => toggle_difficulty(&mut stdout, &mut browser),
            "select" => problem_loop(&mut stdout, &mut browser).await,
            "help" => help(&mut stdout),
            "exit" => break,
            "" => {}
            unknown => write_error!(
                &mut stdout,
                "Error",
                r#"cf-browser: unknown command "{}""#,
                unknown
            ),
        }
        stdout.reset();
    }
}
