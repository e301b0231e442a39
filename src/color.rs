extern crate termcolor;

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

pub fn set_fg(stdout: &mut StandardStream, color: Color) {
    stdout
        .set_color(ColorSpec::new().set_fg(Some(color)).set_intense(true))
        .expect("Error: can't set output color");
}
pub fn reset_fg(stdout: &mut StandardStream) {
    stdout
        .set_color(ColorSpec::new().set_fg(None).set_intense(true))
        .expect("Error: Can't reset color");
}

/// The colored `   Tag: ` column every status line starts with.
#[allow(unused_must_use)]
pub fn write_tag(stdout: &mut StandardStream, color: Color, tag: &str) {
    use std::io::Write;
    set_fg(stdout, color);
    write!(stdout, "{:>7}: ", tag);
    reset_fg(stdout);
}

macro_rules! write_error {
    ($dest:expr,$typ:expr, $($arg:tt)*) => {{
        $crate::color::write_tag($dest, termcolor::Color::Red, $typ);
        writeln!($dest, $($arg)*).expect("Failed to write output");
    }};
}

macro_rules! write_info {
    ($dest:expr,$typ:expr, $($arg:tt)*) => {{
        $crate::color::write_tag($dest, termcolor::Color::Blue, $typ);
        writeln!($dest, $($arg)*).expect("Failed to write output");
    }};
}

macro_rules! write_ok {
    ($dest:expr,$typ:expr, $($arg:tt)*) => {{
        $crate::color::write_tag($dest, termcolor::Color::Green, $typ);
        writeln!($dest, $($arg)*).expect("Failed to write output");
    }};
}
