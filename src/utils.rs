use std::io::Write;
use std::process;

use anyhow::{Error, Result};
use console::style;

pub fn error_exit(err: Error) {
    _ = writeln!(std::io::stderr(), "{}: {err:#}", style("Error").red());
    process::exit(2);
}

pub fn handle_result(result: Result<()>) {
    if let Err(err) = result {
        error_exit(err);
    }
}
