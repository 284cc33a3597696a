//! CLI argument structure using clap

use clap::Parser;
use std::path::PathBuf;

/// Store the path of an Ansys solver executable.
///
/// Example:
///
///     $ save-ansys-path --name dyna /path/to/dyna
#[derive(Parser, Debug)]
#[command(name = "save-ansys-path")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Executable location. Defaults to the newest install (standard preferred on ties).
    pub location: Option<PathBuf>,

    /// Application name: "mapdl", "mechanical", "dyna" or "amk"
    #[arg(long)]
    pub name: String,

    /// Allow prompt. Used in case a path is not given or the given path is not valid
    #[arg(long)]
    pub allow_prompt: bool,

    #[arg(
        short,
        long,
        global = true,
        env = "ANSYS_TOOLS_PATH_VERBOSE",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub verbose: bool,
}
