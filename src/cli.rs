// src/cli.rs
use std::{env, path::{Path, PathBuf}};

use crate::params::{PageKind, Params};
use crate::runner::{self, Progress};

/// Console sink: one `<file>: <true|false>` line per processed page,
/// skip reasons to stderr.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, path: &Path, changed: bool) {
        println!("{}: {}", path.display(), changed);
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = ConsoleProgress;
    runner::run(&params, Some(&mut progress)).map(|_| ())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut files: Vec<PathBuf> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--page" => {
                let v = args.next().ok_or("Missing value for --page")?;
                params.page = match v.to_ascii_lowercase().as_str() {
                    "cards" => PageKind::Cards,
                    "header" => PageKind::Header,
                    other => return Err(format!("Unknown page: {}", other).into()),
                };}
            "--template" => {
                params.template = PathBuf::from(args.next().ok_or("Missing value for --template")?);}
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
            _ => files.push(PathBuf::from(a)),
        }
    }

    if !files.is_empty() {
        params.files = Some(files);
    }
    Ok(())
}
