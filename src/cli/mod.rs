mod init;

use std::path::PathBuf;

use clap::Parser;

use crate::models::{config, Platform};

#[derive(Parser, Debug)]
#[command(name = "ps-init")]
#[command(about = "Scaffold a problem-solving directory and refresh the index", long_about = None)]
pub struct Cli {
    /// boj, swea or codetree (case-insensitive)
    pub platform: Platform,

    /// Problem id
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub id: u32,

    /// Root of the problem tree [default: ~/Desktop/ps]
    #[arg(long, env = "PS_ROOT")]
    pub root: Option<PathBuf>,
}

pub fn run(cli: Cli) {
    let root = match config::resolve_root(cli.root.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match init::init_problem(&root, cli.platform, cli.id) {
        Ok(stub) => println!("{}", stub.display()),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
