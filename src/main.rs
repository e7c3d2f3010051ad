mod generator;
mod project;
mod repo;
mod setup;

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository root; resolved from the executable's location when omitted
    #[arg(short, long)]
    root: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let result = repo::locate_root(args.root).and_then(|root| {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        setup::run(&root, &mut input, &mut output)
    });

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {e:#}").red());
        std::process::exit(1);
    }
}
