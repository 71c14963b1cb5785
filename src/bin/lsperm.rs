//! Flat listing of octal permissions for every entry under a directory

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use lstree::{FlatFormatter, TreeWalker, WalkerConfig, logging};

#[derive(Parser, Debug)]
#[command(name = "lsperm")]
#[command(about = "List octal permissions of every file and directory under PATH")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Log skipped entries to stderr (-vv for trace output)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

// lsperm reports problems on stderr but always exits successfully.
fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return;
        }
    };
    logging::init(args.verbose);

    let mut formatter = FlatFormatter::new(BufWriter::new(io::stdout().lock()));
    if let Err(e) = TreeWalker::new(WalkerConfig::default()).walk(&args.path, &mut formatter) {
        eprintln!("lsperm: {}", e);
    }
}
