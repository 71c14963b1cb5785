//! CLI entry point for lstree

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use lstree::{
    InodeFormatter, JsonFormatter, LongFormatter, OutputConfig, SystemResolver, TreeWalker,
    WalkerConfig, logging,
};
use termcolor::BufferedStandardStream;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lstree")]
#[command(about = "Print a directory tree with file types, inode numbers and ownership")]
#[command(version)]
struct Args {
    /// Directory to walk
    path: PathBuf,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Show permissions, owner, group and size for regular files
    #[arg(short = 'l', long = "long", conflicts_with = "json")]
    long: bool,

    /// Output one JSON object per entry
    #[arg(long = "json")]
    json: bool,

    /// Print directory and file counts after the tree
    #[arg(long = "summary")]
    summary: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log skipped entries to stderr (-vv for trace output)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let walker = TreeWalker::new(WalkerConfig {
        max_depth: args.level,
    });
    let config = OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        show_summary: args.summary,
    };

    let result = if args.json {
        let mut formatter = JsonFormatter::new(io::BufWriter::new(io::stdout().lock()), config);
        walker.walk(&args.path, &mut formatter)
    } else {
        let stdout = BufferedStandardStream::stdout(config.color_choice());
        if args.long {
            let mut formatter = LongFormatter::new(stdout, SystemResolver::new(), config);
            walker.walk(&args.path, &mut formatter)
        } else {
            let mut formatter = InodeFormatter::new(stdout, config);
            walker.walk(&args.path, &mut formatter)
        }
    };

    if let Err(e) = result {
        eprintln!("lstree: {}", e);
        process::exit(1);
    }
}
