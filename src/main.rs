//! CLI entry point for sapling

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use sapling::{TreeConfig, generate, print_tree, write_tree_to_file};

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
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sapling")]
#[command(about = "A directory tree generator that filters out noise directories")]
#[command(version)]
struct Args {
    /// Root directory to render
    #[arg(default_value = ".", value_name = "ROOT_DIR")]
    root_dir: PathBuf,

    /// Generate a directory-only tree (files are neither shown nor counted)
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Stop ignoring directories like '.git' and 'venv'
    #[arg(short = 's', long = "strict")]
    strict: bool,

    /// Exclude directories with this exact name (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<usize>,

    /// Save the tree to a file instead of printing it
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    // The core does not re-validate the root; check it here
    if !args.root_dir.is_dir() {
        eprintln!(
            "sapling: '{}' is not a directory",
            args.root_dir.display()
        );
        process::exit(1);
    }

    let config = TreeConfig {
        dirs_only: args.dirs_only,
        strict: args.strict,
        ignore: args.ignore,
        max_depth: args.level,
    };

    let tree = match generate(&args.root_dir, &config) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!(
                "sapling: cannot read '{}': {}",
                args.root_dir.display(),
                e
            );
            process::exit(1);
        }
    };

    let result = match args.output {
        Some(ref path) => write_tree_to_file(&tree, path),
        None => print_tree(&tree, should_use_color(args.color)),
    };

    if let Err(e) = result {
        eprintln!("sapling: error writing output: {}", e);
        process::exit(1);
    }
}
