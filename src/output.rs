//! Output writers for rendered trees
//!
//! The generator produces plain lines; everything presentation-side lives
//! here: console printing (optionally colored), file output wrapped in a
//! fenced code block, and the trailing summary line.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{MAIN_SEPARATOR, Path};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::Tree;

/// Build the summary line reported after the tree.
pub fn summary(tree: &Tree) -> String {
    format!(
        "Total number: directories - {}, files - {}.",
        tree.directories, tree.files
    )
}

/// Directory lines carry a trailing path separator; that is what the
/// colorizer keys on, so coloring never has to re-derive entry kinds.
fn is_directory_line(line: &str) -> bool {
    line.ends_with(MAIN_SEPARATOR)
}

/// Write one tree line to the stream, coloring the name portion of
/// directory lines blue. Connectors and prefixes stay uncolored.
fn write_line(stdout: &mut StandardStream, line: &str) -> io::Result<()> {
    if is_directory_line(line) {
        let name_start = line.rfind("── ").map(|i| i + "── ".len());
        let (prefix, name) = match name_start {
            Some(i) => line.split_at(i),
            // Head line: no connector, the whole line is the root name
            None => ("", line),
        };
        write!(stdout, "{prefix}")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(stdout, "{name}")?;
        stdout.reset()?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

/// Print the tree and its summary to standard output.
pub fn print_tree(tree: &Tree, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for line in &tree.lines {
        write_line(&mut stdout, line)?;
    }
    writeln!(stdout)?;
    writeln!(stdout, "{}", summary(tree))?;
    Ok(())
}

/// Write the tree to `path` as plain text, the tree lines wrapped in a
/// fenced code block, followed by the summary.
pub fn write_tree_to_file(tree: &Tree, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "```")?;
    for line in &tree.lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "```")?;
    writeln!(out)?;
    writeln!(out, "{}", summary(tree))?;
    out.flush()
}
