//! CLI entry point for grove

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use grove::{
    ConsoleReporter, DirectoryNode, Reporter, ScanFilters, TreeWalker, parse_list, print_tree,
    write_document, write_markdown,
};

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
#[command(name = "grove")]
#[command(about = "Scan a project directory into a structured tree with manifest metadata")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Where to write the JSON document
    #[arg(short = 'o', long = "output", default_value = "project_structure.json")]
    output: PathBuf,

    /// Skip writing the JSON document
    #[arg(long = "no-json")]
    no_json: bool,

    /// Name to skip at any depth; replaces the default set (can be used multiple times)
    #[arg(short = 'i', long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Print the tree to the console
    #[arg(short = 'p', long = "pretty")]
    pretty: bool,

    /// Write a markdown tree document (e.g. README_TREE.md)
    #[arg(long = "tree-md", value_name = "FILE")]
    tree_md: Option<PathBuf>,

    /// Relative paths whose own files are skipped while their subdirectories
    /// are still walked (comma or newline separated)
    #[arg(long = "discard-files-in", value_name = "PATHS")]
    discard_files_in: Option<String>,

    /// Relative paths recorded as empty directories, never descended into
    /// (comma or newline separated)
    #[arg(long = "discard-all-in", value_name = "PATHS")]
    discard_all_in: Option<String>,

    /// File names to skip everywhere (comma or newline separated)
    #[arg(long = "discard-files", value_name = "NAMES")]
    discard_files: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn filters(&self) -> ScanFilters {
        ScanFilters {
            ignore: if self.ignore.is_empty() {
                ScanFilters::default().ignore
            } else {
                self.ignore.clone()
            },
            discard_files_in: self
                .discard_files_in
                .as_deref()
                .map(parse_list)
                .unwrap_or_default(),
            discard_all_in: self
                .discard_all_in
                .as_deref()
                .map(parse_list)
                .unwrap_or_default(),
            discard_files: self
                .discard_files
                .as_deref()
                .map(parse_list)
                .unwrap_or_default(),
        }
    }
}

/// Resolve the scan root to an absolute path.
fn resolve_root(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    joined.canonicalize().unwrap_or(joined)
}

fn write_outputs(
    args: &Args,
    root_name: &str,
    tree: &DirectoryNode,
    use_color: bool,
    reporter: &mut dyn Reporter,
) -> io::Result<()> {
    if args.pretty {
        print_tree(root_name, tree, use_color)?;
    }

    if let Some(ref tree_md) = args.tree_md {
        write_markdown(tree_md, root_name, tree)?;
        reporter.info(&format!("Tree written to {}", tree_md.display()));
    }

    if !args.no_json {
        write_document(&args.output, root_name, tree)?;
        reporter.info(&format!("JSON written to {}", args.output.display()));
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    let use_color = should_use_color(args.color);

    let root = resolve_root(&args.path);
    if !root.is_dir() {
        eprintln!("grove: '{}' is not a directory", args.path.display());
        process::exit(1);
    }

    let mut reporter = ConsoleReporter::new(use_color);
    reporter.info(&format!("Scanning {}", root.display()));

    let walker = TreeWalker::new(args.filters());
    let tree = match walker.walk(&root, &mut reporter) {
        Some(tree) => tree,
        None => {
            eprintln!("grove: '{}' is not a directory", args.path.display());
            process::exit(1);
        }
    };

    let root_name = root
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string());

    if let Err(e) = write_outputs(&args, &root_name, &tree, use_color, &mut reporter) {
        eprintln!("grove: error writing output: {}", e);
        process::exit(1);
    }
}
