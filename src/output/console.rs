//! Console tree rendering
//!
//! Same traversal as the plain-text renderer, but written to stdout with
//! colors: directories bold cyan with a `/` suffix, files green.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{DirectoryNode, Node};

/// Print the tree to stdout with a `N directories, M files` footer.
pub fn print_tree(root_name: &str, root: &DirectoryNode, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(stdout, "{}/", root_name)?;
    stdout.reset()?;
    writeln!(stdout)?;

    print_children(root, &mut stdout, "")?;

    let (dir_count, file_count) = root.counts();
    writeln!(stdout)?;
    writeln!(stdout, "{} directories, {} files", dir_count, file_count)?;
    Ok(())
}

fn print_children(
    node: &DirectoryNode,
    stdout: &mut StandardStream,
    prefix: &str,
) -> io::Result<()> {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        write!(stdout, "{}{}", prefix, connector)?;

        match child {
            Node::Directory(dir) => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
                write!(stdout, "{}/", name)?;
                stdout.reset()?;
                writeln!(stdout)?;

                let child_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                print_children(dir, stdout, &child_prefix)?;
            }
            Node::File(_) => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(stdout, "{}", name)?;
                stdout.reset()?;
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}
