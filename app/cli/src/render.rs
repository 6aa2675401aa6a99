//! Tree rendering.
//!
//! Drives the walker and prints one decorated line per event: indentation
//! guides derived from ancestor `is_last` flags, a connector, the classified
//! icon and color, and an optional status marker. Unreadable subtrees render
//! as an inline marker line and the walk carries on.

use std::io;
use std::io::Write;

use seetree_git_status::StatusProvider;
use seetree_walk::WalkEvent;

use crate::classify::classify;
use crate::style::RESET;
use crate::style::Style;
use crate::style::status_ansi;

pub struct Renderer<'a, W: Write> {
    out: W,
    status: &'a dyn StatusProvider,
}

impl<'a, W: Write> Renderer<'a, W> {
    pub fn new(out: W, status: &'a dyn StatusProvider) -> Self {
        Self { out, status }
    }

    pub fn render(&mut self, events: impl IntoIterator<Item = WalkEvent>) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "🌳 {}Project Structure{RESET}",
            Style::Folder.ansi()
        )?;
        writeln!(self.out, "==================")?;

        // guides[d] is true when the ancestor at depth d was the last of its
        // siblings, which turns that column's guide into blank space.
        let mut guides: Vec<bool> = Vec::new();
        for event in events {
            match event {
                WalkEvent::Entry(entry) => {
                    guides.truncate(entry.depth);
                    let prefix = prefix_for(&guides);
                    let connector = if entry.is_last { "└── " } else { "├── " };
                    let (icon, style) = classify(&entry.name, entry.is_dir);
                    let marker = self
                        .status
                        .lookup(&entry.rel_path)
                        .map(|status| {
                            format!(" {}[{}]{RESET}", status_ansi(status), status.code())
                        })
                        .unwrap_or_default();
                    writeln!(
                        self.out,
                        "{prefix}{connector}{icon} {}{}{RESET}{marker}",
                        style.ansi(),
                        entry.name
                    )?;
                    if entry.is_dir {
                        guides.push(entry.is_last);
                    }
                }
                WalkEvent::Denied { depth, .. } => {
                    guides.truncate(depth);
                    let prefix = prefix_for(&guides);
                    writeln!(self.out, "{prefix}└── ⛔ [permission denied]")?;
                }
            }
        }
        Ok(())
    }
}

fn prefix_for(guides: &[bool]) -> String {
    guides
        .iter()
        .map(|last| if *last { "    " } else { "│   " })
        .collect()
}

#[cfg(test)]
#[path = "render.test.rs"]
mod tests;
