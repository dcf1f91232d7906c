use crate::dependencies::domain::{DependencyNode, DependencySnapshot, DiagnosticLevel};
use crate::ports::outbound::SnapshotFormatter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};
use std::fmt::Write;
use std::sync::Arc;

/// TextSnapshotFormatter adapter rendering snapshots as an indented tree
///
/// One block per scope, groups at the first level and dependencies below.
pub struct TextSnapshotFormatter {
    colored: bool,
}

impl TextSnapshotFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn node_line(&self, node: &DependencyNode) -> String {
        let caption_style = if node.resolved() {
            Style::new()
        } else {
            Style::new().yellow()
        };
        let mut line = self.paint(node.caption(), caption_style);

        match node.diagnostic_level() {
            DiagnosticLevel::None => {}
            DiagnosticLevel::Warning => {
                line.push_str("  ");
                line.push_str(&self.paint("⚠ warning", Style::new().yellow()));
            }
            DiagnosticLevel::Error => {
                line.push_str("  ");
                line.push_str(&self.paint("✖ error", Style::new().red().bold()));
            }
        }
        if node.implicit() {
            line.push_str("  ");
            line.push_str(&self.paint("(implicit)", Style::new().dimmed()));
        }
        line
    }

    fn render(&self, out: &mut String, snapshot: &DependencySnapshot) -> std::fmt::Result {
        writeln!(
            out,
            "{} (version {})",
            self.paint(snapshot.scope().as_str(), Style::new().bold()),
            snapshot.version()
        )?;

        if snapshot.is_empty() {
            return writeln!(out, "  (no dependencies)");
        }

        for group in snapshot.groups() {
            let mut header = self.paint(group.caption(), Style::new().cyan().bold());
            if group.has_unresolved() {
                header.push(' ');
                header.push_str(&self.paint("[unresolved]", Style::new().yellow()));
            }
            writeln!(out, "  {}", header)?;

            for node in snapshot.dependencies_of(group.provider_type()) {
                writeln!(out, "    {}", self.node_line(node))?;
            }
        }
        Ok(())
    }
}

impl SnapshotFormatter for TextSnapshotFormatter {
    fn format(&self, snapshots: &[Arc<DependencySnapshot>]) -> Result<String> {
        let mut out = String::new();
        for (index, snapshot) in snapshots.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            self.render(&mut out, snapshot)?;
        }
        Ok(out)
    }
}
