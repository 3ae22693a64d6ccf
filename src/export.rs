//! Non-interactive output for `--print`: the whole tree, fully expanded.

use crate::tree::{TreeDataSource, TreeNode};
use crate::ui::guides::TreeGuides;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PrintFormat {
    /// Indented outline with guide lines
    Text,
    /// Nested JSON objects
    Json,
}

/// Write `root` and every descendant, one line per node.
pub fn write_text<T, W>(root: &T, out: &mut W, guides: TreeGuides) -> io::Result<()>
where
    T: TreeDataSource,
    W: Write,
{
    write_line(root, &[], out, guides)?;
    let mut last = Vec::new();
    write_children(root, &mut last, out, guides)
}

fn write_children<T, W>(
    node: &T,
    last: &mut Vec<bool>,
    out: &mut W,
    guides: TreeGuides,
) -> io::Result<()>
where
    T: TreeDataSource,
    W: Write,
{
    let children = node.children();
    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        last.push(i + 1 == count);
        write_line(child, last, out, guides)?;
        write_children(child, last, out, guides)?;
        last.pop();
    }
    Ok(())
}

fn write_line<T, W>(node: &T, last: &[bool], out: &mut W, guides: TreeGuides) -> io::Result<()>
where
    T: TreeDataSource,
    W: Write,
{
    let prefix = guides.prefix(last);
    match node.detail_text() {
        Some(detail) => writeln!(out, "{}{}  ({})", prefix, node.display_text(), detail),
        None => writeln!(out, "{}{}", prefix, node.display_text()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportNode {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ExportNode>,
}

pub fn export_node(node: &TreeNode<'_>) -> ExportNode {
    let track = node.track();
    ExportNode {
        text: node.display_text().into_owned(),
        path: track.map(|t| t.path.clone()),
        duration_ms: track.and_then(|t| t.duration_ms),
        children: node.children().iter().map(export_node).collect(),
    }
}

pub fn write_json<W: Write>(root: &TreeNode<'_>, out: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &export_node(root))?;
    writeln!(out)?;
    Ok(())
}
