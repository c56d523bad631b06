//! Diagnostic tree for instructions
//!
//! Builders project themselves into a `TreeNode`; `render_tree` turns that
//! into text. Nothing in the encoding path depends on this module.

use crate::account_meta::AccountMeta;
use crate::address::Address;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    pub fn child(mut self, node: TreeNode) -> Self {
        self.children.push(node);
        self
    }
}

pub fn program_node(name: &str, program_id: &Address, children: Vec<TreeNode>) -> TreeNode {
    TreeNode::branch(format!("Program: {} {}", name, program_id), children)
}

pub fn instruction_node(name: &str, children: Vec<TreeNode>) -> TreeNode {
    TreeNode::branch(format!("Instruction: {}", name), children)
}

pub fn param_node(name: &str, value: impl fmt::Display) -> TreeNode {
    TreeNode::leaf(format!("{}: {}", name, value))
}

pub fn params_node(params: Vec<TreeNode>) -> TreeNode {
    TreeNode::branch(format!("Params[len={}]", params.len()), params)
}

/// Labelled account entries, labels right-aligned to the widest one
pub fn accounts_node(entries: &[(&str, Option<&AccountMeta>)]) -> TreeNode {
    let width = entries.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let children = entries
        .iter()
        .map(|(label, meta)| meta_node(&format!("{:>width$}", label), *meta))
        .collect::<Vec<_>>();
    TreeNode::branch(format!("Accounts[len={}]", entries.len()), children)
}

pub fn meta_node(label: &str, meta: Option<&AccountMeta>) -> TreeNode {
    match meta {
        Some(meta) => TreeNode::leaf(format!("{}: {} [{}]", label, meta.address, meta.flags())),
        None => TreeNode::leaf(format!("{}: <nil>", label)),
    }
}

/// Renders with box-drawing connectors, one node per line.
pub fn render_tree(root: &TreeNode) -> String {
    let mut out = String::new();
    out.push_str(&root.label);
    out.push('\n');
    render_children(&root.children, "", &mut out);
    out
}

fn render_children(children: &[TreeNode], prefix: &str, out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (connector, extension) = if last {
            ("└─ ", "   ")
        } else {
            ("├─ ", "│  ")
        };
        out.push_str(&format!("{}{}{}\n", prefix, connector, child.label));
        render_children(&child.children, &format!("{}{}", prefix, extension), out);
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_tree(self))
    }
}
