// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Box-drawing printer for the trie structure.

use std::io::{self, Write};

use super::{Trie, TrieNode};

const LAST_BRANCH: &str = "└─";
const MID_BRANCH: &str = "├─";
const LAST_INDENT: &str = "  ";
const MID_INDENT: &str = "│ ";

/// Prints a trie as an indented tree, one node per line, children in
/// ascending character order.
///
/// ```text
/// root
///  └─
///    └─c
///      └─a
///        ├─b
///        └─t
/// ```
pub struct TreePrinter<O: Write> {
    output: O,
}

impl<O: Write> TreePrinter<O> {
    /// Write the tree form of `trie` to the given output.
    pub fn print_tree(output: O, trie: &Trie) -> io::Result<()> {
        let mut printer = TreePrinter { output };

        writeln!(printer.output, "{ROOT_LABEL}")?;
        for line in TreeLines::new(trie.root()) {
            writeln!(printer.output, "{line}")?;
        }
        printer.output.flush()
    }
}

/// Renders `trie` in the same layout as [`TreePrinter::print_tree`].
pub(super) fn render(trie: &Trie) -> String {
    let mut rendered = format!("{ROOT_LABEL}\n");
    for line in TreeLines::new(trie.root()) {
        rendered.push_str(&line);
        rendered.push('\n');
    }
    rendered
}

const ROOT_LABEL: &str = "root";

/// Preorder walk yielding one formatted line per node.
struct TreeLines<'a> {
    stack: Vec<(&'a TrieNode, String, bool)>,
}

impl<'a> TreeLines<'a> {
    fn new(root: &'a TrieNode) -> Self {
        Self {
            stack: vec![(root, String::from(" "), true)],
        }
    }
}

impl<'a> Iterator for TreeLines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let (node, indent, is_last) = self.stack.pop()?;
        let (branch, extension) = if is_last {
            (LAST_BRANCH, LAST_INDENT)
        } else {
            (MID_BRANCH, MID_INDENT)
        };

        let child_indent = format!("{indent}{extension}");
        let child_count = node.children().len();
        for (i, child) in node.children().values().enumerate().rev() {
            self.stack
                .push((child, child_indent.clone(), i + 1 == child_count));
        }

        Some(format!("{indent}{branch}{}", node.value()))
    }
}
