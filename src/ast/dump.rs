use std::{
    fmt::{self, Display},
    rc::Rc,
};

use super::ast::Node;

/// Renders the tree rooted at `node` depth-first, pre-order, one
/// `<indent><Kind> <text>` line per node, indenting one tab per level.
pub fn dump_ast(node: &Node) -> String {
    node.to_string()
}

fn write_line(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    writeln!(f, "{}{} {}", "\t".repeat(depth), node.kind(), node.text())
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(f, self, 0)?;

        // Children are pushed in reverse so they pop in source order.
        let mut pending: Vec<(Rc<Node>, usize)> = self
            .children()
            .iter()
            .rev()
            .map(|child| (Rc::clone(child), 1))
            .collect();

        while let Some((node, depth)) = pending.pop() {
            write_line(f, &node, depth)?;
            pending.extend(
                node.children()
                    .iter()
                    .rev()
                    .map(|child| (Rc::clone(child), depth + 1)),
            );
        }

        Ok(())
    }
}
