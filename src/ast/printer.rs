use std::{fmt::Display, io};

use super::ast::{Node, NodeKind};

const INDENT: &str = "  ";

/// Prints `node` and the statements chained after it.
///
/// Output goes to stderr, not stdout, so a dump never mixes with a program's
/// regular output. Use [`write_tree`] to send it anywhere else.
///
/// `level` is the nesting depth of `node`; children are printed one level deeper
/// and siblings at the same level. Nothing is written for `None`.
pub fn print_tree(node: Option<&Node>, level: usize) {
    let text = render_tree(node, level);
    if !text.is_empty() {
        eprint!("{}", text);
    }
}

/// Returns exactly the text `print_tree` would write.
pub fn render_tree(node: Option<&Node>, level: usize) -> String {
    let mut out = String::new();
    push_chain(&mut out, node, level);
    out
}

pub fn write_tree<W: io::Write>(
    writer: &mut W,
    node: Option<&Node>,
    level: usize,
) -> io::Result<()> {
    writer.write_all(render_tree(node, level).as_bytes())
}

fn push_line(out: &mut String, level: usize, label: &str) {
    out.push_str(&INDENT.repeat(level));
    out.push_str(label);
    out.push('\n');
}

// Siblings are walked in a loop instead of by recursion, so only nesting
// depth costs stack.
fn push_chain(out: &mut String, node: Option<&Node>, level: usize) {
    let mut current = node;
    while let Some(node) = current {
        push_node(out, node, level);
        current = node.next.as_deref();
    }
}

fn push_node(out: &mut String, node: &Node, level: usize) {
    match &node.kind {
        NodeKind::IntLiteral { value } => push_line(out, level, &format!("Int: {}", value)),
        NodeKind::Variable { name } => push_line(out, level, &format!("Var: {}", name)),
        NodeKind::BinaryOp {
            operator,
            left,
            right,
        } => {
            push_line(out, level, &format!("Op: {}", operator.code()));
            push_chain(out, Some(left.as_ref()), level + 1);
            push_chain(out, Some(right.as_ref()), level + 1);
        }
        NodeKind::UnaryOp { operator, operand } => {
            push_line(out, level, &format!("Unary Op: {}", operator.code()));
            push_chain(out, Some(operand.as_ref()), level + 1);
        }
        NodeKind::Assign { name, value } => {
            push_line(out, level, &format!("Assign: {}", name));
            push_chain(out, Some(value.as_ref()), level + 1);
        }
        NodeKind::VarDecl { name, initializer } => {
            push_line(out, level, &format!("VarDecl: {}", name));
            push_chain(out, initializer.as_deref(), level + 1);
        }
        NodeKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            push_line(out, level, "If");
            push_chain(out, Some(condition.as_ref()), level + 1);
            push_chain(out, Some(then_branch.as_ref()), level + 1);
            if let Some(else_branch) = else_branch {
                push_line(out, level, "Else");
                push_chain(out, Some(else_branch.as_ref()), level + 1);
            }
        }
        NodeKind::While { condition, body } => {
            push_line(out, level, "While");
            push_chain(out, Some(condition.as_ref()), level + 1);
            push_chain(out, Some(body.as_ref()), level + 1);
        }
        NodeKind::Block { body } => {
            push_line(out, level, "Block");
            push_chain(out, body.as_deref(), level + 1);
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render_tree(Some(self), 0))
    }
}
