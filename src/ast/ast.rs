use std::fmt::Debug;

use super::operators::OpKind;

/// Node Types
///
/// Fieldless mirror of `NodeKind`, for comparing variants without matching on payloads.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeType {
    IntLiteral,
    Variable,
    BinaryOp,
    UnaryOp,
    Assign,
    VarDecl,
    If,
    While,
    Block,
}

/// Node Kinds
///
/// Payload of a node. Children are owned by the node that holds them.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    IntLiteral {
        value: i64,
    },
    Variable {
        name: String,
    },
    BinaryOp {
        operator: OpKind,
        left: Box<Node>,
        right: Box<Node>,
    },
    UnaryOp {
        operator: OpKind,
        operand: Box<Node>,
    },
    Assign {
        name: String,
        value: Box<Node>,
    },
    VarDecl {
        name: String,
        initializer: Option<Box<Node>>,
    },
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    /// `body` is the head of the block's statement chain, `None` for `{}`.
    Block {
        body: Option<Box<Node>>,
    },
}

/// AST Node
///
/// `next` links a node to the statement that follows it in a block or in the
/// top-level program. It is never used for anything else.
pub struct Node {
    pub kind: NodeKind,
    pub next: Option<Box<Node>>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Node { kind, next: None }
    }

    pub fn int_literal(value: i64) -> Self {
        Node::new(NodeKind::IntLiteral { value })
    }

    pub fn variable(name: &str) -> Self {
        Node::new(NodeKind::Variable {
            name: name.to_string(),
        })
    }

    pub fn binary_op(operator: OpKind, left: Node, right: Node) -> Self {
        Node::new(NodeKind::BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary_op(operator: OpKind, operand: Node) -> Self {
        Node::new(NodeKind::UnaryOp {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn assign(name: &str, value: Node) -> Self {
        Node::new(NodeKind::Assign {
            name: name.to_string(),
            value: Box::new(value),
        })
    }

    pub fn var_decl(name: &str, initializer: Option<Node>) -> Self {
        Node::new(NodeKind::VarDecl {
            name: name.to_string(),
            initializer: initializer.map(Box::new),
        })
    }

    pub fn if_stmt(condition: Node, then_branch: Node, else_branch: Option<Node>) -> Self {
        Node::new(NodeKind::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        })
    }

    pub fn while_stmt(condition: Node, body: Node) -> Self {
        Node::new(NodeKind::While {
            condition: Box::new(condition),
            body: Box::new(body),
        })
    }

    /// Wraps an already linked statement chain (see [`chain`]) into a block.
    pub fn block(statements: Option<Box<Node>>) -> Self {
        Node::new(NodeKind::Block { body: statements })
    }

    pub fn get_node_type(&self) -> NodeType {
        match &self.kind {
            NodeKind::IntLiteral { .. } => NodeType::IntLiteral,
            NodeKind::Variable { .. } => NodeType::Variable,
            NodeKind::BinaryOp { .. } => NodeType::BinaryOp,
            NodeKind::UnaryOp { .. } => NodeType::UnaryOp,
            NodeKind::Assign { .. } => NodeType::Assign,
            NodeKind::VarDecl { .. } => NodeType::VarDecl,
            NodeKind::If { .. } => NodeType::If,
            NodeKind::While { .. } => NodeType::While,
            NodeKind::Block { .. } => NodeType::Block,
        }
    }

    /// Returns the identifier carried by `Variable`, `Assign` and `VarDecl` nodes.
    pub fn get_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Variable { name }
            | NodeKind::Assign { name, .. }
            | NodeKind::VarDecl { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Attaches `sibling` after the last node of the chain starting at `self`.
    pub fn append(&mut self, sibling: Node) {
        let mut slot = &mut self.next;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Box::new(sibling));
    }

    /// Iterates the chain starting at (and including) `self`.
    pub fn siblings(&self) -> Siblings<'_> {
        Siblings {
            current: Some(self),
        }
    }

    pub fn chain_len(&self) -> usize {
        self.siblings().count()
    }

    /// Statements of a block in order. Empty for every other kind of node.
    pub fn block_statements(&self) -> Siblings<'_> {
        let current = match &self.kind {
            NodeKind::Block { body } => body.as_deref(),
            _ => None,
        };
        Siblings { current }
    }
}

// Unlinks the sibling chain one node at a time; recursive drops of a long
// program would otherwise overflow the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

// Clone, equality and Debug walk `next` in a loop for the same reason; only
// nesting depth is recursive.
impl Clone for Node {
    fn clone(&self) -> Self {
        let rest: Vec<Node> = self
            .siblings()
            .skip(1)
            .map(|node| Node::new(node.kind.clone()))
            .collect();
        Node {
            kind: self.kind.clone(),
            next: chain(rest),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.siblings()
            .map(|node| &node.kind)
            .eq(other.siblings().map(|node| &node.kind))
    }
}

/// Formats the chain starting at this node as a list of node kinds.
impl Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.siblings().map(|node| &node.kind))
            .finish()
    }
}

pub struct Siblings<'a> {
    current: Option<&'a Node>,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(node)
    }
}

/// Links `statements` into a sibling chain, keeping their order.
///
/// Returns the head of the chain, or `None` when there are no statements.
/// Any `next` link a statement already carries is replaced.
pub fn chain<I>(statements: I) -> Option<Box<Node>>
where
    I: IntoIterator<Item = Node>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut head: Option<Box<Node>> = None;
    for mut statement in statements.into_iter().rev() {
        statement.next = head;
        head = Some(Box::new(statement));
    }
    head
}
