use std::{
    cell::{Ref, RefCell},
    fmt::{Debug, Display},
    rc::{Rc, Weak},
};

use crate::errors::errors::{Error, ErrorImpl};

/// Node Kinds
///
/// Closed set of grammar productions a node may represent.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeKind {
    Program,

    IntDeclaration,
    ExpressionStatement,
    AssignmentStatement,

    Primary,
    Multiplicative,
    Additive,

    Identifier,
    IntLiteral,
}

impl NodeKind {
    /// Whether nodes of this kind may appear directly under `Program`.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::IntDeclaration
                | NodeKind::ExpressionStatement
                | NodeKind::AssignmentStatement
        )
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// AST Node
///
/// A node exclusively owns its children. The parent link is a weak
/// back-reference set once, when the node is attached.
///
/// Trees are read-only outside this crate; only the parser attaches
/// children.
///
/// ```compile_fail
/// use calc_front::{ast::ast::{Node, NodeKind}, parser::parser::parse_source};
///
/// let program = parse_source("1;").unwrap();
/// program.add_child(Node::new(NodeKind::IntLiteral, "99")).unwrap();
/// ```
pub struct Node {
    kind: NodeKind,
    text: String,
    children: RefCell<Vec<Rc<Node>>>,
    parent: RefCell<Option<Weak<Node>>>,
}

impl Node {
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Rc<Node> {
        Rc::new(Node {
            kind,
            text: text.into(),
            children: RefCell::new(vec![]),
            parent: RefCell::new(None),
        })
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> Ref<'_, [Rc<Node>]> {
        Ref::map(self.children.borrow(), |children| children.as_slice())
    }

    pub fn child(&self, index: usize) -> Option<Rc<Node>> {
        self.children.borrow().get(index).cloned()
    }

    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.borrow().is_empty()
    }

    /// Returns the parent, or `None` for a detached node or a root.
    pub fn parent(&self) -> Option<Rc<Node>> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Appends `child` and points its parent link at `self`.
    ///
    /// A node can be attached once; attaching it a second time, or
    /// beneath itself or one of its own descendants, is refused.
    pub(crate) fn add_child(self: &Rc<Self>, child: Rc<Node>) -> Result<(), Error> {
        if child.parent.borrow().is_some() {
            return Err(Error::new(
                ErrorImpl::NodeAlreadyAttached { kind: child.kind },
                Some(child.text.clone()),
            ));
        }

        let mut ancestor = Some(Rc::clone(self));
        while let Some(node) = ancestor {
            if Rc::ptr_eq(&node, &child) {
                return Err(Error::new(
                    ErrorImpl::CyclicAttachment,
                    Some(child.text.clone()),
                ));
            }
            ancestor = node.parent();
        }

        *child.parent.borrow_mut() = Some(Rc::downgrade(self));
        self.children.borrow_mut().push(child);
        Ok(())
    }
}

impl Drop for Node {
    // Left-folded expressions nest once per operator, so subtrees are
    // released from a work list instead of by recursive drops.
    fn drop(&mut self) {
        let mut pending = std::mem::take(self.children.get_mut());

        while let Some(child) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(child) {
                pending.append(node.children.get_mut());
            }
        }
    }
}

impl Debug for Node {
    // Children are listed by kind only; the parent link is left out.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let children: Vec<NodeKind> = self.children.borrow().iter().map(|child| child.kind).collect();

        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("text", &self.text)
            .field("children", &children)
            .finish()
    }
}
