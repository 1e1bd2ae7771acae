/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node type, its closed kind tag and the builder operation
/// - dump: Depth-first textual rendering of a tree
pub mod ast;
pub mod dump;
