/// AST (Abstract Syntax Tree) module
/// Contains the tree produced by the parser
///
/// Submodules:
/// - ast: The program root and let-bindings
/// - expressions: The expression sum type
/// - pretty: Rendering a tree back to source text
pub mod ast;
pub mod expressions;
pub mod pretty;
