/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, Function and the closed statement/expression enums
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for the statement node types
/// - visitor: Exhaustive dispatch for passes over the tree
/// - printer: Indented tree dump
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod visitor;
