/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Statement` and `Expression` sum types and the `Program` root
/// - expressions: Definitions for the expression forms
/// - statements: Definitions for the statement forms
/// - types: Type expressions and inline type definitions
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
