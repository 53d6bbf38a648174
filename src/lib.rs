//! A tree-walking interpreter for Lox, the small dynamically-typed
//! scripting language from *Crafting Interpreters*.
//!
//! The pipeline is strictly linear:
//!
//! ```text
//! source text ──► Scanner ──► tokens ──► Parser ──► AST ──► Interpreter ──► effects
//! ```
//!
//! # Modules
//!
//! - [`token`] - `Token`, `TokenKind`, the closed lexical vocabulary
//! - [`value`] - the dynamic `Value` domain and the `Callable` capability
//! - [`scanner`] - source text to token stream
//! - [`ast`] - the `Expr`/`Stmt` sum types, plus a pretty-printer and an
//!   RPN renderer as independent passes over the same tree
//! - [`parser`] - recursive-descent parsing with statement-level error
//!   recovery
//! - [`environment`] - the lexical scope chain
//! - [`interpreter`] - the tree-walking evaluator
//! - [`reporter`] - diagnostic rendering and had-error bookkeeping
//!
//! # Example
//!
//! ```
//! use lox::interpreter::Interpreter;
//! use lox::parser::Parser;
//! use lox::scanner::Scanner;
//!
//! let source = "print 1 + 2;";
//! let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
//! assert!(scan_errors.is_empty());
//!
//! let (ast, parse_errors) = Parser::new(tokens).parse();
//! assert!(parse_errors.is_empty());
//!
//! Interpreter::new().interpret(&ast.unwrap()).unwrap();
//! ```

pub mod ast;
pub mod environment;
pub mod interpreter;
pub mod parser;
pub mod reporter;
pub mod scanner;
pub mod token;
pub mod value;
