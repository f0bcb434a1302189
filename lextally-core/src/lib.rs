//! lextally Core - scanning engine (pure logic, no IO)
//!
//! Contains the character stream, the identifier frequency scanner, and the
//! frequency table. Only operates on in-memory data structures, no file IO
//! or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod lexer;
pub mod table;

// Re-export common types
pub use lexer::{CharStream, ScanError, Scanner, SourcePosition};
pub use table::FrequencyTable;
