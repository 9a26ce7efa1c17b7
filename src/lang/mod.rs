/// Module for source code locations.
pub mod source_buffer;

/// Module for turning the input into a stream of tokens, and for the senary numeral rules.
pub mod tokenizing;

/// The token dispatcher.  Every token is run through here to decide if it's skipped as a comment,
/// collected into a literal, compiled into a word or executed right away.
pub mod compilation;
