/// Module contains the Value enumeration and it's implementation.  The value is one of the core
/// data structures of the interpreter.  It is used to represent everything a script can put on the
/// data stack.
pub mod value;

/// The dictionary module provides the shared word dictionary used by the interpreter.
pub mod dictionary;

/// The stack of frames used while a `[ ... ]` literal is being collected.
pub mod literal_stack;
