/// The core words of the language.
pub mod base_words;

/// Words that write program output.
pub mod io_words;

/// Words that start and pause tasks.
pub mod thread_words;

use crate::runtime::{
    built_ins::{
        base_words::register_base_words, io_words::register_io_words,
        thread_words::register_thread_words,
    },
    interpreter::Interpreter,
};

/// Register every built-in word.
pub fn register_builtin_words(interpreter: &mut dyn Interpreter) {
    register_base_words(interpreter);
    register_io_words(interpreter);
    register_thread_words(interpreter);
}
