/// Words that manipulate the data stack.
mod stack_words;

/// Simple arithmetic.
mod simple_arithmetic_words;

/// Words that work with words, references and conditional execution.
mod word_words;

/// Words that create new words.
mod word_creation_words;

/// Words that build literals.
mod literal_words;

/// Words that work with logic and Value equality.
mod math_logic_and_bit_words;

use crate::runtime::{
    built_ins::base_words::{
        literal_words::register_literal_words,
        math_logic_and_bit_words::register_math_logic_and_bit_words,
        simple_arithmetic_words::register_simple_arithmetic_words,
        stack_words::register_stack_words, word_creation_words::register_word_creation_words,
        word_words::register_word_words,
    },
    interpreter::Interpreter,
};

/// Called to register all of the core words of the language.
pub fn register_base_words(interpreter: &mut dyn Interpreter) {
    register_stack_words(interpreter);
    register_simple_arithmetic_words(interpreter);
    register_word_words(interpreter);
    register_word_creation_words(interpreter);
    register_literal_words(interpreter);
    register_math_logic_and_bit_words(interpreter);
}
