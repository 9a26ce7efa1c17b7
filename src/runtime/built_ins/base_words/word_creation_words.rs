use crate::{
    add_native_immediate_word, add_native_word,
    runtime::{
        data_structures::dictionary::{WordBody, WordInfo, WordRuntime},
        error::{self, script_error_str},
        interpreter::Interpreter,
    },
};
use std::sync::Arc;

/// Start the creation of a new word.  Pull the name of the word from the next token in the token
/// stream.
fn word_start_word(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let name = interpreter.next_token_text()?;

    interpreter.context_mut().construction_new(name);

    Ok(())
}

/// End the creation of a new word and register it with the interpreter.
fn word_end_word(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let construction = interpreter.context_mut().construction_pop();

    let Some(construction) = construction else {
        return script_error_str(interpreter, "Found ; without a word being defined.");
    };

    interpreter.define_word(WordInfo {
        name: construction.name,
        runtime: WordRuntime::Normal,
        body: WordBody::Scripted(Arc::new(construction.code)),
    });

    Ok(())
}

/// Register the word creation words.
pub fn register_word_creation_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, ":", word_start_word);

    add_native_immediate_word!(interpreter, ";", word_end_word);
}
