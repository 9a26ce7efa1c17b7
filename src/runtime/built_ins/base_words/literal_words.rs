use crate::{
    add_native_immediate_word, add_native_word,
    runtime::{
        data_structures::value::Value,
        error::{self, script_error_str},
        interpreter::Interpreter,
    },
};

/// Open a new literal.  Everything up to the matching `]` is collected instead of executed.
///
/// Signature: ` -- `
fn word_literal_start(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.context_mut().literals_mut().push_frame();
    Ok(())
}

/// Close the literal on top and push it.  The result always goes to the data stack, even when
/// other literals are still open.
///
/// Signature: ` -- literal`
fn word_literal_end(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let items = interpreter.context_mut().literals_mut().pop_frame();

    match items {
        Some(items) => {
            interpreter.push(Value::from(items));
            Ok(())
        }

        None => script_error_str(interpreter, "Found ] without an open literal."),
    }
}

/// Register the literal words.
pub fn register_literal_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "[", word_literal_start);

    add_native_immediate_word!(interpreter, "]", word_literal_end);
}
