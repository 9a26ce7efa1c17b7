use crate::{
    add_native_word,
    runtime::{error, interpreter::Interpreter},
};

/// Duplicate the top value on the data stack.
///
/// Signature: `value -- value value`
fn word_dup(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.peek()?;

    interpreter.push(value);

    Ok(())
}

/// Drop the top value on the data stack.  Dropping from an empty stack does nothing.
///
/// Signature: `value -- `
fn word_pop(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.try_pop();

    Ok(())
}

/// Register the stack manipulation words.
pub fn register_stack_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "dup", word_dup);

    add_native_word!(interpreter, "pop", word_pop);
}
