use crate::{
    add_native_word,
    lang::compilation::process_values,
    runtime::{
        data_structures::value::Value,
        error::{self, script_error},
        interpreter::Interpreter,
        locking::read,
    },
};

/// Run an executable value.  A reference runs the word it names, looked up now in the dictionary
/// it was taken from.  A literal has each of it's items dispatched as if freshly typed.
pub fn execute_value(interpreter: &mut dyn Interpreter, value: Value) -> error::Result<()> {
    match value {
        Value::Reference(dictionary, name) => {
            let word = read(&dictionary).try_get(&name).cloned();

            match word {
                Some(word) => {
                    let location = interpreter.current_location().clone().unwrap_or_default();
                    interpreter.execute_word(&location, &word)
                }

                None => script_error(interpreter, format!("Bad word: {}.", name)),
            }
        }

        Value::Literal(items) => process_values(interpreter, &items),

        other => script_error(
            interpreter,
            format!("Can not run {} {}.", other.type_name(), other),
        ),
    }
}

/// Take a reference to the word named by the next token.  The word doesn't have to exist yet.
///
/// Signature: ` -- reference`
fn word_reference(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let name = interpreter.next_token_text()?;
    let dictionary = interpreter.dictionary();

    interpreter.push(Value::Reference(dictionary, name));
    Ok(())
}

/// Run a reference or a literal.
///
/// Signature: `executable -- ???`
fn word_run(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;
    execute_value(interpreter, value)
}

/// Conditionally run a reference or a literal.  A zero condition leaves the executable value where
/// it is on the stack.
///
/// Signature: `executable condition -- ???`
fn word_if(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let condition = interpreter.pop_as_int()?;

    if condition == 0 {
        return Ok(());
    }

    let value = interpreter.pop()?;
    execute_value(interpreter, value)
}

/// Register the words that work with words.
pub fn register_word_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "&", word_reference);

    add_native_word!(interpreter, "run", word_run);

    add_native_word!(interpreter, "if", word_if);
}
