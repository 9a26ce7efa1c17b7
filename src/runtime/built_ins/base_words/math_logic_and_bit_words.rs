use crate::{
    add_native_word,
    runtime::{data_structures::value::Value, error, interpreter::Interpreter},
};

/// Compare the top two values.  Literals are compared item by item, all the way down.
///
/// Signature: `a b -- flag`
fn word_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let a = interpreter.pop()?;
    let b = interpreter.pop()?;

    interpreter.push(Value::from(a == b));
    Ok(())
}

/// Logical not.  Zero becomes one, everything else becomes zero.
///
/// Signature: `value -- flag`
fn word_logic_not(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop_as_int()?;

    interpreter.push(Value::from(value == 0));
    Ok(())
}

/// Register the comparison and logic words.
pub fn register_math_logic_and_bit_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "=", word_equal);

    add_native_word!(interpreter, "!", word_logic_not);
}
