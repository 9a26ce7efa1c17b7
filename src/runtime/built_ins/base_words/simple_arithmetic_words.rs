use crate::add_native_word;
use crate::runtime::data_structures::value::Value;
use crate::runtime::error;
use crate::runtime::interpreter::Interpreter;

// Both operands are popped before either is checked, so a bad add always consumes two values.
fn word_add(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let a = interpreter.pop()?;
    let b = interpreter.pop()?;

    let a = a.as_int(interpreter)?;
    let b = b.as_int(interpreter)?;

    interpreter.push(Value::Int(a.wrapping_add(b)));
    Ok(())
}

pub fn register_simple_arithmetic_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "+", word_add);
}
