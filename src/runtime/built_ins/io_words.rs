
use crate::{ add_native_word,
             lang::tokenizing::format_number,
             runtime::{ error,
                        interpreter::Interpreter } };



/// Print the top value without removing it.
///
/// Signature: `value -- value`
fn word_print(interpreter: &mut dyn Interpreter) -> error::Result<()>
{
    let value = interpreter.peek()?;

    interpreter.write_line(&value.to_string())
}


/// Print out the whole data stack without changing it.  Each value is printed on it's own line
/// with it's index, the bottom of the stack is index 0.
///
/// Signature: ` -- `
fn word_print_stack(interpreter: &mut dyn Interpreter) -> error::Result<()>
{
    for ( index, value ) in interpreter.stack().iter().enumerate()
    {
        interpreter.write_line(&format!("{}\t{}", format_number(index as i64), value))?;
    }

    Ok(())
}



/// Register the output words with the given interpreter.
pub fn register_io_words(interpreter: &mut dyn Interpreter)
{
    add_native_word!(interpreter, "print", word_print);

    add_native_word!(interpreter, "stack", word_print_stack);
}
