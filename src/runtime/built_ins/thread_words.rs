use std::thread;
use std::time::Duration;

use crate::{
    add_native_word,
    runtime::{error, interpreter::Interpreter},
};

/// Run the word named by the next token in a new task.  The task shares the data stack, the
/// dictionary and everything else with the rest of the session.
///
/// Signature: ` -- `
fn word_go(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let name = interpreter.next_token_text()?;
    interpreter.spawn_word(name)
}

/// Suspend the calling task.  Other tasks keep running.
///
/// Signature: `seconds -- `
fn word_sleep(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let seconds = interpreter.pop_as_int()?;

    if seconds > 0 {
        thread::sleep(Duration::from_secs(seconds as u64));
    }

    Ok(())
}

/// Register the task words.
pub fn register_thread_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "go", word_go);

    add_native_word!(interpreter, "sleep", word_sleep);
}
