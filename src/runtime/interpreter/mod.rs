use crate::{
    lang::{
        compilation::CodeConstructor,
        source_buffer::SourceLocation,
        tokenizing::{Token, TokenStream, tokenize_from_file, tokenize_from_source},
    },
    runtime::{
        data_structures::{
            dictionary::{DictionaryPtr, WordInfo, WordRuntime},
            value::Value,
        },
        error,
    },
};
use std::{
    fmt::{self, Display, Formatter},
    sync::{Arc, MutexGuard},
};

pub mod forth_interpreter;

/// A call stack item is a record of the executing word's name and the location within the
/// original source code from which it was called.  These items are read-only and the fields are
/// accessed by member functions.
#[derive(Clone)]
pub struct CallItem {
    location: SourceLocation,
    word: String,
}

impl CallItem {
    /// Create a new call stack item.
    pub fn new(word: String, location: SourceLocation) -> CallItem {
        CallItem { location, word }
    }

    /// Where in the source code was the execution of this word found?
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    // The name of the word being executed.
    pub fn word(&self) -> &String {
        &self.word
    }
}

/// Make sure that this word can be nicely displayed to the user in event of an error.
impl Display for CallItem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.word)
    }
}

/// The stack of user defined words currently being executed by one task.  Used to give the user a
/// trace when an error is reported.
pub type CallStack = Vec<CallItem>;

/// The data stack of values managed by the interpreter.
pub type ValueStack = Vec<Value>;

/// Trait for managing the interpreter's data stack.  The data stack is shared by every task of a
/// session, so each call here is a single atomic step and nothing more.
pub trait InterpreterStack {
    /// A copy of the full data stack, bottom first.
    fn stack(&self) -> ValueStack;

    /// How many values are currently on the stack.
    fn stack_depth(&self) -> usize;

    /// Push a value onto the stack.
    fn push(&mut self, value: Value);

    /// Pop a value from the stack.  If the stack is empty a stack underflow error is returned.
    fn pop(&mut self) -> error::Result<Value>;

    /// Pop a value if there is one.  Never fails.
    fn try_pop(&mut self) -> Option<Value>;

    /// Get a copy of the top value without removing it.  Fails if the stack is empty.
    fn peek(&self) -> error::Result<Value>;

    /// Pop the top value and make sure it's an integer.
    fn pop_as_int(&mut self) -> error::Result<i64>;
}

/// Trait for reading the incoming token stream and managing the dispatcher's state.
pub trait CodeManagement {
    /// Get the next token, or None once the input has run dry.
    fn try_next_token(&mut self) -> error::Result<Option<Token>>;

    /// Get the next token from the input.  Words like `:` use this to read their argument, so
    /// running out of input here is an error.
    fn next_token(&mut self) -> error::Result<Token>;

    /// Get the text of the next token from the input.
    fn next_token_text(&mut self) -> error::Result<String> {
        Ok(self.next_token()?.text().clone())
    }

    /// Access the dispatcher state: comment mode, the word under construction and the open
    /// literal frames.  The guard must be dropped before running any word.
    fn context_mut(&self) -> MutexGuard<'_, CodeConstructor>;

    /// Run every token of a stream through the dispatcher, then wait for any tasks spawned along
    /// the way.
    fn process_stream(&mut self, tokens: TokenStream) -> error::Result<()>;

    /// Run an in memory source string.  The path is used to tag locations in error reports, for
    /// example "\<eval\>".
    fn process_source(&mut self, path: &str, source: &str) -> error::Result<()> {
        self.process_stream(tokenize_from_source(path, source))
    }

    /// Run a source file.
    fn process_source_file(&mut self, path: &str) -> error::Result<()> {
        let tokens = tokenize_from_file(path)?;
        self.process_stream(tokens)
    }
}

/// Definition of a word handler function.  This is the function that is called when a native word
/// is executed.  Handlers may run on any task so they have to be shareable between threads.
pub type WordHandler = dyn Fn(&mut dyn Interpreter) -> error::Result<()> + Send + Sync;

/// Simplify registering a native regular word with the interpreter.
///
/// Required parameters are, the interpreter instance to register with.  The name of the word to
/// register.  As well as the word function handler to execute for the word.
#[macro_export]
macro_rules! add_native_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr
    ) => {{
        use std::sync::Arc;
        use $crate::runtime::data_structures::dictionary::WordRuntime;

        $interpreter.add_word(
            $name.to_string(),
            Arc::new($function),
            WordRuntime::Normal,
        );
    }};
}

/// Simplify registering a native immediate word with the interpreter.  That is, this word runs even
/// while a word is being compiled or a literal is being collected.
#[macro_export]
macro_rules! add_native_immediate_word {
    (
        $interpreter:expr ,
        $name:literal ,
        $function:expr
    ) => {{
        use std::sync::Arc;
        use $crate::runtime::data_structures::dictionary::WordRuntime;

        $interpreter.add_word(
            $name.to_string(),
            Arc::new($function),
            WordRuntime::Immediate,
        );
    }};
}

/// Trait for managing and executing words known to the interpreter.
pub trait WordManagement {
    /// If currently set, this represents the location of the token being dispatched.
    fn current_location(&self) -> &Option<SourceLocation>;

    /// Record the location of the token being dispatched.
    fn set_current_location(&mut self, location: SourceLocation);

    /// Add a new native word to the interpreter's dictionary.
    fn add_word(&mut self, name: String, handler: Arc<WordHandler>, runtime: WordRuntime);

    /// Add a fully described word to the dictionary, replacing any word of the same name.
    fn define_word(&mut self, info: WordInfo);

    /// Find a word in the interpreter's dictionary by name.  The word is copied out so the
    /// dictionary is free to change while it runs.
    fn find_word(&self, word: &str) -> Option<WordInfo>;

    /// Execute a word.  Native words call their handler, user defined words re-dispatch the text
    /// of each item of their body.
    fn execute_word(&mut self, location: &SourceLocation, word: &WordInfo) -> error::Result<()>;

    /// Find and execute a word by name.  If the word is not found a script error is returned.
    fn execute_word_named(&mut self, location: &SourceLocation, word: &str) -> error::Result<()>;

    /// The current task's call stack.
    fn call_stack(&self) -> &CallStack;

    /// Push a new name and location onto the call stack.
    fn call_stack_push(&mut self, name: String, location: SourceLocation);

    /// Pop the last name and location from the call stack.
    fn call_stack_pop(&mut self);
}

/// Interpreter task management.  Tasks are OS threads that share the whole session state with the
/// task that spawned them.
pub trait ThreadManagement {
    /// Start a new task that runs the named word.  The name is resolved by the new task.
    fn spawn_word(&mut self, name: String) -> error::Result<()>;

    /// Wait for every outstanding task, including tasks spawned by tasks, to finish.  Returns the
    /// first error raised by any of them.
    fn join_tasks(&mut self) -> error::Result<()>;

    /// Return the error raised by a task since the last check, if any.
    fn check_task_failure(&self) -> error::Result<()>;
}

/// Core interpreter trait.
///
/// This trait brings together the traits that define the interpreter: the data stack, the token
/// stream and dispatcher state, the dictionary and the tasks.
pub trait Interpreter:
    InterpreterStack + CodeManagement + WordManagement + ThreadManagement
{
    /// The live dictionary shared by the session.
    fn dictionary(&self) -> DictionaryPtr;

    /// Write one line of program output.
    fn write_line(&mut self, line: &str) -> error::Result<()>;
}
