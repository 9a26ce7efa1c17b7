use std::{ io::{ stdout,
                 Write },
           process,
           sync::{ atomic::{ AtomicU64,
                             Ordering },
                   Arc,
                   Mutex,
                   MutexGuard },
           thread::{ self,
                     JoinHandle } };
use lazy_static::lazy_static;
use crate::{ location_here,
             lang::{ compilation::{ process_token,
                                    process_values,
                                    CodeConstructor },
                     source_buffer::SourceLocation,
                     tokenizing::{ Token,
                                   TokenStream } },
             runtime::{ built_ins::register_builtin_words,
                        data_structures::{ dictionary::{ Dictionary,
                                                         DictionaryPtr,
                                                         WordBody,
                                                         WordInfo,
                                                         WordRuntime },
                                           value::Value },
                        error::{ self,
                                 script_error,
                                 script_error_str,
                                 ScriptError },
                        interpreter::{ CallItem,
                                       CallStack,
                                       CodeManagement,
                                       Interpreter,
                                       InterpreterStack,
                                       ThreadManagement,
                                       ValueStack,
                                       WordHandler,
                                       WordManagement },
                        locking::{ lock,
                                   read,
                                   write } } };



/// Where program output goes.  Shared by every task of a session.
pub type OutputPtr = Arc<Mutex<dyn Write + Send>>;

/// Handles of the tasks spawned by a session that haven't been waited on yet.
pub type TaskList = Vec<JoinHandle<()>>;



lazy_static!
{
    /// Source of the process-unique task numbers.
    static ref TASK_COUNTER: AtomicU64 = AtomicU64::new(1);
}



/// The interpreter for the language.
///
/// Everything a session owns lives behind a shared pointer, so cloning the interpreter gives a new
/// handle onto the very same session.  This is how `go` hands the session to a new task.  Only the
/// current location and the call stack belong to the handle itself, each task tracks its own.
#[derive(Clone)]
pub struct ForthInterpreter
{
    /// The data stack shared by every task.
    stack: Arc<Mutex<ValueStack>>,

    /// The dictionary of words known by the interpreter.
    dictionary: DictionaryPtr,

    /// Comment mode, the word under construction and the open literal frames.
    constructor: Arc<Mutex<CodeConstructor>>,

    /// The token stream being processed.
    tokens: Arc<Mutex<TokenStream>>,

    output: OutputPtr,

    tasks: Arc<Mutex<TaskList>>,

    /// The first error raised by a task that hasn't been reported yet.
    task_failure: Arc<Mutex<Option<ScriptError>>>,

    /// End the process as soon as a task fails instead of recording the error.
    exit_on_task_failure: bool,


    /// The last known location execution has reached in the original source code.
    current_location: Option<SourceLocation>,

    call_stack: CallStack
}


impl Default for ForthInterpreter
{
    fn default() -> Self
    {
        Self::new()
    }
}


impl ForthInterpreter
{
    /// Create a new interpreter with an empty dictionary that writes to stdout.
    pub fn new() -> ForthInterpreter
    {
        ForthInterpreter
            {
                stack: Arc::new(Mutex::new(ValueStack::new())),
                dictionary: Dictionary::new_ptr(),
                constructor: Arc::new(Mutex::new(CodeConstructor::new())),
                tokens: Arc::new(Mutex::new(TokenStream::empty())),
                output: Arc::new(Mutex::new(stdout())),
                tasks: Arc::new(Mutex::new(TaskList::new())),
                task_failure: Arc::new(Mutex::new(None)),
                exit_on_task_failure: false,
                current_location: None,
                call_stack: CallStack::new()
            }
    }

    /// Create a new interpreter with all of the built-in words registered.
    pub fn with_builtin_words() -> ForthInterpreter
    {
        let mut interpreter = ForthInterpreter::new();

        register_builtin_words(&mut interpreter);
        interpreter
    }

    /// Send program output somewhere other than stdout.
    pub fn set_output(&mut self, output: OutputPtr)
    {
        self.output = output;
    }

    /// Choose between ending the process when a task fails, or recording the error for the host
    /// loop to return.
    pub fn set_exit_on_task_failure(&mut self, exit: bool)
    {
        self.exit_on_task_failure = exit;
    }

    /// Clear the data stack and any half finished definition, literal or comment.  The dictionary
    /// is kept.
    pub fn reset(&mut self)
    {
        lock(&self.stack).clear();
        lock(&self.constructor).clear();
        self.call_stack.clear();
    }

    fn task_failed(&self, error: ScriptError)
    {
        if self.exit_on_task_failure
        {
            let _ = lock(&self.output).flush();

            eprintln!("Error: {}", error);
            process::exit(1);
        }

        let mut failure = lock(&self.task_failure);

        if failure.is_none()
        {
            *failure = Some(error);
        }
    }
}


impl Interpreter for ForthInterpreter
{
    fn dictionary(&self) -> DictionaryPtr
    {
        self.dictionary.clone()
    }

    fn write_line(&mut self, line: &str) -> error::Result<()>
    {
        let mut output = lock(&self.output);

        writeln!(output, "{}", line)?;
        output.flush()?;

        Ok(())
    }
}


impl InterpreterStack for ForthInterpreter
{
    fn stack(&self) -> ValueStack
    {
        lock(&self.stack).clone()
    }

    fn stack_depth(&self) -> usize
    {
        lock(&self.stack).len()
    }

    fn push(&mut self, value: Value)
    {
        lock(&self.stack).push(value);
    }

    fn pop(&mut self) -> error::Result<Value>
    {
        match self.try_pop()
        {
            Some(value) => Ok(value),
            None        => script_error_str(self, "Stack underflow.")
        }
    }

    fn try_pop(&mut self) -> Option<Value>
    {
        lock(&self.stack).pop()
    }

    fn peek(&self) -> error::Result<Value>
    {
        let top = lock(&self.stack).last().cloned();

        match top
        {
            Some(value) => Ok(value),
            None        => script_error_str(self, "Stack underflow.")
        }
    }

    fn pop_as_int(&mut self) -> error::Result<i64>
    {
        let value = self.pop()?;
        value.as_int(self)
    }
}


impl CodeManagement for ForthInterpreter
{
    fn try_next_token(&mut self) -> error::Result<Option<Token>>
    {
        lock(&self.tokens).next_token()
    }

    fn next_token(&mut self) -> error::Result<Token>
    {
        match self.try_next_token()?
        {
            Some(token) => Ok(token),
            None        => script_error_str(self, "Reading past end of token stream.")
        }
    }

    fn context_mut(&self) -> MutexGuard<'_, CodeConstructor>
    {
        lock(&self.constructor)
    }

    fn process_stream(&mut self, tokens: TokenStream) -> error::Result<()>
    {
        *lock(&self.tokens) = tokens;

        loop
        {
            self.check_task_failure()?;

            match self.try_next_token()?
            {
                Some(token) => process_token(self, token)?,
                None        => break
            }
        }

        self.join_tasks()
    }
}


impl WordManagement for ForthInterpreter
{
    fn current_location(&self) -> &Option<SourceLocation>
    {
        &self.current_location
    }

    fn set_current_location(&mut self, location: SourceLocation)
    {
        self.current_location = Some(location);
    }

    fn add_word(&mut self, name: String, handler: Arc<WordHandler>, runtime: WordRuntime)
    {
        let info = WordInfo
            {
                name,
                runtime,
                body: WordBody::Native(handler)
            };

        self.define_word(info);
    }

    fn define_word(&mut self, info: WordInfo)
    {
        write(&self.dictionary).insert(info.name.clone(), info);
    }

    fn find_word(&self, word: &str) -> Option<WordInfo>
    {
        read(&self.dictionary).try_get(word).cloned()
    }

    fn execute_word(&mut self, location: &SourceLocation, word: &WordInfo) -> error::Result<()>
    {
        match &word.body
        {
            WordBody::Native(handler) =>
                {
                    let interpreter: &mut dyn Interpreter = self;
                    handler(interpreter)
                },

            WordBody::Scripted(code) =>
                {
                    self.call_stack_push(word.name.clone(), location.clone());

                    let result = process_values(self, code);

                    self.call_stack_pop();
                    result
                }
        }
    }

    fn execute_word_named(&mut self, location: &SourceLocation, word: &str) -> error::Result<()>
    {
        match self.find_word(word)
        {
            Some(info) => self.execute_word(location, &info),
            None       => script_error(self, format!("Bad word: {}.", word))
        }
    }

    fn call_stack(&self) -> &CallStack
    {
        &self.call_stack
    }

    fn call_stack_push(&mut self, name: String, location: SourceLocation)
    {
        self.call_stack.push(CallItem::new(name, location));
    }

    fn call_stack_pop(&mut self)
    {
        let _ = self.call_stack.pop();
    }
}


impl ThreadManagement for ForthInterpreter
{
    fn spawn_word(&mut self, name: String) -> error::Result<()>
    {
        let task_name = format!("task-{}", TASK_COUNTER.fetch_add(1, Ordering::SeqCst));
        let location = match &self.current_location
            {
                Some(location) => location.clone(),
                None           => location_here!()
            };

        let mut task = self.clone();
        let thread_name = task_name.clone();

        let handle = thread::Builder::new()
            .name(thread_name)
            .spawn(move ||
                {
                    if let Err(error) = task.execute_word_named(&location, &name)
                    {
                        task.task_failed(error.in_task(&task_name));
                    }
                })?;

        lock(&self.tasks).push(handle);
        Ok(())
    }

    fn join_tasks(&mut self) -> error::Result<()>
    {
        // Tasks can spawn more tasks while we wait, so keep going until the list stays empty.
        loop
        {
            let handles = std::mem::take(&mut *lock(&self.tasks));

            if handles.is_empty()
            {
                break;
            }

            for handle in handles
            {
                if handle.join().is_err()
                {
                    return script_error_str(self, "A task panicked.");
                }
            }
        }

        self.check_task_failure()
    }

    fn check_task_failure(&self) -> error::Result<()>
    {
        match lock(&self.task_failure).take()
        {
            Some(error) => Err(error),
            None        => Ok(())
        }
    }
}
