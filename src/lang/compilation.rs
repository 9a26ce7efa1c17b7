use crate::{
    lang::tokenizing::Token,
    location_here,
    runtime::{
        data_structures::{dictionary::WordInfo, literal_stack::LiteralStack, value::Value},
        error::{self, script_error},
        interpreter::Interpreter,
    },
};

/// The word currently being defined between `:` and `;`.
pub struct Construction {
    /// The name the word will be stored under.
    pub name: String,

    /// The raw items of the body, numbers and word names, in the order they were seen.
    pub code: Vec<Value>,
}

/// The dispatcher's state.  Along with the dictionary this decides what every incoming token
/// means.
#[derive(Default)]
pub struct CodeConstructor {
    commenting: bool,
    compiling: bool,

    /// The pending definition.  The body is only ever reset by `;`, a second `:` just renames it.
    name: String,
    code: Vec<Value>,

    literals: LiteralStack,
}

impl CodeConstructor {
    pub fn new() -> CodeConstructor {
        CodeConstructor::default()
    }

    pub fn is_commenting(&self) -> bool {
        self.commenting
    }

    pub fn is_compiling(&self) -> bool {
        self.compiling
    }

    /// How many `[` frames are open.
    pub fn literal_depth(&self) -> usize {
        self.literals.depth()
    }

    pub fn literals_mut(&mut self) -> &mut LiteralStack {
        &mut self.literals
    }

    /// Enter compiling mode for a word of the given name.
    pub fn construction_new(&mut self, name: String) {
        self.name = name;
        self.compiling = true;
    }

    /// Leave compiling mode and hand back the finished definition.  None if no word was being
    /// compiled.
    pub fn construction_pop(&mut self) -> Option<Construction> {
        if !self.compiling {
            return None;
        }

        self.compiling = false;

        Some(Construction {
            name: std::mem::take(&mut self.name),
            code: std::mem::take(&mut self.code),
        })
    }

    /// Append an item to the innermost open literal.  Only called while a literal is open.
    fn collect(&mut self, value: Value) {
        let collected = self.literals.push_on_top(value);
        debug_assert!(collected, "no literal frame open");
    }

    /// Forget any half finished definition, literal or comment.
    pub fn clear(&mut self) {
        *self = CodeConstructor::default();
    }
}

/// What the dispatcher decided to do with a token.
enum Dispatch {
    /// The token was fully handled while deciding.
    Done,

    /// Run the word now.
    Execute(WordInfo),

    /// Push the number onto the data stack.
    Push(i64),

    /// Neither a word nor a number.
    BadWord,

    /// An immediate word other than `]` showed up inside a literal.
    ImmediateInLiteral,
}

/// The closing bracket is the only immediate word allowed inside a literal.
const LITERAL_END: &str = "]";

const COMMENT_START: &str = "(";
const COMMENT_END: &str = ")";

/// A known word is never invoked when deferred, it degrades to it's own name.  A word whose name
/// happens to read as a number is stored as that number.
fn deferred_value(token: &Token) -> Value {
    match token.number() {
        Some(number) => Value::Int(number),
        None => Value::Word(token.text().clone()),
    }
}

/// Decide what a token means given the dispatcher's state.  The rules are checked in strict
/// order: comments mask everything, an open literal masks the normal rules, and compiling only
/// defers words that aren't immediate.
fn decide(context: &mut CodeConstructor, token: &Token, word: Option<WordInfo>) -> Dispatch {
    let text = token.text().as_str();

    if text == COMMENT_START {
        context.commenting = true;
        return Dispatch::Done;
    }

    if context.commenting {
        if text == COMMENT_END {
            context.commenting = false;
        }

        return Dispatch::Done;
    }

    if context.literal_depth() > 0 {
        return match word {
            Some(word) if word.is_immediate() => {
                if text == LITERAL_END {
                    Dispatch::Execute(word)
                } else {
                    Dispatch::ImmediateInLiteral
                }
            }

            Some(_) => {
                context.collect(deferred_value(token));
                Dispatch::Done
            }

            None => match token.number() {
                Some(number) => {
                    context.collect(Value::Int(number));
                    Dispatch::Done
                }

                None => Dispatch::BadWord,
            },
        };
    }

    match word {
        Some(word) if !context.compiling || word.is_immediate() => Dispatch::Execute(word),

        Some(_) => {
            context.code.push(deferred_value(token));
            Dispatch::Done
        }

        // Numbers go straight to the data stack, even in the middle of a definition.
        None => match token.number() {
            Some(number) => Dispatch::Push(number),
            None => Dispatch::BadWord,
        },
    }
}

/// Feed one token through the dispatcher.  This is the only path by which anything gets executed,
/// the host loop, user defined words and `run` all come through here.
pub fn process_token(interpreter: &mut dyn Interpreter, token: Token) -> error::Result<()> {
    interpreter.set_current_location(token.location().clone());

    let word = interpreter.find_word(token.text());
    let dispatch = decide(&mut interpreter.context_mut(), &token, word);

    match dispatch {
        Dispatch::Done => Ok(()),

        Dispatch::Execute(word) => interpreter.execute_word(token.location(), &word),

        Dispatch::Push(number) => {
            interpreter.push(Value::Int(number));
            Ok(())
        }

        Dispatch::BadWord => script_error(interpreter, format!("Bad word: {}.", token.text())),

        Dispatch::ImmediateInLiteral => script_error(
            interpreter,
            format!(
                "Immediate word {} can not be used inside a literal.",
                token.text()
            ),
        ),
    }
}

/// Dispatch the textual form of each value, in order, as if it had just been typed.  Used to run
/// user defined words and literals.
pub fn process_values(interpreter: &mut dyn Interpreter, values: &[Value]) -> error::Result<()> {
    let location = match interpreter.current_location() {
        Some(location) => location.clone(),
        None => location_here!(),
    };

    for value in values {
        process_token(interpreter, Token::new(location.clone(), value.to_string()))?;
    }

    Ok(())
}
