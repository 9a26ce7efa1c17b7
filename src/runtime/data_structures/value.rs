
use std::{ fmt::{ self,
                  Debug,
                  Display,
                  Formatter },
           sync::Arc };
use crate::{ lang::tokenizing::format_number,
             runtime::{ data_structures::dictionary::DictionaryPtr,
                        error::{ self,
                                 script_error },
                        interpreter::Interpreter } };



/// The items of a literal.  Literals are never changed once built so they are shared freely
/// between copies on the stack and between tasks.
pub type LiteralPtr = Arc<Vec<Value>>;



/// Core value enumeration used by the interpreter.  The language is dynamically typed, every value
/// on the data stack, in a literal or in a compiled word's body is one of these.
#[derive(Clone)]
pub enum Value
{
    /// An integer, always read and written in base six.
    Int(i64),

    /// A bare word name, kept verbatim until it's dispatched again.
    Word(String),

    /// An ordered list of values built with `[ ... ]`.
    Literal(LiteralPtr),

    /// A late bound reference to a word.  The dictionary is the live, shared one so the reference
    /// sees any redefinition of the word made after it was taken.
    Reference(DictionaryPtr, String)
}


/// Structural equality.  Literals compare item by item, references compare equal only when they
/// name the same word in the same dictionary.
impl PartialEq for Value
{
    fn eq(&self, other: &Value) -> bool
    {
        match ( self, other )
        {
            ( Value::Int(a),               Value::Int(b)               ) => a == b,
            ( Value::Word(a),              Value::Word(b)              ) => a == b,
            ( Value::Literal(a),           Value::Literal(b)           ) => a == b,
            ( Value::Reference(dict_a, a), Value::Reference(dict_b, b) ) =>
                {
                    Arc::ptr_eq(dict_a, dict_b) && a == b
                },

            _                                                            => false
        }
    }
}


/// Render the value as the token text that would recreate it.
impl Display for Value
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self
        {
            Value::Int(value)          => write!(f, "{}", format_number(*value)),
            Value::Word(word)          => write!(f, "{}", word),
            Value::Literal(items)      =>
                {
                    let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
                    write!(f, "[ {} ]", rendered.join(" "))
                },
            Value::Reference(_, name)  => write!(f, "& {}", name)
        }
    }
}


impl Debug for Value
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self
        {
            Value::Int(value)         => write!(f, "Int({})", value),
            Value::Word(word)         => write!(f, "Word({:?})", word),
            Value::Literal(items)     => f.debug_tuple("Literal").field(items.as_ref()).finish(),
            Value::Reference(_, name) => write!(f, "Reference({:?})", name)
        }
    }
}


impl From<i64> for Value
{
    fn from(original: i64) -> Value
    {
        Value::Int(original)
    }
}


impl From<bool> for Value
{
    /// The language has no boolean type, truth is written as 1 and falsehood as 0.
    fn from(original: bool) -> Value
    {
        Value::Int(if original { 1 } else { 0 })
    }
}


impl From<Vec<Value>> for Value
{
    fn from(items: Vec<Value>) -> Value
    {
        Value::Literal(Arc::new(items))
    }
}


/// Handily implement variant checks for the types the Value enumeration supports.
macro_rules! is_variant
{
    ($name:ident , $variant:ident) =>
    {
        #[doc = concat!("Check if the value is the variant ", stringify!($variant), ".")]
        pub fn $name(&self) -> bool
        {
            matches!(self, Value::$variant(..))
        }
    };
}


impl Value
{
    is_variant!(is_int,       Int);
    is_variant!(is_word,      Word);
    is_variant!(is_literal,   Literal);
    is_variant!(is_reference, Reference);


    /// A short name for the kind of value, used in error messages.
    pub fn type_name(&self) -> &'static str
    {
        match self
        {
            Value::Int(_)          => "integer",
            Value::Word(_)         => "word",
            Value::Literal(_)      => "literal",
            Value::Reference(_, _) => "reference"
        }
    }

    /// Get the integer held by the value, or raise a type error.
    pub fn as_int(&self, interpreter: &dyn Interpreter) -> error::Result<i64>
    {
        match self
        {
            Value::Int(value) => Ok(*value),
            _ => script_error(interpreter,
                              format!("Expected an integer but found {} {}.",
                                      self.type_name(),
                                      self))
        }
    }
}


#[cfg(test)]
mod tests
{
    use super::*;
    use crate::runtime::data_structures::dictionary::Dictionary;

    #[test]
    fn integers_render_in_senary()
    {
        assert_eq!(Value::Int(8).to_string(), "12");
        assert_eq!(Value::Int(-36).to_string(), "-100");
    }

    #[test]
    fn literals_render_as_bracketed_tokens()
    {
        let inner = Value::from(vec![ Value::Int(1), Value::Word("dup".to_string()) ]);
        let outer = Value::from(vec![ Value::Int(7), inner ]);

        assert_eq!(outer.to_string(), "[ 11 [ 1 dup ] ]");
        assert_eq!(Value::from(Vec::new()).to_string(), "[  ]");
    }

    #[test]
    fn references_render_with_an_ampersand()
    {
        let dictionary = Dictionary::new_ptr();
        assert_eq!(Value::Reference(dictionary, "go".to_string()).to_string(), "& go");
    }

    #[test]
    fn variant_checks()
    {
        assert!(Value::Int(0).is_int());
        assert!(Value::Word("dup".to_string()).is_word());
        assert!(Value::from(true).is_int());
        assert!(Value::from(Vec::new()).is_literal());
        assert!(!Value::from(Vec::new()).is_reference());
    }

    #[test]
    fn equality_is_structural()
    {
        let a = Value::from(vec![ Value::Int(1), Value::from(vec![ Value::Int(2) ]) ]);
        let b = Value::from(vec![ Value::Int(1), Value::from(vec![ Value::Int(2) ]) ]);
        let c = Value::from(vec![ Value::Int(1), Value::from(vec![ Value::Int(3) ]) ]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(Value::Int(1), Value::Word("1".to_string()));
    }

    #[test]
    fn references_compare_by_dictionary_and_name()
    {
        let dictionary = Dictionary::new_ptr();
        let other = Dictionary::new_ptr();

        let a = Value::Reference(dictionary.clone(), "dup".to_string());
        let b = Value::Reference(dictionary.clone(), "dup".to_string());
        let c = Value::Reference(dictionary, "pop".to_string());
        let d = Value::Reference(other, "dup".to_string());

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
