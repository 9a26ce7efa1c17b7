use crate::runtime::{data_structures::value::Value, interpreter::WordHandler};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

/// The runtime of a word in the dictionary.
#[derive(Clone, PartialEq, Eq, PartialOrd, Hash, Debug)]
pub enum WordRuntime {
    /// The word runs as soon as it's seen, even while a word is being compiled or a literal is
    /// being collected.
    Immediate,

    /// The word is deferred into a word body while compiling, and taken by name inside a literal.
    Normal,
}

/// What actually happens when a word is executed.
#[derive(Clone)]
pub enum WordBody {
    /// The word is a native word written in Rust.
    Native(Arc<WordHandler>),

    /// The word was defined with `: ... ;`.  The raw items are re-dispatched by their textual form
    /// every time the word runs, so names inside are resolved at call time.
    Scripted(Arc<Vec<Value>>),
}

/// The information stored in the dictionary for each word.
#[derive(Clone)]
pub struct WordInfo {
    /// The name of the word.
    pub name: String,

    /// When should the word be executed?
    pub runtime: WordRuntime,

    /// The behavior of the word.
    pub body: WordBody,
}

impl WordInfo {
    /// Is this word run even while compiling or collecting a literal?
    pub fn is_immediate(&self) -> bool {
        self.runtime == WordRuntime::Immediate
    }
}

/// The one shared dictionary of a session.  It is shared by every task and by every reference
/// value, and may be changed by any of them at any time.
pub type DictionaryPtr = Arc<RwLock<Dictionary>>;

/// The word dictionary used by the interpreter.  Word names are unique, defining a word that
/// already exists replaces it.
#[derive(Default)]
pub struct Dictionary {
    words: HashMap<String, WordInfo>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Create a new empty dictionary ready to be shared.
    pub fn new_ptr() -> DictionaryPtr {
        Arc::new(RwLock::new(Dictionary::new()))
    }

    /// Insert a new word and it's info into the dictionary, replacing any prior definition.
    pub fn insert(&mut self, name: String, info: WordInfo) {
        let _ = self.words.insert(name, info);
    }

    /// Try to get a word from the dictionary.
    pub fn try_get(&self, name: &str) -> Option<&WordInfo> {
        self.words.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(name: &str, items: Vec<Value>) -> WordInfo {
        WordInfo {
            name: name.to_string(),
            runtime: WordRuntime::Normal,
            body: WordBody::Scripted(Arc::new(items)),
        }
    }

    #[test]
    fn redefinition_replaces_the_word() {
        let mut dictionary = Dictionary::new();

        dictionary.insert("two".to_string(), scripted("two", vec![Value::Int(2)]));
        dictionary.insert("two".to_string(), scripted("two", vec![Value::Int(1), Value::Int(1)]));

        match &dictionary.try_get("two").map(|word| word.body.clone()) {
            Some(WordBody::Scripted(items)) => assert_eq!(items.len(), 2),
            _ => panic!("expected a scripted word"),
        }
    }

    fn nothing(_: &mut dyn crate::runtime::interpreter::Interpreter) -> crate::runtime::error::Result<()> {
        Ok(())
    }

    #[test]
    fn immediate_words_are_flagged() {
        let native = WordInfo {
            body: WordBody::Native(Arc::new(nothing)),
            runtime: WordRuntime::Immediate,
            ..scripted("]", Vec::new())
        };

        assert!(matches!(native.body, WordBody::Native(_)));
        assert!(native.is_immediate());
        assert!(!scripted("two", Vec::new()).is_immediate());
    }

    #[test]
    fn unknown_words_are_not_found() {
        let dictionary = Dictionary::new();

        assert!(dictionary.try_get("dup").is_none());
    }
}
