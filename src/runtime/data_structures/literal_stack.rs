use crate::runtime::data_structures::value::Value;

/// The stack of literal frames being collected.  `[` opens a new frame, items are appended to the
/// frame on top, and `]` pops that frame off to become a literal value.
#[derive(Default, Clone, Debug)]
pub struct LiteralStack {
    frames: Vec<Vec<Value>>,
}

impl LiteralStack {
    pub fn new() -> LiteralStack {
        LiteralStack { frames: Vec::new() }
    }

    /// How many frames are currently open.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Open a new empty frame.
    pub fn push_frame(&mut self) {
        self.frames.push(Vec::new());
    }

    /// Close the top frame and hand back it's items.
    pub fn pop_frame(&mut self) -> Option<Vec<Value>> {
        self.frames.pop()
    }

    /// Append a value to the frame on top.  Returns false if there is no open frame.
    pub fn push_on_top(&mut self, value: Value) -> bool {
        match self.frames.last_mut() {
            Some(frame) => {
                frame.push(value);
                true
            }

            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_go_to_the_top_frame_only() {
        let mut stack = LiteralStack::new();

        stack.push_frame();
        assert!(stack.push_on_top(Value::Int(1)));

        stack.push_frame();
        assert!(stack.push_on_top(Value::Int(2)));
        assert_eq!(stack.depth(), 2);

        assert_eq!(stack.pop_frame(), Some(vec![Value::Int(2)]));
        assert_eq!(stack.pop_frame(), Some(vec![Value::Int(1)]));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn nothing_to_push_onto_without_a_frame() {
        let mut stack = LiteralStack::new();

        assert!(!stack.push_on_top(Value::Int(1)));
        assert_eq!(stack.pop_frame(), None);
    }
}
