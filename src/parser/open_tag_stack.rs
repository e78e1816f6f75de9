/// LIFO record of tag names opened but not yet closed.
///
/// Pushed on open-tag completion, popped on a matching close-tag
/// completion. Self-closing tags never touch the stack.
#[derive(Default, Debug)]
pub struct OpenTagStack(Vec<String>);

impl OpenTagStack {
    #[inline]
    pub fn push(&mut self, name: String) {
        self.0.push(name);
    }

    /// Pops the innermost open tag iff its name equals `name`.
    /// Returns `false` on a mismatch or an empty stack, leaving the
    /// stack untouched.
    #[inline]
    pub fn pop_matching(&mut self, name: &str) -> bool {
        match self.0.last() {
            Some(top) if top == name => {
                self.0.pop();
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}
