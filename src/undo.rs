use super::{Len, Op, TextOperation};

impl TextOperation {
    /// Position of the first edited character: the length of a leading
    /// retain, or zero.
    fn start_index(&self) -> usize {
        match self.ops().first() {
            Some(&Op::Retain(n)) => n,
            _ => 0,
        }
    }

    /// If this operation edits the document in exactly one place,
    /// returns that single insert or delete: the only op, or the only
    /// non-retain op surrounded by at most one retain on each side.
    fn simple_op(&self) -> Option<&Op> {
        match self.ops() {
            [only] => Some(only),
            [Op::Retain(_), op] => Some(op),
            [op, Op::Retain(_)] => Some(op),
            [Op::Retain(_), op, Op::Retain(_)] => Some(op),
            _ => None,
        }
    }

    /// Should this operation and one made right after it be merged into
    /// a single undo step?
    ///
    /// When undoing with ctrl-z, users expect a whole typed word or a
    /// backspace streak to vanish at once, not one keystroke at a time.
    /// Undo stacks get that behaviour by composing consecutive
    /// operations before pushing them, and this predicate decides
    /// whether a pair qualifies: both are simple and the second insert
    /// continues where the first ended, or the second delete ends where
    /// the first started (backspace) or starts at the same place
    /// (delete key). Callers may want to include other factors, such as
    /// the time elapsed between the two edits.
    ///
    /// ```
    /// use weft::TextOperation;
    ///
    /// let first = TextOperation::new().retain(1).insert("a").retain(2);
    /// let second = TextOperation::new().retain(2).insert("b").retain(2);
    ///
    /// assert!(first.should_be_composed_with(&second));
    /// ```
    pub fn should_be_composed_with(&self, other: &TextOperation) -> bool {
        if self.is_noop() || other.is_noop() {
            return true;
        }

        let (start_a, start_b) = (self.start_index(), other.start_index());
        let (Some(simple_a), Some(simple_b)) = (self.simple_op(), other.simple_op()) else {
            return false;
        };

        match (simple_a, simple_b) {
            // Typing forward: the second insert starts where the first
            // one ended.
            (Op::Insert(_), Op::Insert(_)) => start_a + Len::len(simple_a) == start_b,
            // Holding backspace (the second delete ends where the first
            // one started) or holding the delete key (same position).
            (Op::Delete(_), Op::Delete(_)) => {
                start_b + Len::len(simple_b) == start_a || start_a == start_b
            }
            _ => false,
        }
    }

    /// The counterpart of [`should_be_composed_with`][Self::should_be_composed_with]
    /// for operations that sit inverted on an undo stack, so that for
    /// consecutive edits `a` then `b`:
    ///
    /// ```text
    /// a.should_be_composed_with(b)
    ///     == b.invert(..).should_be_composed_with_inverted(a.invert(..))
    /// ```
    pub fn should_be_composed_with_inverted(&self, other: &TextOperation) -> bool {
        if self.is_noop() || other.is_noop() {
            return true;
        }

        let (start_a, start_b) = (self.start_index(), other.start_index());
        let (Some(simple_a), Some(simple_b)) = (self.simple_op(), other.simple_op()) else {
            return false;
        };

        match (simple_a, simple_b) {
            (Op::Insert(_), Op::Insert(_)) => {
                start_a + Len::len(simple_a) == start_b || start_a == start_b
            }
            (Op::Delete(_), Op::Delete(_)) => start_b + Len::len(simple_b) == start_a,
            _ => false,
        }
    }
}
