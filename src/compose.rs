use std::mem::take;

use super::iter::OpIter;
use super::op::split;
use super::{Op, OperationError, TextOperation};

impl TextOperation {
    /// Merges this operation with an operation made on top of its
    /// output into a single equivalent operation, so that for every
    /// document `s`:
    ///
    /// ```text
    /// a.compose(b).apply(s) == b.apply(a.apply(s))
    /// ```
    ///
    /// The second operation's base length must equal this operation's
    /// target length.
    ///
    /// ```
    /// use weft::TextOperation;
    ///
    /// let first = TextOperation::new().insert("ab");
    /// let second = TextOperation::new().retain(2).insert("c");
    ///
    /// let combined = first.compose(&second).unwrap();
    /// assert_eq!(combined.apply("").unwrap(), "abc");
    /// ```
    pub fn compose(&self, other: &TextOperation) -> Result<TextOperation, OperationError> {
        if self.target_len() != other.base_len() {
            return Err(OperationError::ComposeBaseMismatch {
                target: self.target_len(),
                base: other.base_len(),
            });
        }

        let mut ops1 = OpIter::new(self.ops());
        let mut ops2 = OpIter::new(other.ops());
        let mut composed = TextOperation::new();

        loop {
            match (ops1.next_mut(), ops2.next_mut()) {
                (None, None) => break,
                // A delete in the first operation removes characters the
                // second operation never saw; it passes through whole.
                (Some(op1), _) if op1.is_delete() => composed.push(take(op1)),
                // An insert in the second operation has no preimage in
                // the first; it passes through whole.
                (_, Some(op2)) if op2.is_insert() => composed.push(take(op2)),
                (None, Some(_)) => return Err(OperationError::FirstTooShort),
                (Some(_), None) => return Err(OperationError::FirstTooLong),
                (Some(op1), Some(op2)) => match split(op1, op2) {
                    // Both operations keep the span.
                    (Op::Retain(n), Op::Retain(_)) => composed.push(Op::Retain(n)),
                    // The second operation deletes characters the first
                    // one inserted; they cancel out.
                    (Op::Insert(_), Op::Delete(_)) => {}
                    // The second operation keeps characters the first
                    // one inserted.
                    (head @ Op::Insert(_), Op::Retain(_)) => composed.push(head),
                    // The second operation deletes characters the first
                    // one kept.
                    (Op::Retain(_), Op::Delete(n)) => composed.push(Op::Delete(n)),
                    // Deletes on the left and inserts on the right were
                    // taken whole by the arms above.
                    (Op::Delete(_), _) | (_, Op::Insert(_)) => {
                        unreachable!("compose dispatch is total over the remaining pairs")
                    }
                },
            }
        }

        Ok(composed)
    }
}

#[cfg(test)]
mod tests {
    use super::{OperationError, TextOperation};

    #[test]
    fn test_insert_insert() {
        let a = TextOperation::new().insert("A");
        let b = TextOperation::new().insert("B").retain(1);

        assert_eq!(
            a.compose(&b).unwrap(),
            TextOperation::new().insert("BA"),
        );
    }

    #[test]
    fn test_insert_retain() {
        let a = TextOperation::new().insert("A");
        let b = TextOperation::new().retain(1);

        assert_eq!(a.compose(&b).unwrap(), TextOperation::new().insert("A"));
    }

    #[test]
    fn test_insert_delete() {
        let a = TextOperation::new().insert("A");
        let b = TextOperation::new().delete(1);

        assert_eq!(a.compose(&b).unwrap(), TextOperation::new());
    }

    #[test]
    fn test_retain_insert() {
        let a = TextOperation::new().retain(1);
        let b = TextOperation::new().insert("B").retain(1);

        assert_eq!(
            a.compose(&b).unwrap(),
            TextOperation::new().insert("B").retain(1),
        );
    }

    #[test]
    fn test_retain_retain() {
        let a = TextOperation::new().retain(1);
        let b = TextOperation::new().retain(1);

        assert_eq!(a.compose(&b).unwrap(), TextOperation::new().retain(1));
    }

    #[test]
    fn test_retain_delete() {
        let a = TextOperation::new().retain(1);
        let b = TextOperation::new().delete(1);

        assert_eq!(a.compose(&b).unwrap(), TextOperation::new().delete(1));
    }

    #[test]
    fn test_delete_insert() {
        let a = TextOperation::new().delete(1);
        let b = TextOperation::new().insert("B");

        assert_eq!(
            a.compose(&b).unwrap(),
            TextOperation::new().insert("B").delete(1),
        );
    }

    #[test]
    fn test_delete_retain() {
        let a = TextOperation::new().delete(1).retain(1);
        let b = TextOperation::new().retain(1);

        assert_eq!(
            a.compose(&b).unwrap(),
            TextOperation::new().delete(1).retain(1),
        );
    }

    #[test]
    fn test_delete_delete() {
        let a = TextOperation::new().retain(1).delete(1);
        let b = TextOperation::new().delete(1);

        assert_eq!(a.compose(&b).unwrap(), TextOperation::new().delete(2));
    }

    #[test]
    fn test_insert_mid() {
        let a = TextOperation::new().insert("Hello");
        let b = TextOperation::new().retain(3).insert("X").retain(2);

        assert_eq!(
            a.compose(&b).unwrap(),
            TextOperation::new().insert("HelXlo"),
        );
    }

    #[test]
    fn test_delete_all() {
        let a = TextOperation::new().retain(4).insert("Hello");
        let b = TextOperation::new().delete(9);

        assert_eq!(a.compose(&b).unwrap(), TextOperation::new().delete(4));
    }

    #[test]
    fn test_compose_against_apply() {
        let base = "abc";
        let a = TextOperation::new().retain(1).insert("123").delete(1).retain(1);
        let after_a = a.apply(base).unwrap();
        assert_eq!(after_a, "a123c");

        let b = TextOperation::new()
            .retain(2)
            .insert("$$$")
            .delete(1)
            .retain(1)
            .insert("###")
            .retain(1);
        let after_b = b.apply(&after_a).unwrap();
        assert_eq!(after_b, "a1$$$3###c");

        let combined = a.compose(&b).unwrap();
        assert_eq!(combined.apply(base).unwrap(), after_b);
    }

    #[test]
    fn test_compose_of_empty_operations() {
        let empty = TextOperation::new();

        assert_eq!(empty.compose(&TextOperation::new()).unwrap(), empty);
    }

    #[test]
    fn test_compose_base_mismatch() {
        let a = TextOperation::new().retain(1);
        let b = TextOperation::new().retain(2);

        assert_eq!(
            a.compose(&b),
            Err(OperationError::ComposeBaseMismatch { target: 1, base: 2 }),
        );
    }
}
