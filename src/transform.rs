use std::mem::take;

use super::iter::OpIter;
use super::op::split;
use super::{Len, Op, OperationError, TextOperation};

impl TextOperation {
    /// Transforms two concurrent operations made on the same document
    /// into the pair `(self', other')` such that for every document `s`:
    ///
    /// ```text
    /// other_prime.apply(self.apply(s)) == self_prime.apply(other.apply(s))
    /// ```
    ///
    /// This is the function that makes collaborative editing converge:
    /// each site applies its own edit first and the transformed remote
    /// edit second, and both end up with the same document. When both
    /// sides insert at the same position, `self`'s insert goes first.
    ///
    /// Both operations must have the same base length.
    ///
    /// ```
    /// use weft::TextOperation;
    ///
    /// let left = TextOperation::new().insert("a");
    /// let right = TextOperation::new().insert("b");
    ///
    /// let (left_prime, right_prime) = left.transform(&right).unwrap();
    ///
    /// assert_eq!(right_prime.apply(&left.apply("").unwrap()).unwrap(), "ab");
    /// assert_eq!(left_prime.apply(&right.apply("").unwrap()).unwrap(), "ab");
    /// ```
    pub fn transform(
        &self,
        other: &TextOperation,
    ) -> Result<(TextOperation, TextOperation), OperationError> {
        if self.base_len() != other.base_len() {
            return Err(OperationError::TransformBaseMismatch {
                left: self.base_len(),
                right: other.base_len(),
            });
        }

        let mut ops1 = OpIter::new(self.ops());
        let mut ops2 = OpIter::new(other.ops());
        let mut prime1 = TextOperation::new();
        let mut prime2 = TextOperation::new();

        loop {
            match (ops1.next_mut(), ops2.next_mut()) {
                (None, None) => break,
                // An insert consumes no source: it lands in its own
                // primed operation and the other side retains over it.
                // The left operation wins the same-position tie.
                (Some(op1), _) if op1.is_insert() => {
                    let insert = take(op1);
                    prime2.push(Op::Retain(Len::len(&insert)));
                    prime1.push(insert);
                }
                (_, Some(op2)) if op2.is_insert() => {
                    let insert = take(op2);
                    prime1.push(Op::Retain(Len::len(&insert)));
                    prime2.push(insert);
                }
                (None, Some(_)) => return Err(OperationError::FirstTooShort),
                (Some(_), None) => return Err(OperationError::FirstTooLong),
                (Some(op1), Some(op2)) => match split(op1, op2) {
                    // Neither side touched the span.
                    (Op::Retain(n), Op::Retain(_)) => {
                        prime1.push(Op::Retain(n));
                        prime2.push(Op::Retain(n));
                    }
                    // Both sides deleted the same span; it is already
                    // gone on either path.
                    (Op::Delete(_), Op::Delete(_)) => {}
                    // Only the left operation deleted the span.
                    (Op::Delete(n), Op::Retain(_)) => prime1.push(Op::Delete(n)),
                    // Only the right operation deleted the span.
                    (Op::Retain(_), Op::Delete(n)) => prime2.push(Op::Delete(n)),
                    // Inserts on either side were taken whole by the
                    // arms above.
                    (Op::Insert(_), _) | (_, Op::Insert(_)) => {
                        unreachable!("transform dispatch is total over the remaining pairs")
                    }
                },
            }
        }

        Ok((prime1, prime2))
    }
}
