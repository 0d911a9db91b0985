//! Flat-sequence wire form.
//!
//! An operation travels as a JSON array whose elements are integers and
//! strings: a positive integer retains that many characters, a negative
//! integer deletes as many characters as its magnitude, and a non-empty
//! string is inserted. `[2, -1, "cde"]` retains two characters, deletes
//! one and inserts `cde`. Anything else is a parse error.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use super::{Op, OperationError, TextOperation};

impl TextOperation {
    /// Renders this operation as the flat wire sequence.
    pub fn to_sequence(&self) -> Vec<Value> {
        self.ops()
            .iter()
            .map(|op| match op {
                Op::Retain(n) => Value::from(*n as u64),
                Op::Delete(n) => Value::from(-(*n as i64)),
                Op::Insert(s) => Value::from(s.as_str()),
            })
            .collect()
    }

    /// Rebuilds an operation from the flat wire sequence. Fails with
    /// [`OperationError::UnknownOperation`] on any element that is not
    /// a non-zero integer or a non-empty string.
    ///
    /// ```
    /// use serde_json::json;
    /// use weft::TextOperation;
    ///
    /// let operation = TextOperation::from_sequence(&[json!(2), json!(-1), json!("cde")]).unwrap();
    ///
    /// assert_eq!(operation, TextOperation::new().retain(2).delete(1).insert("cde"));
    /// ```
    pub fn from_sequence(seq: &[Value]) -> Result<TextOperation, OperationError> {
        let mut operation = TextOperation::new();

        for value in seq {
            match value {
                Value::Number(n) => match n.as_i64() {
                    Some(n) if n > 0 => operation.push(Op::Retain(n as usize)),
                    Some(n) if n < 0 => operation.push(Op::Delete(n.unsigned_abs() as usize)),
                    _ => return Err(OperationError::UnknownOperation(value.to_string())),
                },
                Value::String(s) if !s.is_empty() => operation.push(Op::Insert(s.clone())),
                _ => return Err(OperationError::UnknownOperation(value.to_string())),
            }
        }

        Ok(operation)
    }
}

impl Serialize for TextOperation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.to_sequence())
    }
}

impl<'de> Deserialize<'de> for TextOperation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seq = Vec::<Value>::deserialize(deserializer)?;

        TextOperation::from_sequence(&seq).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{OperationError, TextOperation};

    #[test]
    fn test_from_sequence() {
        let operation =
            TextOperation::from_sequence(&[json!(2), json!(-1), json!(-1), json!("cde")]).unwrap();

        assert_eq!(operation.ops().len(), 3);
        assert_eq!(operation.base_len(), 4);
        assert_eq!(operation.target_len(), 5);
    }

    #[test]
    fn test_from_sequence_rejects_structured_values() {
        let err = TextOperation::from_sequence(&[
            json!(2),
            json!(-1),
            json!(-1),
            json!("cde"),
            json!({ "insert": "x" }),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            OperationError::UnknownOperation("{\"insert\":\"x\"}".to_owned()),
        );
        assert!(err.to_string().starts_with("unknown operation: "));
    }

    #[test]
    fn test_from_sequence_rejects_null() {
        let err =
            TextOperation::from_sequence(&[json!(2), json!(-1), json!(-1), json!("cde"), Value::Null])
                .unwrap_err();

        assert!(err.to_string().starts_with("unknown operation: "));
    }

    #[test]
    fn test_from_sequence_rejects_degenerate_elements() {
        for value in [json!(0), json!(1.5), json!(""), json!(true), json!([1])] {
            let err = TextOperation::from_sequence(&[value.clone()]).unwrap_err();
            assert_eq!(err, OperationError::UnknownOperation(value.to_string()));
        }
    }

    #[test]
    fn test_sequence_roundtrip() {
        let operation = TextOperation::new()
            .retain(2)
            .insert("lorem")
            .delete(5)
            .retain(3);

        assert_eq!(
            TextOperation::from_sequence(&operation.to_sequence()).unwrap(),
            operation,
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let operation: TextOperation = serde_json::from_str("[1,-1,\"abc\"]").unwrap();
        assert_eq!(
            operation,
            TextOperation::new().retain(1).delete(1).insert("abc"),
        );

        // The canonical form keeps the insert in front of the delete.
        let rendered = serde_json::to_string(&operation).unwrap();
        assert_eq!(rendered, "[1,\"abc\",-1]");
        assert_eq!(serde_json::from_str::<TextOperation>(&rendered).unwrap(), operation);
    }

    #[test]
    fn test_json_rejects_non_sequences() {
        assert!(serde_json::from_str::<TextOperation>("{\"ops\":[]}").is_err());
        assert!(serde_json::from_str::<TextOperation>("[[1]]").is_err());
    }
}
