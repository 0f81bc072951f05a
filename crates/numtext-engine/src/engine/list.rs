//! Pass-through capture list.

use std::ops::{Deref, Index};

use serde::Serialize;

use numtext_compiler::{Error, Result};

use super::value::Value;

/// One [`Value`] per top-level match, in document order.
///
/// Behaves like a slice. Key access with [`field`](Self::field) passes
/// through to the sole element, which is the common case of a document
/// holding exactly one block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CaptureList(Vec<Value>);

impl CaptureList {
    pub fn new(items: Vec<Value>) -> Self {
        Self(items)
    }

    /// Look up `key` in the sole element.
    ///
    /// Fails unless the list has exactly one element. `Ok(None)` means the
    /// element has no such key.
    pub fn field(&self, key: &str) -> Result<Option<&Value>> {
        match self.0.as_slice() {
            [only] => Ok(only.get(key)),
            items => Err(Error::ThruList {
                key: key.to_string(),
                len: items.len(),
            }),
        }
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Array(self.0)
    }
}

impl Deref for CaptureList {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl Index<usize> for CaptureList {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.0[index]
    }
}

impl From<Vec<Value>> for CaptureList {
    fn from(items: Vec<Value>) -> Self {
        Self(items)
    }
}

impl IntoIterator for CaptureList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CaptureList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
