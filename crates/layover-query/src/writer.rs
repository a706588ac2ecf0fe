//! Structured query output.
//!
//! A query writes zero or more *objects*, each an ordered list of
//! named fields. The writer only accumulates them; rendering to a file
//! or terminal is the caller's concern, which also makes asserting on
//! query output in tests trivial.

/// In-memory sink for one query instance's output.
#[derive(Clone, Debug, Default)]
pub struct QueryWriter {
    objects: Vec<Vec<(Box<str>, Box<str>)>>,
}

impl QueryWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new output object; subsequent fields belong to it.
    pub fn new_object(&mut self) {
        self.objects.push(Vec::new());
    }

    /// Append a named field to the current object.
    ///
    /// Starts an object implicitly if none is open.
    pub fn write_field(&mut self, name: &str, value: impl std::fmt::Display) {
        if self.objects.is_empty() {
            self.objects.push(Vec::new());
        }
        if let Some(object) = self.objects.last_mut() {
            object.push((name.into(), value.to_string().into_boxed_str()));
        }
    }

    /// The objects written so far, in order.
    pub fn objects(&self) -> &[Vec<(Box<str>, Box<str>)>] {
        &self.objects
    }

    /// Look up a field of one object by name.
    pub fn field(&self, object: usize, name: &str) -> Option<&str> {
        self.objects.get(object)?.iter().find_map(|(field, value)| {
            (field.as_ref() == name).then_some(value.as_ref())
        })
    }

    /// Number of objects written.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Discard everything written so far.
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
