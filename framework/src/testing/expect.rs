//! Fluent assertions in the style of Jest's `expect`

use std::fmt::Debug;

/// Wraps a value and the source location of the assertion
pub struct Expect<T> {
    value: T,
    location: &'static str,
}

impl<T> Expect<T> {
    /// Create a new Expect wrapper (use the expect! macro instead)
    pub fn new(value: T, location: &'static str) -> Self {
        Self { value, location }
    }

    #[track_caller]
    fn fail(&self, matcher: &str, expected: impl Debug, received: impl Debug) -> ! {
        panic!(
            "\nassertion failed at {}\n  expect!(value).{}\n\n  Expected: {:?}\n  Received: {:?}\n",
            self.location, matcher, expected, received
        )
    }
}

impl<T: Debug + PartialEq> Expect<T> {
    pub fn to_equal(&self, expected: T) {
        if self.value != expected {
            self.fail("to_equal(expected)", expected, &self.value);
        }
    }
}

impl<T: Debug> Expect<Option<T>> {
    pub fn to_be_some(&self) {
        if self.value.is_none() {
            self.fail("to_be_some()", format_args!("Some(_)"), &self.value);
        }
    }

    pub fn to_be_none(&self) {
        if self.value.is_some() {
            self.fail("to_be_none()", format_args!("None"), &self.value);
        }
    }
}

impl<S: AsRef<str> + Debug> Expect<S> {
    pub fn to_contain(&self, substring: &str) {
        if !self.value.as_ref().contains(substring) {
            self.fail("to_contain(substring)", substring, &self.value);
        }
    }
}

impl<T: Debug> Expect<Vec<T>> {
    pub fn to_have_length(&self, expected: usize) {
        if self.value.len() != expected {
            self.fail("to_have_length(n)", expected, self.value.len());
        }
    }
}
