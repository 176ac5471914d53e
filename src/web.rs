use std::fmt;
use std::ops::{Deref, DerefMut};

/// Extract a record from the request's querystring.
///
/// Decodes with the [`Config`](crate::Config) found in the request
/// extensions, or the default one.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryParams<T>(pub T);

impl<T> QueryParams<T> {
    /// Unwrap into inner T value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for QueryParams<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for QueryParams<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for QueryParams<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}
