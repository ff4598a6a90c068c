//! The two-variant outcome carrier returned by every client operation.
//!
//! [`ApiOperation`] is the contract surface between the client and its
//! callers: a fetch either produced a value or stopped on an [`ApiError`],
//! never an unwound panic. Callers observe the outcome through the
//! combinators; aggregation logic inside the client matches on the
//! variants directly.

use crate::error::ApiError;

/// Outcome of one client operation.
#[derive(Debug)]
pub enum ApiOperation<T> {
    /// The operation completed and produced a value.
    Success(T),
    /// The operation failed; the payload is the first error encountered.
    Failure(ApiError),
}

impl<T> ApiOperation<T> {
    /// Transform the success payload, leaving a failure untouched.
    ///
    /// The transform is never invoked on the failure branch; the error is
    /// carried through unchanged.
    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> ApiOperation<R> {
        match self {
            ApiOperation::Success(value) => ApiOperation::Success(f(value)),
            ApiOperation::Failure(error) => ApiOperation::Failure(error),
        }
    }

    /// Run a side effect on the payload if the operation succeeded.
    ///
    /// Returns the carrier unchanged in both branches, so calls chain.
    pub fn on_success(self, f: impl FnOnce(&T)) -> Self {
        if let ApiOperation::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Run a side effect on the error if the operation failed.
    ///
    /// Returns the carrier unchanged in both branches, so calls chain.
    pub fn on_failure(self, f: impl FnOnce(&ApiError)) -> Self {
        if let ApiOperation::Failure(error) = &self {
            f(error);
        }
        self
    }
}

impl<T> From<Result<T, ApiError>> for ApiOperation<T> {
    /// Fold a fallible fetch into the carrier: `Ok` becomes `Success`,
    /// `Err` becomes `Failure`.
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => ApiOperation::Success(value),
            Err(error) => ApiOperation::Failure(error),
        }
    }
}
