// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;
use std::io;
use std::panic::Location;

/// An error produced by an array operation: an invalid argument (bad index,
/// mismatched shape, malformed slice) or a runtime failure (I/O, undefined
/// result).
#[derive(Clone, Debug)]
pub struct ArrayError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
    msg: String,
}

impl ArrayError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Return the diagnostic message of this error.
    pub fn message(&self) -> &str
    {
        &self.msg
    }

    /// Create a new error from `ErrorKind` and a message.
    ///
    /// The caller's source location and the message are emitted as a
    /// `debug` record through the `log` facade.
    #[track_caller]
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self
    {
        let msg = msg.into();
        let caller = Location::caller();
        log::debug!("{}:{}: {}: {}", caller.file(), caller.line(), kind.description(), msg);
        ArrayError { repr: kind, msg }
    }
}

/// Error code for an error produced by an array operation.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind
{
    /// the caller supplied an out of range index, a mismatched shape or a
    /// malformed slice
    InvalidArgument,
    /// the operation failed for an environmental reason (file access) or
    /// has no defined result
    Runtime,
}

impl ErrorKind
{
    fn description(self) -> &'static str
    {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::Runtime => "runtime error",
        }
    }
}

#[inline]
#[track_caller]
pub(crate) fn invalid_argument(msg: impl Into<String>) -> ArrayError
{
    ArrayError::new(ErrorKind::InvalidArgument, msg)
}

#[inline]
#[track_caller]
pub(crate) fn runtime(msg: impl Into<String>) -> ArrayError
{
    ArrayError::new(ErrorKind::Runtime, msg)
}

#[track_caller]
pub(crate) fn index_out_of_bounds(what: &str, index: isize, extent: usize) -> ArrayError
{
    invalid_argument(format!("{} index {} is out of bounds for array of size {}.", what, index, extent))
}

#[track_caller]
pub(crate) fn incompatible_shapes(a: crate::Shape, b: crate::Shape) -> ArrayError
{
    invalid_argument(format!("operands could not be broadcast together with shapes {} {}", a, b))
}

impl PartialEq for ArrayError
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}: {}", self.repr.description(), self.msg)
    }
}

impl From<io::Error> for ArrayError
{
    #[track_caller]
    fn from(err: io::Error) -> Self
    {
        runtime(err.to_string())
    }
}
