// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndmat prelude.
//!
//! This module contains the most used types, traits and functions, which
//! you can import easily as a group.
//!
//! ```
//! use ndmat::prelude::*;
//!
//! let a = NdArray::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
//! let b = NdArray::from_vec(vec![10, 20]);
//! assert_eq!(broadcast(&a, &b, |x, y| x + y).unwrap().as_slice(), &[11, 22, 13, 24]);
//! ```

#[doc(no_inline)]
pub use crate::{ArrayError, Axis, DataCube, ErrorKind, NdArray, Shape, Slice, SliceOrIndex};

#[doc(no_inline)]
pub use crate::broadcast;

#[doc(no_inline)]
pub use crate::{column_stack, concatenate, hstack, insert, insert_many, row_stack, vstack};

#[doc(no_inline)]
pub use crate::{from_file, from_file_text, load};
