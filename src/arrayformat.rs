// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::imp_prelude::*;

fn format_array<A, F>(array: &NdArray<A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result
{
    f.write_str("[")?;
    for (i, row) in array.rows().enumerate() {
        if i > 0 {
            f.write_str(",\n ")?;
        }
        f.write_str("[")?;
        for (j, elt) in row.iter().enumerate() {
            if j > 0 {
                f.write_str(", ")?;
            }
            format(elt, f)?;
        }
        f.write_str("]")?;
    }
    f.write_str("]")
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, one row per line.
///
/// ```
/// use ndmat::NdArray;
///
/// let a = NdArray::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// assert_eq!(a.to_string(), "[[1, 2],\n [3, 4]]");
/// assert_eq!(format!("{:.1}", NdArray::from_vec(vec![0.5])), "[[0.5]]");
/// ```
impl<A: fmt::Display> fmt::Display for NdArray<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, followed by its shape.
impl<A: fmt::Debug> fmt::Debug for NdArray<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, <_>::fmt)?;
        write!(f, " shape={}", self.shape())
    }
}

/// Format the array using `LowerExp` and apply the formatting parameters used
/// to each element.
impl<A: fmt::LowerExp> fmt::LowerExp for NdArray<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `LowerHex` and apply the formatting parameters used
/// to each element.
impl<A: fmt::LowerHex> fmt::LowerHex for NdArray<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_array(self, f, <_>::fmt)
    }
}

#[cfg(test)]
mod tests
{
    use crate::NdArray;

    #[test]
    fn empty_array()
    {
        assert_eq!(NdArray::<f32>::new().to_string(), "[]");
    }

    #[test]
    fn debug_shows_shape()
    {
        let a = NdArray::from_vec(vec![1, 2]);
        assert_eq!(format!("{:?}", a), "[[1, 2]] shape=[1, 2]");
    }

    #[test]
    fn column_vector()
    {
        let a = NdArray::from_shape_vec((3, 1), vec![1, 2, 3]).unwrap();
        assert_eq!(a.to_string(), "[[1],\n [2],\n [3]]");
        assert_eq!(format!("{:x}", NdArray::from_vec(vec![255])), "[[ff]]");
    }
}
