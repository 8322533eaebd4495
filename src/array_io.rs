// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Headerless binary and text dumps of the element buffer.
//!
//! The binary format is the elements in row-major order, native byte order,
//! with no magic number and no shape: the reader gets a `1 × n` row vector
//! and reshapes it itself.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::imp_prelude::*;

/// Plain numeric element types that can be written to and read from raw
/// bytes in native byte order.
pub trait Pod: Copy + 'static
{
    /// `size_of::<Self>()`
    const SIZE: usize;

    /// Append the native endian bytes of `self` to `out`.
    fn write_ne(&self, out: &mut Vec<u8>);

    /// Read a value from exactly `Self::SIZE` native endian bytes.
    ///
    /// **Panics** if `bytes.len() != Self::SIZE`.
    fn from_ne_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_pod {
    ($($t:ty),*) => {
        $(
        impl Pod for $t
        {
            const SIZE: usize = std::mem::size_of::<$t>();

            #[inline]
            fn write_ne(&self, out: &mut Vec<u8>)
            {
                out.extend_from_slice(&self.to_ne_bytes());
            }

            #[inline]
            fn from_ne_slice(bytes: &[u8]) -> Self
            {
                let mut buf = [0u8; std::mem::size_of::<$t>()];
                buf.copy_from_slice(bytes);
                <$t>::from_ne_bytes(buf)
            }
        }
        )*
    };
}

impl_pod!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, f32, f64);

/// `path` with `ext` appended if it has no extension.
pub(crate) fn with_default_extension(path: &Path, ext: &str) -> PathBuf
{
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(ext)
    }
}

/// Write the elements of `arrays` back to back to a new binary file.
pub(crate) fn dump_elements<'a, A, I>(path: &Path, arrays: I) -> Result<PathBuf, ArrayError>
where
    A: Pod,
    I: IntoIterator<Item = &'a NdArray<A>>,
{
    let path = with_default_extension(path, "bin");
    let mut out = BufWriter::new(File::create(&path)?);
    let mut bytes = Vec::new();
    let mut count = 0;
    for array in arrays {
        bytes.clear();
        for x in array.iter() {
            x.write_ne(&mut bytes);
        }
        out.write_all(&bytes)?;
        count += array.size();
    }
    out.flush()?;
    log::trace!("wrote {} elements to {}", count, path.display());
    Ok(path)
}

/// # Binary and Text Files
impl<A> NdArray<A>
{
    /// Write the elements in row-major order as raw native endian bytes.
    ///
    /// No header or shape is written. If `path` has no extension, `.bin` is
    /// appended. Returns the path that was written.
    ///
    /// **Errors** with `Runtime` if the file cannot be created or written.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, ArrayError>
    where A: Pod
    {
        dump_elements(path.as_ref(), Some(self))
    }

    /// Alias for [`NdArray::dump`].
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, ArrayError>
    where A: Pod
    {
        self.dump(path)
    }

    /// Write the elements in row-major order as text, separated by `sep`.
    ///
    /// If `path` has no extension, `.txt` is appended. Returns the path that
    /// was written.
    ///
    /// **Errors** with `Runtime` if the file cannot be created or written.
    pub fn to_file_text<P: AsRef<Path>>(&self, path: P, sep: char) -> Result<PathBuf, ArrayError>
    where A: Display
    {
        let path = with_default_extension(path.as_ref(), "txt");
        let mut out = BufWriter::new(File::create(&path)?);
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(out, "{}", sep)?;
            }
            write!(out, "{}", x)?;
        }
        out.flush()?;
        log::trace!("wrote {} elements as text to {}", self.size(), path.display());
        Ok(path)
    }
}

/// Read a file written by [`NdArray::dump`] into a `1 × n` row vector, where
/// `n` is the file length divided by the element size.
///
/// Trailing bytes that do not make up a whole element are ignored. Reading
/// a file with a different element type than it was written with yields
/// meaningless values.
///
/// **Errors** with `Runtime` if the file cannot be read.
///
/// ```no_run
/// use ndmat::{from_file, NdArray};
///
/// let a = NdArray::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
/// let path = a.dump("weights").unwrap();
/// let mut b = from_file::<f64, _>(&path).unwrap();
/// b.reshape(2, 2).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn from_file<A, P>(path: P) -> Result<NdArray<A>, ArrayError>
where
    A: Pod,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let array = NdArray::from_bytes(&bytes);
    log::trace!("read {} elements from {}", array.size(), path.display());
    Ok(array)
}

/// Alias for [`from_file`].
pub fn load<A, P>(path: P) -> Result<NdArray<A>, ArrayError>
where
    A: Pod,
    P: AsRef<Path>,
{
    from_file(path)
}

/// Read a text file of elements separated by `sep` (or line breaks) into a
/// `1 × n` row vector.
///
/// Empty tokens are skipped, so a trailing separator or newline is allowed.
///
/// **Errors** with `Runtime` if the file cannot be read and with
/// `InvalidArgument` if a token does not parse as `A`.
pub fn from_file_text<A, P>(path: P, sep: char) -> Result<NdArray<A>, ArrayError>
where
    A: FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let values = text
        .split(|c: char| c == sep || c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .enumerate()
        .map(|(i, tok)| {
            tok.parse::<A>()
                .map_err(|_| invalid_argument(format!("cannot parse element {} ({:?}) of {}", i, tok, path.display())))
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::trace!("read {} elements as text from {}", values.len(), path.display());
    Ok(NdArray::from_vec(values))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn default_extension()
    {
        assert_eq!(with_default_extension(Path::new("a/b"), "bin"), PathBuf::from("a/b.bin"));
        assert_eq!(with_default_extension(Path::new("a/b.dat"), "bin"), PathBuf::from("a/b.dat"));
    }

    #[test]
    fn pod_bytes()
    {
        let mut out = Vec::new();
        (-7i16).write_ne(&mut out);
        assert_eq!(out.len(), i16::SIZE);
        assert_eq!(i16::from_ne_slice(&out), -7);
    }
}
