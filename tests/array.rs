#![allow(clippy::many_single_char_names)]

use defmac::defmac;
use itertools::assert_equal;
use ndmat::prelude::*;
use ndmat_gen::{ArrayBuilder, FillOrder};
use quickcheck::quickcheck;

#[test]
fn nested_rows()
{
    let a = NdArray::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    assert_eq!(a.shape(), Shape::new(2, 3));
    assert_eq!(a.size(), 6);
    assert_eq!(a[(1, 2)], 6);
    assert_eq!(a[-1], 6);
    assert_eq!(a.get2(-1, -3), Ok(&4));
}

#[test]
fn ragged_rows_rejected()
{
    let err = NdArray::from_rows(vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn construct_shapes()
{
    defmac!(check a, r, c => {
        assert_eq!(a.shape(), Shape::new(r, c));
        assert_eq!(a.as_slice().len(), r * c);
    });
    check!(NdArray::<f64>::new(), 0, 0);
    check!(NdArray::<f64>::zeros((3, 4)), 3, 4);
    check!(NdArray::<u8>::ones((1, 5)), 1, 5);
    check!(NdArray::<i32>::square(3), 3, 3);
    check!(NdArray::<i32>::eye(4), 4, 4);
    check!(NdArray::from_vec(vec![1., 2.]), 1, 2);
    check!(NdArray::from_iter(0..7), 1, 7);
    check!(NdArray::from_elem((2, 0), 'x'), 2, 0);
    check!(NdArray::<u16>::from_bytes(&[1, 0, 2, 0, 3]), 1, 2);
}

#[test]
fn shape_vec_mismatch()
{
    assert!(NdArray::from_shape_vec((2, 2), vec![1, 2, 3]).is_err());
}

#[test]
fn checked_access_reports_extent()
{
    let a = NdArray::from_vec(vec![1, 2, 3]);
    let err = a.get(3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.message().contains('3'));
    assert_eq!(a.get(-3), Ok(&1));
    assert!(a.get(-4).is_err());
}

#[test]
#[should_panic]
fn unchecked_index_out_of_bounds()
{
    let a = NdArray::from_vec(vec![1, 2, 3]);
    let _ = a[(0, 3)];
}

#[test]
fn mutate_through_index()
{
    let mut a = NdArray::<i32>::zeros((2, 2));
    a[(0, 1)] = 5;
    a[-1] = 7;
    *a.get2_mut(1, 0).unwrap() = 3;
    assert_eq!(a.as_slice(), &[0, 5, 3, 7]);
    a.set_ones();
    assert_eq!(a.as_slice(), &[1; 4]);
    a.set_zeros();
    assert_eq!(a.as_slice(), &[0; 4]);
}

#[test]
fn structural_ops_keep_invariant()
{
    let mut a = ArrayBuilder::new((3, 4)).build::<i32>();
    assert_eq!(a.flatten().shape(), Shape::new(1, 12));
    assert_eq!(a.transpose().shape(), Shape::new(4, 3));

    a.reshape(6, -1).unwrap();
    assert_eq!(a.shape(), Shape::new(6, 2));
    assert_eq!(a.reshape(5, 2).unwrap_err().kind(), ErrorKind::Runtime);
    assert_eq!(a.reshape(-1, 5).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(a.shape(), Shape::new(6, 2));

    a.resize_slow((2, 3));
    assert_eq!(a.as_slice(), &[0, 1, 0, 2, 3, 0]);
    a.resize_fast((4, 4));
    assert_eq!(a.size(), 16);
    assert!(a.iter().all(|&x| x == 0));
}

#[test]
fn transpose_layout()
{
    let a = ArrayBuilder::new((2, 3)).build::<i32>();
    let t = ArrayBuilder::new((3, 2))
        .fill_order(FillOrder::ColMajor)
        .build::<i32>();
    assert_eq!(a.t(), t);
}

#[test]
fn rows_and_columns()
{
    let a = ArrayBuilder::new((3, 2)).build::<i32>();
    assert_equal(a.rows(), vec![&[0, 1][..], &[2, 3], &[4, 5]]);
    assert_equal(a.column_iter(-1).unwrap(), &[1, 3, 5]);
    assert_eq!(a.row(1).unwrap().as_slice(), &[2, 3]);
    assert_eq!(a.column(0).unwrap().shape(), Shape::new(3, 1));
}

#[test]
fn swap_replace_clip()
{
    let mut a = ArrayBuilder::new((2, 3)).build::<i32>();
    a.swap_rows(0, -1).unwrap();
    assert_eq!(a.as_slice(), &[3, 4, 5, 0, 1, 2]);
    a.swap_cols(0, 2).unwrap();
    assert_eq!(a.as_slice(), &[5, 4, 3, 2, 1, 0]);
    a.replace(&4, 40);
    assert_eq!(a.clip(1, 5).as_slice(), &[5, 5, 3, 2, 1, 1]);
    assert!(a.swap_rows(0, 2).is_err());
}

#[test]
fn astype_and_map()
{
    let a = NdArray::from_vec(vec![1.7f64, -2.2]);
    assert_eq!(a.astype::<i32>().as_slice(), &[1, -2]);
    assert_eq!(a.map(|x| *x > 0.).as_slice(), &[true, false]);
}

#[test]
fn dot_products()
{
    let a = ArrayBuilder::new((2, 3)).build::<i64>();
    let b = ArrayBuilder::new((3, 2)).build::<i64>();
    assert_eq!(a.dot(&b).unwrap().as_slice(), &[10, 13, 28, 40]);
    assert!(a.dot(&a).is_err());
}

#[test]
fn display()
{
    let a = NdArray::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(a.to_string(), "[[1, 2],\n [3, 4]]");
}

quickcheck! {
    fn transpose_round_trip(rows: u8, cols: u8) -> bool {
        let (rows, cols) = ((rows % 16) as usize, (cols % 16) as usize);
        let a = ArrayBuilder::new((rows, cols)).build::<i32>();
        a.t().t() == a
    }

    fn negative_indexing(xs: Vec<i32>, k: usize) -> bool {
        if xs.is_empty() {
            return true;
        }
        let n = xs.len();
        let k = 1 + k % n;
        let a = NdArray::from_vec(xs);
        a[-(k as isize)] == a[(n - k) as isize] && a.get(-(k as isize)) == a.get((n - k) as isize)
    }

    fn shape_invariant_after_resize(r: u8, c: u8, r2: u8, c2: u8) -> bool {
        let mut a = ArrayBuilder::new(((r % 9) as usize, (c % 9) as usize)).build::<u32>();
        a.resize_slow(((r2 % 9) as usize, (c2 % 9) as usize));
        a.as_slice().len() == a.shape().size()
    }
}
