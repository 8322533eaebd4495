use approx::assert_abs_diff_eq;
use ndmat::prelude::*;
use ndmat_gen::ArrayBuilder;
use quickcheck::quickcheck;

fn sample() -> NdArray<i32>
{
    NdArray::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
}

#[test]
fn sum_shapes()
{
    let a = sample();
    assert_eq!(a.sum(Axis::None).shape(), Shape::new(1, 1));
    assert_eq!(a.sum(Axis::None).item(), Ok(21));
    assert_eq!(a.sum(Axis::Row).as_slice(), &[5, 7, 9]);
    assert_eq!(a.sum(Axis::Col).as_slice(), &[6, 15]);
    assert_eq!(a.prod(Axis::Col).as_slice(), &[6, 120]);
}

#[test]
fn population_statistics()
{
    let a = NdArray::from_rows(vec![vec![1., 3.], vec![5., 7.]]).unwrap();
    assert_eq!(a.mean(Axis::None).unwrap().as_slice(), &[4.]);
    assert_eq!(a.mean(Axis::Row).unwrap().as_slice(), &[3., 5.]);
    assert_eq!(a.var(Axis::Col).unwrap().as_slice(), &[1., 1.]);
    assert_abs_diff_eq!(a.std(Axis::None).unwrap().as_slice()[0], 5f64.sqrt(), epsilon = 1e-12);

    let ints = sample();
    assert_eq!(ints.mean(Axis::Col).unwrap().as_slice(), &[2., 5.]);
}

#[test]
fn extrema()
{
    let a = NdArray::from_rows(vec![vec![3, 9, 3], vec![7, 0, 9]]).unwrap();
    assert_eq!(a.min(Axis::None).unwrap().as_slice(), &[0]);
    assert_eq!(a.max(Axis::Row).unwrap().as_slice(), &[7, 9, 9]);
    assert_eq!(a.argmax(Axis::None).unwrap().as_slice(), &[1]);
    assert_eq!(a.argmax(Axis::Col).unwrap().as_slice(), &[1, 2]);
    assert_eq!(a.argmin(Axis::Col).unwrap().as_slice(), &[0, 1]);
    assert_eq!(a.ptp(Axis::Col).unwrap().as_slice(), &[6, 9]);
}

#[test]
fn empty_reductions_fail()
{
    let e = NdArray::<f64>::new();
    assert_eq!(e.sum(Axis::None).as_slice(), &[0.]);
    assert_eq!(e.min(Axis::None).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(e.mean(Axis::None).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(e.median(Axis::None).unwrap_err().kind(), ErrorKind::Runtime);
    assert!(e.cumsum(Axis::None).is_empty());
}

#[test]
fn median_does_not_average()
{
    let a = NdArray::from_vec(vec![1, 2, 3, 4]);
    assert_eq!(a.median(Axis::None).unwrap().as_slice(), &[3]);

    let f = NdArray::from_vec(vec![4., 1., 2., 3.]);
    let m = f.median(Axis::None).unwrap().item().unwrap();
    assert_eq!(m, 3.);
    assert_ne!(m, 2.5);

    let b = NdArray::from_rows(vec![vec![5, 1, 3], vec![2, 8, 4]]).unwrap();
    assert_eq!(b.median(Axis::Col).unwrap().as_slice(), &[3, 4]);
    assert_eq!(b.median(Axis::Row).unwrap().as_slice(), &[5, 8, 4]);
}

#[test]
fn scans()
{
    let a = sample();
    assert_eq!(a.cumsum(Axis::Col).as_slice(), &[1, 3, 6, 4, 9, 15]);
    assert_eq!(a.cumprod(Axis::Row).as_slice(), &[1, 2, 3, 4, 10, 18]);
    assert_eq!(a.cumprod(Axis::None).shape(), Shape::new(1, 6));
}

#[test]
fn sorting()
{
    let mut a = NdArray::from_rows(vec![vec![3, 1, 2], vec![0, 5, 4]]).unwrap();
    assert_eq!(a.argsort(Axis::Col).as_slice(), &[1, 2, 0, 0, 2, 1]);
    assert_eq!(a.is_sorted(Axis::Col).as_slice(), &[false, false]);

    let mut rows = a.clone();
    rows.sort(Axis::Row);
    assert_eq!(rows.as_slice(), &[0, 1, 2, 3, 5, 4]);

    a.sort(Axis::None);
    assert_eq!(a.as_slice(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(a.is_sorted(Axis::None).as_slice(), &[true]);
    assert_eq!(a.shape(), Shape::new(2, 3));
}

#[test]
fn partition_places_kth()
{
    let mut a = NdArray::from_vec(vec![9, 1, 8, 2, 7, 3]);
    a.partition(2, Axis::None).unwrap();
    assert_eq!(a[2], 3);
    assert!(a.as_slice()[..2].iter().all(|&x| x <= 3));
    assert!(a.as_slice()[3..].iter().all(|&x| x >= 3));
    assert!(a.partition(6, Axis::None).is_err());
}

#[test]
fn diagonals()
{
    let a = ArrayBuilder::new((3, 4)).build::<i32>();
    assert_eq!(a.trace(0, Axis::None), 0 + 5 + 10);
    assert_eq!(a.trace(2, Axis::Col), 2 + 7);
    assert_eq!(a.diagonal(1, Axis::Row).unwrap().as_slice(), &[1, 6, 11]);
    assert_eq!(a.diagonal(0, Axis::Col).unwrap().as_slice(), &[0, 5, 10]);
    assert!(a.diagonal(0, Axis::None).is_err());
}

#[test]
fn diagonal_far_offsets_are_empty()
{
    let a = ArrayBuilder::new((3, 4)).build::<i32>();
    for axis in [Axis::Row, Axis::Col] {
        assert!(a.diagonal(isize::MIN, axis).unwrap().is_empty());
        assert!(a.diagonal(isize::MAX, axis).unwrap().is_empty());
    }
}

#[test]
fn truth_tests()
{
    let a = NdArray::from_rows(vec![vec![0, 2, 3], vec![0, 0, 1]]).unwrap();
    assert_eq!(a.all(Axis::Col).as_slice(), &[false, false]);
    assert_eq!(a.any(Axis::Row).as_slice(), &[false, true, true]);
    assert_eq!(a.count_nonzero(Axis::None).as_slice(), &[3]);
    assert_eq!(a.contains(&1, Axis::Col).as_slice(), &[false, true]);
    assert_eq!(a.flatnonzero().as_slice(), &[1, 2, 5]);
    let (rows, cols) = a.nonzero();
    assert_eq!(rows.as_slice(), &[0, 0, 1]);
    assert_eq!(cols.as_slice(), &[1, 2, 2]);
}

quickcheck! {
    fn reduction_shapes(rows: u8, cols: u8) -> bool {
        let (r, c) = (1 + (rows % 10) as usize, 1 + (cols % 10) as usize);
        let a = ArrayBuilder::new((r, c)).build::<i64>();
        let total: i64 = a.iter().sum();
        a.sum(Axis::Col).shape() == Shape::new(1, r)
            && a.sum(Axis::Row).shape() == Shape::new(1, c)
            && a.sum(Axis::None).shape() == Shape::new(1, 1)
            && a.sum(Axis::None).item() == Ok(total)
            && a.max(Axis::Row).map(|m| m.shape()) == Ok(Shape::new(1, c))
    }
}
