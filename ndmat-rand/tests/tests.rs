use ndmat::{Axis, NdArray, Shape};
use ndmat_rand::rand::rngs::SmallRng;
use ndmat_rand::rand::SeedableRng;
use ndmat_rand::rand_distr::{Normal, Uniform};
use ndmat_rand::RandomExt;
use quickcheck::quickcheck;

#[test]
fn test_dim()
{
    let mut rng = SmallRng::seed_from_u64(7);
    let (mm, nn) = (5, 5);
    for m in 0..mm {
        for n in 0..nn {
            let a = NdArray::random_using((m, n), Uniform::new(0., 2.).unwrap(), &mut rng);
            assert_eq!(a.shape(), Shape::new(m, n));
            assert!(a.iter().all(|x| *x < 2.));
            assert!(a.iter().all(|x| *x >= 0.));
        }
    }
}

#[test]
fn same_seed_same_array()
{
    let dist = Normal::new(0., 1.).unwrap();
    let a = NdArray::<f64>::random_using((3, 4), dist, &mut SmallRng::seed_from_u64(1));
    let b = NdArray::<f64>::random_using((3, 4), dist, &mut SmallRng::seed_from_u64(1));
    assert_eq!(a, b);
}

#[test]
fn shuffle_rows_keeps_rows()
{
    let mut rng = SmallRng::seed_from_u64(3);
    let a = NdArray::from_shape_fn((6, 3), |(r, c)| r * 10 + c);
    let b = a.shuffled_using(Axis::Row, &mut rng);
    for row in b.rows() {
        let base = row[0];
        assert_eq!(row, &[base, base + 1, base + 2]);
    }
}

#[test]
fn shuffle_cols_keeps_cols()
{
    let mut rng = SmallRng::seed_from_u64(4);
    let a = NdArray::from_shape_fn((3, 6), |(r, c)| r * 10 + c);
    let b = a.shuffled_using(Axis::Col, &mut rng);
    for c in 0..6 {
        let col = b.column(c).unwrap();
        let base = col.as_slice()[0];
        assert_eq!(col.as_slice(), &[base, base + 10, base + 20]);
    }
}

quickcheck! {
    fn shuffle_is_permutation(m: u8, n: u8, seed: u64) -> bool {
        let (m, n) = ((m % 8) as usize, (n % 8) as usize);
        let mut rng = SmallRng::seed_from_u64(seed);
        let a = NdArray::from_shape_fn((m, n), |(r, c)| r * n + c);
        let mut b = a.shuffled_using(Axis::None, &mut rng).into_raw_vec();
        b.sort();
        b == a.into_raw_vec()
    }
}
