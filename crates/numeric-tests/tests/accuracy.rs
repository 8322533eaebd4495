use ndmat::{Axis, NdArray};
use ndmat_rand::RandomExt;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, StandardNormal};

use num_traits::Float;

use approx::{assert_abs_diff_eq, assert_relative_eq};

fn kahan_sum<A>(iter: impl Iterator<Item = A>) -> A
where A: Float
{
    let mut sum = A::zero();
    let mut compensation = A::zero();

    for elt in iter {
        let y = elt - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }

    sum
}

// simple, slow, correct (hopefully) mat mul
fn reference_mat_mul<A>(lhs: &NdArray<A>, rhs: &NdArray<A>) -> NdArray<A>
where A: Float
{
    let (m, k, n) = (lhs.nrows(), lhs.ncols(), rhs.ncols());
    NdArray::from_shape_fn((m, n), |(i, j)| {
        kahan_sum((0..k).map(|x| lhs[(i as isize, x as isize)] * rhs[(x as isize, j as isize)]))
    })
}

fn gen<A>(shape: (usize, usize), rng: &mut SmallRng) -> NdArray<A>
where
    A: Float,
    StandardNormal: Distribution<A>,
{
    NdArray::random_using(shape, Normal::new(A::zero(), A::one()).unwrap(), rng)
}

#[test]
fn accurate_sum_f64()
{
    let mut rng = SmallRng::from_os_rng();
    for i in 0..20 {
        let n = 100 + i * 37;
        let a = gen::<f64>((1, n), &mut rng);
        let expected = kahan_sum(a.iter().cloned());
        let sum = a.sum(Axis::None).item().unwrap();
        assert_abs_diff_eq!(sum, expected, epsilon = 1e-9);
    }
}

#[test]
fn sum_along_axes_agrees()
{
    let mut rng = SmallRng::seed_from_u64(11);
    let a = gen::<f64>((37, 53), &mut rng);
    let total = a.sum(Axis::None).item().unwrap();
    let by_rows = kahan_sum(a.sum(Axis::Row).iter().cloned());
    let by_cols = kahan_sum(a.sum(Axis::Col).iter().cloned());
    assert_relative_eq!(total, by_rows, epsilon = 1e-9, max_relative = 1e-9);
    assert_relative_eq!(total, by_cols, epsilon = 1e-9, max_relative = 1e-9);
}

#[test]
fn mean_var_std_match_naive()
{
    let mut rng = SmallRng::seed_from_u64(5);
    for _ in 0..10 {
        let rows = rng.random_range(1..30);
        let cols = rng.random_range(1..30);
        let a = gen::<f64>((rows, cols), &mut rng);

        let mean = a.mean(Axis::Row).unwrap();
        let var = a.var(Axis::Row).unwrap();
        let std = a.std(Axis::Row).unwrap();
        for c in 0..cols {
            let column = a.column(c as isize).unwrap();
            let n = rows as f64;
            let m = kahan_sum(column.iter().cloned()) / n;
            let v = kahan_sum(column.iter().map(|&x| (x - m) * (x - m))) / n;
            assert_abs_diff_eq!(mean[c as isize], m, epsilon = 1e-12);
            assert_abs_diff_eq!(var[c as isize], v, epsilon = 1e-10);
            assert_abs_diff_eq!(std[c as isize], v.sqrt(), epsilon = 1e-10);
        }
    }
}

#[test]
fn accurate_mat_mul_f64()
{
    let mut rng = SmallRng::seed_from_u64(17);
    for i in 0..20 {
        let m = 1 + (i * 7) % 19;
        let k = 1 + (i * 5) % 23;
        let n = 1 + (i * 3) % 17;
        let a = gen::<f64>((m, k), &mut rng);
        let b = gen::<f64>((k, n), &mut rng);
        let c = a.dot(&b).unwrap();
        let reference = reference_mat_mul(&a, &b);
        assert_relative_eq!(c, reference, epsilon = 1e-12, max_relative = 1e-7);
    }
}

#[test]
fn accurate_mat_mul_f32()
{
    let mut rng = SmallRng::seed_from_u64(19);
    let a = gen::<f32>((13, 29), &mut rng);
    let b = gen::<f32>((29, 7), &mut rng);
    let c = a.dot(&b).unwrap();
    assert_relative_eq!(c, reference_mat_mul(&a, &b), epsilon = 1e-4, max_relative = 1e-3);
}

#[test]
fn cumsum_last_equals_sum()
{
    let mut rng = SmallRng::seed_from_u64(23);
    let a = gen::<f64>((9, 14), &mut rng);
    let cumsum = a.cumsum(Axis::Col);
    let sums = a.sum(Axis::Col);
    for r in 0..9isize {
        assert_abs_diff_eq!(cumsum[(r, -1)], sums[r], epsilon = 1e-12);
    }
}
