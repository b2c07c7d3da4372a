//!
//! test of the public NumericArray API
//!
#[macro_use]
extern crate approx;

use numeric_array::NumericArray;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn construction_and_arithmetic() {
    init_logger();
    let mut a: NumericArray<i32> = NumericArray::new(3, 2);
    let b: NumericArray<i32> = NumericArray::from_slice(&[1, 2, 3]);
    a += &b;
    assert_eq!(a, NumericArray::from_slice(&[3, 4, 5]));
    a *= 2;
    assert_eq!(a, NumericArray::from_slice(&[6, 8, 10]));
    a.resize(5);
    assert_eq!(a.len(), 5);
}

#[test]
fn assign_preserves_buffer_on_equal_length() {
    init_logger();
    let mut a: NumericArray<f64> = NumericArray::zeros(4);
    let b: NumericArray<f64> = NumericArray::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    let p = a.as_ptr();
    a.assign(&b);
    assert_eq!(a.as_ptr(), p);
    assert_abs_diff_eq!(a, b);

    // different length reallocates
    let c: NumericArray<f64> = NumericArray::from_slice(&[9.0, 9.0]);
    a.assign(&c);
    assert_eq!(a.len(), 2);
    assert_abs_diff_eq!(a, c);
}

#[test]
fn randomized_elementwise_add() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(11);
    let n = 200;
    let xs: Vec<f64> = (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect();
    let ys: Vec<f64> = (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect();
    let mut a = NumericArray::from_slice(&xs);
    let b = NumericArray::from_slice(&ys);
    a += &b;
    for i in 0..n {
        assert_abs_diff_eq!(a[i], xs[i] + ys[i]);
    }
    a -= &b;
    for i in 0..n {
        assert_abs_diff_eq!(a[i], xs[i], epsilon = 1e-9);
    }
}

#[test]
fn interop_with_flat_buffer_routine() {
    init_logger();
    // stand-in for a C-style kernel taking (pointer, length)
    fn scale_in_place(xs: *mut f64, n: usize, k: f64) {
        let s = unsafe { std::slice::from_raw_parts_mut(xs, n) };
        for v in s.iter_mut() {
            *v *= k;
        }
    }
    let mut a: NumericArray<f64> = NumericArray::from_slice(&[1.0, 2.0, 3.0]);
    let n = a.len();
    scale_in_place(a.as_mut_ptr(), n, 2.0);
    assert_abs_diff_eq!(a, NumericArray::from_slice(&[2.0, 4.0, 6.0]));
}
