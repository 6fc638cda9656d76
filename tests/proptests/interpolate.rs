//! Property tests for interpolation at zero

use lagrange_secret::Error;
use lagrange_secret::domain::{Point, Threshold};
use lagrange_secret::fraction::Fraction;
use lagrange_secret::interpolate::interpolate_at_zero;
use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// A random integer polynomial plus k distinct evaluation points
#[derive(Clone, Debug)]
struct SharedPolynomial {
    coefficients: Vec<i64>,
    xs: Vec<i64>,
}

impl SharedPolynomial {
    fn eval(&self, x: i64) -> BigInt {
        let x = BigInt::from(x);
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, &c| acc * &x + c)
    }

    fn points(&self) -> Vec<Point> {
        self.xs.iter().map(|&x| Point::new(x, self.eval(x))).collect()
    }

    fn threshold(&self) -> Threshold {
        Threshold::new(self.xs.len()).unwrap()
    }
}

impl Arbitrary for SharedPolynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        // k between 1 and 8, degree < k
        let k = (usize::arbitrary(g) % 8) + 1;
        let degree = usize::arbitrary(g) % k;
        let coefficients = (0..=degree).map(|_| i64::arbitrary(g)).collect();

        let mut xs: Vec<i64> = Vec::with_capacity(k);
        while xs.len() < k {
            let x = i64::from(u16::arbitrary(g)) + 1;
            if !xs.contains(&x) {
                xs.push(x);
            }
        }
        SharedPolynomial { coefficients, xs }
    }
}

/// k points from a polynomial of degree < k recover its constant term exactly
#[quickcheck]
fn prop_recovers_constant_term(poly: SharedPolynomial) -> bool {
    let secret = interpolate_at_zero(&poly.points(), poly.threshold()).unwrap();
    secret == Fraction::from_integer(poly.coefficients[0])
}

/// The order of the points does not affect the result
#[quickcheck]
fn prop_permutation_invariant(poly: SharedPolynomial, rotate: usize) -> bool {
    let points = poly.points();
    let mut reversed = points.clone();
    reversed.reverse();
    let mut rotated = points.clone();
    rotated.rotate_left(rotate % points.len());

    let k = poly.threshold();
    let expected = interpolate_at_zero(&points, k);
    interpolate_at_zero(&reversed, k) == expected && interpolate_at_zero(&rotated, k) == expected
}

/// Repeating any x among the selected points is reported
#[quickcheck]
fn prop_duplicate_x_detected(poly: SharedPolynomial, pick: usize) -> bool {
    let mut points = poly.points();
    let source = points[pick % points.len()].clone();
    points.push(Point::new(source.x().clone(), source.y() + BigInt::from(1)));

    let k = Threshold::new(points.len()).unwrap();
    interpolate_at_zero(&points, k) == Err(Error::DuplicateX(source.x().clone()))
}
