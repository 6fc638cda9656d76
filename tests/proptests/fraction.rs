//! Property tests for exact fraction arithmetic

use lagrange_secret::Error;
use lagrange_secret::fraction::Fraction;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Any canonical fraction, built from a non-zero denominator
#[derive(Clone, Debug)]
struct AnyFraction(Fraction);

impl Arbitrary for AnyFraction {
    fn arbitrary(g: &mut Gen) -> Self {
        let numer = BigInt::from(i64::arbitrary(g));
        let denom = match i64::arbitrary(g) {
            0 => 1,
            d => d,
        };
        AnyFraction(Fraction::reduce(numer, BigInt::from(denom)).unwrap())
    }
}

fn is_canonical(f: &Fraction) -> bool {
    f.denom().is_positive() && f.numer().abs().gcd(f.denom()).is_one()
}

/// Every reduced fraction has a positive denominator coprime with the numerator
#[quickcheck]
fn prop_reduce_canonical(numer: i64, denom: i64) -> bool {
    if denom == 0 {
        return Fraction::reduce(BigInt::from(numer), BigInt::zero())
            == Err(Error::ZeroDenominator);
    }
    is_canonical(&Fraction::reduce(BigInt::from(numer), BigInt::from(denom)).unwrap())
}

/// Reducing an already reduced fraction changes nothing
#[quickcheck]
fn prop_reduce_idempotent(a: AnyFraction) -> bool {
    let AnyFraction(f) = a;
    let again = Fraction::reduce(f.numer().clone(), f.denom().clone()).unwrap();
    again == f
}

/// Scaling numerator and denominator by the same factor gives the same fraction
#[quickcheck]
fn prop_reduce_scale_invariant(a: AnyFraction, factor: i32) -> bool {
    if factor == 0 {
        return true;
    }
    let AnyFraction(f) = a;
    let k = BigInt::from(factor);
    Fraction::reduce(f.numer() * &k, f.denom() * &k).unwrap() == f
}

#[quickcheck]
fn prop_add_commutative(a: AnyFraction, b: AnyFraction) -> bool {
    &a.0 + &b.0 == &b.0 + &a.0
}

#[quickcheck]
fn prop_mul_commutative(a: AnyFraction, b: AnyFraction) -> bool {
    &a.0 * &b.0 == &b.0 * &a.0
}

#[quickcheck]
fn prop_add_associative(a: AnyFraction, b: AnyFraction, c: AnyFraction) -> bool {
    &(&a.0 + &b.0) + &c.0 == &a.0 + &(&b.0 + &c.0)
}

#[quickcheck]
fn prop_identities(a: AnyFraction) -> bool {
    let AnyFraction(f) = a;
    &f + &Fraction::zero() == f && &f * &Fraction::one() == f
}

/// Results of every operation stay canonical
#[quickcheck]
fn prop_operations_canonical(a: AnyFraction, b: AnyFraction) -> bool {
    let sum = &a.0 + &b.0;
    let product = &a.0 * &b.0;
    let quotient = a.0.checked_div(&b.0);
    is_canonical(&sum)
        && is_canonical(&product)
        && match quotient {
            Ok(q) => is_canonical(&q),
            Err(e) => b.0.is_zero() && e == Error::DivideByZero,
        }
}

/// Division undoes multiplication by a non-zero fraction
#[quickcheck]
fn prop_div_inverts_mul(a: AnyFraction, b: AnyFraction) -> bool {
    if b.0.is_zero() {
        return true;
    }
    (&a.0 * &b.0).checked_div(&b.0) == Ok(a.0)
}
