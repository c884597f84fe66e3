//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{gcd, BigInteger, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Decimal literals spanning several limbs
    fn big_literal() -> impl Strategy<Value = String> {
        prop_oneof!["0", "-?[1-9][0-9]{0,45}"]
    }

    // Values sitting on limb boundaries, where carries and borrows ripple
    fn boundary_literal() -> impl Strategy<Value = String> {
        let magnitudes = prop::sample::select(vec![
            "0",
            "1",
            "999999999",
            "1000000000",
            "1000000001",
            "999999999999999999",
            "1000000000000000000",
            "1000000000000000000000000000",
        ]);
        (any::<bool>(), magnitudes).prop_map(|(negative, m)| {
            if negative && m != "0" {
                format!("-{m}")
            } else {
                m.to_string()
            }
        })
    }

    fn any_literal() -> impl Strategy<Value = String> {
        prop_oneof![big_literal(), boundary_literal()]
    }

    fn pair(a: &str, b: &str) -> (BigInteger, BigInteger, IBig, IBig) {
        (
            a.parse().unwrap(),
            b.parse().unwrap(),
            a.parse().unwrap(),
            b.parse().unwrap(),
        )
    }

    proptest! {
        // Agreement with an independent implementation

        #[test]
        fn add_matches_dashu(a in any_literal(), b in any_literal()) {
            let (x, y, ox, oy) = pair(&a, &b);
            prop_assert_eq!((x + y).to_string(), (ox + oy).to_string());
        }

        #[test]
        fn sub_matches_dashu(a in any_literal(), b in any_literal()) {
            let (x, y, ox, oy) = pair(&a, &b);
            prop_assert_eq!((x - y).to_string(), (ox - oy).to_string());
        }

        #[test]
        fn mul_matches_dashu(a in any_literal(), b in any_literal()) {
            let (x, y, ox, oy) = pair(&a, &b);
            prop_assert_eq!((x * y).to_string(), (ox * oy).to_string());
        }

        #[test]
        fn div_rem_matches_dashu(a in any_literal(), b in any_literal()) {
            let (x, y, ox, oy) = pair(&a, &b);
            prop_assume!(!y.is_zero());
            let (q, r) = x.div_rem(&y);
            prop_assert_eq!(q.to_string(), (&ox / &oy).to_string());
            prop_assert_eq!(r.to_string(), (&ox % &oy).to_string());
        }

        #[test]
        fn ordering_matches_dashu(a in any_literal(), b in any_literal()) {
            let (x, y, ox, oy) = pair(&a, &b);
            prop_assert_eq!(x.cmp(&y), ox.cmp(&oy));
        }

        // Integer laws

        #[test]
        fn integer_text_round_trip(a in any_literal()) {
            let x: BigInteger = a.parse().unwrap();
            let back: BigInteger = x.to_string().parse().unwrap();
            prop_assert_eq!(back, x);
        }

        #[test]
        fn integer_division_identity(a in any_literal(), b in any_literal()) {
            let (x, y, _, _) = pair(&a, &b);
            prop_assume!(!y.is_zero());
            let q = &x / &y;
            let r = &x % &y;
            prop_assert_eq!(&q * &y + &r, x.clone());
            prop_assert!(r.is_zero() || r.is_negative() == x.is_negative());
            prop_assert!(r.abs() < y.abs());
        }

        #[test]
        fn integer_sub_then_add(a in any_literal(), b in any_literal()) {
            let (x, y, _, _) = pair(&a, &b);
            prop_assert_eq!(&x - &y + &y, x.clone());
            prop_assert!((&x - &x).is_zero());
        }

        #[test]
        fn integer_order_consistent_with_sub(a in any_literal(), b in any_literal()) {
            let (x, y, _, _) = pair(&a, &b);
            prop_assert_eq!(x < y, (&y - &x).is_positive());
        }

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = BigInteger::new(a);
            let b = BigInteger::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        }

        #[test]
        fn integer_add_associative(a in any_literal(), b in any_literal(), c in any_literal()) {
            let (a, b, _, _) = pair(&a, &b);
            let c: BigInteger = c.parse().unwrap();
            prop_assert_eq!(
                (&a + &b) + &c,
                &a + (&b + &c)
            );
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = BigInteger::new(a);
            let b = BigInteger::new(b);
            let c = BigInteger::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn integer_identities(a in any_literal()) {
            let a: BigInteger = a.parse().unwrap();
            prop_assert_eq!(&a * &BigInteger::one(), a.clone());
            prop_assert!((&a * &BigInteger::zero()).is_zero());
            prop_assert_eq!(&a + &BigInteger::zero(), a.clone());
            prop_assert!((&a + &-&a).is_zero());
        }

        #[test]
        fn integer_native_round_trip(a in any::<i64>()) {
            prop_assert_eq!(BigInteger::new(a).to_i64(), Some(a));
            prop_assert_eq!(BigInteger::new(a).to_string(), a.to_string());
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = BigInteger::new(a);
            let b = BigInteger::new(b);
            let g = gcd(&a, &b);

            // g should divide both a and b
            let rem_a = a.clone() % g.clone();
            let rem_b = b.clone() % g.clone();
            prop_assert!(rem_a.is_zero());
            prop_assert!(rem_b.is_zero());
        }

        #[test]
        fn gcd_commutative(a in non_zero_int(), b in non_zero_int()) {
            let a = BigInteger::new(a);
            let b = BigInteger::new(b);
            prop_assert_eq!(gcd(&a, &b), gcd(&b, &a));
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        }

        #[test]
        fn rational_mul_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(a.clone() * b.clone(), b.clone() * a.clone());
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            let a = Rational::from_i64(num, den);
            let inv = a.recip();
            let product = a * inv;
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_reduced_is_lowest_terms(
            num in non_zero_int(),
            den in non_zero_int(),
            scale in non_zero_int()
        ) {
            let r = Rational::new(
                BigInteger::new(num) * BigInteger::new(scale),
                BigInteger::new(den) * BigInteger::new(scale),
            );
            let (n, d) = r.into_parts();
            prop_assert!(gcd(&n, &d).is_one());
            prop_assert!(d.is_positive());
        }

        #[test]
        fn rational_decimal_zero_precision_is_truncation(
            num in small_int(),
            den in non_zero_int()
        ) {
            let r = Rational::from_i64(num, den);
            let truncated = (num / den).to_string();
            let expected = if num * den < 0 && num / den == 0 {
                format!("-{truncated}")
            } else {
                truncated
            };
            prop_assert_eq!(r.as_decimal(0), expected);
        }

        #[test]
        fn rational_text_round_trip(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            let back: Rational = r.to_string().parse().unwrap();
            prop_assert_eq!(back, r);
        }
    }
}
