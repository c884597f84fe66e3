//! Kernels over unsigned limb slices.
//!
//! A magnitude is a little-endian slice of base-[`RADIX`] limbs. Inputs are
//! trimmed (no most-significant zero limb, except the single limb of zero)
//! and every function here returns a trimmed vector.

use std::cmp::Ordering;

use crate::integer::RADIX;

const RADIX_U64: u64 = RADIX as u64;

/// Drops most-significant zero limbs, keeping at least one limb.
pub(crate) fn trim(limbs: &mut Vec<u32>) {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
}

pub(crate) fn is_zero(limbs: &[u32]) -> bool {
    limbs.iter().all(|&limb| limb == 0)
}

/// Compares two trimmed magnitudes.
pub(crate) fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Computes `a + b` with carry propagation.
pub(crate) fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;

    for (i, &limb) in long.iter().enumerate() {
        // At most 2 * (RADIX - 1) + 1, well inside u32.
        let digit = limb + short.get(i).copied().unwrap_or(0) + carry;
        if digit >= RADIX {
            sum.push(digit - RADIX);
            carry = 1;
        } else {
            sum.push(digit);
            carry = 0;
        }
    }
    if carry > 0 {
        sum.push(carry);
    }

    trim(&mut sum);
    sum
}

/// Computes `a -= b` with borrow propagation.
///
/// Requires `a >= b`.
pub(crate) fn sub_assign(a: &mut Vec<u32>, b: &[u32]) {
    debug_assert_ne!(cmp(a, b), Ordering::Less, "magnitude subtraction underflow");
    let mut borrow = 0;

    for (i, limb) in a.iter_mut().enumerate() {
        let rhs = b.get(i).copied().unwrap_or(0) + borrow;
        if rhs == 0 && i >= b.len() {
            break;
        }
        if *limb >= rhs {
            *limb -= rhs;
            borrow = 0;
        } else {
            *limb = *limb + RADIX - rhs;
            borrow = 1;
        }
    }

    trim(a);
}

/// Computes `a - b`. Requires `a >= b`.
pub(crate) fn sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut difference = a.to_vec();
    sub_assign(&mut difference, b);
    difference
}

/// Schoolbook multiplication.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    if is_zero(a) || is_zero(b) {
        return vec![0];
    }

    let mut acc = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            // (RADIX - 1)^2 + 2 * (RADIX - 1) < u64::MAX
            let cur = acc[i + j] + u64::from(x) * u64::from(y) + carry;
            acc[i + j] = cur % RADIX_U64;
            carry = cur / RADIX_U64;
        }

        let mut k = i + b.len();
        while carry > 0 {
            let cur = acc[k] + carry;
            acc[k] = cur % RADIX_U64;
            carry = cur / RADIX_U64;
            k += 1;
        }
    }

    let mut product: Vec<u32> = acc.into_iter().map(|limb| limb as u32).collect();
    trim(&mut product);
    product
}

/// Multiplies a magnitude by a single limb-sized factor.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn mul_small(a: &[u32], factor: u32) -> Vec<u32> {
    if factor == 0 || is_zero(a) {
        return vec![0];
    }

    let mut product = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u64;
    for &limb in a {
        let cur = u64::from(limb) * u64::from(factor) + carry;
        product.push((cur % RADIX_U64) as u32);
        carry = cur / RADIX_U64;
    }
    while carry > 0 {
        product.push((carry % RADIX_U64) as u32);
        carry /= RADIX_U64;
    }

    trim(&mut product);
    product
}

/// Long division, one dividend limb at a time.
///
/// Returns `(quotient, remainder)`. The divisor must be non-zero.
pub(crate) fn div_rem(dividend: &[u32], divisor: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!is_zero(divisor), "magnitude division by zero");

    if cmp(dividend, divisor) == Ordering::Less {
        return (vec![0], dividend.to_vec());
    }

    let mut quotient = vec![0u32; dividend.len()];
    let mut remainder = vec![0u32];

    for (position, &limb) in dividend.iter().enumerate().rev() {
        // remainder = remainder * RADIX + limb
        if is_zero(&remainder) {
            remainder[0] = limb;
        } else {
            remainder.insert(0, limb);
        }

        let digit = quotient_digit(&remainder, divisor);
        if digit > 0 {
            sub_assign(&mut remainder, &mul_small(divisor, digit));
        }
        quotient[position] = digit;
    }

    trim(&mut quotient);
    (quotient, remainder)
}

/// Largest `q` in `[0, RADIX)` with `divisor * q <= remainder`.
///
/// Requires `remainder < divisor * RADIX`, which long division maintains.
fn quotient_digit(remainder: &[u32], divisor: &[u32]) -> u32 {
    if cmp(remainder, divisor) == Ordering::Less {
        return 0;
    }

    // divisor * low <= remainder < divisor * high
    let (mut low, mut high) = (1u32, RADIX);
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if cmp(&mul_small(divisor, mid), remainder) == Ordering::Greater {
            high = mid;
        } else {
            low = mid;
        }
    }
    low
}
