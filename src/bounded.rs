// Copyright 2018-2024 Developers of the Rand project.
// Copyright 2014 Melissa O'Neill and PCG Project contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unbiased sampling of integers below a bound.

use core::num::{NonZeroU32, NonZeroU64};

use rand_core::RngCore;

use crate::Error;

/// Samples integers uniformly from the half-open range `[0, bound)`.
///
/// `Bounded<u32>` draws from [`RngCore::next_u32`], `Bounded<u64>` from
/// [`RngCore::next_u64`]; the algorithm is otherwise identical.
///
/// # Implementation notes
///
/// Reducing a raw draw with `r % bound` favours small results whenever
/// `bound` does not divide the size of the output range `2^N`. To avoid the
/// bias we reject every draw below `threshold = 2^N mod bound`; the remaining
/// `2^N - threshold` values are an exact multiple of `bound`, so `r % bound`
/// is then uniform. `threshold` is computed as `bound.wrapping_neg() % bound`
/// since `2^N - bound` is `-bound` in `N`-bit wrapping arithmetic.
///
/// Fewer than half of all draws are ever rejected, so the expected number of
/// draws per sample is below two. When `bound` is a power of two the
/// threshold is zero and every draw is accepted.
///
/// # Example
///
/// ```
/// use rand_pcg32x2::{Bounded, Pcg32};
///
/// let die = Bounded::<u32>::new(6).unwrap();
/// let mut rng = Pcg32::new(42, 54);
/// let roll = die.sample(&mut rng) + 1;
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounded<X> {
    bound: X,
    threshold: X, // 2^N % bound
}

macro_rules! bounded_impl {
    ($ty:ty, $nonzero:ty, $next:ident) => {
        impl Bounded<$ty> {
            /// Construct a sampler over `[0, bound)`.
            ///
            /// Returns [`Error::EmptyRange`] if `bound == 0`.
            #[inline]
            pub fn new(bound: $ty) -> Result<Self, Error> {
                <$nonzero>::new(bound)
                    .map(Self::from_nonzero)
                    .ok_or(Error::EmptyRange)
            }

            /// Construct a sampler over `[0, bound)` from a bound that is
            /// non-zero by type.
            #[inline]
            pub fn from_nonzero(bound: $nonzero) -> Self {
                let bound = bound.get();
                Bounded {
                    bound,
                    threshold: bound.wrapping_neg() % bound,
                }
            }

            /// The exclusive upper bound of sampled values.
            #[inline]
            pub fn bound(&self) -> $ty {
                self.bound
            }

            /// Sample a value in `[0, bound)`.
            #[inline]
            pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> $ty {
                loop {
                    let r = rng.$next();
                    if r >= self.threshold {
                        return r % self.bound;
                    }
                }
            }
        }
    };
}

bounded_impl! { u32, NonZeroU32, next_u32 }
bounded_impl! { u64, NonZeroU64, next_u64 }
