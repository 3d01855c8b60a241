// Copyright 2018-2024 Developers of the Rand project.
// Copyright 2014 Melissa O'Neill and PCG Project contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A 64-bit generator made of two `pcg32` generators on distinct streams

use core::fmt;
use core::num::NonZeroU64;

use rand_core::{impls, le, Error as RngError, RngCore, SeedableRng};

use crate::{Bounded, Error, Lcg64Xsh32, DEFAULT_STREAM};

// The stream bits that survive `(stream << 1) | 1`.
const STREAM_MASK: u64 = u64::MAX >> 1;

/// Two [`Lcg64Xsh32`] generators tied together for 64-bit output.
///
/// Each call to `next_u64` draws once from both halves and concatenates
/// the results, the first generator supplying the high 32 bits. This gives
/// 64-bit output without 128-bit arithmetic.
///
/// The two halves always run on different streams, so they never walk the
/// same sequence; tying together two identical generators would halve the
/// quality of every output. The period stays at 2^64 while the state space
/// is roughly 2^254 (2^64 * 2^64 * 2^63 * (2^63 - 1)).
///
/// Like its halves, this generator is not cryptographically secure.
///
/// ```
/// use rand_pcg32x2::rand_core::RngCore;
/// use rand_pcg32x2::Pcg32x2;
///
/// let mut rng = Pcg32x2::new(42, 42);
/// let coin = rng.bounded_rand(2);
/// let x = rng.next_u64();
/// # let _ = (coin, x);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Pcg32x2 {
    gens: [Lcg64Xsh32; 2],
}

impl Pcg32x2 {
    /// Construct an instance from two seeds and two stream selectors.
    ///
    /// If the streams would coincide (they are compared on the 63 bits each
    /// generator keeps), `stream2` is replaced by its complement.
    pub fn with_streams(state1: u64, state2: u64, stream1: u64, mut stream2: u64) -> Self {
        if (stream1 & STREAM_MASK) == (stream2 & STREAM_MASK) {
            debug!(
                "Pcg32x2: streams {:#x} and {:#x} coincide; complementing the second",
                stream1, stream2
            );
            stream2 = !stream2;
        }
        Pcg32x2 {
            gens: [
                Lcg64Xsh32::new(state1, stream1),
                Lcg64Xsh32::new(state2, stream2),
            ],
        }
    }

    /// Construct an instance from two seeds, on fixed streams.
    ///
    /// Both halves request [`DEFAULT_STREAM`]; the collision check in
    /// [`Pcg32x2::with_streams`] moves the second half onto the complement
    /// stream. The result is fully determined by `state1` and `state2`.
    pub fn new(state1: u64, state2: u64) -> Self {
        Pcg32x2::with_streams(state1, state2, DEFAULT_STREAM, DEFAULT_STREAM)
    }

    /// Advance both halves, equivalent to calling `next_u64()` `delta`
    /// number of times.
    ///
    /// See [`Lcg64Xsh32::advance`].
    #[inline]
    pub fn advance(&mut self, delta: u64) {
        for half in &mut self.gens {
            half.advance(delta);
        }
    }

    /// The LCG increments of the two halves, in output order.
    ///
    /// These are always distinct.
    #[inline]
    pub fn increments(&self) -> [u64; 2] {
        [self.gens[0].increment(), self.gens[1].increment()]
    }

    /// Return a value uniformly distributed in `[0, bound)`.
    ///
    /// Raw outputs that would bias the result are rejected, see [`Bounded`].
    ///
    /// # Panics
    ///
    /// Panics if `bound == 0`. Use [`Pcg32x2::try_bounded_rand`] to handle
    /// a zero bound as an error instead.
    #[inline]
    pub fn bounded_rand(&mut self, bound: u64) -> u64 {
        match NonZeroU64::new(bound) {
            Some(bound) => Bounded::<u64>::from_nonzero(bound).sample(self),
            None => panic!("Pcg32x2::bounded_rand: cannot sample empty range"),
        }
    }

    /// Return a value uniformly distributed in `[0, bound)`, or
    /// [`Error::EmptyRange`] without advancing the generator if `bound == 0`.
    #[inline]
    pub fn try_bounded_rand(&mut self, bound: u64) -> Result<u64, Error> {
        Bounded::<u64>::new(bound).map(|b| b.sample(self))
    }
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Pcg32x2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pcg32x2 {{}}")
    }
}

impl SeedableRng for Pcg32x2 {
    type Seed = [u8; 32];

    /// The seed holds, little-endian, the two states followed by the two
    /// stream selectors. The highest bit of each stream is ignored.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut seed_u64 = [0u64; 4];
        le::read_u64_into(&seed, &mut seed_u64);
        Pcg32x2::with_streams(seed_u64[0], seed_u64[1], seed_u64[2], seed_u64[3])
    }
}

impl RngCore for Pcg32x2 {
    /// Returns the low 32 bits of [`RngCore::next_u64`]; the high half of
    /// the draw is discarded, so both inner generators still advance.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.gens[0].next_u32());
        let lo = u64::from(self.gens[1].next_u32());
        (hi << 32) | lo
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RngError> {
        self.fill_bytes(dest);
        Ok(())
    }
}
