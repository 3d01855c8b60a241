// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `pcg32` random number generator and a 64-bit generator built from
//! two of them.
//!
//! This is a native Rust implementation of two small [PCG generators] that
//! need nothing wider than 64-bit arithmetic, which makes them a good fit for
//! 32-bit targets.
//!
//! ## Generators
//!
//! This crate provides:
//!
//! -   [`Pcg32`] aka [`Lcg64Xsh32`], officially known as `pcg32`, a general
//!     purpose RNG with 64-bit state and 32-bit output.
//! -   [`Pcg32x2`], two `pcg32` generators on distinct streams whose outputs
//!     are concatenated into 64-bit values. The period is 2^64, the state
//!     space about 2^254.
//!
//! Both are deterministic and portable, with testing against reference
//! vectors. Neither is suitable for cryptography.
//!
//! ## Seeding (construction)
//!
//! Construction is seeding: there is no unseeded generator. Some options:
//!
//! 1.  With an explicit **state and stream**. Generators on different streams
//!     never produce overlapping sequences.
//!     ```
//!     use rand_pcg32x2::{Pcg32, Pcg32x2};
//!     let a = Pcg32::new(42, 54);
//!     let b = Pcg32x2::with_streams(42, 42, 54, 55);
//!     # let _ = (a, b);
//!     ```
//! 2.  With a state only, on [`DEFAULT_STREAM`]:
//!     [`Lcg64Xsh32::from_state`] or [`Pcg32x2::new`].
//! 3.  Through [`SeedableRng`], for example `seed_from_u64` or `from_seed`.
//!
//! ## Generation
//!
//! Generators implement [`RngCore`], whose methods produce unbounded integer
//! or byte values. Values below a bound are produced without modulo bias by
//! `bounded_rand`, or by a reusable [`Bounded`] sampler.
//! ```
//! use rand_core::RngCore;
//! use rand_pcg32x2::Pcg32x2;
//!
//! let mut rng = Pcg32x2::new(42, 42);
//! assert_eq!(rng.next_u64(), 0xc2f57bd60e86d273);
//! let roll = rng.bounded_rand(6) + 1;
//! assert!((1..=6).contains(&roll));
//! ```
//!
//! ## Crate features
//!
//! -   `std` (default): implements `std::error::Error` for [`Error`].
//! -   `log`: traces seeding through the [`log`](https://docs.rs/log) crate.
//!
//! [PCG generators]: https://www.pcg-random.org/
//! [`RngCore`]: rand_core::RngCore
//! [`SeedableRng`]: rand_core::SeedableRng

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico",
    html_root_url = "https://rust-random.github.io/rand/"
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod log_macros;

mod bounded;
mod error;
mod pcg32;
mod pcg32x2;

pub use rand_core;

pub use self::bounded::Bounded;
pub use self::error::Error;
pub use self::pcg32::{Lcg64Xsh32, Pcg32, DEFAULT_STREAM};
pub use self::pcg32x2::Pcg32x2;
