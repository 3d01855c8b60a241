// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

/// Error type returned from `Bounded::new` and the `try_bounded_rand`
/// methods of the generators.
///
/// See [`Bounded`](crate::Bounded).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `bound == 0`: the range `[0, bound)` contains no values.
    EmptyRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::EmptyRange => "cannot sample from an empty range: bound is zero",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
