// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints some 64-bit values, coin tosses, dice rolls and a shuffled deck.
//!
//! Usage: `cargo run --example pcg32x2_demo -- [-r] [ROUNDS]`
//!
//! Without `-r` the generator is seeded with `(42, 42)` and the output is
//! the same on every run. With `-r` it is seeded from the system clock; this
//! is only an illustration and no substitute for an OS entropy source.

use std::time::{SystemTime, UNIX_EPOCH};

use rand_pcg32x2::rand_core::RngCore;
use rand_pcg32x2::Pcg32x2;

const SUITS: usize = 4;
const CARDS: usize = 52;
const NUMBERS: [char; 13] = ['A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K'];
const SUIT_NAMES: [char; SUITS] = ['h', 'c', 'd', 's'];

fn main() {
    let mut args = std::env::args().skip(1).peekable();
    let nondeterministic = args.next_if(|a| a == "-r").is_some();
    let rounds: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(5);

    let mut rng = if nondeterministic {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Pcg32x2::new(now, !now.rotate_left(32))
    } else {
        Pcg32x2::new(42, 42)
    };

    println!("pcg32x2:");
    println!("      -  result:      64-bit unsigned int (u64)");
    println!("      -  period:      2^64   (* ~2^126 streams)");
    println!("      -  state space: ~2^254");
    println!("      -  state type:  Pcg32x2 ({} bytes)", std::mem::size_of::<Pcg32x2>());
    println!("      -  output func: XSH-RR (x 2)");
    println!();

    for round in 1..=rounds {
        println!("Round {}:", round);

        print!("  64bit:");
        for i in 0..6 {
            if i > 0 && i % 3 == 0 {
                print!("\n\t");
            }
            print!(" {:#018x}", rng.next_u64());
        }
        println!();

        let coins: String = (0..65)
            .map(|_| if rng.bounded_rand(2) == 1 { 'H' } else { 'T' })
            .collect();
        println!("  Coins: {}", coins);

        print!("  Rolls:");
        for _ in 0..33 {
            print!(" {}", rng.bounded_rand(6) + 1);
        }
        println!();

        let mut cards = [0usize; CARDS];
        for (i, c) in cards.iter_mut().enumerate() {
            *c = i;
        }
        for i in (2..=CARDS).rev() {
            let chosen = rng.bounded_rand(i as u64) as usize;
            cards.swap(chosen, i - 1);
        }

        print!("  Cards:");
        for (i, &card) in cards.iter().enumerate() {
            print!(" {}{}", NUMBERS[card / SUITS], SUIT_NAMES[card % SUITS]);
            if (i + 1) % 22 == 0 {
                print!("\n\t");
            }
        }
        println!();
        println!();
    }
}
