/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Random number generation used by cameras and diffraction models.

pub use ::rand::{Rng, SeedableRng};

/// The random number generator used through the crate
pub type RandGen = ::rand::rngs::SmallRng;

/// Gets a generator seeded from the operating system
pub fn get_rng() -> RandGen {
    RandGen::from_entropy()
}

/// Gets a generator with a fixed seed, so that results are reproducible
pub fn get_seeded_rng(seed: u64) -> RandGen {
    RandGen::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Float;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = get_seeded_rng(42);
        let mut b = get_seeded_rng(42);
        for _ in 0..10 {
            let x: Float = a.gen();
            let y: Float = b.gen();
            assert_eq!(x, y);
        }
    }
}
