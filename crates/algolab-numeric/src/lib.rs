//! Small number and array puzzles.
//!
//! Each module is one self-contained exercise:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`palindrome`] | digit-reversal palindrome test |
//! | [`primes`] | sieve of Eratosthenes prime counting |
//! | [`even_sum`] | maximum even sum of an array |
//! | [`two_sum`] | index pair summing to a target |

pub mod even_sum;
pub mod palindrome;
pub mod primes;
pub mod two_sum;

pub use even_sum::max_even_sum;
pub use palindrome::is_palindrome;
pub use primes::count_primes;
pub use two_sum::two_sum;
