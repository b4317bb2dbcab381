//! String algorithms.
//!
//! The searchers work on `char` sequences, so every reported offset counts
//! characters, not bytes.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`kmp`] | [`KnuthMorrisPratt`] with a cached prefix-function table |
//! | [`rabin_karp`] | [`RabinKarp`] rolling-hash searcher |
//! | [`lcs`] | [`LongestCommonSubsequence`], [`lcs`], [`lcs_length`] |
//! | [`anagrams`] | [`group_anagrams`] |

pub mod anagrams;
pub mod kmp;
pub mod lcs;
pub mod rabin_karp;

pub use anagrams::group_anagrams;
pub use kmp::KnuthMorrisPratt;
pub use lcs::{lcs, lcs_length, LongestCommonSubsequence};
pub use rabin_karp::RabinKarp;
