/// Rabin-Karp searcher with a polynomial rolling hash.
///
/// Sliding the window right subtracts the leaving character's contribution
/// and mixes in the entering one, so each shift is O(1). Hash hits are
/// confirmed by direct comparison, which keeps collisions harmless.
/// Average O(n + m); degenerate hash parameters can push it to O(n·m).
///
/// ```
/// use algolab_strings::RabinKarp;
///
/// let rk = RabinKarp::new();
/// assert_eq!(rk.search("hello world", "world"), Some(6));
/// assert_eq!(rk.search_all("aaaa", "aa"), vec![0, 1, 2]);
/// assert_eq!(rk.search("abc", "zzz"), None);
/// ```
pub struct RabinKarp {
    base: u64,
    modulus: u64,
}

impl Default for RabinKarp {
    fn default() -> Self {
        Self::new()
    }
}

impl RabinKarp {
    pub fn new() -> Self {
        Self::with_params(256, 1_000_000_007)
    }

    /// Custom hash base (usually the alphabet size) and modulus.
    pub fn with_params(base: u64, modulus: u64) -> Self {
        Self { base, modulus }
    }

    /// Offset (in chars) of the first occurrence of `pattern` in `text`.
    /// Empty text or pattern never matches.
    pub fn search(&self, text: &str, pattern: &str) -> Option<usize> {
        self.search_all(text, pattern).into_iter().next()
    }

    /// Offsets (in chars) of every occurrence, overlaps included.
    pub fn search_all(&self, text: &str, pattern: &str) -> Vec<usize> {
        let t: Vec<char> = text.chars().collect();
        let p: Vec<char> = pattern.chars().collect();
        let n = t.len();
        let m = p.len();

        if m == 0 || n == 0 || m > n {
            return Vec::new();
        }

        // base^(m-1) % modulus, the weight of the character leaving the window.
        let high_weight = self.pow_mod(self.base, (m - 1) as u64);
        let pattern_hash = self.hash(&p);
        let mut window_hash = self.hash(&t[..m]);

        let mut matches = Vec::new();
        if window_hash == pattern_hash && t[..m] == p[..] {
            matches.push(0);
        }

        for i in 1..=n - m {
            window_hash = self.roll(window_hash, t[i - 1], t[i + m - 1], high_weight);
            if window_hash == pattern_hash && t[i..i + m] == p[..] {
                matches.push(i);
            }
        }

        matches
    }

    // Intermediates widen to u128 so arbitrary caller-chosen moduli cannot
    // overflow.

    fn hash(&self, chars: &[char]) -> u64 {
        let m = self.modulus as u128;
        chars
            .iter()
            .fold(0u128, |h, &c| (h * self.base as u128 + c as u128) % m) as u64
    }

    fn roll(&self, hash: u64, leaving: char, entering: char, high_weight: u64) -> u64 {
        let m = self.modulus as u128;
        // Add a multiple of the modulus before subtracting so the value
        // stays non-negative.
        let without_left =
            (hash as u128 + m * m - (leaving as u128 % m) * (high_weight as u128) % m) % m;
        ((without_left * self.base as u128 + entering as u128) % m) as u64
    }

    fn pow_mod(&self, base: u64, mut exp: u64) -> u64 {
        let m = self.modulus as u128;
        let mut result = 1u128;
        let mut base = base as u128 % m;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base % m;
            }
            base = base * base % m;
            exp >>= 1;
        }
        result as u64
    }
}
