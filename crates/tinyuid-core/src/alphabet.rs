use rand::seq::SliceRandom;
use std::sync::LazyLock;

/// Number of characters in the dictionary: 10 digits, 26 lowercase and
/// 26 uppercase letters.
pub const ALPHABET_LEN: usize = 62;

// Built once per process: the three ASCII ranges laid out in order, then
// uniformly shuffled so the encoding carries no positional bias. Read-only
// after initialization, shared by every generator instance.
static ALPHABET: LazyLock<[char; ALPHABET_LEN]> = LazyLock::new(|| {
    let mut chars = ['\0'; ALPHABET_LEN];
    let mut i = 0;
    for (start, end) in [('0', '9'), ('a', 'z'), ('A', 'Z')] {
        for c in start..=end {
            chars[i] = c;
            i += 1;
        }
    }
    debug_assert_eq!(i, ALPHABET_LEN);
    chars.shuffle(&mut rand::rng());
    chars
});

/// Borrows the shared dictionary.
///
/// This is the zero-copy accessor the encoders use; the returned slice is
/// immutable for the life of the process.
pub fn chars() -> &'static [char; ALPHABET_LEN] {
    &ALPHABET
}

/// Returns an owned copy of the dictionary.
///
/// The copy is independent of the shared dictionary: mutating it has no
/// effect on other copies or on ids generated later.
pub fn dict() -> Vec<char> {
    ALPHABET.to_vec()
}

/// Returns the number of characters in the dictionary.
pub fn len() -> usize {
    ALPHABET_LEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dictionary_has_62_unique_characters() {
        let dict = dict();
        assert_eq!(dict.len(), ALPHABET_LEN);
        let unique: HashSet<char> = dict.iter().copied().collect();
        assert_eq!(unique.len(), ALPHABET_LEN);
    }

    #[test]
    fn dictionary_covers_all_three_ranges() {
        let dict = dict();
        assert!(dict.iter().any(|c| c.is_ascii_digit()));
        assert!(dict.iter().any(|c| c.is_ascii_lowercase()));
        assert!(dict.iter().any(|c| c.is_ascii_uppercase()));
        assert!(dict.iter().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn dict_returns_independent_copies() {
        let mut first = dict();
        let second = dict();
        assert_eq!(first, second);

        first[0] = '!';

        // The shared dictionary is unaffected by mutating a copy.
        assert_eq!(second, dict());
        assert_ne!(first, dict());
    }

    #[test]
    fn len_matches_dict() {
        assert_eq!(len(), dict().len());
        assert_eq!(len(), chars().len());
    }
}
