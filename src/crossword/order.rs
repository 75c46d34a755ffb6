use std::collections::HashSet;

/// Number of distinct letters two words have in common
pub fn shared_letters(a: &str, b: &str) -> usize {
    let a = a.chars().collect::<HashSet<_>>();
    let b = b.chars().collect::<HashSet<_>>();
    a.intersection(&b).count()
}

/// Orders words so the ones sharing the most letters with the rest come first, which
/// gives the search more chances to cross early. Equal scores keep their input order
pub fn by_shared_letters<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut scored = words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let overlap = words
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, other)| shared_letters(w.as_ref(), other.as_ref()))
                .sum::<usize>();
            (overlap, w.as_ref().to_string())
        })
        .collect::<Vec<_>>();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, w)| w).collect()
}

#[cfg(test)]
mod tests {
    use super::{by_shared_letters, shared_letters};

    #[test]
    fn test_shared_letters() {
        assert_eq!(shared_letters("abba", "lana"), 1);
        assert_eq!(shared_letters("tate", "neyo"), 1);
        assert_eq!(shared_letters("jimi", "zedd"), 0);
        assert_eq!(shared_letters("cat", "act"), 3);
    }

    #[test]
    fn test_order() {
        // cat and tar share two letters, dog and god share three
        let ordered = by_shared_letters(&["cat", "dog", "tar", "god"]);
        assert_eq!(ordered, vec!["dog", "god", "cat", "tar"]);
    }

    #[test]
    fn test_order_is_stable() {
        let ordered = by_shared_letters(&["ab", "cd", "ef"]);
        assert_eq!(ordered, vec!["ab", "cd", "ef"]);
    }
}
