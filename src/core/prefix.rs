/// Longest string that is a prefix of every element of `words`.
///
/// An empty element short-circuits to `""`. An empty slice also yields `""`.
pub fn longest_common_prefix<S: AsRef<str>>(words: &[S]) -> String {
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };

    let mut prefix = first.as_ref();
    for word in rest {
        let word = word.as_ref();
        if word.is_empty() {
            return String::new();
        }

        // Byte offset of the first mismatch, or the end of the shorter string.
        let end = prefix
            .char_indices()
            .zip(word.chars())
            .find(|((_, a), b)| a != b)
            .map(|((idx, _), _)| idx)
            .unwrap_or_else(|| prefix.len().min(word.len()));
        prefix = &prefix[..end];

        if prefix.is_empty() {
            break;
        }
    }

    prefix.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_cases() {
        assert_eq!(longest_common_prefix(&["flower", "flow", "flight"]), "fl");
        assert_eq!(longest_common_prefix(&["dog", "racecar", "car"]), "");
        assert_eq!(longest_common_prefix(&["a", ""]), "");
    }

    #[test]
    fn test_single_and_empty_input() {
        assert_eq!(longest_common_prefix(&["alone"]), "alone");
        assert_eq!(longest_common_prefix::<&str>(&[]), "");
    }

    #[test]
    fn test_shorter_word_truncates_candidate() {
        assert_eq!(longest_common_prefix(&["interstellar", "inter"]), "inter");
        assert_eq!(longest_common_prefix(&["inter", "interstellar"]), "inter");
        assert_eq!(longest_common_prefix(&["abc", "abc", "abc"]), "abc");
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(longest_common_prefix(&["naïve", "naïf"]), "naï");
        assert_eq!(longest_common_prefix(&["日本語", "日本"]), "日本");
        assert_eq!(longest_common_prefix(&["é", "e"]), "");
    }

    #[test]
    fn test_result_is_common_and_maximal() {
        let samples: Vec<Vec<&str>> = vec![
            vec!["flower", "flow", "flight"],
            vec!["prefix", "prefixes", "pre"],
            vec!["same", "same"],
            vec!["x", "xy", "xyz", "w"],
            vec!["rust", "rustacean", "rusty", "rustle"],
        ];

        for words in samples {
            let prefix = longest_common_prefix(&words);
            assert!(words.iter().all(|w| w.starts_with(&prefix)), "{:?}", words);

            // One more character of the first word must break the common prefix.
            if let Some(next) = words[0][prefix.len()..].chars().next() {
                let longer = format!("{}{}", prefix, next);
                assert!(!words.iter().all(|w| w.starts_with(&longer)), "{:?}", words);
            }
        }
    }

    #[test]
    fn test_order_does_not_change_result() {
        let forward = longest_common_prefix(&["flight", "flow", "flower"]);
        let backward = longest_common_prefix(&["flower", "flow", "flight"]);
        assert_eq!(forward, backward);
    }
}
