use word_finder::count_matches;
use word_finder::finder::TopN;
use word_finder::WordCount;

fn ranked(capacity: usize, entries: &[(&str, usize)]) -> Vec<(String, usize)> {
    let mut top = TopN::new(capacity);
    for (word, count) in entries {
        top.push(WordCount::new(*word, *count));
    }
    top.into_vec()
        .into_iter()
        .map(|entry| (entry.word, entry.count))
        .collect()
}

fn pairs(expected: &[(&str, usize)]) -> Vec<(String, usize)> {
    expected
        .iter()
        .map(|(word, count)| (word.to_string(), *count))
        .collect()
}

#[test]
fn counting_skips_past_each_match() {
    assert_eq!(count_matches("aa", &["aaaa"]), 2);
    assert_eq!(count_matches("aa", &["aaa"]), 1);
    assert_eq!(count_matches("aba", &["ababa"]), 1);
    assert_eq!(count_matches("ab", &["abab", "xab", "ba"]), 3);
}

#[test]
fn counting_handles_degenerate_input() {
    let none: [&str; 0] = [];
    assert_eq!(count_matches("a", &none), 0);
    assert_eq!(count_matches("", &["abc"]), 0);
    assert_eq!(count_matches("abcd", &["abc"]), 0);
    assert_eq!(count_matches("A", &["aaa"]), 0);
}

#[test]
fn counting_accepts_owned_lines() {
    let lines = vec![String::from("snowsnow"), String::from("nosnow")];
    assert_eq!(count_matches("snow", &lines[..]), 3);
}

#[test]
fn ranking_orders_by_descending_count() {
    let result = ranked(10, &[("c", 1), ("a", 5), ("b", 3)]);
    assert_eq!(result, pairs(&[("a", 5), ("b", 3), ("c", 1)]));
}

#[test]
fn ranking_keeps_push_order_for_ties() {
    let result = ranked(10, &[("x", 2), ("y", 1), ("z", 2), ("w", 1)]);
    assert_eq!(result, pairs(&[("x", 2), ("z", 2), ("y", 1), ("w", 1)]));
}

#[test]
fn ranking_evicts_the_lowest_entry() {
    let result = ranked(2, &[("a", 1), ("b", 2), ("c", 3)]);
    assert_eq!(result, pairs(&[("c", 3), ("b", 2)]));
}

#[test]
fn ranking_rejects_late_ties_at_capacity() {
    let mut top = TopN::new(2);
    assert!(top.push(WordCount::new("a", 4)));
    assert!(top.push(WordCount::new("b", 4)));
    assert!(!top.push(WordCount::new("c", 4)));
    assert!(top.push(WordCount::new("d", 5)));

    assert_eq!(top.len(), 2);
    let words: Vec<String> = top.into_vec().into_iter().map(|entry| entry.word).collect();
    assert_eq!(words, ["d", "a"]);
}

#[test]
fn ranking_matches_stable_sort_and_truncate() {
    let entries = [
        ("p", 3), ("q", 7), ("r", 3), ("s", 1), ("t", 7),
        ("u", 2), ("v", 3), ("w", 9), ("x", 1), ("y", 7),
    ];

    for capacity in 0..=entries.len() + 1 {
        let mut expected = entries.to_vec();
        expected.sort_by(|a, b| b.1.cmp(&a.1));
        expected.truncate(capacity);

        assert_eq!(
            ranked(capacity, &entries),
            pairs(&expected),
            "capacity {}",
            capacity
        );
    }
}

#[test]
fn zero_capacity_accepts_nothing() {
    let mut top = TopN::new(0);
    assert!(!top.push(WordCount::new("a", 1)));
    assert!(top.is_empty());
}
