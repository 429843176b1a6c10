//! Integration tests for longest-match phrase search.

use phrasefind::analysis::tokenizer::regex::RegexTokenizer;
use phrasefind::dictionary::TrieNode;
use phrasefind::error::Result;
use phrasefind::prelude::*;

fn triples(matches: Vec<Match>) -> Vec<(usize, usize, String)> {
    matches.into_iter().map(Into::into).collect()
}

fn species() -> PhraseDictionary {
    PhraseDictionary::from_entries(vec![
        ("p1", vec!["guinea pigs", "Pichia pastoris"]),
        ("p2", vec!["pig"]),
    ])
    .unwrap()
}

#[test]
fn test_three_word_phrase_beats_two_word_alternatives() -> Result<()> {
    let dictionary = PhraseDictionary::from_entries(vec![
        ("p1", vec!["how are"]),
        ("p2", vec!["you doing", "are you"]),
        ("p3", vec!["how are you"]),
    ])?;

    let matches = find_matches(
        "how   are  you doing?",
        &dictionary,
        DEFAULT_WORD_PATTERN,
        false,
    )?;
    assert_eq!(triples(matches), vec![(0, 14, "p3".to_string())]);

    Ok(())
}

#[test]
fn test_plural_token_does_not_match_singular_phrase() -> Result<()> {
    let matches = find_matches(
        "I  hate    guinea pigs. I do",
        &species(),
        DEFAULT_WORD_PATTERN,
        false,
    )?;
    assert_eq!(triples(matches), vec![(11, 22, "p1".to_string())]);

    Ok(())
}

#[test]
fn test_matching_is_case_sensitive() -> Result<()> {
    let dictionary = species();

    let matches = find_matches("Pichia pastoris .", &dictionary, DEFAULT_WORD_PATTERN, false)?;
    assert_eq!(triples(matches), vec![(0, 15, "p1".to_string())]);

    let matches = find_matches("pichia pastoris .", &dictionary, DEFAULT_WORD_PATTERN, false)?;
    assert!(matches.is_empty());

    Ok(())
}

#[test]
fn test_apostrophe_is_a_word_character() -> Result<()> {
    let dictionary = PhraseDictionary::from_entries(vec![("p1", vec!["alzheimer's disease"])])?;

    let matches = find_matches("alzheimer's disease", &dictionary, DEFAULT_WORD_PATTERN, false)?;
    assert_eq!(triples(matches), vec![(0, 19, "p1".to_string())]);

    Ok(())
}

#[test]
fn test_word_pattern_decides_punctuation_handling() -> Result<()> {
    let dictionary = PhraseDictionary::from_entries(vec![("p1", vec!["alzheimer's disease"])])?;
    let text = "(alzheimer's disease)";

    let matches = find_matches(text, &dictionary, r"[\w'\-]+", false)?;
    assert_eq!(triples(matches), vec![(1, 20, "p1".to_string())]);

    let matches = find_matches(text, &dictionary, r"[\w'()\-]+", false)?;
    assert!(matches.is_empty());

    Ok(())
}

#[test]
fn test_duplicate_phrases_abort_the_build() {
    let result = PhraseDictionary::from_entries(vec![
        ("id1", vec!["same phrase"]),
        ("id2", vec!["same phrase"]),
    ]);
    assert!(matches!(result, Err(PhraseFindError::DuplicatePhrase { .. })));
}

#[test]
fn test_longest_match_preference() -> Result<()> {
    let dictionary =
        PhraseDictionary::from_entries(vec![("X", vec!["a b"]), ("Y", vec!["a b c"])])?;
    let matches = find_matches("a b c", &dictionary, DEFAULT_WORD_PATTERN, false)?;
    assert_eq!(triples(matches), vec![(0, 5, "Y".to_string())]);

    Ok(())
}

#[test]
fn test_matches_never_overlap_or_touch() -> Result<()> {
    let words = ["a", "b", "c", "d"];
    let mut entries = Vec::new();
    // Every run of 1 to 3 consecutive letters is a phrase.
    for len in 1..=3 {
        for start in 0..=words.len() - len {
            let phrase = words[start..start + len].join(" ");
            entries.push((phrase.replace(' ', "_"), vec![phrase]));
        }
    }
    let dictionary = PhraseDictionary::from_entries(entries)?;
    let tokenizer = RegexTokenizer::new()?;
    let matcher = PhraseMatcher::new(&dictionary, tokenizer.clone());

    for text in ["a b c d a b", "d c b a", "a a a a", "b c d c b a b c d", "ab c, d."] {
        let matches = matcher.find(text);
        for pair in matches.windows(2) {
            assert!(pair[0].start < pair[1].start, "unordered in {text:?}");
            assert!(pair[0].end < pair[1].start, "overlap in {text:?}");
        }
        for m in &matches {
            // Every match covers whole tokens.
            let covered: Vec<_> = tokenizer
                .words(text)
                .filter(|t| t.start_offset >= m.start && t.end_offset <= m.end)
                .collect();
            assert_eq!(covered.first().map(|t| t.start_offset), Some(m.start));
            assert_eq!(covered.last().map(|t| t.end_offset), Some(m.end));
        }
    }

    Ok(())
}

#[test]
fn test_tokenizer_spans_round_trip() -> Result<()> {
    let text = "The BRCA1-associated (RING) domain, in\tHER2+ cells.";
    for lowercase in [false, true] {
        let tokenizer = RegexTokenizer::new()?.lowercase(lowercase);
        for token in tokenizer.words(text) {
            let span = &text[token.start_offset..token.end_offset];
            if lowercase {
                assert_eq!(span.to_lowercase(), token.text);
            } else {
                assert_eq!(span, token.text);
            }
        }
    }

    Ok(())
}

#[test]
fn test_matcher_is_shareable_across_threads() -> Result<()> {
    let dictionary = species();
    let matcher = PhraseMatcher::with_config(&dictionary, &MatchConfig::default())?;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| matcher.find("guinea pigs and a pig")))
            .collect();
        for handle in handles {
            let matches = handle.join().unwrap();
            assert_eq!(
                matches,
                vec![Match::new(0, 11, "p1"), Match::new(18, 21, "p2")]
            );
        }
    });

    Ok(())
}

#[test]
fn test_single_word_phrase_is_depth_one() -> Result<()> {
    let dictionary = PhraseDictionary::from_entries(vec![("G1", vec!["TP53"])])?;
    let root: &TrieNode = dictionary.root();
    assert_eq!(root.max_depth(), 1);

    let matches = find_matches("TP53 TP53", &dictionary, DEFAULT_WORD_PATTERN, false)?;
    assert_eq!(matches, vec![Match::new(0, 4, "G1"), Match::new(5, 9, "G1")]);

    Ok(())
}
