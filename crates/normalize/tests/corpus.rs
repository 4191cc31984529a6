use normalize::normalize;

struct Case {
    name: &'static str,
    input: &'static [u8],
    expected_words: &'static [(&'static str, usize)],
}

#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            name: "plain_ascii",
            input: b"Permission is hereby granted",
            expected_words: &[
                ("permission", 0),
                ("is", 11),
                ("hereby", 14),
                ("granted", 21),
            ],
        },
        Case {
            name: "copyright_line_with_year",
            input: b"Copyright (c) 1995-2017 Jean-loup Gailly",
            expected_words: &[
                ("copyright", 0),
                ("c", 11),
                ("jean", 24),
                ("loup", 29),
                ("gailly", 34),
            ],
        },
        Case {
            name: "numerals_inside_identifiers",
            input: b"Apache License Version 2.0, January 2004",
            expected_words: &[
                ("apache", 0),
                ("license", 7),
                ("version", 15),
                ("january", 28),
            ],
        },
        Case {
            name: "url_breaks_into_words",
            input: b"https://opensource.org/licenses/MIT",
            expected_words: &[
                ("https", 0),
                ("opensource", 8),
                ("org", 19),
                ("licenses", 23),
                ("mit", 32),
            ],
        },
        Case {
            name: "multibyte_utf8_separates",
            // "café" in UTF-8; the accent bytes split the letter run.
            input: "caf\u{00E9} au lait".as_bytes(),
            expected_words: &[("caf", 0), ("au", 6), ("lait", 9)],
        },
        Case {
            name: "invalid_utf8_separates",
            input: b"as\xFFis\xFE basis",
            expected_words: &[("as", 0), ("is", 3), ("basis", 7)],
        },
        Case {
            name: "empty",
            input: b"",
            expected_words: &[],
        },
        Case {
            name: "numerals_and_punctuation_only",
            input: b"2024-01-01 :: 42",
            expected_words: &[],
        },
    ];

    for case in cases {
        let doc = normalize(case.input);
        let words: Vec<(&str, usize)> = doc
            .words
            .iter()
            .map(|w| (w.text.as_str(), w.start))
            .collect();
        assert_eq!(words, case.expected_words, "words mismatch for {}", case.name);

        // Document invariants hold for every case.
        for pair in doc.words.windows(2) {
            assert!(
                pair[0].end() <= pair[1].start,
                "overlapping words in {}",
                case.name
            );
        }
        for w in &doc.words {
            assert!(
                w.text.bytes().all(|b| b.is_ascii_lowercase()),
                "non-normalized word {:?} in {}",
                w.text,
                case.name
            );
        }
    }
}
