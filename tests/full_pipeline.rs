//! End-to-end scenarios against the built-in corpus: the classic shapes of
//! real LICENSE files. A verbatim template, a filled-in template, a URL
//! reference, and a concatenation of two licenses.

use licensecover::{builtin_licenses, cover, LicenseKind, Options};

fn template(name: &str) -> String {
    builtin_licenses()
        .into_iter()
        .find(|l| l.name == name && !l.text.is_empty())
        .unwrap_or_else(|| panic!("no built-in template named {name}"))
        .text
}

#[test]
fn verbatim_mit_template() {
    let mit = template("MIT");
    let coverage = cover(mit.as_bytes(), Options::default()).expect("MIT must match");

    assert_eq!(coverage.percent, 100.0);
    assert_eq!(coverage.matches.len(), 1);
    let m = &coverage.matches[0];
    assert_eq!(m.name, "MIT");
    assert_eq!(m.kind, LicenseKind::Mit);
    assert_eq!(m.percent, 100.0);
    assert!(!m.is_url);
}

#[test]
fn filled_in_mit_template() {
    let filled = template("MIT")
        .replace("<year>", "2024")
        .replace("<copyright holders>", "Alice");

    let coverage = cover(filled.as_bytes(), Options::default()).expect("filled MIT must match");

    assert_eq!(coverage.matches.len(), 1);
    let m = &coverage.matches[0];
    assert_eq!(m.name, "MIT");
    assert!(m.percent >= 95.0, "percent was {}", m.percent);
    // Substantially all of the input is explained.
    assert!(coverage.percent >= 95.0);
}

#[test]
fn url_reference_alone() {
    let input = b"See https://opensource.org/licenses/MIT for terms.";
    let coverage = cover(input, Options::default()).expect("URL must match");

    assert_eq!(coverage.percent, 100.0);
    assert_eq!(coverage.matches.len(), 1);
    let m = &coverage.matches[0];
    assert_eq!(m.name, "MIT");
    assert!(m.is_url);
    assert_eq!(m.percent, 100.0);
    assert_eq!(
        &input[m.start..m.end],
        b"https://opensource.org/licenses/MIT"
    );
}

#[test]
fn concatenated_mit_and_apache() {
    let input = format!("{}\n\n{}", template("MIT"), template("Apache-2.0"));
    let coverage = cover(input.as_bytes(), Options::default()).expect("both must match");

    let names: Vec<&str> = coverage.matches.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["MIT", "Apache-2.0"]);
    for m in &coverage.matches {
        assert_eq!(m.percent, 100.0);
    }
    assert_eq!(coverage.percent, 100.0);
}

#[test]
fn reported_matches_satisfy_the_public_invariants() {
    let inputs: Vec<Vec<u8>> = vec![
        template("MIT").into_bytes(),
        template("BSD-3-Clause").into_bytes(),
        format!("{}\n\n{}", template("Zlib"), template("ISC")).into_bytes(),
        b"Licensed under https://creativecommons.org/licenses/by/4.0/legalcode only.".to_vec(),
        format!(
            "{} plus https://www.gnu.org/licenses/gpl-3.0.html as an alternative",
            template("Unlicense")
        )
        .into_bytes(),
    ];

    for input in &inputs {
        let coverage = cover(input, Options::default())
            .unwrap_or_else(|| panic!("input of {} bytes must match", input.len()));

        assert!(coverage.percent > 0.0 && coverage.percent <= 100.0);
        assert!(!coverage.matches.is_empty());

        for m in &coverage.matches {
            // Byte offsets stay within the input.
            assert!(m.start <= m.end && m.end <= input.len());
            assert!(m.percent > 0.0 && m.percent <= 100.0);
        }
        // Sorted and strictly disjoint.
        for pair in coverage.matches.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }
}

#[test]
fn bsd_variants_disambiguate() {
    // BSD-2-Clause is a prefix of BSD-3-Clause; each input must report its
    // own variant, not the sibling.
    for name in ["BSD-2-Clause", "BSD-3-Clause"] {
        let coverage = cover(template(name).as_bytes(), Options::default())
            .unwrap_or_else(|| panic!("{name} must match"));
        assert_eq!(coverage.matches.len(), 1, "{name} match count");
        assert_eq!(coverage.matches[0].name, name);
        assert_eq!(coverage.matches[0].kind, LicenseKind::Bsd);
        assert_eq!(coverage.matches[0].percent, 100.0);
    }
}
