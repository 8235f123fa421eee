use std::collections::HashSet;

use pox_version::{ParseErrorKind, Version};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn v(s: &str) -> Version {
    Version::parse(s).unwrap_or_else(|e| panic!("{}", e))
}

/// Groups in strictly ascending order; versions within a group are equal.
const ORDERED: &[&[&str]] = &[
    &["0.4", "0.4.0", "   0.4"],
    &["0.4.1.rc", "0.4.1.RC"],
    &["0.4.1"],
    &["0.5*"],
    &["0.5a1"],
    &["0.5b3"],
    &["0.5C1"],
    &["0.5z"],
    &["0.5za"],
    &["0.5"],
    &["0.5_5", "0.5-5", "0.5.5"],
    &["0.9.6"],
    &["0.960923"],
    &["1.0"],
    &["1.0.4a3"],
    &["1.0.4b1"],
    &["1.0.4"],
    &["1.1dev1"],
    &["1.1_"],
    &["1.1a1"],
    &["1.1.dev1"],
    &["1.1.a1"],
    &["1.1", "1.1.0"],
    &["1.1.post1"],
    &["1.1.1dev1"],
    &["1.1.1rc1"],
    &["1.1.1"],
    &["1.1.1post1"],
    &["1.1.1post2"],
    &["2g6"],
    &["2.0b1pr0"],
    &["2.2be.ta29"],
    &["2.2be5ta29"],
    &["2.2beta29"],
    &["2.2.0.1"],
    &["3.1.1.6"],
    &["3.2.p.r0"],
    &["3.2.pre0"],
    &["3.2.pre1"],
    &["3.2"],
    &["4.0"],
    &["1!0.1", "1!0.1.0"],
    &["1!1.0"],
];

#[test]
fn test_total_ordering() {
    init();
    let groups: Vec<Vec<Version>> = ORDERED
        .iter()
        .map(|group| group.iter().map(|s| v(s)).collect())
        .collect();

    for (i, group) in groups.iter().enumerate() {
        for (a_str, a) in ORDERED[i].iter().zip(group) {
            for (b_str, b) in ORDERED[i].iter().zip(group) {
                assert_eq!(a, b, "{} == {}", a_str, b_str);
            }
            for (j, other) in groups.iter().enumerate().skip(i + 1) {
                for (b_str, b) in ORDERED[j].iter().zip(other) {
                    assert!(a < b, "{} < {}", a_str, b_str);
                    assert!(b > a, "{} > {}", b_str, a_str);
                    assert!(a != b, "{} != {}", a_str, b_str);
                }
            }
        }
    }
}

#[test]
fn test_sort() {
    init();
    let mut versions: Vec<Version> = ["1.1", "1.0.4b1", "1!0.1", "0.5a1", "1.1.post1", "1.1dev1"]
        .iter()
        .map(|s| v(s))
        .collect();
    versions.sort();
    let sorted: Vec<String> = versions.iter().map(Version::to_string).collect();
    assert_eq!(sorted, vec!["0.5a1", "1.0.4b1", "1.1dev1", "1.1", "1.1.0post1", "1!0.1"]);
}

#[test]
fn test_render_round_trip() {
    init();
    for group in ORDERED {
        for input in group.iter() {
            let parsed = v(input);
            let rendered = parsed.to_string();
            let reparsed = v(&rendered);
            assert_eq!(reparsed, parsed, "{} rendered as {}", input, rendered);
            assert_eq!(reparsed.to_string(), rendered);
        }
    }
    for input in ["1!2.0+local.3", "1.0-2", "1.0_", "1.*", "7!a.b_c+d.E_"] {
        let parsed = v(input);
        assert_eq!(v(&parsed.to_string()), parsed, "{}", input);
    }
}

#[test]
fn test_hash_agrees_with_equality() {
    init();
    let mut seen = HashSet::new();
    for input in ["1.2", "1.2.0", "1.2.0.0", "0!1.2", "1.2+0", "1.2_0"] {
        seen.insert(v(input));
    }
    assert_eq!(seen.len(), 1);

    seen.insert(v("1.2a"));
    seen.insert(v("1!1.2"));
    seen.insert(v("1.2+1"));
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_prefix_matching() {
    init();
    let cases = [
        ("1.2.3", "1.2", true),
        ("1.2.3", "1", true),
        ("1.2", "1.2", true),
        ("1.2rc1", "1.2", true),
        ("1.2.3+4", "1.2+4", true),
        ("1.20", "1.2", false),
        ("1.2", "1.2.3", false),
        ("1.3", "1.2", false),
        ("1.0+local1", "1.0", false),
        ("1.0", "1.0+local1", false),
    ];
    for (version, prefix, expected) in cases {
        assert_eq!(v(version).starts_with(&v(prefix)), expected, "{} starts with {}", version, prefix);
    }
}

#[test]
fn test_compatible_release() {
    init();
    let cases = [
        ("1.4.5", "1.4.2", 2, true),
        ("1.4.2", "1.4.2", 2, true),
        ("1.9", "1.4.2", 1, true),
        ("2.0.0", "1.4.2", 2, false),
        ("1.4.1", "1.4.2", 2, false),
        ("2.0", "1.4.2", 1, false),
        ("1!1.4.5", "1.4.2", 2, false),
    ];
    for (newer, older, level, expected) in cases {
        assert_eq!(
            v(newer).compatible_with(&v(older), level),
            expected,
            "{} compatible with {} at level {}",
            newer,
            older,
            level
        );
    }
}

#[test]
fn test_invalid_versions() {
    init();
    for input in ["", "!1.0", "1.0+", "1-2_3", "1.$", "1..2", "1.0 2", "a!1"] {
        let err = Version::parse(input).unwrap_err();
        assert!(err.to_string().starts_with("Error parsing version"), "{}", err);
    }
    assert_eq!(*Version::parse("1 0").unwrap_err().kind(), ParseErrorKind::InvalidCharacters {
        version: "1 0".to_string(),
        character: " ".to_string(),
    });
}
