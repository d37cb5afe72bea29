//! Properties of the total order over `Version`s.

use loose_versions::{Error, Version};
use std::cmp::Ordering;

const SAMPLES: [&str; 24] = [
    "0.3.0b",
    "1",
    "1.0",
    "1.0.0",
    "v1.0.0",
    "1.0.0-1",
    "1.0.0-2",
    "1.0.0-10",
    "1.0.0-alpha",
    "1.0.0alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.01",
    "1.0.0-beta",
    "1.0.0-rc.1",
    "1.0.0-rc1",
    "1.0.1b",
    "1.0.10-alpha.beta",
    "1.1.0-alpha",
    "1.2.0-alpha.1",
    "1.2.0",
    "1.2.42",
    "2.0.0b1",
    "2.0.0",
    "42.3.1",
];

fn samples() -> Vec<Version> {
    SAMPLES.iter().map(|s| Version::new(s).unwrap()).collect()
}

#[test]
fn trichotomy() {
    let vs = samples();

    for a in &vs {
        for b in &vs {
            let holds = [a < b, a == b, b < a].iter().filter(|x| **x).count();
            assert_eq!(1, holds, "{} vs {}", a, b);
            assert_eq!(a == b, a.cmp(b) == Ordering::Equal, "{} vs {}", a, b);
            assert_eq!(a.cmp(b), b.cmp(a).reverse(), "{} vs {}", a, b);
        }
    }
}

#[test]
fn transitivity() {
    let vs = samples();

    for a in &vs {
        for b in &vs {
            for c in &vs {
                if a < b && b < c {
                    assert!(a < c, "{} < {} < {}", a, b, c);
                }
                if a.cmp_precedence(b).is_le() && b.cmp_precedence(c).is_le() {
                    assert!(a.cmp_precedence(c).is_le(), "{} <= {} <= {}", a, b, c);
                }
            }
        }
    }
}

#[test]
fn default_padding() {
    let a = Version::new("1").unwrap();
    let b = Version::new("1.0").unwrap();
    let c = Version::new("1.0.0").unwrap();

    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a, c);
    assert!(Version::new("1").unwrap() < Version::new("1.1").unwrap());
}

#[test]
fn release_beats_pre_release() {
    for tail in ["alpha", "1", "rc.1", "x-y", "b1", "0"] {
        for core in ["0.0.0", "1.2.3", "10.0.4"] {
            let pre = Version::new(format!("{core}-{tail}")).unwrap();
            let rel = Version::new(core).unwrap();

            assert!(pre < rel, "{} < {}", pre, rel);
        }
    }
}

#[test]
fn end_to_end_cases() {
    let cases = [
        ("1.0.0", "2.0.0"),
        ("1.0.0", "1.42.0"),
        ("1.2.0", "1.2.42"),
        ("1.1.0-alpha", "1.2.0-alpha.1"),
        ("1.0.1b", "1.0.10-alpha.beta"),
        ("1.0.0-rc.1", "1.0.0"),
    ];

    for (l, r) in cases {
        let left = Version::new(l).unwrap();
        let right = Version::new(r).unwrap();

        assert!(left < right, "{} < {}", l, r);
        assert!(right > left, "{} > {}", r, l);
        assert_ne!(right, left);
    }
}

#[test]
fn examples() {
    let v = |s: &str| Version::new(s).unwrap();

    assert!(v("1.1.3") < v("2.2.3"));
    assert!(v("1.3.0") > v("0.3.0"));
    assert!(v("0.3.0b") < v("1.2.42"));
    assert!(v("1.3.42") != v("42.3.1"));
    assert!(v("1.0.0-1") < v("1.0.0-alpha"));
    assert!(v("1.0.0-2") < v("1.0.0-10"));
    assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
    assert!(v("1.0.0alpha") < v("1.0.0-beta"));
    assert!(v("1.0.0-alpha") == v("1.0.0-alpha"));
    assert!(v("1.0.0-rc.1") != v("1.0.0"));
    assert!(v("2.0.0") >= v("2.0") && v("2.0") <= v("2"));
}

#[test]
fn invalid() {
    assert_eq!(
        Err(Error::InvalidVersionFormat("abc.def.ghi".to_string())),
        Version::new("abc.def.ghi")
    );
    assert!("1.x".parse::<Version>().is_err());
    assert!(Version::try_from("1.2.3-4").is_ok());
}
