use mizan_core::condition::{Comparator, Condition};

#[test]
fn comparator_prefixes_parse() {
    assert_eq!(
        Condition::parse(">=2"),
        Condition::Compare {
            op: Comparator::Gte,
            threshold: 2
        }
    );
    assert_eq!(
        Condition::parse(">1"),
        Condition::Compare {
            op: Comparator::Gt,
            threshold: 1
        }
    );
    assert_eq!(
        Condition::parse("<=3"),
        Condition::Compare {
            op: Comparator::Lte,
            threshold: 3
        }
    );
    assert_eq!(
        Condition::parse("<4"),
        Condition::Compare {
            op: Comparator::Lt,
            threshold: 4
        }
    );
    assert_eq!(
        Condition::parse("==0"),
        Condition::Compare {
            op: Comparator::Eq,
            threshold: 0
        }
    );
}

#[test]
fn bare_string_is_exact_match() {
    assert_eq!(Condition::parse("yes"), Condition::Exact("yes".to_string()));
    assert_eq!(
        Condition::parse("changed"),
        Condition::Exact("changed".to_string())
    );
}

#[test]
fn unknown_operator_or_threshold_is_invalid() {
    assert!(!Condition::parse("=>2").is_valid());
    assert!(!Condition::parse(">>2").is_valid());
    assert!(!Condition::parse("=2").is_valid());
    assert!(!Condition::parse(">=").is_valid());
    assert!(!Condition::parse(">=often").is_valid());
}

#[test]
fn threshold_reads_leading_integer() {
    assert_eq!(
        Condition::parse(">= 2 points"),
        Condition::Compare {
            op: Comparator::Gte,
            threshold: 2
        }
    );
}

#[test]
fn invalid_conditions_never_match() {
    let condition = Condition::parse("!=2");
    for intensity in [0.0, 1.0, 2.0, 3.0, 4.0] {
        assert!(!condition.matches_intensity(intensity));
    }
}

#[test]
fn exact_conditions_are_not_numeric() {
    assert!(!Condition::parse("4").matches_intensity(4.0));
}

#[test]
fn comparisons_evaluate_against_intensity() {
    let gte = Condition::parse(">=2");
    assert!(!gte.matches_intensity(1.0));
    assert!(gte.matches_intensity(2.0));
    assert!(gte.matches_intensity(3.0));

    let lt = Condition::parse("<2");
    assert!(lt.matches_intensity(0.0));
    assert!(!lt.matches_intensity(2.0));
}

#[test]
fn deserializes_from_content_string() {
    let condition: Condition = serde_json::from_str("\">=2\"").unwrap();
    assert_eq!(
        condition,
        Condition::Compare {
            op: Comparator::Gte,
            threshold: 2
        }
    );
    assert_eq!(serde_json::to_string(&condition).unwrap(), "\">=2\"");
}
