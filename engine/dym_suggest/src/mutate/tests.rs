use super::*;
use dym_ir::ErrorKind;
use pretty_assertions::assert_eq;

const SUFFIX: &str = ". Did you mean 'babar' (local)?";

fn report() -> ErrorReport {
    ErrorReport::new(ErrorKind::NameNotDefined, "name 'baba' is not defined")
        .with_auxiliary("args", "name 'baba' is not defined")
}

#[test]
fn test_apply_appends_to_every_facet() {
    let mut report = report();
    assert!(apply_suggestion(&mut report, SUFFIX));

    assert_eq!(
        report.primary_message(),
        "name 'baba' is not defined. Did you mean 'babar' (local)?"
    );
    assert_eq!(
        report.auxiliary("args"),
        Some("name 'baba' is not defined. Did you mean 'babar' (local)?")
    );
    assert_eq!(report.state(), ReportState::Mutated);
    assert_eq!(report.kind(), ErrorKind::NameNotDefined);
}

#[test]
fn test_apply_empty_suffix_is_noop() {
    let mut report = report();
    assert!(!apply_suggestion(&mut report, ""));
    assert_eq!(report, self::report());
}

#[test]
fn test_apply_twice_is_noop() {
    let mut report = report();
    apply_suggestion(&mut report, SUFFIX);
    let once = report.clone();

    assert!(!apply_suggestion(&mut report, SUFFIX));
    assert_eq!(report, once);
}

#[test]
fn test_strip_restores_original() {
    let mut report = report();
    let original = report.primary_message().to_owned();
    apply_suggestion(&mut report, SUFFIX);
    assert_eq!(strip_suggestion(report.primary_message(), SUFFIX), original);
}

#[test]
fn test_strip_first_occurrence_when_not_trailing() {
    let text = format!("name 'baba' is not defined{SUFFIX} (line 3)");
    assert_eq!(
        strip_suggestion(&text, SUFFIX),
        "name 'baba' is not defined (line 3)"
    );
}

#[test]
fn test_strip_without_suffix() {
    assert_eq!(strip_suggestion("plain", SUFFIX), "plain");
    assert_eq!(strip_suggestion("plain", ""), "plain");
}
