use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_new_report_is_raw() {
    let report = ErrorReport::new(ErrorKind::NameNotDefined, "name 'x' is not defined");
    assert_eq!(report.state(), ReportState::Raw);
    assert!(!report.is_mutated());
    assert_eq!(report.kind(), ErrorKind::NameNotDefined);
}

#[test]
fn test_auxiliary_slots_are_ordered_and_unique() {
    let report = ErrorReport::new(ErrorKind::FileNotFound, "[Errno 2] No such file")
        .with_auxiliary("strerror", "No such file")
        .with_auxiliary("args", "first")
        .with_auxiliary("args", "second");

    let slots: Vec<_> = report.auxiliary_fields().collect();
    assert_eq!(slots, vec![("strerror", "No such file"), ("args", "second")]);
    assert_eq!(report.auxiliary("args"), Some("second"));
    assert_eq!(report.auxiliary("missing"), None);
}

#[test]
fn test_advance_is_forward_only() {
    let mut report = ErrorReport::new(ErrorKind::Overflow, "math range error");

    assert!(report.advance(ReportState::Classified));
    assert!(report.advance(ReportState::Mutated));
    assert!(!report.advance(ReportState::Suggested));
    assert!(!report.advance(ReportState::Mutated));
    assert_eq!(report.state(), ReportState::Mutated);
}

#[test]
fn test_text_facets_cover_every_slot() {
    let mut report =
        ErrorReport::new(ErrorKind::SyntaxProblem, "invalid syntax").with_auxiliary("msg", "x");

    for facet in report.text_facets_mut() {
        facet.push('!');
    }

    assert_eq!(report.primary_message(), "invalid syntax!");
    assert_eq!(report.auxiliary("msg"), Some("x!"));
}
