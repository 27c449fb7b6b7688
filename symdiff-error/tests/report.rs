use symdiff_attrs::ErrorKind;
use symdiff_error::{Error, ErrorKind};

/// A test-only error that points at a single character.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not allowed here", self.found),
    labels = ["this character"],
    help = "remove it",
)]
struct Forbidden {
    found: char,
}

/// A test-only error with no fields and two labels.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "two things went wrong",
    labels = ["first", "second"],
)]
struct Twice;

#[test]
fn message_and_display() {
    let err = Error::new(vec![2..3], Forbidden { found: '#' });
    assert_eq!(err.to_string(), "`#` is not allowed here");
    assert_eq!(err.downcast_ref::<Forbidden>(), Some(&Forbidden { found: '#' }));
    assert!(err.downcast_ref::<Twice>().is_none());
}

#[test]
fn report_highlights_span() {
    let err = Error::new(vec![2..3], Forbidden { found: '#' });
    let report = err.report_to_string("input", "xy#z").unwrap();
    let report = strip_ansi_escapes::strip_str(report);

    assert!(report.contains("`#` is not allowed here"));
    assert!(report.contains("this character"));
    assert!(report.contains("xy#z"));
    assert!(report.contains("remove it"));
}

#[test]
fn report_without_spans() {
    // labels without a matching span are skipped rather than panicking
    let err = Error::new(Vec::new(), Twice);
    let report = err.report_to_string("input", "").unwrap();
    let report = strip_ansi_escapes::strip_str(report);
    assert!(report.contains("two things went wrong"));
}
