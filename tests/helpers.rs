//! Helper-registry behaviors live in their own integration binary: the
//! registry is process-wide, and a separate binary is a separate process.

use std::error::Error as StdError;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use errlink::{Link, Tag, has_type, lookup_tag, register_helper, wrap};

#[derive(Debug)]
struct Eof;

impl fmt::Display for Eof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EOF")
    }
}

impl StdError for Eof {}

#[derive(Debug)]
struct Timeout;

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("timed out")
    }
}

impl StdError for Timeout {}

static EOF_RUNS: AtomicUsize = AtomicUsize::new(0);
static TIMEOUT_FIRST_RUNS: AtomicUsize = AtomicUsize::new(0);
static TIMEOUT_SECOND_RUNS: AtomicUsize = AtomicUsize::new(0);

fn classify_eof(link: &mut Link, raw: &(dyn StdError + 'static)) -> bool {
    if raw.downcast_ref::<Eof>().is_none() {
        return true;
    }
    EOF_RUNS.fetch_add(1, Ordering::SeqCst);
    link.add_type("Test")
        .add_tags([Tag::new("test", "tag")])
        .add_tag("foo", "bar");
    false
}

fn classify_timeout(link: &mut Link, raw: &(dyn StdError + 'static)) -> bool {
    if raw.downcast_ref::<Timeout>().is_none() {
        return true;
    }
    TIMEOUT_FIRST_RUNS.fetch_add(1, Ordering::SeqCst);
    link.add_type("Timeout");
    false
}

fn count_timeout(_link: &mut Link, raw: &(dyn StdError + 'static)) -> bool {
    if raw.downcast_ref::<Timeout>().is_some() {
        TIMEOUT_SECOND_RUNS.fetch_add(1, Ordering::SeqCst);
    }
    true
}

#[test]
fn helpers_classify_the_raw_failure_once() {
    register_helper(classify_eof);
    register_helper(classify_eof); // duplicate, ignored

    let err = wrap(Eof, "prefix");
    assert!(has_type(&err, "Test"));
    assert_eq!(
        lookup_tag(&err, "foo").and_then(|v| v.as_str()),
        Some("bar")
    );
    assert_eq!(EOF_RUNS.load(Ordering::SeqCst), 1);

    // classification attaches to the first link, not the context link
    assert_eq!(err.links()[0].types().len(), 1);
    assert!(err.current().types().is_empty());

    // propagating does not reclassify
    let err = wrap(err, "prefix2");
    assert_eq!(EOF_RUNS.load(Ordering::SeqCst), 1);

    let test_labels = err
        .links()
        .iter()
        .flat_map(|link| link.types())
        .filter(|name| *name == "Test")
        .count();
    assert_eq!(test_labels, 1, "duplicate registration must not double-classify");
}

#[test]
fn returning_false_stops_the_pipeline() {
    register_helper(classify_timeout);
    register_helper(count_timeout);

    let err = wrap(Timeout, "ctx");
    assert!(has_type(&err, "Timeout"));
    assert_eq!(TIMEOUT_FIRST_RUNS.load(Ordering::SeqCst), 1);
    assert_eq!(
        TIMEOUT_SECOND_RUNS.load(Ordering::SeqCst),
        0,
        "helper after a false return must not run"
    );
}

#[test]
fn unrecognized_failures_stay_unclassified() {
    register_helper(classify_eof);
    register_helper(classify_timeout);

    let err = wrap(std::io::Error::other("boom"), "ctx");
    assert!(!has_type(&err, "Test"));
    assert!(!has_type(&err, "Timeout"));
    assert!(err.links()[0].types().is_empty());
    assert!(err.links()[0].tags().is_empty());
}
