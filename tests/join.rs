use std::error::Error as StdError;
use std::fmt;

use errlink::{BoxError, is, join, wrap};

#[derive(Debug)]
struct Eof;

impl fmt::Display for Eof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EOF")
    }
}

impl StdError for Eof {}

#[derive(Debug)]
struct UnexpectedEof;

impl fmt::Display for UnexpectedEof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unexpected EOF")
    }
}

impl StdError for UnexpectedEof {}

#[test]
fn join_aggregates_and_wrapping_traverses_members() {
    let joined = join([Box::new(Eof) as BoxError, Box::new(UnexpectedEof)]).unwrap();

    let members = joined.errors();
    assert_eq!(members.len(), 2);
    assert!(members[0].is::<Eof>());
    assert!(members[1].is::<UnexpectedEof>());

    // wrapping the aggregate keeps every member reachable
    let err = wrap(joined, "my test wrapped error");
    assert!(is::<Eof>(&err));
    assert!(is::<UnexpectedEof>(&err));
    assert!(!is::<std::io::Error>(&err));
}

#[test]
fn join_of_nothing_is_none() {
    assert!(join(Vec::<BoxError>::new()).is_none());
}

#[test]
fn joined_renders_members_line_by_line() {
    let joined = join([Box::new(Eof) as BoxError, Box::new(UnexpectedEof)]).unwrap();
    assert_eq!(joined.to_string(), "EOF\nunexpected EOF");
}
