//! Formatter replacement lives in its own integration binary: the
//! active formatter is process-wide, and a separate binary is a
//! separate process.

use errlink::{cause, default_format, register_formatter, wrap};

#[test]
fn registered_formatter_takes_over() {
    let err = wrap(std::io::Error::other("boom"), "load config");
    assert!(err.to_string().starts_with("source="));

    // render only the innermost message
    register_formatter(|chain, f| write!(f, "{}", cause(chain)));
    assert_eq!(err.to_string(), "boom");

    // replacement affects every chain, old and new
    let other = wrap(std::io::Error::other("other"), "ctx");
    assert_eq!(other.to_string(), "other");

    // last writer wins
    register_formatter(default_format);
    assert!(err.to_string().starts_with("source="));
}
