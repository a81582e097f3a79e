use std::error::Error as StdError;
use std::fmt;

use crate::BoxError;

/// Aggregate multiple failures into a single one.
///
/// Returns `None` when the iterator yields nothing, so joining "no
/// errors" never fabricates an error value. The aggregate renders as
/// its members' messages joined by newline, and [`is`]/[`downcast_ref`]
/// traverse into every member, so a chain can wrap an aggregate without
/// losing the ability to check what is inside.
///
/// [`is`]: crate::is
/// [`downcast_ref`]: crate::downcast_ref
///
/// # Examples
///
/// ```
/// use errlink::{is, join, wrap};
///
/// let joined = join([
///     std::io::Error::other("disk full"),
///     std::io::Error::other("net down"),
/// ])
/// .unwrap();
///
/// let err = wrap(joined, "flush buffers");
/// assert!(is::<std::io::Error>(&err));
/// ```
pub fn join<I>(errs: I) -> Option<Joined>
where
    I: IntoIterator,
    I::Item: Into<BoxError>,
{
    let errors: Vec<BoxError> = errs.into_iter().map(Into::into).collect();
    if errors.is_empty() {
        None
    } else {
        Some(Joined { errors })
    }
}

/// A set of failures aggregated by [`join`].
#[derive(Debug)]
pub struct Joined {
    errors: Vec<BoxError>,
}

impl Joined {
    /// The aggregated failures, in the order they were joined.
    #[must_use]
    pub fn errors(&self) -> &[BoxError] {
        &self.errors
    }
}

impl fmt::Display for Joined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl StdError for Joined {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_nothing_is_none() {
        let errors: [std::io::Error; 0] = [];
        assert!(join(errors).is_none());
    }

    #[test]
    fn members_keep_their_order() {
        let joined = join([
            std::io::Error::other("first"),
            std::io::Error::other("second"),
        ])
        .unwrap();
        assert_eq!(joined.errors().len(), 2);
        assert_eq!(joined.to_string(), "first\nsecond");
    }
}
