use std::fmt;
use std::panic::Location;

/// Call site recorded when a [`Link`] is created.
///
/// Backed by [`std::panic::Location`]: the public constructors of this
/// crate are `#[track_caller]`, so the frame attributed to a link is the
/// user's wrap call, not library plumbing. Library authors layering
/// their own wrappers on top keep that attribution by marking their
/// wrapper `#[track_caller]` as well, or by threading an explicit
/// location through [`wrap_at`].
///
/// [`Link`]: crate::Link
/// [`wrap_at`]: crate::wrap_at
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    location: &'static Location<'static>,
}

impl Frame {
    /// Capture the caller's location.
    #[track_caller]
    #[must_use]
    pub fn capture() -> Self {
        Self {
            location: Location::caller(),
        }
    }

    /// Create a frame from an explicit location.
    #[must_use]
    pub const fn from_location(location: &'static Location<'static>) -> Self {
        Self { location }
    }

    /// The source file the frame points into.
    #[must_use]
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// The final path component of [`Frame::file`].
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        let file = self.location.file();
        file.rsplit(['/', '\\']).next().unwrap_or(file)
    }

    /// The 1-indexed line of the frame.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// The 1-indexed column of the frame.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.location.column()
    }

    /// The underlying [`Location`].
    #[must_use]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_points_at_caller() {
        let frame = Frame::capture();
        let line = line!() - 1;
        assert_eq!(frame.line(), line);
        assert_eq!(frame.file_name(), "frame.rs");
        assert!(frame.file().ends_with("frame.rs"));
    }

    #[test]
    fn capture_through_annotated_helper() {
        #[track_caller]
        fn indirection() -> Frame {
            Frame::capture()
        }

        let frame = indirection();
        let line = line!() - 1;
        assert_eq!(frame.line(), line);
    }

    #[test]
    fn display_is_file_and_line() {
        let frame = Frame::capture();
        let line = line!() - 1;
        assert_eq!(frame.to_string(), format!("frame.rs:{line}"));
    }
}
