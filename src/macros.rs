/// Create a new [`Chain`] from a formatted message.
///
/// Equivalent to [`new`] with a [`format!`]ed message.
///
/// [`Chain`]: crate::Chain
/// [`new`]: crate::new
///
/// # Examples
///
/// ```
/// let err = errlink::newf!("missing key {:?}", "port");
/// assert!(err.to_string().ends_with(r#"error=missing key "port""#));
/// ```
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::new(::std::format!($($arg)*))
    };
}

/// Wrap an error with a formatted contextual prefix.
///
/// Equivalent to [`wrap`] with a [`format!`]ed prefix.
///
/// [`wrap`]: crate::wrap
///
/// # Examples
///
/// ```
/// let io = std::io::Error::other("boom");
/// let err = errlink::wrapf!(io, "fetch user {}", 42);
/// assert!(err.to_string().ends_with("error=fetch user 42"));
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::wrap($err, ::std::format!($($arg)*))
    };
}
