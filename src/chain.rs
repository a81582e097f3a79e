use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::BoxError;
use crate::frame::Frame;
use crate::tag::{Tag, TagValue};

/// One node of context in a [`Chain`]: an optional wrapped failure, a
/// contextual prefix, categorical type labels, key/value tags and the
/// call site that created it.
///
/// Only the first link of a chain carries a wrapped failure (the raw
/// error handed to the first [`wrap`] call); links appended while
/// propagating are context-only.
#[derive(Debug)]
pub struct Link {
    wrapped: Option<BoxError>,
    prefix: Cow<'static, str>,
    types: SmallVec<[SmolStr; 2]>,
    tags: SmallVec<[Tag; 4]>,
    source: Frame,
}

impl Link {
    fn new(wrapped: Option<BoxError>, prefix: Cow<'static, str>, source: Frame) -> Self {
        Self {
            wrapped,
            prefix,
            types: SmallVec::new(),
            tags: SmallVec::new(),
            source,
        }
    }

    /// The failure this link wraps, if any.
    #[must_use]
    pub fn wrapped(&self) -> Option<&(dyn StdError + 'static)> {
        self.wrapped
            .as_deref()
            .map(|err| err as &(dyn StdError + 'static))
    }

    /// The contextual prefix text of this link.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Type labels attached to this link, in insertion order.
    #[must_use]
    pub fn types(&self) -> &[SmolStr] {
        &self.types
    }

    /// Tags attached to this link, in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The call site that created this link.
    #[must_use]
    pub fn source(&self) -> Frame {
        self.source
    }

    /// Attach a single tag to this link.
    pub fn add_tag(&mut self, key: impl Into<SmolStr>, value: impl Into<TagValue>) -> &mut Self {
        self.tags.push(Tag::new(key, value));
        self
    }

    /// Attach multiple tags to this link.
    pub fn add_tags(&mut self, tags: impl IntoIterator<Item = Tag>) -> &mut Self {
        self.tags.extend(tags);
        self
    }

    /// Attach a single type label to this link.
    pub fn add_type(&mut self, name: impl Into<SmolStr>) -> &mut Self {
        self.types.push(name.into());
        self
    }

    /// Attach multiple type labels to this link.
    pub fn add_types<I>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<SmolStr>,
    {
        self.types.extend(names.into_iter().map(Into::into));
        self
    }
}

/// Ordered sequence of [`Link`]s recording one failure's accumulated
/// wrap history: index 0 is the oldest link (closest to the original
/// raw failure), the last is the newest wrap call.
///
/// A chain is itself an error value: it implements
/// [`std::error::Error`], with [`source`] exposing the first link's
/// wrapped failure, so standard source-walking steps from a chain
/// straight to the failure it annotates.
///
/// [`source`]: std::error::Error::source
#[derive(Debug)]
pub struct Chain {
    links: Vec<Link>,
}

/// Create a new [`Chain`] holding a text-only failure.
///
/// Registered classification helpers run against the new failure, just
/// as they would for [`wrap`].
///
/// # Examples
///
/// ```
/// let err = errlink::new("config missing");
/// assert!(err.to_string().ends_with("error=config missing"));
/// ```
#[track_caller]
pub fn new(msg: impl fmt::Display + fmt::Debug + Send + Sync + 'static) -> Chain {
    Chain::classify_raw(
        Box::new(MessageError(msg)),
        Cow::Borrowed(""),
        Frame::capture(),
    )
}

/// Wrap `err` with a contextual `prefix`, recording the call site.
///
/// If `err` is already a [`Chain`], a single context-only link is
/// appended and no classification runs (the raw failure was classified
/// once, when the chain was created). Otherwise a new chain is created:
/// the raw failure becomes the first link, every registered
/// classification helper runs against it, and a second link carries the
/// prefix.
///
/// # Examples
///
/// ```
/// use errlink::{cause, wrap};
///
/// let err = wrap(std::io::Error::other("boom"), "load config");
/// let err = wrap(err, "start server");
///
/// assert_eq!(err.links().len(), 3);
/// assert!(cause(&err).downcast_ref::<std::io::Error>().is_some());
/// ```
#[track_caller]
pub fn wrap(err: impl Into<BoxError>, prefix: impl Into<Cow<'static, str>>) -> Chain {
    wrap_at(err, prefix, Location::caller())
}

/// [`wrap`] with an explicit call-site location.
///
/// For library authors layering their own wrapper on top of this crate
/// when `#[track_caller]` attribution cannot be threaded through.
pub fn wrap_at(
    err: impl Into<BoxError>,
    prefix: impl Into<Cow<'static, str>>,
    location: &'static Location<'static>,
) -> Chain {
    let frame = Frame::from_location(location);
    let err: BoxError = err.into();
    match err.downcast::<Chain>() {
        Ok(chain) => chain.push_context(prefix.into(), frame),
        Err(raw) => Chain::classify_raw(raw, prefix.into(), frame),
    }
}

impl Chain {
    /// First wrap of a raw failure: classification link first, then a
    /// context link when a prefix is given. Both share the same frame,
    /// they describe the same call site.
    fn classify_raw(raw: BoxError, prefix: Cow<'static, str>, source: Frame) -> Self {
        let mut link = Link::new(None, Cow::Borrowed(""), source);
        let raw_ref: &(dyn StdError + 'static) = &*raw;
        crate::helper::classify(&mut link, raw_ref);
        link.wrapped = Some(raw);

        let mut links = Vec::with_capacity(if prefix.is_empty() { 1 } else { 2 });
        links.push(link);
        if !prefix.is_empty() {
            links.push(Link::new(None, prefix, source));
        }
        Self { links }
    }

    fn push_context(mut self, prefix: Cow<'static, str>, source: Frame) -> Self {
        self.links.push(Link::new(None, prefix, source));
        self
    }

    /// Append another contextual prefix to this chain.
    ///
    /// Method form of [`wrap`] for when the chain is already at hand;
    /// it skips the box-and-downcast round trip.
    #[track_caller]
    #[must_use]
    pub fn wrap(self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.push_context(prefix.into(), Frame::capture())
    }

    /// Attach a single tag to the newest link.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<SmolStr>, value: impl Into<TagValue>) -> Self {
        self.current_mut().add_tag(key, value);
        self
    }

    /// Attach multiple tags to the newest link.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.current_mut().add_tags(tags);
        self
    }

    /// Attach one or more type labels to the newest link.
    #[must_use]
    pub fn with_types<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SmolStr>,
    {
        self.current_mut().add_types(names);
        self
    }

    /// All links, oldest first.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The newest link: the one tags and types attach to.
    #[must_use]
    pub fn current(&self) -> &Link {
        // a chain is constructed with at least one link and never shrinks
        &self.links[self.links.len() - 1]
    }

    /// The raw failure held by the oldest link.
    #[must_use]
    pub fn root(&self) -> Option<&(dyn StdError + 'static)> {
        self.links.first().and_then(Link::wrapped)
    }

    fn current_mut(&mut self) -> &mut Link {
        let idx = self.links.len() - 1;
        &mut self.links[idx]
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::format_chain(self, f)
    }
}

impl StdError for Chain {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.root()
    }
}

#[repr(transparent)]
/// An error type that wraps a message.
pub(crate) struct MessageError<M>(pub(crate) M);

impl<M> fmt::Debug for MessageError<M>
where
    M: fmt::Display + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<M> fmt::Display for MessageError<M>
where
    M: fmt::Display + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<M> StdError for MessageError<M> where M: fmt::Display + fmt::Debug + 'static {}
