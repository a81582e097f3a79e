use std::fmt::{self, Write as _};
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::chain::{Chain, Link};

// boxed so the trait object fits behind `ArcSwap` (thin pointer only)
struct FormatCell(Box<dyn Fn(&Chain, &mut fmt::Formatter<'_>) -> fmt::Result + Send + Sync>);

static FORMATTER: LazyLock<ArcSwap<FormatCell>> =
    LazyLock::new(|| ArcSwap::from_pointee(FormatCell(Box::new(default_format))));

/// Replace the formatter used by every [`Chain`]'s [`Display`] impl
/// from now on.
///
/// Process-wide, meant to be set once during startup; the last
/// registration wins. Use it to redirect rendering without forking the
/// library, e.g. to show only the innermost message:
///
/// ```
/// use errlink::{cause, register_formatter, wrap};
///
/// register_formatter(|chain, f| write!(f, "{}", cause(chain)));
///
/// let err = wrap(std::io::Error::other("boom"), "load config");
/// assert_eq!(err.to_string(), "boom");
/// ```
///
/// [`Display`]: std::fmt::Display
pub fn register_formatter(
    f: impl Fn(&Chain, &mut fmt::Formatter<'_>) -> fmt::Result + Send + Sync + 'static,
) {
    FORMATTER.store(Arc::new(FormatCell(Box::new(f))));
    tracing::trace!("replaced error chain formatter");
}

pub(crate) fn format_chain(chain: &Chain, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let formatter = FORMATTER.load();
    (formatter.0)(chain, f)
}

/// The built-in renderer: one line per link, oldest first.
///
/// Each line reads
/// `source=<file>:<line> error=<prefix>[: <wrapped>][ <key>=<value>]*[ types=<a,b>]`,
/// with the wrapped failure's own message rendered only on links that
/// own one (the first link), tags in insertion order and type labels
/// comma-joined in insertion order.
pub fn default_format(chain: &Chain, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, link) in chain.links().iter().enumerate() {
        if i > 0 {
            f.write_char('\n')?;
        }
        format_link(link, f)?;
    }
    Ok(())
}

fn format_link(link: &Link, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "source={} error={}", link.source(), link.prefix())?;
    if let Some(wrapped) = link.wrapped() {
        if !link.prefix().is_empty() {
            f.write_str(": ")?;
        }
        write!(f, "{wrapped}")?;
    }
    for tag in link.tags() {
        write!(f, " {}={}", tag.key(), tag.value())?;
    }
    if let Some((first, rest)) = link.types().split_first() {
        write!(f, " types={first}")?;
        for name in rest {
            write!(f, ",{name}")?;
        }
    }
    Ok(())
}
