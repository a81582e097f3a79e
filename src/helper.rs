use std::error::Error as StdError;
use std::ptr;
use std::sync::LazyLock;

use arc_swap::ArcSwap;

use crate::chain::Link;

/// Classification function run once per newly wrapped raw failure.
///
/// A helper inspects the raw failure's concrete type or value (via
/// downcasting) and may attach type labels and tags to the chain's
/// first link through the given handle. Returning `false` stops the
/// pipeline: "I recognized this failure, no one else needs to look."
///
/// # Examples
///
/// ```
/// use std::error::Error;
///
/// use errlink::{Link, has_type, register_helper, wrap};
///
/// fn classify_io(link: &mut Link, raw: &(dyn Error + 'static)) -> bool {
///     let Some(err) = raw.downcast_ref::<std::io::Error>() else {
///         return true;
///     };
///     link.add_type("IO")
///         .add_tag("kind", err.kind().to_string());
///     false
/// }
///
/// register_helper(classify_io);
///
/// let err = wrap(std::io::Error::other("boom"), "read manifest");
/// assert!(has_type(&err, "IO"));
/// ```
pub type Helper = fn(&mut Link, &(dyn StdError + 'static)) -> bool;

static HELPERS: LazyLock<ArcSwap<Vec<Helper>>> =
    LazyLock::new(|| ArcSwap::from_pointee(Vec::new()));

/// Register a classification helper, to run on every raw failure newly
/// wrapped by [`wrap`] or [`new`], in registration order.
///
/// Registering the same function twice is a no-op: the first
/// registration wins and the pipeline order stays stable. The registry
/// is process-wide and meant to be configured during startup, before
/// error-producing work begins.
///
/// [`wrap`]: crate::wrap
/// [`new`]: crate::new
pub fn register_helper(helper: Helper) {
    let mut duplicate = false;
    HELPERS.rcu(|current| {
        duplicate = current.iter().any(|h| ptr::fn_addr_eq(*h, helper));
        let mut next = (**current).clone();
        if !duplicate {
            next.push(helper);
        }
        next
    });
    if duplicate {
        tracing::debug!("duplicate error classification helper ignored");
    } else {
        tracing::trace!("registered error classification helper");
    }
}

/// Run every registered helper against a freshly created first link and
/// the raw failure it is about to hold.
pub(crate) fn classify(link: &mut Link, raw: &(dyn StdError + 'static)) {
    for helper in HELPERS.load().iter() {
        if !helper(link, raw) {
            break;
        }
    }
}
