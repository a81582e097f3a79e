use std::error::Error as StdError;

use crate::chain::Chain;
use crate::join::Joined;
use crate::tag::TagValue;

/// The shapes the traversal functions distinguish: an annotation chain,
/// a value exposing the native single-level unwrap capability, or a
/// plain failure with nothing further down.
enum View<'a> {
    Chain(&'a Chain),
    Unwrappable(&'a (dyn StdError + 'static)),
    Plain,
}

fn view<'a>(err: &'a (dyn StdError + 'static)) -> View<'a> {
    if let Some(chain) = err.downcast_ref::<Chain>() {
        View::Chain(chain)
    } else if let Some(source) = err.source() {
        View::Unwrappable(source)
    } else {
        View::Plain
    }
}

/// Extract the innermost, unannotated failure.
///
/// Descends through chains (via their first link's wrapped failure) and
/// through the native `source` convention until neither step is
/// possible. The returned value carries no trace, tag or type metadata;
/// it is the bare originating failure, by identity.
///
/// # Examples
///
/// ```
/// use errlink::{cause, wrap};
///
/// let err = wrap(std::io::Error::other("boom"), "ctx");
/// assert_eq!(cause(&err).to_string(), "boom");
/// ```
pub fn cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    loop {
        match view(current) {
            View::Chain(chain) => match chain.root() {
                Some(root) => current = root,
                None => return current,
            },
            View::Unwrappable(source) => current = source,
            View::Plain => return current,
        }
    }
}

/// Whether a type label named `name` is attached anywhere in `err`'s
/// wrap history.
///
/// Scans the current chain's links newest to oldest, then steps down
/// (into the first link's wrapped failure, or through the native
/// `source` convention) and repeats, so classification attached to a
/// deeply nested chain is found even when the outer value is a native
/// wrap around it.
pub fn has_type(err: &(dyn StdError + 'static), name: &str) -> bool {
    let mut current = err;
    loop {
        match view(current) {
            View::Chain(chain) => {
                for link in chain.links().iter().rev() {
                    if link.types().iter().any(|t| t == name) {
                        return true;
                    }
                }
                match chain.root() {
                    Some(root) => current = root,
                    None => return false,
                }
            }
            View::Unwrappable(source) => current = source,
            View::Plain => return false,
        }
    }
}

/// Look up the value of the tag keyed `key` in `err`'s wrap history.
///
/// Same traversal as [`has_type`]; the first match in the
/// newest-to-oldest scan wins, so the most recently attached value for
/// a key shadows older ones.
pub fn lookup_tag<'a>(err: &'a (dyn StdError + 'static), key: &str) -> Option<&'a TagValue> {
    let mut current = err;
    loop {
        match view(current) {
            View::Chain(chain) => {
                for link in chain.links().iter().rev() {
                    for tag in link.tags() {
                        if tag.key() == key {
                            return Some(tag.value());
                        }
                    }
                }
                match chain.root() {
                    Some(root) => current = root,
                    None => return None,
                }
            }
            View::Unwrappable(source) => current = source,
            View::Plain => return None,
        }
    }
}

/// Whether a failure of concrete type `T` sits anywhere below `err`.
///
/// See [`downcast_ref`] for the traversal rules.
pub fn is<T>(err: &(dyn StdError + 'static)) -> bool
where
    T: StdError + 'static,
{
    downcast_ref::<T>(err).is_some()
}

/// Find the first failure of concrete type `T` below `err`.
///
/// Platform-native type assertion, anchored past chain bookkeeping: a
/// [`Chain`] encountered during the walk is entered at its first link's
/// wrapped failure rather than matched itself. Steps through the native
/// `source` convention and into every member of a [`Joined`] aggregate.
///
/// # Examples
///
/// ```
/// use errlink::{downcast_ref, wrap};
///
/// let err = wrap(std::io::Error::other("boom"), "ctx");
/// let io = downcast_ref::<std::io::Error>(&err).unwrap();
/// assert_eq!(io.to_string(), "boom");
/// ```
pub fn downcast_ref<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    let mut current = err;
    loop {
        if let Some(chain) = current.downcast_ref::<Chain>() {
            current = chain.root()?;
            continue;
        }
        if let Some(target) = current.downcast_ref::<T>() {
            return Some(target);
        }
        if let Some(joined) = current.downcast_ref::<Joined>() {
            return joined.errors().iter().find_map(|member| {
                let member: &(dyn StdError + 'static) = &**member;
                downcast_ref::<T>(member)
            });
        }
        current = current.source()?;
    }
}
