//! List operations over environment variables.
//!
//! Pass [`ProcessEnv`](crate::ProcessEnv) for the real environment or
//! [`MemoryEnv`](crate::MemoryEnv) in tests.

use crate::error::{Error, Result};
use crate::list::{SEPARATOR, join_list, split_list};
use crate::store::EnvStore;

/// Append `value` as the last entry of the list variable `name`.
///
/// The entry is skipped when already present (exact string comparison after
/// splitting). An unset or empty variable is created holding exactly `value`.
pub fn append<S: EnvStore>(store: &mut S, name: &str, value: &str) -> Result<()> {
    ensure_entry(value)?;
    match current(store, name) {
        None => store.set_raw(name, value),
        Some(mut list) => {
            if !list.iter().any(|e| e.as_str() == value) {
                list.push(value.to_string());
                store.set_raw(name, &join_list(&list));
            }
        }
    }
    Ok(())
}

/// Insert `value` as the first entry of the list variable `name`.
///
/// Same duplicate and unset handling as [`append`].
pub fn prepend<S: EnvStore>(store: &mut S, name: &str, value: &str) -> Result<()> {
    ensure_entry(value)?;
    match current(store, name) {
        None => store.set_raw(name, value),
        Some(mut list) => {
            if !list.iter().any(|e| e.as_str() == value) {
                list.insert(0, value.to_string());
                store.set_raw(name, &join_list(&list));
            }
        }
    }
    Ok(())
}

/// Raw value of `name`, or `None` when unset. Defaults are the caller's:
/// `get(&store, "X").unwrap_or_else(...)`.
pub fn get<S: EnvStore>(store: &S, name: &str) -> Option<String> {
    store.raw(name)
}

/// The split entry list of `name`, or `None` when the variable is unset.
///
/// A set-but-empty variable yields a single empty entry. For an
/// empty-list default, use `entries(..).unwrap_or_default()`.
pub fn entries<S: EnvStore>(store: &S, name: &str) -> Option<Vec<String>> {
    store.raw(name).map(|v| split_list(&v))
}

/// Overwrite `name` with `value`.
pub fn put<S: EnvStore>(store: &mut S, name: &str, value: &str) {
    store.set_raw(name, value);
}

/// Overwrite `name` with `values` joined by [`SEPARATOR`].
pub fn put_list<S, I, E>(store: &mut S, name: &str, values: I) -> Result<()>
where
    S: EnvStore,
    I: IntoIterator<Item = E>,
    E: AsRef<str>,
{
    let mut list = Vec::new();
    for value in values {
        ensure_entry(value.as_ref())?;
        list.push(value.as_ref().to_string());
    }
    store.set_raw(name, &join_list(&list));
    Ok(())
}

/// Remove every entry equal to `value` from the list variable `name`.
///
/// The variable is unset entirely when the last entry is removed.
pub fn remove<S: EnvStore>(store: &mut S, name: &str, value: &str) {
    let Some(mut list) = current(store, name) else {
        return;
    };
    list.retain(|e| e.as_str() != value);
    if list.is_empty() {
        store.remove_raw(name);
    } else {
        store.set_raw(name, &join_list(&list));
    }
}

/// Whether `value` is already an entry of the list variable `name`.
pub fn is_listed<S: EnvStore>(store: &S, name: &str, value: &str) -> bool {
    current(store, name).is_some_and(|list| list.iter().any(|e| e.as_str() == value))
}

/// Current entries for mutation; unset and empty values are both absent.
fn current<S: EnvStore>(store: &S, name: &str) -> Option<Vec<String>> {
    store
        .raw(name)
        .filter(|v| !v.is_empty())
        .map(|v| split_list(&v))
}

fn ensure_entry(value: &str) -> Result<()> {
    if value.contains(SEPARATOR) {
        return Err(Error::SeparatorInEntry {
            entry: value.to_string(),
        });
    }
    Ok(())
}
