//! Environment stores.
//!
//! The operations in [`crate::vars`] are generic over [`EnvStore`] so tests
//! inject an in-memory map instead of mutating real process state.

use std::collections::BTreeMap;
use std::env;

/// Read/write access to a flat name → value map.
pub trait EnvStore {
    /// Raw value, or `None` when the variable is unset.
    fn raw(&self, name: &str) -> Option<String>;

    /// Set `name` to `value`, overwriting any previous value.
    fn set_raw(&mut self, name: &str, value: &str);

    /// Unset `name`. Unset variables read back as `None`.
    fn remove_raw(&mut self, name: &str);
}

/// The real process environment.
///
/// Mutations are visible to this process and inherited by child processes
/// spawned afterwards; nothing is rolled back. Callers invoking this from
/// multiple threads must serialize access themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    /// Unset and non-unicode values both read as absent.
    fn raw(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }

    /// # Panics
    ///
    /// Panics when `name` is empty or contains `=` or NUL, per `std::env`.
    fn set_raw(&mut self, name: &str, value: &str) {
        // SAFETY: only safe in single-threaded programs. Other threads
        // reading the environment through libc during this call is
        // undefined behavior.
        unsafe { env::set_var(name, value) };
    }

    fn remove_raw(&mut self, name: &str) {
        // SAFETY: see `set_raw`.
        unsafe { env::remove_var(name) };
    }
}

/// In-memory store for tests and dry runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryEnv {
    map: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a variable, builder style.
    pub fn seed(mut self, name: &str, value: &str) -> Self {
        self.map.insert(name.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl EnvStore for MemoryEnv {
    fn raw(&self, name: &str) -> Option<String> {
        self.map.get(name).cloned()
    }

    fn set_raw(&mut self, name: &str, value: &str) {
        self.map.insert(name.to_string(), value.to_string());
    }

    fn remove_raw(&mut self, name: &str) {
        self.map.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn memory_env_round_trip() {
        let mut store = MemoryEnv::new();
        assert_eq!(store.raw("KEY"), None);

        store.set_raw("KEY", "value");
        assert_eq!(store.raw("KEY").as_deref(), Some("value"));

        store.set_raw("KEY", "other");
        assert_eq!(store.raw("KEY").as_deref(), Some("other"));

        store.remove_raw("KEY");
        assert_eq!(store.raw("KEY"), None);
    }

    #[test]
    fn memory_env_seed() {
        let store = MemoryEnv::new().seed("A", "1").seed("B", "2");
        assert_eq!(store.len(), 2);
        assert_eq!(store.raw("A").as_deref(), Some("1"));
        assert_eq!(store.raw("B").as_deref(), Some("2"));
    }

    #[test]
    #[serial]
    fn process_env_round_trip() {
        let mut store = ProcessEnv;
        store.set_raw("SATCHEL_STORE_TEST", "alpha");
        assert_eq!(store.raw("SATCHEL_STORE_TEST").as_deref(), Some("alpha"));

        store.remove_raw("SATCHEL_STORE_TEST");
        assert_eq!(store.raw("SATCHEL_STORE_TEST"), None);
    }

    #[test]
    #[serial]
    fn process_env_unset_reads_none() {
        let store = ProcessEnv;
        assert_eq!(store.raw("SATCHEL_STORE_TEST_NEVER_SET"), None);
    }
}
