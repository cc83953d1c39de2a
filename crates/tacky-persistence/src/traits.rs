use tacky_core::TackyResult;

/// Durable string key-value storage, the local equivalent of a browser's
/// `localStorage`. Implementations must make `set` atomic per key.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when nothing was ever stored under `key`.
    fn get(&self, key: &str) -> TackyResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> TackyResult<()>;

    fn remove(&self, key: &str) -> TackyResult<()>;
}
