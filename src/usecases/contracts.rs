use anyhow::Result;
use serde_json::Value;

use crate::usecases::notify::NotificationContent;

/// Key-value access to the remote document store.
///
/// `get` returns `None` for an absent or null document. Implementations must
/// surface transport and status failures as errors; callers treat any error
/// as "no-op, retry next cycle" and never as fatal.
pub trait RemoteStore {
    fn get(&self, path: &str) -> Result<Option<Value>>;
    fn put(&self, path: &str, value: &Value) -> Result<()>;
}

impl<T: RemoteStore + ?Sized> RemoteStore for &T {
    fn get(&self, path: &str) -> Result<Option<Value>> {
        (*self).get(path)
    }

    fn put(&self, path: &str, value: &Value) -> Result<()> {
        (*self).put(path, value)
    }
}

/// OS-level notification sink. Dispatch is fire-and-forget: failures are
/// logged by the caller and never propagated further.
pub trait Notifier {
    fn notify(&self, content: &NotificationContent) -> Result<()>;
}

/// Source of message timestamps: ISO-8601 UTC with second precision and a
/// trailing `Z`, the format the store's existing documents use.
pub trait Clock {
    fn timestamp(&self) -> String;
}
