/// A synchronous string key/value store, the shape of the browser's
/// `localStorage`.
///
/// Implementations swallow backend failures (after logging them): reads
/// degrade to `None`, writes to no-ops. A broken storage therefore looks like
/// a signed-out browser instead of a crashed application.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
