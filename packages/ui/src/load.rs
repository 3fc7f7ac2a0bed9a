use api::ApiError;

/// The only state machine a page has: loading, then data or an error.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(ApiError),
    Ready(T),
}

impl<T> From<Option<Result<T, ApiError>>> for LoadState<T> {
    /// Read the value of a `use_resource` (`None` while pending).
    fn from(value: Option<Result<T, ApiError>>) -> Self {
        match value {
            None => LoadState::Loading,
            Some(Ok(data)) => LoadState::Ready(data),
            Some(Err(e)) => LoadState::Failed(e),
        }
    }
}

impl<T> LoadState<T> {
    /// Read a resource that returns the key it was fetched for along with
    /// the result. A value fetched for another key than `current` is stale
    /// and reads as loading.
    pub fn keyed<K: PartialEq>(current: &K, value: Option<(K, Result<T, ApiError>)>) -> Self {
        match value {
            Some((key, result)) if key == *current => LoadState::from(Some(result)),
            _ => LoadState::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Failed(e) => LoadState::Failed(e),
            LoadState::Ready(data) => LoadState::Ready(f(data)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_resource_value() {
        assert!(LoadState::<u8>::from(None).is_loading());
        assert_eq!(LoadState::from(Some(Ok::<_, ApiError>(3))).ready(), Some(&3));

        let failed = LoadState::<u8>::from(Some(Err(ApiError::Unauthorized)));
        assert_eq!(failed, LoadState::Failed(ApiError::Unauthorized));
        assert_eq!(failed.ready(), None);
    }

    #[test]
    fn test_keyed_value_from_other_key_is_loading() {
        let fetched = Some(("notices", Ok::<_, ApiError>(vec![1, 2])));
        assert_eq!(LoadState::keyed(&"notices", fetched.clone()).ready(), Some(&vec![1, 2]));
        assert!(LoadState::keyed(&"materials", fetched).is_loading());

        let failed = Some(("notices", Err::<u8, _>(ApiError::Unauthorized)));
        assert!(LoadState::keyed(&"materials", failed.clone()).is_loading());
        assert_eq!(LoadState::keyed(&"notices", failed), LoadState::Failed(ApiError::Unauthorized));
        assert!(LoadState::<u8>::keyed(&"notices", None).is_loading());
    }

    #[test]
    fn test_map_keeps_error() {
        let state = LoadState::<Vec<u8>>::Failed(ApiError::MissingToken).map(|v| v.len());
        assert_eq!(state, LoadState::Failed(ApiError::MissingToken));
        assert_eq!(LoadState::Ready(vec![1, 2]).map(|v| v.len()), LoadState::Ready(2));
    }
}
