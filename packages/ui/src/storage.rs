//! Platform storage for the persisted session.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Everything else**: process-local [`store::MemoryStorage`]; the session
//!   lasts until the app exits

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;

pub fn platform_storage() -> PlatformStorage {
    PlatformStorage::default()
}
