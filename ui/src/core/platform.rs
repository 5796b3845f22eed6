//! Platform detection helpers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    /// Whether readings can be loaded from a path on disk.
    pub fn has_filesystem(self) -> bool {
        matches!(self, Self::Desktop)
    }
}

/// Run a future on the browser event loop.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
