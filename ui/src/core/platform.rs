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
}

/// URL of the page hosting the viewer, if the host exposes one.
#[cfg(target_arch = "wasm32")]
pub fn page_url() -> Option<String> {
    web_sys::window().and_then(|window| window.location().href().ok())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_url() -> Option<String> {
    None
}
