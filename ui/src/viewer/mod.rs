//! Components of the stats page: loading indicator, tab header, tab contents.

mod page;
pub use page::ProfilePage;

mod progress;
pub use progress::ProgressIndicator;

mod renderers;
pub use renderers::{register_renderers, renderers, RenderFn, RendererSet, TabContainer};

mod tabs;
pub use tabs::TabHeader;
