//! Domain logic - version model and rendering rules independent of git and files

pub mod build;
pub mod style;
pub mod version;

pub use build::{BuildCount, DEFAULT_OFFSET};
pub use style::{simplify_extra, ExtraForm, RenderStyle};
pub use version::VersionTuple;
