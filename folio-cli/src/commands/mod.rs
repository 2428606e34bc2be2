//! CLI command implementations

mod info;
mod read;
mod toc;

pub use info::info;
pub use read::read;
pub use toc::toc;
