//! CLI command implementations

mod export;
mod list;
mod show;

pub use export::export;
pub use list::list;
pub use show::show;
