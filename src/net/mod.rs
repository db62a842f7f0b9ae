pub mod archive;
pub mod cache;
pub mod fetch;
