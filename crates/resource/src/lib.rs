//! Disk-backed [`ResourceProvider`](gurumi_traits::ResourceProvider) for the
//! logo and saved cover pictures.

mod filesystem;

pub use filesystem::FilesystemResourceProvider;
pub use gurumi_traits::InMemoryResourceProvider;
