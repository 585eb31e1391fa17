pub mod artifact;
pub mod resolver;

pub use artifact::Coordinate;
pub use resolver::{resolve_library, NativeArchive, ResolvedLibrary, DIGEST_SUFFIX};
