pub mod extract;
pub mod verify;

pub use extract::extract_archive;
pub use verify::verify_archive;
