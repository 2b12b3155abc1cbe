// Request handling entry point
// Routing decision: serve the file on disk, or substitute the fallback document

pub mod router;
pub mod static_files;

pub use router::handle_request;
