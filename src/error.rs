//! User-facing failures of the binding generation pipeline.
//!
//! These are the conditions a project author can act on directly (compile
//! first, fix the artifact). Everything else propagates as plain `anyhow`
//! errors with path context attached at the call site.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The compiled profile document does not exist at the conventional path.
    #[error("compiled profile not found at \"{}\"; run the compile step first", .path.display())]
    MissingArtifact { path: PathBuf },

    /// The artifact exists but is not valid JSON.
    #[error("compiled profile at \"{}\" is not valid JSON: {reason}", .path.display())]
    MalformedArtifact { path: PathBuf, reason: String },

    /// The artifact parses but is not a profile document.
    #[error("file \"{}\" is not a profile document: {reason}", .path.display())]
    WrongDocumentKind { path: PathBuf, reason: String },
}
