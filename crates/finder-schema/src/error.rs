use std::path::PathBuf;

/// Errors raised while loading a schema or following its references.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("schema root must be a JSON object")]
    NotAnObject,

    #[error("unsupported $ref {0}: only references inside the document are followed")]
    ExternalRef(String),

    #[error("unresolved $ref {0}")]
    UnresolvedRef(String),

    #[error("$ref cycle through {0}")]
    RefCycle(String),
}
