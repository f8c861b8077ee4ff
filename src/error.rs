/// Errors returned by the storefront SDK.
///
/// Network operations collapse every failure (transport, status, body) into
/// the kind of the operation that issued them: [`Auth`](Self::Auth) for login,
/// [`Fetch`](Self::Fetch) for reads, [`Mutation`](Self::Mutation) for writes.
/// The underlying cause is logged, not surfaced.
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Could not load: {0}")]
    Fetch(String),

    #[error("Could not save: {0}")]
    Mutation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StorefrontError {
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Mutation(_))
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
