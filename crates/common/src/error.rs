/// VecRoute error types
#[derive(Debug, thiserror::Error)]
pub enum VecRouteError {
    /// A start, end or waypoint identifier has no matching record
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The greedy router could not make progress
    #[error("No route found: {0}")]
    NoRouteFound(String),

    /// The similarity backend failed or timed out
    #[error("Query service unavailable: {0}")]
    QueryServiceUnavailable(String),

    /// A record vector has the wrong number of components
    #[error("Malformed vector: expected {expected} components, got {actual}")]
    MalformedVector { expected: usize, actual: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VecRouteError {
    /// Create location-not-found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::LocationNotFound(msg.into())
    }

    /// Create no-route error
    pub fn no_route<S: Into<String>>(msg: S) -> Self {
        Self::NoRouteFound(msg.into())
    }

    /// Create backend-unavailable error
    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        Self::QueryServiceUnavailable(msg.into())
    }

    /// Create malformed-vector error
    pub fn malformed(expected: usize, actual: usize) -> Self {
        Self::MalformedVector { expected, actual }
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

// HTTP response conversion (used by the actix-web server)
impl VecRouteError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::LocationNotFound(_) => 404,
            Self::NoRouteFound(_) => 404,
            Self::QueryServiceUnavailable(_) => 503,
            Self::MalformedVector { .. } => 422,
            Self::InvalidInput(_) => 400,
            Self::Json(_) => 400,
            Self::Config(_) => 500,
            Self::Io(_) => 500,
            Self::Other(_) => 500,
        }
    }
}
