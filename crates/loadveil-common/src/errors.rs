use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures raised by a rendering surface itself, as opposed to the page
/// it is loading.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface load error: {0}")]
    Load(String),

    #[error("surface creation error: {0}")]
    Create(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadveilError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("resource.url is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: resource.url is empty"
        );
    }

    #[test]
    fn surface_error_display() {
        let err = SurfaceError::Load("webview destroyed".into());
        assert_eq!(err.to_string(), "surface load error: webview destroyed");

        let err = SurfaceError::Create("no window handle".into());
        assert_eq!(err.to_string(), "surface creation error: no window handle");
    }

    #[test]
    fn loadveil_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: LoadveilError = config_err.into();
        assert!(matches!(err, LoadveilError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn loadveil_error_from_surface() {
        let surface_err = SurfaceError::Load("gone".into());
        let err: LoadveilError = surface_err.into();
        assert!(matches!(err, LoadveilError::Surface(_)));
        assert_eq!(err.to_string(), "surface load error: gone");
    }

    #[test]
    fn loadveil_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LoadveilError = io_err.into();
        assert!(matches!(err, LoadveilError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn loadveil_error_other() {
        let err = LoadveilError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
