//! The resource URL as a network endpoint.
//!
//! Config validation and the connectivity probe both go through
//! [`ResourceEndpoint::parse`], so a URL that validates is always one the
//! probe can connect to.

use http::Uri;
use thiserror::Error;

/// Why a resource URL is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("must not be empty")]
    Empty,

    #[error("is not a valid URL: {0}")]
    Invalid(String),

    #[error("must use http:// or https://")]
    Scheme,

    #[error("has no host")]
    NoHost,

    #[error("has an invalid port")]
    Port,
}

/// Host and port of an `http`/`https` resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEndpoint {
    /// Host without IPv6 brackets.
    pub host: String,
    /// Explicit port, or the scheme default.
    pub port: u16,
}

impl ResourceEndpoint {
    pub fn parse(url: &str) -> Result<Self, EndpointError> {
        if url.trim().is_empty() {
            return Err(EndpointError::Empty);
        }

        let uri: Uri = url
            .parse()
            .map_err(|e: http::uri::InvalidUri| EndpointError::Invalid(e.to_string()))?;

        let default_port = match uri.scheme_str() {
            Some("http") => 80,
            Some("https") => 443,
            _ => return Err(EndpointError::Scheme),
        };

        let authority = uri.authority().ok_or(EndpointError::NoHost)?;
        let host = authority.host();
        if host.is_empty() {
            return Err(EndpointError::NoHost);
        }

        // Port text after the host, ignoring userinfo and IPv6 colons.
        let after_userinfo = authority
            .as_str()
            .rsplit_once('@')
            .map_or(authority.as_str(), |(_, rest)| rest);
        let after_host = after_userinfo
            .rsplit_once(']')
            .map_or(after_userinfo, |(_, rest)| rest);
        let port = match (after_host.contains(':'), authority.port_u16()) {
            (false, _) => default_port,
            (true, Some(port)) if port != 0 => port,
            (true, _) => return Err(EndpointError::Port),
        };

        Ok(Self {
            host: host.trim_start_matches('[').trim_end_matches(']').to_string(),
            port,
        })
    }
}
