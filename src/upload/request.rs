//! Request customization and HTTP submission

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::error::{Result, UploadError};
use super::form::{FormSpec, UploadSource};

/// HTTP method for uploads
///
/// A closed set rather than a free-form string: the endpoint semantics
/// this tool targets only ever distinguish create (POST) from replace
/// (PUT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadMethod {
    /// HTTP POST (the default)
    #[default]
    Post,
    /// HTTP PUT
    Put,
}

impl UploadMethod {
    /// Method name as sent on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// Full request configuration for [`RequestOptions::Custom`]
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Method override; POST when absent
    pub method: Option<UploadMethod>,
    /// Additional headers, appended in order
    pub headers: Vec<(String, String)>,
    /// Request timeout; the client default applies when absent
    pub timeout: Option<Duration>,
    /// Raw body override
    ///
    /// The generated multipart form always carries the payload; setting
    /// this is rejected at send time with [`UploadError::BodyConflict`]
    /// rather than silently displacing the form.
    pub body: Option<Vec<u8>>,
}

impl RequestConfig {
    /// Create an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the request method
    #[must_use]
    pub const fn with_method(mut self, method: UploadMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Append a header
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a raw body (rejected at send time, see [`RequestConfig::body`])
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// How an upload request may be customized
///
/// The closed set of shapes the third upload argument can take: nothing,
/// a bare method override, or a full configuration.
#[derive(Debug, Clone, Default)]
pub enum RequestOptions {
    /// POST with no extra headers
    #[default]
    Default,
    /// Method override only
    Method(UploadMethod),
    /// Full request configuration
    Custom(RequestConfig),
}

/// Upload files to `url` as a multipart form
///
/// Builds the form from `source` (see [`FormSpec::from_source`] for the
/// field-naming rules) and issues one blocking HTTP request. The raw
/// response is returned unmodified; non-2xx statuses are NOT errors and
/// must be inspected by the caller.
///
/// # Errors
///
/// Returns an error if a part's file cannot be read, the configuration
/// is contradictory ([`UploadError::BodyConflict`]), a header is not
/// valid HTTP, or the request fails at the transport level.
pub fn send(url: &str, source: &UploadSource, options: &RequestOptions) -> Result<Response> {
    let form = FormSpec::from_source(source).into_form()?;

    let (method, headers, timeout) = match options {
        RequestOptions::Default => (UploadMethod::Post, &[][..], None),
        RequestOptions::Method(method) => (*method, &[][..], None),
        RequestOptions::Custom(config) => {
            if config.body.is_some() {
                return Err(UploadError::BodyConflict);
            }
            (
                config.method.unwrap_or_default(),
                config.headers.as_slice(),
                config.timeout,
            )
        }
    };

    let headers = build_headers(headers)?;

    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    let request = match method {
        UploadMethod::Post => client.post(url),
        UploadMethod::Put => client.put(url),
    };

    Ok(request.headers(headers).multipart(form).send()?)
}

fn build_headers(pairs: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| UploadError::InvalidHeader {
                header: name.clone(),
            })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| UploadError::InvalidHeader {
                header: name.clone(),
            })?;
        map.append(header_name, header_value);
    }
    Ok(map)
}
