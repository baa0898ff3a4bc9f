//! Builder for `ExecuteRequest`.
//!
//! The client does no validation of field combinations; the server decides
//! what a request means.

use super::proto::{ExecuteRequest, RequestOptions};

/// Shapes an [`ExecuteRequest`] for one script invocation.
#[derive(Debug, Clone, Default)]
pub struct ScriptCall {
    request: ExecuteRequest,
}

impl ScriptCall {
    /// Start a request for `script_path` with the given HTTP method.
    pub fn new(script_path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            request: ExecuteRequest {
                script_path: script_path.into(),
                method: method.into(),
                ..Default::default()
            },
        }
    }

    pub fn get(script_path: impl Into<String>) -> Self {
        Self::new(script_path, "GET")
    }

    pub fn post(script_path: impl Into<String>) -> Self {
        Self::new(script_path, "POST")
    }

    /// Add a `$_GET` parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query_params.insert(key.into(), value.into());
        self
    }

    /// Add a `$_POST` field.
    pub fn form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.form_data.insert(key.into(), value.into());
        self
    }

    /// Add a `$_SERVER` entry (headers go in as `HTTP_*`).
    pub fn server_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.server_vars.insert(key.into(), value.into());
        self
    }

    /// Add a `$_COOKIE` entry.
    pub fn cookie(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.cookies.insert(key.into(), value.into());
        self
    }

    /// Advisory execution timeout, enforced by the server.
    pub fn timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.options().timeout_ms = timeout_ms;
        self
    }

    pub fn profiling(mut self, enabled: bool) -> Self {
        self.options().enable_profiling = enabled;
        self
    }

    pub fn build(self) -> ExecuteRequest {
        self.request
    }

    fn options(&mut self) -> &mut RequestOptions {
        self.request.options.get_or_insert_with(RequestOptions::default)
    }
}
