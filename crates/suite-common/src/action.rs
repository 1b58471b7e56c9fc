//! Action descriptor handed in by the web layer

use serde::{Deserialize, Serialize};

/// HTTP-like request method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// GET is the only method the demo classifier never restricts.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Get)
    }
}

/// Description of an inbound action, assembled by the web layer from the
/// matched route. The gate pipeline treats it as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub method: Method,
    /// Normalized request path, leading slash, no query string
    pub path: String,
    /// Route name, if the router assigned one (e.g. "invoices.destroy")
    pub route_name: Option<String>,
    /// Module requirement from route config. Hyphen-joined names mean
    /// "admit if ANY is active", e.g. "hrm-payroll".
    pub required_module: Option<String>,
    /// Permission requirement from route config
    pub required_permission: Option<String>,
    /// Whether the request carries a file upload
    pub has_file_upload: bool,
}

impl ActionDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            route_name: None,
            required_module: None,
            required_permission: None,
            has_file_upload: false,
        }
    }

    pub fn with_route_name(mut self, name: impl Into<String>) -> Self {
        self.route_name = Some(name.into());
        self
    }

    pub fn with_required_module(mut self, module: impl Into<String>) -> Self {
        self.required_module = Some(module.into());
        self
    }

    pub fn with_required_permission(mut self, permission: impl Into<String>) -> Self {
        self.required_permission = Some(permission.into());
        self
    }

    pub fn with_file_upload(mut self) -> Self {
        self.has_file_upload = true;
        self
    }

    /// Module names from `required_module`, split on `-`. Empty when the
    /// route declares no module requirement.
    pub fn required_modules(&self) -> Vec<&str> {
        self.required_module
            .as_deref()
            .map(|m| m.split('-').filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }

    pub fn route_name(&self) -> &str {
        self.route_name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_modules_split() {
        let action = ActionDescriptor::new(Method::Get, "/payroll")
            .with_required_module("hrm-payroll");
        assert_eq!(action.required_modules(), vec!["hrm", "payroll"]);
    }

    #[test]
    fn test_required_modules_single() {
        let action = ActionDescriptor::new(Method::Get, "/deals")
            .with_required_module("crm");
        assert_eq!(action.required_modules(), vec!["crm"]);
    }

    #[test]
    fn test_required_modules_absent() {
        let action = ActionDescriptor::new(Method::Get, "/dashboard");
        assert!(action.required_modules().is_empty());
    }
}
