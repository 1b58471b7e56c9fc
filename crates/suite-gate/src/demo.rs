//! Demo-mode request classifier
//!
//! Demo deployments run on pre-seeded showcase data. The policy intent is
//! "creating new data is fine, mutating or deleting existing demo data is
//! not", generalized over an unbounded module set with pattern tables
//! instead of per-route declarations.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use std::collections::HashSet;
use suite_common::{ActionDescriptor, Method};

/// Static rule tables. Code-level configuration, not runtime-editable.
#[derive(Debug, Clone)]
pub struct DemoRules {
    /// Paths containing any of these are never restricted (auth and locale
    /// switching must stay usable in demo)
    pub exempt_path_substrings: Vec<String>,
    /// Curated route names safe to execute against showcase data
    pub exempt_route_names: Vec<String>,
    /// Routes whose file-upload variant is restricted even when the route
    /// name itself is exempt
    pub upload_restricted_routes: Vec<String>,
    /// Path substrings that mark an action as mutating
    pub restricted_path_substrings: Vec<String>,
    /// Route-name substrings that mark an action as mutating
    pub restricted_route_substrings: Vec<String>,
}

impl Default for DemoRules {
    fn default() -> Self {
        Self {
            exempt_path_substrings: strings(&["/login", "/logout", "/change-language"]),
            exempt_route_names: strings(&[
                "proposals.accept",
                "proposals.reject",
                "proposals.convert",
                "returns.approve",
                "returns.complete",
                "payments.status",
                "orders.status",
                "messages.send",
            ]),
            upload_restricted_routes: strings(&["messages.send"]),
            restricted_path_substrings: strings(&[
                "/update",
                "/destroy",
                "/delete",
                "/approve",
                "/settings",
                "/password",
                "/archive",
                "/disable",
            ]),
            restricted_route_substrings: strings(&[
                ".update",
                ".destroy",
                ".delete",
                ".archive",
                "plans.subscribe",
                "users.change-password",
            ]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Pre-compiled classifier. Substring tables become Aho-Corasick automatons
/// once at construction; per-request classification is O(path + route).
pub struct DemoClassifier {
    exempt_routes: HashSet<String>,
    upload_restricted: HashSet<String>,
    exempt_paths: AhoCorasick,
    restricted_paths: AhoCorasick,
    restricted_routes: AhoCorasick,
}

impl DemoClassifier {
    pub fn new(rules: DemoRules) -> Self {
        let build = |patterns: &[String]| {
            AhoCorasickBuilder::new()
                .build(patterns)
                .expect("failed to build Aho-Corasick")
        };
        Self {
            exempt_routes: rules.exempt_route_names.iter().cloned().collect(),
            upload_restricted: rules.upload_restricted_routes.iter().cloned().collect(),
            exempt_paths: build(&rules.exempt_path_substrings),
            restricted_paths: build(&rules.restricted_path_substrings),
            restricted_routes: build(&rules.restricted_route_substrings),
        }
    }

    /// Classify a non-read action. First matching rule decides.
    pub fn is_restricted(&self, action: &ActionDescriptor) -> bool {
        if action.method.is_read() {
            return false;
        }

        if self.exempt_paths.is_match(&action.path) {
            return false;
        }

        let route = action.route_name();

        // Attachment uploads store files; they stay restricted even on
        // routes the name-based exemption below would admit.
        if action.has_file_upload && self.upload_restricted.contains(route) {
            return true;
        }

        if self.exempt_routes.contains(route) {
            return false;
        }

        if matches!(action.method, Method::Put | Method::Patch | Method::Delete) {
            return true;
        }

        if self.restricted_paths.is_match(&action.path) {
            return true;
        }

        if !route.is_empty() && self.restricted_routes.is_match(route) {
            return true;
        }

        // Create-new-data actions are deliberately permitted in demo mode
        false
    }
}

impl Default for DemoClassifier {
    fn default() -> Self {
        Self::new(DemoRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> DemoClassifier {
        DemoClassifier::default()
    }

    #[test]
    fn test_get_is_never_restricted() {
        let c = classifier();
        let action = ActionDescriptor::new(Method::Get, "/users/3/destroy")
            .with_route_name("users.destroy");
        assert!(!c.is_restricted(&action));
    }

    #[test]
    fn test_patch_restricted_without_exemption() {
        let c = classifier();
        let action = ActionDescriptor::new(Method::Patch, "/support-tickets/5");
        assert!(c.is_restricted(&action));
    }

    #[test]
    fn test_put_and_delete_restricted() {
        let c = classifier();
        assert!(c.is_restricted(&ActionDescriptor::new(Method::Put, "/deals/9")));
        assert!(c.is_restricted(&ActionDescriptor::new(Method::Delete, "/deals/9")));
    }

    #[test]
    fn test_login_path_exempt() {
        let c = classifier();
        let action = ActionDescriptor::new(Method::Post, "/login");
        assert!(!c.is_restricted(&action));
    }

    #[test]
    fn test_language_switch_exempt() {
        let c = classifier();
        let action = ActionDescriptor::new(Method::Post, "/change-language/de");
        assert!(!c.is_restricted(&action));
    }

    #[test]
    fn test_exempt_route_name_beats_mutating_path() {
        let c = classifier();
        // Path contains "/approve" but the route is curated as demo-safe
        let action = ActionDescriptor::new(Method::Post, "/returns/7/approve")
            .with_route_name("returns.approve");
        assert!(!c.is_restricted(&action));
    }

    #[test]
    fn test_messaging_send_exempt_without_upload() {
        let c = classifier();
        let action = ActionDescriptor::new(Method::Post, "/messages/send")
            .with_route_name("messages.send");
        assert!(!c.is_restricted(&action));
    }

    #[test]
    fn test_messaging_send_upload_always_restricted() {
        let c = classifier();
        let action = ActionDescriptor::new(Method::Post, "/messages/send")
            .with_route_name("messages.send")
            .with_file_upload();
        assert!(c.is_restricted(&action));
    }

    #[test]
    fn test_mutating_path_substring() {
        let c = classifier();
        let action = ActionDescriptor::new(Method::Post, "/invoices/12/update");
        assert!(c.is_restricted(&action));
    }

    #[test]
    fn test_mutating_route_substring() {
        let c = classifier();
        let action = ActionDescriptor::new(Method::Post, "/subscribe")
            .with_route_name("plans.subscribe");
        assert!(c.is_restricted(&action));
    }

    #[test]
    fn test_change_password_route_restricted() {
        let c = classifier();
        let action = ActionDescriptor::new(Method::Post, "/profile")
            .with_route_name("users.change-password");
        assert!(c.is_restricted(&action));
    }

    #[test]
    fn test_plain_create_allowed() {
        let c = classifier();
        let action = ActionDescriptor::new(Method::Post, "/invoices")
            .with_route_name("invoices.store");
        assert!(!c.is_restricted(&action));
    }
}
