//! API layout resolution.
//!
//! Node deployments expose the control API in one of two shapes: a plain
//! layout with verb-named GET endpoints at the server root, and a
//! namespaced layout that prefixes every path with
//! `/api/v1/<instance_name>/` and uses PUT/DELETE on the base path for
//! start/stop. Both are served by the same client, parameterized by this
//! layout type; the presence of an instance name selects the namespaced
//! variant.

/// HTTP method used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

/// Control operations the client can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Start,
    Stop,
    GetParameters,
    SetParameters,
    GetHelp,
    GetStatus,
    GetStatistics,
    GetStatisticsRaw,
    Reset,
    Kill,
}

impl Operation {
    /// Operation name for error messages and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Start => "start",
            Operation::Stop => "stop",
            Operation::GetParameters => "get_parameters",
            Operation::SetParameters => "set_parameters",
            Operation::GetHelp => "get_help",
            Operation::GetStatus => "get_status",
            Operation::GetStatistics => "get_statistics",
            Operation::GetStatisticsRaw => "statistics_raw",
            Operation::Reset => "reset",
            Operation::Kill => "kill",
        }
    }
}

/// Route and verb table for one node deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiLayout {
    /// Unnamespaced GET/POST endpoints at the server root.
    Plain { base_url: String },
    /// Endpoints under `/api/v1/<instance>/`, verb-specific start/stop.
    Namespaced { base_url: String, instance: String },
}

impl ApiLayout {
    /// Build a layout from an address and an optional instance name.
    ///
    /// An instance name selects the namespaced layout; without one the
    /// plain layout is used.
    pub fn from_instance(base_url: impl Into<String>, instance: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        match instance {
            Some(instance) if !instance.is_empty() => ApiLayout::Namespaced { base_url, instance },
            _ => ApiLayout::Plain { base_url },
        }
    }

    /// Layout name for error messages and logging.
    pub fn name(&self) -> &'static str {
        match self {
            ApiLayout::Plain { .. } => "plain",
            ApiLayout::Namespaced { .. } => "namespaced",
        }
    }

    /// The instance name, if this is a namespaced layout.
    pub fn instance(&self) -> Option<&str> {
        match self {
            ApiLayout::Plain { .. } => None,
            ApiLayout::Namespaced { instance, .. } => Some(instance),
        }
    }

    /// The configured node address.
    pub fn address(&self) -> &str {
        match self {
            ApiLayout::Plain { base_url } => base_url,
            ApiLayout::Namespaced { base_url, .. } => base_url,
        }
    }

    /// Base path every route is appended to, with trailing slash.
    fn base(&self) -> String {
        match self {
            ApiLayout::Plain { base_url } => format!("{}/", base_url),
            ApiLayout::Namespaced { base_url, instance } => {
                format!("{}/api/v1/{}/", base_url, instance)
            }
        }
    }

    /// Resolve an operation to its method and full URL.
    ///
    /// Returns `None` when the layout does not serve the operation, in
    /// which case no request must be issued.
    pub fn endpoint(&self, operation: Operation) -> Option<(Method, String)> {
        use Operation::*;

        let (method, route) = match (self, operation) {
            (ApiLayout::Plain { .. }, Start) => (Method::Get, "start"),
            (ApiLayout::Plain { .. }, Stop) => (Method::Get, "stop"),
            (ApiLayout::Namespaced { .. }, Start) => (Method::Put, ""),
            (ApiLayout::Namespaced { .. }, Stop) => (Method::Delete, ""),
            (_, GetParameters) => (Method::Get, "parameters"),
            (_, SetParameters) => (Method::Post, "parameters"),
            (_, GetHelp) => (Method::Get, "help"),
            (_, GetStatus) => (Method::Get, "status"),
            (_, GetStatistics) => (Method::Get, "statistics"),
            (ApiLayout::Namespaced { .. }, GetStatisticsRaw) => (Method::Get, "statistics_raw"),
            (ApiLayout::Namespaced { .. }, Reset) => (Method::Post, "reset"),
            (ApiLayout::Namespaced { .. }, Kill) => (Method::Delete, "kill"),
            _ => return None,
        };

        Some((method, format!("{}{}", self.base(), route)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespaced() -> ApiLayout {
        ApiLayout::from_instance("http://127.0.0.1:8080", Some("writer".to_string()))
    }

    fn plain() -> ApiLayout {
        ApiLayout::from_instance("http://127.0.0.1:8080", None)
    }

    #[test]
    fn test_instance_name_selects_namespaced_layout() {
        assert_eq!(namespaced().name(), "namespaced");
        assert_eq!(plain().name(), "plain");
        // Empty instance names behave like no instance name
        let empty = ApiLayout::from_instance("http://host", Some(String::new()));
        assert_eq!(empty.name(), "plain");
    }

    #[test]
    fn test_trailing_slash_trimmed_from_address() {
        let layout = ApiLayout::from_instance("http://host:8080/", None);
        let (_, url) = layout.endpoint(Operation::GetStatus).unwrap();
        assert_eq!(url, "http://host:8080/status");
    }

    #[test]
    fn test_namespaced_prefixes_every_path() {
        let layout = namespaced();
        for operation in [
            Operation::GetParameters,
            Operation::GetHelp,
            Operation::GetStatus,
            Operation::GetStatistics,
            Operation::GetStatisticsRaw,
        ] {
            let (method, url) = layout.endpoint(operation).unwrap();
            assert_eq!(method, Method::Get);
            assert!(
                url.starts_with("http://127.0.0.1:8080/api/v1/writer/"),
                "URL {} missing namespace prefix",
                url
            );
        }
    }

    #[test]
    fn test_namespaced_start_stop_use_verbs_on_base_path() {
        let layout = namespaced();
        assert_eq!(
            layout.endpoint(Operation::Start),
            Some((
                Method::Put,
                "http://127.0.0.1:8080/api/v1/writer/".to_string()
            ))
        );
        assert_eq!(
            layout.endpoint(Operation::Stop),
            Some((
                Method::Delete,
                "http://127.0.0.1:8080/api/v1/writer/".to_string()
            ))
        );
    }

    #[test]
    fn test_plain_start_stop_use_named_get_endpoints() {
        let layout = plain();
        assert_eq!(
            layout.endpoint(Operation::Start),
            Some((Method::Get, "http://127.0.0.1:8080/start".to_string()))
        );
        assert_eq!(
            layout.endpoint(Operation::Stop),
            Some((Method::Get, "http://127.0.0.1:8080/stop".to_string()))
        );
    }

    #[test]
    fn test_set_parameters_posts_on_both_layouts() {
        for layout in [plain(), namespaced()] {
            let (method, url) = layout.endpoint(Operation::SetParameters).unwrap();
            assert_eq!(method, Method::Post);
            assert!(url.ends_with("parameters"));
        }
    }

    #[test]
    fn test_plain_layout_rejects_namespaced_only_operations() {
        let layout = plain();
        assert_eq!(layout.endpoint(Operation::GetStatisticsRaw), None);
        assert_eq!(layout.endpoint(Operation::Reset), None);
        assert_eq!(layout.endpoint(Operation::Kill), None);
    }
}
