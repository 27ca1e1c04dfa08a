//! Test fixtures - reusable content constants for tests.

/// Unified service with two functions on a current host
pub const UNIFIED_CONFIG: &str = r#"
[service]
name = "svc"
host_version = "3.38.0"

[functions.first]
handler = "first.handler"

[functions.second]
handler = "second.handler"
"#;

/// Individually packaged service on a current host
pub const INDIVIDUAL_CONFIG: &str = r#"
[service]
name = "svc"
host_version = "3.38.0"
individually = true

[functions.first]
handler = "first.handler"

[functions.second]
handler = "second.handler"
"#;

/// Individually packaged service on a host below the nested descriptor version
pub const LEGACY_HOST_CONFIG: &str = r#"
[service]
name = "svc"
host_version = "1.17.0"
individually = true

[functions.first]
handler = "first.handler"
"#;

/// Unified google service
pub const GOOGLE_CONFIG: &str = r#"
[service]
name = "svc"
provider = "google"
host_version = "3.38.0"

[functions.first]
handler = "first.handler"
"#;

/// Compiled handler file
pub const HANDLER_JS: &str = "exports.handler = async () => ({ statusCode: 200 });\n";

/// Source map left next to a compiled handler
pub const HANDLER_MAP: &str = "{\"version\":3,\"sources\":[]}\n";
