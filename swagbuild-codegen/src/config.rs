//! Generator configuration.

/// Default Go package name.
pub const DEFAULT_PACKAGE: &str = "ari";
/// Default receiver type of the client functions.
pub const DEFAULT_RECEIVER: &str = "AppInstance";
/// Default receiver method performing the HTTP call.
pub const DEFAULT_DISPATCH: &str = "processCommand";

/// Settings controlling what is emitted and how the output is named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Go package name of the output unit.
    pub package_name: String,
    /// Receiver type the client functions are declared on.
    pub receiver_type: String,
    /// Receiver method called with `(url, body, method)`.
    ///
    /// Its result must expose `StatusCode` and `Body`.
    pub dispatch_method: String,
    /// Emit struct declarations for resolved models.
    pub emit_structs: bool,
    /// Emit the preamble and client functions.
    pub emit_api: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE.to_string(),
            receiver_type: DEFAULT_RECEIVER.to_string(),
            dispatch_method: DEFAULT_DISPATCH.to_string(),
            emit_structs: true,
            emit_api: true,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the package name.
    #[must_use]
    pub fn with_package(mut self, name: impl Into<String>) -> Self {
        self.package_name = name.into();
        self
    }

    /// Sets the receiver type.
    #[must_use]
    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver_type = receiver.into();
        self
    }

    /// Sets the dispatch method.
    #[must_use]
    pub fn with_dispatch(mut self, method: impl Into<String>) -> Self {
        self.dispatch_method = method.into();
        self
    }

    /// Enables or disables struct emission.
    #[must_use]
    pub const fn with_structs(mut self, enabled: bool) -> Self {
        self.emit_structs = enabled;
        self
    }

    /// Enables or disables API emission.
    #[must_use]
    pub const fn with_api(mut self, enabled: bool) -> Self {
        self.emit_api = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.package_name, "ari");
        assert_eq!(config.receiver_type, "AppInstance");
        assert_eq!(config.dispatch_method, "processCommand");
        assert!(config.emit_structs);
        assert!(config.emit_api);
    }

    #[test]
    fn test_config_builders() {
        let config = GeneratorConfig::new()
            .with_package("client")
            .with_receiver("Conn")
            .with_dispatch("send")
            .with_structs(false)
            .with_api(true);

        assert_eq!(config.package_name, "client");
        assert_eq!(config.receiver_type, "Conn");
        assert_eq!(config.dispatch_method, "send");
        assert!(!config.emit_structs);
        assert!(config.emit_api);
    }
}
