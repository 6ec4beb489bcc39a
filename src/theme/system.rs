use super::mode::ColorScheme;

pub const COLOR_SCHEME_ENV: &str = "RIHLA_COLOR_SCHEME";

/// Read-only query for the host's preferred color scheme.
pub trait SystemColorScheme: Send + Sync {
    fn color_scheme(&self) -> ColorScheme;
}

/// Always reports the same scheme. Used by tests and hosts that resolve the
/// platform preference themselves before building the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme(pub ColorScheme);

impl SystemColorScheme for FixedColorScheme {
    fn color_scheme(&self) -> ColorScheme {
        self.0
    }
}

/// Reads the scheme from an environment variable (`RIHLA_COLOR_SCHEME` by default).
#[derive(Debug, Clone)]
pub struct EnvColorScheme {
    var: String,
}

impl EnvColorScheme {
    pub fn new() -> Self {
        Self::from_var(COLOR_SCHEME_ENV)
    }

    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvColorScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemColorScheme for EnvColorScheme {
    fn color_scheme(&self) -> ColorScheme {
        std::env::var(&self.var)
            .map(|v| ColorScheme::parse(&v))
            .unwrap_or(ColorScheme::Unspecified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed() {
        assert_eq!(FixedColorScheme(ColorScheme::Dark).color_scheme(), ColorScheme::Dark);
        assert_eq!(FixedColorScheme::default().color_scheme(), ColorScheme::Unspecified);
    }

    #[test]
    fn test_env_unset_is_unspecified() {
        let scheme = EnvColorScheme::from_var("RIHLA_TEST_SCHEME_NEVER_SET");
        assert_eq!(scheme.color_scheme(), ColorScheme::Unspecified);
    }
}
