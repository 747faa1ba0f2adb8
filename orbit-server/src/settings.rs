//! Server settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::catalog::{CatalogError, StaticCatalog};
use crate::planner::{InvalidOption, PlannerConfig, TieBreak, VisitOrder};

/// Address to listen on.
pub const ADDR_VAR: &str = "ORBIT_ADDR";

/// Catalog to serve: `lengaburu`, `lengaburu-preset` or a JSON file path.
pub const CATALOG_VAR: &str = "ORBIT_CATALOG";

/// Tie-break strategy: `first-seen` or `vehicle-priority`.
pub const TIE_BREAK_VAR: &str = "ORBIT_TIE_BREAK";

/// Visit order: `as-requested` or `either-order`.
pub const VISIT_ORDER_VAR: &str = "ORBIT_VISIT_ORDER";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error from reading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid ORBIT_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error(transparent)]
    InvalidOption(#[from] InvalidOption),
}

/// Where network data comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// Built-in network; speed limits come with each request.
    Lengaburu,

    /// Built-in network with posted speed limits.
    #[default]
    LengaburuPreset,

    /// A JSON catalog file.
    File(PathBuf),
}

impl CatalogSource {
    /// Interpret a setting value. Anything not naming a built-in is a path.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "lengaburu" => CatalogSource::Lengaburu,
            "lengaburu-preset" => CatalogSource::LengaburuPreset,
            path => CatalogSource::File(PathBuf::from(path)),
        }
    }

    /// Build or load the catalog.
    pub fn load(&self) -> Result<StaticCatalog, CatalogError> {
        match self {
            CatalogSource::Lengaburu => StaticCatalog::lengaburu(),
            CatalogSource::LengaburuPreset => StaticCatalog::lengaburu_preset(),
            CatalogSource::File(path) => StaticCatalog::from_path(path),
        }
    }
}

/// Everything the server needs at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub addr: SocketAddr,
    pub catalog: CatalogSource,
    pub planner: PlannerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            catalog: CatalogSource::default(),
            planner: PlannerConfig::default(),
        }
    }
}

impl Settings {
    /// Read settings through `lookup`, using defaults for unset or blank keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr_value = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| SettingsError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        let catalog = get(CATALOG_VAR)
            .map(|v| CatalogSource::parse(&v))
            .unwrap_or_default();

        let tie_break = get(TIE_BREAK_VAR)
            .map(|v| v.parse::<TieBreak>())
            .transpose()?
            .unwrap_or_default();
        let visit_order = get(VISIT_ORDER_VAR)
            .map(|v| v.parse::<VisitOrder>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            addr,
            catalog,
            planner: PlannerConfig::new(tie_break, visit_order),
        })
    }

    /// Read settings from process environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NetworkCatalog;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_settings() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(settings.catalog, CatalogSource::LengaburuPreset);
    }

    #[test]
    fn custom_settings() {
        let settings = Settings::from_lookup(lookup(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (CATALOG_VAR, "lengaburu"),
            (TIE_BREAK_VAR, "vehicle-priority"),
            (VISIT_ORDER_VAR, "either-order"),
        ]))
        .unwrap();

        assert_eq!(settings.addr.port(), 8080);
        assert_eq!(settings.catalog, CatalogSource::Lengaburu);
        assert_eq!(settings.planner.tie_break, TieBreak::VehiclePriority);
        assert_eq!(settings.planner.visit_order, VisitOrder::EitherOrder);
    }

    #[test]
    fn blank_values_use_defaults() {
        let settings =
            Settings::from_lookup(lookup(&[(ADDR_VAR, "  "), (TIE_BREAK_VAR, "")])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn invalid_values_rejected() {
        let err = Settings::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidAddr { .. }));
        assert!(err.to_string().starts_with("invalid ORBIT_ADDR \"localhost\""));

        let err = Settings::from_lookup(lookup(&[(TIE_BREAK_VAR, "cheapest")])).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidOption(_)));

        let err = Settings::from_lookup(lookup(&[(VISIT_ORDER_VAR, "backwards")])).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidOption(_)));
    }

    #[test]
    fn catalog_source_parse() {
        assert_eq!(CatalogSource::parse("lengaburu"), CatalogSource::Lengaburu);
        assert_eq!(
            CatalogSource::parse(" lengaburu-preset "),
            CatalogSource::LengaburuPreset
        );
        assert_eq!(
            CatalogSource::parse("/etc/orbits.json"),
            CatalogSource::File(PathBuf::from("/etc/orbits.json"))
        );
    }

    #[test]
    fn catalog_source_load() {
        let preset = CatalogSource::LengaburuPreset.load().unwrap();
        assert_eq!(preset.orbits().len(), 16);
        let bare = CatalogSource::Lengaburu.load().unwrap();
        assert_eq!(bare.orbits().len(), 10);

        let missing = CatalogSource::File(PathBuf::from("/nonexistent/orbits.json")).load();
        assert!(matches!(missing, Err(CatalogError::Io { .. })));
    }
}
