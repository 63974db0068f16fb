use std::path::{Path, PathBuf};

use anyhow::Context;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use upi_qr_core::{Config, default_config};

pub(crate) const ENV_PREFIX: &str = "UPI_QR_";
pub(crate) const DEFAULT_CONFIG_FILE: &str = "upi-qr.toml";

/// An explicitly given file must exist. Without one, `upi-qr.toml` in the
/// working directory is used if it exists.
pub(crate) fn resolve_config_file(explicit: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    match explicit {
        Some(path) => std::fs::canonicalize(path)
            .map(Some)
            .with_context(|| format!("Config file not found: {}", path.display())),
        None => Ok(std::fs::canonicalize(DEFAULT_CONFIG_FILE).ok()),
    }
}

/// Defaults, then the TOML file if present, then `UPI_QR_*` variables.
/// Nested keys use a double underscore, e.g. `UPI_QR_QR__SIZE_PX`.
pub(crate) fn load_config(config_file: Option<&Path>) -> anyhow::Result<Config> {
    let mut figment = Figment::new().merge(Serialized::defaults(default_config()));
    if let Some(config_file) = config_file {
        figment = figment.merge(Toml::file(config_file));
    }

    let config: Config = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use upi_qr_core::ErrorCorrectionLevel;

    use super::*;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = load_config(None).unwrap();
            assert_eq!(config, default_config());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "upi-qr.toml",
                r#"
                payee_name = "Corner Shop"

                [qr]
                error_correction = "Q"
                "#,
            )?;
            jail.set_env("UPI_QR_QR__SIZE_PX", "320");

            let config = load_config(Some(Path::new("upi-qr.toml"))).unwrap();
            assert_eq!(config.payee_name, "Corner Shop");
            assert_eq!(config.qr.error_correction, ErrorCorrectionLevel::Q);
            assert_eq!(config.qr.size_px, 320);
            assert!(config.qr.include_margin);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_config_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let err = resolve_config_file(Some(Path::new("missing.toml"))).unwrap_err();
            assert!(err.to_string().contains("missing.toml"));
            Ok(())
        });
    }

    #[test]
    fn test_default_config_file_is_optional() {
        Jail::expect_with(|jail| {
            assert_eq!(resolve_config_file(None).unwrap(), None);

            jail.create_file(DEFAULT_CONFIG_FILE, "payee_name = \"Corner Shop\"")?;
            let resolved = resolve_config_file(None).unwrap().unwrap();
            assert!(resolved.is_absolute());
            assert!(resolved.ends_with(DEFAULT_CONFIG_FILE));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_config_file_is_resolved() {
        Jail::expect_with(|jail| {
            jail.create_file("shop.toml", "payee_name = \"Corner Shop\"")?;
            let resolved = resolve_config_file(Some(Path::new("shop.toml")))
                .unwrap()
                .unwrap();
            assert!(resolved.ends_with("shop.toml"));
            assert_eq!(load_config(Some(&resolved)).unwrap().payee_name, "Corner Shop");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("UPI_QR_PAYEE_NAME", " ");
            assert!(load_config(None).is_err());
            Ok(())
        });
    }
}
