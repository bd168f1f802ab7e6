//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use lifeops_config::LifeOpsConfig;
use std::path::Path;

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
default_limit = 50
timezone_offset_hours = 9
",
        )?;

        let config: LifeOpsConfig = Figment::from(Serialized::defaults(LifeOpsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.timezone_offset_hours, 9);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
timezone_offset_hours = -5
",
        )?;

        let config: LifeOpsConfig = Figment::from(Serialized::defaults(LifeOpsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.general.timezone_offset_hours, -5);
        assert!(config.storage.db_path.is_empty());
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lifeops")?;
        jail.create_file(
            ".lifeops/config.toml",
            r#"
[storage]
db_path = "custom.db"
"#,
        )?;

        let config = LifeOpsConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(config.storage.db_path, "custom.db");
        assert_eq!(
            config.storage.resolve_db_path(Path::new("/proj")),
            Path::new("/proj/custom.db")
        );
        Ok(())
    });
}

#[test]
fn invalid_offset_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lifeops")?;
        jail.create_file(
            ".lifeops/config.toml",
            r"
[general]
timezone_offset_hours = 20
",
        )?;

        assert!(LifeOpsConfig::load_from(jail.directory()).is_err());
        Ok(())
    });
}
