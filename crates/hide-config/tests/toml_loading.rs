//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use hide_config::HideConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_client_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[client]
base_url = "https://hide.example.com/api"
timeout_secs = 30
connect_timeout_secs = 5
user_agent = "my-agent/2.0"
"#,
        )?;

        let config: HideConfig = Figment::from(Serialized::defaults(HideConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.client.base_url, "https://hide.example.com/api");
        assert_eq!(config.client.timeout_secs, 30);
        assert_eq!(config.client.connect_timeout_secs, 5);
        assert_eq!(config.client.user_agent, "my-agent/2.0");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[client]
base_url = "http://127.0.0.1:9000"
"#,
        )?;

        let config: HideConfig = Figment::from(Serialized::defaults(HideConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.client.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.client.timeout_secs, 0);
        assert!(config.client.user_agent.starts_with("hide-client/"));
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".hide")?;
        jail.create_file(
            ".hide/config.toml",
            r#"
[client]
base_url = "http://project-local:8080"
"#,
        )?;

        let config = HideConfig::load().expect("config loads");
        assert_eq!(config.client.base_url, "http://project-local:8080");
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".hide")?;
        jail.create_file(
            ".hide/config.toml",
            r#"
[client]
timeout_secs = "soon"
"#,
        )?;

        let err = HideConfig::load().unwrap_err();
        assert!(matches!(err, hide_config::ConfigError::Figment(_)));
        Ok(())
    });
}
