use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use service_template::config::{AppEnv, Config, ConfigError};

fn config_from(vars: &[(&'static str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<&'static str, String> =
        vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
    Config::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(
        config.addr(),
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080)
    );
    assert_eq!(config.app_env, AppEnv::Development);
}

#[test]
fn reads_all_variables() {
    let config = config_from(&[
        ("APP_HOST", "127.0.0.1"),
        ("APP_PORT", " 9000 "),
        ("APP_ENV", "Production"),
    ])
    .unwrap();

    assert_eq!(config.addr(), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    assert_eq!(config.app_env, AppEnv::Production);
}

#[test]
fn unknown_env_means_development() {
    let config = config_from(&[("APP_ENV", "staging")]).unwrap();
    assert_eq!(config.app_env, AppEnv::Development);
}

#[test]
fn rejects_invalid_port() {
    let err = config_from(&[("APP_PORT", "eighty")]).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid {
            name: "APP_PORT",
            value: "eighty".to_string()
        }
    );

    assert!(config_from(&[("APP_PORT", "70000")]).is_err());
}

#[test]
fn rejects_invalid_host() {
    let err = config_from(&[("APP_HOST", "not-an-ip")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { name: "APP_HOST", .. }));
}
