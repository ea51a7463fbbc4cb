use crate::config::{Config, ConfigError, ADDR_VAR, MAX_WORKERS_VAR};
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
    assert_eq!(config.max_workers, 8);
}

#[test]
fn overrides_are_applied() {
    let config = config_from(&[(ADDR_VAR, "0.0.0.0:8080"), (MAX_WORKERS_VAR, " 16 ")]).unwrap();

    assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
    assert_eq!(config.max_workers, 16);
}

#[test]
fn malformed_addr_is_rejected() {
    let err = config_from(&[(ADDR_VAR, "localhost")]).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidAddr(ref v) if v == "localhost"));
    assert!(err.to_string().contains(ADDR_VAR));
}

#[test]
fn zero_or_garbage_workers_are_rejected() {
    for raw in ["0", "-3", "many"] {
        let err = config_from(&[(MAX_WORKERS_VAR, raw)]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWorkers(_)), "accepted {raw}");
    }
}
