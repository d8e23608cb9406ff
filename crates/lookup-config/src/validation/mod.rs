//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError` so the user sees all
//! of them at once.

mod helpers;


use lookup_common::ConfigError;

use crate::schema::LookupConfig;

use helpers::{validate_range_f64, validate_range_u64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LookupConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_channel(&mut errors, config);
    validate_view(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &LookupConfig) {
    let w = &config.window;
    validate_range_f64(errors, "window.width", w.width, 200.0, 16384.0);
    validate_range_f64(errors, "window.height", w.height, 150.0, 16384.0);
}

fn validate_channel(errors: &mut Vec<String>, config: &LookupConfig) {
    let c = &config.channel;
    if !c.host.is_loopback() {
        errors.push(format!(
            "channel.host = {} must be a loopback address",
            c.host
        ));
    }
    if c.port == 0 {
        errors.push("channel.port must not be 0".into());
    }
    validate_range_u64(errors, "channel.connect_timeout_ms", c.connect_timeout_ms, 50, 10_000);
    validate_range_u64(errors, "channel.read_timeout_ms", c.read_timeout_ms, 100, 60_000);
    validate_range_u64(
        errors,
        "channel.max_payload_bytes",
        c.max_payload_bytes as u64,
        16,
        65_536,
    );
}

fn validate_view(errors: &mut Vec<String>, config: &LookupConfig) {
    let v = &config.view;
    validate_range_f64(errors, "view.min_toolbar_height", v.min_toolbar_height, 1.0, 400.0);
    validate_range_f64(errors, "view.padding", v.padding, 0.0, 100.0);
}
