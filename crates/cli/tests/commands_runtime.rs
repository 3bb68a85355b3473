use std::env;
use std::sync::{Mutex, OnceLock};

use lumilab_cli::commands::recommend::ProfileArgs;
use lumilab_cli::commands::{catalog, config, recommend, steps};
use serde_json::Value;

#[test]
fn recommend_demo_returns_all_products_in_rule_order() {
    let result = recommend::run(ProfileArgs { demo: true, ..ProfileArgs::default() }, true);
    assert_eq!(result.exit_code, 0, "expected demo recommendation to succeed");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "recommend");
    assert_eq!(payload["status"], "ok");
    assert_eq!(
        product_ids(&payload),
        ["ponds-dry-skin-cream", "estee-lauder-re-nutriv", "clinique-turnaround"]
    );
    assert!(payload["empty_message"].is_null());
}

#[test]
fn recommend_single_category_above_threshold_returns_one_product() {
    let cases = [
        ((0.51, 0.0, 0.0), "ponds-dry-skin-cream"),
        ((0.0, 0.71, 0.0), "estee-lauder-re-nutriv"),
        ((0.0, 0.0, 0.21), "clinique-turnaround"),
    ];

    for ((wrinkle, irritation, hyperpigmentation), expected) in cases {
        let result = recommend::run(scores(wrinkle, irritation, hyperpigmentation), true);
        assert_eq!(result.exit_code, 0);
        assert_eq!(product_ids(&parse_payload(&result.output)), [expected]);
    }
}

#[test]
fn recommend_at_thresholds_prints_fallback_message() {
    let result = recommend::run(scores(0.5, 0.7, 0.2), false);
    assert_eq!(result.exit_code, 0, "an empty recommendation is not an error");
    assert!(result.output.contains("No specific recommendations at this time."));
}

#[test]
fn recommend_human_output_lists_match_and_price() {
    let result = recommend::run(scores(0.9, 0.1, 0.1), false);
    assert_eq!(result.exit_code, 0);
    assert!(result.output.contains("1. POND'S Dry Skin Cream Facial Moisturizer (79% match, $)"));
    assert!(result.output.contains("   - Lasting moisture"));
}

#[test]
fn recommend_rejects_non_finite_scores() {
    let result = recommend::run(scores(f64::NAN, 0.1, 0.1), true);
    assert_eq!(result.exit_code, 2, "expected invalid input exit code");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error_class"], "invalid_input");
    assert!(payload["message"].as_str().is_some_and(|message| message.contains("wrinkle")));
}

#[test]
fn recommend_reports_missing_score() {
    let result = recommend::run(
        ProfileArgs { wrinkle: Some(0.2), irritation: Some(0.2), ..ProfileArgs::default() },
        true,
    );
    assert_eq!(result.exit_code, 2);
    assert!(parse_payload(&result.output)["message"]
        .as_str()
        .is_some_and(|message| message.contains("--hyperpigmentation")));
}

#[test]
fn catalog_json_lists_price_symbols() {
    let result = catalog::run(true);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let symbols: Vec<&str> = payload["products"]
        .as_array()
        .expect("products array")
        .iter()
        .map(|product| product["price_symbol"].as_str().expect("price symbol"))
        .collect();
    assert_eq!(symbols, ["$", "$$$", "$$"]);
}

#[test]
fn catalog_human_output_has_one_line_per_product() {
    let result = catalog::run(false);
    assert_eq!(result.output.lines().count(), 3);
    assert!(result.output.contains("[clinique-turnaround] 87% match, $$"));
}

#[test]
fn steps_prints_all_four_steps() {
    let result = steps::run();
    assert_eq!(result.exit_code, 0);
    for number in 1..=4 {
        assert!(result.output.contains(&format!("Step {number}: ")), "missing step {number}");
    }
}

#[test]
fn config_attributes_env_overrides() {
    with_env(&[("LUMILAB_SERVER_PORT", "9191"), ("LUMILAB_LOG_LEVEL", "debug")], || {
        let result = config::run();
        assert_eq!(result.exit_code, 0);
        assert!(result
            .output
            .contains("- server.port = 9191 (source: env (LUMILAB_SERVER_PORT))"));
        assert!(result
            .output
            .contains("- logging.level = debug (source: env (LUMILAB_LOG_LEVEL))"));
        assert!(result.output.contains("- site.mode = demo (source: default)"));
    });
}

#[test]
fn config_returns_validation_failure_for_bad_env() {
    with_env(&[("LUMILAB_SITE_MODE", "preview")], || {
        let result = config::run();
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "config");
        assert_eq!(payload["error_class"], "config_validation");
    });
}

fn scores(wrinkle: f64, irritation: f64, hyperpigmentation: f64) -> ProfileArgs {
    ProfileArgs {
        wrinkle: Some(wrinkle),
        irritation: Some(irritation),
        hyperpigmentation: Some(hyperpigmentation),
        demo: false,
    }
}

fn product_ids(payload: &Value) -> Vec<String> {
    payload["products"]
        .as_array()
        .expect("products array")
        .iter()
        .map(|product| product["id"].as_str().expect("product id").to_string())
        .collect()
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "LUMILAB_SERVER_BIND_ADDRESS",
        "LUMILAB_SERVER_PORT",
        "LUMILAB_SERVER_GRACEFUL_SHUTDOWN_SECS",
        "LUMILAB_SITE_BRAND_NAME",
        "LUMILAB_SITE_MODE",
        "LUMILAB_SITE_TEMPLATES_DIR",
        "LUMILAB_SITE_ASSETS_DIR",
        "LUMILAB_SITE_KIT_PRICE_USD",
        "LUMILAB_LOGGING_LEVEL",
        "LUMILAB_LOGGING_FORMAT",
        "LUMILAB_LOG_LEVEL",
        "LUMILAB_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
