//! Configuration precedence: flags > environment > config file > defaults.

#![cfg(unix)]

mod common;

use common::TestEnv;

const PROJECT_CONFIG: &str = r#"[app]
name = "from-file"

[cli]
profile = "dev"
"#;

#[test]
fn project_config_in_source_dir_is_used() {
    let env = TestEnv::new();
    env.write("appdeploy.toml", PROJECT_CONFIG);

    let result = env.run(&["status"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_eq!(env.calls(), vec!["apps get from-file --profile dev".to_string()]);
}

#[test]
fn environment_beats_config_file() {
    let env = TestEnv::new();
    env.write("appdeploy.toml", PROJECT_CONFIG);

    env.run_with_env(
        &["status"],
        &[("APPDEPLOY_APP", "from-env"), ("APPDEPLOY_PROFILE", "ci")],
    );

    assert_eq!(env.calls(), vec!["apps get from-env --profile ci".to_string()]);
}

#[test]
fn flags_beat_environment() {
    let env = TestEnv::new();
    env.write("appdeploy.toml", PROJECT_CONFIG);

    env.run_with_env(
        &["status", "--app", "from-flag", "--profile", "prod"],
        &[("APPDEPLOY_APP", "from-env"), ("APPDEPLOY_PROFILE", "ci")],
    );

    assert_eq!(
        env.calls(),
        vec!["apps get from-flag --profile prod".to_string()]
    );
}

#[test]
#[cfg(target_os = "linux")]
fn user_config_is_the_fallback() {
    let env = TestEnv::new();
    let user_config = env.home_dir.path().join(".config/appdeploy/config.toml");
    std::fs::create_dir_all(user_config.parent().unwrap()).unwrap();
    std::fs::write(&user_config, "[app]\nname = \"from-user\"\n").unwrap();

    env.run(&["status"]);

    assert_eq!(env.calls(), vec!["apps get from-user".to_string()]);
}

#[test]
fn explicit_config_flag() {
    let env = TestEnv::new();
    env.write("appdeploy.toml", PROJECT_CONFIG);
    env.write("ci/appdeploy.toml", "[app]\nname = \"from-explicit\"\n");

    env.run(&["status", "--config", "ci/appdeploy.toml"]);

    assert_eq!(env.calls(), vec!["apps get from-explicit".to_string()]);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let env = TestEnv::new();

    let result = env.run(&["status", "--config", "nope.toml"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("config file not found: nope.toml"));
    assert!(env.calls().is_empty());
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write("appdeploy.toml", "[cli]\nprofle = \"dev\"\n");

    let result = env.run(&["status"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert!(result
        .stderr
        .contains("⚠ Unknown config key 'profle' in ./appdeploy.toml:2"));
    assert!(result.stderr.contains("Did you mean 'profile'?"));
}

#[test]
fn deploy_source_from_config() {
    let env = TestEnv::new();
    env.write("appdeploy.toml", "[deploy]\nsource = \"web\"\n");
    env.write("web/app.py", "print('web')\n");

    let result = env.run(&[]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert!(env.step_calls()[1].starts_with("sync --full web "));
}

#[test]
fn cli_program_from_environment() {
    let env = TestEnv::new();

    let result = env.run_with_env(&["status"], &[("APPDEPLOY_CLI", "/nonexistent/dbx")]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("/nonexistent/dbx"));
}

#[test]
fn unknown_config_key_is_a_json_warning_event() {
    let env = TestEnv::new();
    env.write("appdeploy.toml", "[cli]\nprofle = \"dev\"\n");

    let result = env.run(&["status", "--json"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let warning = events.iter().find(|e| e["event"] == "warning").unwrap();
    assert_eq!(warning["key"], "profle");
    assert_eq!(warning["line"], 2);
    assert_eq!(warning["suggestion"], "profile");
    assert_eq!(events.last().unwrap()["event"], "status");
}
