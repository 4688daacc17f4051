use cloudnext_landing::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("CLOUDNEXT_SERVER__PORT");
        env::remove_var("CLOUDNEXT_CHAT_WIDGET__WEBSITE_TOKEN");
        env::remove_var("CLOUDNEXT_SITE__KEYWORDS");
        env::remove_var("CLOUDNEXT_CHAT_WIDGET__ENABLED");
        env::remove_var("CLOUDNEXT__SERVER__PORT");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("ASSETS_DIR");
        env::remove_var("CHAT_WIDGET_ENABLED");
    }
}

fn load(args: &[&str]) -> AppConfig {
    let mut argv = vec!["cloudnext-landing"];
    argv.extend_from_slice(args);
    AppConfig::load_from_args(argv).expect("Failed to load config")
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load(&[]);
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.assets_dir, PathBuf::from("public"));
    assert_eq!(config.site.lang, "es");
    assert_eq!(config.site.page_title(Some("Inicio")), "Inicio | CloudNext");
    assert_eq!(config.site.keywords.len(), 6);
    assert!(config.chat_widget.enabled);
    // No token configured, so the widget stays off
    assert!(!config.chat_widget.is_active());
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("CLOUDNEXT_SERVER__PORT", "9090");
        env::set_var("CLOUDNEXT_CHAT_WIDGET__WEBSITE_TOKEN", "tok_env");
    }

    let config = load(&[]);
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.chat_widget.website_token, "tok_env");
    assert!(config.chat_widget.is_active());

    clear_env_vars();
}

#[test]
#[serial]
fn test_double_underscore_after_prefix_is_ignored() {
    clear_env_vars();
    unsafe {
        env::set_var("CLOUDNEXT__SERVER__PORT", "9191");
    }

    let config = load(&[]);
    assert_eq!(config.server.port, 3000);

    clear_env_vars();
}

#[test]
#[serial]
fn test_env_disables_chat_widget() {
    clear_env_vars();
    unsafe {
        env::set_var("CLOUDNEXT_CHAT_WIDGET__WEBSITE_TOKEN", "tok_env");
        env::set_var("CLOUDNEXT_CHAT_WIDGET__ENABLED", "false");
    }

    let config = load(&[]);
    assert_eq!(config.chat_widget.website_token, "tok_env");
    assert!(!config.chat_widget.enabled);
    assert!(!config.chat_widget.is_active());

    clear_env_vars();
}

#[test]
#[serial]
fn test_keywords_from_env_list() {
    clear_env_vars();
    unsafe {
        env::set_var("CLOUDNEXT_SITE__KEYWORDS", "cloud,automatización");
    }

    let config = load(&[]);
    assert_eq!(config.site.keywords, vec!["cloud", "automatización"]);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env_vars();
    unsafe {
        env::set_var("CLOUDNEXT_SERVER__PORT", "9090");
        env::set_var("CLOUDNEXT_CHAT_WIDGET__ENABLED", "true");
        env::set_var("CLOUDNEXT_CHAT_WIDGET__WEBSITE_TOKEN", "tok_env");
    }

    // The prefixed env alone is honored...
    let from_env = load(&[]);
    assert_eq!(from_env.server.port, 9090);
    assert!(from_env.chat_widget.is_active());

    // ...and CLI flags beat it
    let config = load(&[
        "--port",
        "4000",
        "--host",
        "127.0.0.1",
        "--assets-dir",
        "/srv/site",
        "--chat-widget-enabled",
        "false",
    ]);
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.server.bind_address(), "127.0.0.1:4000");
    assert_eq!(config.server.images_dir(), PathBuf::from("/srv/site/images"));
    assert!(!config.chat_widget.enabled);
    assert!(!config.chat_widget.is_active());

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("landing.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
chat_widget:
  base_url: "https://chat.example.com"
  website_token: "tok_file"
site:
  title_template: "%s · CloudNext"
"#,
    )
    .expect("Failed to write temp config");

    // Tell AppConfig to use this file via Env Var
    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = load(&[]);
    assert_eq!(config.server.port, 7070);
    assert_eq!(
        config.chat_widget.sdk_url(),
        "https://chat.example.com/packs/js/sdk.js"
    );
    assert!(config.chat_widget.is_active());
    assert_eq!(config.site.page_title(Some("Blog")), "Blog · CloudNext");
    // Untouched keys keep their defaults
    assert_eq!(config.server.host, "0.0.0.0");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_fails() {
    clear_env_vars();

    let result = AppConfig::load_from_args([
        "cloudnext-landing",
        "--config",
        "/nonexistent/landing.yaml",
    ]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    // Create ./config.yaml
    let config_content = r#"
server:
  port: 6060
    "#;
    let cwd_path = "config.yaml";
    fs::write(cwd_path, config_content).expect("Failed to write ./config.yaml");

    // No Env var, No CLI: should pick up ./config.yaml
    let config = AppConfig::load_from_args(["cloudnext-landing"]);

    fs::remove_file(cwd_path).expect("Failed to remove ./config.yaml");

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
