
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Point GS_CONFIG_DIR at a fresh temp directory and clear the override vars
/// that would leak between tests.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let guards = vec![
        EnvGuard::set("GS_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::remove("GS_SERVER_HOST"),
        EnvGuard::remove("GS_SERVER_PORT"),
        EnvGuard::remove("GS_DATABASE_PATH"),
        EnvGuard::remove("GS_AUTH_JWT_SECRET"),
        EnvGuard::remove("GS_AUTH_JWT_PUBLIC_KEY_PATH"),
        EnvGuard::remove("GS_LOG_LEVEL"),
    ];

    (temp, guards)
}

pub(crate) fn write_config_toml(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join("config.toml"), contents).expect("Failed to write config.toml");
}
