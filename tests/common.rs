#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wheelgauge::config::Config;
use wheelgauge::core::auth::AccessGate;

/// Isolated HOME for one test: config, record file and audit log live under it.
pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("temp home"),
        }
    }

    pub fn wg(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("wheelgauge");
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path());
        cmd
    }

    pub fn config_dir(&self) -> PathBuf {
        let dir = if cfg!(target_os = "windows") {
            "wheelgauge"
        } else {
            ".wheelgauge"
        };
        self.home.path().join(dir)
    }

    pub fn store(&self) -> PathBuf {
        self.config_dir().join("wheelgauge.csv")
    }

    /// Run `init` and write a config whose secret is `secret` (cheap bcrypt cost).
    pub fn init_with_secret(&self, secret: &str) {
        self.wg().arg("init").assert().success();

        let cfg = Config {
            store: self.store().to_string_lossy().to_string(),
            audit: self
                .config_dir()
                .join("wheelgauge.sqlite")
                .to_string_lossy()
                .to_string(),
            secret_hash: Some(AccessGate::hash_secret_with_cost(secret, 4).expect("hash")),
            ..Config::default()
        };
        fs::write(
            self.config_dir().join("wheelgauge.conf"),
            cfg.to_yaml().expect("yaml"),
        )
        .expect("write config");
    }

    pub fn add(&self, line: &str, car: &str, diameter: &str, date: &str, reason: &str) {
        self.wg()
            .args([
                "add",
                "--line",
                line,
                "--car",
                car,
                "--diameter",
                diameter,
                "--date",
                date,
                "--modifier",
                "chen",
                "--reason",
                reason,
            ])
            .assert()
            .success();
    }

    pub fn store_content(&self) -> String {
        fs::read_to_string(self.store()).expect("read store")
    }
}
