#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Origin nothing listens on, so network calls fail fast
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

pub fn pressroom_binary() -> &'static str {
    env!("CARGO_BIN_EXE_pressroom")
}

/// Helper struct to run pressroom with its own config file and backend
pub struct PressTest {
    pub temp_dir: TempDir,
    api_url: String,
}

impl PressTest {
    pub fn new() -> Self {
        Self::with_api(UNREACHABLE_API)
    }

    pub fn with_api(api_url: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        PressTest {
            temp_dir,
            api_url: api_url.to_string(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(pressroom_binary())
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("PRESSROOM_CONFIG", self.config_path())
            .env("PRESSROOM_API_URL", &self.api_url)
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute pressroom command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Write a file into the temp directory and return its path
    pub fn write_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }
}

/// A post as the backend serializes it
pub fn post_json(id: &str, title: &str, category: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "category": category,
        "author": "Seyi Adisa",
        "date": "2026-10-16T15:04:00.000Z",
        "image": format!("uploads\\{id}.png"),
        "content": "Body",
        "description": "Summary",
        "__v": 0
    })
}

pub fn publication_json(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "description": "About",
        "image": format!("uploads/{id}.png"),
        "pdfFile": format!("uploads/{id}.pdf"),
    })
}

/// `count` posts titled "Post 1".."Post N", all in `category`
pub fn posts_body(count: usize, category: &str) -> String {
    let posts: Vec<Value> = (1..=count)
        .map(|i| post_json(&format!("p{i}"), &format!("Post {i}"), category))
        .collect();
    Value::Array(posts).to_string()
}
