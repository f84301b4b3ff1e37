//! End-to-end runs of the pressroom binary

use mockito::Matcher;
use serde_json::Value;

mod common;

use common::{PressTest, post_json, posts_body};

// ============================================================================
// Offline commands
// ============================================================================

#[test]
fn test_categories_lists_all() {
    let press = PressTest::new();
    let output = press.run_success(&["categories"]);
    let names: Vec<&str> = output.lines().collect();
    assert_eq!(names.len(), 8);
    assert_eq!(names[0], "Technology");
    assert!(names.contains(&"Food"));
}

#[test]
fn test_categories_json() {
    let press = PressTest::new();
    let output = press.run_success(&["categories", "--json"]);
    let json: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["categories"].as_array().unwrap().len(), 8);
}

#[test]
fn test_invalid_category_is_rejected_by_parser() {
    let press = PressTest::new();
    let stderr = press.run_failure(&["posts", "ls", "--category", "Gardening"]);
    assert!(stderr.contains("Invalid category"), "stderr: {stderr}");
}

#[test]
fn test_completions_bash() {
    let press = PressTest::new();
    let output = press.run_success(&["completions", "bash"]);
    assert!(output.contains("_pressroom"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_set_then_get() {
    let press = PressTest::new();
    press.run_success(&["config", "set", "posts.page_size", "3"]);
    let value = press.run_success(&["config", "get", "posts.page_size"]);
    assert_eq!(value.trim(), "3");
    assert!(press.config_path().exists());
}

#[test]
fn test_config_rejects_underscore_key_with_suggestion() {
    let press = PressTest::new();
    let stderr = press.run_failure(&["config", "set", "posts_page_size", "3"]);
    assert!(stderr.contains("posts.page_size"), "stderr: {stderr}");
}

#[test]
fn test_config_get_unset_key_fails() {
    let press = PressTest::new();
    let stderr = press.run_failure(&["config", "get", "author"]);
    assert!(stderr.contains("author not set"), "stderr: {stderr}");
}

#[test]
fn test_config_show_json_fills_defaults() {
    let press = PressTest::new();
    let output = press.run_success(&["config", "show", "--json"]);
    let json: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["posts"]["page_size"], 6);
    assert_eq!(json["publications"]["page_size"], 4);
    // The environment override wins over the file
    assert_eq!(json["api"]["url"], common::UNREACHABLE_API);
}

// ============================================================================
// Backend commands
// ============================================================================

#[test]
fn test_add_post_without_fields_fails_before_network() {
    let press = PressTest::new();
    let stderr = press.run_failure(&["posts", "add", "--title", "Only a title"]);
    assert!(stderr.contains("Please fill out all fields"), "stderr: {stderr}");
}

#[test]
fn test_unreachable_backend_exits_non_zero() {
    let press = PressTest::new();
    press.run_failure(&["posts", "ls"]);
}

#[test]
fn test_posts_ls_second_page_json() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/posts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(posts_body(7, "Health"))
        .create();

    let press = PressTest::with_api(&server.url());
    let output = press.run_success(&["posts", "ls", "--page", "2", "--json"]);
    let json: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["page"], 2);
    assert_eq!(json["page_count"], 2);
    assert_eq!(json["total"], 7);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"][0]["title"], "Post 7");
}

#[test]
fn test_posts_ls_no_results() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/posts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(posts_body(2, "Health"))
        .create();

    let press = PressTest::with_api(&server.url());
    let output = press.run_success(&["posts", "ls", "--search", "nothing like this"]);
    assert!(output.contains("No results found."));
}

#[test]
fn test_publications_download_writes_file() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/publications/download/b1")
        .with_status(200)
        .with_header("content-disposition", "attachment; filename=\"annual.pdf\"")
        .with_body("%PDF-1.7")
        .create();

    let press = PressTest::with_api(&server.url());
    let out_dir = press.temp_dir.path().join("downloads");
    let output = press.run_success(&[
        "publications",
        "download",
        "b1",
        "--output",
        out_dir.to_str().unwrap(),
    ]);

    let saved = out_dir.join("annual.pdf");
    assert_eq!(output.trim(), saved.display().to_string());
    assert_eq!(std::fs::read(saved).unwrap(), b"%PDF-1.7");
}

#[test]
fn test_posts_edit_keeps_unchanged_fields() {
    let mut server = mockito::Server::new();
    let existing = serde_json::json!([post_json("p1", "Old title", "Food")]);
    server
        .mock("GET", "/api/posts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(existing.to_string())
        .create();
    let put = server
        .mock("PUT", "/api/posts/p1")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="title"\s+New title"#.to_string()),
            Matcher::Regex(r#"name="category"\s+Food"#.to_string()),
            Matcher::Regex(r#"name="content"\s+Body"#.to_string()),
            Matcher::Regex(r#"name="description"\s+Summary"#.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(post_json("p1", "New title", "Food").to_string())
        .create();

    let press = PressTest::with_api(&server.url());
    let output = press.run_success(&["posts", "edit", "p1", "--title", "New title", "--json"]);

    put.assert();
    let json: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["_id"], "p1");
    assert_eq!(json["title"], "New title");
    assert_eq!(json["category"], "Food");
}
