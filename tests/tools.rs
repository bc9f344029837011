//! Local Tool Set Integration Tests
//!
//! Verifies the filesystem implementation against a real temporary
//! directory.

use forgeflow::tools::{ListFilesArgs, ReadFileArgs, ToolSet, WriteFileArgs};
use forgeflow::LocalToolSet;

#[tokio::test]
async fn test_write_then_read_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let tools = LocalToolSet::new(dir.path());

    tools
        .write_file(WriteFileArgs {
            path: "index.html".to_string(),
            content: "<html></html>".to_string(),
        })
        .await
        .unwrap();

    let content = tools
        .read_file(ReadFileArgs {
            path: "index.html".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(content, "<html></html>");
    assert!(dir.path().join("index.html").exists());
}

#[tokio::test]
async fn test_write_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let tools = LocalToolSet::new(dir.path());

    tools
        .write_file(WriteFileArgs {
            path: "src/js/app.js".to_string(),
            content: "console.log('hi');".to_string(),
        })
        .await
        .unwrap();

    assert!(dir.path().join("src/js/app.js").exists());
}

#[tokio::test]
async fn test_list_files_returns_written_files() {
    let dir = tempfile::tempdir().unwrap();
    let tools = LocalToolSet::new(dir.path());

    for name in ["a.txt", "b.txt"] {
        tools
            .write_file(WriteFileArgs {
                path: name.to_string(),
                content: String::new(),
            })
            .await
            .unwrap();
    }

    let listed = tools
        .list_files(ListFilesArgs {
            directory: ".".to_string(),
        })
        .await
        .unwrap();

    let names: Vec<_> = listed
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();
    assert!(names.contains(&"a.txt"));
    assert!(names.contains(&"b.txt"));
}

#[tokio::test]
async fn test_read_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let tools = LocalToolSet::new(dir.path());

    let result = tools
        .read_file(ReadFileArgs {
            path: "nope.txt".to_string(),
        })
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_current_dir_matches_root() {
    let dir = tempfile::tempdir().unwrap();
    let tools = LocalToolSet::new(dir.path());

    assert_eq!(tools.current_dir().await.unwrap(), dir.path());
}
