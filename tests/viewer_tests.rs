// Integration tests for loading, selecting and remembering content

use std::fs;
use std::path::Path;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use satview::content::model::LectureManifest;
use satview::content::ContentSource;
use satview::error::{FetchError, ERROR_TITLE};
use satview::session::{FileStore, MemoryStore, SessionStore, MATH_LAST, RW_LAST};
use satview::viewer::{Domain, Selection, Viewer};

const MANIFEST: &str = r#"[
    {"label": "Words in Context", "file": "words.json"},
    {"label": "Transitions", "file": "transitions.json"},
    {"label": "Boundaries", "file": "boundaries.json"}
]"#;

const LECTURES: &str = r#"{"units": [
    {"unitTitle": "Linear Equations", "slug": "linear", "lectures": [
        {"title": "Slope", "contentHtml": "<p>Rise over run.</p>"}
    ]},
    {"unitTitle": "Quadratics", "slug": "quadratics", "lectures": [
        {"title": "Vertex Form", "contentHtml": "<p>y = a(x - h)<sup>2</sup> + k</p>"}
    ]}
]}"#;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, body).expect("write");
}

fn content_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    write(root, "Reading_and_Writing/lessons_manifest.json", MANIFEST);
    write(
        root,
        "Reading_and_Writing/words.json",
        r#"{"unit_title": "Words in Context", "total_mastery_points": 80}"#,
    );
    write(
        root,
        "Reading_and_Writing/transitions.json",
        r#"{"unit_title": "Transitions", "homework": ["Practice set B"]}"#,
    );
    write(
        root,
        "Reading_and_Writing/boundaries.json",
        r#"{"unit_title": "Boundaries"}"#,
    );
    write(root, "Math/lectures.json", LECTURES);
    dir
}

fn source(root: &Path) -> ContentSource {
    ContentSource::Directory(root.to_path_buf())
}

/// Serve `routes` (request path, JSON body) over plain HTTP; anything else is a 404.
/// Returns the base URL, without a trailing slash.
async fn serve(routes: Vec<(&'static str, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let request = String::from_utf8_lossy(&request);
            let path = request.split_whitespace().nth(1).unwrap_or("/");
            let (status, body) = match routes.iter().find(|(route, _)| *route == path) {
                Some((_, body)) => ("200 OK", *body),
                None => ("404 Not Found", ""),
            };
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/content", addr)
}

#[tokio::test]
async fn test_http_source_missing_manifest_only_fails_reading() {
    let base = serve(vec![("/content/Math/lectures.json", LECTURES)]).await;
    let source = ContentSource::parse(&base).expect("http source");

    let err = source
        .fetch_json::<LectureManifest>("Reading_and_Writing/lessons_manifest.json")
        .await
        .expect_err("manifest is not served");
    assert!(matches!(err, FetchError::Status { status: 404, .. }));

    let viewer = Viewer::start(source, Box::new(MemoryStore::new())).await;
    assert_eq!(viewer.reading.view.title, ERROR_TITLE);
    assert!(viewer.reading.catalog.is_empty());
    assert_eq!(viewer.math.view.title, "Linear Equations");
    assert_eq!(viewer.math.catalog.len(), 2);
}

#[tokio::test]
async fn test_http_source_loads_both_domains() {
    let base = serve(vec![
        (
            "/content/Reading_and_Writing/lessons_manifest.json",
            r#"[{"label": "Words in Context", "file": "words.json"}]"#,
        ),
        (
            "/content/Reading_and_Writing/words.json",
            r#"{"unit_title": "Words in Context"}"#,
        ),
        ("/content/Math/lectures.json", LECTURES),
    ])
    .await;
    let source = ContentSource::parse(&base).expect("http source");

    let viewer = Viewer::start(source, Box::new(MemoryStore::new())).await;
    assert_eq!(viewer.reading.view.title, "Words in Context");
    assert_eq!(viewer.math.view.title, "Linear Equations");
}

#[tokio::test]
async fn test_first_items_selected_without_history() {
    let root = content_root();
    let viewer = Viewer::start(source(root.path()), Box::new(MemoryStore::new())).await;

    assert_eq!(viewer.reading.view.title, "Words in Context");
    assert_eq!(viewer.reading.catalog.active_key(), Some("words.json"));
    assert_eq!(viewer.math.view.title, "Linear Equations");
    assert_eq!(viewer.math.catalog.active_key(), Some("linear"));
}

#[tokio::test]
async fn test_selection_survives_restart() {
    let root = content_root();
    let state_dir = tempfile::tempdir().expect("tempdir");
    let state = state_dir.path().join("state.toml");

    {
        let store = FileStore::open(&state).expect("open state");
        let mut viewer = Viewer::start(source(root.path()), Box::new(store)).await;

        viewer.move_cursor(Domain::ReadingWriting, 2);
        match viewer.select(Domain::ReadingWriting).await {
            Selection::Opened(label) => assert_eq!(label, "Boundaries"),
            other => panic!("unexpected selection {:?}", other),
        }

        viewer.move_cursor(Domain::Math, 1);
        assert!(matches!(
            viewer.select(Domain::Math).await,
            Selection::Opened(_)
        ));
    }

    let store = FileStore::open(&state).expect("reopen state");
    assert_eq!(store.get(RW_LAST).as_deref(), Some("boundaries.json"));
    assert_eq!(store.get(MATH_LAST).as_deref(), Some("quadratics"));

    let viewer = Viewer::start(source(root.path()), Box::new(store)).await;
    assert_eq!(viewer.reading.view.title, "Boundaries");
    assert_eq!(viewer.reading.catalog.active_key(), Some("boundaries.json"));
    assert_eq!(viewer.math.view.title, "Quadratics");
}

#[tokio::test]
async fn test_selecting_from_filtered_list() {
    let root = content_root();
    let mut viewer = Viewer::start(source(root.path()), Box::new(MemoryStore::new())).await;

    for c in "TRANS".chars() {
        viewer.push_filter_char(Domain::ReadingWriting, c);
    }
    let visible: Vec<_> = viewer
        .reading
        .catalog
        .visible()
        .filter_map(|e| e.label.as_deref())
        .collect();
    assert_eq!(visible, vec!["Transitions"]);

    assert!(matches!(
        viewer.select(Domain::ReadingWriting).await,
        Selection::Opened(ref label) if label == "Transitions"
    ));
    let lines = viewer.reading.view.to_plain_lines();
    assert!(lines.contains(&"## Homework".to_string()));
    assert!(lines.contains(&"- Practice set B".to_string()));
}

#[tokio::test]
async fn test_stale_persisted_key_falls_back_to_first() {
    let root = content_root();
    let mut store = MemoryStore::new();
    store.set(RW_LAST, "retired.json").expect("set");
    store.set(MATH_LAST, "retired").expect("set");

    let viewer = Viewer::start(source(root.path()), Box::new(store)).await;
    assert_eq!(viewer.reading.view.title, "Words in Context");
    assert_eq!(viewer.math.view.title, "Linear Equations");
}

#[tokio::test]
async fn test_math_failure_leaves_reading_alone() {
    let root = content_root();
    fs::remove_file(root.path().join("Math/lectures.json")).expect("remove");

    let viewer = Viewer::start(source(root.path()), Box::new(MemoryStore::new())).await;
    assert_eq!(viewer.math.view.title, ERROR_TITLE);
    assert!(viewer.math.catalog.is_empty());
    assert_eq!(viewer.reading.view.title, "Words in Context");
    assert_eq!(viewer.reading.catalog.len(), 3);
}

#[tokio::test]
async fn test_reading_failure_leaves_math_alone() {
    let root = content_root();
    write(
        root.path(),
        "Reading_and_Writing/lessons_manifest.json",
        "not json at all",
    );

    let viewer = Viewer::start(source(root.path()), Box::new(MemoryStore::new())).await;
    assert_eq!(viewer.reading.view.title, ERROR_TITLE);
    assert_eq!(viewer.math.view.title, "Linear Equations");
}

#[tokio::test]
async fn test_missing_initial_lesson_keeps_list() {
    let root = content_root();
    fs::remove_file(root.path().join("Reading_and_Writing/words.json")).expect("remove");

    let mut viewer = Viewer::start(source(root.path()), Box::new(MemoryStore::new())).await;
    assert_eq!(viewer.reading.view.title, ERROR_TITLE);
    assert_eq!(viewer.reading.catalog.len(), 3);

    viewer.move_cursor(Domain::ReadingWriting, 1);
    assert!(matches!(
        viewer.select(Domain::ReadingWriting).await,
        Selection::Opened(_)
    ));
    assert_eq!(viewer.reading.view.title, "Transitions");
}

#[tokio::test]
async fn test_failed_selection_is_not_remembered() {
    let root = content_root();
    fs::remove_file(root.path().join("Reading_and_Writing/boundaries.json")).expect("remove");
    let state_dir = tempfile::tempdir().expect("tempdir");
    let state = state_dir.path().join("state.toml");

    {
        let store = FileStore::open(&state).expect("open state");
        let mut viewer = Viewer::start(source(root.path()), Box::new(store)).await;
        viewer.move_cursor(Domain::ReadingWriting, -1);
        assert!(matches!(
            viewer.select(Domain::ReadingWriting).await,
            Selection::Failed(_)
        ));
        assert_eq!(viewer.reading.view.title, "Words in Context");
    }

    let store = FileStore::open(&state).expect("reopen state");
    assert!(store.get(RW_LAST).is_none());
}

#[tokio::test]
async fn test_sparse_documents_render_fallbacks() {
    let root = content_root();
    write(
        root.path(),
        "Reading_and_Writing/lessons_manifest.json",
        r#"[{"label": "Bare", "file": "bare.json"}]"#,
    );
    write(root.path(), "Reading_and_Writing/bare.json", "{}");
    write(root.path(), "Math/lectures.json", r#"{"units": [{"lectures": [{}]}]}"#);

    let viewer = Viewer::start(source(root.path()), Box::new(MemoryStore::new())).await;

    assert_eq!(viewer.reading.view.title, "Lesson");
    assert_eq!(viewer.reading.view.meta, vec!["SAT R&W", "Mastery: 0"]);

    assert_eq!(viewer.math.view.title, "Unit");
    assert_eq!(
        viewer.math.view.to_plain_lines(),
        vec!["Unit".to_string(), "## Lecture".to_string()]
    );
}

#[tokio::test]
async fn test_empty_filter_result_selects_nothing() {
    let root = content_root();
    let mut viewer = Viewer::start(source(root.path()), Box::new(MemoryStore::new())).await;
    for c in "zzz".chars() {
        viewer.push_filter_char(Domain::Math, c);
    }
    assert!(matches!(viewer.select(Domain::Math).await, Selection::Nothing));
    assert_eq!(viewer.math.view.title, "Linear Equations");
}
