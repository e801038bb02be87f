//! End-to-end runs of the harvesting pipeline against a mock server.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::Local;
use file_harvester::{Config, Fetcher, OrganizationRule, Pipeline, RunReport};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    _dir: TempDir,
    base: PathBuf,
    history: PathBuf,
}

impl Harness {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let base = dir.path().join("downloads");
        let history = dir.path().join("history.json");
        Self {
            _dir: dir,
            base,
            history,
        }
    }

    fn config(&self, targets: Vec<String>, rule: OrganizationRule) -> Config {
        Config {
            target_urls: targets,
            download_base_folder: self.base.clone(),
            organization_rule: rule,
            allowed_extensions: vec![".pdf".into(), ".csv".into(), ".txt".into()],
            request_delay_seconds: 0.0,
            download_history_file: self.history.clone(),
            ..Default::default()
        }
    }

    fn history_entries(&self) -> Vec<String> {
        let raw = fs::read_to_string(&self.history).expect("history file");
        serde_json::from_str(&raw).expect("history json")
    }
}

async fn run(config: &Config, force: bool) -> RunReport {
    let fetcher = Fetcher::new("file-harvester-tests").expect("client");
    Pipeline::new(config, fetcher)
        .force_download(force)
        .run()
        .await
}

async fn mount_page(server: &MockServer, page_path: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(html.to_string()))
        .mount(server)
        .await;
}

async fn mount_file(server: &MockServer, file_path: &str, body: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(file_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("organized file")
}

#[tokio::test]
async fn test_run_organizes_by_type_and_records_history() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/files/",
        r#"<html><body>
            <a href="report.pdf">Report</a>
            <a href="/data/table.CSV">Table</a>
            <a href="about.html">About</a>
            <a href="report.pdf">Report again</a>
        </body></html>"#,
    )
    .await;
    mount_file(&server, "/files/report.pdf", "pdf-bytes", 1).await;
    mount_file(&server, "/data/table.CSV", "a,b", 1).await;

    let harness = Harness::new();
    let config = harness.config(
        vec![format!("{}/files/", server.uri())],
        OrganizationRule::Type,
    );

    let report = run(&config, false).await;

    assert_eq!(report.stats.pages_fetched, 1);
    assert_eq!(report.stats.links_found, 2);
    assert_eq!(report.stats.files_organized, 2);
    assert_eq!(report.history_added, 2);
    assert!(report.history_saved);

    assert_eq!(read(&harness.base.join("Pdf").join("report.pdf")), "pdf-bytes");
    assert_eq!(read(&harness.base.join("Csv").join("table.CSV")), "a,b");
    assert!(!harness.base.join("report.pdf").exists());

    let mut entries = harness.history_entries();
    entries.sort();
    assert_eq!(
        entries,
        vec![
            format!("{}/data/table.CSV", server.uri()),
            format!("{}/files/report.pdf", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_second_run_skips_files_in_history() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="notes.txt">notes</a>"#).await;
    // Exactly one download across both runs
    mount_file(&server, "/notes.txt", "hello", 1).await;

    let harness = Harness::new();
    let config = harness.config(vec![format!("{}/", server.uri())], OrganizationRule::Type);

    let first = run(&config, false).await;
    assert_eq!(first.stats.files_organized, 1);

    let second = run(&config, false).await;
    assert_eq!(second.stats.files_organized, 0);
    assert_eq!(second.stats.skipped_in_history, 1);
    assert_eq!(second.history_added, 0);
    assert!(!second.history_saved);

    assert_eq!(harness.history_entries().len(), 1);
}

#[tokio::test]
async fn test_force_download_refetches_without_duplicating_history() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="notes.txt">notes</a>"#).await;
    mount_file(&server, "/notes.txt", "fresh", 1).await;

    let harness = Harness::new();
    let link = format!("{}/notes.txt", server.uri());
    fs::write(&harness.history, serde_json::to_string(&vec![&link]).unwrap()).unwrap();

    let config = harness.config(vec![format!("{}/", server.uri())], OrganizationRule::Type);
    let report = run(&config, true).await;

    assert_eq!(report.stats.skipped_in_history, 0);
    assert_eq!(report.stats.files_organized, 1);
    assert_eq!(report.history_added, 0);
    assert_eq!(read(&harness.base.join("Txt").join("notes.txt")), "fresh");
    assert_eq!(harness.history_entries(), vec![link]);
}

#[tokio::test]
async fn test_corrupt_history_is_treated_as_empty() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="a.pdf">a</a>"#).await;
    mount_file(&server, "/a.pdf", "a", 1).await;

    let harness = Harness::new();
    fs::write(&harness.history, "this is not json").unwrap();

    let config = harness.config(vec![format!("{}/", server.uri())], OrganizationRule::Type);
    let report = run(&config, false).await;

    assert_eq!(report.stats.files_organized, 1);
    assert!(report.history_saved);
    assert_eq!(
        harness.history_entries(),
        vec![format!("{}/a.pdf", server.uri())]
    );
}

#[tokio::test]
async fn test_collisions_across_pages_get_numbered() {
    let server = MockServer::start().await;
    mount_page(&server, "/one/", r#"<a href="a.txt">a</a>"#).await;
    mount_page(&server, "/two/", r#"<a href="a.txt">a</a>"#).await;
    mount_file(&server, "/one/a.txt", "first", 1).await;
    mount_file(&server, "/two/a.txt", "second", 1).await;

    let harness = Harness::new();
    let config = harness.config(
        vec![
            format!("{}/one/", server.uri()),
            format!("{}/two/", server.uri()),
        ],
        OrganizationRule::Type,
    );

    let report = run(&config, false).await;

    assert_eq!(report.stats.files_organized, 2);
    assert_eq!(read(&harness.base.join("Txt").join("a.txt")), "first");
    assert_eq!(read(&harness.base.join("Txt").join("a(1).txt")), "second");
}

#[tokio::test]
async fn test_date_rules_use_todays_folder() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="d.csv">d</a><a href="r.pdf">r</a>"#).await;
    mount_file(&server, "/d.csv", "1,2", 1).await;
    mount_file(&server, "/r.pdf", "pdf", 1).await;

    let harness = Harness::new();
    let config = harness.config(
        vec![format!("{}/", server.uri())],
        OrganizationRule::TypeThenDate,
    );

    let before = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let report = run(&config, false).await;
    let after = Local::now().date_naive().format("%Y-%m-%d").to_string();

    assert_eq!(report.stats.files_organized, 2);

    // The run may straddle midnight; accept either day
    let organized_under = |ext: &str, name: &str| {
        [&before, &after]
            .iter()
            .any(|day| harness.base.join(ext).join(day).join(name).exists())
    };
    assert!(organized_under("Csv", "d.csv"));
    assert!(organized_under("Pdf", "r.pdf"));
}

#[tokio::test]
async fn test_unknown_rule_leaves_files_staged_and_history_untouched() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="a.pdf">a</a>"#).await;
    mount_file(&server, "/a.pdf", "a", 1).await;

    let harness = Harness::new();
    let config = harness.config(
        vec![format!("{}/", server.uri())],
        OrganizationRule::Unknown("by_size".into()),
    );

    let report = run(&config, false).await;

    assert_eq!(report.stats.organize_failed, 1);
    assert_eq!(report.stats.files_organized, 0);
    assert!(!report.history_saved);
    assert_eq!(read(&harness.base.join("a.pdf")), "a");
    assert!(!harness.history.exists());
}

#[tokio::test]
async fn test_failures_are_isolated_per_page_and_link() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/down/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_page(
        &server,
        "/up/",
        r#"<a href="gone.pdf">gone</a><a href="ok.pdf">ok</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/up/gone.pdf"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_file(&server, "/up/ok.pdf", "ok", 1).await;

    let harness = Harness::new();
    let config = harness.config(
        vec![
            "not a url".to_string(),
            format!("{}/down/", server.uri()),
            format!("{}/up/", server.uri()),
        ],
        OrganizationRule::Type,
    );

    let report = run(&config, false).await;

    assert_eq!(report.stats.pages_failed, 2);
    assert_eq!(report.stats.pages_fetched, 1);
    assert_eq!(report.stats.fetch_failed, 1);
    assert_eq!(report.stats.files_organized, 1);
    assert_eq!(read(&harness.base.join("Pdf").join("ok.pdf")), "ok");
    assert_eq!(
        harness.history_entries(),
        vec![format!("{}/up/ok.pdf", server.uri())]
    );
}

#[tokio::test]
async fn test_page_without_links_still_finishes() {
    let server = MockServer::start().await;
    mount_page(&server, "/", "<p>nothing here</p>").await;

    let harness = Harness::new();
    let config = harness.config(vec![format!("{}/", server.uri())], OrganizationRule::Date);

    let report = run(&config, false).await;

    assert_eq!(report.stats.pages_fetched, 1);
    assert_eq!(report.stats.links_found, 0);
    assert!(!report.history_saved);
    assert!(harness.base.is_dir());
}

const DELAY: Duration = Duration::from_millis(400);

fn with_delay(mut config: Config) -> Config {
    config.request_delay_seconds = DELAY.as_secs_f64();
    config
}

#[tokio::test]
async fn test_delay_follows_fetched_links_only() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="a.pdf">a</a><a href="b.pdf">b</a>"#).await;
    mount_file(&server, "/a.pdf", "a", 0).await;
    mount_file(&server, "/b.pdf", "b", 1).await;

    let harness = Harness::new();
    let known = format!("{}/a.pdf", server.uri());
    fs::write(&harness.history, serde_json::to_string(&vec![&known]).unwrap()).unwrap();

    let config = with_delay(harness.config(
        vec![format!("{}/", server.uri())],
        OrganizationRule::Type,
    ));

    let started = Instant::now();
    let report = run(&config, false).await;
    let elapsed = started.elapsed();

    assert_eq!(report.stats.skipped_in_history, 1);
    assert_eq!(report.stats.files_organized, 1);
    // One pause after b.pdf; none for the skipped link or after the last page
    assert!(elapsed >= DELAY, "elapsed {elapsed:?}");
    assert!(elapsed < DELAY * 2, "elapsed {elapsed:?}");
}

#[tokio::test]
async fn test_delay_between_pages() {
    let server = MockServer::start().await;
    mount_page(&server, "/one/", r#"<a href="c.pdf">c</a>"#).await;
    mount_page(&server, "/two/", "<p>empty</p>").await;
    mount_file(&server, "/one/c.pdf", "c", 1).await;

    let harness = Harness::new();
    let config = with_delay(harness.config(
        vec![
            format!("{}/one/", server.uri()),
            format!("{}/two/", server.uri()),
        ],
        OrganizationRule::Type,
    ));

    let started = Instant::now();
    let report = run(&config, false).await;
    let elapsed = started.elapsed();

    assert_eq!(report.stats.pages_fetched, 2);
    assert_eq!(report.stats.files_organized, 1);
    // After c.pdf, then between the two pages
    assert!(elapsed >= DELAY * 2, "elapsed {elapsed:?}");
    assert!(elapsed < DELAY * 3, "elapsed {elapsed:?}");
}
