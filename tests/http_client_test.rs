use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use surf_scraper::apis::SurfReportClient;
use surf_scraper::config::{Config, HttpConfig};
use surf_scraper::parser::PhpDumpExtractor;
use surf_scraper::types::PageFetcher;
use surf_scraper::{Pipeline, ScraperError};
use tempfile::tempdir;

const PAGE: &str = "<pre>array(1) {
  [\"2025-10-18 09:00:00\"]=>
  object(stdClass)#12 (4) {
    [\"houle\"]=>
    string(3) \"1.1\"
    [\"houleMax\"]=>
    string(3) \"1.6\"
    [\"ventMoyen\"]=>
    string(2) \"18\"
    [\"directionVent\"]=>
    string(3) \"300\"
  }
}</pre>";

/// Default settings without environment proxies, so requests reach the local stub.
fn direct() -> HttpConfig {
    HttpConfig {
        system_proxy: false,
        ..HttpConfig::default()
    }
}

/// Serves a single canned HTTP response and reports the raw request it received.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "{}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
    });

    (format!("http://{}/meteo-surf/lacanau-s1043.html", addr), rx)
}

#[test]
fn test_sends_identifying_headers() {
    let (url, rx) = serve_once("HTTP/1.1 200 OK", PAGE);
    let client = SurfReportClient::new(&direct()).unwrap();

    let body = client.fetch(&url).unwrap();
    assert_eq!(body, PAGE);

    let request = rx.recv_timeout(Duration::from_secs(5)).unwrap().to_lowercase();
    assert!(request.starts_with("get /meteo-surf/lacanau-s1043.html"));
    assert!(request.contains("user-agent: mozilla/5.0 (compatible; surf_scrap/1.0; +https://www.surf-report.com/)"));
    assert!(request.contains("accept-language: fr-fr,fr;q=0.9,en;q=0.7"));
}

#[test]
fn test_non_success_status_is_network_error() {
    let (url, _rx) = serve_once("HTTP/1.1 404 Not Found", "gone");
    let client = SurfReportClient::new(&direct()).unwrap();

    let err = client.fetch(&url).unwrap_err();
    assert!(err.is_network());
    assert!(matches!(err, ScraperError::HttpStatus { status: 404, .. }));
}

#[test]
fn test_invalid_url_is_network_error() {
    let client = SurfReportClient::new(&direct()).unwrap();
    let err = client.fetch("not a url").unwrap_err();
    assert!(matches!(err, ScraperError::Network(_)));
}

#[test]
fn test_timeout_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        // Accept and hold the connection without answering
        let (_stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(5));
    });

    let config = HttpConfig {
        timeout_seconds: 1,
        ..direct()
    };
    let client = SurfReportClient::new(&config).unwrap();

    let err = client.fetch(&format!("http://{}/", addr)).unwrap_err();
    assert!(matches!(err, ScraperError::Network(_)));
}

#[test]
fn test_pipeline_over_http() {
    let (url, _rx) = serve_once("HTTP/1.1 200 OK", PAGE);
    let dir = tempdir().unwrap();
    let config = Config {
        http: direct(),
        ..Config::default()
    };
    let client = SurfReportClient::new(&config.http).unwrap();
    let pipeline = Pipeline::with_parts(config, Box::new(client), Box::new(PhpDumpExtractor::new()));

    let result = pipeline.run(&url, Some(dir.path())).unwrap();

    assert_eq!(result.table.len(), 1);
    let row = &result.table.rows[0];
    assert_eq!(row.date_label, "Samedi 18 Octobre");
    assert_eq!(row.wave_size_label, "1.1m - 1.6m");
    assert_eq!(row.wind_speed_label, "18km/h");
    assert_eq!(row.wind_direction_label, "Ouest Nord Ouest");
    assert!(dir.path().join("data_surf.csv").is_file());
}
