//! Static file server for the wallet demo page
//!
//! Serves the built Leptos WASM bundle from the dist/ directory on port
//! 8080, falling back to index.html for client-side routes.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const ADDR: &str = "127.0.0.1:8080";
const DIST_DIR: &str = "dist";

fn main() {
    let listener = TcpListener::bind(ADDR).expect("Failed to bind to port 8080");

    println!("Wallet demo server running at http://{}", ADDR);
    println!("Serving from {}/ directory", DIST_DIR);
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

/// Content type from the file extension
fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

/// Map a request path to a file under dist/, with index.html as the
/// fallback for client-side routes and missing files
fn resolve_path(request_path: &str) -> PathBuf {
    if request_path == "/" || request_path.is_empty() {
        return Path::new(DIST_DIR).join("index.html");
    }

    let candidate = Path::new(DIST_DIR).join(request_path.trim_start_matches('/'));
    if candidate.is_file() {
        candidate
    } else {
        Path::new(DIST_DIR).join("index.html")
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    // Request path without the query string
    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path.split('?').next().unwrap_or(full_path);

    let file_path = resolve_path(path);

    let (status, body, mime) = match fs::read(&file_path) {
        Ok(contents) => {
            let mime = content_type(&file_path);
            ("200 OK", contents, mime)
        }
        Err(e) => {
            eprintln!("Failed to read {}: {}", file_path.display(), e);
            let body = b"<!DOCTYPE html><html><body><h1>Not Found</h1></body></html>".to_vec();
            ("404 NOT FOUND", body, "text/html; charset=utf-8")
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        mime,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}
