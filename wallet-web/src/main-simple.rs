//! Static file server for the ICO dashboard
//!
//! Serves the Leptos WASM build and its assets (`cryptodevs/*.svg`).
//! `WALLET_SERVER_ADDR` (default `127.0.0.1:8080`) and `WALLET_DIST_DIR`
//! (default `dist`) override the bind address and the served directory.

use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DIST: &str = "dist";

fn main() -> io::Result<()> {
    let addr = std::env::var("WALLET_SERVER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let dist = PathBuf::from(std::env::var("WALLET_DIST_DIR").unwrap_or_else(|_| DEFAULT_DIST.to_string()));
    let listener = TcpListener::bind(&addr)?;

    println!("ICO dashboard server running at http://{}", addr);
    println!("Serving from {}/ directory", dist.display());
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &dist),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
    Ok(())
}

fn handle_client(mut stream: TcpStream, dist: &Path) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path.split_once('?').map_or(full_path, |(p, _)| p);

    let index = dist.join("index.html");
    let file_path = resolve(dist, path).unwrap_or_else(|| index.clone());

    let (status, body, content_type) = match fs::read(&file_path) {
        Ok(contents) => ("200 OK", contents, content_type(&file_path)),
        Err(_) => match fs::read(&index) {
            Ok(contents) => ("200 OK", contents, "text/html; charset=utf-8"),
            Err(_) => {
                eprintln!("File not found: {}", file_path.display());
                (
                    "404 NOT FOUND",
                    b"<!DOCTYPE html><html><body><h1>Error: File not found</h1></body></html>".to_vec(),
                    "text/html",
                )
            }
        },
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write file contents: {}", e);
    }
    let _ = stream.flush();
}

/// Map a request path to an existing file under `dist`; rejects `..` segments.
fn resolve(dist: &Path, path: &str) -> Option<PathBuf> {
    let relative = Path::new(path.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    let candidate = dist.join(relative);
    candidate.is_file().then_some(candidate)
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
