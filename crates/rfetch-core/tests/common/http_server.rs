//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body with a fixed status line to every GET. Just
//! enough protocol to exercise the fetch path against a real socket.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Starts a server in a background thread serving `body` with a 200 status.
/// Returns the base URL (e.g. "http://127.0.0.1:12345/"). The server runs
/// until the process exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_status(200, "OK", body)
}

/// Like `start` but with an arbitrary status line (e.g. 404 Not Found).
pub fn start_with_status(status: u16, reason: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, status, reason, &body));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// Binds a port, closes it again, and returns a URL nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, status: u16, reason: &str, body: &[u8]) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}
