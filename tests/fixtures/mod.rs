// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use seasonal_calendar::models::event::CalendarEvent;

/// Sample events for testing
pub mod events {
    use super::*;

    /// A timed event on March 15, 2024 at 2:30 PM
    pub fn dentist() -> CalendarEvent {
        CalendarEvent::builder()
            .summary("Dentist")
            .start("2024-03-15T14:30:00")
            .end("2024-03-15T15:30:00")
            .location("Main St Clinic")
            .build()
    }

    /// A date-only event on March 15, 2024
    pub fn holiday() -> CalendarEvent {
        CalendarEvent::new("Ides of March", "2024-03-15")
    }

    /// A three-day span starting March 20, 2024
    pub fn conference() -> CalendarEvent {
        CalendarEvent::builder()
            .summary("RustConf")
            .start("2024-03-20")
            .end("2024-03-23")
            .description("Talks and workshops")
            .build()
    }

    pub fn march_2024() -> Vec<CalendarEvent> {
        vec![dentist(), holiday(), conference()]
    }
}

/// A tiny HTTP server answering every request with the same canned response.
///
/// Returns the base URL to point a fetcher at and a receiver yielding the
/// request line of each request (e.g. `GET /events/2024/3 HTTP/1.1`). The
/// listener thread keeps serving until the test process exits.
pub fn serve(status_line: &'static str, body: &'static str) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut buf = [0u8; 4096];
            let read = stream.read(&mut buf).unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..read]);
            let _ = tx.send(request.lines().next().unwrap_or_default().to_string());
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    (format!("http://{}", addr), rx)
}
