use super::*;
use crate::domain::{RunConfig, RunStats};
use crate::metrics::aggregate;
use chrono::NaiveTime;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use url::Url;

fn config() -> RunConfig {
    RunConfig {
        host: "localhost".to_owned(),
        port: 3000,
        url: "http://localhost:3000/status".to_owned(),
        concurrency: 1,
    }
}

fn stats() -> RunStats {
    RunStats {
        total_requests: 5,
        total_failed_requests: 1,
        total_execution_time: Duration::from_millis(100),
        total_received: 5_120,
        response_time_data: [10, 20, 30, 40, 50]
            .iter()
            .map(|value| Duration::from_millis(*value))
            .collect(),
        ..RunStats::default()
    }
}

fn stamp() -> Result<NaiveTime, String> {
    NaiveTime::from_hms_milli_opt(15, 4, 5, 7).ok_or_else(|| "invalid time".to_owned())
}

/// Accept one request, answer with `response_body`, and hand back the raw request.
fn spawn_webhook(response_body: &'static str) -> Result<(Url, mpsc::Receiver<String>), String> {
    let listener =
        TcpListener::bind("127.0.0.1:0").map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("local_addr failed: {}", err))?;
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let Ok(read) = stream.read(&mut buf) else {
                break;
            };
            if read == 0 {
                break;
            }
            raw.extend_from_slice(buf.get(..read).unwrap_or_default());
            if request_complete(&raw) {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response_body.len(),
            response_body
        );
        drop(stream.write_all(response.as_bytes()));
        drop(tx.send(String::from_utf8_lossy(&raw).into_owned()));
    });

    let url = Url::parse(&format!("http://{}/hook", addr))
        .map_err(|err| format!("url parse failed: {}", err))?;
    Ok((url, rx))
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some((head, body)) = text.split_once("\r\n\r\n") else {
        return false;
    };
    let length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    body.len() >= length
}

#[test]
fn message_includes_throughput_and_summary() -> Result<(), String> {
    let stats = stats();
    let metrics = aggregate(&config(), &stats).map_err(|err| err.to_string())?;
    let message = notification_message(&config(), &stats, Some(&metrics), stamp()?);
    let expected = "[15:04:05.007] /status → `50.00 req/sec (20.000 ~ 20.000 [ms])`\\n\
estimated : 0.10 seconds [ *1* Connections / *5 (1)* Transections]";
    if message != expected {
        return Err(format!("Unexpected message: {}", message));
    }
    if message.lines().count() != 1 {
        return Err(format!("Message should be one line: {:?}", message));
    }
    Ok(())
}

#[test]
fn message_without_metrics_skips_throughput() -> Result<(), String> {
    let stats = RunStats {
        response_time_data: Vec::new(),
        ..stats()
    };
    let message = notification_message(&config(), &stats, None, stamp()?);
    if message.contains("req/sec") {
        return Err(format!("Unexpected throughput: {}", message));
    }
    if !message.starts_with("[15:04:05.007] /status → estimated : 0.10 seconds") {
        return Err(format!("Unexpected message: {}", message));
    }
    Ok(())
}

#[tokio::test]
async fn local_mode_writes_message_only_locally() -> Result<(), String> {
    let dispatcher =
        NotificationDispatcher::new(&NotifyConfig::default()).map_err(|err| err.to_string())?;
    if dispatcher.is_webhook() {
        return Err("Dispatcher should be local".to_owned());
    }
    let mut out = Vec::new();
    let delivery = dispatcher.dispatch("run finished", &mut out).await;
    if delivery != Delivery::Local {
        return Err(format!("Unexpected delivery: {:?}", delivery));
    }
    if out != b"\nrun finished\n" {
        return Err(format!(
            "Unexpected output: {:?}",
            String::from_utf8_lossy(&out)
        ));
    }
    Ok(())
}

#[tokio::test]
async fn webhook_mode_puts_json_message() -> Result<(), String> {
    let (url, requests) = spawn_webhook("ok")?;
    let dispatcher = NotificationDispatcher::new(&NotifyConfig {
        webhook: Some(url),
        timeout: Duration::from_secs(5),
    })
    .map_err(|err| err.to_string())?;

    let mut out = Vec::new();
    let delivery = dispatcher
        .dispatch("line one\nline \"two\"", &mut out)
        .await;
    if delivery
        != (Delivery::Webhook {
            status: 200,
            body: "ok".to_owned(),
        })
    {
        return Err(format!("Unexpected delivery: {:?}", delivery));
    }
    if out != b"ok\n" {
        return Err("Response body should be surfaced".to_owned());
    }

    let raw = requests
        .recv_timeout(Duration::from_secs(5))
        .map_err(|err| format!("no request captured: {}", err))?;
    if !raw.starts_with("PUT /hook HTTP/1.1\r\n") {
        return Err(format!("Unexpected request line: {}", raw));
    }
    if !raw
        .to_ascii_lowercase()
        .contains("content-type: application/json\r\n")
    {
        return Err(format!("Missing content type: {}", raw));
    }
    let body = raw
        .split_once("\r\n\r\n")
        .map(|(_, body)| body)
        .ok_or_else(|| "Missing body".to_owned())?;
    let payload: serde_json::Value =
        serde_json::from_str(body).map_err(|err| format!("invalid json: {}", err))?;
    if payload != serde_json::json!({ "message": "line one\nline \"two\"" }) {
        return Err(format!("Unexpected payload: {}", payload));
    }
    Ok(())
}

#[tokio::test]
async fn local_mode_keeps_line_break_marker() -> Result<(), String> {
    let stats = stats();
    let metrics = aggregate(&config(), &stats).map_err(|err| err.to_string())?;
    let message = notification_message(&config(), &stats, Some(&metrics), stamp()?);

    let mut out = Vec::new();
    let delivery = NotificationDispatcher::local()
        .dispatch(&message, &mut out)
        .await;
    if delivery != Delivery::Local {
        return Err(format!("Unexpected delivery: {:?}", delivery));
    }
    let printed = String::from_utf8_lossy(&out);
    if printed.lines().filter(|line| !line.is_empty()).count() != 1 {
        return Err(format!("Notification should print on one line: {:?}", printed));
    }
    if !printed.contains("`\\nestimated : ") {
        return Err(format!("Missing line-break marker: {:?}", printed));
    }
    Ok(())
}

#[tokio::test]
async fn webhook_payload_expands_line_break_marker() -> Result<(), String> {
    let (url, requests) = spawn_webhook("done")?;
    let dispatcher = NotificationDispatcher::new(&NotifyConfig {
        webhook: Some(url),
        timeout: Duration::from_secs(5),
    })
    .map_err(|err| err.to_string())?;

    let message = format!("first{}second", LINE_BREAK_MARKER);
    let mut out = Vec::new();
    let delivery = dispatcher.dispatch(&message, &mut out).await;
    if !matches!(delivery, Delivery::Webhook { status: 200, .. }) {
        return Err(format!("Unexpected delivery: {:?}", delivery));
    }

    let raw = requests
        .recv_timeout(Duration::from_secs(5))
        .map_err(|err| format!("no request captured: {}", err))?;
    let body = raw
        .split_once("\r\n\r\n")
        .map(|(_, body)| body)
        .ok_or_else(|| "Missing body".to_owned())?;
    let payload: serde_json::Value =
        serde_json::from_str(body).map_err(|err| format!("invalid json: {}", err))?;
    if payload != serde_json::json!({ "message": "first\nsecond" }) {
        return Err(format!("Unexpected payload: {}", payload));
    }
    Ok(())
}

#[tokio::test]
async fn unreachable_webhook_is_not_fatal() -> Result<(), String> {
    let addr = {
        let listener =
            TcpListener::bind("127.0.0.1:0").map_err(|err| format!("bind failed: {}", err))?;
        listener
            .local_addr()
            .map_err(|err| format!("local_addr failed: {}", err))?
    };
    let url = Url::parse(&format!("http://{}/hook", addr))
        .map_err(|err| format!("url parse failed: {}", err))?;
    let dispatcher = NotificationDispatcher::new(&NotifyConfig {
        webhook: Some(url),
        timeout: Duration::from_secs(2),
    })
    .map_err(|err| err.to_string())?;

    let mut out = Vec::new();
    let delivery = dispatcher.dispatch("run finished", &mut out).await;
    if delivery != Delivery::Failed {
        return Err(format!("Unexpected delivery: {:?}", delivery));
    }
    if !out.is_empty() {
        return Err("Nothing should be written on failure".to_owned());
    }
    Ok(())
}
