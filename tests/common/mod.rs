//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use meter_gateway::{GatewayConfig, GatewayServer, Shutdown};

/// The nine label/value pairs of a healthy status page.
pub const SAMPLE_VALUES: [(&str, &str); 9] = [
    ("Voltage", "233.4"),
    ("Current", "0.170"),
    ("Active Power", "37"),
    ("Apparent Power", "40"),
    ("Reactive Power", "14"),
    ("Power Factor", "0.93"),
    ("Energy Today", "1.234"),
    ("Energy Yesterday", "2.345"),
    ("Energy Total", "678.901"),
];

/// Render a plausible device status page: one table row per measurement,
/// values padded with non-breaking spaces and a unit suffix the way the
/// real firmware emits them, plus an optional big ON/OFF indicator.
pub fn device_page(values: &[(&str, &str)], state: Option<&str>) -> String {
    let mut html = String::from("<html><body>");
    if let Some(s) = state {
        html.push_str(&format!("<div style='font-size:62px'>{}</div>", s));
    }
    html.push_str("<table>");
    for (label, value) in values {
        html.push_str(&format!(
            "<tr><td>{}</td><td style='text-align:left'>\u{00A0}{}\u{00A0}V</td></tr>",
            label, value
        ));
    }
    html.push_str("</table></body></html>");
    html
}

/// Start a mock device that answers every connection with a fixed response.
/// Returns the bound address and a counter of accepted connections.
pub async fn start_mock_device(status: u16, body: String) -> (SocketAddr, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let counter = hits.clone();

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    counter.fetch_add(1, Ordering::SeqCst);
                    let body = body.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 2048];
                        let _ = socket.read(&mut buf).await;
                        let response = format!(
                            "HTTP/1.1 {} {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            reason,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, hits)
}

/// Start a mock device that accepts connections but never responds, to
/// force the gateway's fetch timeout.
pub async fn start_stalling_device() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 2048];
                        let _ = socket.read(&mut buf).await;
                        tokio::time::sleep(Duration::from_secs(60)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Gateway config pointed at a mock device, with timeouts short enough
/// for tests.
pub fn test_config(upstream_addr: SocketAddr) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.upstream.url = format!("http://{}/?m=1", upstream_addr);
    config.upstream.connect_timeout_ms = 500;
    config.upstream.request_timeout_ms = 500;
    config
}

/// Spawn a gateway on an ephemeral port. The returned [`Shutdown`] must be
/// kept alive for the test's duration; dropping it stops the server.
pub async fn spawn_gateway(config: GatewayConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server = GatewayServer::new(&config).unwrap();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Client matching the gateway's one-response-per-connection contract.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
