use crate::{config::Config, error::InspectError};
use reqwest::Url;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueueStats {
    pub name: Option<String>,
    #[serde(default)]
    pub messages_ready: u64,
    #[serde(default)]
    pub messages_unacknowledged: u64,
    #[serde(default)]
    pub messages: u64,
}

#[derive(Debug)]
pub enum QueueInfo {
    Available(QueueStats),
    Unavailable(InspectError),
}

// Pushed as path segments so the default vhost `/` goes out as `%2F`.
pub fn queue_stats_url(config: &Config) -> Result<Url, InspectError> {
    let base = config.management_base();
    let mut url = Url::parse(&base).map_err(|_| InspectError::InvalidUrl(base.clone()))?;
    url.path_segments_mut()
        .map_err(|_| InspectError::InvalidUrl(base))?
        .pop_if_empty()
        .extend(&["api", "queues"])
        .push(&config.vhost)
        .push(&config.queue);
    Ok(url)
}

pub async fn fetch_queue_stats(config: &Config) -> Result<QueueStats, InspectError> {
    let url = queue_stats_url(config)?;
    log::debug!("Fetching queue statistics from {}", url);

    let client = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()
        .map_err(InspectError::Transport)?;

    let response = client
        .get(url)
        .basic_auth(&config.username, Some(&config.password))
        .send()
        .await
        .map_err(InspectError::Transport)?;

    if !response.status().is_success() {
        return Err(InspectError::Status(response.status().as_u16()));
    }

    response
        .json::<QueueStats>()
        .await
        .map_err(InspectError::Decode)
}

pub async fn inspect(config: &Config) -> QueueInfo {
    match fetch_queue_stats(config).await {
        Ok(stats) => QueueInfo::Available(stats),
        Err(e) => {
            log::warn!("Queue statistics unavailable: {}", e);
            QueueInfo::Unavailable(e)
        }
    }
}

pub fn print_queue_info(info: &QueueInfo) {
    println!("\n📊 Informations sur la queue...");
    match info {
        QueueInfo::Available(stats) => {
            println!("  📦 Nom : {}", stats.name.as_deref().unwrap_or("-"));
            println!("  💾 Messages prêts : {}", stats.messages_ready);
            println!("  🔄 Messages non-ackés : {}", stats.messages_unacknowledged);
            println!("  📈 Total messages : {}", stats.messages);
        }
        QueueInfo::Unavailable(InspectError::Status(_)) => {
            println!("  ⚠️  Queue non trouvée ou API inaccessible")
        }
        QueueInfo::Unavailable(e) => println!("  ⚠️  Impossible de récupérer les infos : {}", e),
    }
}



#[cfg(test)]
mod inspecting {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // Answers a single HTTP request with `status` and `body`, then hangs up.
    async fn serve_once(status: &'static str, body: &'static str) -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        port
    }

    fn config_for(port: u16) -> Config {
        Config {
            host: "127.0.0.1".to_owned(),
            management_port: port,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn available_on_success() {
        let port = serve_once(
            "200 OK",
            r#"{"name":"test_queue","messages_ready":5,"messages_unacknowledged":0,"messages":5}"#,
        )
        .await;

        let got = inspect(&config_for(port)).await;

        match got {
            QueueInfo::Available(stats) => {
                assert_eq!(stats.name.as_deref(), Some("test_queue"));
                assert_eq!(stats.messages_ready, 5);
                assert_eq!(stats.messages, 5);
            }
            QueueInfo::Unavailable(e) => panic!("unexpected failure: {}", e),
        }
    }

    #[tokio::test]
    async fn unavailable_on_not_found() {
        let port = serve_once(
            "404 Not Found",
            r#"{"error":"Object Not Found","reason":"Not Found"}"#,
        )
        .await;

        let got = inspect(&config_for(port)).await;

        assert!(matches!(
            got,
            QueueInfo::Unavailable(InspectError::Status(404))
        ));
    }

    #[tokio::test]
    async fn unavailable_on_malformed_body() {
        let port = serve_once("200 OK", "<html>not json</html>").await;

        let got = inspect(&config_for(port)).await;

        assert!(matches!(got, QueueInfo::Unavailable(InspectError::Decode(_))));
    }

    #[tokio::test]
    async fn unavailable_if_api_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let got = inspect(&config_for(port)).await;

        assert!(matches!(
            got,
            QueueInfo::Unavailable(InspectError::Transport(_))
        ));
    }
}
