use colored::Colorize;
use tokio::net::TcpStream;

use crate::{resolve::Resolution, Cli};

/// Try every candidate in resolver order and keep the first socket that connects.
pub async fn connect(resolution: &Resolution, cli: &Cli) -> Result<TcpStream, String> {
    let mut last_error = None;

    for addr in resolution.candidates() {
        match TcpStream::connect(addr).await {
            Ok(stream) => {
                if !cli.silent {
                    eprintln!("Connected to {}", addr.to_string().green());
                }
                return Ok(stream);
            }
            Err(e) => {
                if !cli.silent {
                    eprintln!("{}", format!("Could not connect to {}: {}", addr, e).yellow());
                }
                last_error = Some(e);
            }
        }
    }

    let addr = format!("{}:{}", resolution.host(), resolution.port());
    match last_error {
        Some(e) => Err(format!("failed to connect to {} ({})", addr, e)),
        None => Err(format!("failed to connect to {}", addr)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    fn cli() -> Cli {
        Cli::parse_from(["hget", "--silent"])
    }

    /// An address on localhost where nothing listens
    async fn closed_addr() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    }

    #[tokio::test]
    async fn connects_to_listening_candidate() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let resolution = Resolution::from_candidates("localhost", addr.port(), vec![addr]).unwrap();
        let stream = connect(&resolution, &cli()).await.unwrap();

        assert_eq!(stream.peer_addr().unwrap(), addr);
    }

    #[tokio::test]
    async fn skips_refused_candidates() {
        let refused = closed_addr().await;
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let open = listener.local_addr().unwrap();

        let resolution = Resolution::from_candidates("localhost", open.port(), vec![refused, open]).unwrap();
        let stream = connect(&resolution, &cli()).await.unwrap();

        assert_eq!(stream.peer_addr().unwrap(), open);
    }

    #[tokio::test]
    async fn fails_when_every_candidate_is_refused() {
        let refused = closed_addr().await;

        let resolution = Resolution::from_candidates("localhost", refused.port(), vec![refused]).unwrap();
        let err = connect(&resolution, &cli()).await.unwrap_err();

        assert!(err.starts_with(&format!("failed to connect to localhost:{}", refused.port())), "{}", err);
    }
}
