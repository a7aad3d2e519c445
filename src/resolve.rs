use std::net::SocketAddr;

/// Candidate addresses for a host/port pair, in the order the system
/// resolver returned them. Never empty.
#[derive(Debug, Clone)]
pub struct Resolution {
    host: String,
    port: u16,
    candidates: Vec<SocketAddr>,
}

impl Resolution {
    pub fn from_candidates(host: &str, port: u16, candidates: Vec<SocketAddr>) -> Result<Self, String> {
        if candidates.is_empty() {
            return Err(format!("gai: error: no address associated with {}", host));
        }

        Ok(Resolution {
            host: host.to_string(),
            port,
            candidates,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn candidates(&self) -> &[SocketAddr] {
        &self.candidates
    }

    /// Textual IP of the first candidate, without the port
    pub fn address(&self) -> String {
        self.candidates[0].ip().to_string()
    }
}

/// Resolve `host` and `port` with the system resolver (getaddrinfo).
pub async fn resolve(host: &str, port: u16) -> Result<Resolution, String> {
    let candidates: Vec<SocketAddr> = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| format!("gai: error: {}", e))?
        .collect();

    Resolution::from_candidates(host, port, candidates)
}
