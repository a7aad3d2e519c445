/// The one request this client ever sends
pub fn get_request(host: &str, port: u16) -> String {
    format!(
        "GET / HTTP/1.1\r\nHost: {}:{}\r\nConnection: close\r\n\r\n",
        host, port
    )
}
