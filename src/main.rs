use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

mod common;
mod connect;
mod request;
mod resolve;

/// Resolve a host, connect over TCP, send `GET /` and print the raw response
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host name or IP address of the server
    #[arg(default_value = "localhost")]
    host: String,

    /// TCP port of the server
    #[arg(default_value_t = 80, value_parser = port_in_range)]
    port: u16,

    /// Only print the response
    #[arg(short, long)]
    silent: bool,
}

fn port_in_range(s: &str) -> Result<u16, String> {
    let port: u16 = u16::from_str_radix(s, 10)
        .map_err(|_| format!("{} is not a valid port number", s))?;

    // port is a u16 value. Only 0 is an invalid port
    if port == 0 {
        Err(format!("{} is not a valid port number", s))
    } else {
        Ok(port)
    }
}

/// Resolve, connect and fetch. The resolved address and the response go to `out`.
async fn run<O>(cli: &Cli, out: &mut O) -> Result<(), String>
where
    O: AsyncWrite + Unpin,
{
    let resolution = resolve::resolve(&cli.host, cli.port).await?;

    let line = format!("gai: {} => {}\n", cli.host, resolution.address());
    out.write_all(line.as_bytes())
        .await
        .map_err(|_| "failed to write to stdout")?;
    out.flush()
        .await
        .map_err(|_| "failed to write to stdout")?;

    let stream = connect::connect(&resolution, cli).await?;

    let request = request::get_request(&cli.host, cli.port);
    common::exchange(stream, &request, out, cli).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli, &mut tokio::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error_msg) => {
            eprintln!("{}", error_msg.red());
            ExitCode::FAILURE
        }
    }
}
