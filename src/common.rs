use colored::Colorize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::Cli;

const DELIMITER: &[u8] = b"=====\n";

/// Send `request` over `stream`, then copy everything the peer sends back to `out`
/// until end-of-stream. The response is framed by `=====` lines.
///
/// A read error ends the copy but is not treated as a failure.
pub async fn exchange<S, O>(mut stream: S, request: &str, out: &mut O, cli: &Cli) -> Result<(), String>
where
    S: AsyncRead + AsyncWrite + Unpin,
    O: AsyncWrite + Unpin,
{
    stream.write_all(request.as_bytes())
        .await
        .map_err(|_| "failed to write request")?;
    stream.flush()
        .await
        .map_err(|_| "failed to write request")?;

    if !cli.silent {
        eprintln!("Sent {} bytes", request.len().to_string().green());
    }

    out.write_all(DELIMITER)
        .await
        .map_err(|_| "failed to write to stdout")?;

    let mut buffer: [u8; 1024] = [0; 1024];

    loop {
        match stream.read(&mut buffer).await {
            Ok(0) => break,
            Ok(amount) => {
                out.write_all(&buffer[..amount])
                    .await
                    .map_err(|_| "failed to write to stdout")?;
            }
            Err(e) => {
                eprintln!("{}", format!("read: {}", e).red());
                break;
            }
        }
    }

    out.write_all(DELIMITER)
        .await
        .map_err(|_| "failed to write to stdout")?;
    out.flush()
        .await
        .map_err(|_| "failed to write to stdout")?;

    let _ = stream.shutdown().await;

    Ok(())
}
