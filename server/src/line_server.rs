use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use common::log;

use crate::command::IncomingMessage;
use crate::message_handler::MessageHandler;

const USAGE_LINE: &str = "error expected: <channel> <user> <message>";

/// Accepts connections forever. Every connection shares the same handler and therefore
/// the same sessions.
pub async fn run_line_server(listener: TcpListener, handler: Arc<MessageHandler>) -> io::Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        let handler = handler.clone();
        log!("Connection opened: {}", peer);

        tokio::spawn(async move {
            let (reader, writer) = stream.into_split();
            if let Err(e) = serve_lines(reader, writer, &handler).await {
                log!("Connection {} failed: {}", peer, e);
            }
            log!("Connection closed: {}", peer);
        });
    }
}

/// Reads `<channel> <user> <message>` lines and writes each reply line as `<channel> <text>`.
/// Invalid UTF-8 is replaced rather than ending the connection.
pub async fn serve_lines<R, W>(reader: R, mut writer: W, handler: &MessageHandler) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        // Bad bytes only spoil their own line.
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }
        let Some(message) = IncomingMessage::parse(&line) else {
            writer.write_all(format!("{}\n", USAGE_LINE).as_bytes()).await?;
            continue;
        };

        for reply in handler.handle(&message).await {
            for text in reply.lines() {
                writer
                    .write_all(format!("{} {}\n", message.channel, text).as_bytes())
                    .await?;
            }
        }
        writer.flush().await?;
    }

    Ok(())
}
