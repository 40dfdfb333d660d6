//! Scripted IRC server.
//!
//! Accepts exactly one connection on an ephemeral port and lets the test
//! drive the conversation line by line.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// Listening side, before the bot has connected.
pub struct MockServer {
    listener: TcpListener,
}

/// One accepted bot connection.
pub struct MockPeer {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl MockServer {
    pub async fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        Ok(Self { listener })
    }

    pub fn port(&self) -> u16 {
        self.listener
            .local_addr()
            .expect("listener has a local address")
            .port()
    }

    pub async fn accept(self) -> anyhow::Result<MockPeer> {
        let (stream, _) = timeout(Duration::from_secs(5), self.listener.accept()).await??;
        let (read_half, write_half) = stream.into_split();
        Ok(MockPeer {
            reader: BufReader::new(read_half),
            writer: write_half,
        })
    }
}

impl MockPeer {
    /// Send a raw line, adding `\r\n` when missing.
    pub async fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        if !line.ends_with('\n') {
            self.writer.write_all(b"\r\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    /// Send raw bytes exactly as given.
    #[allow(dead_code)]
    pub async fn send_bytes(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive one line, `\r\n` included.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("connection closed");
        }
        Ok(line)
    }

    /// Expect the registration burst: NICK, USER, JOIN.
    pub async fn expect_registration(&mut self) -> anyhow::Result<Vec<String>> {
        let mut lines = Vec::with_capacity(3);
        for _ in 0..3 {
            lines.push(self.recv().await?);
        }
        Ok(lines)
    }

    /// Whether the bot sends nothing for `dur`.
    #[allow(dead_code)]
    pub async fn is_silent_for(&mut self, dur: Duration) -> bool {
        self.recv_timeout(dur).await.is_err()
    }

    /// Read until the bot closes its side.
    #[allow(dead_code)]
    pub async fn expect_eof(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        let n = timeout(Duration::from_secs(5), self.reader.read_line(&mut line)).await??;
        if n != 0 {
            anyhow::bail!("expected EOF, got {line:?}");
        }
        Ok(())
    }

    /// Close the server side of the connection.
    #[allow(dead_code)]
    pub async fn hang_up(mut self) -> anyhow::Result<()> {
        self.writer.shutdown().await?;
        Ok(())
    }
}
