use crate::domain::ports::TokenSource;
use crate::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, BufReader, Lines, Stdin};

/// Reads tokens line by line from any async reader.
///
/// Each awaited read is the only point where the session suspends.
pub struct LineTokenSource<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> LineTokenSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl LineTokenSource<BufReader<Stdin>> {
    /// Source bound to the process's standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncRead + Unpin + Send> LineTokenSource<BufReader<R>> {
    pub fn from_reader(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> TokenSource for LineTokenSource<R> {
    async fn next_token(&mut self) -> Result<Option<String>> {
        let line = self.lines.next_line().await?;
        // Tolerate CRLF input.
        Ok(line.map(|line| line.trim_end_matches('\r').to_string()))
    }
}
