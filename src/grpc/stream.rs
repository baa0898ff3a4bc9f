//! Bounded consumption of server-streamed responses.
//!
//! A [`BoundedStream`] yields chunks in delivery order and stops on the
//! first of: a final chunk, the chunk limit, an error, or the peer ending
//! the stream. It never polls the underlying stream again once stopped.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::{ready, Stream, StreamExt};
use tracing::{debug, info};

/// Chunks consumed per stream before the client stops on its own.
pub const STREAM_CHUNK_LIMIT: usize = 5;

/// Items that can mark the end of a stream.
pub trait Terminal {
    fn is_final(&self) -> bool;
}

/// Why a bounded stream stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// The peer delivered a chunk with the terminal marker.
    Final,
    /// The local chunk limit was reached first.
    Limit,
    /// The peer closed the stream without a terminal marker.
    Exhausted,
    /// The stream yielded an error.
    Failed,
}

/// Summary returned by [`BoundedStream::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    /// Chunks yielded to the consumer.
    pub chunks: usize,
    /// Stop reason, None if the consumer gave up before the stream stopped.
    pub end: Option<StreamEnd>,
}

/// Finite, non-restartable view over a server stream.
pub struct BoundedStream<S> {
    inner: Option<S>,
    limit: usize,
    seen: usize,
    end: Option<StreamEnd>,
}

impl<S> BoundedStream<S> {
    /// Wrap `inner`, stopping after at most `limit` chunks (minimum 1).
    pub fn new(inner: S, limit: usize) -> Self {
        Self {
            inner: Some(inner),
            limit: limit.max(1),
            seen: 0,
            end: None,
        }
    }

    /// Chunks yielded so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Stop reason, once stopped.
    pub fn end(&self) -> Option<StreamEnd> {
        self.end
    }

    /// Release the underlying stream.
    ///
    /// Dropping a gRPC response stream that the peer has not finished resets
    /// the HTTP/2 stream, which cancels the call on the server.
    pub fn finish(mut self) -> StreamSummary {
        if let Some(inner) = self.inner.take() {
            match self.end {
                Some(StreamEnd::Limit) | None => {
                    info!(chunks = self.seen, "Stopping stream early, cancelling call");
                }
                Some(end) => debug!(chunks = self.seen, ?end, "Stream finished"),
            }
            drop(inner);
        }

        StreamSummary {
            chunks: self.seen,
            end: self.end,
        }
    }
}

impl<S, T, E> Stream for BoundedStream<S>
where
    S: Stream<Item = Result<T, E>> + Unpin,
    T: Terminal,
{
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.end.is_some() {
            return Poll::Ready(None);
        }
        let Some(inner) = this.inner.as_mut() else {
            return Poll::Ready(None);
        };

        match ready!(inner.poll_next_unpin(cx)) {
            Some(Ok(chunk)) => {
                this.seen += 1;
                if chunk.is_final() {
                    this.end = Some(StreamEnd::Final);
                } else if this.seen >= this.limit {
                    this.end = Some(StreamEnd::Limit);
                }
                Poll::Ready(Some(Ok(chunk)))
            }
            Some(Err(e)) => {
                this.end = Some(StreamEnd::Failed);
                Poll::Ready(Some(Err(e)))
            }
            None => {
                this.end = Some(StreamEnd::Exhausted);
                Poll::Ready(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio_test::{assert_pending, assert_ready};

    #[derive(Debug, PartialEq)]
    struct Chunk {
        seq: u64,
        last: bool,
    }

    impl Terminal for Chunk {
        fn is_final(&self) -> bool {
            self.last
        }
    }

    fn chunks(count: u64, final_at: Option<u64>) -> Vec<Result<Chunk, String>> {
        (0..count)
            .map(|seq| {
                Ok(Chunk {
                    seq,
                    last: Some(seq) == final_at,
                })
            })
            .collect()
    }

    async fn drain<S>(bounded: &mut BoundedStream<S>) -> Vec<Result<Chunk, String>>
    where
        S: Stream<Item = Result<Chunk, String>> + Unpin,
    {
        let mut out = Vec::new();
        while let Some(item) = bounded.next().await {
            out.push(item);
        }
        out
    }

    #[tokio::test]
    async fn test_stops_at_limit_without_final() {
        let pulled = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pulled);
        let inner = stream::iter(chunks(10, None)).inspect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut bounded = BoundedStream::new(inner, STREAM_CHUNK_LIMIT);
        let items = drain(&mut bounded).await;

        let seqs: Vec<u64> = items.iter().map(|c| c.as_ref().unwrap().seq).collect();
        assert_eq!(seqs, vec![0, 1, 2, 3, 4]);
        assert_eq!(pulled.load(Ordering::SeqCst), 5, "must not pull past the limit");

        let summary = bounded.finish();
        assert_eq!(summary.chunks, 5);
        assert_eq!(summary.end, Some(StreamEnd::Limit));
    }

    #[tokio::test]
    async fn test_stops_on_first_final_chunk() {
        let mut bounded = BoundedStream::new(stream::iter(chunks(10, Some(0))), STREAM_CHUNK_LIMIT);
        let items = drain(&mut bounded).await;

        assert_eq!(items.len(), 1);
        assert_eq!(bounded.end(), Some(StreamEnd::Final));
    }

    #[tokio::test]
    async fn test_final_before_limit() {
        let mut bounded = BoundedStream::new(stream::iter(chunks(10, Some(2))), STREAM_CHUNK_LIMIT);
        let items = drain(&mut bounded).await;

        assert_eq!(items.len(), 3);
        assert_eq!(bounded.finish().end, Some(StreamEnd::Final));
    }

    #[tokio::test]
    async fn test_final_on_limit_counts_as_final() {
        let mut bounded = BoundedStream::new(stream::iter(chunks(10, Some(4))), STREAM_CHUNK_LIMIT);
        assert_eq!(drain(&mut bounded).await.len(), 5);
        assert_eq!(bounded.end(), Some(StreamEnd::Final));
    }

    #[tokio::test]
    async fn test_peer_ends_early() {
        let mut bounded = BoundedStream::new(stream::iter(chunks(2, None)), STREAM_CHUNK_LIMIT);
        assert_eq!(drain(&mut bounded).await.len(), 2);
        assert_eq!(bounded.end(), Some(StreamEnd::Exhausted));
    }

    #[tokio::test]
    async fn test_error_stops_stream() {
        let items: Vec<Result<Chunk, String>> = vec![
            Ok(Chunk { seq: 0, last: false }),
            Err("stream reset".to_string()),
            Ok(Chunk { seq: 1, last: false }),
        ];
        let mut bounded = BoundedStream::new(stream::iter(items), STREAM_CHUNK_LIMIT);
        let out = drain(&mut bounded).await;

        assert_eq!(out.len(), 2);
        assert_eq!(out[1], Err("stream reset".to_string()));
        assert_eq!(bounded.finish().end, Some(StreamEnd::Failed));
    }

    #[test]
    fn test_waits_for_next_chunk() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<Result<Chunk, String>>();
        let inner = tokio_stream::wrappers::UnboundedReceiverStream::new(rx);
        let mut task = tokio_test::task::spawn(BoundedStream::new(inner, STREAM_CHUNK_LIMIT));

        assert_pending!(task.poll_next());

        tx.send(Ok(Chunk { seq: 0, last: true })).unwrap();
        assert!(task.is_woken());
        let item = assert_ready!(task.poll_next());
        assert_eq!(item, Some(Ok(Chunk { seq: 0, last: true })));

        // Stopped: later chunks are never delivered
        tx.send(Ok(Chunk { seq: 1, last: false })).unwrap();
        assert_eq!(assert_ready!(task.poll_next()), None);
    }
}
