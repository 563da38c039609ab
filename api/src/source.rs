//! Asynchronous quad sources.
//!
//! A quad source is a push-based producer of quads,
//! which may also fail in the process.
//! It is modelled as a [`Stream`] of `Result`s, where
//! * `Some(Ok(quad))` notifies that a quad is available,
//! * `Some(Err(error))` notifies an error, which is terminal,
//! * `None` notifies the end of the stream.
//!
//! Any [`Stream`] with that item type can be imported into a dataset.
//! This module also provides a [`channel`] for producers that push their
//! quads from another task: the [`QuadSender`] half exposes the three
//! notifications ([`push`](QuadSender::push), [`fail`](QuadSender::fail),
//! [`end`](QuadSender::end)), and the [`QuadReceiver`] half is the [`Stream`].
use futures_util::stream::Stream;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use tokio::sync::mpsc;

/// Raised by [`QuadSender`] when its [`QuadReceiver`] has been dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("the quad receiver has been dropped")]
pub struct ReceiverDropped;

#[derive(Debug)]
enum Event<Q, E> {
    Quad(Q),
    Error(E),
}

/// Create a bounded channel carrying quads and errors.
///
/// The channel ends when every [`QuadSender`] has been dropped
/// (or [ended](QuadSender::end)),
/// or right after the first error has been received.
///
/// # Panics
/// Panics if `capacity` is 0.
pub fn channel<Q, E>(capacity: usize) -> (QuadSender<Q, E>, QuadReceiver<Q, E>) {
    let (tx, rx) = mpsc::channel(capacity);
    (
        QuadSender { tx },
        QuadReceiver {
            rx,
            terminated: false,
        },
    )
}

/// The producing half of a quad [`channel`].
#[derive(Debug)]
pub struct QuadSender<Q, E> {
    tx: mpsc::Sender<Event<Q, E>>,
}

impl<Q, E> Clone for QuadSender<Q, E> {
    fn clone(&self) -> Self {
        QuadSender {
            tx: self.tx.clone(),
        }
    }
}

impl<Q, E> QuadSender<Q, E> {
    /// Notify that `quad` is available,
    /// waiting for capacity in the channel if necessary.
    pub async fn push(&self, quad: Q) -> Result<(), ReceiverDropped> {
        self.tx
            .send(Event::Quad(quad))
            .await
            .map_err(|_| ReceiverDropped)
    }

    /// Notify an error, which terminates the stream.
    pub async fn fail(self, error: E) -> Result<(), ReceiverDropped> {
        self.tx
            .send(Event::Error(error))
            .await
            .map_err(|_| ReceiverDropped)
    }

    /// Notify the end of the stream.
    ///
    /// This is equivalent to dropping this sender;
    /// if it has been cloned, the stream ends when all clones are gone.
    pub fn end(self) {}

    /// Whether the receiving half has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// The consuming half of a quad [`channel`].
///
/// It is a [`Stream`] of `Result<Q, E>`,
/// which terminates after yielding its first error.
#[derive(Debug)]
pub struct QuadReceiver<Q, E> {
    rx: mpsc::Receiver<Event<Q, E>>,
    terminated: bool,
}

// never pinned structurally
impl<Q, E> Unpin for QuadReceiver<Q, E> {}

impl<Q, E> Stream for QuadReceiver<Q, E> {
    type Item = Result<Q, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.terminated {
            return Poll::Ready(None);
        }
        match ready!(this.rx.poll_recv(cx)) {
            Some(Event::Quad(quad)) => Poll::Ready(Some(Ok(quad))),
            Some(Event::Error(error)) => {
                this.terminated = true;
                this.rx.close();
                Poll::Ready(Some(Err(error)))
            }
            None => {
                this.terminated = true;
                Poll::Ready(None)
            }
        }
    }
}
