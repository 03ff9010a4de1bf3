//! Publishing pre-serialised records to a streaming broker

// standard library
use std::thread;
use std::time::Duration;

// crate modules
use crate::error::Result;

// external crates
use log::{debug, info};

/// Anything that can send raw records to a named topic
///
/// Delivery is at most once. Implementations report failures to hand a
/// record over, but nothing waits on an acknowledgement.
pub trait Publish {
    /// Send one serialised record
    fn send(&mut self, topic: &str, payload: &[u8]) -> Result<()>;
}

/// One detector image and the log values that go with it
///
/// All payloads are already serialised (e.g. `ADAr` and `f142` flatbuffers).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Serialised detector image
    pub image: Vec<u8>,
    /// Serialised log records, sent after the image in order
    pub logs: Vec<Vec<u8>>,
}

/// Publish every frame to `topic`, pausing for `interval` after each one
///
/// Records go out in order: the image, then its logs, then the next frame.
/// The first failure stops the stream. Returns the number of frames sent.
///
/// ```rust
/// # use nxgeom_stream::{stream_frames, Frame, Publish, Result};
/// # use std::time::Duration;
/// struct Counter(usize);
///
/// impl Publish for Counter {
///     fn send(&mut self, _topic: &str, _payload: &[u8]) -> Result<()> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
///
/// let frames = vec![Frame { image: vec![1], logs: vec![vec![2], vec![3]] }; 4];
/// let mut counter = Counter(0);
///
/// let sent = stream_frames(&mut counter, "odin_topic", frames, Duration::ZERO).unwrap();
/// assert_eq!(sent, 4);
/// assert_eq!(counter.0, 12);
/// ```
pub fn stream_frames<P, I>(publisher: &mut P, topic: &str, frames: I, interval: Duration) -> Result<usize>
where
    P: Publish + ?Sized,
    I: IntoIterator<Item = Frame>,
{
    let mut sent = 0;

    for frame in frames {
        publisher.send(topic, &frame.image)?;
        for log in &frame.logs {
            publisher.send(topic, log)?;
        }

        sent += 1;
        debug!("Frame {sent} sent to {topic}");

        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }

    info!("Streamed {sent} frames to {topic}");
    Ok(sent)
}
