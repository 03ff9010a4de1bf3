//! Interfaces to data streaming and file-writer job control
//!
//! Streaming of detector images and writing of NeXus files are handled by
//! external services. This crate only defines the seams used to drive them:
//!
//! - [Publish] sends pre-serialised records to a topic, fire and forget
//! - [JobControl] starts a file-writer job and sets its stop time, with
//!   [Handle]s that are polled until each command completes
//!
//! The functions [stream_frames()] and [run_write_job()] implement the
//! sequencing on top of those traits, so that any client library can be
//! plugged in behind them.

// Split into subfiles for development, but anything important is re-exported
mod error;
mod job;
mod publish;

#[doc(inline)]
pub use publish::{stream_frames, Frame, Publish};

#[doc(inline)]
pub use job::{run_write_job, wait_until_done, Handle, JobControl, WriteJob};

#[doc(inline)]
pub use error::{Error, Result};
