//! Driving file-writer jobs through a job-control client

// standard library
use std::thread;
use std::time::{Duration, SystemTime};

// crate modules
use crate::error::{Error, Result};

// external crates
use log::{debug, info};

/// Everything the file writer needs to start a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteJob {
    /// JSON instrument document describing the file layout
    pub structure: String,
    /// Name of the file to write, e.g. `2024-05-01_1200.nxs`
    pub file_name: String,
    /// Broker address, e.g. `localhost:9092`
    pub broker: String,
    /// Start of the data to write
    pub start_time: SystemTime,
}

impl WriteJob {
    /// Job starting now
    pub fn new(structure: String, file_name: &str, broker: &str) -> Self {
        Self {
            structure,
            file_name: file_name.to_string(),
            broker: broker.to_string(),
            start_time: SystemTime::now(),
        }
    }
}

/// Progress of a single command sent to the file writer
pub trait Handle {
    /// True once the command has been carried out
    fn is_done(&self) -> Result<bool>;
}

/// Client able to start and stop file-writer jobs
pub trait JobControl {
    /// Handle returned for each command
    type Handle: Handle;

    /// Ask a worker to start writing a job
    fn start_job(&mut self, job: &WriteJob) -> Result<Self::Handle>;

    /// Set the time at which the current job stops writing
    fn set_stop_time(&mut self, stop_time: SystemTime) -> Result<Self::Handle>;

    /// True once the current job has finished
    fn is_done(&self) -> Result<bool>;
}

/// Call `check` every `poll` until it reports completion
///
/// Errors from `check` stop the wait immediately.
pub fn wait_until_done<F>(mut check: F, poll: Duration) -> Result<()>
where
    F: FnMut() -> Result<bool>,
{
    while !check()? {
        thread::sleep(poll);
    }
    Ok(())
}

/// Run a job from start to finish
///
/// 1. Start the job and wait for the start to be acknowledged
/// 2. Set the stop time to `duration` after the job start time and wait for
///    that to be acknowledged
/// 3. Wait for the job itself to finish
pub fn run_write_job<C>(control: &mut C, job: &WriteJob, duration: Duration, poll: Duration) -> Result<()>
where
    C: JobControl + ?Sized,
{
    let stop_time = job
        .start_time
        .checked_add(duration)
        .ok_or(Error::InvalidStopTime)?;

    info!("Starting write job for {}", job.file_name);
    let start = control.start_job(job)?;
    wait_until_done(|| start.is_done(), poll)?;
    debug!("Job started");

    let stop = control.set_stop_time(stop_time)?;
    wait_until_done(|| stop.is_done(), poll)?;
    debug!("Stop time set to {duration:?} after start");

    wait_until_done(|| control.is_done(), poll)?;
    info!("Write job is done");
    Ok(())
}
