//!
//! A simple timer measuring wall-clock intervals.
//!

type TimeStamp = chrono::DateTime<chrono::Utc>;

///
/// A simple timer measuring the interval between `[start]` and `[stop]`.
///
#[derive(Clone, Default, Debug)]
pub struct Timer {
    /// Start time.
    start: Option<TimeStamp>,
    /// End time.
    end: Option<TimeStamp>,
}

impl Timer {
    ///
    /// Creates a started timer.
    ///
    pub fn started() -> Self {
        Self {
            start: Some(chrono::Utc::now()),
            end: None,
        }
    }

    ///
    /// Starts the timer.
    ///
    /// Fails if the timer was already started.
    ///
    pub fn start(&mut self) -> anyhow::Result<()> {
        match (self.start, self.end) {
            (None, None) => {
                self.start = Some(chrono::Utc::now());
                Ok(())
            }
            _ => anyhow::bail!("Malformed timer state: {self:?}"),
        }
    }

    ///
    /// Stops the timer.
    ///
    /// Fails if the timer has not been started or was already stopped.
    ///
    pub fn stop(&mut self) -> anyhow::Result<()> {
        match (self.start, self.end) {
            (Some(_), None) => {
                self.end = Some(chrono::Utc::now());
                Ok(())
            }
            _ => anyhow::bail!("Malformed timer state: {self:?}"),
        }
    }

    /// Returns the start time, if started.
    pub fn get_start(&self) -> Option<TimeStamp> {
        self.start
    }

    /// Returns the end time, if stopped.
    pub fn get_end(&self) -> Option<TimeStamp> {
        self.end
    }

    ///
    /// Returns the elapsed time, up to now if the timer is still ticking.
    ///
    pub fn elapsed(&self) -> anyhow::Result<chrono::TimeDelta> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(end - start),
            (Some(start), None) => Ok(chrono::Utc::now() - start),
            _ => anyhow::bail!("Malformed timer state: {self:?}"),
        }
    }
}
