//! Resident-set-size sampling.

use std::time::Instant;
use sysinfo::System;

/// A point-in-time reading of the current process's resident set size.
#[derive(Debug, Clone)]
pub struct RssSample {
    /// Resident set size in bytes.
    pub bytes: u64,
    /// When the reading was taken.
    pub taken_at: Instant,
}

/// Errors produced while sampling process memory.
#[derive(Debug, Clone)]
pub enum SampleError {
    /// The current process could not be located in the process table.
    ProcessNotFound {
        /// Process id that was looked up.
        pid: u32,
    },
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::ProcessNotFound { pid } => {
                write!(f, "failed to locate process {}", pid)
            }
        }
    }
}

impl std::error::Error for SampleError {}

impl RssSample {
    /// Take a reading for the current process.
    ///
    /// # Errors
    ///
    /// Returns an error if the current process cannot be located.
    pub fn capture() -> Result<Self, SampleError> {
        let pid = sysinfo::Pid::from(std::process::id() as usize);

        // Refresh only this process, not the whole system.
        let mut sys = System::new();
        sys.refresh_processes_specifics(
            sysinfo::ProcessesToUpdate::Some(&[pid]),
            true,
            sysinfo::ProcessRefreshKind::nothing().with_memory(),
        );

        let process = sys.process(pid).ok_or(SampleError::ProcessNotFound {
            pid: std::process::id(),
        })?;

        Ok(RssSample {
            bytes: process.memory(),
            taken_at: Instant::now(),
        })
    }

    /// Growth in bytes since an earlier reading (negative means shrinkage).
    pub fn delta(&self, earlier: &Self) -> i64 {
        self.bytes as i64 - earlier.bytes as i64
    }
}

#[cfg(test)]
mod tests {
    use super::RssSample;
    use std::time::Instant;

    #[test]
    fn test_capture_reads_current_process() {
        let sample = RssSample::capture().unwrap_or_else(|err| panic!("{}", err));
        assert!(sample.bytes > 0);
    }

    #[test]
    fn test_delta_is_signed() {
        let earlier = RssSample {
            bytes: 2000,
            taken_at: Instant::now(),
        };
        let later = RssSample {
            bytes: 1500,
            taken_at: Instant::now(),
        };
        assert_eq!(later.delta(&earlier), -500);
        assert_eq!(earlier.delta(&later), 500);
    }
}
