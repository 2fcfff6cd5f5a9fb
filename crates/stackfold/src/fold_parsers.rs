
use anyhow::Result;
use clap::Args;
use log::debug;
use sf_fold::Schedule;

/// Dynamic programming options.
#[derive(Debug, Args)]
pub struct FoldArguments {
    /// Fill all spans of equal length in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel (0 = one per core)
    #[arg(short = 'j', long, default_value_t = 0)]
    pub threads: usize,
}

impl FoldArguments {
    pub fn schedule(&self) -> Schedule {
        if self.parallel {
            Schedule::Wavefront
        } else {
            Schedule::Sequential
        }
    }

    /// Size the global rayon pool. Only call this once per process.
    pub fn init_thread_pool(&self) -> Result<()> {
        if self.parallel && self.threads > 0 {
            debug!("Using {} worker threads", self.threads);
            rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads)
                .build_global()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule() {
        let args = FoldArguments { parallel: false, threads: 0 };
        assert_eq!(args.schedule(), Schedule::Sequential);
        let args = FoldArguments { parallel: true, threads: 4 };
        assert_eq!(args.schedule(), Schedule::Wavefront);
    }
}
