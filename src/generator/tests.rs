use super::*;

/// A [`RandSource`] that repeats a fixed byte sequence, continuing across calls.
#[derive(Clone, Debug)]
pub(crate) struct SequenceRand {
    bytes: Vec<u8>,
    pos: usize,
}

impl SequenceRand {
    pub(crate) fn new(bytes: &[u8]) -> Self {
        assert!(!bytes.is_empty());
        Self {
            bytes: bytes.to_vec(),
            pos: 0,
        }
    }
}

impl RandSource for SequenceRand {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        for e in dest.iter_mut() {
            *e = self.bytes[self.pos];
            self.pos = (self.pos + 1) % self.bytes.len();
        }
        Ok(())
    }
}

/// A [`RandSource`] that always fails as if the platform had no secure random source.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FailingRand;

impl RandSource for FailingRand {
    fn try_fill_bytes(&mut self, _: &mut [u8]) -> Result<(), Error> {
        Err(Error::EntropyUnavailable("no source for testing".to_owned()))
    }
}

/// A [`TimeSource`] that starts at `now` and advances by `step` milliseconds after each read.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SteppingClock {
    now: u64,
    step: u64,
}

impl SteppingClock {
    pub(crate) const fn new(now: u64, step: u64) -> Self {
        Self { now, step }
    }
}

impl TimeSource for SteppingClock {
    fn unix_ts_ms(&mut self) -> u64 {
        let now = self.now;
        self.now += self.step;
        now
    }
}

impl IdGenerator<()> {
    /// Returns a generator with a thread-local random source and a clock that advances one
    /// millisecond per read.
    pub(crate) fn for_testing(
    ) -> IdGenerator<with_rand08::Adapter<rand::rngs::ThreadRng>, SteppingClock> {
        IdGenerator::with_rand_and_time_sources(
            with_rand08::Adapter(rand::thread_rng()),
            SteppingClock::new(0x0123_4567_89ab, 1),
        )
    }
}
