//! Integration with `rand` (v0.8) crate.

use super::{IdGenerator, RandSource};
use crate::Error;
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
///
/// Only cryptographically secure generators (e.g. `OsRng`, `ThreadRng`, `StdRng`) should be
/// wrapped; the adapter does not check this.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|err| Error::EntropyUnavailable(err.to_string()))
    }
}

impl<T: RngCore> IdGenerator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idkit::IdGenerator;
    ///
    /// let mut g = IdGenerator::with_rand08(rand::thread_rng());
    /// println!("{}", g.generate_v4()?);
    /// # Ok::<(), idkit::Error>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}
