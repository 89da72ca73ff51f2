//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Error, Identifier, IdentifierRequest, Uuid};
use inner::{GlobalGen, GlobalGenInner};

/// Locks the process-wide global generator and runs `f` with it, seeding the generator on first
/// use.
fn with_global_gen<U>(f: impl FnOnce(&mut GlobalGen) -> Result<U, Error>) -> Result<U, Error> {
    static G: sync::OnceLock<sync::Mutex<Option<GlobalGenInner>>> = sync::OnceLock::new();
    // generators hold no invariant that a panicking holder could break
    let mut guard = G
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner);
    let inner = match guard.take() {
        Some(inner) => inner,
        None => GlobalGenInner::try_new()?,
    };
    f(guard.insert(inner).get_mut()?)
}

/// Generates one identifier as described by `request`.
///
/// This function employs a global generator backed by a ChaCha12 stream cipher reseeded from
/// the operating system's random source. On Unix, the generator is reseeded when the process ID
/// changes (i.e., upon process forks) so that parent and child do not share a random stream.
///
/// # Examples
///
/// ```rust
/// use idkit::{IdKind, IdentifierRequest, RequestKind};
///
/// let request = IdentifierRequest::new(RequestKind::V4).uppercase(true).braces(true);
/// let id = idkit::generate(&request)?;
/// println!("{}", id); // e.g., "{2CA4B2CE-6C13-40D4-BCCF-37D222820F6F}"
/// assert_eq!(id.kind(), IdKind::V4);
///
/// let id = idkit::generate(&IdentifierRequest::default_for(IdKind::NanoId))?;
/// assert_eq!(id.as_str().len(), 21);
/// # Ok::<(), idkit::Error>(())
/// ```
pub fn generate(request: &IdentifierRequest) -> Result<Identifier, Error> {
    with_global_gen(|g| g.generate(request))
}

/// Generates `count` identifiers as described by `request` with the global generator.
///
/// # Examples
///
/// ```rust
/// use idkit::{IdKind, IdentifierRequest, DEFAULT_BATCH_SIZE};
///
/// let request = IdentifierRequest::default_for(IdKind::V7);
/// let ids = idkit::generate_many(&request, DEFAULT_BATCH_SIZE)?;
/// assert_eq!(ids.len(), 10);
/// # Ok::<(), idkit::Error>(())
/// ```
pub fn generate_many(request: &IdentifierRequest, count: usize) -> Result<Vec<Identifier>, Error> {
    with_global_gen(|g| g.generate_many(request, count))
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = idkit::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), idkit::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid, Error> {
    with_global_gen(|g| g.generate_v4())
}

/// Generates a UUIDv7 object.
///
/// # Examples
///
/// ```rust
/// let uuid = idkit::uuid7()?;
/// println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// # Ok::<(), idkit::Error>(())
/// ```
pub fn uuid7() -> Result<Uuid, Error> {
    with_global_gen(|g| g.generate_v7())
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{with_rand08::Adapter, IdGenerator};
    use crate::Error;

    /// The number of bytes the global generator produces before reseeding from the OS.
    const RESEED_THRESHOLD: u64 = 1024 * 64;

    /// The generator type behind the global entry points.
    ///
    /// [`ChaCha12Core`] with [`ReseedingRng`] wrapper emulates the strategy used by
    /// [`rand::rngs::ThreadRng`].
    pub type GlobalGen = IdGenerator<Adapter<ReseedingRng<ChaCha12Core, OsRng>>>;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: GlobalGen,
    }

    impl GlobalGenInner {
        pub fn try_new() -> Result<Self, Error> {
            let core = ChaCha12Core::from_rng(OsRng).map_err(|err| {
                tracing::error!(%err, "could not seed global generator");
                Error::EntropyUnavailable(err.to_string())
            })?;
            Ok(Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: IdGenerator::with_rand08(ReseedingRng::new(
                    core,
                    RESEED_THRESHOLD,
                    OsRng,
                )),
            })
        }

        /// Returns a mutable reference to the inner [`IdGenerator`] instance, reseeding the
        /// generator on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> Result<&mut GlobalGen, Error> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::debug!("process ID changed; reseeding global generator");
                *self = Self::try_new()?;
            }
            Ok(&mut self.generator)
        }
    }
}
