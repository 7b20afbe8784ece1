//! Bidirectional URL/code registry with bounded memory.
//!
//! The registry owns two associative indexes that are always mutated together:
//!
//! - **forward**: original URL → short code, kept in recency order
//! - **reverse**: short code → original URL, an exact mirror of the forward index
//!
//! Both indexes live behind a single mutex so that `shorten` is an atomic
//! get-or-create: two concurrent calls for the same URL observe the same code,
//! and a code is never bound to two URLs. When the forward index is at capacity,
//! inserting a new pair evicts the least-recently-used one, and the evicted
//! code is removed from the reverse index in the same critical section.

mod generator;

pub use generator::{CodeGenerator, is_valid_code};

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lru::LruCache;

/// Upper bound on code generation attempts per `shorten` call.
const MAX_GENERATION_ATTEMPTS: usize = 100;

/// Errors produced by the registry itself.
///
/// Lookup misses are not errors; `resolve` reports them as `None`.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No unused code was found within the retry limit. Indicates the code
    /// space is saturated relative to the configured capacity.
    #[error("no unused code found after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
}

/// Thread-safe mapping between original URLs and short codes.
///
/// Constructed once at startup and shared behind an [`Arc`]; all mutation goes
/// through [`shorten`](Self::shorten) and [`resolve`](Self::resolve).
pub struct CodeRegistry {
    indexes: Mutex<Indexes>,
    generator: CodeGenerator,
}

/// The paired indexes. Only ever touched while holding the registry lock.
struct Indexes {
    /// URL → code, in recency order; drives eviction.
    forward: LruCache<Arc<str>, Arc<str>>,
    /// Code → URL, mirrors `forward` entry for entry.
    reverse: HashMap<Arc<str>, Arc<str>>,
}

impl CodeRegistry {
    /// Creates a registry holding at most `max_capacity` URL/code pairs,
    /// minting codes of `code_length` alphanumeric characters.
    pub fn new(max_capacity: usize, code_length: usize) -> Self {
        let capacity = NonZeroUsize::new(max_capacity).unwrap_or(NonZeroUsize::MIN);

        Self {
            indexes: Mutex::new(Indexes {
                forward: LruCache::new(capacity),
                reverse: HashMap::new(),
            }),
            generator: CodeGenerator::new(code_length),
        }
    }

    /// Returns the short code for `url`, minting one if the URL is new.
    ///
    /// Repeated calls with the same URL return the identical code; the only
    /// side effect on a repeat call is a recency touch. A call for a new URL
    /// generates an unused code, binds both directions, and may evict the
    /// least-recently-used pair from both indexes.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::GenerationExhausted`] when no unused code can
    /// be found, which only happens when the code space is nearly saturated.
    pub fn shorten(&self, url: &str) -> Result<String, RegistryError> {
        let mut indexes = self.lock();

        if let Some(code) = indexes.forward.get(url) {
            return Ok(code.to_string());
        }

        let code = Self::unused_code(&self.generator, &indexes)?;
        let url: Arc<str> = Arc::from(url);

        // A full forward index hands back its least-recently-used pair here;
        // dropping the paired reverse entry keeps the indexes in lock-step.
        if let Some((_, evicted_code)) = indexes.forward.push(url.clone(), code.clone()) {
            indexes.reverse.remove(&evicted_code);
        }
        indexes.reverse.insert(code.clone(), url);

        Ok(code.to_string())
    }

    /// Returns the original URL bound to `code`, or `None` if the code was
    /// never issued or its pair has been evicted.
    ///
    /// A hit refreshes the pair's recency so actively-resolved links are
    /// evicted last.
    pub fn resolve(&self, code: &str) -> Option<String> {
        let mut indexes = self.lock();

        let url = indexes.reverse.get(code)?.clone();
        indexes.forward.get(url.as_ref());

        Some(url.to_string())
    }

    /// Number of URL/code pairs currently held.
    pub fn len(&self) -> usize {
        self.lock().forward.len()
    }

    /// Returns `true` when no pairs are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of pairs the registry will hold.
    pub fn capacity(&self) -> usize {
        self.lock().forward.cap().get()
    }

    /// Length of the codes this registry mints.
    pub fn code_length(&self) -> usize {
        self.generator.length()
    }

    fn unused_code(
        generator: &CodeGenerator,
        indexes: &Indexes,
    ) -> Result<Arc<str>, RegistryError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = generator.generate();
            if !indexes.reverse.contains_key(candidate.as_str()) {
                return Ok(Arc::from(candidate));
            }
        }

        Err(RegistryError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Indexes> {
        self.indexes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
