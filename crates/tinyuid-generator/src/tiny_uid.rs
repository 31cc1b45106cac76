use crate::error::Error;
use crate::sink::{DebugSink, TracingSink};
use rand::Rng;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tinyuid_core::{alphabet, Uid};
use typed_builder::TypedBuilder;

/// Length of random ids when no default is configured.
pub const DEFAULT_RANDOM_LENGTH: usize = 6;

const DEBUG_TAG: &str = "tinyuid";

/// Configures a TinyUid generator instance.
#[derive(Clone, TypedBuilder)]
pub struct TinyUidSettings {
    /// Emit internal events (construction, counter changes) to the sink.
    #[builder(default = false)]
    pub debug: bool,
    /// Receiver for debug events. `None` drops them silently.
    #[builder(default = Some(Arc::new(TracingSink) as Arc<dyn DebugSink>))]
    pub sink: Option<Arc<dyn DebugSink>>,
    /// Length of ids produced by [`TinyUid::random_id`].
    #[builder(default = DEFAULT_RANDOM_LENGTH)]
    pub default_length: usize,
    /// Initial counter value, letting a node resume from a known offset.
    #[builder(default = 0)]
    pub counter: u64,
}

/// Short unique-id generator with counter and random strategies.
///
/// Counter mode encodes a strictly increasing per-instance counter in
/// base 62 over the shared dictionary and never repeats an id within one
/// instance's lifetime. Random mode samples dictionary characters uniformly
/// and trades that guarantee for a large statistical collision space
/// (62^length possible outputs).
pub struct TinyUid {
    debug: bool,
    sink: Option<Arc<dyn DebugSink>>,
    default_length: usize,
    counter: AtomicU64,
}

impl TinyUid {
    /// Creates a generator from the given settings.
    pub fn new(settings: TinyUidSettings) -> Self {
        // `random_id` is infallible, so a zero default length is lifted to
        // the smallest valid length here instead of erroring on every call.
        let default_length = settings.default_length.max(1);
        let generator = Self {
            debug: settings.debug,
            sink: settings.sink,
            default_length,
            counter: AtomicU64::new(settings.counter),
        };
        if default_length != settings.default_length {
            generator.emit(&format!("default length 0 raised to {default_length}"));
        }
        generator.emit(&format!(
            "instance created with counter {}",
            generator.counter()
        ));
        generator
    }

    /// Generates the next counter-based id.
    ///
    /// The current counter value is encoded positionally in base 62,
    /// least-significant digit first: the first character of the id is
    /// `counter % 62`, and value 0 encodes to the single first dictionary
    /// character. The encoding is injective over `u64`, so one instance
    /// never produces the same id twice. The counter advances by one per
    /// call; it would wrap after 2^64 ids, which at a billion ids per
    /// second is roughly 584 years away.
    pub fn next_id(&self) -> Uid {
        let value = self.counter.fetch_add(1, Ordering::SeqCst);
        Self::encode(value)
    }

    /// Generates a random id at the configured default length.
    pub fn random_id(&self) -> Uid {
        self.sample(self.default_length)
    }

    /// Generates a random id of exactly `length` characters.
    ///
    /// Each position is drawn uniformly from the dictionary with no dedup
    /// against earlier ids; collisions across calls are a function of the
    /// 62^length collision space. Callers that need guaranteed-disjoint ids
    /// should use [`next_id`](Self::next_id) instead. The counter is not
    /// touched.
    pub fn random_id_with_length(&self, length: usize) -> Result<Uid, Error> {
        if length < 1 {
            return Err(Error::InvalidLength { length });
        }
        Ok(self.sample(length))
    }

    /// Returns the current counter value.
    pub fn counter(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Moves the counter to an arbitrary value.
    ///
    /// Counter-based ids issued before the move can be issued again once
    /// the counter passes over their values a second time.
    pub fn set_counter(&self, value: u64) {
        self.counter.store(value, Ordering::SeqCst);
        self.emit(&format!("counter set to {value}"));
    }

    /// Resets the counter to 0.
    ///
    /// Subsequent calls to [`next_id`](Self::next_id) restart the encoding
    /// from the beginning, so previously issued ids will repeat; don't
    /// reset while old ids must remain unique.
    pub fn reset_counter(&self) {
        self.set_counter(0);
    }

    /// Returns a copy of the dictionary ids are drawn from.
    pub fn dict(&self) -> Vec<char> {
        alphabet::dict()
    }

    /// Returns the dictionary size (always 62).
    pub fn dict_len(&self) -> usize {
        alphabet::len()
    }

    // LSB-first positional encoding: "ab" decodes as a + b*62, not a*62 + b.
    fn encode(mut value: u64) -> Uid {
        let dict = alphabet::chars();
        let base = dict.len() as u64;
        let mut out = String::new();
        loop {
            out.push(dict[(value % base) as usize]);
            value /= base;
            if value == 0 {
                break;
            }
        }
        Uid::new(out)
    }

    fn sample(&self, length: usize) -> Uid {
        let dict = alphabet::chars();
        let mut rng = rand::rng();
        let mut out = String::with_capacity(length);
        for _ in 0..length {
            out.push(dict[rng.random_range(0..dict.len())]);
        }
        Uid::new(out)
    }

    fn emit(&self, message: &str) {
        if !self.debug {
            return;
        }
        if let Some(sink) = &self.sink {
            sink.log(&format!("{DEBUG_TAG}: {message}"));
        }
    }
}

impl Default for TinyUid {
    fn default() -> Self {
        Self::new(TinyUidSettings::builder().build())
    }
}

impl Clone for TinyUid {
    fn clone(&self) -> Self {
        Self {
            debug: self.debug,
            sink: self.sink.clone(),
            default_length: self.default_length,
            counter: AtomicU64::new(self.counter()),
        }
    }
}

impl fmt::Debug for TinyUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TinyUid")
            .field("debug", &self.debug)
            .field("default_length", &self.default_length)
            .field("counter", &self.counter())
            .finish()
    }
}
