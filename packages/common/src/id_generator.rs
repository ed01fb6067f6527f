use std::sync::Mutex;
use ulid::{Generator, Ulid};

static GENERATOR: Mutex<Option<Generator>> = Mutex::new(None);

/// Generate a fresh node id
///
/// Ids are monotonic ULIDs, so two nodes created in the same millisecond
/// still sort in creation order and never collide.
pub fn new_node_id() -> String {
    let mut guard = match GENERATOR.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    let generator = guard.get_or_insert_with(Generator::new);

    // Overflow only happens after 2^80 ids inside one millisecond
    generator
        .generate()
        .unwrap_or_else(|_| Ulid::new())
        .to_string()
        .to_lowercase()
}

/// Sequential id generator for deterministic fixtures
#[derive(Clone, Debug)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
