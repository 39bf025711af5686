use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    generic::random::MinimalPCG32,
    resolution_buffer::ResolutionBuffer,
};

use rand::SeedableRng;

use super::{ContextState, Counters, GenericContext};

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        let mut watches = Watches::default();
        // Top.
        watches.ensure_atom(0);

        Self {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::new(&config),
            resolution_buffer: ResolutionBuffer::default(),
            watches,
            trail: Trail::default(),

            config,
            counters: Counters::default(),

            rng: MinimalPCG32::from_seed(0_u64.to_le_bytes()),
            state: ContextState::Configuration,

            callback_terminate: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>() {}

    #[test]
    fn context_is_send() {
        assert_send::<Context>();
    }
}
