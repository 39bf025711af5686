//! Policies for scheduling restarts.

/// How the number of conflicts between restarts is determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RestartPolicy {
    /// The first restart follows [restart_first](crate::config::Config::restart_first) conflicts, and each interval is the previous interval multiplied by [restart_multiplier](crate::config::Config::restart_multiplier).
    Geometric,

    /// The interval is [luby_u](crate::config::Config::luby_u) multiplied by the next element of the [Luby sequence](crate::generic::luby).
    Luby,
}

impl RestartPolicy {
    pub const MIN: RestartPolicy = RestartPolicy::Geometric;
    pub const MAX: RestartPolicy = RestartPolicy::Luby;
}

impl std::fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geometric => write!(f, "geometric"),
            Self::Luby => write!(f, "luby"),
        }
    }
}
