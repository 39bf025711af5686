/*!
General callbacks associated with a context.

Callbacks may be mutable functions, and must be [Send] so a context may be moved to another thread.
*/

use super::GenericContext;

/// A callback polled at each decision, with the solve stopped if the callback returns true.
pub type CallbackTerminate = dyn FnMut() -> bool + Send;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Sets a callback to poll when deciding whether to stop a solve.
    ///
    /// ```rust
    /// # use marten_sat::context::Context;
    /// # use marten_sat::config::Config;
    /// # use marten_sat::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    /// the_context.ensure_atoms(2).unwrap();
    /// let clause = the_context.clause_from_ints(&[1, 2]).unwrap();
    /// the_context.add_clause(clause).unwrap();
    ///
    /// the_context.set_callback_terminate(Box::new(|| true));
    /// assert_eq!(the_context.solve(), Ok(Report::Unknown));
    /// ```
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    /// Polls the terminate callback, if set.
    pub fn check_callback_terminate(&mut self) -> bool {
        match &mut self.callback_terminate {
            Some(callback) => callback(),
            None => false,
        }
    }
}
