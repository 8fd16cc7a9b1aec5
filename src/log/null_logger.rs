/*!

A "logger" for builds without the `logging` feature: nothing is output anywhere, but the public
API still works.

*/

use crate::log::LogConfiguration;

impl LogConfiguration {
    /// Sets the global logger to conform to this `LogConfiguration`.
    pub(in crate::log) fn set_config(&mut self) {
        // No global logger. The module filters are only recorded.
        log::set_max_level(self.global_log_level);
    }
}
