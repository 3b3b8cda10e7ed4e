use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub(crate) cost: usize,
    pub(crate) time_us: usize,
    pub(crate) expand_states: usize,
}

impl Stats {
    pub(crate) fn print(&self) {
        info!(
            "Cost {:?} Time(microseconds) {:?} Expanded states number {:?}",
            self.cost, self.time_us, self.expand_states
        );
    }
}
