#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Initial fetch has not finished yet
    #[default]
    Loading,
    Idle,
}
