pub mod deletion;
pub mod detail;

pub use deletion::{DeletionConfirmation, DeletionError, DeletionView, DeletionWorkflow};
pub use detail::{DetailAggregator, DetailError, DetailViewState, LoadTicket};
