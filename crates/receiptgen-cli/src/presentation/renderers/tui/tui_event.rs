use receiptgen_types::SubmissionResult;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// A spawned submission finished; `None` when it was ignored as a duplicate
    Submitted(Option<SubmissionResult>),
    /// The host asked the view to close
    CloseRequested,
}
