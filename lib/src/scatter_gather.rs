use crate::error::DispatcherError;
use futures::future::join_all;
use std::future::Future;

#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome<J> {
    Delivered(J),
    Failed(J, DispatcherError),
}

impl<J> JobOutcome<J> {
    pub fn is_delivered(&self) -> bool {
        matches!(self, JobOutcome::Delivered(_))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatherSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl GatherSummary {
    pub fn from_outcomes<J>(outcomes: &[JobOutcome<J>]) -> Self {
        let succeeded = outcomes.iter().filter(|it| it.is_delivered()).count();

        Self {
            attempted: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}

/// Drives every send concurrently and waits for all of them to settle.
///
/// Each future hands back its job together with the send result, so a failing
/// job is reported next to its siblings instead of short-circuiting them.
pub async fn scatter_gather<J, F>(sends: impl IntoIterator<Item = F>) -> Vec<JobOutcome<J>>
where
    F: Future<Output = (J, Result<(), DispatcherError>)>,
{
    join_all(sends)
        .await
        .into_iter()
        .map(|(job, result)| match result {
            Ok(()) => JobOutcome::Delivered(job),
            Err(error) => JobOutcome::Failed(job, error),
        })
        .collect()
}
