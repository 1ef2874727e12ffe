use std::future::Future;

use tokio::task::{self, JoinError, JoinHandle};

/// Submit tasks spawned on the local set that must finish before exit.
#[derive(Default)]
pub struct Submissions {
    handles: Vec<JoinHandle<()>>,
}

impl Submissions {
    pub fn spawn<F>(&mut self, submission: F)
    where
        F: Future<Output = ()> + 'static,
    {
        self.handles.retain(|handle| !handle.is_finished());
        self.handles.push(task::spawn_local(submission));
    }

    pub fn outstanding(&self) -> usize {
        self.handles.iter().filter(|handle| !handle.is_finished()).count()
    }

    /// Waits for every tracked submission.
    pub async fn join_all(self) -> Result<(), JoinError> {
        for handle in self.handles {
            handle.await?;
        }
        Ok(())
    }
}
