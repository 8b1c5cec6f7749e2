use super::actions::{Action, Operation};
use crate::backend::{Backend, BackendError, TaskFilter};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type JobId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: JobId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs network calls off the event loop.
///
/// Spawned futures never touch UI state: each one reports exactly one
/// [`Action`] back through the channel returned by [`TaskManager::new`].
pub struct TaskManager {
    tasks: HashMap<JobId, BackgroundTask>,
    next_job_id: JobId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_job_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a task list fetch tagged with `request`
    pub fn spawn_fetch(&mut self, backend: Arc<dyn Backend>, filter: TaskFilter, request: u64) {
        let action_sender = self.action_sender.clone();
        let description = format!("Fetch tasks ({})", filter.label());

        let handle = tokio::spawn(async move {
            let action = match backend.fetch_tasks(filter).await {
                Ok(tasks) => Action::TasksLoaded { request, tasks },
                Err(e) => {
                    log::warn!("Fetching {} tasks failed: {}", filter.label(), e);
                    Action::FetchFailed { request }
                }
            };
            let _ = action_sender.send(action);
        });

        self.track(handle, description);
    }

    /// Spawn a create, update or delete call
    pub fn spawn_mutation<Fut>(&mut self, operation: Operation, description: String, future: Fut)
    where
        Fut: Future<Output = Result<(), BackendError>> + Send + 'static,
    {
        let action_sender = self.action_sender.clone();
        let desc_for_task = description.clone();

        let handle = tokio::spawn(async move {
            let action = match future.await {
                Ok(()) if operation == Operation::Save => Action::TaskSaved,
                Ok(()) => Action::MutationCompleted(operation),
                Err(e) => {
                    log::warn!("{} failed: {}", desc_for_task, e);
                    Action::OperationFailed(operation)
                }
            };
            let _ = action_sender.send(action);
        });

        self.track(handle, description);
    }

    fn track(&mut self, handle: JoinHandle<()>, description: String) {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        self.tasks.insert(
            job_id,
            BackgroundTask {
                id: job_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
    }

    /// Drop finished tasks, returning how many were removed
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| !task.handle.is_finished());
        before - self.tasks.len()
    }

    /// Wait for every tracked task to finish
    pub async fn join_all(&mut self) {
        let tasks: Vec<BackgroundTask> = self.tasks.drain().map(|(_, task)| task).collect();
        for task in tasks {
            if let Err(e) = task.handle.await {
                log::warn!("Background task '{}' did not complete: {}", task.description, e);
            }
        }
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Descriptions of running tasks, oldest first
    pub fn running_descriptions(&self) -> Vec<String> {
        let mut tasks: Vec<&BackgroundTask> = self.tasks.values().collect();
        tasks.sort_by_key(|task| task.id);
        tasks
            .into_iter()
            .map(|task| format!("{} ({}s)", task.description, task.started_at.elapsed().as_secs()))
            .collect()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mutation_results_become_actions() {
        let (mut manager, mut rx) = TaskManager::new();

        manager.spawn_mutation(Operation::Save, "Create task".to_string(), async { Ok(()) });
        manager.join_all().await;
        assert!(matches!(rx.try_recv(), Ok(Action::TaskSaved)));

        manager.spawn_mutation(Operation::Delete, "Delete task".to_string(), async { Ok(()) });
        manager.join_all().await;
        assert!(matches!(rx.try_recv(), Ok(Action::MutationCompleted(Operation::Delete))));

        manager.spawn_mutation(Operation::Toggle, "Toggle task".to_string(), async {
            Err(BackendError::Network("connection refused".to_string()))
        });
        manager.join_all().await;
        assert!(matches!(rx.try_recv(), Ok(Action::OperationFailed(Operation::Toggle))));
        assert_eq!(manager.task_count(), 0);
    }

    #[tokio::test]
    async fn cleanup_removes_only_finished_tasks() {
        let (mut manager, _rx) = TaskManager::new();
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();

        manager.spawn_mutation(Operation::Save, "Blocked".to_string(), async move {
            let _ = release_rx.await;
            Ok(())
        });
        manager.spawn_mutation(Operation::Delete, "Quick".to_string(), async { Ok(()) });

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert_eq!(manager.cleanup_finished_tasks(), 1);
        assert_eq!(manager.task_count(), 1);
        assert_eq!(manager.running_descriptions().len(), 1);

        let _ = release_tx.send(());
        manager.join_all().await;
        assert_eq!(manager.task_count(), 0);
    }
}
