//! Evaluation Sessions
//!
//! Per-project judging session state machine. One session exists at a time,
//! opened when the organizer selects a project and replaced or dropped when
//! the selection changes. Each of the two operations (analysis, tagline)
//! moves through Idle -> Pending -> Succeeded/Failed; re-triggering a
//! finished operation restarts it.
//!
//! Invariants:
//! - Single-flight across both operations: while either one is Pending,
//!   trigger calls are no-ops and issue no provider call.
//! - Stale-response guard: the underlying call cannot be cancelled, so each
//!   session carries an epoch; a completion whose epoch no longer matches
//!   the live session is discarded instead of applied.

use std::sync::{Arc, Mutex, MutexGuard};

use hackboard_core::{Project, ProjectAnalysis};
use tokio::sync::watch;
use tracing::debug;

use super::judge::JudgeService;

/// State of one asynchronous operation within a session.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationState<T> {
    /// Not yet triggered (or cleared by a restart)
    Idle,
    /// A provider call is in flight
    Pending,
    /// The call completed with a value
    Succeeded(T),
    /// The call failed; carries the user-facing message
    Failed(String),
}

impl<T> OperationState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Observable state of the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// Id of the project under evaluation
    pub project_id: String,
    /// State of the structured analysis operation
    pub analysis: OperationState<ProjectAnalysis>,
    /// State of the tagline operation
    pub tagline: OperationState<String>,
}

/// Which of the two session operations a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Analysis,
    Tagline,
}

struct SessionInner {
    project: Project,
    analysis: OperationState<ProjectAnalysis>,
    tagline: OperationState<String>,
}

struct ControllerInner {
    /// Bumped on every open/close; completions check it before applying
    epoch: u64,
    session: Option<SessionInner>,
}

/// Controller owning the evaluation session for the selected project.
///
/// Triggers are fire-and-observe: callers watch state transitions through
/// [`EvaluationController::subscribe`] or poll
/// [`EvaluationController::current_state`]. Spawns onto the ambient tokio
/// runtime, so triggers must be called from within one.
#[derive(Clone)]
pub struct EvaluationController {
    judge: Arc<JudgeService>,
    inner: Arc<Mutex<ControllerInner>>,
    state_tx: Arc<watch::Sender<Option<SessionSnapshot>>>,
}

impl EvaluationController {
    /// Create a controller with no open session.
    pub fn new(judge: Arc<JudgeService>) -> Self {
        let (state_tx, _) = watch::channel(None);
        Self {
            judge,
            inner: Arc::new(Mutex::new(ControllerInner {
                epoch: 0,
                session: None,
            })),
            state_tx: Arc::new(state_tx),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ControllerInner> {
        // State updates never panic while holding the lock; recover if poisoned
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn publish(&self, inner: &ControllerInner) {
        self.state_tx.send_replace(snapshot_of(inner));
    }

    /// Open a fresh Idle/Idle session for `project`, replacing any current
    /// session. In-flight results for the replaced session will be discarded.
    pub fn open_session(&self, project: Project) -> SessionSnapshot {
        let mut inner = self.lock();
        inner.epoch += 1;
        debug!(project_id = %project.id, epoch = inner.epoch, "Opening evaluation session");
        let snapshot = SessionSnapshot {
            project_id: project.id.clone(),
            analysis: OperationState::Idle,
            tagline: OperationState::Idle,
        };
        inner.session = Some(SessionInner {
            project,
            analysis: OperationState::Idle,
            tagline: OperationState::Idle,
        });
        self.publish(&inner);
        snapshot
    }

    /// Close the current session, if any. In-flight results are discarded.
    pub fn close_session(&self) {
        let mut inner = self.lock();
        inner.epoch += 1;
        inner.session = None;
        self.publish(&inner);
    }

    /// Snapshot of the current session state, or `None` if no session is open.
    pub fn current_state(&self) -> Option<SessionSnapshot> {
        snapshot_of(&self.lock())
    }

    /// Subscribe to session state changes. The receiver always holds the
    /// latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionSnapshot>> {
        self.state_tx.subscribe()
    }

    /// Start the structured analysis for the current session's project.
    ///
    /// No-op when no session is open or when either operation is already
    /// Pending.
    pub fn trigger_analysis(&self) {
        let Some((project, epoch)) = self.begin(Operation::Analysis) else {
            return;
        };
        let controller = self.clone();
        tokio::spawn(async move {
            let result = controller.judge.analyze(&project).await;
            controller.complete(epoch, Operation::Analysis, |session| {
                session.analysis = match result {
                    Ok(analysis) => OperationState::Succeeded(analysis),
                    Err(err) => OperationState::Failed(err.to_string()),
                };
            });
        });
    }

    /// Start tagline generation for the current session's project.
    ///
    /// No-op when no session is open or when either operation is already
    /// Pending.
    pub fn trigger_tagline(&self) {
        let Some((project, epoch)) = self.begin(Operation::Tagline) else {
            return;
        };
        let controller = self.clone();
        tokio::spawn(async move {
            let result = controller.judge.generate_tagline(&project).await;
            controller.complete(epoch, Operation::Tagline, |session| {
                session.tagline = match result {
                    Ok(tagline) => OperationState::Succeeded(tagline),
                    Err(err) => OperationState::Failed(err.to_string()),
                };
            });
        });
    }

    /// Move `operation` to Pending if a call may start. Returns the project
    /// to evaluate and the epoch the completion must present.
    fn begin(&self, operation: Operation) -> Option<(Project, u64)> {
        let mut inner = self.lock();
        let epoch = inner.epoch;
        let Some(session) = inner.session.as_mut() else {
            debug!(?operation, "Trigger ignored: no open session");
            return None;
        };
        if session.analysis.is_pending() || session.tagline.is_pending() {
            debug!(?operation, "Trigger ignored: an operation is already in flight");
            return None;
        }

        // Clear only this operation's previous result; the other operation
        // keeps its state.
        match operation {
            Operation::Analysis => session.analysis = OperationState::Pending,
            Operation::Tagline => session.tagline = OperationState::Pending,
        }
        let project = session.project.clone();
        self.publish(&inner);
        Some((project, epoch))
    }

    /// Apply a completion if the session it belongs to is still live.
    fn complete(&self, epoch: u64, operation: Operation, apply: impl FnOnce(&mut SessionInner)) {
        let mut inner = self.lock();
        if inner.epoch != epoch {
            debug!(?operation, epoch, current = inner.epoch, "Discarding stale completion");
            return;
        }
        if let Some(session) = inner.session.as_mut() {
            apply(session);
            self.publish(&inner);
        }
    }
}

fn snapshot_of(inner: &ControllerInner) -> Option<SessionSnapshot> {
    inner.session.as_ref().map(|session| SessionSnapshot {
        project_id: session.project.id.clone(),
        analysis: session.analysis.clone(),
        tagline: session.tagline.clone(),
    })
}
