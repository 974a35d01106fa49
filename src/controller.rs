//! Session Controller
//!
//! Command handlers behind every user action. Each handler validates,
//! calls the API, then reports back through [`Frontend`]. Errors end as a
//! notice; an auth failure also ends the session.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::TaskApi;
use crate::error::{ClientError, Result};
use crate::models::{Credentials, Task, TaskDraft, TaskId};
use crate::notice::Notice;
use crate::session::{Session, SessionManager, SessionStore};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

/// What the controller needs from the UI
pub trait Frontend {
    fn session_changed(&self, session: &Session);
    fn show_tasks(&self, tasks: Vec<Task>);
    fn notify(&self, notice: Notice);
    /// Blocking yes/no question
    fn confirm(&self, prompt: &str) -> bool;
}

struct Inner<A, S, F> {
    api: A,
    session: RefCell<SessionManager<S>>,
    frontend: F,
}

/// Cheap to clone; clones share one session
pub struct Controller<A, S, F> {
    inner: Rc<Inner<A, S, F>>,
}

impl<A, S, F> Clone for Controller<A, S, F> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<A: TaskApi, S: SessionStore, F: Frontend> Controller<A, S, F> {
    pub fn new(api: A, store: S, frontend: F) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                session: RefCell::new(SessionManager::new(store)),
                frontend,
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.borrow().is_authenticated()
    }

    /// Whether `token` still belongs to the live session. Responses to
    /// requests sent under an ended session must not touch the UI state.
    fn is_current(&self, token: &str) -> bool {
        self.inner.session.borrow().session().token() == Some(token)
    }

    fn publish_session(&self) {
        let session = self.inner.session.borrow().session().clone();
        self.inner.frontend.session_changed(&session);
    }

    fn notify_success(&self, message: impl Into<String>) {
        self.inner.frontend.notify(Notice::success(message));
    }

    /// Show `error` as a notice. Local validation messages stand alone;
    /// everything else is prefixed with `context`.
    fn report(&self, context: &str, error: &ClientError) {
        let message = match error {
            ClientError::Validation(message) => message.clone(),
            _ => format!("{context}: {error}"),
        };
        log::error!("{message}");
        self.inner.frontend.notify(Notice::error(message));
    }

    /// Report a failed authenticated call. Ends the session when the server
    /// rejected `token` and it is still the one in use.
    fn fail(&self, context: &str, error: ClientError, token: &str) {
        self.report(context, &error);
        if error.is_auth_failure() && self.is_current(token) {
            log::warn!("credentials rejected, signing out");
            self.inner.session.borrow_mut().clear();
            self.publish_session();
        }
    }

    /// Token for an authenticated call
    fn require_token(&self, action: &str) -> Result<String> {
        self.inner
            .session
            .borrow()
            .token()
            .ok_or_else(|| ClientError::validation(format!("Please log in to {action}.")))
    }

    /// Restore a persisted session and load its tasks
    pub async fn start(&self) {
        self.inner.session.borrow_mut().restore();
        self.publish_session();
        if self.is_authenticated() {
            self.refresh_tasks().await;
        }
    }

    pub async fn register(&self, username: &str, password: &str) -> bool {
        let credentials = Credentials::new(username, password);
        let result = match credentials.validate("registration") {
            Ok(()) => self.inner.api.register(&credentials).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(user) => {
                log::info!("registered {}", user.username);
                self.notify_success(format!(
                    "User \"{}\" registered successfully! You can now log in.",
                    user.username
                ));
                true
            }
            Err(err) => {
                self.report("Registration error", &err);
                false
            }
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> bool {
        let credentials = Credentials::new(username, password);
        let result = match credentials.validate("login") {
            Ok(()) => self.inner.api.login(&credentials).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(token) => {
                self.inner
                    .session
                    .borrow_mut()
                    .establish(&token.access_token, &credentials.username);
                self.notify_success("Logged in successfully!");
                self.publish_session();
                self.refresh_tasks().await;
                true
            }
            Err(err) => {
                self.report("Login error", &err);
                false
            }
        }
    }

    pub fn logout(&self) {
        self.inner.session.borrow_mut().clear();
        self.notify_success("Logged out successfully!");
        self.publish_session();
    }

    /// Re-fetch the full list. Every mutation ends here.
    pub async fn refresh_tasks(&self) {
        let token = match self.require_token("view tasks") {
            Ok(token) => token,
            Err(err) => return self.report("Error fetching tasks", &err),
        };
        match self.inner.api.list_tasks(&token).await {
            Ok(tasks) if self.is_current(&token) => {
                log::debug!("loaded {} tasks", tasks.len());
                self.inner.frontend.show_tasks(tasks);
            }
            Ok(_) => log::debug!("dropping task list fetched for an ended session"),
            Err(err) => self.fail("Error fetching tasks", err, &token),
        }
    }

    /// Returns true when the task was created, so the form can reset
    pub async fn create_task(&self, title: &str, description: &str) -> bool {
        let draft = TaskDraft::new(title, description);
        let token = match self.require_token("create tasks").and_then(|token| {
            draft.validate()?;
            Ok(token)
        }) {
            Ok(token) => token,
            Err(err) => {
                self.report("Error creating task", &err);
                return false;
            }
        };
        match self.inner.api.create_task(&token, &draft).await {
            Ok(task) => {
                log::info!("created task {}", task.id);
                self.notify_success("Task created successfully!");
                self.refresh_tasks().await;
                true
            }
            Err(err) => {
                self.fail("Error creating task", err, &token);
                false
            }
        }
    }

    /// Fetch the current record, flip `completed`, write the whole record back
    pub async fn toggle_task(&self, id: TaskId) {
        let token = match self.require_token("update tasks") {
            Ok(token) => token,
            Err(err) => return self.report("Error updating task", &err),
        };
        let result: Result<Task> = async {
            let task = self.inner.api.get_task(&token, id).await?;
            self.inner
                .api
                .update_task(&token, id, &TaskDraft::toggled(&task))
                .await
        }
        .await;
        match result {
            Ok(task) => {
                log::info!("task {} completed={}", task.id, task.completed);
                self.notify_success("Task updated successfully!");
                self.refresh_tasks().await;
            }
            Err(err) => self.fail("Error updating task", err, &token),
        }
    }

    pub async fn delete_task(&self, id: TaskId) {
        let token = match self.require_token("delete tasks") {
            Ok(token) => token,
            Err(err) => return self.report("Error deleting task", &err),
        };
        if !self.inner.frontend.confirm(DELETE_PROMPT) {
            log::debug!("delete of task {id} cancelled");
            return;
        }
        match self.inner.api.delete_task(&token, id).await {
            Ok(()) => {
                log::info!("deleted task {id}");
                self.notify_success("Task deleted successfully!");
                self.refresh_tasks().await;
            }
            Err(err) => self.fail("Error deleting task", err, &token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccessToken, RegisteredUser};
    use crate::notice::NoticeKind;
    use crate::session::testing::MemoryStore;
    use crate::session::{TOKEN_KEY, USERNAME_KEY};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;

    const PASSWORD: &str = "hunter2";
    const VALID_TOKEN: &str = "token-alice";

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Register,
        Login,
        List,
        Get(TaskId),
        Create(TaskDraft),
        Update(TaskId, TaskDraft),
        Delete(TaskId),
    }

    /// In-process stand-in for the task service
    #[derive(Clone, Default)]
    struct FakeServer {
        tasks: Rc<RefCell<Vec<Task>>>,
        users: Rc<RefCell<Vec<String>>>,
        calls: Rc<RefCell<Vec<Call>>>,
        next_id: Rc<Cell<TaskId>>,
        /// When set, the next list call waits for this before answering
        list_gate: Rc<RefCell<Option<oneshot::Receiver<()>>>>,
    }

    impl FakeServer {
        fn with_user(username: &str) -> Self {
            let server = Self::default();
            server.users.borrow_mut().push(username.to_string());
            server
        }

        fn seed(&self, title: &str, description: Option<&str>, completed: bool) -> TaskId {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            self.tasks.borrow_mut().push(Task {
                id,
                title: title.to_string(),
                description: description.map(str::to_string),
                completed,
            });
            id
        }

        /// Hold the next list response until the returned sender fires
        fn hold_next_list(&self) -> oneshot::Sender<()> {
            let (release, gate) = oneshot::channel();
            *self.list_gate.borrow_mut() = Some(gate);
            release
        }

        fn tasks(&self) -> Vec<Task> {
            self.tasks.borrow().clone()
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
            self.calls.borrow().iter().filter(|c| pred(c)).count()
        }

        fn record(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }

        fn authorize(&self, token: &str) -> Result<()> {
            if token == VALID_TOKEN {
                Ok(())
            } else {
                Err(ClientError::Request {
                    status: 401,
                    message: "Could not validate credentials".to_string(),
                })
            }
        }

        fn not_found() -> ClientError {
            ClientError::Request {
                status: 404,
                message: "Task not found or you do not have permission to access it".to_string(),
            }
        }
    }

    #[async_trait(?Send)]
    impl TaskApi for FakeServer {
        async fn register(&self, credentials: &Credentials) -> Result<RegisteredUser> {
            self.record(Call::Register);
            let mut users = self.users.borrow_mut();
            if users.contains(&credentials.username) {
                return Err(ClientError::Request {
                    status: 400,
                    message: "Username already registered".to_string(),
                });
            }
            users.push(credentials.username.clone());
            Ok(RegisteredUser { id: Some(users.len() as i64), username: credentials.username.clone() })
        }

        async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
            self.record(Call::Login);
            if self.users.borrow().contains(&credentials.username) && credentials.password == PASSWORD {
                Ok(AccessToken {
                    access_token: VALID_TOKEN.to_string(),
                    token_type: Some("bearer".to_string()),
                })
            } else {
                Err(ClientError::Request {
                    status: 401,
                    message: "Incorrect username or password".to_string(),
                })
            }
        }

        async fn list_tasks(&self, token: &str) -> Result<Vec<Task>> {
            self.record(Call::List);
            let gate = self.list_gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.authorize(token)?;
            Ok(self.tasks())
        }

        async fn get_task(&self, token: &str, id: TaskId) -> Result<Task> {
            self.record(Call::Get(id));
            self.authorize(token)?;
            self.tasks().into_iter().find(|t| t.id == id).ok_or_else(Self::not_found)
        }

        async fn create_task(&self, token: &str, draft: &TaskDraft) -> Result<Task> {
            self.record(Call::Create(draft.clone()));
            self.authorize(token)?;
            let id = self.seed(&draft.title, draft.description.as_deref(), draft.completed);
            self.tasks().into_iter().find(|t| t.id == id).ok_or_else(Self::not_found)
        }

        async fn update_task(&self, token: &str, id: TaskId, draft: &TaskDraft) -> Result<Task> {
            self.record(Call::Update(id, draft.clone()));
            self.authorize(token)?;
            let mut tasks = self.tasks.borrow_mut();
            let task = tasks.iter_mut().find(|t| t.id == id).ok_or_else(Self::not_found)?;
            task.title = draft.title.clone();
            task.description = draft.description.clone();
            task.completed = draft.completed;
            Ok(task.clone())
        }

        async fn delete_task(&self, token: &str, id: TaskId) -> Result<()> {
            self.record(Call::Delete(id));
            self.authorize(token)?;
            let mut tasks = self.tasks.borrow_mut();
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            if tasks.len() == before {
                return Err(Self::not_found());
            }
            Ok(())
        }
    }

    /// Records everything the controller pushes to the UI
    #[derive(Clone, Default)]
    struct RecordingFrontend {
        session: Rc<RefCell<Session>>,
        tasks: Rc<RefCell<Option<Vec<Task>>>>,
        notices: Rc<RefCell<Vec<Notice>>>,
        decline: Rc<Cell<bool>>,
        prompts: Rc<Cell<usize>>,
    }

    impl RecordingFrontend {
        fn screen_tasks(&self) -> Option<Vec<Task>> {
            self.tasks.borrow().clone()
        }

        fn last_notice(&self) -> Option<Notice> {
            self.notices.borrow().last().cloned()
        }

        fn has_notice(&self, kind: NoticeKind, message: &str) -> bool {
            self.notices.borrow().iter().any(|n| n.kind == kind && n.message == message)
        }
    }

    impl Frontend for RecordingFrontend {
        fn session_changed(&self, session: &Session) {
            *self.session.borrow_mut() = session.clone();
            if !session.is_authenticated() {
                *self.tasks.borrow_mut() = None;
            }
        }

        fn show_tasks(&self, tasks: Vec<Task>) {
            *self.tasks.borrow_mut() = Some(tasks);
        }

        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }

        fn confirm(&self, _prompt: &str) -> bool {
            self.prompts.set(self.prompts.get() + 1);
            !self.decline.get()
        }
    }

    type TestController = Controller<FakeServer, MemoryStore, RecordingFrontend>;

    struct Harness {
        server: FakeServer,
        store: MemoryStore,
        ui: RecordingFrontend,
        controller: TestController,
    }

    fn harness() -> Harness {
        let server = FakeServer::with_user("alice");
        let store = MemoryStore::default();
        let ui = RecordingFrontend::default();
        let controller = Controller::new(server.clone(), store.clone(), ui.clone());
        Harness { server, store, ui, controller }
    }

    fn signed_in() -> Harness {
        let h = harness();
        assert!(block_on(h.controller.login("alice", PASSWORD)));
        h.server.calls.borrow_mut().clear();
        h.ui.notices.borrow_mut().clear();
        h
    }

    #[test]
    fn test_login_establishes_and_fetches_once() {
        let h = harness();
        h.server.seed("Existing", None, false);

        assert!(block_on(h.controller.login("alice", PASSWORD)));

        assert!(h.controller.is_authenticated());
        assert_eq!(h.ui.session.borrow().username(), Some("alice"));
        assert_eq!(h.store.get(TOKEN_KEY).as_deref(), Some(VALID_TOKEN));
        assert_eq!(h.store.get(USERNAME_KEY).as_deref(), Some("alice"));
        assert_eq!(h.server.count(|c| *c == Call::List), 1);
        assert_eq!(h.ui.screen_tasks(), Some(h.server.tasks()));
        assert!(h.ui.has_notice(NoticeKind::Success, "Logged in successfully!"));
    }

    #[test]
    fn test_invalid_login_leaves_session_untouched() {
        let h = harness();

        assert!(!block_on(h.controller.login("alice", "wrong")));

        assert!(!h.controller.is_authenticated());
        assert_eq!(h.store.writes(), 0);
        assert_eq!(
            h.ui.last_notice(),
            Some(Notice::error("Login error: Incorrect username or password"))
        );
        assert_eq!(h.server.count(|c| *c == Call::List), 0);
    }

    #[test]
    fn test_login_requires_both_fields() {
        let h = harness();

        assert!(!block_on(h.controller.login("alice", "")));

        assert!(h.server.calls().is_empty());
        assert_eq!(
            h.ui.last_notice(),
            Some(Notice::error("Username and password are required for login."))
        );
    }

    #[test]
    fn test_register_reports_server_detail() {
        let h = harness();

        assert!(block_on(h.controller.register("bob", "pw")));
        assert!(h.ui.has_notice(
            NoticeKind::Success,
            "User \"bob\" registered successfully! You can now log in."
        ));

        assert!(!block_on(h.controller.register("bob", "pw")));
        assert_eq!(
            h.ui.last_notice(),
            Some(Notice::error("Registration error: Username already registered"))
        );
        // Registering never signs in
        assert!(!h.controller.is_authenticated());
    }

    #[test]
    fn test_start_restores_persisted_session() {
        let h = harness();
        h.store.save(TOKEN_KEY, VALID_TOKEN);
        h.store.save(USERNAME_KEY, "alice");
        h.server.seed("Water plants", None, false);

        block_on(h.controller.start());

        assert!(h.controller.is_authenticated());
        assert_eq!(h.ui.screen_tasks().map(|t| t.len()), Some(1));
    }

    #[test]
    fn test_start_without_session_makes_no_calls() {
        let h = harness();

        block_on(h.controller.start());

        assert!(!h.controller.is_authenticated());
        assert!(h.server.calls().is_empty());
        assert!(h.ui.notices.borrow().is_empty());
    }

    #[test]
    fn test_empty_title_never_reaches_network() {
        let h = signed_in();

        assert!(!block_on(h.controller.create_task("   ", "something")));

        assert!(h.server.calls().is_empty());
        assert_eq!(h.ui.last_notice(), Some(Notice::error("Task title cannot be empty!")));
    }

    #[test]
    fn test_create_with_empty_description() {
        let h = signed_in();

        assert!(block_on(h.controller.create_task("Buy milk", "")));

        let tasks = h.ui.screen_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
        assert_eq!(tasks[0].description, None);
        assert!(!tasks[0].completed);
        assert_eq!(
            h.server.calls(),
            vec![
                Call::Create(TaskDraft {
                    title: "Buy milk".to_string(),
                    description: None,
                    completed: false,
                }),
                Call::List,
            ]
        );
    }

    #[test]
    fn test_toggle_fetches_then_writes_full_record() {
        let h = signed_in();
        let id = h.server.seed("Write report", Some("Q3 numbers"), false);

        block_on(h.controller.toggle_task(id));

        assert_eq!(
            h.server.calls(),
            vec![
                Call::Get(id),
                Call::Update(
                    id,
                    TaskDraft {
                        title: "Write report".to_string(),
                        description: Some("Q3 numbers".to_string()),
                        completed: true,
                    }
                ),
                Call::List,
            ]
        );
        let tasks = h.ui.screen_tasks().unwrap();
        assert!(tasks[0].completed);
        assert_eq!(h.ui.last_notice(), Some(Notice::success("Task updated successfully!")));
    }

    #[test]
    fn test_toggle_missing_task_stops_before_update() {
        let h = signed_in();

        block_on(h.controller.toggle_task(99));

        assert_eq!(h.server.calls(), vec![Call::Get(99)]);
        assert!(h.controller.is_authenticated());
        assert_eq!(
            h.ui.last_notice(),
            Some(Notice::error(
                "Error updating task: Task not found or you do not have permission to access it"
            ))
        );
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let h = signed_in();
        let id = h.server.seed("Keep me", None, false);
        h.ui.decline.set(true);

        block_on(h.controller.delete_task(id));

        assert_eq!(h.ui.prompts.get(), 1);
        assert_eq!(h.server.count(|c| matches!(c, Call::Delete(_))), 0);
        assert_eq!(h.server.tasks().len(), 1);
    }

    #[test]
    fn test_confirmed_delete_refreshes() {
        let h = signed_in();
        let id = h.server.seed("Remove me", None, false);

        block_on(h.controller.delete_task(id));

        assert_eq!(h.server.calls(), vec![Call::Delete(id), Call::List]);
        assert_eq!(h.ui.screen_tasks(), Some(Vec::new()));
    }

    #[test]
    fn test_rejected_token_forces_logout() {
        let h = harness();
        // A stale token restored from a previous visit
        h.store.save(TOKEN_KEY, "expired");
        h.store.save(USERNAME_KEY, "alice");
        block_on(h.controller.start());
        assert!(!h.controller.is_authenticated());
        assert_eq!(h.store.get(TOKEN_KEY), None);

        // Same policy when the failing call is a toggle
        let h = signed_in();
        let id = h.server.seed("Anything", None, false);
        h.controller.inner.session.borrow_mut().establish("revoked", "alice");

        block_on(h.controller.toggle_task(id));

        assert!(!h.controller.is_authenticated());
        assert!(!h.ui.session.borrow().is_authenticated());
        assert_eq!(h.ui.screen_tasks(), None);
        assert_eq!(h.store.get(TOKEN_KEY), None);
        assert_eq!(
            h.ui.last_notice(),
            Some(Notice::error("Error updating task: Could not validate credentials"))
        );
    }

    #[test]
    fn test_actions_without_session_ask_to_log_in() {
        let h = harness();

        block_on(h.controller.refresh_tasks());
        assert!(!block_on(h.controller.create_task("Buy milk", "")));
        block_on(h.controller.delete_task(1));

        assert!(h.server.calls().is_empty());
        assert_eq!(h.ui.prompts.get(), 0);
        assert!(h.ui.has_notice(NoticeKind::Error, "Please log in to view tasks."));
        assert!(h.ui.has_notice(NoticeKind::Error, "Please log in to create tasks."));
        assert!(h.ui.has_notice(NoticeKind::Error, "Please log in to delete tasks."));
    }

    #[test]
    fn test_logout_clears_everything() {
        let h = signed_in();

        h.controller.logout();

        assert!(!h.controller.is_authenticated());
        assert_eq!(h.store.get(TOKEN_KEY), None);
        assert_eq!(h.store.get(USERNAME_KEY), None);
        assert_eq!(h.ui.screen_tasks(), None);
        assert_eq!(h.ui.last_notice(), Some(Notice::success("Logged out successfully!")));
    }

    #[test]
    fn test_rendered_list_converges_to_server() {
        let h = signed_in();

        block_on(h.controller.create_task("One", "first"));
        assert_eq!(h.ui.screen_tasks(), Some(h.server.tasks()));

        block_on(h.controller.create_task("Two", ""));
        assert_eq!(h.ui.screen_tasks(), Some(h.server.tasks()));

        let first = h.server.tasks()[0].id;
        block_on(h.controller.toggle_task(first));
        assert_eq!(h.ui.screen_tasks(), Some(h.server.tasks()));

        // Another client changes the server behind our back
        h.server.seed("From elsewhere", None, true);
        block_on(h.controller.delete_task(first));
        assert_eq!(h.ui.screen_tasks(), Some(h.server.tasks()));
        assert_eq!(h.server.tasks().len(), 2);
    }

    #[test]
    fn test_list_landing_after_logout_is_dropped() {
        let h = harness();
        h.server.seed("Alice private task", None, false);
        let release = h.server.hold_next_list();

        let mut pool = LocalPool::new();
        let controller = h.controller.clone();
        pool.spawner()
            .spawn_local(async move {
                controller.login("alice", PASSWORD).await;
            })
            .unwrap();
        pool.run_until_stalled();
        assert!(h.controller.is_authenticated());

        h.controller.logout();
        release.send(()).unwrap();
        pool.run_until_stalled();

        assert!(!h.controller.is_authenticated());
        assert_eq!(h.ui.screen_tasks(), None);
    }

    #[test]
    fn test_stale_auth_failure_keeps_new_session() {
        let h = harness();
        h.controller.inner.session.borrow_mut().establish("revoked", "alice");
        let release = h.server.hold_next_list();

        let mut pool = LocalPool::new();
        let controller = h.controller.clone();
        pool.spawner()
            .spawn_local(async move { controller.refresh_tasks().await })
            .unwrap();
        pool.run_until_stalled();

        // A fresh login replaces the revoked token while the old call is pending
        assert!(block_on(h.controller.login("alice", PASSWORD)));
        release.send(()).unwrap();
        pool.run_until_stalled();

        assert!(h.controller.is_authenticated());
        assert_eq!(h.store.get(TOKEN_KEY).as_deref(), Some(VALID_TOKEN));
        assert_eq!(h.ui.screen_tasks(), Some(h.server.tasks()));
    }

    #[test]
    fn test_username_is_sent_as_typed() {
        let h = harness();

        assert!(block_on(h.controller.register(" carol", PASSWORD)));
        assert!(block_on(h.controller.login(" carol", PASSWORD)));

        assert_eq!(h.ui.session.borrow().username(), Some(" carol"));
        assert_eq!(h.store.get(USERNAME_KEY).as_deref(), Some(" carol"));
    }
}
