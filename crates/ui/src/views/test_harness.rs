use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::time::fixed_clock;
use services::{AdminHistoryService, AppServices, QuizSource, SessionController};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{AdminPanel, AuthView, QuizShell};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn session(&self) -> Arc<SessionController> {
        self.services.session()
    }

    fn admin(&self) -> Arc<AdminHistoryService> {
        self.services.admin()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Shell,
    Admin,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Shell => rsx! { QuizShell {} },
        ViewKind::Admin => rsx! {
            AdminPanel { on_close: |()| {} }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Services over `storage` with a fixed clock, as the app composes them.
pub async fn setup_services(storage: Storage, source: Arc<dyn QuizSource>) -> AppServices {
    AppServices::with_storage(storage, fixed_clock(), source)
        .await
        .expect("build services")
}

/// Mount `view` over already-prepared services. The shell picks up whatever
/// session state the services hold at this point.
pub fn mount(view: ViewKind, services: &AppServices) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });
    ViewHarness { dom }
}

/// Identity props fed to a mounted `AuthView`: username and locked flag.
pub type AuthIdentity = (Option<String>, bool);

/// Lets a test swap the identity an already mounted `AuthView` receives.
#[derive(Clone, Default)]
pub struct AuthHandle {
    identity: Rc<Cell<Option<Signal<AuthIdentity>>>>,
}

impl PartialEq for AuthHandle {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl AuthHandle {
    fn register(&self, identity: Signal<AuthIdentity>) {
        self.identity.set(Some(identity));
    }

    /// Must run inside the dom runtime (`VirtualDom::in_runtime`).
    pub fn show(&self, next: AuthIdentity) {
        if let Some(mut identity) = self.identity.get() {
            identity.set(next);
        }
    }
}

#[component]
fn AuthViewHarness(handle: AuthHandle, initial: AuthIdentity) -> Element {
    let identity = use_signal(|| initial.clone());
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        handle.register(identity);
    }
    let (username, locked) = identity();
    rsx! {
        AuthView {
            username,
            locked,
            load_error: false,
            loading: false,
            on_start: |_: String| {},
            on_logout: |()| {},
        }
    }
}

/// Mount a bare `AuthView` whose identity props the returned handle controls.
pub fn mount_auth(initial: AuthIdentity) -> (ViewHarness, AuthHandle) {
    let handle = AuthHandle::default();
    let dom = VirtualDom::new_with_props(
        AuthViewHarness,
        AuthViewHarnessProps {
            handle: handle.clone(),
            initial,
        },
    );
    (ViewHarness { dom }, handle)
}
