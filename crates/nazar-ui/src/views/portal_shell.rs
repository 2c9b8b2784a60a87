//! Portal shell - the root view.
//!
//! Owns no portal state of its own: it mirrors the latest `PortalState`
//! broadcast by the store and renders whatever `dispatch::resolve` selects,
//! wrapped in the chrome the active view allows.
//!
//! ## Architecture
//!
//! - `PortalStore` owns the state machine
//! - The shell owns ephemeral display state (error banner, scroll position)
//! - Clicks and key bindings become `ViewEvent`s, then `Action`s

use std::sync::Arc;

use gpui::{
    div, prelude::*, App, AsyncApp, ClickEvent, Context, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString, Styled, WeakEntity,
    Window,
};
use gpui_component::VirtualListScrollHandle;
use nazar_core::{AdminStats, Catalog, View};
use nazar_portal::{
    nav_bar, resolve, AccountButton, Action, Chrome, NavEvent, PortalState, PortalStore,
    ViewEvent, ViewProps,
};

use crate::actions::{
    DismissError, GoContact, GoCourses, GoHome, GoTeachers, Logout, NavigateTo, OpenAccount,
};
use crate::keymap::PORTAL_CONTEXT;
use crate::theme::ThemeExt;
use crate::views::{admin, auth, catalog, chrome, contact, home, profile};

// =============================================================================
// Events
// =============================================================================

/// Events emitted by PortalShell.
#[derive(Debug, Clone)]
pub enum PortalShellEvent {
    /// The active view changed.
    ViewChanged(View),
}

// =============================================================================
// PortalShell
// =============================================================================

/// The root portal view.
pub struct PortalShell {
    store: Arc<PortalStore>,
    /// Latest state seen from the store.
    pub(crate) state: PortalState,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) stats: AdminStats,
    /// Last rejected action, shown until dismissed or the next success.
    pub(crate) error: Option<SharedString>,
    focus_handle: FocusHandle,
    /// Scroll handle shared by the catalog lists.
    pub(crate) scroll_handle: VirtualListScrollHandle,
}

impl PortalShell {
    /// Create the shell and subscribe to store changes.
    pub fn new(store: Arc<PortalStore>, catalog: Arc<Catalog>, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        let scroll_handle = VirtualListScrollHandle::new();

        let state_rx = store.subscribe();
        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut rx = state_rx;
            while rx.changed().await.is_ok() {
                let state = rx.borrow().clone();
                let _ = this.update(cx, |this, cx| {
                    this.on_state_changed(state, cx);
                });
            }
        })
        .detach();

        let stats = catalog.admin_stats();
        let state = store.snapshot();

        Self {
            store,
            state,
            catalog,
            stats,
            error: None,
            focus_handle,
            scroll_handle,
        }
    }

    /// Focus the shell so key bindings in the portal context fire.
    pub fn focus(&self, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle, cx);
    }

    // -------------------------------------------------------------------------
    // Store Changes
    // -------------------------------------------------------------------------

    fn on_state_changed(&mut self, state: PortalState, cx: &mut Context<Self>) {
        let view_changed = state.view != self.state.view;
        self.state = state;

        if view_changed {
            tracing::debug!("Shell showing {}", self.state.view);
            self.scroll_handle = VirtualListScrollHandle::new();
            cx.emit(PortalShellEvent::ViewChanged(self.state.view));
        }
        cx.notify();
    }

    /// Run an action against the store.
    ///
    /// The broadcast arrives asynchronously; the snapshot is taken here too so
    /// the next frame never renders stale state.
    fn apply(&mut self, action: Action, cx: &mut Context<Self>) {
        match self.store.dispatch(action) {
            Ok(()) => self.error = None,
            Err(e) => self.error = Some(e.to_string().into()),
        }
        let state = self.store.snapshot();
        self.on_state_changed(state, cx);
    }

    /// Handle an event emitted by one of the view renderers.
    pub fn on_view_event(&mut self, event: ViewEvent, cx: &mut Context<Self>) {
        self.apply(event.into(), cx);
    }

    /// Click listener that emits `event`.
    pub(crate) fn emit<E>(
        event: E,
        cx: &Context<Self>,
    ) -> impl Fn(&ClickEvent, &mut Window, &mut App) + 'static
    where
        E: Into<ViewEvent> + Clone + 'static,
    {
        cx.listener(move |this: &mut Self, _: &ClickEvent, _window, cx| {
            this.on_view_event(event.clone().into(), cx);
        })
    }

    // -------------------------------------------------------------------------
    // Action Handlers
    // -------------------------------------------------------------------------

    fn navigate(&mut self, view: View, cx: &mut Context<Self>) {
        self.on_view_event(NavEvent::Navigate(view).into(), cx);
    }

    fn on_go_home(&mut self, _: &GoHome, _window: &mut Window, cx: &mut Context<Self>) {
        self.navigate(View::Home, cx);
    }

    fn on_go_courses(&mut self, _: &GoCourses, _window: &mut Window, cx: &mut Context<Self>) {
        self.navigate(View::Courses, cx);
    }

    fn on_go_teachers(&mut self, _: &GoTeachers, _window: &mut Window, cx: &mut Context<Self>) {
        self.navigate(View::Teachers, cx);
    }

    fn on_go_contact(&mut self, _: &GoContact, _window: &mut Window, cx: &mut Context<Self>) {
        self.navigate(View::Contact, cx);
    }

    fn on_navigate_to(&mut self, action: &NavigateTo, _window: &mut Window, cx: &mut Context<Self>) {
        self.navigate(action.view, cx);
    }

    /// Same target as the account button, also from the admin panel.
    fn on_open_account(&mut self, _: &OpenAccount, _window: &mut Window, cx: &mut Context<Self>) {
        let target = AccountButton::for_session(self.state.session).target();
        self.navigate(target, cx);
    }

    fn on_logout(&mut self, _: &Logout, _window: &mut Window, cx: &mut Context<Self>) {
        if self.state.session.is_logged_in() {
            self.apply(Action::Logout, cx);
        }
    }

    fn on_dismiss_error(&mut self, _: &DismissError, _window: &mut Window, cx: &mut Context<Self>) {
        if self.error.take().is_some() {
            cx.notify();
        }
    }

    // -------------------------------------------------------------------------
    // Render Helpers
    // -------------------------------------------------------------------------

    fn render_view(&self, props: ViewProps, cx: &mut Context<Self>) -> gpui::AnyElement {
        match props {
            ViewProps::Home => home::render(cx),
            ViewProps::Courses { selection_mode } => {
                catalog::render_courses(self, selection_mode, cx)
            }
            ViewProps::Teachers { selection_mode } => {
                catalog::render_teachers(self, selection_mode, cx)
            }
            ViewProps::Auth => auth::render(cx),
            ViewProps::Contact => contact::render(cx),
            ViewProps::Profile { user } => {
                let course = self.catalog.course(&user.current_course);
                profile::render(&user, course, cx)
            }
            ViewProps::Admin => admin::render(&self.stats, cx),
            ViewProps::Empty => div().id("view-empty").into_any_element(),
        }
    }

    fn render_error_banner(&self, cx: &mut Context<Self>) -> Option<gpui::AnyElement> {
        let message = self.error.clone()?;
        let theme = cx.theme();

        Some(
            div()
                .id("error-banner")
                .w_full()
                .px_4()
                .py_2()
                .flex()
                .items_center()
                .justify_between()
                .bg(theme.error.opacity(0.15))
                .border_b_1()
                .border_color(theme.error)
                .text_color(theme.error)
                .text_sm()
                .child(message)
                .child(
                    div()
                        .id("error-dismiss")
                        .cursor_pointer()
                        .child("×")
                        .on_click(cx.listener(|this: &mut Self, _: &ClickEvent, _window, cx| {
                            this.error = None;
                            cx.notify();
                        })),
                )
                .into_any_element(),
        )
    }
}

// =============================================================================
// Focusable
// =============================================================================

impl Focusable for PortalShell {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

// =============================================================================
// EventEmitter
// =============================================================================

impl EventEmitter<PortalShellEvent> for PortalShell {}

// =============================================================================
// Render
// =============================================================================

impl Render for PortalShell {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let chrome = Chrome::for_view(self.state.view);
        let bar = nav_bar(&self.state);
        let props = resolve(&self.state);

        let banner = self.render_error_banner(cx);
        let body = self.render_view(props, cx);
        let nav = bar.map(|bar| chrome::render_nav_bar(&bar, cx));
        let footer = chrome.footer.then(|| chrome::render_footer(cx));

        let theme = cx.theme();

        div()
            .id("portal-shell")
            .key_context(PORTAL_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_go_home))
            .on_action(cx.listener(Self::on_go_courses))
            .on_action(cx.listener(Self::on_go_teachers))
            .on_action(cx.listener(Self::on_go_contact))
            .on_action(cx.listener(Self::on_navigate_to))
            .on_action(cx.listener(Self::on_open_account))
            .on_action(cx.listener(Self::on_logout))
            .on_action(cx.listener(Self::on_dismiss_error))
            .size_full()
            .flex()
            .flex_col()
            .bg(theme.background)
            .text_color(theme.text)
            .font_family(theme.font_family.clone())
            .text_size(theme.font_size)
            .children(nav)
            .children(banner)
            .child(div().id("portal-body").flex_1().overflow_y_scroll().child(body))
            .children(footer)
    }
}
