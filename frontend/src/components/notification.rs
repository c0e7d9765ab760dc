use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Error => "toast toast-error",
            NotificationKind::Info => "toast toast-info",
        }
    }
}

/// A transient message shown in the toaster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: Option<String>,
    pub duration_ms: u32,
}

impl Notification {
    fn new(kind: NotificationKind, title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description,
            duration_ms: config::TOAST_DURATION_MS,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, Some(description.into()))
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, Some(description.into()))
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, Some(description.into()))
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u32),
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub items: Vec<(u32, Notification)>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push(notification) => {
                queue.items.push((queue.next_id, notification));
                queue.next_id = queue.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => {
                queue.items.retain(|(item_id, _)| *item_id != id);
            }
        }
        Rc::new(queue)
    }
}

/// Handle components use to raise a toast. Provided by [`Toaster`].
pub type Notify = Callback<Notification>;

/// Returns the toaster callback, or a no-op one outside a [`Toaster`].
#[hook]
pub fn use_notify() -> Notify {
    use_context::<Notify>().unwrap_or_else(Callback::noop)
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub children: Children,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let notify = {
        let queue = queue.dispatcher();
        Callback::from(move |notification: Notification| {
            queue.dispatch(ToastAction::Push(notification));
        })
    };

    let on_dismiss = {
        let queue = queue.dispatcher();
        Callback::from(move |id: u32| queue.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Notify> context={notify}>
            { for props.children.iter() }
            <ol class="toaster" aria-live="polite">
                { for queue.items.iter().map(|(id, notification)| html! {
                    <ToastItem
                        key={*id}
                        id={*id}
                        notification={notification.clone()}
                        on_dismiss={on_dismiss.clone()}
                    />
                }) }
            </ol>
            <style>
                {r#"
                .toaster {
                    position: fixed;
                    bottom: 1rem;
                    right: 1rem;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin: 0;
                    padding: 0;
                    list-style: none;
                    max-width: 24rem;
                }
                .toast {
                    display: flex;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    animation: toast-in 0.2s ease-out;
                }
                .toast-error {
                    background: #dc2626;
                    border-color: #dc2626;
                    color: #fff;
                }
                .toast-success {
                    border-left: 4px solid #16a34a;
                }
                .toast-info {
                    border-left: 4px solid #2563eb;
                }
                .toast-description {
                    margin: 0.25rem 0 0;
                    font-size: 0.875rem;
                    opacity: 0.9;
                }
                .toast-close {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                }
                @keyframes toast-in {
                    from { transform: translateY(1rem); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </ContextProvider<Notify>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u32,
    notification: Notification,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.id;
        let on_dismiss = props.on_dismiss.clone();
        let duration = props.notification.duration_ms;
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(duration, move || on_dismiss.emit(id));
            move || drop(timeout)
        }, ());
    }

    let close = {
        let id = props.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let notification = &props.notification;
    html! {
        <li class={notification.kind.class()} role="status">
            <div class="toast-body">
                <strong class="toast-title">{notification.title.clone()}</strong>
                if let Some(description) = &notification.description {
                    <p class="toast-description">{description.clone()}</p>
                }
            </div>
            <button class="toast-close" aria-label="Close" onclick={close}>{"✕"}</button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, title: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push(Notification::info(title, "")))
    }

    #[test]
    fn pushed_toasts_get_distinct_ids_in_order() {
        let queue = push(push(Rc::new(ToastQueue::default()), "first"), "second");
        let ids: Vec<u32> = queue.items.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(queue.items[1].1.title, "second");
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let queue = push(push(Rc::new(ToastQueue::default()), "first"), "second");
        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.items.len(), 1);
        assert_eq!(queue.items[0].1.title, "second");

        let queue = queue.reduce(ToastAction::Dismiss(42));
        assert_eq!(queue.items.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let queue = push(Rc::new(ToastQueue::default()), "first");
        let queue = queue.reduce(ToastAction::Dismiss(0));
        let queue = push(queue, "second");
        assert_eq!(queue.items[0].0, 1);
    }

    #[test]
    fn constructors_set_kind_and_default_duration() {
        let toast = Notification::error("Form Error", "details");
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.description.as_deref(), Some("details"));
        assert_eq!(toast.duration_ms, config::TOAST_DURATION_MS);
        assert_eq!(toast.with_duration(2000).duration_ms, 2000);
    }
}
