use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const ALERT_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u32,
    pub level: AlertLevel,
    pub message: String,
}

enum AlertsAction {
    Push(Alert),
    Dismiss(u32),
}

#[derive(Default)]
struct AlertList {
    alerts: Vec<Alert>,
}

impl Reducible for AlertList {
    type Action = AlertsAction;

    fn reduce(self: Rc<Self>, action: AlertsAction) -> Rc<Self> {
        let mut alerts = self.alerts.clone();
        match action {
            AlertsAction::Push(alert) => alerts.push(alert),
            AlertsAction::Dismiss(id) => alerts.retain(|alert| alert.id != id),
        }
        Rc::new(AlertList { alerts })
    }
}

/// Floating notifications shown at the top of the page. Each pushed
/// message dismisses itself after five seconds; the close button works
/// sooner.
#[derive(Clone, PartialEq)]
pub struct Alerts {
    pub alerts: Vec<Alert>,
    pub dismiss: Callback<u32>,
    push: Callback<(AlertLevel, String)>,
}

impl Alerts {
    pub fn show(&self, level: AlertLevel, message: impl Into<String>) {
        self.push.emit((level, message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(AlertLevel::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(AlertLevel::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(AlertLevel::Warning, message);
    }

    pub fn danger(&self, message: impl Into<String>) {
        self.show(AlertLevel::Danger, message);
    }
}

#[hook]
pub fn use_alerts() -> Alerts {
    let list = use_reducer(AlertList::default);
    let counter = use_mut_ref(|| 0u32);

    let push = {
        let list = list.clone();
        Callback::from(move |(level, message): (AlertLevel, String)| {
            let id = {
                let mut counter = counter.borrow_mut();
                *counter += 1;
                *counter
            };
            list.dispatch(AlertsAction::Push(Alert { id, level, message }));

            let list = list.clone();
            Timeout::new(ALERT_DISMISS_MS, move || {
                list.dispatch(AlertsAction::Dismiss(id));
            })
            .forget();
        })
    };

    let dismiss = {
        let list = list.clone();
        Callback::from(move |id: u32| list.dispatch(AlertsAction::Dismiss(id)))
    };

    Alerts {
        alerts: list.alerts.clone(),
        dismiss,
        push,
    }
}
