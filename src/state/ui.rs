//! UI State
//!
//! Which dashboard widgets are visible, plus the toast notification
//! signals.

use leptos::*;

/// Toggleable dashboard widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Widget {
    Portfolio,
    Charts,
    Transactions,
    Chat,
}

impl Widget {
    pub const ALL: [Widget; 4] =
        [Widget::Portfolio, Widget::Charts, Widget::Transactions, Widget::Chat];

    pub fn label(self) -> &'static str {
        match self {
            Widget::Portfolio => "Portfolio",
            Widget::Charts => "Charts",
            Widget::Transactions => "Transactions",
            Widget::Chat => "Chat",
        }
    }

    /// Dock icon
    pub fn glyph(self) -> &'static str {
        match self {
            Widget::Portfolio => "👛",
            Widget::Charts => "📈",
            Widget::Transactions => "🧾",
            Widget::Chat => "💬",
        }
    }
}

/// Global UI chrome state.
#[derive(Clone)]
pub struct UiState {
    /// Widgets currently shown on the dashboard
    pub active_widgets: RwSignal<Vec<Widget>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_widgets: create_rw_signal(Widget::ALL.to_vec()),
            success: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }

    pub fn is_active(&self, widget: Widget) -> bool {
        self.active_widgets.get().contains(&widget)
    }

    pub fn toggle_widget(&self, widget: Widget) {
        self.active_widgets.update(|widgets| {
            if widgets.contains(&widget) {
                widgets.retain(|w| *w != widget);
            } else {
                widgets.push(widget);
            }
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
