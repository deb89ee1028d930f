//! Application state definitions

use super::forms::{ContactForm, Submission, SubmissionHandler};
use super::notification::Notifications;
use super::site::{Product, Site};
use super::welcome::WelcomePrompt;
use tokio::time::Instant;

/// Page section currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Products,
    Contact,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Products, View::Contact];

    pub fn next(&self) -> Self {
        match self {
            Self::Home => Self::Products,
            Self::Products => Self::Contact,
            Self::Contact => Self::Home,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Products => "Products",
            Self::Contact => "Contact",
        }
    }

    /// Key that jumps straight to this section
    pub fn shortcut(&self) -> char {
        match self {
            Self::Home => 'h',
            Self::Products => 'p',
            Self::Contact => 'c',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.shortcut() == c)
    }
}

/// Navigation menu overlay
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    pub open: bool,
    pub selected: usize,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % View::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(View::ALL.len() - 1);
    }

    pub fn selected_view(&self) -> View {
        View::ALL[self.selected % View::ALL.len()]
    }
}

/// Everything the UI renders
#[derive(Debug, Clone)]
pub struct AppState {
    pub site: Site,
    pub current_view: View,
    /// Name shown in the hero greeting
    pub guest_name: Option<String>,
    pub welcome: WelcomePrompt,
    pub menu: NavMenu,
    pub selected_product: usize,
    pub contact_form: ContactForm,
    /// Shown in the confirmation panel after a successful submission
    pub last_submission: Option<Submission>,
    pub notifications: Notifications,
}

impl AppState {
    /// Fresh state; the welcome prompt is scheduled only when no name is cached
    pub fn new(site: Site, guest_name: Option<String>, now: Instant) -> Self {
        let welcome = if guest_name.is_some() {
            WelcomePrompt::done()
        } else {
            WelcomePrompt::scheduled(now, site.welcome_delay())
        };
        Self {
            site,
            current_view: View::default(),
            guest_name,
            welcome,
            menu: NavMenu::default(),
            selected_product: 0,
            contact_form: ContactForm::new(site.contact_fields()),
            last_submission: None,
            notifications: Notifications::default(),
        }
    }

    /// Jump to a section and close the menu
    pub fn navigate(&mut self, view: View) {
        self.current_view = view;
        self.menu.close();
    }

    pub fn selected_product(&self) -> Option<&'static Product> {
        self.site.products().get(self.selected_product)
    }

    pub fn select_next_product(&mut self) {
        let count = self.site.products().len();
        if count > 0 {
            self.selected_product = (self.selected_product + 1) % count;
        }
    }

    pub fn select_prev_product(&mut self) {
        let count = self.site.products().len();
        if count > 0 {
            self.selected_product = self.selected_product.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Announce interest in the selected product
    pub fn express_interest(&mut self, now: Instant) {
        if let Some(product) = self.selected_product() {
            let message = self.site.interest_message(product);
            self.notifications.push(message, now);
        }
    }

    /// Record the visitor's name from the welcome prompt
    pub fn greet(&mut self, name: String, now: Instant) {
        if let Some(message) = self.site.greeting_notification(&name) {
            self.notifications.push(message, now);
        }
        self.guest_name = Some(name);
    }

    /// Hero greeting line
    pub fn greeting(&self) -> String {
        match &self.guest_name {
            Some(name) => format!("Welcome, {name}!"),
            None => "Welcome, guest!".to_string(),
        }
    }
}

impl SubmissionHandler for AppState {
    fn on_success(&mut self, submission: Submission) {
        self.last_submission = Some(submission);
        self.contact_form.reset();
    }
}
