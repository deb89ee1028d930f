//! Application state and core logic

use crate::config::SiteConfig;
use crate::state::forms::{ContactForm, Form, FormSubmitter, SubmissionState, SubmitError};
use crate::state::{AppState, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use tokio::time::Instant;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Submission lifecycle for the contact form
    pub submitter: FormSubmitter,
    /// Loaded configuration, rewritten when the visitor introduces themselves
    config: SiteConfig,
    /// Where to persist the configuration (None disables saving)
    config_path: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: SiteConfig, config_path: Option<PathBuf>, now: Instant) -> Self {
        let state = AppState::new(config.site(), config.guest_name(), now);
        let submitter = FormSubmitter::new(config.submit_delay());
        Self {
            state,
            submitter,
            config,
            config_path,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while something on screen is time-driven
    pub fn is_animating(&self) -> bool {
        self.submitter.is_submitting() || !self.state.notifications.is_empty()
    }

    /// Advance timers: welcome prompt, notifications and the pending submission
    pub fn tick(&mut self, now: Instant) {
        self.state.welcome.tick(now);
        self.state.notifications.prune(now);

        if self.submitter.poll(now, &mut self.state) == SubmissionState::Succeeded {
            self.submitter.reset();
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Welcome prompt is modal
        if self.state.welcome.is_visible() {
            self.handle_welcome_key(key, now);
            return;
        }

        if self.state.menu.open {
            self.handle_menu_key(key);
            return;
        }

        match self.state.current_view {
            View::Home => self.handle_page_key(key),
            View::Products => self.handle_products_key(key, now),
            View::Contact => self.handle_contact_key(key, now),
        }
    }

    fn handle_welcome_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Enter => {
                if let Some(name) = self.state.welcome.accept() {
                    self.state.greet(name.clone(), now);
                    self.remember_name(name);
                }
            }
            KeyCode::Esc => self.state.welcome.dismiss(),
            KeyCode::Backspace => self.state.welcome.pop_char(),
            KeyCode::Char(c) => self.state.welcome.push_char(c),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.state.menu.close(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.state.menu.select_next(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.state.menu.select_prev(),
            KeyCode::Enter => {
                let view = self.state.menu.selected_view();
                self.state.navigate(view);
            }
            _ => {}
        }
    }

    /// Keys shared by the non-form sections
    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.state.menu.toggle(),
            KeyCode::Tab => {
                let next = self.state.current_view.next();
                self.state.navigate(next);
            }
            KeyCode::Char(c) => {
                if let Some(view) = View::from_shortcut(c) {
                    self.state.navigate(view);
                }
            }
            _ => {}
        }
    }

    fn handle_products_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next_product(),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev_product(),
            KeyCode::Enter => self.state.express_interest(now),
            _ => self.handle_page_key(key),
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                self.submit_contact(now);
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.state.navigate(View::Home),
            KeyCode::Tab | KeyCode::Down => self.state.contact_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.contact_form.prev_field(),
            KeyCode::Enter => {
                if self.state.contact_form.is_submit_row_active() {
                    self.submit_contact(now);
                } else if self.state.contact_form.is_active_field_multiline() {
                    self.edit_contact(|form| form.input_char('\n'));
                } else {
                    self.state.contact_form.next_field();
                }
            }
            KeyCode::Backspace => self.edit_contact(|form| form.backspace()),
            KeyCode::Char(c) => self.edit_contact(|form| form.input_char(c)),
            _ => {}
        }
    }

    /// Apply an edit unless a submission is in flight
    fn edit_contact(&mut self, edit: impl FnOnce(&mut ContactForm)) {
        if self.submitter.is_submitting() {
            return;
        }
        edit(&mut self.state.contact_form);
    }

    /// Validate and start the simulated submission
    pub fn submit_contact(&mut self, now: Instant) {
        let form = &mut self.state.contact_form;
        match self.submitter.submit(form.fields(), now) {
            Ok(_) => {
                form.errors.clear();
                self.state.last_submission = None;
            }
            Err(SubmitError::Invalid(result)) => form.show_validation(result),
            Err(err @ SubmitError::AlreadyInFlight(_)) => {
                tracing::debug!("Ignoring submit: {err}");
            }
        }
    }

    /// Persist the display name so the prompt is not shown again
    fn remember_name(&mut self, name: String) {
        self.config.guest_name = Some(name);
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(err) = self.config.save_to(path) {
            tracing::warn!("Failed to save config to {}: {err:#}", path.display());
        }
    }
}
