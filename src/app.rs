//! Application state and core logic

use crate::config::CrmConfig;
use crate::entities::RecordKind;
use crate::state::{
    AppState, ControlInput, CreationWizard, FieldEdit, View, WizardEvent, WizardStep,
};
use crate::store::{InMemoryStore, RecordStore};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Store receiving saved records
    pub store: Box<dyn RecordStore>,
    /// User configuration loaded at startup
    pub config: CrmConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance backed by the in-memory store
    pub async fn new(config: CrmConfig) -> Result<Self> {
        let store: Box<dyn RecordStore> = if config.seed_mock_records() {
            Box::new(InMemoryStore::seeded())
        } else {
            Box::new(InMemoryStore::new())
        };
        Self::with_store(config, store).await
    }

    pub async fn with_store(config: CrmConfig, store: Box<dyn RecordStore>) -> Result<Self> {
        let state = AppState {
            selected_kind: config.default_kind(),
            ..Default::default()
        };
        let mut app = Self {
            state,
            store,
            config,
            quit: false,
        };
        app.refresh_records().await?;
        Ok(app)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Reload the records of the selected kind and the per-kind counts
    pub async fn refresh_records(&mut self) -> Result<()> {
        self.state.records = self.store.list_records(self.state.selected_kind).await?;
        self.state.counts = self.store.counts().await?;
        let len = self.state.records.len();
        if self.state.selected_index >= len {
            self.state.selected_index = len.saturating_sub(1);
        }
        Ok(())
    }

    async fn select_kind(&mut self, kind: RecordKind) -> Result<()> {
        self.state.selected_kind = kind;
        self.state.selected_index = 0;
        self.refresh_records().await
    }

    /// Open the creation dialog for the selected kind
    pub fn open_creation_dialog(&mut self) -> Result<()> {
        let mut wizard = CreationWizard::new(self.state.selected_kind.config())?;
        wizard.open();
        self.state.creation = Some(wizard);
        self.state.current_view = View::Create;
        self.state.status_message = None;
        Ok(())
    }

    fn close_creation_dialog(&mut self) {
        self.state.creation = None;
        self.state.current_view = View::Records;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Records => self.handle_records_key(key).await,
            View::Create => self.handle_create_key(key).await,
        }
    }

    /// Handle keys in the records list
    async fn handle_records_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.select_kind(self.state.selected_kind.next()).await?;
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.select_kind(self.state.selected_kind.prev()).await?;
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.select_kind(RecordKind::ALL[index]).await?;
            }
            KeyCode::Char('n') | KeyCode::Char('a') => self.open_creation_dialog()?,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x') => {
                self.state.dismiss_error();
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys while the creation dialog is open
    async fn handle_create_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(wizard) = self.state.creation.as_mut() else {
            self.state.current_view = View::Records;
            return Ok(());
        };

        if wizard.pending_discard().is_some() {
            return self.handle_discard_key(key);
        }

        // Close works from either step
        if key.code == KeyCode::Char('w') && key.modifiers.contains(crate::platform::CLOSE_MODIFIER)
        {
            if let Some(WizardEvent::Closed) = wizard.request_close() {
                self.close_creation_dialog();
            }
            return Ok(());
        }

        match wizard.step() {
            WizardStep::TypeSelection => self.handle_type_selection_key(key),
            WizardStep::FormEditing => self.handle_form_key(key).await,
        }
    }

    /// Handle keys on the Discard/Cancel prompt
    fn handle_discard_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(wizard) = self.state.creation.as_mut() else {
            return Ok(());
        };

        let discard = match key.code {
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Tab
            | KeyCode::BackTab => {
                wizard.toggle_discard_selection();
                None
            }
            KeyCode::Enter => Some(wizard.pending_discard().is_some_and(|p| p.discard_selected)),
            KeyCode::Char('d') | KeyCode::Char('y') => Some(true),
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('n') => Some(false),
            _ => None,
        };

        match discard {
            Some(true) => {
                if let Some(WizardEvent::Closed) = wizard.confirm_discard() {
                    self.close_creation_dialog();
                }
                self.state.status_message = Some("Changes discarded".to_string());
            }
            Some(false) => wizard.cancel_discard(),
            None => {}
        }
        Ok(())
    }

    /// Handle keys on the type selection step
    fn handle_type_selection_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(wizard) = self.state.creation.as_mut() else {
            return Ok(());
        };

        match key.code {
            KeyCode::Up => wizard.highlight_prev_type(),
            KeyCode::Down => wizard.highlight_next_type(),
            KeyCode::Enter => {
                if wizard.highlighted_type().is_some() {
                    wizard.select_highlighted_type()?;
                } else {
                    self.state.status_message = Some("No type matches the filter".to_string());
                }
            }
            KeyCode::Esc if !wizard.type_filter().is_empty() => wizard.clear_type_filter(),
            KeyCode::Esc => {
                if let Some(WizardEvent::Closed) = wizard.request_close() {
                    self.close_creation_dialog();
                }
            }
            KeyCode::Backspace => wizard.pop_type_filter(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                wizard.push_type_filter(c)
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the form step
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(wizard) = self.state.creation.as_mut() else {
            return Ok(());
        };

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.save_creation().await;
            }
            KeyCode::Esc => wizard.request_back()?,
            KeyCode::Tab | KeyCode::Down => wizard.next_field(),
            KeyCode::BackTab | KeyCode::Up => wizard.prev_field(),
            _ => {
                let Some(control) = wizard.active_control() else {
                    return Ok(());
                };
                match field_edit_for_key(&control.input, key) {
                    Some(edit) => {
                        wizard.edit_active(edit)?;
                    }
                    None if key.code == KeyCode::Enter => wizard.next_field(),
                    None => {}
                }
            }
        }
        Ok(())
    }

    /// Save the open form and hand the record to the store
    async fn save_creation(&mut self) -> Result<()> {
        let kind = self.state.selected_kind;
        let Some(wizard) = self.state.creation.as_mut() else {
            return Ok(());
        };

        if !wizard.is_form_valid() {
            self.state.status_message = Some(format!(
                "Fill in required fields: {}",
                wizard.missing_required().join(", ")
            ));
            return Ok(());
        }

        let record = wizard.save()?;
        match self.store.save_record(kind, record).await {
            Ok(stored) => {
                tracing::info!("Created {} {}", kind.label(), stored.id);
                self.state.status_message = Some(format!(
                    "{} created: {}",
                    kind.label(),
                    stored.display_name()
                ));
                self.close_creation_dialog();
                self.state.selected_index = 0;
                self.refresh_records().await?;
            }
            Err(err) => {
                self.close_creation_dialog();
                self.state
                    .push_error(format!("Failed to save {}: {err}", kind.label()));
            }
        }
        Ok(())
    }
}

/// Translate a key press into an edit for the focused control
fn field_edit_for_key(input: &ControlInput, key: KeyEvent) -> Option<FieldEdit> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match (input, key.code) {
        (ControlInput::ReadOnly(_), _) => None,
        (ControlInput::Select { .. }, KeyCode::Right | KeyCode::Char(' ')) => {
            Some(FieldEdit::NextOption)
        }
        (ControlInput::Select { .. }, KeyCode::Left) => Some(FieldEdit::PrevOption),
        (ControlInput::Number { .. }, KeyCode::Right) => Some(FieldEdit::StepUp),
        (ControlInput::Number { .. }, KeyCode::Left) => Some(FieldEdit::StepDown),
        (ControlInput::TextArea { .. }, KeyCode::Enter) => Some(FieldEdit::Newline),
        (_, KeyCode::Char(c)) => Some(FieldEdit::Insert(c)),
        (_, KeyCode::Backspace) => Some(FieldEdit::Backspace),
        (_, KeyCode::Delete) => Some(FieldEdit::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldValue, FormValues, StoredRecord};
    use crate::store::MockRecordStore;
    use chrono::Utc;
    use uuid::Uuid;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn stored(kind: RecordKind, values: FormValues) -> StoredRecord {
        StoredRecord {
            id: Uuid::new_v4(),
            kind,
            created_at: Utc::now(),
            values,
        }
    }

    /// Store mock that answers list/count calls with nothing
    fn quiet_store() -> MockRecordStore {
        let mut store = MockRecordStore::new();
        store.expect_list_records().returning(|_| Ok(vec![]));
        store.expect_counts().returning(|| Ok(vec![]));
        store
    }

    async fn app_with(store: MockRecordStore) -> App {
        App::with_store(CrmConfig::default(), Box::new(store))
            .await
            .unwrap()
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    /// Open the company dialog and pick the first type
    async fn company_form(app: &mut App) {
        app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
    }

    fn wizard(app: &App) -> &CreationWizard {
        app.state.creation.as_ref().unwrap()
    }

    mod records_view {
        use super::*;

        #[tokio::test]
        async fn test_starts_on_configured_kind() {
            let config = CrmConfig {
                default_kind: Some(RecordKind::Note),
                ..Default::default()
            };
            let mut store = MockRecordStore::new();
            store
                .expect_list_records()
                .withf(|kind| *kind == RecordKind::Note)
                .times(1)
                .returning(|_| Ok(vec![]));
            store.expect_counts().returning(|| Ok(vec![]));

            let app = App::with_store(config, Box::new(store)).await.unwrap();
            assert_eq!(app.state.selected_kind, RecordKind::Note);
            assert_eq!(app.state.current_view, View::Records);
        }

        #[tokio::test]
        async fn test_tab_switches_kind_and_reloads() {
            let mut store = MockRecordStore::new();
            store
                .expect_list_records()
                .withf(|kind| *kind == RecordKind::Company)
                .returning(|_| Ok(vec![]));
            store
                .expect_list_records()
                .withf(|kind| *kind == RecordKind::Person)
                .times(1)
                .returning(|kind| {
                    let values = [("fullName", FieldValue::from("Jane"))].into_iter().collect();
                    Ok(vec![stored(kind, values)])
                });
            store.expect_counts().returning(|| Ok(vec![]));

            let mut app = app_with(store).await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.selected_kind, RecordKind::Person);
            assert_eq!(app.state.records.len(), 1);
        }

        #[tokio::test]
        async fn test_digit_selects_kind() {
            let mut app = app_with(quiet_store()).await;
            app.handle_key(key(KeyCode::Char('5'))).await.unwrap();
            assert_eq!(app.state.selected_kind, RecordKind::Note);
        }

        #[tokio::test]
        async fn test_q_quits() {
            let mut app = app_with(quiet_store()).await;
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_n_opens_dialog_for_selected_kind() {
            let mut app = app_with(quiet_store()).await;
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Create);
            assert_eq!(wizard(&app).config().record_kind_label, "Company");
            assert!(wizard(&app).is_open());
            assert_eq!(wizard(&app).step(), WizardStep::TypeSelection);
        }
    }

    mod creation_flow {
        use super::*;

        #[tokio::test]
        async fn test_type_filter_and_select() {
            let mut app = app_with(quiet_store()).await;
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            type_text(&mut app, "servi").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            let values = wizard(&app).values();
            assert_eq!(values.text("type"), "Service Provider");
            assert_eq!(values.text("relationship"), "Vendor");
        }

        #[tokio::test]
        async fn test_enter_without_match_keeps_type_step() {
            let mut app = app_with(quiet_store()).await;
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            type_text(&mut app, "zzz").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(wizard(&app).step(), WizardStep::TypeSelection);
            assert!(app.state.status_message.is_some());
        }

        #[tokio::test]
        async fn test_save_sends_record_to_store() {
            let mut store = quiet_store();
            store
                .expect_save_record()
                .withf(|kind, values| {
                    *kind == RecordKind::Company
                        && values.text("name") == "Acme"
                        && values.text("type") == "Private Company"
                })
                .times(1)
                .returning(|kind, values| Ok(stored(kind, values)));

            let mut app = app_with(store).await;
            company_form(&mut app).await;
            type_text(&mut app, "Acme").await;
            app.handle_key(ctrl('s')).await.unwrap();

            assert!(app.state.creation.is_none());
            assert_eq!(app.state.current_view, View::Records);
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Company created: Acme")
            );
        }

        #[tokio::test]
        async fn test_save_with_missing_fields_is_blocked() {
            // No save expectation: a store call would panic
            let mut app = app_with(quiet_store()).await;
            company_form(&mut app).await;
            app.handle_key(ctrl('s')).await.unwrap();

            assert!(wizard(&app).is_open());
            assert!(app
                .state
                .status_message
                .as_deref()
                .unwrap()
                .contains("Company Name"));
        }

        #[tokio::test]
        async fn test_store_failure_is_reported() {
            let mut store = quiet_store();
            store
                .expect_save_record()
                .returning(|_, _| Err(anyhow::anyhow!("disk full")));

            let mut app = app_with(store).await;
            company_form(&mut app).await;
            type_text(&mut app, "Acme").await;
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.errors.len(), 1);
            assert!(app.state.errors[0].contains("disk full"));
        }

        #[tokio::test]
        async fn test_select_field_cycles_with_arrows() {
            let mut app = app_with(quiet_store()).await;
            company_form(&mut app).await;
            // name -> industry
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(wizard(&app).values().text("industry"), "Technology");
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            assert_eq!(wizard(&app).values().text("industry"), "Energy");
        }
    }

    mod discard_flow {
        use super::*;

        #[tokio::test]
        async fn test_esc_on_form_prompts_then_cancel_keeps_values() {
            let mut app = app_with(quiet_store()).await;
            company_form(&mut app).await;
            type_text(&mut app, "Acme").await;
            let before = wizard(&app).values().clone();

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(wizard(&app).pending_discard().is_some());

            // Enter on the default option cancels
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(wizard(&app).pending_discard().is_none());
            assert_eq!(wizard(&app).values(), &before);
            assert_eq!(wizard(&app).step(), WizardStep::FormEditing);
        }

        #[tokio::test]
        async fn test_confirmed_back_returns_to_types() {
            let mut app = app_with(quiet_store()).await;
            company_form(&mut app).await;
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(wizard(&app).step(), WizardStep::TypeSelection);
            assert!(wizard(&app).is_open());
            assert!(!wizard(&app).is_dirty());
        }

        #[tokio::test]
        async fn test_close_twice_then_discard() {
            let close = KeyEvent::new(KeyCode::Char('w'), crate::platform::CLOSE_MODIFIER);
            let mut app = app_with(quiet_store()).await;
            company_form(&mut app).await;
            type_text(&mut app, "Acme").await;

            app.handle_key(close).await.unwrap();
            assert!(wizard(&app).pending_discard().is_some());
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(wizard(&app).values().text("name"), "Acme");

            app.handle_key(close).await.unwrap();
            assert!(wizard(&app).pending_discard().is_some());
            app.handle_key(key(KeyCode::Char('d'))).await.unwrap();

            assert!(app.state.creation.is_none());
            assert_eq!(app.state.current_view, View::Records);
        }

        #[tokio::test]
        async fn test_clean_dialog_closes_without_prompt() {
            let mut app = app_with(quiet_store()).await;
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.state.creation.is_none());
        }

        #[tokio::test]
        async fn test_esc_clears_filter_before_closing() {
            let mut app = app_with(quiet_store()).await;
            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            type_text(&mut app, "llc").await;
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(wizard(&app).type_filter(), "");
            assert!(app.state.creation.is_some());
        }
    }

    mod key_mapping {
        use super::*;

        #[test]
        fn test_readonly_maps_nothing() {
            let input = ControlInput::ReadOnly("x".to_string());
            assert_eq!(field_edit_for_key(&input, key(KeyCode::Char('a'))), None);
        }

        #[test]
        fn test_control_chords_are_not_text() {
            let input = ControlInput::Text(String::new());
            assert_eq!(field_edit_for_key(&input, ctrl('a')), None);
        }

        #[test]
        fn test_enter_only_edits_textarea() {
            let text = ControlInput::Text(String::new());
            let area = ControlInput::TextArea {
                value: String::new(),
                rows: 3,
            };
            assert_eq!(field_edit_for_key(&text, key(KeyCode::Enter)), None);
            assert_eq!(
                field_edit_for_key(&area, key(KeyCode::Enter)),
                Some(FieldEdit::Newline)
            );
        }

        #[test]
        fn test_arrows_step_numbers() {
            let number = ControlInput::Number {
                value: String::new(),
                min: None,
                max: None,
                step: 1.0,
            };
            assert_eq!(
                field_edit_for_key(&number, key(KeyCode::Right)),
                Some(FieldEdit::StepUp)
            );
            assert_eq!(
                field_edit_for_key(&number, key(KeyCode::Left)),
                Some(FieldEdit::StepDown)
            );
        }
    }
}
