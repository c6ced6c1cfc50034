use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::Config;
use crate::document::EditableDocument;
use crate::editor::{EditorOutcome, EditorState, Section};
use crate::ui::theme::Theme;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing page with recent creations
    Dashboard,
    /// Preview + property panel
    Editor,
}

/// Whether the main loop keeps running after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Root controller: owns the screen selector and the document
pub struct App {
    /// Current screen
    screen: Screen,
    /// The creative being edited, shared by every screen
    document: EditableDocument,
    /// Editor panel state, rebuilt each time the editor is entered
    editor: EditorState,
    /// Section expanded when the editor opens
    initial_section: Option<Section>,
    /// Theme resolved once from config
    theme: Theme,
    /// Configuration
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        let initial_section = config.initial_section();
        let theme = config.resolve_theme();
        Self {
            screen: Screen::Dashboard,
            document: EditableDocument::default(),
            editor: EditorState::new(initial_section),
            initial_section,
            theme,
            config,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn document(&self) -> &EditableDocument {
        &self.document
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Enter the editor with a freshly reset panel
    pub fn go_to_editor(&mut self) {
        self.editor = EditorState::new(self.initial_section);
        self.editor.sync_with(&self.document);
        self.screen = Screen::Editor;
        tracing::info!("entered editor");
    }

    /// Return to the dashboard; the document is kept
    pub fn go_to_dashboard(&mut self) {
        self.screen = Screen::Dashboard;
        tracing::info!("returned to dashboard");
    }

    /// Route a key event to the active screen
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }

        match self.screen {
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::Editor => match self.editor.handle_key(key, &mut self.document) {
                EditorOutcome::Stay => Flow::Continue,
                EditorOutcome::Back => {
                    self.go_to_dashboard();
                    Flow::Continue
                }
                EditorOutcome::Quit => Flow::Quit,
            },
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Flow::Quit,
            KeyCode::Esc | KeyCode::Char('q') => Flow::Quit,
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('t') => {
                self.go_to_editor();
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }
}
