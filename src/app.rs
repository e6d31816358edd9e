use crate::game::{CardState, GameSession};
use crate::models::{AppState, Category, QuestionRequest, QuestionResponse};
use crate::selector::QuestionSelector;
use crate::worker::spawn_question_request;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    pub state: AppState,
    pub menu_choice: Category,
    pub session: GameSession,
    selector: Arc<dyn QuestionSelector>,
    tx: UnboundedSender<QuestionResponse>,
}

impl App {
    pub fn new(selector: Arc<dyn QuestionSelector>, tx: UnboundedSender<QuestionResponse>) -> Self {
        Self {
            state: AppState::Menu,
            menu_choice: Category::Friends,
            session: GameSession::new(),
            selector,
            tx,
        }
    }

    pub fn source_label(&self) -> String {
        self.selector.describe()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        match self.state {
            AppState::Menu => self.handle_menu_key(key),
            AppState::Playing => self.handle_game_key(key, now),
        }
    }

    pub fn apply_response(&mut self, response: QuestionResponse) {
        if self.session.apply_response(response) {
            tracing::debug!("question displayed");
        }
    }

    /// Whether the screen changes without input (flip or spinner).
    pub fn needs_tick(&self, now: Instant) -> bool {
        self.state == AppState::Playing
            && (self.session.is_animating(now) || self.session.is_pending())
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.menu_choice = self.menu_choice.other();
            }
            KeyCode::Char('1') => self.start_game(Category::Friends),
            KeyCode::Char('2') => self.start_game(Category::Couples),
            KeyCode::Enter | KeyCode::Char(' ') => self.start_game(self.menu_choice),
            KeyCode::Esc | KeyCode::Char('q') => return Flow::Quit,
            _ => {}
        }
        Flow::Continue
    }

    fn handle_game_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let request = match self.session.card_state {
                    CardState::Hidden => self.session.reveal(now),
                    CardState::Shown => self.session.reroll(now),
                    CardState::Pending => None,
                };
                self.dispatch(request);
            }
            KeyCode::Char('r') => {
                let request = self.session.reroll(now);
                self.dispatch(request);
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                self.session.reset();
                self.state = AppState::Menu;
            }
            KeyCode::Char('q') => return Flow::Quit,
            _ => {}
        }
        Flow::Continue
    }

    fn start_game(&mut self, category: Category) {
        self.menu_choice = category;
        self.session.choose_category(category);
        self.state = AppState::Playing;
    }

    fn dispatch(&self, request: Option<QuestionRequest>) {
        if let Some(request) = request {
            spawn_question_request(self.selector.clone(), request, self.tx.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{ModelConfig, TextBackend};
    use crate::error::{SelectError, FALLBACK_TROUBLE};
    use crate::selector::GenerativeSelector;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    /// Counts calls and answers "<label> #<n>".
    struct CountingSelector {
        calls: AtomicUsize,
        delay: Duration,
    }

    impl CountingSelector {
        fn new(delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                delay,
            })
        }
    }

    #[async_trait]
    impl QuestionSelector for CountingSelector {
        async fn select(&self, category: Category) -> String {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            tokio::time::sleep(self.delay).await;
            format!("{} #{}", category.label(), n)
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(
        selector: Arc<dyn QuestionSelector>,
    ) -> (App, UnboundedReceiver<QuestionResponse>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(selector, tx), rx)
    }

    #[tokio::test]
    async fn test_menu_navigation_and_selection() {
        let (mut app, _rx) = app_with(CountingSelector::new(Duration::ZERO));
        let now = Instant::now();
        assert_eq!(app.state, AppState::Menu);

        app.handle_key(press(KeyCode::Right), now);
        assert_eq!(app.menu_choice, Category::Couples);

        app.handle_key(press(KeyCode::Enter), now);
        assert_eq!(app.state, AppState::Playing);
        assert_eq!(app.session.category, Some(Category::Couples));
    }

    #[tokio::test]
    async fn test_number_keys_pick_category() {
        let (mut app, _rx) = app_with(CountingSelector::new(Duration::ZERO));
        app.handle_key(press(KeyCode::Char('1')), Instant::now());
        assert_eq!(app.session.category, Some(Category::Friends));
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let (mut app, _rx) = app_with(CountingSelector::new(Duration::ZERO));
        let now = Instant::now();
        assert_eq!(app.handle_key(press(KeyCode::Char('q')), now), Flow::Quit);
        assert_eq!(
            app.handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                now
            ),
            Flow::Quit
        );
    }

    #[tokio::test]
    async fn test_reveal_displays_selector_text() {
        let selector = CountingSelector::new(Duration::ZERO);
        let (mut app, mut rx) = app_with(selector.clone());
        let now = Instant::now();

        app.handle_key(press(KeyCode::Char('1')), now);
        app.handle_key(press(KeyCode::Char(' ')), now);
        assert!(app.session.is_pending());
        assert!(app.needs_tick(now));

        let response = rx.recv().await.unwrap();
        app.apply_response(response);
        assert_eq!(app.session.card_state, CardState::Shown);
        assert_eq!(app.session.question.as_deref(), Some("Teman #1"));
    }

    #[tokio::test]
    async fn test_rapid_double_reveal_fires_once() {
        let selector = CountingSelector::new(Duration::from_millis(20));
        let (mut app, mut rx) = app_with(selector.clone());
        let now = Instant::now();

        app.handle_key(press(KeyCode::Char('2')), now);
        app.handle_key(press(KeyCode::Enter), now);
        app.handle_key(press(KeyCode::Enter), now);
        app.handle_key(press(KeyCode::Char('r')), now);

        let response = rx.recv().await.unwrap();
        app.apply_response(response);

        assert_eq!(selector.calls.load(Ordering::SeqCst), 1);
        assert_eq!(app.session.question.as_deref(), Some("Pasangan #1"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_reroll_replaces_question() {
        let selector = CountingSelector::new(Duration::ZERO);
        let (mut app, mut rx) = app_with(selector.clone());
        let now = Instant::now();

        app.handle_key(press(KeyCode::Char('1')), now);
        app.handle_key(press(KeyCode::Enter), now);
        app.apply_response(rx.recv().await.unwrap());

        app.handle_key(press(KeyCode::Char('r')), now);
        assert_eq!(app.session.question.as_deref(), Some("Teman #1"));
        app.apply_response(rx.recv().await.unwrap());
        assert_eq!(app.session.question.as_deref(), Some("Teman #2"));
    }

    #[tokio::test]
    async fn test_escape_while_pending_drops_late_reply() {
        let selector = CountingSelector::new(Duration::from_millis(10));
        let (mut app, mut rx) = app_with(selector.clone());
        let now = Instant::now();

        app.handle_key(press(KeyCode::Char('1')), now);
        app.handle_key(press(KeyCode::Enter), now);
        app.handle_key(press(KeyCode::Esc), now);
        assert_eq!(app.state, AppState::Menu);

        app.apply_response(rx.recv().await.unwrap());
        assert_eq!(app.session.card_state, CardState::Hidden);
        assert!(app.session.question.is_none());
        assert!(app.session.category.is_none());
    }

    struct OfflineBackend;

    #[async_trait]
    impl TextBackend for OfflineBackend {
        async fn generate(
            &self,
            _config: &ModelConfig,
            _instruction: &str,
        ) -> Result<String, SelectError> {
            Err(SelectError::BackendUnavailable("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn test_backend_failure_still_shows_card() {
        let (mut app, mut rx) = app_with(Arc::new(GenerativeSelector::new(
            OfflineBackend,
            ModelConfig::default(),
            Duration::from_secs(1),
        )));
        let now = Instant::now();

        app.handle_key(press(KeyCode::Char('2')), now);
        app.handle_key(press(KeyCode::Enter), now);
        app.apply_response(rx.recv().await.unwrap());

        assert_eq!(app.session.card_state, CardState::Shown);
        assert_eq!(app.session.question.as_deref(), Some(FALLBACK_TROUBLE));
    }
}
