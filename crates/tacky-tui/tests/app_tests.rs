use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect as CellRect;
use std::sync::Arc;
use tacky_core::AppConfig;
use tacky_domain::{Board, BoardId, Card, CardId, List, ListId, Workspace, LABELS};
use tacky_persistence::{BackgroundSaver, BoardStorage, FileKeyValueStore};
use tacky_tui::events::Event;
use tacky_tui::App;
use tempfile::TempDir;

/// Same strip the full-screen layout gives a 120x30 terminal.
const BOARD_AREA: CellRect = CellRect::new(0, 1, 120, 28);

fn list(id: &str, cards: &[&str]) -> List {
    let mut list = List::new(id.to_uppercase());
    list.id = ListId::from(id);
    list.with_cards(
        cards
            .iter()
            .map(|c| {
                let mut card = Card::new(*c);
                card.id = CardId::from(*c);
                card
            })
            .collect(),
    )
}

fn workspace() -> Workspace {
    let mut board = Board::new("Home").with_lists(vec![
        list("a", &["a1", "a2", "a3"]),
        list("b", &["b1", "b2"]),
    ]);
    board.id = BoardId::from("home");
    Workspace::new(vec![board])
}

fn app() -> App {
    let mut app = App::new(workspace(), None, &AppConfig::default()).unwrap();
    app.resize(BOARD_AREA);
    app
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
}

fn card_titles(app: &App, list: usize) -> Vec<String> {
    app.board().unwrap().lists[list]
        .cards
        .iter()
        .map(|c| c.title.clone())
        .collect()
}

#[test]
fn test_mouse_drag_moves_card_between_lists() {
    let mut app = app();

    // a1 sits at rows 2..6 of the first column; b1/b2 at rows 2..6 and 6..10 of the second
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
    assert!(app.controller().is_dragging());
    assert!(app.controller().marker().is_set());

    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 8));
    assert!(app.controller().is_dragging_over(&ListId::from("b")));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 8));

    assert_eq!(card_titles(&app, 0), vec!["a2", "a3"]);
    assert_eq!(card_titles(&app, 1), vec!["b1", "a1", "b2"]);
    assert!(!app.controller().is_dragging());
    assert!(!app.controller().marker().is_set());
}

#[test]
fn test_drop_animation_finishes_on_ticks() {
    let mut app = app();
    let item = tacky_dnd::DraggableId::Card(CardId::from("a1"));

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 8));
    assert!(app.controller().snapshot(&item).is_drop_animating);

    for _ in 0..12 {
        app.handle_event(Event::Tick);
    }
    assert!(!app.controller().snapshot(&item).is_drop_animating);
    assert!(!app.overlay().is_animating());
}

#[test]
fn test_escape_cancels_without_changes() {
    let mut app = app();
    let before = app.board().unwrap().clone();

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 8));
    app.handle_event(key(KeyCode::Esc));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 8));

    assert_eq!(app.board().unwrap(), &before);
    assert!(!app.controller().is_dragging());
    assert!(!app.controller().marker().is_set());
}

#[test]
fn test_focus_loss_cancels() {
    let mut app = app();
    let before = app.board().unwrap().clone();

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 40, 1));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 2, 1));
    app.handle_event(Event::FocusLost);

    assert_eq!(app.board().unwrap(), &before);
    assert!(!app.controller().marker().is_set());
}

#[test]
fn test_list_header_drag_reorders_lists() {
    let mut app = app();

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 40, 1));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 2, 1));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 2, 1));

    let order: Vec<_> = app
        .board()
        .unwrap()
        .lists
        .iter()
        .map(|l| l.id.as_str().to_string())
        .collect();
    assert_eq!(order, vec!["b", "a"]);
}

#[test]
fn test_release_in_gutter_is_cancelled() {
    let mut app = app();
    let before = app.board().unwrap().clone();

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 100, 8));

    assert_eq!(app.board().unwrap(), &before);
}

#[test]
fn test_keys_add_and_delete() {
    let mut app = app();

    app.handle_event(mouse(MouseEventKind::Moved, 40, 20));
    app.handle_event(key(KeyCode::Char('n')));
    assert_eq!(card_titles(&app, 1), vec!["b1", "b2", "New Card"]);

    app.handle_event(mouse(MouseEventKind::Moved, 40, 3));
    app.handle_event(key(KeyCode::Char('d')));
    assert_eq!(card_titles(&app, 1), vec!["b2", "New Card"]);

    app.handle_event(key(KeyCode::Char('a')));
    assert_eq!(app.board().unwrap().lists.len(), 3);
    assert_eq!(app.layout().lists.len(), 3);

    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn test_auto_scroll_follows_list_drag() {
    let lists = (0..8).map(|i| List::new(format!("L{}", i))).collect();
    let workspace = Workspace::new(vec![Board::new("Wide").with_lists(lists)]);
    let mut app = App::new(workspace, None, &AppConfig::default()).unwrap();
    app.resize(BOARD_AREA);
    assert_eq!(app.layout().max_strip_scroll, 134.0);

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 1));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 119, 14));
    app.handle_event(Event::Tick);
    let first = app.scroll().strip_x;
    assert!(first > 0.0);

    // the pointer is held still at the edge; the strip keeps moving
    app.handle_event(Event::Tick);
    assert!(app.scroll().strip_x > first);
    for _ in 0..70 {
        app.handle_event(Event::Tick);
    }
    assert_eq!(app.scroll().strip_x, app.layout().max_strip_scroll);

    app.handle_event(Event::Tick);
    assert_eq!(app.scroll().strip_x, 134.0);

    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 119, 14));
    let order: Vec<_> = app
        .board()
        .unwrap()
        .lists
        .iter()
        .map(|l| l.title.clone())
        .collect();
    assert_eq!(order, vec!["L1", "L2", "L3", "L4", "L5", "L6", "L7", "L0"]);
}

#[test]
fn test_auto_scroll_stops_when_gesture_ends() {
    let lists = (0..8).map(|i| List::new(format!("L{}", i))).collect();
    let workspace = Workspace::new(vec![Board::new("Wide").with_lists(lists)]);
    let mut app = App::new(workspace, None, &AppConfig::default()).unwrap();
    app.resize(BOARD_AREA);

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 1));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 119, 14));
    app.handle_event(Event::Tick);
    app.handle_event(key(KeyCode::Esc));

    let scrolled = app.scroll().strip_x;
    for _ in 0..5 {
        app.handle_event(Event::Tick);
    }
    assert_eq!(app.scroll().strip_x, scrolled);
}

#[test]
fn test_plain_move_mid_drag_cancels_gesture() {
    let mut app = app();
    let before = app.board().unwrap().clone();

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 8));
    // button released outside the terminal, so only a move arrives
    app.handle_event(mouse(MouseEventKind::Moved, 40, 20));
    assert!(!app.controller().is_dragging());
    assert!(!app.controller().marker().is_set());

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 40, 20));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 20));
    assert_eq!(app.board().unwrap(), &before);
}

#[test]
fn test_new_press_mid_drag_cancels_gesture() {
    let mut app = app();
    let before = app.board().unwrap().clone();

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 8));
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 40, 20));
    assert!(!app.controller().is_dragging());

    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 20));
    assert_eq!(app.board().unwrap(), &before);
}

#[test]
fn test_other_button_mid_drag_cancels_gesture() {
    let mut app = app();
    let before = app.board().unwrap().clone();

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 8));
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Right), 40, 8));
    assert!(!app.controller().is_dragging());

    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 8));
    assert_eq!(app.board().unwrap(), &before);
}

#[test]
fn test_edit_card_dialog_saves_fields() {
    let mut app = app();

    app.handle_event(mouse(MouseEventKind::Moved, 5, 3));
    app.handle_event(key(KeyCode::Char('e')));
    assert!(app.dialog().is_some());

    // dialog keys are text, not bindings
    type_text(&mut app, "!");
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "quick notes");
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "2030-01-02");
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "2");
    assert!(!app.should_quit);

    // mouse input is ignored while the dialog is open
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
    assert!(!app.controller().is_dragging());

    app.handle_event(key(KeyCode::Enter));
    assert!(app.dialog().is_none());
    let card = &app.board().unwrap().lists[0].cards[0];
    assert_eq!(card.id, CardId::from("a1"));
    assert_eq!(card.title, "a1!");
    assert_eq!(card.description, "quick notes");
    assert_eq!(card.due, "2030-01-02");
    assert_eq!(card.labels, vec![LABELS[1].to_string()]);
}

#[test]
fn test_edit_card_dialog_escape_discards() {
    let mut app = app();
    let before = app.board().unwrap().clone();

    app.handle_event(mouse(MouseEventKind::Moved, 5, 3));
    app.handle_event(key(KeyCode::Char('e')));
    type_text(&mut app, "xyz");
    app.handle_event(key(KeyCode::Esc));

    assert!(app.dialog().is_none());
    assert_eq!(app.board().unwrap(), &before);
}

#[test]
fn test_rename_list_requires_title() {
    let mut app = app();

    app.handle_event(mouse(MouseEventKind::Moved, 40, 20));
    app.handle_event(key(KeyCode::Char('r')));
    app.handle_event(key(KeyCode::Backspace));
    app.handle_event(key(KeyCode::Enter));
    assert!(app.dialog().is_some());

    type_text(&mut app, " Doing ");
    app.handle_event(key(KeyCode::Enter));
    assert!(app.dialog().is_none());
    assert_eq!(app.board().unwrap().lists[1].title, "Doing");
}

#[test]
fn test_delete_list_asks_first() {
    let mut app = app();

    app.handle_event(mouse(MouseEventKind::Moved, 40, 20));
    app.handle_event(key(KeyCode::Char('x')));
    app.handle_event(key(KeyCode::Char('n')));
    assert!(app.dialog().is_none());
    assert_eq!(app.board().unwrap().lists.len(), 2);

    app.handle_event(key(KeyCode::Char('x')));
    app.handle_event(key(KeyCode::Char('y')));
    let board = app.board().unwrap();
    assert_eq!(board.lists.len(), 1);
    assert_eq!(board.lists[0].id, ListId::from("a"));
    assert_eq!(app.layout().lists.len(), 1);
}

#[test]
fn test_unknown_board_is_rejected() {
    let result = App::new(workspace(), Some(BoardId::from("missing")), &AppConfig::default());
    assert!(result.is_err());
}

#[test]
fn test_empty_workspace_gets_a_board() {
    let app = App::new(Workspace::default(), None, &AppConfig::default()).unwrap();
    assert_eq!(app.board().unwrap().name, "My Board");
}

#[tokio::test]
async fn test_committed_moves_are_saved() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(BoardStorage::new(FileKeyValueStore::new(dir.path())));

    let mut app = App::new(workspace(), None, &AppConfig::default())
        .unwrap()
        .with_saver(BackgroundSaver::spawn(Arc::clone(&storage)));
    app.resize(BOARD_AREA);

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 8));
    app.shutdown().await;

    let reloaded = BoardStorage::new(FileKeyValueStore::new(dir.path())).load();
    let titles: Vec<_> = reloaded[0].lists[1].cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["b1", "a1", "b2"]);
}
