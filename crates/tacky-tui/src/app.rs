use crate::dialog::{Dialog, DialogAction};
use crate::events::{should_quit, Event, EventHandler, TICK_RATE};
use crate::layout::{BoardLayout, Hit, ScrollState, ScrollSurface, CARD_HEIGHT, CELLS_PER_PIXEL};
use crate::ui;
use chrono::NaiveDate;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, KeyCode,
        KeyEvent, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect as CellRect, Terminal};
use std::io;
use tacky_core::{AppConfig, Point, Rect, TackyError, TackyResult};
use tacky_dnd::{
    AutoScrollEngine, CancelReason, DragHooks, DragSessionController, DraggableId, DropLocation,
    DropTargets, GestureEnd, GestureOutcome, ManualFrameClock, OverlayRenderer,
};
use tacky_domain::{Board, BoardId, List, Workspace};
use tacky_persistence::BackgroundSaver;

pub struct App {
    pub should_quit: bool,
    workspace: Workspace,
    board_id: BoardId,
    saver: Option<BackgroundSaver>,
    unsaved: bool,
    controller: DragSessionController,
    autoscroll: AutoScrollEngine<ManualFrameClock>,
    overlay: OverlayRenderer,
    scroll: ScrollState,
    area: Option<CellRect>,
    layout: BoardLayout,
    targets: DropTargets,
    hover: Option<Point>,
    status: Option<String>,
    dialog: Option<Dialog>,
}

impl App {
    /// Opens `board_id`, or the newest board when none is given. An empty
    /// workspace gets a fresh board.
    pub fn new(
        mut workspace: Workspace,
        board_id: Option<BoardId>,
        config: &AppConfig,
    ) -> TackyResult<Self> {
        let mut unsaved = false;
        let board_id = match board_id {
            Some(id) if workspace.get(&id).is_some() => id,
            Some(id) => return Err(TackyError::NotFound(format!("board {}", id))),
            None => match workspace.boards().first() {
                Some(board) => board.id.clone(),
                None => {
                    unsaved = true;
                    let board = workspace.create_board("My Board", None);
                    tracing::info!("Created board {} for an empty workspace", board.id);
                    board.id.clone()
                }
            },
        };

        let autoscroll = AutoScrollEngine::new(
            ManualFrameClock::new(),
            config.auto_scroll.scaled(CELLS_PER_PIXEL),
        );

        Ok(Self {
            should_quit: false,
            workspace,
            board_id,
            saver: None,
            unsaved,
            controller: DragSessionController::default(),
            autoscroll,
            overlay: OverlayRenderer::new(),
            scroll: ScrollState::default(),
            area: None,
            layout: BoardLayout::default(),
            targets: DropTargets::default(),
            hover: None,
            status: None,
            dialog: None,
        })
    }

    pub fn with_saver(mut self, saver: BackgroundSaver) -> Self {
        self.saver = Some(saver);
        if self.unsaved {
            self.persist();
        }
        self
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn board(&self) -> Option<&Board> {
        self.workspace.get(&self.board_id)
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn controller(&self) -> &DragSessionController {
        &self.controller
    }

    pub fn overlay(&self) -> &OverlayRenderer {
        &self.overlay
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    /// Sets the board strip area. Cheap when nothing changed.
    pub fn resize(&mut self, area: CellRect) {
        if self.area != Some(area) {
            self.area = Some(area);
            self.relayout();
        }
    }

    fn relayout(&mut self) {
        let Some(area) = self.area else {
            return;
        };
        let strip = Rect::new(
            f64::from(area.x),
            f64::from(area.y),
            f64::from(area.width),
            f64::from(area.height),
        );
        self.layout = match self.workspace.get(&self.board_id) {
            Some(board) => BoardLayout::compute(board, strip, &self.scroll),
            None => BoardLayout::default(),
        };
        self.scroll.clamp_to(&self.layout);
        self.targets = self.layout.drop_targets();
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => self.cancel_drag(CancelReason::FocusLost),
            Event::FocusGained | Event::Resize(..) => {}
            Event::Tick => self.on_tick(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.dialog.is_some() {
            self.handle_dialog_key(key.code);
            return;
        }
        if should_quit(&key) {
            self.cancel_drag(CancelReason::Escape);
            self.quit();
            return;
        }
        if key.code == KeyCode::Esc {
            self.cancel_drag(CancelReason::Escape);
            return;
        }
        if self.controller.is_dragging() {
            return;
        }
        match key.code {
            KeyCode::Char('a') => self.add_list(),
            KeyCode::Char('n') => self.add_card(),
            KeyCode::Char('d') => self.delete_hovered_card(),
            KeyCode::Char('e') => self.edit_hovered_card(),
            KeyCode::Char('r') => self.rename_hovered_list(),
            KeyCode::Char('x') => self.delete_hovered_list(),
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, key_code: KeyCode) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        match dialog.handle_key(key_code) {
            DialogAction::None => {}
            DialogAction::Cancel => self.dialog = None,
            DialogAction::Confirm => {
                if let Some(dialog) = self.dialog.take() {
                    self.apply_dialog(dialog);
                }
            }
        }
    }

    fn apply_dialog(&mut self, dialog: Dialog) {
        let Some(board) = self.board() else {
            return;
        };
        let (result, done) = match &dialog {
            Dialog::EditCard(editor) => (
                board.try_update_card(&editor.list_id, &editor.to_card()),
                "Updated the card",
            ),
            Dialog::RenameList { list_id, title } => (
                board.try_rename_list(list_id, title.as_str().trim()),
                "Renamed the list",
            ),
            Dialog::ConfirmDeleteList { list_id, .. } => {
                (Ok(board.delete_list(list_id)), "Deleted the list")
            }
        };
        match result {
            Ok(next) => {
                self.commit(next);
                self.status = Some(done.to_string());
            }
            Err(e) => {
                tracing::warn!("Dialog change rejected: {}", e);
                self.status = Some(format!("Change rejected: {}", e));
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.dialog.is_some() {
            return;
        }
        let point = Point::new(f64::from(mouse.column), f64::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.start_drag(point),
            MouseEventKind::Drag(MouseButton::Left) => self.drag_to(point),
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag_to(point);
                self.finish_drag();
            }
            // a plain move or another button means the held press was lost
            MouseEventKind::Moved => {
                self.hover = Some(point);
                self.cancel_drag(CancelReason::PointerLost);
            }
            MouseEventKind::Down(_) | MouseEventKind::Up(_) => {
                self.cancel_drag(CancelReason::PointerLost);
            }
            MouseEventKind::ScrollDown => self.wheel(point, CARD_HEIGHT),
            MouseEventKind::ScrollUp => self.wheel(point, -CARD_HEIGHT),
            _ => {}
        }
    }

    fn wheel(&mut self, point: Point, dy: f64) {
        let Some(list) = self.layout.list_at(point) else {
            return;
        };
        let list_id = list.list_id.clone();
        let offset = self.scroll.list_offset(&list_id) + dy;
        self.scroll.set_list_offset(&list_id, offset);
        self.relayout();
    }

    fn start_drag(&mut self, point: Point) {
        self.hover = Some(point);
        self.status = None;
        // a fresh press while dragging means the release never arrived
        self.cancel_drag(CancelReason::PointerLost);
        let (item, source) = match self.layout.hit(point) {
            Some(Hit::ListHeader { list_id, index }) => {
                (DraggableId::List(list_id), DropLocation::in_board(index))
            }
            Some(Hit::Card {
                list_id,
                card_id,
                index,
            }) => (DraggableId::Card(card_id), DropLocation::in_list(list_id, index)),
            Some(Hit::ListBody { .. }) | None => return,
        };
        let Some(rect) = self.layout.rect_of(&item) else {
            return;
        };

        let (superseded, start) = self.controller.begin(item.clone(), source, point);
        if let Some(end) = superseded {
            self.on_gesture_end(end);
        }
        self.autoscroll.on_gesture_start(&start);
        self.overlay.lift(item, rect, point);
    }

    fn drag_to(&mut self, point: Point) {
        self.hover = Some(point);
        if let Some(progress) = self.controller.pointer_moved(point, &self.targets) {
            self.autoscroll.on_gesture_progress(&progress);
            self.overlay.track(point);
        }
    }

    fn finish_drag(&mut self) {
        if let Some(end) = self.controller.release() {
            self.on_gesture_end(end);
        }
    }

    fn cancel_drag(&mut self, reason: CancelReason) {
        if let Some(end) = self.controller.cancel(reason) {
            self.on_gesture_end(end);
        }
    }

    fn on_gesture_end(&mut self, end: GestureEnd) {
        self.autoscroll.on_gesture_end(&end);
        match &end.outcome {
            GestureOutcome::Committed(intent) => {
                match self.board().map(|board| board.try_apply_reorder(intent)) {
                    Some(Ok(next)) => self.commit(next),
                    Some(Err(e)) => {
                        tracing::warn!("Drop on {} rejected: {}", end.item, e);
                        self.status = Some(format!("Move rejected: {}", e));
                    }
                    None => {}
                }
            }
            GestureOutcome::Cancelled(reason) => {
                tracing::debug!("Gesture on {} ended without a move: {:?}", end.item, reason);
            }
        }
        self.relayout();

        let resting = self
            .layout
            .rect_of(&end.item)
            .or_else(|| self.overlay.overlay_rect(&end.item));
        if let Some(rect) = resting {
            self.overlay.settle(rect);
        }
        if !self.overlay.is_animating() {
            self.controller.finish_drop(&end.item);
        }
    }

    fn on_tick(&mut self) {
        if let Some(progress) = self.controller.frame_boundary() {
            tracing::trace!("Drop candidate settled on {:?}", progress.candidate);
        }

        let before = self.scroll.clone();
        let mut surface = ScrollSurface {
            scroll: &mut self.scroll,
            layout: &self.layout,
        };
        let planned = self.autoscroll.tick(&mut surface).is_some();
        if planned && self.scroll != before {
            self.relayout();
            // content moved under a still pointer; re-hit it so the engine
            // schedules the next frame
            if let Some(pointer) = self.controller.active().map(|a| a.pointer) {
                if let Some(progress) = self.controller.pointer_moved(pointer, &self.targets) {
                    self.autoscroll.on_gesture_progress(&progress);
                    self.overlay.track(pointer);
                }
            }
        }

        if let Some(item) = self.overlay.advance(TICK_RATE) {
            self.controller.finish_drop(&item);
        }
    }

    fn add_list(&mut self) {
        let Some(next) = self.board().map(|board| board.add_list("New List")) else {
            return;
        };
        self.commit(next);
        self.status = Some("Added a list".to_string());
    }

    /// Adds a card to the list under the pointer, or the first list.
    fn add_card(&mut self) {
        let list_id = self
            .hover
            .and_then(|point| self.layout.list_at(point))
            .or_else(|| self.layout.lists.first())
            .map(|list| list.list_id.clone());
        let Some(list_id) = list_id else {
            self.status = Some("Add a list first (a)".to_string());
            return;
        };
        let Some((next, Some(_))) = self.board().map(|board| board.add_card(&list_id)) else {
            return;
        };
        self.commit(next);
        self.status = Some("Added a card".to_string());
    }

    fn delete_hovered_card(&mut self) {
        let Some(Hit::Card {
            list_id, card_id, ..
        }) = self.hover.and_then(|point| self.layout.hit(point))
        else {
            return;
        };
        let Some(next) = self.board().map(|board| board.delete_card(&list_id, &card_id)) else {
            return;
        };
        self.commit(next);
        self.status = Some("Deleted a card".to_string());
    }

    fn edit_hovered_card(&mut self) {
        let Some(Hit::Card {
            list_id, card_id, ..
        }) = self.hover.and_then(|point| self.layout.hit(point))
        else {
            return;
        };
        let card = self
            .board()
            .and_then(|board| board.list(&list_id))
            .and_then(|list| list.card(&card_id));
        if let Some(card) = card {
            self.dialog = Some(Dialog::edit_card(list_id.clone(), card));
        }
    }

    fn hovered_list(&self) -> Option<&List> {
        let list_id = &self.hover.and_then(|point| self.layout.list_at(point))?.list_id;
        self.board()?.list(list_id)
    }

    fn rename_hovered_list(&mut self) {
        self.dialog = self.hovered_list().map(Dialog::rename_list);
    }

    fn delete_hovered_list(&mut self) {
        self.dialog = self.hovered_list().map(Dialog::confirm_delete_list);
    }

    fn commit(&mut self, board: Board) {
        if !self.workspace.update_board(board) {
            return;
        }
        self.persist();
        self.relayout();
    }

    fn persist(&mut self) {
        if let Some(saver) = &self.saver {
            saver.save(self.workspace.boards().to_vec());
            self.unsaved = false;
        }
    }

    /// Waits for queued saves to reach disk.
    pub async fn shutdown(&mut self) {
        if let Some(saver) = self.saver.take() {
            saver.close().await;
        }
    }

    pub async fn run(&mut self) -> TackyResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        self.shutdown().await;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> TackyResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}
