//! Main TUI application state and logic

use crate::algorithms::errors::StepError;
use crate::algorithms::graph::{AdjacencyMap, Edge, GraphTraversal, VisitedSet};
use crate::algorithms::hanoi::{generate_hanoi, HanoiFrame};
use crate::algorithms::sieve::SieveEvent;
use crate::algorithms::sort::{SortAlgorithm, SortFrame};
use crate::algorithms::tree::{Tree, TreeTraversal, VisitOrder};
use crate::playback::{
    PlaybackController, PlaybackStatus, PlaybackTiming, SieveRunner, TimerQueue, TimerToken,
};
use crate::ui::panes::{self, StatusIndicator, StatusRenderData, StructureRow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// A validated request for one algorithm run
#[derive(Debug, Clone, PartialEq)]
pub enum RunRequest {
    Sort {
        algorithm: SortAlgorithm,
        values: Vec<f64>,
    },
    Sieve {
        limit: usize,
    },
    Hanoi {
        disks: usize,
    },
    Graph {
        traversal: GraphTraversal,
        nodes: usize,
        edges: Vec<Edge>,
    },
    Tree {
        traversal: TreeTraversal,
        nodes: usize,
        edges: Vec<Edge>,
    },
}

/// Playback operations the key handler needs, independent of snapshot type
trait Transport {
    fn pause(&mut self, queue: &mut TimerQueue);
    fn resume(&mut self, queue: &mut TimerQueue);
    fn step_forward(&mut self, queue: &mut TimerQueue) -> bool;
    fn step_backward(&mut self, queue: &mut TimerQueue) -> bool;
    fn rewind(&mut self, queue: &mut TimerQueue);
    fn jump_to_end(&mut self, queue: &mut TimerQueue);
    fn reset(&mut self, queue: &mut TimerQueue);
    fn on_timer(&mut self, token: TimerToken, queue: &mut TimerQueue) -> bool;
    fn status(&self) -> PlaybackStatus;
    fn progress(&self) -> (usize, usize);
}

impl<S> Transport for PlaybackController<S> {
    fn pause(&mut self, queue: &mut TimerQueue) {
        PlaybackController::pause(self, queue)
    }

    fn resume(&mut self, queue: &mut TimerQueue) {
        PlaybackController::resume(self, queue)
    }

    fn step_forward(&mut self, queue: &mut TimerQueue) -> bool {
        PlaybackController::step_forward(self, queue).is_some()
    }

    fn step_backward(&mut self, queue: &mut TimerQueue) -> bool {
        PlaybackController::step_backward(self, queue).is_some()
    }

    fn rewind(&mut self, queue: &mut TimerQueue) {
        PlaybackController::rewind(self, queue)
    }

    fn jump_to_end(&mut self, queue: &mut TimerQueue) {
        PlaybackController::jump_to_end(self, queue)
    }

    fn reset(&mut self, queue: &mut TimerQueue) {
        PlaybackController::reset(self, queue)
    }

    fn on_timer(&mut self, token: TimerToken, queue: &mut TimerQueue) -> bool {
        PlaybackController::on_timer(self, token, queue).is_some()
    }

    fn status(&self) -> PlaybackStatus {
        PlaybackController::status(self)
    }

    fn progress(&self) -> (usize, usize) {
        PlaybackController::progress(self)
    }
}

/// What is on screen, with the state driving it
enum Visualization {
    Sort {
        algorithm: SortAlgorithm,
        initial: SortFrame,
        player: PlaybackController<SortFrame>,
    },
    Hanoi {
        disks: usize,
        player: PlaybackController<HanoiFrame>,
    },
    Graph {
        traversal: GraphTraversal,
        rows: Vec<StructureRow>,
        player: PlaybackController<VisitedSet>,
    },
    Tree {
        traversal: TreeTraversal,
        rows: Vec<StructureRow>,
        player: PlaybackController<VisitOrder>,
    },
    Sieve {
        limit: usize,
        runner: SieveRunner,
    },
}

impl Visualization {
    /// Generate the steps for `request` and start playing them
    fn start(
        request: &RunRequest,
        timing: PlaybackTiming,
        queue: &mut TimerQueue,
    ) -> Result<Self, StepError> {
        let interval = timing.tick_interval;
        let view = match request {
            RunRequest::Sort { algorithm, values } => {
                let mut player = PlaybackController::new(interval);
                player.load(algorithm.generate(values), queue);
                Visualization::Sort {
                    algorithm: *algorithm,
                    initial: values.clone(),
                    player,
                }
            }
            RunRequest::Hanoi { disks } => {
                let steps = generate_hanoi(*disks)?;
                let mut player = PlaybackController::new(interval);
                player.load(steps, queue);
                Visualization::Hanoi {
                    disks: *disks,
                    player,
                }
            }
            RunRequest::Graph {
                traversal,
                nodes,
                edges,
            } => {
                let graph = AdjacencyMap::from_edges(*nodes, edges)?;
                let mut player = PlaybackController::new(interval);
                player.load(traversal.generate(&graph), queue);
                Visualization::Graph {
                    traversal: *traversal,
                    rows: panes::graph_rows(&graph),
                    player,
                }
            }
            RunRequest::Tree {
                traversal,
                nodes,
                edges,
            } => {
                let tree = Tree::new(*nodes, edges)?;
                let mut player = PlaybackController::new(interval);
                player.load(tree.traverse(*traversal), queue);
                Visualization::Tree {
                    traversal: *traversal,
                    rows: panes::tree_rows(&tree),
                    player,
                }
            }
            RunRequest::Sieve { limit } => {
                let mut runner = SieveRunner::new(timing);
                runner.start(*limit, queue)?;
                Visualization::Sieve {
                    limit: *limit,
                    runner,
                }
            }
        };
        Ok(view)
    }

    fn player(&self) -> Option<&dyn Transport> {
        match self {
            Visualization::Sort { player, .. } => Some(player as &dyn Transport),
            Visualization::Hanoi { player, .. } => Some(player as &dyn Transport),
            Visualization::Graph { player, .. } => Some(player as &dyn Transport),
            Visualization::Tree { player, .. } => Some(player as &dyn Transport),
            Visualization::Sieve { .. } => None,
        }
    }

    fn transport(&mut self) -> Option<&mut dyn Transport> {
        match self {
            Visualization::Sort { player, .. } => Some(player as &mut dyn Transport),
            Visualization::Hanoi { player, .. } => Some(player as &mut dyn Transport),
            Visualization::Graph { player, .. } => Some(player as &mut dyn Transport),
            Visualization::Tree { player, .. } => Some(player as &mut dyn Transport),
            Visualization::Sieve { .. } => None,
        }
    }

    /// Cancel whatever is pending so a replacement can start cleanly
    fn stop(&mut self, queue: &mut TimerQueue) {
        match self {
            Visualization::Sieve { runner, .. } => runner.cancel(queue),
            other => {
                if let Some(transport) = other.transport() {
                    transport.reset(queue);
                }
            }
        }
    }

    /// Route a fired timer; returns a status message when something changed
    fn on_timer(&mut self, token: TimerToken, queue: &mut TimerQueue) -> Option<String> {
        match self {
            Visualization::Sieve { runner, .. } => {
                runner.on_timer(token, queue).map(|update| match update.event {
                    SieveEvent::Pivot(p) => format!("Marking multiples of {}", p),
                    SieveEvent::Marked(j) => format!("Crossed off {}", j),
                    SieveEvent::Finished => "Sieve complete".to_string(),
                })
            }
            other => {
                let transport = other.transport()?;
                if !transport.on_timer(token, queue) {
                    return None;
                }
                Some(if transport.status() == PlaybackStatus::Finished {
                    "Playback complete".to_string()
                } else {
                    "Playing...".to_string()
                })
            }
        }
    }
}

/// The main application state
pub struct App {
    /// The run being shown, kept so it can be restarted
    pub request: RunRequest,

    pub timing: PlaybackTiming,

    /// Virtual clock driven from wall-clock time in the event loop
    queue: TimerQueue,

    view: Visualization,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    pub is_error: bool,

    /// Wall-clock time of the last queue advance
    last_advance: Instant,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Generate the steps for `request` and start playback
    pub fn new(request: RunRequest, timing: PlaybackTiming) -> Result<Self, StepError> {
        let mut queue = TimerQueue::new();
        let view = Visualization::start(&request, timing, &mut queue)?;

        Ok(App {
            request,
            timing,
            queue,
            view,
            should_quit: false,
            status_message: String::from("Playing..."),
            is_error: false,
            last_advance: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            let elapsed = now.duration_since(self.last_advance);
            self.last_advance = now;
            self.fire_timers(elapsed);

            // Use poll with timeout so timers keep firing without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance the virtual clock and dispatch every fired timer
    pub fn fire_timers(&mut self, elapsed: Duration) {
        for token in self.queue.advance(elapsed) {
            if let Some(message) = self.view.on_timer(token, &mut self.queue) {
                self.status_message = message;
                self.is_error = false;
            }
        }
    }

    /// Throw away the current run and start the same request again
    pub fn restart(&mut self) {
        self.view.stop(&mut self.queue);
        match Visualization::start(&self.request, self.timing, &mut self.queue) {
            Ok(view) => {
                self.view = view;
                self.status_message = "Restarted".to_string();
                self.is_error = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "restart failed");
                self.status_message = e.to_string();
                self.is_error = true;
            }
        }
    }

    /// (steps shown, total steps if known)
    pub fn progress(&self) -> (usize, Option<usize>) {
        if let Some(player) = self.view.player() {
            let (shown, total) = player.progress();
            return (shown, Some(total));
        }
        match &self.view {
            Visualization::Sieve { runner, .. } => (runner.steps_emitted(), None),
            _ => (0, None),
        }
    }

    fn indicator(&self) -> StatusIndicator {
        if let Visualization::Sieve { runner, .. } = &self.view {
            return if runner.is_running() {
                StatusIndicator::Playing
            } else if runner.is_finished() {
                StatusIndicator::End
            } else {
                StatusIndicator::Paused
            };
        }

        let Some(player) = self.view.player() else {
            return StatusIndicator::Start;
        };
        match (player.status(), player.progress().0) {
            (PlaybackStatus::Running, _) => StatusIndicator::Playing,
            (PlaybackStatus::Finished, _) => StatusIndicator::End,
            (PlaybackStatus::Paused, 0) | (PlaybackStatus::Idle, _) => StatusIndicator::Start,
            (PlaybackStatus::Paused, _) => StatusIndicator::Paused,
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let pane_area = chunks[0];
        let status_area = chunks[1];

        match &self.view {
            Visualization::Sort {
                algorithm,
                initial,
                player,
            } => {
                let values = player.current_snapshot().unwrap_or(initial);
                let title = format!("{} Sort", algorithm);
                panes::render_sort_pane(frame, pane_area, &title, values);
            }
            Visualization::Hanoi { disks, player } => {
                let state = player
                    .current_snapshot()
                    .or_else(|| player.sequence().first());
                panes::render_hanoi_pane(frame, pane_area, state, *disks);
            }
            Visualization::Graph {
                traversal,
                rows,
                player,
            } => {
                let visited = player.current_snapshot().map(Vec::as_slice).unwrap_or(&[]);
                let title = format!("Graph ({})", traversal);
                panes::render_traversal_pane(frame, pane_area, &title, rows, visited);
            }
            Visualization::Tree {
                traversal,
                rows,
                player,
            } => {
                let visited = player.current_snapshot().map(Vec::as_slice).unwrap_or(&[]);
                let title = format!("Tree ({})", traversal);
                panes::render_traversal_pane(frame, pane_area, &title, rows, visited);
            }
            Visualization::Sieve { limit, runner } => {
                panes::render_sieve_pane(frame, pane_area, runner.frame(), *limit);
            }
        }

        let (current_step, total_steps) = self.progress();
        panes::render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                message: &self.status_message,
                current_step,
                total_steps,
                indicator: self.indicator(),
                is_error: self.is_error,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.restart();
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                if let Visualization::Sieve { runner, .. } = &mut self.view {
                    runner.cancel(&mut self.queue);
                    self.status_message = "Sieve cancelled".to_string();
                }
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                self.with_transport(|transport, queue| {
                    let stepped = (0..n)
                        .take_while(|_| transport.step_forward(queue))
                        .count();
                    format!("Stepped forward {} step(s)", stepped)
                });
            }
            KeyCode::Right => {
                self.with_transport(|transport, queue| {
                    if transport.step_forward(queue) {
                        "Stepped forward".to_string()
                    } else {
                        "Cannot step forward: already at the end".to_string()
                    }
                });
            }
            KeyCode::Left => {
                self.with_transport(|transport, queue| {
                    if transport.step_backward(queue) {
                        "Stepped backward".to_string()
                    } else {
                        "Cannot step backward: already at the beginning".to_string()
                    }
                });
            }
            KeyCode::Char(' ') => {
                // Toggle playback (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.with_transport(|transport, queue| match transport.status() {
                        PlaybackStatus::Running => {
                            transport.pause(queue);
                            "Paused".to_string()
                        }
                        PlaybackStatus::Paused => {
                            transport.resume(queue);
                            "Playing...".to_string()
                        }
                        _ => "Nothing to play".to_string(),
                    });
                }
            }
            KeyCode::Enter => {
                self.with_transport(|transport, queue| {
                    transport.jump_to_end(queue);
                    "Jumped to end".to_string()
                });
            }
            KeyCode::Backspace => {
                self.with_transport(|transport, queue| {
                    transport.rewind(queue);
                    "Jumped to start".to_string()
                });
            }
            _ => {}
        }
    }

    fn with_transport<F>(&mut self, f: F)
    where
        F: FnOnce(&mut dyn Transport, &mut TimerQueue) -> String,
    {
        self.is_error = false;
        self.status_message = match self.view.transport() {
            Some(transport) => f(transport, &mut self.queue),
            None => "Sieve runs cannot be paused or stepped; c cancels, r restarts".to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn sort_app() -> App {
        let request = RunRequest::Sort {
            algorithm: SortAlgorithm::Bubble,
            values: vec![3.0, 2.0, 1.0],
        };
        App::new(request, PlaybackTiming::default()).unwrap()
    }

    #[test]
    fn test_progress_follows_playback() {
        let mut app = sort_app();
        let total = SortAlgorithm::Bubble.generate(&[3.0, 2.0, 1.0]).len();

        assert_eq!(app.progress(), (0, Some(total)));
        assert_eq!(app.indicator(), StatusIndicator::Playing);

        app.fire_timers(Duration::from_millis(1000));
        assert_eq!(app.progress(), (1, Some(total)));

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.indicator(), StatusIndicator::Paused);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.progress(), (total, Some(total)));
        assert_eq!(app.indicator(), StatusIndicator::End);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.progress(), (0, Some(total)));
        assert_eq!(app.indicator(), StatusIndicator::Start);
    }

    #[test]
    fn test_sieve_progress_has_no_total() {
        let request = RunRequest::Sieve { limit: 10 };
        let mut app = App::new(request, PlaybackTiming::default()).unwrap();

        assert_eq!(app.progress(), (1, None));
        assert_eq!(app.indicator(), StatusIndicator::Playing);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.indicator(), StatusIndicator::Paused);
        assert_eq!(app.progress(), (1, None));
    }

    #[test]
    fn test_oversized_sieve_request_is_rejected() {
        let request = RunRequest::Sieve { limit: usize::MAX };
        assert!(matches!(
            App::new(request, PlaybackTiming::default()),
            Err(StepError::InvalidInput(
                crate::algorithms::errors::InvalidInputError::LimitOutOfRange { .. }
            ))
        ));
    }
}
