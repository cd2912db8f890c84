//! The game session: one explicit object holding all game state.
//!
//! A frontend owns a `GameSession`, queues input as it arrives, and calls
//! [`GameSession::tick`] once per frame with the current game-clock time.
//! Each tick runs a fixed sequence with no reentrancy:
//!
//! 1. advance every in-flight flip animation
//! 2. settle a resolving pair, or hand the turn over once its timer expires
//! 3. detect game over
//! 4. let the opponent act, if it is its turn and its last move was long enough ago
//! 5. drain queued input
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::{GameConfig, Timestamp};
//! use memory_match::game::{GameSession, InputEvent};
//! use memory_match::board::CardId;
//!
//! let mut session = GameSession::new(GameConfig::default()).unwrap();
//! session.push_input(InputEvent::SelectCard(CardId::new(0)));
//!
//! let events = session.tick(Timestamp::from_millis(16));
//! assert_eq!(events.len(), 1);
//! assert_eq!(session.selection(), &[CardId::new(0)]);
//! ```

use std::collections::VecDeque;

use super::event::GameEvent;
use super::layout::{BoardLayout, PointerTarget};
use super::view::{CardView, HudView, Outcome};
use crate::animation::{FlipEvent, FlipTarget};
use crate::board::{Board, Card, CardId};
use crate::core::{GameConfig, GameRng, Player, Scores, Timestamp};
use crate::error::ConfigError;
use crate::opponent::{OpponentPolicy, RecallPolicy};
use crate::turn::{Resolution, TurnController, TurnState};

/// Input accepted from the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    SelectCard(CardId),
    Restart,
}

/// A single game in progress, plus what is needed to deal the next one.
#[derive(Clone, Debug)]
pub struct GameSession<P: OpponentPolicy = RecallPolicy> {
    config: GameConfig,
    layout: BoardLayout,
    /// Session stream; forked once per game.
    rng: GameRng,
    board: Board,
    turn: TurnController,
    scores: Scores,
    policy: P,
    inputs: VecDeque<InputEvent>,
    now: Timestamp,
    ticks: u64,
    last_opponent_move: Option<Timestamp>,
    game_number: u32,
    game_over_announced: bool,
}

impl GameSession<RecallPolicy> {
    /// Deal a shuffled board and seat the default opponent.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let mut rng = GameRng::new(config.seed);
        let game_rng = rng.fork();
        let board = Board::shuffled(&config, &mut game_rng.for_context("shuffle"))?;
        let policy = RecallPolicy::new(game_rng.for_context("opponent"));

        tracing::info!(
            rows = config.rows,
            cols = config.cols,
            seed = config.seed,
            "New game dealt"
        );
        Ok(Self::assemble(config, rng, board, policy))
    }
}

impl<P: OpponentPolicy> GameSession<P> {
    /// Start from a prepared board and opponent.
    ///
    /// The board must have the shape `config` describes. Restarts reshuffle
    /// the same deck.
    pub fn with_board(config: GameConfig, board: Board, policy: P) -> Result<Self, ConfigError> {
        config.validate()?;
        if (board.rows(), board.cols()) != (config.rows, config.cols) {
            return Err(ConfigError::Validation(format!(
                "board is {}x{} but config is {}x{}",
                board.rows(),
                board.cols(),
                config.rows,
                config.cols
            )));
        }
        let rng = GameRng::new(config.seed);
        Ok(Self::assemble(config, rng, board, policy))
    }

    fn assemble(config: GameConfig, rng: GameRng, board: Board, policy: P) -> Self {
        Self {
            layout: BoardLayout::new(config.rows, config.cols),
            turn: TurnController::new(config.timings, Player::Human, Timestamp::ZERO),
            config,
            rng,
            board,
            scores: Scores::default(),
            policy,
            inputs: VecDeque::new(),
            now: Timestamp::ZERO,
            ticks: 0,
            last_opponent_move: None,
            game_number: 1,
            game_over_announced: false,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn.state()
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn.current_player()
    }

    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        self.turn.selection()
    }

    /// Game-clock time of the latest tick.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Ticks processed since the session was created.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Games dealt in this session, counting the current one.
    #[must_use]
    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    /// True once every pair has been found.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.scores.total() as usize == self.board.pair_count()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_game_over().then(|| Outcome::from_scores(&self.scores))
    }

    // === Render snapshots ===

    /// One view per card, in slot order.
    #[must_use]
    pub fn card_views(&self) -> Vec<CardView> {
        let selection = self.turn.selection();
        self.board
            .cards()
            .map(|card| CardView::of(card, selection.contains(&card.id())))
            .collect()
    }

    #[must_use]
    pub fn hud(&self) -> HudView {
        HudView {
            current_player: self.turn.current_player(),
            turn_state: self.turn.state(),
            human_score: self.scores[Player::Human],
            opponent_score: self.scores[Player::Opponent],
            game_over: self.is_game_over(),
            outcome: self.outcome(),
        }
    }

    // === Input ===

    /// Queue an input for the next tick.
    pub fn push_input(&mut self, input: InputEvent) {
        self.inputs.push_back(input);
    }

    /// Hit-test a pointer press on the 800x600 surface and queue the result.
    ///
    /// Returns what the press landed on.
    pub fn pointer_down(&mut self, x: i32, y: i32) -> PointerTarget {
        let target = self.layout.hit_test(x, y);
        match target {
            PointerTarget::Card(card) => self.push_input(InputEvent::SelectCard(card)),
            PointerTarget::Restart => self.push_input(InputEvent::Restart),
            PointerTarget::Miss => {}
        }
        target
    }

    /// Discard the current game and deal a new one.
    ///
    /// Board, animations, turn, scores, queued input and opponent memory are
    /// all replaced; the human moves first.
    pub fn restart(&mut self) {
        let game_rng = self.rng.fork();
        self.board = self.board.reshuffled(&mut game_rng.for_context("shuffle"));
        self.policy.reset(game_rng.for_context("opponent"));
        self.turn = TurnController::new(self.config.timings, Player::Human, self.now);
        self.scores = Scores::default();
        self.inputs.clear();
        self.last_opponent_move = None;
        self.game_over_announced = false;
        self.game_number += 1;

        tracing::info!(game = self.game_number, seed = game_rng.seed(), "New game dealt");
    }

    // === Tick ===

    /// Advance the game to `now` and return what happened.
    ///
    /// Time never runs backwards: an earlier `now` is treated as the latest
    /// time already seen.
    pub fn tick(&mut self, now: Timestamp) -> Vec<GameEvent> {
        self.now = self.now.max(now);
        self.ticks += 1;

        let mut events = Vec::new();
        self.animate(&mut events);
        if !self.is_game_over() {
            self.advance_turn(&mut events);
        }
        self.announce_game_over(&mut events);
        if !self.is_game_over() {
            self.drive_opponent(&mut events);
        }
        self.drain_input(&mut events);
        events
    }

    fn animate(&mut self, events: &mut Vec<GameEvent>) {
        for (card, event) in self.board.advance_animations() {
            match event {
                FlipEvent::Committed(FlipTarget::Reveal) => {
                    tracing::trace!(%card, "Card face up");
                    events.push(GameEvent::CardFaceUp { card });
                }
                FlipEvent::Committed(FlipTarget::Hide) => {
                    tracing::trace!(%card, "Card face down");
                    events.push(GameEvent::CardFaceDown { card });
                }
                FlipEvent::Finished => {}
            }
        }
    }

    fn advance_turn(&mut self, events: &mut Vec<GameEvent>) {
        if let Some(resolution) = self.turn.settle(&mut self.board, &mut self.scores, self.now) {
            events.push(match resolution {
                Resolution::Matched { player, pair, symbol } => {
                    tracing::debug!(%player, %symbol, score = self.scores[player], "Pair matched");
                    GameEvent::PairMatched { player, pair, symbol }
                }
                Resolution::Mismatched { player, pair } => {
                    tracing::debug!(%player, first = %pair[0], second = %pair[1], "Pair mismatched");
                    GameEvent::PairMismatched { player, pair }
                }
            });
        } else if let Some(player) = self.turn.finish_switch(self.now) {
            tracing::debug!(%player, "Turn changed");
            events.push(GameEvent::TurnChanged { player });
        }
    }

    fn announce_game_over(&mut self, events: &mut Vec<GameEvent>) {
        if self.game_over_announced || !self.is_game_over() {
            return;
        }
        self.game_over_announced = true;

        let outcome = Outcome::from_scores(&self.scores);
        tracing::info!(
            %outcome,
            human = self.scores[Player::Human],
            opponent = self.scores[Player::Opponent],
            "Game over"
        );
        events.push(GameEvent::GameOver {
            outcome,
            scores: self.scores,
        });
    }

    fn drive_opponent(&mut self, events: &mut Vec<GameEvent>) {
        if self.turn.state() != TurnState::OpponentTurn
            || !self.turn.selection().is_empty()
            || self.board.has_animations()
        {
            return;
        }
        let thinking_delay = self.config.timings.thinking_delay_ms;
        if self
            .last_opponent_move
            .is_some_and(|last| self.now.since(last) <= thinking_delay)
        {
            return;
        }

        let Some(decision) = self.policy.choose(&self.board) else {
            return;
        };
        tracing::debug!(
            ?decision,
            waited_ms = self.now.since(self.turn.turn_started()),
            "Opponent moves"
        );
        self.last_opponent_move = Some(self.now);
        for card in decision.pair() {
            self.apply_selection(Player::Opponent, card, events);
        }
    }

    fn drain_input(&mut self, events: &mut Vec<GameEvent>) {
        while let Some(input) = self.inputs.pop_front() {
            match input {
                InputEvent::SelectCard(card) if !self.is_game_over() => {
                    self.apply_selection(Player::Human, card, events);
                }
                // Restart clears the queue, so nothing after it is applied
                InputEvent::SelectCard(_) | InputEvent::Restart => {
                    self.restart();
                    events.push(GameEvent::Restarted {
                        game: self.game_number,
                    });
                }
            }
        }
    }

    /// Route a selection through the turn controller, and let the opponent
    /// see the card if it was accepted.
    fn apply_selection(&mut self, player: Player, card: CardId, events: &mut Vec<GameEvent>) {
        if let Err(reason) = self.turn.select(&mut self.board, player, card, self.now) {
            tracing::trace!(%player, %card, %reason, "Selection rejected");
            return;
        }
        let Some(symbol) = self.board.card_at(card).map(Card::symbol) else {
            return;
        };
        self.policy.observe(symbol, card);

        tracing::trace!(%player, %card, %symbol, "Card selected");
        events.push(GameEvent::CardSelected { player, card, symbol });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CardState, SymbolId};

    const FRAME_MS: u64 = 16;

    /// 2x2 board: cards 0 and 3 show symbol 0, cards 1 and 2 symbol 1.
    fn small_session() -> GameSession {
        let config = GameConfig::default().with_grid(2, 2);
        let board = Board::from_symbols(
            2,
            2,
            [0, 1, 1, 0].into_iter().map(SymbolId::new).collect(),
        )
        .unwrap();
        let policy = RecallPolicy::new(GameRng::new(1));
        GameSession::with_board(config, board, policy).unwrap()
    }

    fn run_for(session: &mut GameSession, ms: u64) -> Vec<GameEvent> {
        let end = session.now().after(ms);
        let mut events = Vec::new();
        while session.now() < end {
            let next = session.now().after(FRAME_MS);
            events.extend(session.tick(next));
        }
        events
    }

    #[test]
    fn test_new_session_starts_on_human_turn() {
        let session = GameSession::new(GameConfig::default()).unwrap();
        assert_eq!(session.turn_state(), TurnState::HumanTurn);
        assert_eq!(session.scores().total(), 0);
        assert_eq!(session.card_views().len(), 16);
        assert!(!session.is_game_over());
        assert_eq!(session.game_number(), 1);
    }

    #[test]
    fn test_with_board_rejects_shape_mismatch() {
        let board = Board::from_symbols(1, 2, vec![SymbolId::new(0); 2]).unwrap();
        let result = GameSession::with_board(GameConfig::default(), board, RecallPolicy::new(GameRng::new(0)));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_human_selection_is_observed_by_opponent() {
        let mut session = small_session();
        session.push_input(InputEvent::SelectCard(CardId::new(1)));
        let events = session.tick(Timestamp::from_millis(FRAME_MS));

        assert_eq!(
            events,
            vec![GameEvent::CardSelected {
                player: Player::Human,
                card: CardId::new(1),
                symbol: SymbolId::new(1),
            }]
        );
        assert_eq!(session.policy().memory().cards_for(SymbolId::new(1)), &[CardId::new(1)]);
    }

    #[test]
    fn test_mismatch_hands_turn_to_opponent() {
        let mut session = small_session();
        session.push_input(InputEvent::SelectCard(CardId::new(0)));
        session.push_input(InputEvent::SelectCard(CardId::new(1)));
        let events = run_for(&mut session, 3_500);

        assert!(events.contains(&GameEvent::PairMismatched {
            player: Player::Human,
            pair: [CardId::new(0), CardId::new(1)],
        }));
        assert!(events.contains(&GameEvent::TurnChanged { player: Player::Opponent }));
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::CardFaceDown { .. }))
                .count(),
            2
        );
        // With no earlier move to wait on, the opponent flips straight away
        assert_eq!(session.current_player(), Player::Opponent);
        assert_eq!(session.selection().len(), 2);
    }

    #[test]
    fn test_full_game_ends_once() {
        let mut session = small_session();
        let mut game_overs = 0;
        while session.now() < Timestamp::from_millis(120_000) && !session.is_game_over() {
            if session.turn_state() == TurnState::HumanTurn && session.selection().is_empty() {
                for card in session.board().selectable_cards().into_iter().take(2) {
                    session.push_input(InputEvent::SelectCard(card));
                }
            }
            let next = session.now().after(FRAME_MS);
            game_overs += session
                .tick(next)
                .iter()
                .filter(|e| matches!(e, GameEvent::GameOver { .. }))
                .count();
        }

        assert!(session.is_game_over());
        assert_eq!(session.scores().total(), 2);
        assert_eq!(session.board().matched_pairs(), 2);
        assert!(session.hud().outcome.is_some());

        // Nothing more happens until a restart
        game_overs += session
            .tick(session.now().after(FRAME_MS))
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_any_press_after_game_over_restarts() {
        let mut restarted = GameSession::new(GameConfig::default().with_grid(1, 2)).unwrap();
        restarted.push_input(InputEvent::SelectCard(CardId::new(0)));
        restarted.push_input(InputEvent::SelectCard(CardId::new(1)));
        run_for(&mut restarted, 1_500);
        assert!(restarted.is_game_over());

        restarted.push_input(InputEvent::SelectCard(CardId::new(0)));
        let events = restarted.tick(restarted.now().after(FRAME_MS));
        assert_eq!(events, vec![GameEvent::Restarted { game: 2 }]);
        assert!(!restarted.is_game_over());
    }

    #[test]
    fn test_input_ignored_during_opponent_turn() {
        let mut session = small_session();
        session.push_input(InputEvent::SelectCard(CardId::new(0)));
        session.push_input(InputEvent::SelectCard(CardId::new(1)));
        run_for(&mut session, 3_500);
        assert_eq!(session.current_player(), Player::Opponent);

        session.push_input(InputEvent::SelectCard(CardId::new(2)));
        let events = session.tick(session.now().after(FRAME_MS));
        assert!(!events.iter().any(|e| matches!(
            e,
            GameEvent::CardSelected { player: Player::Human, .. }
        )));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = small_session();
        session.push_input(InputEvent::SelectCard(CardId::new(0)));
        session.push_input(InputEvent::SelectCard(CardId::new(3)));
        run_for(&mut session, 3_500);
        assert_eq!(session.scores()[Player::Human], 1);

        session.push_input(InputEvent::Restart);
        session.push_input(InputEvent::SelectCard(CardId::new(0)));
        let events = session.tick(session.now().after(FRAME_MS));

        assert_eq!(events, vec![GameEvent::Restarted { game: 2 }]);
        assert_eq!(session.scores().total(), 0);
        assert_eq!(session.turn_state(), TurnState::HumanTurn);
        assert!(session.selection().is_empty());
        assert!(session.policy().memory().is_empty());
        assert!(session
            .board()
            .cards()
            .all(|c| c.state() == CardState::Hidden && !c.is_animating()));
    }

    #[test]
    fn test_time_never_runs_backwards() {
        let mut session = small_session();
        session.tick(Timestamp::from_millis(500));
        session.tick(Timestamp::from_millis(100));
        assert_eq!(session.now(), Timestamp::from_millis(500));
        assert_eq!(session.ticks(), 2);
    }

    #[test]
    fn test_pointer_down_queues_hit() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        let rect = session.layout().slot_rect(5).unwrap();

        let target = session.pointer_down(rect.x + 10, rect.y + 10);
        assert_eq!(target, PointerTarget::Card(CardId::new(5)));
        assert_eq!(session.pointer_down(0, 0), PointerTarget::Miss);

        session.tick(Timestamp::from_millis(FRAME_MS));
        assert_eq!(session.selection(), &[CardId::new(5)]);
    }

    #[test]
    fn test_hud_reflects_turn() {
        let mut session = small_session();
        session.push_input(InputEvent::SelectCard(CardId::new(0)));
        session.push_input(InputEvent::SelectCard(CardId::new(2)));
        session.tick(Timestamp::from_millis(FRAME_MS));

        let hud = session.hud();
        assert_eq!(hud.turn_state, TurnState::Resolving);
        assert_eq!(hud.current_player, Player::Human);
        assert!(!hud.game_over);
        assert_eq!(hud.outcome, None);

        let selected: Vec<_> = session
            .card_views()
            .iter()
            .filter(|v| v.selected)
            .map(|v| v.slot)
            .collect();
        assert_eq!(selected, vec![0, 2]);
    }
}
