use std::error::Error;
use std::io::Write;
use std::time::{Duration, Instant};

use chrono::Local;
use tictactoe_common::games::tictactoe::{
    AI_MARK, GameMode, Outcome, TicTacToeGameState, best_move,
};
use tictactoe_common::history::HistoryStore;
use tictactoe_common::log;
use tokio::io::{AsyncBufRead, Lines};

use crate::ui::{PlayerInput, is_yes, parse_input, render_board};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished(Outcome),
    Restart,
    Quit,
}

pub struct GameRunner {
    game: TicTacToeGameState,
    store: HistoryStore,
    think_delay: Duration,
}

impl GameRunner {
    pub fn new(game: TicTacToeGameState, store: HistoryStore, think_delay: Duration) -> Self {
        Self {
            game,
            store,
            think_delay,
        }
    }

    /// Plays rounds until the input ends, the player quits, or declines a rematch.
    pub async fn run<R, W>(
        &mut self,
        lines: &mut Lines<R>,
        out: &mut W,
    ) -> Result<(), Box<dyn Error>>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        log!(
            "Starting {} game: {} (X) vs {} (O)",
            self.game.mode,
            self.game.player_x,
            self.game.player_o
        );

        loop {
            match self.play_round(lines, out).await? {
                RoundEnd::Finished(outcome) => {
                    self.record_result(outcome);
                    writeln!(out, "Play again? [y/N]")?;
                    match lines.next_line().await? {
                        Some(answer) if is_yes(&answer) => {}
                        _ => return Ok(()),
                    }
                }
                RoundEnd::Restart => log!("Game restarted"),
                RoundEnd::Quit => return Ok(()),
            }
            self.game.restart();
        }
    }

    async fn play_round<R, W>(
        &mut self,
        lines: &mut Lines<R>,
        out: &mut W,
    ) -> Result<RoundEnd, Box<dyn Error>>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        // The board is drawn once per move, with the winning line bracketed.
        let mut redraw = true;

        loop {
            if redraw {
                let winning_line = self.game.winning_line();
                writeln!(out, "{}\n", render_board(&self.game.board, winning_line.as_ref()))?;
                redraw = false;
            }

            match self.game.outcome() {
                Outcome::Win(mark) => {
                    writeln!(out, "Congratulations {} Won!", self.game.player_name(mark))?;
                    return Ok(RoundEnd::Finished(Outcome::Win(mark)));
                }
                Outcome::Draw => {
                    writeln!(out, "Game Ended in a Draw!")?;
                    return Ok(RoundEnd::Finished(Outcome::Draw));
                }
                Outcome::InProgress => {}
            }

            if self.game.is_ai_turn() {
                writeln!(out, "AI is thinking...")?;
                self.play_ai_turn().await?;
                redraw = true;
                continue;
            }

            writeln!(
                out,
                "{}'s Turn ({}) - cell 1-9, r to restart, q to quit:",
                self.game.current_player_name(),
                self.game.current_mark()
            )?;
            out.flush()?;
            let Some(line) = lines.next_line().await? else {
                return Ok(RoundEnd::Quit);
            };

            match parse_input(&line) {
                Some(PlayerInput::Cell(index)) => match self.game.place_mark(index) {
                    Ok(_) => redraw = true,
                    Err(e) => writeln!(out, "{}", e)?,
                },
                Some(PlayerInput::Restart) => return Ok(RoundEnd::Restart),
                Some(PlayerInput::Quit) => return Ok(RoundEnd::Quit),
                None => writeln!(out, "Enter a cell number from 1 to 9")?,
            }
        }
    }

    async fn play_ai_turn(&mut self) -> Result<(), Box<dyn Error>> {
        tokio::time::sleep(self.think_delay).await;

        let board = self.game.board;
        let started = Instant::now();
        let choice = tokio::task::spawn_blocking(move || best_move(&board, AI_MARK)).await?;

        let Some(index) = choice else {
            return Ok(());
        };
        log!("AI picked cell {} in {:?}", index, started.elapsed());
        self.game.apply_ai_move(index)?;
        Ok(())
    }

    fn record_result(&self, outcome: Outcome) {
        let Some(record) = self.game.to_match_record(Local::now().timestamp_millis()) else {
            return;
        };
        match self.store.record(record) {
            Ok(history) => log!(
                "Saved {:?} to {} ({} games stored)",
                outcome,
                self.store.location().display(),
                history.len()
            ),
            Err(e) => log!("Failed to save game result: {}", e),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.game.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tictactoe_common::games::tictactoe::{Board, Mark, check_win_with_line};
    use tictactoe_common::history::MatchWinner;
    use tokio::io::{AsyncBufReadExt, BufReader};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_runner_{}.yaml", random_number))
    }

    fn runner(mode: GameMode, path: &PathBuf) -> GameRunner {
        let player_o = match mode {
            GameMode::Pvp => "Ben",
            GameMode::Computer => "AI Computer",
        };
        let game = TicTacToeGameState::new(mode, "Ann".to_string(), player_o.to_string());
        GameRunner::new(game, HistoryStore::new(path.clone(), 50), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_pvp_game_is_recorded() {
        let path = get_temp_file_path();
        let mut runner = runner(GameMode::Pvp, &path);
        let mut lines = BufReader::new(&b"1\n1\n4\n2\n5\n3\nn\n"[..]).lines();

        runner.run(&mut lines, &mut Vec::<u8>::new()).await.unwrap();

        let history = HistoryStore::new(path.clone(), 50).load().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.games()[0].winner, MatchWinner::X);
        assert_eq!(history.games()[0].title(), "Ann vs Ben");
        assert_eq!(runner.mode(), GameMode::Pvp);

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_ai_wins_against_lowest_cell_player() {
        let path = get_temp_file_path();
        let mut runner = runner(GameMode::Computer, &path);
        // X: 1, 2, 4; the AI takes 5, blocks 3 and completes 3-5-7.
        let mut lines = BufReader::new(&b"1\n2\n4\nno\n"[..]).lines();

        runner.run(&mut lines, &mut Vec::<u8>::new()).await.unwrap();

        let history = HistoryStore::new(path.clone(), 50).load().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.games()[0].winner, MatchWinner::O);
        assert_eq!(history.games()[0].mode, GameMode::Computer);

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_winning_board_is_drawn_once_with_highlight() {
        let path = get_temp_file_path();
        let mut runner = runner(GameMode::Pvp, &path);
        let mut lines = BufReader::new(&b"1\n4\n2\n5\n3\nn\n"[..]).lines();
        let mut out = Vec::new();

        runner.run(&mut lines, &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();

        let mut board = Board::new();
        for (index, mark) in [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O)] {
            board.apply_move(index, mark).unwrap();
        }
        let before_win = render_board(&board, None);
        board.apply_move(2, Mark::X).unwrap();
        let line = check_win_with_line(&board).unwrap();

        assert_eq!(out.matches(&before_win).count(), 1);
        assert!(!out.contains(&render_board(&board, None)));
        assert_eq!(out.matches(&render_board(&board, Some(&line))).count(), 1);
        assert!(out.contains("Congratulations Ann Won!"));

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_quit_and_restart_record_nothing() {
        let path = get_temp_file_path();
        let mut runner = runner(GameMode::Pvp, &path);
        let mut lines = BufReader::new(&b"5\nr\n7\nq\n"[..]).lines();

        runner.run(&mut lines, &mut Vec::<u8>::new()).await.unwrap();

        assert!(HistoryStore::new(path.clone(), 50).load().unwrap().is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_end_of_input_stops_the_game() {
        let path = get_temp_file_path();
        let mut runner = runner(GameMode::Computer, &path);
        let mut lines = BufReader::new(&b"junk\n"[..]).lines();

        runner.run(&mut lines, &mut Vec::<u8>::new()).await.unwrap();
        assert!(!path.exists());
    }
}
