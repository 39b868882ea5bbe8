//! Scripted sessions through `Session::run`.

use std::io::Cursor;

use rookery_core::Game;
use rookery_host::{GameId, GameStore, MemoryStore, Session};

fn run_script(script: &str) -> (Session, Vec<String>) {
    let mut session = Session::new(MemoryStore::new());
    let mut output = Vec::new();
    session.run(Cursor::new(script), &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();
    (session, text.lines().map(str::to_string).collect())
}

#[test]
fn fools_mate_session() {
    let (session, lines) = run_script(
        "new club\n\
         join white alice\n\
         join black bob\n\
         move alice f2f3\n\
         move bob e7e5\n\
         move alice g2g4\n\
         move bob d8h4\n\
         move alice e2e4\n\
         quit\n\
         move alice a2a3\n",
    );

    assert_eq!(
        lines,
        [
            "game 1 created: club",
            "alice plays white",
            "bob plays black",
            "alice played f2f3",
            "bob played e7e5",
            "alice played g2g4",
            "bob played d8h4",
            "checkmate, black wins",
            "error: the game is already over",
        ]
    );

    let table = session.store().get(GameId::new(1)).unwrap();
    assert!(table.game().is_over());
}

#[test]
fn errors_do_not_end_the_session() {
    let (_, lines) = run_script(
        "foo\n\
         moves e2\n\
         new\n\
         join white alice\n\
         join white bob\n\
         move bob e2e4\n\
         move alice e2e5\n\
         move alice e7e5\n",
    );

    assert_eq!(lines[0], "unknown command: foo");
    assert_eq!(lines[1], "error: no game is open; use `new` or `open <id>` first");
    assert_eq!(lines[2], "game 1 created: casual game");
    assert_eq!(lines[3], "alice plays white");
    assert_eq!(lines[4], "error: white is already taken by alice");
    assert_eq!(lines[5], "error: bob is not playing this game");
    assert_eq!(lines[6], "error: invalid move e2e5: not a legal move for that piece");
    assert_eq!(lines[7], "error: it is not black's turn");
    assert_eq!(lines.len(), 8);
}

#[test]
fn moves_highlights_destinations() {
    let (_, lines) = run_script("new\nmoves g1\n");
    assert!(lines.contains(&"3  . . . . . .*. .*".to_string()), "{lines:#?}");
    assert_eq!(lines.last().unwrap(), "moves: g1f3 g1h3");
}

#[test]
fn fen_and_stalemate() {
    let (_, lines) = run_script(
        "new endgame\n\
         fen k7/8/1Q6/8/8/8/8/4K3 w\n\
         fen\n\
         join white wes\n\
         move wes b6c7\n",
    );
    assert_eq!(
        lines,
        [
            "game 1 created: endgame",
            "game 1 set from FEN",
            "k7/8/1Q6/8/8/8/8/4K3 w - - 0 1",
            "wes plays white",
            "wes played b6c7",
            "stalemate, black has no legal moves",
        ]
    );
}

#[test]
fn export_then_import_restores_the_game() {
    let (session, lines) = run_script(
        "new\n\
         join white alice\n\
         move alice d2d4\n\
         export\n",
    );
    let exported = lines.last().unwrap().clone();
    let game = Game::from_json(&exported).unwrap();
    assert_eq!(&game, session.store().get(GameId::new(1)).unwrap().game());

    let (session, lines) = run_script(&format!(
        "new\njoin black bob\nimport {exported}\nmove bob d7d5\n"
    ));
    assert_eq!(lines[2], "game 1 imported");
    assert_eq!(lines[3], "bob played d7d5");
    let table = session.store().get(GameId::new(1)).unwrap();
    assert_eq!(table.game().turn(), Some(rookery_core::Color::White));
}

#[test]
fn games_lists_every_table() {
    let (_, lines) = run_script(
        "new first\n\
         join white alice\n\
         new second\n\
         games\n\
         open 1\n\
         open 9\n",
    );
    assert_eq!(lines[3], "1 first [white: alice, black: -] white to move");
    assert_eq!(lines[4], "2 second [white: -, black: -] white to move");
    assert_eq!(lines[5], "opened game 1: first");
    assert_eq!(lines[6], "error: no game with id 9");
}

#[test]
fn show_board_after_moves() {
    let (_, lines) = run_script(
        "new\n\
         set show_board on\n\
         set orientation black\n\
         join white alice\n\
         move alice e2e4\n",
    );
    assert_eq!(lines[1], "show_board set to on");
    assert_eq!(lines[2], "orientation set to black");
    assert_eq!(lines[4], "alice played e2e4");
    // Black at the bottom: rank 1 first, files reversed.
    assert_eq!(lines[5], "1  R N B K Q B N R");
    assert_eq!(lines.last().unwrap(), "   h g f e d c b a");
}
