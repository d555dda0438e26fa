use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use common::{GameController, log};

use crate::commands::{ClientCommand, parse_command};
use crate::ui;

/// Processes one signal at a time to completion: a cell selection, a mode
/// selection, or a reset. The computer's move is deferred by the
/// configured delay purely for pacing.
pub async fn run(mut controller: GameController, bot_move_delay: Duration) {
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    print_help();

    loop {
        if controller.bot_turn_pending() {
            tokio::time::sleep(bot_move_delay).await;
            if let Some(index) = controller.play_bot_turn() {
                println!("Computer plays cell {}", index);
                render(&controller);
            }
            continue;
        }

        let Some(line) = line_rx.recv().await else {
            break;
        };

        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                println!("Commands: pvp, pvc, 0-8, reset, quit");
            }
            continue;
        };

        match command {
            ClientCommand::Quit => break,
            ClientCommand::Signal(signal) => {
                // A rejected move is a silent no-op by contract.
                if controller.handle_signal(signal).is_ok() {
                    render(&controller);
                }
            }
        }
    }

    log!("Session ended");
}

fn render(controller: &GameController) {
    let Some(snapshot) = controller.snapshot() else {
        println!("Select a mode to start: pvp or pvc");
        return;
    };

    println!();
    println!("{}", ui::render_board(&snapshot));
    println!();
    println!("{}", ui::status_line(&snapshot));
    println!("{}", ui::score_line(&snapshot.scores));
}

fn print_help() {
    println!("Tic Tac Toe Master");
    println!("Commands: pvp (two players), pvc (against the computer),");
    println!("0-8 (place a mark), reset (new round), quit");
}
