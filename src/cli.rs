use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::cards::{parse_board, parse_hole};
use crate::display::{board_display, equity_bar, print_error};
use crate::equity::{equity, Evaluator, Player};
use crate::error::ShowdownResult;
use crate::hand_evaluator::classify;
use crate::lookup_eval::{rank_hand, WORST_VALUE};

#[derive(Parser)]
#[command(
    name = "showdown",
    version = "0.1.0",
    about = "Seven-card hand ranking and exhaustive all-in equity."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum EvalMode {
    #[value(name = "rules")]
    Rules,
    #[value(name = "lookup")]
    Lookup,
}

impl EvalMode {
    fn evaluator(self) -> Evaluator {
        match self {
            EvalMode::Rules => Evaluator::RuleBased,
            EvalMode::Lookup => Evaluator::Lookup,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a seven-card hand — `showdown evaluate AsKsQsJsTs6c7d`
    Evaluate {
        /// Seven cards (e.g., AsKsQsJsTs6c7d)
        cards: String,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Equity over every board completion — `showdown equity 2h3d AhAd`
    Equity {
        /// Two hole cards per player (e.g., 2h3d AhAd)
        #[arg(required = true, num_args = 2..)]
        hands: Vec<String>,
        /// Known community cards (e.g., 4s5s8s6c)
        #[arg(short, long)]
        board: Option<String>,
        /// Hand evaluation strategy
        #[arg(short, long, default_value = "lookup")]
        evaluator: EvalMode,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run() {
    dispatch(Cli::parse());
}

pub fn run_with_args(args: Vec<String>) {
    dispatch(Cli::parse_from(args));
}

fn dispatch(cli: Cli) {
    let result = match cli.command {
        Commands::Evaluate { cards, json } => cmd_evaluate(&cards, json),
        Commands::Equity {
            hands,
            board,
            evaluator,
            json,
        } => cmd_equity(&hands, board.as_deref(), evaluator.evaluator(), json),
    };
    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

#[derive(Serialize)]
struct EvaluateOutput {
    category: String,
    best_five: Vec<String>,
    value: u16,
    power: u16,
}

fn cmd_evaluate(notation: &str, json: bool) -> ShowdownResult<()> {
    let cards = parse_board(notation)?;
    let hand = classify(&cards)?;
    let value = rank_hand(&cards)?;

    if json {
        let out = EvaluateOutput {
            category: hand.category.to_string(),
            best_five: hand.best_five.iter().map(|c| c.to_string()).collect(),
            value: value.value(),
            power: value.power(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("\n  {}", board_display(&cards));
    println!("\n  {}", hand.category.to_string().bold().cyan());
    println!("  Best five: {}", board_display(&hand.best_five));
    println!(
        "  Strength:  {} of {} (power {})",
        value.value(),
        WORST_VALUE,
        value.power()
    );
    Ok(())
}

#[derive(Serialize)]
struct PlayerEquity {
    name: String,
    hand: String,
    equity: f64,
}

fn cmd_equity(
    hands: &[String],
    board: Option<&str>,
    evaluator: Evaluator,
    json: bool,
) -> ShowdownResult<()> {
    let players = hands
        .iter()
        .enumerate()
        .map(|(i, hand)| -> ShowdownResult<Player> {
            Ok(Player::new(format!("player{}", i + 1), parse_hole(hand)?))
        })
        .collect::<ShowdownResult<Vec<_>>>()?;
    let community = match board {
        Some(b) => parse_board(b)?,
        None => Vec::new(),
    };

    let equities = equity(&players, &community, evaluator)?;

    if json {
        let out: Vec<PlayerEquity> = players
            .iter()
            .zip(&equities)
            .map(|(p, &eq)| PlayerEquity {
                name: p.name.clone(),
                hand: format!("{}{}", p.hole[0], p.hole[1]),
                equity: eq,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if !community.is_empty() {
        println!("\n  Board: {}", board_display(&community));
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Player"),
        Cell::new("Hand"),
        Cell::new("Equity").set_alignment(CellAlignment::Left),
    ]);
    for (player, &eq) in players.iter().zip(&equities) {
        table.add_row(vec![
            Cell::new(player.name.bold().to_string()),
            Cell::new(board_display(&player.hole)),
            Cell::new(equity_bar(eq, 20)),
        ]);
    }
    println!("{table}");
    Ok(())
}
