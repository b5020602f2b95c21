//! Play one round of blackjack against the dealer in the terminal.
//!
//! Usage:
//!   blackjack [--seed <SEED>] [--hit-soft-17] [--alternate-deal] [--log-level <LEVEL>]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_round::{
    ActionSource, Card, DealOrder, Round, RoundEvent, RoundObserver, RoundOptions,
};
use clap::Parser;
use tracing::{Level, error, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a single round of blackjack against the dealer")]
struct Args {
    /// Seed for the shuffle; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Dealer hits on soft 17 instead of standing.
    #[arg(long)]
    hit_soft_17: bool,

    /// Deal player, dealer, player, dealer instead of two to the player first.
    #[arg(long)]
    alternate_deal: bool,

    /// Diagnostic log level, written to stderr.
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

/// Reads commands from a buffered reader, prompting before each one.
struct PromptedInput<R> {
    reader: R,
}

impl<R: BufRead> ActionSource for PromptedInput<R> {
    fn next_command(&mut self) -> Option<String> {
        print!("Hit (h) or Stand (s)? ");
        let _ = io::stdout().flush();

        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => Some(String::from_utf8_lossy(&line).trim().to_string()),
            Err(err) => {
                warn!(%err, "failed to read player input");
                None
            }
        }
    }
}

/// Prints the round as it happens.
struct Console;

impl RoundObserver for Console {
    fn on_event(&mut self, event: &RoundEvent) {
        match event {
            RoundEvent::Dealt {
                player,
                player_value,
                dealer_visible,
            } => {
                println!("Your cards: {} ({player_value})", format_cards(player));
                println!("Dealer shows: {}", format_cards(dealer_visible));
            }
            RoundEvent::InvalidAction { .. } => {
                println!("Invalid action. Please enter h or s.");
            }
            RoundEvent::PlayerHit { card, hand, value } => {
                println!("You draw: {card}");
                println!("Your cards: {} ({value})", format_cards(hand));
            }
            RoundEvent::PlayerBust { .. } => println!("Bust!"),
            RoundEvent::PlayerStand { value } => println!("You stand on {value}."),
            RoundEvent::DealerReveal { cards, value } => {
                println!("Dealer's cards: {} ({value})", format_cards(cards));
            }
            RoundEvent::DealerHit { card, value } => println!("Dealer hits: {card} ({value})"),
            RoundEvent::DealerBust { .. } => println!("Dealer busts!"),
            RoundEvent::DealerStand { value } => println!("Dealer stands on {value}."),
            RoundEvent::Resolved(result) => println!("{}", result.outcome),
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let deal_order = if args.alternate_deal {
        DealOrder::Alternating
    } else {
        DealOrder::PlayerFirst
    };
    let options = RoundOptions::default()
        .with_stand_on_soft_17(!args.hit_soft_17)
        .with_deal_order(deal_order);
    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, ?options, "starting round");

    let mut round = Round::new(options, seed);
    let mut input = PromptedInput {
        reader: io::stdin().lock(),
    };

    match round.play(&mut input, &mut Console) {
        Ok(result) => {
            info!(
                player = result.player_value,
                dealer = result.dealer_value,
                outcome = ?result.outcome,
                "round complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "round aborted");
            eprintln!("Round aborted: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use blackjack_round::{Deck, EventLog, Outcome, Rank, Suit};

    use super::*;

    #[test]
    fn non_utf8_line_is_rejected_and_read_again() {
        let deck = Deck::from_cards(vec![
            Card::new(Suit::Hearts, Rank::Ten),    // player
            Card::new(Suit::Diamonds, Rank::Nine), // player
            Card::new(Suit::Spades, Rank::Ten),    // dealer
            Card::new(Suit::Clubs, Rank::Seven),   // dealer
        ])
        .unwrap();
        let mut round = Round::with_deck(RoundOptions::default(), deck);
        let mut input = PromptedInput {
            reader: BufReader::new(&b"\xff\xfe\ns\n"[..]),
        };
        let mut log = EventLog::new();

        let result = round.play(&mut input, &mut log).unwrap();
        assert_eq!(log.rejected_inputs(), 1);
        assert_eq!(result.outcome, Outcome::PlayerWins);
    }

    #[test]
    fn end_of_input_closes_the_source() {
        let mut input = PromptedInput {
            reader: BufReader::new(&b""[..]),
        };
        assert_eq!(input.next_command(), None);
    }
}
