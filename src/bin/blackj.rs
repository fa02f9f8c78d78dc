use blackj::{Hand, Report};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "blackj",
    about = "Check club entry and score a two-card blackjack hand"
)]
struct Args {
    /// Age checked at the club door
    #[arg(long, env = "BLACKJ_AGE", default_value_t = Report::DEFAULT_AGE, allow_negative_numbers = true)]
    age: i32,

    /// Value of the first card
    #[arg(long, env = "BLACKJ_FIRST_CARD", default_value_t = Report::DEFAULT_FIRST_CARD, allow_negative_numbers = true)]
    first_card: i32,

    /// Value of the second card
    #[arg(long, env = "BLACKJ_SECOND_CARD", default_value_t = Report::DEFAULT_SECOND_CARD, allow_negative_numbers = true)]
    second_card: i32,

    /// Reject card values outside 2-11
    #[arg(long, env = "BLACKJ_STRICT", value_parser = clap::builder::FalseyValueParser::new())]
    strict: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    // .env may carry RUST_LOG, so it is loaded before the logger
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> blackj::Result<()> {
    let hand = if args.strict {
        Hand::checked(args.first_card, args.second_card)?
    } else {
        Hand::new(args.first_card, args.second_card)
    };
    let report = Report::new(args.age, hand);
    log::info!(
        "age {}, hand {} + {} = {}",
        args.age,
        hand.first_card,
        hand.second_card,
        report.evaluation.sum
    );

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}
