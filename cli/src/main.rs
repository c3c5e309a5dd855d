use clap::Parser;
use montecarlo_core::{Analyzer, Die, Form, Game, Rng, Seed};
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
struct Args {
    /// Faces of every die, comma separated
    #[arg(long, short, value_delimiter = ',', default_value = "1,2,3,4,5,6")]
    faces: Vec<String>,

    /// Number of dice rolled together
    #[arg(long, short, default_value_t = 2)]
    dice: usize,

    /// Number of dice, counting from the first, that get the --weight weights [default: all]
    #[arg(long, short)]
    loaded: Option<usize>,

    /// Weight of a face on the loaded dice, may be repeated
    #[arg(long = "weight", short, value_name = "FACE=WEIGHT", value_parser = parse_weight)]
    weights: Vec<(String, f64)>,

    /// Number of times the dice are rolled
    #[arg(long, short, default_value_t = 1000)]
    rolls: usize,

    /// Set seed for the game's RNG
    #[arg(long, short)]
    seed: Option<Seed>,

    /// Also print every roll, in the given form (wide or narrow)
    #[arg(long, value_name = "FORM", value_parser = str::parse::<Form>)]
    show: Option<Form>,

    /// Number of combos and permutations to list
    #[arg(long, short, default_value_t = 10)]
    top: usize,
}

fn parse_weight(s: &str) -> Result<(String, f64), String> {
    let (face, weight) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FACE=WEIGHT, got {s:?}"))?;
    let weight = weight
        .trim()
        .parse()
        .map_err(|e| format!("invalid weight {weight:?}: {e}"))?;
    Ok((face.trim().to_string(), weight))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let dice = build_dice(&args)?;
    let rng = match args.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };
    let mut game = Game::with_rng(dice, rng)?;

    log::info!(
        "rolling {} dice {} times | seed: {}",
        game.num_dice(),
        args.rolls,
        game.seed().unwrap_or_default()
    );
    game.play(args.rolls)?;

    if let Some(form) = args.show {
        println!("{}", " ROLLS ".black().on_blue());
        print!("{}", game.show(form));
        println!();
    }

    report(&game, args.top);

    Ok(())
}

fn build_dice(args: &Args) -> anyhow::Result<Vec<Die<String>>> {
    if args.dice < 1 {
        anyhow::bail!("At least 1 die must be rolled");
    }

    let loaded = args.loaded.unwrap_or(args.dice);
    if loaded > args.dice {
        anyhow::bail!("Cannot load {loaded} dice when only {} are rolled", args.dice);
    }

    let mut dice = Vec::with_capacity(args.dice);
    for idx in 0..args.dice {
        let die = Die::new(args.faces.clone())?;
        if idx < loaded {
            for (face, weight) in &args.weights {
                die.change_weight(face, *weight)?;
            }
        }
        dice.push(die);
    }
    Ok(dice)
}

fn report(game: &Game<String>, top: usize) {
    let analyzer = Analyzer::new(game);

    println!("{}", " DICE ".black().on_purple());
    for (idx, die) in game.dice().iter().enumerate() {
        println!("die {idx}");
        print!("{die}");
    }
    println!();

    let jackpots = analyzer.jackpot();
    let ratio = jackpots as f64 / analyzer.num_rolls() as f64;
    println!("{}", " JACKPOTS ".black().on_purple());
    println!("{jackpots} of {} rolls ({:.2}%)", analyzer.num_rolls(), ratio * 100.0);
    println!();

    let combos = analyzer.combo();
    println!("{}", " COMBOS ".black().on_purple());
    println!("{} distinct, most common:", combos.len());
    print_counts(combos.most_common(top));
    println!();

    let permutations = analyzer.permutation();
    println!("{}", " PERMUTATIONS ".black().on_purple());
    println!("{} distinct, most common:", permutations.len());
    print_counts(permutations.most_common(top));
}

fn print_counts(counts: Vec<(&[String], usize)>) {
    for (faces, count) in counts {
        println!("  ({}) {count}", faces.join(", "));
    }
}
