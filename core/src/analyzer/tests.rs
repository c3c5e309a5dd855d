use super::*;
use crate::{Die, Rng};
use std::collections::BTreeMap;
use test_case::test_case;

const HEADS: f64 = 0.25;
const TAILS: f64 = 0.75;

fn coin() -> Die<char> {
    Die::new(vec!['H', 'T']).unwrap()
}

// rolls: [H H] [T H] [T T] [H T]
fn coin_analyzer() -> Analyzer<char> {
    let rng = Rng::new_external([HEADS, TAILS, TAILS, HEADS, HEADS, HEADS, TAILS, TAILS]);
    let mut game = Game::with_rng(vec![coin(), coin()], rng).unwrap();
    game.play(4).unwrap();
    Analyzer::new(&game)
}

fn analyzer_for(rows: Vec<Vec<u8>>) -> Analyzer<u8> {
    let num_dice = rows.first().map_or(0, Vec::len);
    Analyzer::from_results(Table::from_rows((0..num_dice).collect(), rows))
}

fn seeded_analyzer(num_dice: usize, num_rolls: usize, seed: u64) -> Analyzer<u8> {
    let die = Die::new(vec![1, 2, 3, 4]).unwrap();
    die.change_weight(&4, 3.0).unwrap();
    let dice = vec![die; num_dice];
    let mut game = Game::with_rng(dice, Rng::with_seed(seed)).unwrap();
    game.play(num_rolls).unwrap();
    Analyzer::new(&game)
}

/*****************************************************************************************
 * Two coins
 */

#[test]
fn coins_jackpot() {
    let analyzer = coin_analyzer();

    pretty_assertions::assert_eq!(analyzer.jackpot(), 2);
    pretty_assertions::assert_eq!(analyzer.jackpot_flags(), &[true, false, true, false]);
}

#[test]
fn coins_combo() {
    let analyzer = coin_analyzer();
    let combos: Vec<_> = analyzer.combo().iter().collect();

    pretty_assertions::assert_eq!(
        combos,
        vec![
            (&['H', 'H'][..], 1),
            (&['H', 'T'][..], 2),
            (&['T', 'T'][..], 1),
        ]
    );
}

#[test]
fn coins_permutation() {
    let analyzer = coin_analyzer();
    let permutations: Vec<_> = analyzer.permutation().iter().collect();

    pretty_assertions::assert_eq!(
        permutations,
        vec![
            (&['H', 'H'][..], 1),
            (&['H', 'T'][..], 1),
            (&['T', 'H'][..], 1),
            (&['T', 'T'][..], 1),
        ]
    );
}

#[test]
fn coins_face_counts() {
    let analyzer = coin_analyzer();
    let expected = Table::from_rows(
        vec!['H', 'T'],
        vec![vec![2, 0], vec![1, 1], vec![0, 2], vec![1, 1]],
    );

    pretty_assertions::assert_eq!(analyzer.face_counts_per_roll(), &expected);
}

/*****************************************************************************************
 * Jackpots
 */

#[test_case(vec![vec![1, 1, 1]] => 1)]
#[test_case(vec![vec![1, 1, 2]] => 0)]
#[test_case(vec![vec![3, 3], vec![3, 3], vec![2, 3]] => 2)]
#[test_case(vec![vec![6, 5, 4, 3, 2, 1]] => 0)]
fn jackpot(rows: Vec<Vec<u8>>) -> usize {
    analyzer_for(rows).jackpot()
}

#[test]
fn single_die_is_always_a_jackpot() {
    let analyzer = seeded_analyzer(1, 40, 3);

    pretty_assertions::assert_eq!(analyzer.jackpot(), 40);
}

#[test_case(2, 100, 1)]
#[test_case(3, 250, 2)]
#[test_case(5, 60, 3)]
fn jackpot_is_bounded_by_rolls(num_dice: usize, num_rolls: usize, seed: u64) {
    let analyzer = seeded_analyzer(num_dice, num_rolls, seed);

    assert!(analyzer.jackpot() <= num_rolls);
    pretty_assertions::assert_eq!(analyzer.jackpot_flags().len(), num_rolls);
}

/*****************************************************************************************
 * Face counts
 */

#[test]
fn face_counts_only_have_columns_for_rolled_faces() {
    let analyzer = analyzer_for(vec![vec![6, 2, 6], vec![2, 2, 2]]);
    let counts = analyzer.face_counts_per_roll();

    pretty_assertions::assert_eq!(counts.columns(), &[2, 6]);
    pretty_assertions::assert_eq!(counts.row(0), &[1, 2]);
    pretty_assertions::assert_eq!(counts.row(1), &[3, 0]);
}

#[test]
fn face_counts_rows_sum_to_number_of_dice() {
    let analyzer = seeded_analyzer(4, 120, 9);
    let counts = analyzer.face_counts_per_roll();

    pretty_assertions::assert_eq!(counts.num_rows(), 120);
    assert!(counts.iter_rows().all(|row| row.iter().sum::<usize>() == 4));
}

/*****************************************************************************************
 * Combos and permutations
 */

#[test]
fn combo_ignores_order_but_keeps_repeats() {
    let analyzer = analyzer_for(vec![
        vec![3, 1, 2],
        vec![1, 3, 2],
        vec![2, 2, 1],
        vec![1, 2, 2],
    ]);
    let combos = analyzer.combo();

    pretty_assertions::assert_eq!(combos.len(), 2);
    pretty_assertions::assert_eq!(combos.get(&[1, 2, 3]), 2);
    pretty_assertions::assert_eq!(combos.get(&[1, 2, 2]), 2);
    pretty_assertions::assert_eq!(combos.get(&[1, 2]), 0);
}

#[test]
fn permutation_keeps_die_order() {
    let analyzer = analyzer_for(vec![vec![3, 1, 2], vec![1, 3, 2], vec![3, 1, 2]]);
    let permutations = analyzer.permutation();

    pretty_assertions::assert_eq!(permutations.len(), 2);
    pretty_assertions::assert_eq!(permutations.get(&[3, 1, 2]), 2);
    pretty_assertions::assert_eq!(permutations.get(&[1, 3, 2]), 1);
    pretty_assertions::assert_eq!(permutations.get(&[1, 2, 3]), 0);
}

#[test_case(2, 500, 4)]
#[test_case(3, 300, 5)]
#[test_case(4, 80, 6)]
fn permutations_refine_combos(num_dice: usize, num_rolls: usize, seed: u64) {
    let analyzer = seeded_analyzer(num_dice, num_rolls, seed);
    let combos = analyzer.combo();
    let permutations = analyzer.permutation();

    pretty_assertions::assert_eq!(combos.total(), num_rolls);
    pretty_assertions::assert_eq!(permutations.total(), num_rolls);

    let mut folded: BTreeMap<Vec<u8>, usize> = BTreeMap::new();
    for (permutation, count) in permutations.iter() {
        let mut combo = permutation.to_vec();
        combo.sort();
        *folded.entry(combo).or_default() += count;
    }

    pretty_assertions::assert_eq!(folded.len(), combos.len());
    for (combo, count) in combos.iter() {
        pretty_assertions::assert_eq!(folded.get(combo), Some(&count));
    }
}

/*****************************************************************************************
 * Caching and snapshots
 */

#[test]
fn statistics_are_computed_once() {
    let analyzer = seeded_analyzer(3, 50, 12);

    assert!(std::ptr::eq(analyzer.combo(), analyzer.combo()));
    assert!(std::ptr::eq(analyzer.permutation(), analyzer.permutation()));
    assert!(std::ptr::eq(
        analyzer.face_counts_per_roll(),
        analyzer.face_counts_per_roll()
    ));
    pretty_assertions::assert_eq!(analyzer.jackpot(), analyzer.jackpot());
}

#[test]
fn replaying_the_game_leaves_the_analyzer_stale() {
    let die = Die::new(vec![1u8, 2, 3]).unwrap();
    let mut game = Game::with_rng(vec![die.clone(), die], Rng::with_seed(21)).unwrap();
    game.play(10).unwrap();

    let analyzer = Analyzer::new(&game);
    let snapshot = analyzer.results().clone();

    game.play(30).unwrap();

    pretty_assertions::assert_eq!(analyzer.results(), &snapshot);
    pretty_assertions::assert_eq!(analyzer.num_rolls(), 10);
    pretty_assertions::assert_eq!(analyzer.combo().total(), 10);
    pretty_assertions::assert_eq!(Analyzer::new(&game).num_rolls(), 30);
}

#[test]
fn unplayed_game_has_nothing_to_analyze() {
    let game = Game::with_rng(vec![coin()], Rng::with_seed(0)).unwrap();
    let analyzer = Analyzer::new(&game);

    pretty_assertions::assert_eq!(analyzer.num_rolls(), 0);
    pretty_assertions::assert_eq!(analyzer.jackpot(), 0);
    assert!(analyzer.face_counts_per_roll().is_empty());
    assert!(analyzer.combo().is_empty());
    assert!(analyzer.permutation().is_empty());
}

#[test]
fn string_faces() {
    let faces = vec!["rock".to_string(), "paper".to_string(), "scissors".to_string()];
    let die = Die::new(faces).unwrap();
    let mut game = Game::with_rng(vec![die.clone(), die], Rng::with_seed(30)).unwrap();
    game.play(60).unwrap();

    let analyzer = Analyzer::new(&game);
    let combos = analyzer.combo();

    pretty_assertions::assert_eq!(combos.total(), 60);
    assert!(combos.iter().all(|(combo, _)| combo[0] <= combo[1]));
}
