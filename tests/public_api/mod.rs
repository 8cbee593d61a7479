//! # Using the crate as a library
//!
//! Custom element types, custom permuters and the error paths.
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use permutation_uniformity::algorithm::enumerate::enumerate_permutations;
use permutation_uniformity::algorithm::keys::{generate_unique_keys, key_range};
use permutation_uniformity::algorithm::matching::find_permutation;
use permutation_uniformity::algorithm::permute::{Method, Permuter, sort_by_keys};
use permutation_uniformity::error::Error;
use permutation_uniformity::experiment::{Experiment, run_all};

/// Rotates the sequence by a random amount, reaching only `n` of the `n!` orderings.
struct Rotate;

impl Permuter for Rotate {
    fn permute<T, R: Rng + ?Sized>(&self, sequence: &mut [T], rng: &mut R) -> Result<(), Error> {
        if sequence.is_empty() {
            return Err(Error::EmptySequence);
        }
        let amount = rng.random_range(0..sequence.len());
        sequence.rotate_left(amount);
        Ok(())
    }
}

#[test]
fn string_elements() {
    let mut rng = StdRng::seed_from_u64(1);
    let experiment = Experiment::new(60, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    let report = experiment.run(&Method::SortingUnique, &mut rng).unwrap();

    assert_eq!(report.total(), 60);
    assert_eq!(report.expected_average(), 10);
    assert!(report.to_string().contains("\nc b a : "));
}

#[test]
fn custom_permuter() {
    let mut rng = StdRng::seed_from_u64(1);
    let report = Experiment::new(600, vec![1, 2, 3]).run(&Rotate, &mut rng).unwrap();

    // Rotations of [1, 2, 3] are at positions 0, 3 and 4 of the enumeration.
    let reached = report.rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| row.count() > 0)
        .map(|(index, _)| index)
        .collect::<Vec<_>>();
    assert_eq!(reached, vec![0, 3, 4]);
    assert_eq!(report.total(), 600);
    assert_eq!(report.rows()[1].deviation(), 100);
}

#[test]
fn reproducible_with_seed() {
    let experiment = Experiment::new(1_000, vec![1, 2, 3, 4]);

    let first = run_all(&experiment, &mut StdRng::seed_from_u64(8)).unwrap();
    let second = run_all(&experiment, &mut StdRng::seed_from_u64(8)).unwrap();
    for ((_, left), (_, right)) in first.iter().zip(second.iter()) {
        assert_eq!(left, right);
    }
}

#[test]
fn round_trip() {
    let initial = vec!['p', 'q', 'r', 's', 't'];
    let haystack = enumerate_permutations(&initial).unwrap();
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..200 {
        let mut keys = generate_unique_keys(initial.len(), &mut rng).unwrap();
        assert!(keys.iter().all(|key| key_range(initial.len()).unwrap().contains(key)));

        let mut sequence = initial.clone();
        sort_by_keys(&mut keys, &mut sequence);
        let index = find_permutation(&sequence, &haystack).unwrap().unwrap();
        assert_eq!(haystack[index], sequence);
    }
}

#[test]
fn empty_sequence() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = run_all(&Experiment::<char>::new(10, Vec::new()), &mut rng);

    assert_eq!(result.err(), Some(Error::EmptySequence));
}

#[test]
fn too_large() {
    let sequence = (0..25).collect::<Vec<u8>>();
    assert_eq!(enumerate_permutations(&sequence).err(), Some(Error::TooLarge { len: 25 }));
}
