//! Uniform shuffling over an injectable random source.

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle `items` in place. Every permutation is equally likely.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng,
{
    items.shuffle(rng);
}

/// Owned variant of [`shuffle`].
pub fn shuffled<T, R>(mut items: Vec<T>, rng: &mut R) -> Vec<T>
where
    R: Rng,
{
    shuffle(&mut items, rng);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    #[test]
    fn keeps_every_element() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_order() {
        let a = shuffled((0..20).collect::<Vec<u32>>(), &mut StdRng::seed_from_u64(42));
        let b = shuffled((0..20).collect::<Vec<u32>>(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn reorders_larger_sets() {
        let original: Vec<u32> = (0..20).collect();
        let moved = (0..8u64).any(|seed| {
            shuffled(original.clone(), &mut StdRng::seed_from_u64(seed)) != original
        });
        assert!(moved);
    }

    #[test]
    fn agrees_with_slice_shuffle_for_the_same_seed() {
        let mut expected: Vec<u32> = (0..20).collect();
        expected.shuffle(&mut StdRng::seed_from_u64(99));

        let actual = shuffled((0..20).collect::<Vec<u32>>(), &mut StdRng::seed_from_u64(99));
        assert_eq!(actual, expected);
    }

    #[test]
    fn reaches_every_ordering_of_three() {
        let mut seen = std::collections::HashSet::new();
        for seed in 0..200u64 {
            seen.insert(shuffled(vec![1, 2, 3], &mut StdRng::seed_from_u64(seed)));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn handles_trivial_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u32> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![9];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![9]);
    }
}
