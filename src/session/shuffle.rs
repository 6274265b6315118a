use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly shuffled copy of `items`, leaving the input untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        let input: Vec<u32> = (0..20).collect();
        let mut out = shuffled(&input, &mut rng);
        assert_eq!(out.len(), input.len());
        out.sort();
        assert_eq!(out, input);
    }

    #[test]
    fn test_input_not_mutated() {
        let mut rng = SmallRng::seed_from_u64(1);
        let input = vec!["a", "b", "c", "d"];
        let _ = shuffled(&input, &mut rng);
        assert_eq!(input, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_same_seed_same_order() {
        let input: Vec<u32> = (0..10).collect();
        let a = shuffled(&input, &mut SmallRng::seed_from_u64(9));
        let b = shuffled(&input, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_and_single() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert!(shuffled::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffled(&[5], &mut rng), vec![5]);
    }

    #[test]
    fn test_every_position_reachable() {
        // Each element should land in each slot at least once over many draws.
        let mut rng = SmallRng::seed_from_u64(2024);
        let input = [0usize, 1, 2];
        let mut seen = [[false; 3]; 3];
        for _ in 0..300 {
            let out = shuffled(&input, &mut rng);
            for (pos, &v) in out.iter().enumerate() {
                seen[v][pos] = true;
            }
        }
        assert!(seen.iter().all(|row| row.iter().all(|&s| s)));
    }
}
