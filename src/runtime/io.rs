use int_vector::IntVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Appends `count` random values, reproducibly when `seed` is given.
pub fn fill_random(v: &mut IntVector, count: usize, seed: Option<u64>) {
    match seed {
        Some(seed) => fill_from(v, count, &mut StdRng::seed_from_u64(seed)),
        None => fill_from(v, count, &mut rand::rng()),
    }
}

fn fill_from<R: Rng + ?Sized>(v: &mut IntVector, count: usize, rng: &mut R) {
    for _ in 0..count {
        v.push_back(rng.random::<i32>());
    }
}
