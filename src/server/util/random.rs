use rand::Rng;

/// Picks up to `n` distinct elements uniformly at random, without replacement.
///
/// When the population holds `n` elements or fewer, all of them are returned in
/// random order. The caller supplies the generator so tests can seed it.
pub fn pick_random<T, R: Rng + ?Sized>(n: usize, population: Vec<T>, rng: &mut R) -> Vec<T> {
    let amount = n.min(population.len());
    let mut picked: Vec<Option<T>> = population.into_iter().map(Some).collect();

    rand::seq::index::sample(rng, picked.len(), amount)
        .into_iter()
        .filter_map(|index| picked[index].take())
        .collect()
}
