use std::collections::HashSet;

use log::debug;

use crate::utils::digits::Digits;

/// Generate every ordering of `items`, treating equal values at different positions as distinct.
///
/// A slice of length `n` yields `n!` permutations. Each one is built by picking an
/// element and prepending it to every permutation of the rest.
pub fn permute<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    match items {
        [] => vec![Vec::new()],
        [_] => vec![items.to_vec()],
        [a, b] => vec![vec![a.clone(), b.clone()], vec![b.clone(), a.clone()]],
        _ => {
            let mut result = Vec::new();
            for (idx, item) in items.iter().enumerate() {
                let mut rest = items.to_vec();
                rest.remove(idx);
                for tail in permute(&rest) {
                    let mut permutation = Vec::with_capacity(items.len());
                    permutation.push(item.clone());
                    permutation.extend(tail);
                    result.push(permutation);
                }
            }
            result
        }
    }
}

/// Orderings of `digits` with repeated digit values collapsed, first occurrence kept.
pub fn unique_permutations(digits: &Digits) -> Vec<Digits> {
    let mut seen = HashSet::new();
    let unique: Vec<Digits> = permute(digits)
        .into_iter()
        .filter_map(|permutation| Digits::try_from(permutation).ok())
        .filter(|permutation| seen.insert(*permutation))
        .collect();

    debug!(
        "{} unique orderings of digits {:?}",
        unique.len(),
        digits
    );
    unique
}
