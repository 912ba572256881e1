use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::types::Article;
use super::TARGET_DATASET;

pub const DEFAULT_TARGET_SIZE: usize = 5000;
pub const DEFAULT_SEED: u64 = 42;

/// Cap every category at `target_size` articles and shuffle the result.
///
/// Categories are visited in sorted order. Oversized categories keep their
/// last `target_size` rows. The shuffle is seeded, so the same corpus and
/// seed always give the same order.
pub fn balance(articles: Vec<Article>, target_size: usize, seed: u64) -> Vec<Article> {
    let total = articles.len();

    let mut groups: BTreeMap<String, Vec<Article>> = BTreeMap::new();
    for article in articles {
        groups
            .entry(article.category.clone())
            .or_default()
            .push(article);
    }

    let mut balanced = Vec::with_capacity(total.min(groups.len().saturating_mul(target_size)));
    for (category, mut group) in groups {
        if group.len() > target_size {
            debug!(
                target: TARGET_DATASET,
                "Truncating '{}' from {} to {} articles",
                category,
                group.len(),
                target_size
            );
            let excess = group.len() - target_size;
            group.drain(..excess);
        }
        balanced.extend(group);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    balanced.shuffle(&mut rng);

    info!(
        target: TARGET_DATASET,
        "Balanced corpus: {} of {} articles (target {} per category)",
        balanced.len(),
        total,
        target_size
    );
    balanced
}
