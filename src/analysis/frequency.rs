use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, info};

use super::TARGET_ANALYSIS;
use crate::text::{bigrams, CleanedArticle};

pub const DEFAULT_TOP_WORDS: usize = 100;
pub const DEFAULT_TOP_BIGRAMS: usize = 30;

/// A term with its count, as returned by the ranking functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Exact counts in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, term: &str) {
        match self.index.get(term) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(term.to_string(), self.entries.len());
                self.entries.push((term.to_string(), 1));
            }
        }
    }

    pub fn count(&self, term: &str) -> usize {
        self.index.get(term).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Distinct terms in first-seen order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(term, _)| term.as_str())
    }

    /// Highest counts first. The sort is stable over first-seen order, so
    /// equal counts rank by first occurrence.
    pub fn most_common(&self, limit: usize) -> Vec<TermCount> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(limit)
            .map(|(term, count)| TermCount {
                term: term.clone(),
                count: *count,
            })
            .collect()
    }
}

impl<'a> Extend<&'a str> for FrequencyTable {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, terms: I) {
        for term in terms {
            self.add(term);
        }
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(terms: I) -> Self {
        let mut table = Self::new();
        table.extend(terms);
        table
    }
}

#[derive(Debug, Default)]
struct CategoryTables {
    unigrams: FrequencyTable,
    bigrams: FrequencyTable,
    articles: usize,
}

/// Per-category unigram and bigram counts over a cleaned corpus.
///
/// Each category is counted in one sequential pass over its articles in
/// corpus order, which fixes the tie-break order of the rankings.
#[derive(Debug, Default)]
pub struct FrequencyAnalyzer {
    categories: Vec<String>,
    tables: HashMap<String, CategoryTables>,
}

impl FrequencyAnalyzer {
    pub fn new(corpus: &[CleanedArticle]) -> Self {
        let mut analyzer = Self::default();

        for article in corpus {
            if !analyzer.tables.contains_key(&article.category) {
                analyzer.categories.push(article.category.clone());
            }
            let tables = analyzer
                .tables
                .entry(article.category.clone())
                .or_default();

            tables.articles += 1;
            tables
                .unigrams
                .extend(article.token_list.iter().map(String::as_str));
            for bigram in bigrams(&article.token_list) {
                tables.bigrams.add(&bigram);
            }
        }

        for category in &analyzer.categories {
            let tables = &analyzer.tables[category];
            debug!(
                target: TARGET_ANALYSIS,
                "Category '{}': {} articles, {} distinct words, {} distinct bigrams",
                category,
                tables.articles,
                tables.unigrams.len(),
                tables.bigrams.len()
            );
        }
        info!(
            target: TARGET_ANALYSIS,
            "Counted n-grams for {} categories over {} articles",
            analyzer.categories.len(),
            corpus.len()
        );

        analyzer
    }

    /// Categories in order of first appearance in the corpus.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn unigrams(&self, category: &str) -> Option<&FrequencyTable> {
        self.tables.get(category).map(|t| &t.unigrams)
    }

    pub fn bigram_table(&self, category: &str) -> Option<&FrequencyTable> {
        self.tables.get(category).map(|t| &t.bigrams)
    }

    /// Most frequent tokens of a category. Unknown categories yield nothing.
    pub fn top_unigrams(&self, category: &str, limit: usize) -> Vec<TermCount> {
        self.unigrams(category)
            .map(|table| table.most_common(limit))
            .unwrap_or_default()
    }

    /// Most frequent adjacent token pairs of a category, keyed as `"a b"`.
    pub fn top_bigrams(&self, category: &str, limit: usize) -> Vec<TermCount> {
        self.bigram_table(category)
            .map(|table| table.most_common(limit))
            .unwrap_or_default()
    }

    /// Word to the set of categories (among `categories`) whose articles use it.
    pub fn exclusivity_index<S: AsRef<str>>(
        &self,
        categories: &[S],
    ) -> HashMap<&str, BTreeSet<&str>> {
        let mut index: HashMap<&str, BTreeSet<&str>> = HashMap::new();
        for category in categories {
            let category = category.as_ref();
            if let Some((name, tables)) = self.tables.get_key_value(category) {
                for word in tables.unigrams.terms() {
                    index.entry(word).or_default().insert(name.as_str());
                }
            }
        }
        index
    }

    /// For each requested category, the words that no other requested
    /// category uses. Every requested category gets an entry, possibly empty.
    pub fn category_exclusive_words<S: AsRef<str>>(
        &self,
        categories: &[S],
    ) -> BTreeMap<String, BTreeSet<String>> {
        let mut exclusive: BTreeMap<String, BTreeSet<String>> = categories
            .iter()
            .map(|c| (c.as_ref().to_string(), BTreeSet::new()))
            .collect();

        for (word, owners) in self.exclusivity_index(categories) {
            if owners.len() == 1 {
                if let Some(owner) = owners.iter().next() {
                    if let Some(words) = exclusive.get_mut(*owner) {
                        words.insert(word.to_string());
                    }
                }
            }
        }

        for (category, words) in &exclusive {
            debug!(
                target: TARGET_ANALYSIS,
                "{} words exclusive to '{}'", words.len(), category
            );
        }
        exclusive
    }
}
