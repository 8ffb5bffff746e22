use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;
use ndarray::{Array1, Array2};
use shelfcast_helpers::Float;
use thiserror::Error;

mod stop_words;
mod tokenize;

pub use stop_words::{ENGLISH_STOP_WORDS, StopWords};
pub use tokenize::{DEFAULT_TOKEN_PATTERN, Tokenizer};

/// Errors that can occur while fitting or applying a TF-IDF vectorizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TfIdfError {
    /// Cannot fit on zero documents
    #[error("cannot fit a vectorizer on an empty corpus")]
    EmptyCorpus,
    /// Every token in the corpus was a stop word (or there were no tokens)
    #[error("empty vocabulary; the corpus contains only stop words")]
    EmptyVocabulary,
    /// `transform` called before `fit`
    #[error("vectorizer has not been fitted")]
    NotFitted,
    #[error("invalid token pattern: {0}")]
    InvalidPattern(String),
}

/// Row normalisation applied after TF-IDF weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Norm {
    L1,
    #[default]
    L2,
    None,
}

/// Learned vocabulary and inverse document frequencies.
#[derive(Debug, Clone)]
struct Fitted<F: Float> {
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Array1<F>,
}

/// Term-frequency × inverse-document-frequency vectorizer.
///
/// After `fit`, every document is projected into the same vector space: one
/// dimension per vocabulary term, terms indexed in lexical order. Terms that
/// were not seen during fitting are ignored.
///
/// # Type Parameters
///
/// * `F`: The float type of the produced weights (`f32` or `f64`).
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer<F: Float> {
    tokenizer: Tokenizer,
    smooth_idf: bool,
    sublinear_tf: bool,
    norm: Norm,
    fitted: Option<Fitted<F>>,
}

impl<F: Float> Default for TfIdfVectorizer<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> TfIdfVectorizer<F> {
    /// English stop words, smoothed idf, raw term counts, L2 rows.
    pub fn new() -> Self {
        Self::with_tokenizer(Tokenizer::default())
    }

    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            smooth_idf: true,
            sublinear_tf: false,
            norm: Norm::L2,
            fitted: None,
        }
    }

    /// Adds one to every document frequency, as if an extra document
    /// containing every term had been seen.
    pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
        self.smooth_idf = smooth;
        self
    }

    /// Replaces a raw count `tf` with `1 + ln(tf)`.
    pub fn with_sublinear_tf(mut self, sublinear: bool) -> Self {
        self.sublinear_tf = sublinear;
        self
    }

    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Learns the vocabulary and idf weights from `documents`.
    ///
    /// # Errors
    ///
    /// Returns `TfIdfError::EmptyCorpus` if `documents` is empty and
    /// `TfIdfError::EmptyVocabulary` if no document yields a token.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<(), TfIdfError> {
        if documents.is_empty() {
            return Err(TfIdfError::EmptyCorpus);
        }

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let unique: HashSet<String> = self.tokenizer.tokenize(doc.as_ref()).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }
        if document_frequency.is_empty() {
            return Err(TfIdfError::EmptyVocabulary);
        }

        let terms: Vec<String> = document_frequency
            .keys()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        let smoothing = if self.smooth_idf { F::one() } else { F::zero() };
        let n_docs = F::from_count(documents.len()) + smoothing;
        let idf = terms
            .iter()
            .map(|term| {
                let df = F::from_count(document_frequency[term]) + smoothing;
                (n_docs / df).ln() + F::one()
            })
            .collect::<Array1<F>>();

        debug!(
            "fitted tf-idf on {} documents, {} terms",
            documents.len(),
            terms.len()
        );
        self.fitted = Some(Fitted {
            vocabulary,
            terms,
            idf,
        });
        Ok(())
    }

    /// Projects a single document into the fitted vector space.
    ///
    /// A document with no known terms maps to the zero vector.
    ///
    /// # Errors
    ///
    /// Returns `TfIdfError::NotFitted` if `fit` has not been called.
    pub fn transform(&self, document: &str) -> Result<Array1<F>, TfIdfError> {
        let fitted = self.fitted.as_ref().ok_or(TfIdfError::NotFitted)?;

        let mut row = Array1::zeros(fitted.terms.len());
        for token in self.tokenizer.tokenize(document) {
            if let Some(&idx) = fitted.vocabulary.get(&token) {
                row[idx] += F::one();
            }
        }

        if self.sublinear_tf {
            row.mapv_inplace(|tf: F| if tf > F::zero() { F::one() + tf.ln() } else { tf });
        }
        row *= &fitted.idf;
        self.normalize(&mut row);
        Ok(row)
    }

    /// Projects every document; one row per document.
    pub fn transform_all<S: AsRef<str>>(&self, documents: &[S]) -> Result<Array2<F>, TfIdfError> {
        let n_terms = self.vocabulary_size();
        let mut matrix = Array2::zeros((documents.len(), n_terms));
        for (i, doc) in documents.iter().enumerate() {
            matrix.row_mut(i).assign(&self.transform(doc.as_ref())?);
        }
        Ok(matrix)
    }

    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        documents: &[S],
    ) -> Result<Array2<F>, TfIdfError> {
        self.fit(documents)?;
        self.transform_all(documents)
    }

    /// Number of vocabulary terms; zero before fitting.
    pub fn vocabulary_size(&self) -> usize {
        self.fitted.as_ref().map_or(0, |f| f.terms.len())
    }

    /// Vocabulary terms in index order.
    pub fn vocabulary(&self) -> Result<&[String], TfIdfError> {
        self.fitted
            .as_ref()
            .map(|f| f.terms.as_slice())
            .ok_or(TfIdfError::NotFitted)
    }

    /// Index of `term` in the vector space, if it was seen during fitting.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.fitted.as_ref()?.vocabulary.get(term).copied()
    }

    pub fn idf(&self) -> Result<ndarray::ArrayView1<'_, F>, TfIdfError> {
        self.fitted
            .as_ref()
            .map(|f| f.idf.view())
            .ok_or(TfIdfError::NotFitted)
    }

    fn normalize(&self, row: &mut Array1<F>) {
        let norm = match self.norm {
            Norm::None => return,
            Norm::L1 => row.iter().map(|&v| num_traits::Float::abs(v)).sum::<F>(),
            Norm::L2 => row.iter().map(|&v| v * v).sum::<F>().sqrt(),
        };
        if norm > F::zero() {
            row.mapv_inplace(|v| v / norm);
        }
    }
}
