//! Tokenizer: one classified token per raw argument.
//!
//! Classification of an argument never depends on its neighbours, so this is a plain
//! order-preserving map over the input.

use tracing::trace;

use super::classifier::Classifier;
use super::token::ClassifiedToken;

/// Classify every raw argument, in order
pub fn tokenize<I, S>(args: I, classifier: &Classifier) -> Vec<ClassifiedToken>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let token = classifier.classify(raw.as_ref());
            trace!(index, kind = %token.kind, raw = %token.raw, "classified argument");
            token
        })
        .collect()
}
