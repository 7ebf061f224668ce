//! Aggregate Answer use case.
//!
//! Answers an apologetics question by combining every available source into
//! one ordered [`AggregatedAnswer`]:
//!
//! 1. Generated answer (always)
//! 2. Verse text (only when the query is reference-shaped)
//! 3. Topical Bible link (always)
//! 4. STEP Bible link (always)
//!
//! The generative and verse lookups are independent, so they run
//! concurrently; each is bounded by the [`LookupPolicy`] deadline. A failed
//! lookup becomes a failure fragment in its own slot and never aborts the
//! rest, which is why [`AggregateAnswerUseCase::execute`] has no error type.

use crate::config::LookupPolicy;
use crate::ports::generative_answer::GenerativeAnswerPort;
use crate::ports::verse_lookup::VerseLookupPort;
use sanctuary_domain::core::string::truncate;
use sanctuary_domain::{
    AggregatedAnswer, AnswerFragment, LookupError, ScriptureReferenceClassifier,
    step_bible_link, topical_bible_link,
};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for answering a question from all sources.
///
/// Holds no per-request state; one instance can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct AggregateAnswerUseCase {
    generator: Arc<dyn GenerativeAnswerPort>,
    verses: Arc<dyn VerseLookupPort>,
    classifier: ScriptureReferenceClassifier,
    policy: LookupPolicy,
}

impl AggregateAnswerUseCase {
    pub fn new(generator: Arc<dyn GenerativeAnswerPort>, verses: Arc<dyn VerseLookupPort>) -> Self {
        Self {
            generator,
            verses,
            classifier: ScriptureReferenceClassifier::default(),
            policy: LookupPolicy::default(),
        }
    }

    /// Use a custom reference classifier.
    pub fn with_classifier(mut self, classifier: ScriptureReferenceClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Use a custom lookup deadline policy.
    pub fn with_policy(mut self, policy: LookupPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &LookupPolicy {
        &self.policy
    }

    /// Produce the ordered fragment list for `query`.
    pub async fn execute(&self, query: &str) -> AggregatedAnswer {
        let query = query.trim();
        let is_reference = self.classifier.is_scripture_reference(query);

        info!(
            "Aggregating answer for {:?} (reference: {})",
            truncate(query, 100),
            is_reference
        );

        let generated = self.bounded("generative answer", self.generator.generate(query));

        let mut fragments = if is_reference {
            let verse = self.bounded("verse lookup", self.verses.fetch_verse(query));
            let (generated, verse) = tokio::join!(generated, verse);
            vec![
                AnswerFragment::generated(generated),
                AnswerFragment::verse(query, verse),
            ]
        } else {
            vec![AnswerFragment::generated(generated.await)]
        };

        fragments.push(AnswerFragment::TopicalLink {
            url: topical_bible_link(query),
        });
        fragments.push(AnswerFragment::StepBibleLink {
            url: step_bible_link(query),
        });

        let answer = AggregatedAnswer::new(query, fragments);
        debug!(
            "Aggregated {} fragments ({} failed)",
            answer.fragments.len(),
            answer.failure_count()
        );
        answer
    }

    /// Await one lookup under the policy deadline, logging any failure.
    async fn bounded<F>(&self, source: &str, lookup: F) -> Result<String, LookupError>
    where
        F: Future<Output = Result<String, LookupError>>,
    {
        let outcome = match self.policy.timeout {
            Some(limit) => match tokio::time::timeout(limit, lookup).await {
                Ok(outcome) => outcome,
                Err(_) => Err(LookupError::Timeout(limit)),
            },
            None => lookup.await,
        };

        if let Err(e) = &outcome {
            warn!("{} failed: {}", source, e);
        }
        outcome
    }
}
