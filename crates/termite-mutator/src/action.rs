//! Mutation actions and candidate factories.

use serde::{Deserialize, Serialize};
use std::fmt;

use termite_core::{
    Edit, SyntaxTree, TextDocument, TextSpan, TransactionRunner, ValidityChecker,
};
use termite_generator::{
    from_fn, integers, Distribution, Generate, GeneratorConfig,
};

use crate::error::MutationError;
use crate::selector::StructuralRangeSelector;
use crate::tracker::RangeTracker;

/// The kind of mutation an action performs, with its payload.
///
/// One variant per mutation kind, dispatched through a single
/// [`MutationAction::perform`] rather than an action class hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationKind {
    /// Delete the tracked span.
    Delete,
    /// Insert `text` at the tracked span's start.
    Insert { text: String },
    /// Replace the tracked span with `text`.
    Replace { text: String },
}

impl MutationKind {
    /// Stable label used in reproduction strings.
    pub fn label(&self) -> &'static str {
        match self {
            MutationKind::Delete => "DeleteRange",
            MutationKind::Insert { .. } => "InsertText",
            MutationKind::Replace { .. } => "ReplaceRange",
        }
    }
}

/// How a performed action resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The edit was applied over the given span and the checks passed.
    Applied { span: TextSpan },
    /// The tracked span was destroyed by an intervening mutation; the
    /// document was left untouched. An expected race, not a failure.
    Invalidated,
}

/// One reproducible mutation against one document.
///
/// An action is bound to a span via a [`RangeTracker`] at the moment its
/// candidate is accepted; [`MutationAction::perform`] consumes the action,
/// so it executes exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationAction {
    document: String,
    kind: MutationKind,
    tracker: RangeTracker,
}

impl MutationAction {
    /// Binds an action of the given kind to `span` in `doc`.
    pub fn new<D: TextDocument + ?Sized>(doc: &D, kind: MutationKind, span: TextSpan) -> Self {
        Self {
            document: doc.identity().to_string(),
            kind,
            tracker: RangeTracker::capture(doc, span),
        }
    }

    /// A deletion of `span`.
    pub fn delete<D: TextDocument + ?Sized>(doc: &D, span: TextSpan) -> Self {
        Self::new(doc, MutationKind::Delete, span)
    }

    /// An insertion of `text` at `offset`.
    pub fn insert<D: TextDocument + ?Sized>(
        doc: &D,
        offset: usize,
        text: impl Into<String>,
    ) -> Self {
        Self::new(
            doc,
            MutationKind::Insert { text: text.into() },
            TextSpan::point(offset),
        )
    }

    /// A replacement of `span` with `text`.
    pub fn replace<D: TextDocument + ?Sized>(
        doc: &D,
        span: TextSpan,
        text: impl Into<String>,
    ) -> Self {
        Self::new(doc, MutationKind::Replace { text: text.into() }, span)
    }

    /// The mutation kind and payload.
    pub fn kind(&self) -> &MutationKind {
        &self.kind
    }

    /// The tracker binding this action to its span.
    pub fn tracker(&self) -> &RangeTracker {
        &self.tracker
    }

    /// Deterministic reproduction string: kind, document identity, and the
    /// captured span with its capture generation. Given the same document
    /// state, this is sufficient to replay the exact same mutation.
    pub fn describe(&self) -> String {
        format!(
            "{}: {} {}@gen{}",
            self.kind.label(),
            self.document,
            self.tracker.captured_span(),
            self.tracker.capture_generation()
        )
    }

    /// Performs the mutation: reads the final span, applies the edit
    /// atomically, then runs both post-mutation consistency checks.
    ///
    /// An invalidated span degrades to a no-op
    /// ([`ActionOutcome::Invalidated`]) with the document untouched. Check
    /// failures and transaction failures are fatal and carry the action's
    /// [`describe`](MutationAction::describe) output.
    pub fn perform<D, R, C>(
        self,
        doc: &mut D,
        runner: &R,
        checker: &C,
    ) -> Result<ActionOutcome, MutationError>
    where
        D: TextDocument + ?Sized,
        R: TransactionRunner<D> + ?Sized,
        C: ValidityChecker<D> + ?Sized,
    {
        let description = self.describe();

        let Some(span) = self.tracker.final_span(doc) else {
            tracing::debug!(action = %description, "tracked span invalidated, skipping");
            return Ok(ActionOutcome::Invalidated);
        };

        let edit = match self.kind {
            MutationKind::Delete => Edit::delete(span),
            MutationKind::Insert { text } => Edit::insert(span.start, text),
            MutationKind::Replace { text } => Edit::replace(span, text),
        };

        let mut pending = Some(edit);
        runner.run_atomically(doc, &mut |d| {
            match pending.take() {
                Some(edit) => d.apply_edit(edit),
                // The runner called the effect more than once.
                None => Ok(()),
            }
        })?;

        checker
            .assert_structurally_valid(doc)
            .map_err(|violation| MutationError::invariant(description.clone(), violation))?;
        checker
            .assert_cached_matches_text(doc)
            .map_err(|violation| MutationError::invariant(description.clone(), violation))?;

        tracing::debug!(action = %description, span = %span, "mutation applied");
        Ok(ActionOutcome::Applied { span })
    }
}

impl fmt::Display for MutationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Candidate generator for syntax-aligned deletions: one [`MutationAction`]
/// per draw, its span snapped to the nearest common ancestor of two randomly
/// chosen offsets. Structurally invalid picks are retried up to the
/// configured budget.
pub fn delete_range<'d, D>(
    doc: &'d D,
    config: GeneratorConfig,
) -> impl Generate<Value = MutationAction> + 'd
where
    D: TextDocument + SyntaxTree + ?Sized,
{
    let selector = StructuralRangeSelector::new(doc, &config);
    from_fn(move |source| {
        let span = selector.select(source)?;
        Ok(MutationAction::delete(doc, span))
    })
    .retrying(config.retry_budget)
}

/// Candidate generator for insertions of short random text at a random
/// offset.
pub fn insert_at<'d, D>(
    doc: &'d D,
    config: GeneratorConfig,
) -> impl Generate<Value = MutationAction> + 'd
where
    D: TextDocument + ?Sized,
{
    from_fn(move |source| {
        let offset = if doc.is_empty() {
            0
        } else {
            integers(0, doc.len() as u64).generate(source)? as usize
        };
        let text = random_text(source, config.extent_mean);
        Ok(MutationAction::insert(doc, offset, text))
    })
    .retrying(config.retry_budget)
}

/// Candidate generator for replacing a syntax-aligned span with short
/// random text.
pub fn replace_range<'d, D>(
    doc: &'d D,
    config: GeneratorConfig,
) -> impl Generate<Value = MutationAction> + 'd
where
    D: TextDocument + SyntaxTree + ?Sized,
{
    let selector = StructuralRangeSelector::new(doc, &config);
    from_fn(move |source| {
        let span = selector.select(source)?;
        let text = random_text(source, config.extent_mean);
        Ok(MutationAction::replace(doc, span, text))
    })
    .retrying(config.retry_budget)
}

/// Short printable ASCII text with geometrically distributed length.
fn random_text(source: &mut termite_generator::DrawSource, mean: f64) -> String {
    let len = Distribution::Geometric { mean }.sample(source) as usize;
    let mut text = String::with_capacity(len);
    for _ in 0..len {
        let code = Distribution::Uniform { min: 32, max: 126 }.sample(source) as u8;
        text.push(code as char);
    }
    text
}
