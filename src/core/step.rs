//! Step domain model

use crate::core::outcome::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Evaluation function of a step
pub type Evaluation<'a, P> = Box<dyn Fn(&P) -> Outcome + 'a>;

/// Zero-argument side effect attached to one outcome branch
pub type Callback<'a> = Box<dyn Fn() + 'a>;

/// A single step in a pipeline
///
/// A step pairs an evaluation function with one ordered callback list per
/// outcome. Steps are built fresh for every run and hold no state besides
/// their callbacks.
pub struct Step<'a, P: ?Sized> {
    /// Step name, reported in run records
    name: String,

    /// Produces the outcome for a project
    evaluate: Evaluation<'a, P>,

    /// Callbacks fired after a Succeeded evaluation
    on_succeeded: Vec<Callback<'a>>,

    /// Callbacks fired after a Failed evaluation
    on_failed: Vec<Callback<'a>>,

    /// Callbacks fired after a Skipped evaluation
    on_skipped: Vec<Callback<'a>>,
}

impl<'a, P: ?Sized> Step<'a, P> {
    /// Create a step with no callbacks registered
    pub fn new<F>(name: impl Into<String>, evaluate: F) -> Self
    where
        F: Fn(&P) -> Outcome + 'a,
    {
        Self {
            name: name.into(),
            evaluate: Box::new(evaluate),
            on_succeeded: Vec::new(),
            on_failed: Vec::new(),
            on_skipped: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a callback for the given outcome
    pub fn on<F>(mut self, outcome: Outcome, callback: F) -> Self
    where
        F: Fn() + 'a,
    {
        self.callbacks_mut(outcome).push(Box::new(callback));
        self
    }

    pub fn on_succeeded<F>(self, callback: F) -> Self
    where
        F: Fn() + 'a,
    {
        self.on(Outcome::Succeeded, callback)
    }

    pub fn on_failed<F>(self, callback: F) -> Self
    where
        F: Fn() + 'a,
    {
        self.on(Outcome::Failed, callback)
    }

    pub fn on_skipped<F>(self, callback: F) -> Self
    where
        F: Fn() + 'a,
    {
        self.on(Outcome::Skipped, callback)
    }

    /// Evaluate the step once and fire the callbacks for the resulting outcome
    pub fn run(&self, project: &P) -> Outcome {
        let outcome = (self.evaluate)(project);
        debug!("Step {} evaluated to {}", self.name, outcome);

        for callback in self.callbacks(outcome) {
            callback();
        }

        outcome
    }

    fn callbacks(&self, outcome: Outcome) -> &[Callback<'a>] {
        match outcome {
            Outcome::Succeeded => &self.on_succeeded,
            Outcome::Failed => &self.on_failed,
            Outcome::Skipped => &self.on_skipped,
        }
    }

    fn callbacks_mut(&mut self, outcome: Outcome) -> &mut Vec<Callback<'a>> {
        match outcome {
            Outcome::Succeeded => &mut self.on_succeeded,
            Outcome::Failed => &mut self.on_failed,
            Outcome::Skipped => &mut self.on_skipped,
        }
    }
}

impl<P: ?Sized> fmt::Debug for Step<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("on_succeeded", &self.on_succeeded.len())
            .field("on_failed", &self.on_failed.len())
            .field("on_skipped", &self.on_skipped.len())
            .finish()
    }
}

/// Outcome of one evaluated step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub name: String,
    pub outcome: Outcome,
}

/// Run steps in order, stopping after the first one that does not continue
///
/// Steps after the stopping point are never evaluated and none of their
/// callbacks fire.
pub fn run_chain<P: ?Sized>(steps: &[Step<'_, P>], project: &P) -> Vec<StepRecord> {
    let mut records = Vec::with_capacity(steps.len());

    for step in steps {
        let outcome = step.run(project);
        records.push(StepRecord {
            name: step.name().to_string(),
            outcome,
        });

        if !outcome.should_continue() {
            debug!("Step {} stopped the chain", step.name());
            break;
        }
    }

    records
}
