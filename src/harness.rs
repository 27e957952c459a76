//! Capability test harness.
//!
//! Maps drive providers through this harness rather than the live SDK: a
//! `CapabilityTest` is bound to one `(profile, provider)` pair, performs named
//! use cases through the `UseCasePerformer` seam, and checks results against
//! stored snapshots. The default performer replays recorded exchanges from the
//! capability's `maps/recordings/` directory, so map runs are deterministic
//! and offline. No retry or backoff exists at this layer.

use crate::layout;
use crate::profile::ProfileId;
use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder written over hidden input fields before matching, so secrets
/// and generated ids never anchor a recording.
const HIDDEN_PLACEHOLDER: &str = "[hidden]";

/// Outcome of performing a use case: the SDK either maps a result or a
/// domain error. Transport failures surface as `Err` from `perform`.
#[derive(Clone, Debug)]
pub enum PerformOutcome {
    Success(Value),
    Failure(Value),
}

pub trait UseCasePerformer {
    fn perform(
        &self,
        profile: &ProfileId,
        provider: &str,
        use_case: &str,
        input: &Value,
        hide_input: &[String],
    ) -> Result<PerformOutcome>;
}

/// Result handle returned by [`CapabilityTest::run`].
#[derive(Clone, Debug)]
pub struct RunResult {
    use_case: String,
    outcome: PerformOutcome,
}

impl RunResult {
    /// The mapped result value, or an error when the use case failed.
    pub fn unwrap(&self) -> Result<&Value> {
        match &self.outcome {
            PerformOutcome::Success(value) => Ok(value),
            PerformOutcome::Failure(error) => {
                bail!("use case {} failed: {error}", self.use_case)
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, PerformOutcome::Failure(_))
    }
}

/// Per-run options. `hide_input` lists top-level input fields excluded from
/// recording matches (and masked in stored exchanges).
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub hide_input: Vec<String>,
}

/// Shared wiring for a map run: project root plus the performer seam.
pub struct MapContext<'a> {
    pub root: &'a Path,
    pub performer: &'a dyn UseCasePerformer,
}

/// Harness bound to one profile and provider.
pub struct CapabilityTest<'a> {
    root: PathBuf,
    performer: &'a dyn UseCasePerformer,
    profile: ProfileId,
    provider: String,
}

impl<'a> CapabilityTest<'a> {
    pub fn new(ctx: &MapContext<'a>, profile: &str, provider: &str) -> Result<Self> {
        Ok(Self {
            root: ctx.root.to_path_buf(),
            performer: ctx.performer,
            profile: ProfileId::parse(profile)?,
            provider: provider.to_string(),
        })
    }

    pub fn profile(&self) -> &ProfileId {
        &self.profile
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn run(&self, use_case: &str, input: Value) -> Result<RunResult> {
        self.run_with(use_case, input, &RunOptions::default())
    }

    pub fn run_with(
        &self,
        use_case: &str,
        input: Value,
        options: &RunOptions,
    ) -> Result<RunResult> {
        let outcome = self.performer.perform(
            &self.profile,
            &self.provider,
            use_case,
            &input,
            &options.hide_input,
        )?;
        Ok(RunResult {
            use_case: use_case.to_string(),
            outcome,
        })
    }

    /// Compare `value` against the stored snapshot for `check`.
    ///
    /// A missing snapshot is accepted and written (first recording run); an
    /// existing one must match exactly.
    pub fn match_snapshot(&self, check: &str, value: &Value) -> Result<()> {
        let path = self.snapshot_path(check);
        if !path.is_file() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating snapshot dir {}", parent.display()))?;
            }
            let mut text = serde_json::to_string_pretty(value)?;
            text.push('\n');
            fs::write(&path, text)
                .with_context(|| format!("writing snapshot {}", path.display()))?;
            return Ok(());
        }

        let stored: Value = serde_json::from_str(
            &fs::read_to_string(&path)
                .with_context(|| format!("reading snapshot {}", path.display()))?,
        )
        .with_context(|| format!("parsing snapshot {}", path.display()))?;
        if stored != *value {
            bail!(
                "snapshot mismatch for {check} ({}): stored {stored}, got {value}",
                path.display()
            );
        }
        Ok(())
    }

    fn snapshot_path(&self, check: &str) -> PathBuf {
        self.maps_dir()
            .join("snapshots")
            .join(&self.provider)
            .join(format!("{check}.json"))
    }

    fn maps_dir(&self) -> PathBuf {
        layout::grid_dir(&self.root)
            .join(&self.profile.scope)
            .join(&self.profile.name)
            .join("maps")
    }
}

/// Replays recorded exchanges from `grid/<scope>/<usecase>/maps/recordings/`.
pub struct ReplayPerformer {
    root: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordedExchange {
    use_case: String,
    input: Value,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

impl ReplayPerformer {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn recording_path(&self, profile: &ProfileId, provider: &str) -> PathBuf {
        layout::grid_dir(&self.root)
            .join(&profile.scope)
            .join(&profile.name)
            .join("maps")
            .join("recordings")
            .join(format!("{provider}.json"))
    }
}

impl UseCasePerformer for ReplayPerformer {
    fn perform(
        &self,
        profile: &ProfileId,
        provider: &str,
        use_case: &str,
        input: &Value,
        hide_input: &[String],
    ) -> Result<PerformOutcome> {
        let path = self.recording_path(profile, provider);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("reading recording {}", path.display()))?;
        let exchanges: Vec<RecordedExchange> = serde_json::from_str(&data)
            .with_context(|| format!("parsing recording {}", path.display()))?;

        let wanted = redact(input, hide_input);
        for exchange in &exchanges {
            if exchange.use_case != use_case {
                continue;
            }
            if redact(&exchange.input, hide_input) != wanted {
                continue;
            }
            if let Some(error) = &exchange.error {
                return Ok(PerformOutcome::Failure(error.clone()));
            }
            let result = exchange
                .result
                .clone()
                .ok_or_else(|| anyhow!("recorded exchange for {use_case} has no result or error"))?;
            return Ok(PerformOutcome::Success(result));
        }

        bail!(
            "no recorded exchange for {use_case} with input {wanted} in {}",
            path.display()
        )
    }
}

/// Replace hidden top-level fields with a placeholder before comparison.
fn redact(input: &Value, hide_input: &[String]) -> Value {
    if hide_input.is_empty() {
        return input.clone();
    }
    let mut redacted = input.clone();
    if let Value::Object(map) = &mut redacted {
        for field in hide_input {
            if let Some(slot) = map.get_mut(field) {
                *slot = Value::String(HIDDEN_PLACEHOLDER.to_string());
            }
        }
    }
    redacted
}
