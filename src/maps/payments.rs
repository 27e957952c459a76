//! Maps for the payments capabilities.

use crate::harness::{CapabilityTest, MapContext, RunOptions};
use anyhow::{Result, anyhow};
use serde_json::{Value, json};

/// Create a plan and return its id.
///
/// Shared fixture step: read-oriented maps call this first so they always
/// operate on a plan that exists at the provider.
pub fn create_plan(ctx: &MapContext<'_>, provider: &str) -> Result<String> {
    let test = CapabilityTest::new(ctx, "payments/create-plan", provider)?;
    let created = test.run(
        "CreatePlan",
        json!({
            "name": "capgrid verification plan",
            "interval": "month",
            "price": 100,
            "currency": "USD",
        }),
    )?;
    let plan_id = created
        .unwrap()?
        .get("planId")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("CreatePlan result for {provider} is missing planId"))?
        .to_string();
    Ok(plan_id)
}

/// Drive `payments/read-plans` against one provider.
///
/// `GetPlan` reads the plan created above; the generated id is hidden so
/// recordings do not anchor on a value that changes every run. `ListPlans`
/// takes no input and must match its snapshot.
pub fn read_plans_map(ctx: &MapContext<'_>, provider: &str) -> Result<()> {
    let plan_id = create_plan(ctx, provider)?;
    let test = CapabilityTest::new(ctx, "payments/read-plans", provider)?;

    let fetched = test.run_with(
        "GetPlan",
        json!({ "id": plan_id }),
        &RunOptions {
            hide_input: vec!["id".to_string()],
        },
    )?;
    test.match_snapshot("get-plan", fetched.unwrap()?)?;

    let listed = test.run("ListPlans", json!({}))?;
    test.match_snapshot("list-plans", listed.unwrap()?)?;
    Ok(())
}
