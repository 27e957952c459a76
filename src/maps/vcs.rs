//! Maps for the VCS capabilities.

use crate::harness::{CapabilityTest, MapContext};
use anyhow::Result;
use serde_json::json;

/// Drive `vcs/user-repos` against one provider.
pub fn user_repos_map(ctx: &MapContext<'_>, provider: &str, user: &str) -> Result<()> {
    let test = CapabilityTest::new(ctx, "vcs/user-repos", provider)?;
    let result = test.run("UserRepos", json!({ "user": user }))?;
    test.match_snapshot("user-repos", result.unwrap()?)?;
    Ok(())
}
