//! Generates typed SDK bindings for one compiled profile.
//!
//! Runs the full pipeline: per-profile typing module, scope index update,
//! aggregate `sdk.ts` rebuild from the grid tree, then the configured
//! transpile step. Progress milestones go to stderr unless `--quiet`.

use anyhow::{Result, anyhow, bail};
use capgrid::{
    CommandTranspiler, GenerateOptions, NoopTranspiler, ProfileId, Transpiler, find_project_root,
    generate,
};
use std::env;
use std::ffi::OsString;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let root = find_project_root()?;

    let log = |message: &str| eprintln!("{message}");
    let options = GenerateOptions {
        log: (!args.quiet).then_some(&log as &dyn Fn(&str)),
    };

    let transpiler: &dyn Transpiler = if args.skip_transpile {
        &NoopTranspiler
    } else {
        &CommandTranspiler
    };

    generate(&root, &args.profile_id, transpiler, &options)
}

struct CliArgs {
    profile_id: ProfileId,
    quiet: bool,
    skip_transpile: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut profile_id: Option<String> = None;
        let mut scope: Option<String> = None;
        let mut profile: Option<String> = None;
        let mut quiet = false;
        let mut skip_transpile = false;

        while let Some(arg_os) = args.next() {
            let arg = os_to_string(arg_os);
            match arg.as_str() {
                "--scope" => scope = Some(next_value(&mut args, "--scope")?),
                "--profile" => profile = Some(next_value(&mut args, "--profile")?),
                "--quiet" | "-q" => quiet = true,
                "--skip-transpile" => skip_transpile = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(1);
                }
                other if other.starts_with('-') => {
                    eprintln!("Unknown flag: {other}");
                    print_usage();
                    std::process::exit(1);
                }
                other => {
                    if profile_id.is_some() {
                        bail!("Only one profile id may be given");
                    }
                    profile_id = Some(other.to_string());
                }
            }
        }

        let profile_id = match (profile_id, scope, profile) {
            (Some(id), None, None) => ProfileId::parse(&id)?,
            (None, Some(scope), Some(profile)) => ProfileId::new(&scope, &profile)?,
            (None, None, None) => bail!("Missing profile id (scope/profile)"),
            _ => bail!("Give either a positional scope/profile id or both --scope and --profile"),
        };

        Ok(Self {
            profile_id,
            quiet,
            skip_transpile,
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(os_to_string)
        .ok_or_else(|| anyhow!("Missing value for {flag}"))
}

fn os_to_string(value: OsString) -> String {
    value.to_string_lossy().into_owned()
}

fn print_usage() {
    eprintln!("{}", usage());
}

fn usage() -> &'static str {
    "Usage: grid-generate SCOPE/PROFILE [options]\n       grid-generate --scope SCOPE --profile PROFILE [options]\n\nOptions:\n  --quiet, -q        suppress progress output\n  --skip-transpile   write sources but skip the configured transpiler\n"
}
