use {
    crate::{
        error::StepError,
        utils::version_file::{FileStore, VersionStore, DEFAULT_VERSION_FILE},
    },
    anyhow::{Context, Result},
    clap::{Args, ValueEnum},
    log::{debug, info},
    semver::Version,
    std::{
        io::{self, Write},
        path::PathBuf,
    },
};

/// Version used when no version file exists yet.
pub const DEFAULT_INITIAL_VERSION: &str = "0.1.0";

#[derive(Args, Debug)]
pub struct CommandArgs {
    #[arg(short, long, default_value = DEFAULT_VERSION_FILE, help = "File holding the current version")]
    pub file: PathBuf,

    #[arg(long, default_value = DEFAULT_INITIAL_VERSION, help = "Version assumed when the file is missing")]
    pub initial: Version,

    #[arg(short, long, value_enum, default_value_t = BumpLevel::Minor)]
    pub level: BumpLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BumpLevel {
    #[value(help = "Bump major: x.y.z -> x+1.0.0")]
    Major,
    #[default]
    #[value(help = "Bump minor: x.y.z -> x.y+1.0")]
    Minor,
    #[value(help = "Bump patch: x.y.z -> x.y.z+1")]
    Patch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOptions {
    pub level: BumpLevel,
    pub initial: Version,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self {
            level: BumpLevel::default(),
            initial: Version::new(0, 1, 0),
        }
    }
}

impl From<&CommandArgs> for StepOptions {
    fn from(args: &CommandArgs) -> Self {
        Self {
            level: args.level,
            initial: args.initial.clone(),
        }
    }
}

pub fn run(args: CommandArgs) -> Result<()> {
    let mut store = FileStore::new(&args.file);
    let options = StepOptions::from(&args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    step(&mut store, &options, &mut out)
        .with_context(|| format!("failed to bump version in {}", args.file.display()))?;

    Ok(())
}

/// Reads, bumps, persists and reports the version held by `store`.
///
/// Nothing is written unless the stored version parses and the bump
/// succeeds.
pub fn step(
    store: &mut impl VersionStore,
    options: &StepOptions,
    out: &mut impl Write,
) -> Result<Version, StepError> {
    let current_str = read_current(store, &options.initial)?;
    let current = parse_version(&current_str)?;

    let new_version = bump_version(&options.level, &current)?;
    write_and_report(store, &new_version, out)?;
    info!("bumped version from {current} to {new_version}");

    Ok(new_version)
}

/// Returns the recorded version with surrounding whitespace trimmed, or
/// `initial` when nothing has been recorded. The text is not validated here.
pub fn read_current(store: &impl VersionStore, initial: &Version) -> Result<String, StepError> {
    match store.load()? {
        Some(content) => Ok(content.trim().to_string()),
        None => {
            debug!("no recorded version, starting from {initial}");
            Ok(initial.to_string())
        }
    }
}

pub fn parse_version(input: &str) -> Result<Version, StepError> {
    Version::parse(input).map_err(|source| StepError::Parse {
        input: input.to_string(),
        source,
    })
}

pub fn increment_minor(version: &str) -> Result<Version, StepError> {
    bump_version(&BumpLevel::Minor, &parse_version(version)?)
}

/// Computes the next release version. Pre-release and build metadata are
/// always dropped.
pub fn bump_version(level: &BumpLevel, current: &Version) -> Result<Version, StepError> {
    let overflow = || StepError::Overflow {
        version: current.clone(),
        level: *level,
    };

    let new_version = match level {
        BumpLevel::Major => Version::new(current.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
        BumpLevel::Minor => Version::new(
            current.major,
            current.minor.checked_add(1).ok_or_else(overflow)?,
            0,
        ),
        BumpLevel::Patch => Version::new(
            current.major,
            current.minor,
            current.patch.checked_add(1).ok_or_else(overflow)?,
        ),
    };

    Ok(new_version)
}

/// Persists `version` first, then prints it on its own line to `out`.
pub fn write_and_report(
    store: &mut impl VersionStore,
    version: &Version,
    out: &mut impl Write,
) -> Result<(), StepError> {
    let text = version.to_string();
    store.save(&text)?;
    writeln!(out, "{text}").map_err(StepError::Report)
}
