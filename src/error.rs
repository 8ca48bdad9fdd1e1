use {
    crate::commands::bump_version::BumpLevel,
    semver::Version,
    std::{io, path::PathBuf},
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum StepError {
    #[error("invalid version {input:?}")]
    Parse {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("cannot bump {level:?} of {version}: component would overflow")]
    Overflow { version: Version, level: BumpLevel },

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to report new version")]
    Report(#[source] io::Error),
}
