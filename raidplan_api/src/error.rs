use std::fmt::{Debug, Write};
use std::{borrow::Cow, panic::Location};

use serde::{ser::SerializeStruct, Deserialize, Serialize};
use strum_macros::IntoStaticStr;

/// The requested hardware-management interface cannot serve the requested
/// RAID mode.
#[derive(Debug, Eq, thiserror::Error, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigurationError {
    #[error("RAID settings are defined, but the node's driver {interface} does not support RAID")]
    NoRaidSupport { interface: String },

    #[error("Hardware RAID settings are defined, but the node's driver {interface} only supports software RAID")]
    SoftwareRaidOnly { interface: String },

    #[error("Firmware settings are defined, but BMC type '{bmc}' does not support them")]
    FirmwareSettingsUnsupported { bmc: String },

    #[error("Firmware settings are defined, but the node has no BMC address")]
    MissingBmcAddress,
}

/// The desired state is malformed. These are user-input defects and never
/// transient.
#[derive(Debug, Eq, thiserror::Error, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationError {
    #[error("Hardware RAID volumes {previous_index} and {index} share the name '{name}', but volume names must be unique")]
    DuplicateVolumeName {
        name: String,
        index: usize,
        previous_index: usize,
    },

    #[error("First software RAID volume has level '{level}', but must be RAID1")]
    SoftwareRaidFirstVolumeNotRaid1 { level: String },

    #[error("RAID level '{value}' is not recognized")]
    UnknownRaidLevel { value: String },

    #[error("RAID interface '{value}' is not recognized")]
    UnknownRaidInterface { value: String },

    #[error("Cannot determine BMC type from address '{address}'")]
    UnknownBmcType { address: String },
}

/// The node configuration document could not be read.
#[derive(Debug, Eq, thiserror::Error, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidInputError {
    #[error("Failed to load node configuration file from '{path}'")]
    LoadNodeConfiguration { path: String },

    #[error("Failed to parse node configuration")]
    ParseNodeConfiguration,
}

#[derive(Debug, Eq, thiserror::Error, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum InternalError {
    #[error("Panic in build RAID settings: {message}")]
    BuildPanic { message: String },

    #[error("Failed to serialize BIOS settings")]
    SerializeBiosSettings,
}

/// Each variant of `ErrorKind` corresponds to a different category of error.
#[derive(Debug, Eq, thiserror::Error, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    /// The selected interface is incompatible with the requested RAID mode.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The desired state failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The node configuration document could not be loaded or parsed.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// A bug was encountered while building RAID settings.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Debug)]
struct RaidErrorInner {
    kind: ErrorKind,
    location: &'static Location<'static>,
    source: Option<anyhow::Error>,
    context: Vec<(Cow<'static, str>, &'static Location<'static>)>,
}

pub struct RaidError(Box<RaidErrorInner>);
impl RaidError {
    #[track_caller]
    pub fn new(kind: impl Into<ErrorKind>) -> Self {
        RaidError(Box::new(RaidErrorInner {
            kind: kind.into(),
            location: Location::caller(),
            source: None,
            context: Vec::new(),
        }))
    }

    /// Returns a reference to the inner ErrorKind.
    pub fn kind(&self) -> &ErrorKind {
        &self.0.kind
    }
}

impl From<ConfigurationError> for RaidError {
    #[track_caller]
    fn from(e: ConfigurationError) -> Self {
        RaidError::new(e)
    }
}

impl From<ValidationError> for RaidError {
    #[track_caller]
    fn from(e: ValidationError) -> Self {
        RaidError::new(e)
    }
}

pub trait ReportError<T, K> {
    /// Convert this error into a structured RaidError.
    fn structured(self, kind: K) -> Result<T, RaidError>;
}

impl<T, K> ReportError<T, K> for Option<T>
where
    K: Into<ErrorKind>,
{
    #[track_caller]
    fn structured(self, kind: K) -> Result<T, RaidError> {
        match self {
            Some(t) => Ok(t),
            None => Err(RaidError::new(kind)),
        }
    }
}

impl<T, E, K> ReportError<T, K> for Result<T, E>
where
    E: Into<anyhow::Error>,
    K: Into<ErrorKind>,
{
    #[track_caller]
    fn structured(self, kind: K) -> Result<T, RaidError> {
        match self {
            Ok(o) => Ok(o),
            Err(e) => Err(RaidError(Box::new(RaidErrorInner {
                kind: kind.into(),
                location: Location::caller(),
                source: Some(e.into()),
                context: Vec::new(),
            }))),
        }
    }
}

pub trait RaidResultExt<T> {
    /// Attach a context message to the error.
    fn message(self, context: impl Into<Cow<'static, str>>) -> Result<T, RaidError>;
}
impl<T> RaidResultExt<T> for Result<T, RaidError> {
    #[track_caller]
    fn message(mut self, context: impl Into<Cow<'static, str>>) -> Result<T, RaidError> {
        if let Err(ref mut e) = self {
            e.0.context.push((context.into(), Location::caller()));
        }
        self
    }
}

impl Serialize for RaidError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("raid-error", 5)?;
        state.serialize_field("message", &self.0.kind.to_string())?;
        match self.0.kind {
            ErrorKind::Configuration(ref e) => state.serialize_field("error", e)?,
            ErrorKind::Validation(ref e) => state.serialize_field("error", e)?,
            ErrorKind::InvalidInput(ref e) => state.serialize_field("error", e)?,
            ErrorKind::Internal(ref e) => state.serialize_field("error", e)?,
        }
        state.serialize_field("category", <&str>::from(&self.0.kind))?;
        state.serialize_field(
            "location",
            &format!("{}:{}", self.0.location.file(), self.0.location.line()),
        )?;
        match self.0.source {
            Some(ref e) => state.serialize_field("cause", &Some(format!("{:?}", e)))?,
            None => state.serialize_field("cause", &None::<String>)?,
        }
        state.end()
    }
}

impl std::fmt::Display for RaidError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.kind)
    }
}

impl Debug for RaidError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.0.kind,
            self.0.location.file(),
            self.0.location.line()
        )?;

        if !self.0.context.is_empty() {
            writeln!(f, "\n\nContext:")?;
            for (i, (context, location)) in self.0.context.iter().enumerate() {
                for (j, line) in context.split('\n').enumerate() {
                    if j == 0 {
                        write!(f, "{: >5}: ", i)?;
                    } else {
                        f.write_str("\n       ")?;
                    }
                    f.write_str(line)?;
                }
                writeln!(f, " at {}:{}", location.file(), location.line())?;
            }
        }

        if let Some(ref source) = self.0.source {
            writeln!(f, "\n\nCaused by:")?;
            let mut index = 0;
            let mut source: Option<&dyn std::error::Error> = Some(source.as_ref());
            while let Some(e) = source {
                for (i, line) in e.to_string().split('\n').enumerate() {
                    if i == 0 {
                        write!(f, "{: >5}: ", index)?;
                    } else {
                        f.write_str("\n       ")?;
                    }
                    f.write_str(line)?;
                }
                f.write_char('\n')?;
                source = e.source();
                index += 1;
            }
        }
        Ok(())
    }
}
