use crate::constants::{
    ACQUIRE_FTP, DEFAULT_FTP_HOSTNAME, DEFAULT_FTP_PASSWORD, DEFAULT_FTP_PORT, DEFAULT_FTP_USER, FTP_HOSTNAME_FLAG,
    FTP_PASSWORD_FLAG, FTP_USER_FLAG,
};
use crate::error::{FerretError, Result};
use crate::pipeline::{ExecutionContext, Flags, PluginDescriptor, Stage, StageRole, StageValue};
use crate::types::{Payload, SourceStream};
use futures::future::FutureExt;
use std::fmt;
use std::io::Cursor;
use std::str::FromStr;
use std::sync::Arc;
use suppaftp::types::FileType;
use suppaftp::FtpStream;
use tracing::{debug, info, instrument, warn};

/// Marker file the feed drops into each directory.
const TIMESTAMP_FILE: &str = ".timestamp";

#[derive(Clone, PartialEq, Eq)]
pub struct FtpCredentials {
    pub hostname: String,
    pub user: String,
    pub password: String,
}

impl FtpCredentials {
    pub fn from_flags(flags: &Flags) -> Self {
        Self {
            hostname: flags.get_str(FTP_HOSTNAME_FLAG).unwrap_or(DEFAULT_FTP_HOSTNAME).to_string(),
            user: flags.get_str(FTP_USER_FLAG).unwrap_or(DEFAULT_FTP_USER).to_string(),
            password: flags.get_str(FTP_PASSWORD_FLAG).unwrap_or(DEFAULT_FTP_PASSWORD).to_string(),
        }
    }

    /// `host:port`, using the standard control port when none is given.
    pub fn address(&self) -> String {
        if self.hostname.contains(':') {
            self.hostname.clone()
        } else {
            format!("{}:{}", self.hostname, DEFAULT_FTP_PORT)
        }
    }
}

impl fmt::Debug for FtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FtpCredentials")
            .field("hostname", &self.hostname)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

/// One line of a remote directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    pub name: String,
    pub is_dir: bool,
}

impl RemoteEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: false }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: true }
    }
}

/// An open, logged-in FTP control connection.
pub trait FtpSession {
    /// Entries of `path`, or of the login directory when `None`.
    fn list(&mut self, path: Option<&str>) -> Result<Vec<RemoteEntry>>;
    fn retrieve(&mut self, path: &str) -> Result<Vec<u8>>;
    fn quit(&mut self) -> Result<()>;
}

pub trait FtpConnector: Send + Sync {
    fn connect(&self, credentials: &FtpCredentials) -> Result<Box<dyn FtpSession>>;
}

/// Connects over plain FTP with binary transfers.
pub struct RemoteConnector;

impl FtpConnector for RemoteConnector {
    fn connect(&self, credentials: &FtpCredentials) -> Result<Box<dyn FtpSession>> {
        let mut stream = FtpStream::connect(credentials.address())?;
        stream.login(&credentials.user, &credentials.password)?;
        stream.transfer_type(FileType::Binary)?;
        Ok(Box::new(RemoteSession(stream)))
    }
}

struct RemoteSession(FtpStream);

impl FtpSession for RemoteSession {
    fn list(&mut self, path: Option<&str>) -> Result<Vec<RemoteEntry>> {
        let lines = self.0.list(path)?;
        Ok(lines
            .iter()
            .filter_map(|line| match suppaftp::list::File::from_str(line) {
                Ok(file) => Some(RemoteEntry {
                    name: file.name().to_string(),
                    is_dir: file.is_directory(),
                }),
                Err(e) => {
                    debug!("Skipping unparsable listing line {:?}: {}", line, e);
                    None
                }
            })
            .collect())
    }

    fn retrieve(&mut self, path: &str) -> Result<Vec<u8>> {
        Ok(self.0.retr_as_buffer(path)?.into_inner())
    }

    fn quit(&mut self) -> Result<()> {
        Ok(self.0.quit()?)
    }
}

/// Downloads every file in every top-level directory of an FTP server.
pub struct AcquireFtp {
    connector: Arc<dyn FtpConnector>,
}

impl AcquireFtp {
    pub fn new(connector: impl FtpConnector + 'static) -> Self {
        Self {
            connector: Arc::new(connector),
        }
    }
}

impl Default for AcquireFtp {
    fn default() -> Self {
        Self::new(RemoteConnector)
    }
}

pub fn descriptor() -> PluginDescriptor {
    descriptor_with(AcquireFtp::default())
}

pub fn descriptor_with(stage: AcquireFtp) -> PluginDescriptor {
    PluginDescriptor::new(StageRole::Acquire, stage)
        .with_flag_alias('u', FTP_USER_FLAG)
        .with_flag_alias('p', FTP_PASSWORD_FLAG)
        .with_flag_alias('h', FTP_HOSTNAME_FLAG)
}

impl Stage for AcquireFtp {
    fn call(&self, _input: Option<StageValue>, ctx: &Arc<ExecutionContext>) -> Result<StageValue> {
        let credentials = FtpCredentials::from_flags(ctx.flags());
        let connector = Arc::clone(&self.connector);
        Ok(async move {
            let files = tokio::task::spawn_blocking(move || download_all(connector.as_ref(), &credentials))
                .await
                .map_err(|e| FerretError::plugin(ACQUIRE_FTP, format!("download task failed: {e}")))??;
            info!("Acquired {} remote files", files.len());
            let streams = files
                .into_iter()
                .map(|(path, bytes)| SourceStream::from_reader(path, Cursor::new(bytes)))
                .collect();
            Ok(Payload::Streams(streams))
        }
        .boxed())
    }
}

#[instrument(skip_all, fields(host = %credentials.hostname))]
fn download_all(connector: &dyn FtpConnector, credentials: &FtpCredentials) -> Result<Vec<(String, Vec<u8>)>> {
    let mut session = connector.connect(credentials)?;
    let downloaded = download_directories(session.as_mut());
    if let Err(e) = session.quit() {
        warn!("Closing the FTP session failed: {}", e);
    }
    downloaded
}

fn download_directories(session: &mut dyn FtpSession) -> Result<Vec<(String, Vec<u8>)>> {
    let dirs: Vec<String> = session
        .list(None)?
        .into_iter()
        .filter(|entry| entry.is_dir && !entry.name.starts_with('.'))
        .map(|entry| entry.name)
        .collect();

    let mut files = Vec::new();
    for dir in dirs {
        let wanted: Vec<String> = session
            .list(Some(&dir))?
            .into_iter()
            .filter(|entry| !entry.is_dir && entry.name != TIMESTAMP_FILE)
            .map(|entry| format!("{}/{}", dir.trim_end_matches('/'), entry.name))
            .collect();
        debug!("Downloading {} files from {}", wanted.len(), dir);
        for path in wanted {
            let bytes = session.retrieve(&path)?;
            files.push((path, bytes));
        }
    }
    Ok(files)
}
