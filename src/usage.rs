//! App usage records
//!
//! Each launch can be logged together with the device context it happened
//! in (connectivity, charging, brightness). The platform layer supplies
//! the context through the `DeviceStateProbe` seam; the log persists as
//! JSON lines so appends stay cheap.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// One recorded launch with its device context
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// When the launch happened
    pub timestamp: DateTime<Utc>,
    /// Launched package
    pub package_name: String,
    /// A wired or wireless audio device was connected
    pub audio_device_connected: bool,
    /// Battery was charging
    pub charging: bool,
    /// Wifi transport was active
    pub wifi_connected: bool,
    /// Cellular transport was active
    pub mobile_data_connected: bool,
    /// Bluetooth was on with bonded devices
    pub bluetooth_connected: bool,
    /// Screen brightness setting
    pub brightness: i32,
}

impl UsageRecord {
    /// Hour of day of the launch, 24-hour format
    pub fn hour_of_day(&self) -> u32 {
        self.timestamp.hour()
    }
}

/// Device context at a point in time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceState {
    pub audio_device_connected: bool,
    pub charging: bool,
    pub wifi_connected: bool,
    pub mobile_data_connected: bool,
    pub bluetooth_connected: bool,
    pub brightness: i32,
}

/// Reads the current device context
///
/// The platform layer implements this against its system services.
pub trait DeviceStateProbe {
    /// Snapshot the current device context
    fn snapshot(&self) -> DeviceState;
}

/// A probe reporting an idle, disconnected device, for testing
pub struct NullDeviceStateProbe;

impl DeviceStateProbe for NullDeviceStateProbe {
    fn snapshot(&self) -> DeviceState {
        DeviceState::default()
    }
}

/// A probe returning a fixed snapshot, for testing
pub struct FixedDeviceStateProbe(pub DeviceState);

impl DeviceStateProbe for FixedDeviceStateProbe {
    fn snapshot(&self) -> DeviceState {
        self.0
    }
}

/// Combines a probe snapshot with the clock into usage records
pub struct UsageCollector<P: DeviceStateProbe> {
    probe: P,
}

impl<P: DeviceStateProbe> UsageCollector<P> {
    /// Create a collector over a probe
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Build a usage record for a launch of the given package
    pub fn collect(&self, package_name: &str) -> UsageRecord {
        let state = self.probe.snapshot();
        let record = UsageRecord {
            timestamp: Utc::now(),
            package_name: package_name.to_string(),
            audio_device_connected: state.audio_device_connected,
            charging: state.charging,
            wifi_connected: state.wifi_connected,
            mobile_data_connected: state.mobile_data_connected,
            bluetooth_connected: state.bluetooth_connected,
            brightness: state.brightness,
        };
        crate::log!(
            "Collected usage for {} at hour {}",
            record.package_name,
            record.hour_of_day()
        );
        record
    }
}

/// Append-mostly store of usage records, one JSON object per line
#[derive(Debug)]
pub struct UsageLog {
    path: PathBuf,
    records: Vec<UsageRecord>,
}

impl UsageLog {
    /// Open a log file, loading any existing records
    pub fn open(path: &Path) -> Self {
        let mut log = Self {
            path: path.to_path_buf(),
            records: Vec::new(),
        };

        if path.exists() {
            if let Ok(file) = File::open(path) {
                for line in BufReader::new(file).lines().map_while(Result::ok) {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<UsageRecord>(&line) {
                        Ok(record) => log.records.push(record),
                        Err(e) => crate::log!("Dropping unreadable usage line: {}", e),
                    }
                }
            }
        }

        log
    }

    /// Append one record to memory and disk
    pub fn insert(&mut self, record: UsageRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(&record)?;
        writeln!(file, "{}", line)?;

        self.records.push(record);
        Ok(())
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    /// Records for one package
    pub fn records_for<'a>(&'a self, package_name: &'a str) -> impl Iterator<Item = &'a UsageRecord> {
        self.records
            .iter()
            .filter(move |r| r.package_name == package_name)
    }

    /// Drop records older than the cutoff and rewrite the file
    pub fn prune_before(&mut self, cutoff: DateTime<Utc>) -> Result<(), StoreError> {
        self.records.retain(|r| r.timestamp >= cutoff);
        self.rewrite()
    }

    /// Drop everything
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        self.rewrite()
    }

    fn rewrite(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut out = String::new();
        for record in &self.records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        fs::write(&self.path, out)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn busy_state() -> DeviceState {
        DeviceState {
            audio_device_connected: true,
            charging: false,
            wifi_connected: true,
            mobile_data_connected: false,
            bluetooth_connected: true,
            brightness: 180,
        }
    }

    #[test]
    fn test_collector_copies_probe_state() {
        let collector = UsageCollector::new(FixedDeviceStateProbe(busy_state()));

        let record = collector.collect("com.example.music");

        assert_eq!(record.package_name, "com.example.music");
        assert!(record.audio_device_connected);
        assert!(!record.charging);
        assert!(record.wifi_connected);
        assert_eq!(record.brightness, 180);
    }

    #[test]
    fn test_null_probe_is_all_off() {
        let collector = UsageCollector::new(NullDeviceStateProbe);

        let record = collector.collect("com.example.mail");

        assert!(!record.audio_device_connected);
        assert!(!record.charging);
        assert_eq!(record.brightness, 0);
    }

    #[test]
    fn test_insert_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.jsonl");
        let collector = UsageCollector::new(NullDeviceStateProbe);

        {
            let mut log = UsageLog::open(&path);
            log.insert(collector.collect("com.example.a")).unwrap();
            log.insert(collector.collect("com.example.b")).unwrap();
            log.insert(collector.collect("com.example.a")).unwrap();
        }

        let log = UsageLog::open(&path);
        assert_eq!(log.records().len(), 3);
        assert_eq!(log.records_for("com.example.a").count(), 2);
        assert_eq!(log.records_for("com.example.b").count(), 1);
    }

    #[test]
    fn test_unreadable_lines_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.jsonl");

        {
            let mut log = UsageLog::open(&path);
            log.insert(UsageCollector::new(NullDeviceStateProbe).collect("com.example.a"))
                .unwrap();
        }
        fs::write(
            &path,
            format!("{}\nnot json\n", fs::read_to_string(&path).unwrap().trim()),
        )
        .unwrap();

        let log = UsageLog::open(&path);
        assert_eq!(log.records().len(), 1);
    }

    #[test]
    fn test_prune_before() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("usage.jsonl");
        let collector = UsageCollector::new(NullDeviceStateProbe);

        let mut log = UsageLog::open(&path);
        let mut old = collector.collect("com.example.old");
        old.timestamp = Utc::now() - Duration::days(30);
        log.insert(old).unwrap();
        log.insert(collector.collect("com.example.new")).unwrap();

        log.prune_before(Utc::now() - Duration::days(7)).unwrap();

        assert_eq!(log.records().len(), 1);
        assert_eq!(log.records()[0].package_name, "com.example.new");

        // The rewrite is durable
        let reloaded = UsageLog::open(&path);
        assert_eq!(reloaded.records().len(), 1);
    }
}
