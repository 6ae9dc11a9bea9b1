/// Mounted-drive enumeration for the frontend's drive picker.
///
/// Linux reads `/proc/mounts` and keeps device-backed filesystems;
/// Windows walks the logical drive strings; other platforms fall back to
/// the filesystem root. Enumeration is best-effort — a volume whose usage
/// cannot be queried is listed with zeroed statistics rather than omitted.
use super::volume::{volume_usage, VolumeUsage};
use std::path::PathBuf;

/// One mounted volume offered for scanning.
#[derive(Debug, Clone)]
pub struct DriveInfo {
    /// Mount point, e.g. "/" or "C:\".
    pub path: PathBuf,
    /// Usage statistics at enumeration time.
    pub usage: VolumeUsage,
}

/// Enumerate mounted local volumes.
///
/// Never fails: an unreadable mount table degrades to the root filesystem
/// so the frontend always has at least one candidate.
#[cfg(target_os = "linux")]
pub fn enumerate_drives() -> Vec<DriveInfo> {
    let mounts = match std::fs::read_to_string("/proc/mounts") {
        Ok(s) => s,
        Err(err) => {
            tracing::warn!("cannot read /proc/mounts: {err}");
            return vec![root_drive()];
        }
    };

    let mut seen_devices: Vec<String> = Vec::new();
    let mut drives: Vec<DriveInfo> = Vec::new();

    for line in mounts.lines() {
        let mut fields = line.split_whitespace();
        let (Some(device), Some(mount_point)) = (fields.next(), fields.next()) else {
            continue;
        };
        // Only block-device-backed filesystems; this drops proc, sysfs,
        // tmpfs, cgroup mounts and the like.
        if !device.starts_with("/dev/") {
            continue;
        }
        // One entry per device — bind mounts alias the first mount point.
        if seen_devices.iter().any(|d| d == device) {
            continue;
        }
        seen_devices.push(device.to_string());

        // Mount points with spaces are octal-escaped in /proc/mounts.
        let path = PathBuf::from(mount_point.replace("\\040", " "));
        let usage = volume_usage(&path).unwrap_or_default();
        drives.push(DriveInfo { path, usage });
    }

    if drives.is_empty() {
        drives.push(root_drive());
    }
    drives
}

/// Enumerate mounted local volumes.
#[cfg(windows)]
pub fn enumerate_drives() -> Vec<DriveInfo> {
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;
    use windows::Win32::Storage::FileSystem::{GetDriveTypeW, GetLogicalDriveStringsW};

    // Remote drives are excluded; their latencies make full-tree sizing
    // impractical from an interactive session.
    const DRIVE_REMOTE_VAL: u32 = 4;

    let mut buffer = [0u16; 256];
    let len = unsafe { GetLogicalDriveStringsW(Some(&mut buffer)) };
    if len == 0 {
        tracing::warn!("GetLogicalDriveStringsW returned 0");
        return Vec::new();
    }

    let full = OsString::from_wide(&buffer[..len as usize]);
    let full_str = full.to_string_lossy();

    let mut drives = Vec::new();
    for root in full_str.split('\0').filter(|s| !s.is_empty()) {
        let root_wide: Vec<u16> = root.encode_utf16().chain(std::iter::once(0)).collect();
        let raw_type = unsafe { GetDriveTypeW(windows::core::PCWSTR(root_wide.as_ptr())) };
        if raw_type == DRIVE_REMOTE_VAL {
            continue;
        }

        let path = PathBuf::from(root);
        let usage = volume_usage(&path).unwrap_or_default();
        drives.push(DriveInfo { path, usage });
    }
    drives
}

/// Enumerate mounted local volumes.
#[cfg(not(any(target_os = "linux", windows)))]
pub fn enumerate_drives() -> Vec<DriveInfo> {
    vec![root_drive()]
}

#[cfg(unix)]
fn root_drive() -> DriveInfo {
    let path = PathBuf::from("/");
    let usage = volume_usage(&path).unwrap_or_default();
    DriveInfo { path, usage }
}
