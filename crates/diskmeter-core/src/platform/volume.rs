/// Volume usage statistics for the filesystem containing a path.
///
/// `statvfs` on Unix, `GetDiskFreeSpaceExW` on Windows. Captured once per
/// aggregation pass and embedded unmodified in the result.
use std::io;
use std::path::Path;

/// Total/used/free byte counts for one filesystem volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// Query usage statistics for the volume containing `path`.
#[cfg(unix)]
pub fn volume_usage(path: &Path) -> io::Result<VolumeUsage> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL byte"))?;

    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }

    let frsize = stat.f_frsize as u64;
    let total = stat.f_blocks as u64 * frsize;
    // Used counts all allocated blocks; free is what an unprivileged
    // caller could still write (excludes the root reserve).
    let used = (stat.f_blocks as u64).saturating_sub(stat.f_bfree as u64) * frsize;
    let free = stat.f_bavail as u64 * frsize;

    Ok(VolumeUsage { total, used, free })
}

/// Query usage statistics for the volume containing `path`.
#[cfg(windows)]
pub fn volume_usage(path: &Path) -> io::Result<VolumeUsage> {
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;

    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();

    let mut free_caller: u64 = 0;
    let mut total: u64 = 0;
    let mut free_total: u64 = 0;
    unsafe {
        GetDiskFreeSpaceExW(
            windows::core::PCWSTR(wide.as_ptr()),
            Some(&mut free_caller as *mut u64),
            Some(&mut total as *mut u64),
            Some(&mut free_total as *mut u64),
        )
    }
    .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(VolumeUsage {
        total,
        used: total.saturating_sub(free_total),
        free: free_caller,
    })
}
