/// Platform-specific functionality — volume usage statistics and
/// mounted-drive enumeration.

pub mod drives;
pub mod volume;

pub use drives::{enumerate_drives, DriveInfo};
pub use volume::{volume_usage, VolumeUsage};
