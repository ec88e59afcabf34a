// This file exists solely to let the build script include cli.rs.
// The real type relies on the crate's error type and so on.

pub type DesktopFileId = String;
