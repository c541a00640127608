/// Unique record identifier (the originating image file name).
/// Example: `frames/cam2_000173.png`
pub type RecordId = String;
/// Detector bounding box `[x, y, width, height]` carried through the
/// partition unexamined.
/// Example: `[412.0, 88.5, 64.0, 64.0]`
pub type BoundingBox = [f64; 4];
