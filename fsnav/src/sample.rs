use fstree::OrderedIndex;
use tracing::debug;

pub const SAMPLE_DIRECTORIES: [&str; 6] = [
    "Documents",
    "Pictures",
    "Videos",
    "Music",
    "Downloads",
    "Projects",
];

pub const SAMPLE_FILES: [(&str, u64); 8] = [
    ("readme.txt", 2048),
    ("config.json", 1024),
    ("app.cs", 5120),
    ("photo.jpg", 2_048_000),
    ("song.mp3", 4_096_000),
    ("video.mp4", 52_428_800),
    ("document.pdf", 1_048_576),
    ("presentation.pptx", 3_145_728),
];

/// Adds the sample entries, skipping names already present. Returns how many
/// were created.
pub fn load_sample_data(index: &mut OrderedIndex) -> usize {
    let mut created = 0;
    for name in SAMPLE_DIRECTORIES {
        if index.create_directory(name) {
            created += 1;
        }
    }
    for (name, size) in SAMPLE_FILES {
        if index.create_file(name, size) {
            created += 1;
        }
    }
    debug!(created, "sample data loaded");
    created
}
