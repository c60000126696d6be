/// A curated playlist on the music player screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub title: String,
    pub track_count: u16,
    pub duration: String,
    pub tracks: Vec<String>,
}
