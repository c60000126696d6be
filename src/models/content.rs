/// An educational article on the content screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub category: String,
    pub read_minutes: u8,
    pub summary: String,
    pub body: String,
}
