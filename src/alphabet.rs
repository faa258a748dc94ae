/// Case normalization shared by index construction and solver queries.
/// Both sides must funnel through here; a corpus indexed with one
/// convention and queried with another would silently miss words.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}
