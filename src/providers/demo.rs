use crate::core::Song;
use crate::error::Result;
use crate::providers::CatalogProvider;

/// Built-in party catalog
///
/// Stand-in for a real library integration; handy for the CLI, the server
/// default and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProvider;

const DEMO_SONGS: &[(&str, &str, &str, &str)] = &[
    // (id, title, artist, album)
    ("madonna_music_001", "Music", "Madonna", "Music"),
    ("madonna_material_001", "Material Girl", "Madonna", "Like a Virgin"),
    ("madonna_prayer_001", "Like a Prayer", "Madonna", "Like a Prayer"),
    ("madonna_vogue_001", "Vogue", "Madonna", "I'm Breathless"),
    ("queen_bohemian_001", "Bohemian Rhapsody", "Queen", "A Night at the Opera"),
    ("queen_dontstop_001", "Don't Stop Me Now", "Queen", "Jazz"),
    ("queen_rock_001", "We Will Rock You", "Queen", "News of the World"),
    ("queen_dust_001", "Another One Bites the Dust", "Queen", "The Game"),
    ("gnr_jungle_001", "Welcome to the Jungle", "Guns N' Roses", "Appetite for Destruction"),
    ("gnr_child_001", "Sweet Child O' Mine", "Guns N' Roses", "Appetite for Destruction"),
    ("darude_sandstorm_001", "Sandstorm", "Darude", "Before the Storm"),
    ("alice_alone_001", "Better Off Alone", "Alice Deejay", "Who Needs Guitars Anyway?"),
    ("ed_here_001", "I Am Here", "edhead76", "Collaborative Mix"),
    ("ed_collab_001", "Collaborative Mix Track", "edhead76", "I Am Here"),
    ("weeknd_lights_001", "Blinding Lights", "The Weeknd", "After Hours"),
    ("sheeran_shape_001", "Shape of You", "Ed Sheeran", "÷ (Divide)"),
    ("adele_someone_001", "Someone Like You", "Adele", "21"),
    ("adele_hello_001", "Hello", "Adele", "25"),
];

impl DemoProvider {
    pub fn songs() -> Vec<Song> {
        DEMO_SONGS
            .iter()
            .map(|(id, title, artist, album)| Song::new(*id, *title, *artist).with_album(*album))
            .collect()
    }
}

impl CatalogProvider for DemoProvider {
    fn load(&self) -> Result<Vec<Song>> {
        Ok(Self::songs())
    }

    fn name(&self) -> &str {
        "demo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let songs = DemoProvider.load().unwrap();
        assert_eq!(songs.len(), 18);
        assert_eq!(songs[0].title, "Music");
        assert_eq!(songs[4].artist.as_deref(), Some("Queen"));
        assert_eq!(songs[17].album.as_deref(), Some("25"));
    }
}
