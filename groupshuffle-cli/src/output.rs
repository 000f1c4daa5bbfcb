/// Output: console echo, JSON, and the playlist file.
use groupshuffle_core::{FairnessReport, Playlist, Song};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonSong<'a> {
    position: usize,
    title: &'a str,
    owner: &'a str,
    contributor: &'a str,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    songs: Vec<JsonSong<'a>>,
    contributors: &'a [String],
    songs_per_contributor: usize,
    dropped: usize,
    fairness: FairnessReport,
}

/// Print the final order, one "title by owner" per line.
pub fn print_list(playlist: &Playlist<Song>) {
    for song in playlist.items() {
        println!("{song}");
    }
}

/// Print the final order as JSON, with each song's contributor name.
pub fn print_json(playlist: &Playlist<Song>, names: &[String]) {
    println!("{}", render_json(playlist, names));
}

fn render_json(playlist: &Playlist<Song>, names: &[String]) -> String {
    let songs = playlist
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| JsonSong {
            position: i + 1,
            title: &entry.item.title,
            owner: &entry.item.owner,
            contributor: names.get(entry.contributor).map_or("", String::as_str),
        })
        .collect();

    let output = JsonOutput {
        songs,
        contributors: names,
        songs_per_contributor: playlist.songs_per_contributor(),
        dropped: playlist.dropped(),
        fairness: playlist.fairness(),
    };

    // Plain strings and integers only; serialization cannot fail.
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

/// File contents: `title,owner` lines, so the playlist can be fed back in.
fn render_lines(playlist: &Playlist<Song>) -> String {
    playlist.items().map(|song| song.to_line() + "\n").collect()
}

/// Create or overwrite `path` with the playlist.
pub fn write_playlist(path: &Path, playlist: &Playlist<Song>) -> std::io::Result<()> {
    std::fs::write(path, render_lines(playlist))
}
